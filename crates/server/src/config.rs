use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

/// Returns the default data path based on build profile.
/// - Debug builds: `./data` (relative to project directory)
/// - Release builds: `/data` (absolute path for production)
pub fn default_data_path() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from("./data")
    }

    #[cfg(not(debug_assertions))]
    {
        PathBuf::from("/data")
    }
}

/// Parse a boolean flag from an environment value.
///
/// Accepts `1/0`, `true/false`, `yes/no`, `on/off`; anything else is `None`.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub env: Environment,
    pub data_path: PathBuf,
    pub database_url: String,
    pub max_connections: u32,
    /// Insert sample categories and questions into an empty database
    pub seed_data: bool,
}

impl Config {
    pub fn new(env: Environment, data_path: impl AsRef<Path>) -> Self {
        let data_path = data_path.as_ref().to_path_buf();
        let database_url = format!(
            "sqlite:{}?mode=rwc",
            data_path.join("trivia.db").display()
        );
        Self {
            env,
            data_path,
            database_url,
            max_connections: 5,
            seed_data: env.is_dev(),
        }
    }

    /// Use an explicit database URL instead of the file under `data_path`
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = database_url.into();
        self
    }

    pub fn with_seed_data(mut self, seed_data: bool) -> Self {
        self.seed_data = seed_data;
        self
    }
}

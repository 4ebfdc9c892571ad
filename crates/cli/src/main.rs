use trivia_server::{default_data_path, parse_flag, print_banner, Config, Environment};
use std::env;
use std::net::SocketAddr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    print_banner(env!("CARGO_PKG_VERSION"));

    let app_env = Environment::from_str(&env::var("APP_ENV").unwrap_or_default());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()?;
    let data_path = env::var("DATA_PATH")
        .unwrap_or_else(|_| default_data_path().to_string_lossy().to_string());

    let mut config = Config::new(app_env, &data_path);
    if let Ok(url) = env::var("DATABASE_URL") {
        config = config.with_database_url(url);
    }
    if let Some(seed) = env::var("SEED_DATA").ok().as_deref().and_then(parse_flag) {
        config = config.with_seed_data(seed);
    }

    tracing::info!(
        "Starting in {:?} mode, data path {}",
        config.env,
        config.data_path.display()
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    trivia_server::run_server(addr, config).await
}

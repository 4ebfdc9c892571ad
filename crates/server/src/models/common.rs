use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Integer field that clients may send as a JSON number or a numeric string.
///
/// The web client sends category ids as strings (`"1"`) from form inputs and
/// as numbers elsewhere; both are normalized to `i64` at the request boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseInt {
    /// Falsy values are `0`, `0.0` and the empty string
    pub fn is_truthy(&self) -> bool {
        match self {
            LooseInt::Int(n) => *n != 0,
            LooseInt::Float(f) => *f != 0.0,
            LooseInt::Text(s) => !s.is_empty(),
        }
    }

    /// Integer value, if the input has one.
    ///
    /// Floats must be whole and inside the `i64` range; strings are trimmed
    /// and parsed as base-10.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            LooseInt::Int(n) => Some(*n),
            // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
            LooseInt::Float(f)
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            LooseInt::Float(_) => None,
            LooseInt::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<i64> for LooseInt {
    fn from(n: i64) -> Self {
        LooseInt::Int(n)
    }
}

/// Rejection raised while turning a request body into a domain value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Field absent, null, or falsy
    #[error("missing required field: {0}")]
    Missing(&'static str),
    /// Field present but not usable, e.g. a non-numeric id
    #[error("invalid value for field: {0}")]
    Invalid(&'static str),
}

/// Require a truthy string field
pub fn require_text(value: Option<String>, field: &'static str) -> Result<String, InputError> {
    match value {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(InputError::Missing(field)),
    }
}

/// Require a truthy integer field
pub fn require_int(value: Option<&LooseInt>, field: &'static str) -> Result<i64, InputError> {
    let value = value
        .filter(|v| v.is_truthy())
        .ok_or(InputError::Missing(field))?;
    value.as_i64().ok_or(InputError::Invalid(field))
}

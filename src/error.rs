//! Launch Errors

use thiserror::Error;

/// Why the launch parameter could not be turned into a list
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("некоректне кодування base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("некоректні дані JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type LaunchResult<T> = Result<T, LaunchError>;

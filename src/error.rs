//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain core
//! @acp:layer utility

use thiserror::Error;

/// @acp:summary "Errors raised by the loader, config and strict RICE checks"
///
/// Document assembly itself never fails; these cover the I/O surface around it.
#[derive(Debug, Error)]
pub enum PrdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Input record must be a mapping of field names to values, found {0}")]
    NotAMapping(&'static str),

    #[error("Impact {0} is not on the RICE scale (0.25, 0.5, 1, 2, 3)")]
    InvalidImpact(f64),

    #[error("Unknown impact level: {0}")]
    UnknownImpactLevel(String),

    #[error("Unknown input format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, PrdError>;

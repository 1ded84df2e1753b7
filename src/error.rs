//! Dashboard error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while loading settings or writing dashboard output
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing an output file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_conversions() {
        let err: DashboardError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, DashboardError::Serialization(_)));

        let err: DashboardError = ConfigError::Parse {
            path: PathBuf::from("config.toml"),
            error: "bad".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}

//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("cannot parse config file `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("wikiator.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("wikiator.toml"));

        let validation_err = ConfigError::Validation("[wiki.repo] is empty".to_string());
        let display = format!("{validation_err}");
        assert!(display.contains("[wiki.repo] is empty"));
    }

    #[test]
    fn test_toml_error_names_file() {
        use std::error::Error as _;

        let toml_err = toml::from_str::<toml::Value>("[wiki").unwrap_err();
        let err = ConfigError::Toml(PathBuf::from("proj/wikiator.toml"), toml_err);
        assert_eq!(
            err.to_string(),
            "cannot parse config file `proj/wikiator.toml`"
        );
        assert!(err.source().is_some());
    }
}

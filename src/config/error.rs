//! Errors raised while reading or writing `config.yml`.

use std::io;
use std::path::PathBuf;

/// Ways loading or saving the configuration can fail.
///
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No configuration file location has been chosen")]
    FilePathNotSet,

    #[error("Cannot locate the home directory for the default configuration path")]
    HomeDirectoryNotFound,

    #[error("Cannot read {}: {source}", .path.display())]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("Cannot write {}: {source}", .path.display())]
    WriteFailed { path: PathBuf, source: io::Error },

    #[error("Cannot create directory {}: {source}", .path.display())]
    CreateDirectoryFailed { path: PathBuf, source: io::Error },

    /// The in-memory configuration could not be turned into YAML
    #[error("Cannot encode configuration: {0}")]
    Encode(#[source] serde_yaml::Error),

    /// The file is not a valid configuration document
    #[error("Malformed configuration: {0}")]
    Malformed(#[source] serde_yaml::Error),

    #[error("Low stock threshold must be a positive number, got {0}")]
    InvalidThreshold(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let error = ConfigError::WriteFailed {
            path: PathBuf::from("/etc/stock-tui/config.yml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.starts_with("Cannot write /etc/stock-tui/config.yml"));
        assert!(message.ends_with("denied"));
    }

    #[test]
    fn test_malformed_keeps_yaml_source() {
        let yaml_error = serde_yaml::from_str::<bool>("[not, a, bool]").unwrap_err();
        let error = ConfigError::Malformed(yaml_error);
        assert!(error.to_string().starts_with("Malformed configuration"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_invalid_threshold_message() {
        let error = ConfigError::InvalidThreshold(-3.0);
        assert_eq!(
            error.to_string(),
            "Low stock threshold must be a positive number, got -3"
        );
    }
}

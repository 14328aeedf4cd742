//! Top-level error type for startup and configuration.
//!
//! Each area keeps its own `thiserror` enum; `AppError` wraps them so the
//! entry points can use `?` across areas.

pub use crate::config::ConfigError;
pub use crate::state::StateError;

/// Any error the dashboard can surface before or around the event loop.
///
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected state transition, including validation failures
    #[error("State error: {0}")]
    State(#[from] StateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed
    #[error("Logger error: {0}")]
    Logger(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ValidationError;

    #[test]
    fn test_config_errors_convert() {
        let app_error: AppError = ConfigError::InvalidThreshold(0.0).into();
        assert!(matches!(
            app_error,
            AppError::Config(ConfigError::InvalidThreshold(_))
        ));
        assert_eq!(
            app_error.to_string(),
            "Configuration error: Low stock threshold must be a positive number, got 0"
        );
    }

    #[test]
    fn test_validation_message_survives_wrapping() {
        let app_error: AppError = StateError::from(ValidationError::MissingField).into();
        assert_eq!(app_error.to_string(), "State error: Please fill all fields");
    }

    #[test]
    fn test_io_errors_convert() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no terminal");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert_eq!(app_error.to_string(), "I/O error: no terminal");
    }

    #[test]
    fn test_logger_error_message() {
        let error = AppError::Logger("already set".to_string());
        assert_eq!(error.to_string(), "Logger error: already set");
    }
}

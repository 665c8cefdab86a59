use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FlutterbotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("gateway.model must not be empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: gateway.model must not be empty"
        );
    }

    #[test]
    fn flutterbot_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: FlutterbotError = config_err.into();
        assert!(matches!(err, FlutterbotError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn flutterbot_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FlutterbotError = io_err.into();
        assert!(matches!(err, FlutterbotError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn flutterbot_error_other_variants() {
        let err = FlutterbotError::Ai("turn task panicked".into());
        assert_eq!(err.to_string(), "ai error: turn task panicked");

        let err = FlutterbotError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}

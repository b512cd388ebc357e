use thiserror::Error;

/// Errors raised while constructing or configuring rapport components.
///
/// Normal store and engine operations never return these; unknown users,
/// capacity overflow and empty retrievals are all handled in place.
#[derive(Error, Debug)]
pub enum RapportError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid personality profile: {0}")]
    InvalidProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RapportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RapportError::Config("RAPPORT_LONG_TERM_CAPACITY must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "Config error: RAPPORT_LONG_TERM_CAPACITY must be > 0"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{oops");
        let err: RapportError = parse.unwrap_err().into();
        assert!(matches!(err, RapportError::Json(_)));
    }
}

//! Error type definitions

use thiserror::Error;

/// Error type shared by the CLI and the web form.
///
/// `Validation` and `Api` carry user-facing messages and display without a
/// prefix so they can be shown verbatim.
#[derive(Error, Debug)]
pub enum Error {
    /// The selected file was rejected before upload
    #[error("{0}")]
    Validation(String),

    /// The classification service failed or could not be reached
    #[error("{0}")]
    Api(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_displays_message_verbatim() {
        let error = Error::Validation("Images must be 10MB or smaller.".to_string());
        assert_eq!(format!("{}", error), "Images must be 10MB or smaller.");
    }

    #[test]
    fn test_api_displays_message_verbatim() {
        let error = Error::Api("model unavailable".to_string());
        assert_eq!(format!("{}", error), "model unavailable");
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Validation("bad file".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Validation"));
        assert!(debug.contains("bad file"));
    }
}

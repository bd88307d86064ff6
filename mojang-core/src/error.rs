//! Error types for the Mojang API helpers.
//!
//! Every error category is unified into a single `MjError` enum with
//! conversions from underlying library errors.

use thiserror::Error;

/// Convenience type alias for Results using MjError.
pub type MjResult<T> = Result<T, MjError>;

/// Unified error type for the Mojang API helpers.
#[derive(Error, Debug)]
pub enum MjError {
    // -- Response errors --
    /// The response body could not be parsed as JSON.
    #[error("response must contain JSON data: {0}")]
    MalformedBody(String),

    /// The parsed JSON is neither an object nor an array of objects.
    #[error("unsupported JSON shape: {0}")]
    UnsupportedShape(String),

    /// A field looked up by name is not present in the wrapped object.
    #[error("field not found: {0}")]
    MissingField(String),

    /// A field exists but holds a value of a different type.
    #[error("field `{field}` is not {expected}")]
    FieldType {
        /// Name of the offending field.
        field: String,
        /// Description of the expected type.
        expected: String,
    },

    // -- Endpoint errors --
    /// A `{placeholder}` in an endpoint URL was left unfilled.
    #[error("missing url parameter: {0}")]
    MissingUrlParam(String),

    // -- Transport adapter errors --
    /// Reading an HTTP response failed.
    #[error("http error: {0}")]
    Http(String),

    // -- Configuration errors --
    /// Failed to load or parse configuration.
    #[error("configuration error: {0}")]
    Config(String),

    // -- File/IO errors --
    /// File system operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl MjError {
    /// Whether this error came from classifying a response body.
    pub fn is_response_error(&self) -> bool {
        matches!(
            self,
            MjError::MalformedBody(_) | MjError::UnsupportedShape(_)
        )
    }
}

impl From<toml::de::Error> for MjError {
    fn from(e: toml::de::Error) -> Self {
        MjError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MjError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "configuration error: bad value");

        let err = MjError::FieldType {
            field: "id".into(),
            expected: "a string".into(),
        };
        assert_eq!(err.to_string(), "field `id` is not a string");
    }

    #[test]
    fn test_response_error_classification() {
        assert!(MjError::MalformedBody("eof".into()).is_response_error());
        assert!(MjError::UnsupportedShape("number".into()).is_response_error());
        assert!(!MjError::MissingField("name".into()).is_response_error());
    }

    #[test]
    fn test_from_toml_error() {
        let err: MjError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, MjError::Config(_)));
    }
}

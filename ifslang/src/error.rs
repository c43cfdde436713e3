//! All error types for the ifslang crate.
//!
//! These are returned from the fallible library operations (reading the XML
//! export, writing generated files, loading dictionaries). Structural findings
//! about `.lng`/`.trs` content are not errors: the validator collects them in a
//! [`crate::validator::ValidationReport`] instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown file kind `{0}`")]
    UnknownFileKind(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("translation error: {message}")]
    Translation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new translation error with optional source error
    pub fn translation_error(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Translation {
            message: message.into(),
            source,
        }
    }

    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_unknown_file_kind_error() {
        let error = Error::UnknownFileKind(".txt".to_string());
        assert_eq!(error.to_string(), "unknown file kind `.txt`");
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_invalid_resource_error() {
        let error = Error::InvalidResource("root element missing 'module'".to_string());
        assert_eq!(
            error.to_string(),
            "invalid resource: root element missing 'module'"
        );
    }

    #[test]
    fn test_translation_error_with_source() {
        let source_error = Box::new(io::Error::new(io::ErrorKind::NotFound, "Source error"));
        let error = Error::translation_error("Dictionary unavailable", Some(source_error));
        assert!(
            error
                .to_string()
                .contains("translation error: Dictionary unavailable")
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_translation_error_without_source() {
        let error = Error::translation_error("Backend failed", None);
        assert!(std::error::Error::source(&error).is_none());
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation_error("2 errors in Esspro_LU_LogicalUnit-Cust.lng");
        assert_eq!(
            error.to_string(),
            "validation error: 2 errors in Esspro_LU_LogicalUnit-Cust.lng"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownFileKind("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownFileKind"));
        assert!(debug.contains("test"));
    }
}

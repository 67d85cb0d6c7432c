//! Error types for the converter

use thiserror::Error;

/// Errors that abort a conversion
///
/// Field-level anomalies never surface here; extractors absorb them into
/// their default values. Only the conditions below fail a conversion, and
/// they fail it as a whole.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// An embedded markup fragment is present but not well-formed
    #[error("Markup parse error in {field}: {message}")]
    MarkupParse {
        /// Source field holding the fragment (e.g. `article_html`)
        field: String,
        /// Parser diagnostic
        message: String,
    },

    /// A field is present but cannot be coerced to the required type
    #[error("Type coercion error in {field}: cannot convert {value} to an integer")]
    TypeCoercion {
        /// Source field name
        field: String,
        /// Offending value as JSON text
        value: String,
    },

    /// The document writer failed
    #[error("Document error: {0}")]
    Document(String),

    /// Invalid converter configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConvertError {
    /// Create a markup error for a named source field
    pub fn markup(field: impl Into<String>, message: impl ToString) -> Self {
        ConvertError::MarkupParse {
            field: field.into(),
            message: message.to_string(),
        }
    }

    /// Name of the source field that failed, if the error is field-bound
    pub fn field(&self) -> Option<&str> {
        match self {
            ConvertError::MarkupParse { field, .. } | ConvertError::TypeCoercion { field, .. } => {
                Some(field)
            }
            ConvertError::Document(_) | ConvertError::Config(_) => None,
        }
    }
}

impl From<quick_xml::Error> for ConvertError {
    fn from(e: quick_xml::Error) -> Self {
        ConvertError::Document(e.to_string())
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(e: std::io::Error) -> Self {
        ConvertError::Document(e.to_string())
    }
}

/// Result alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

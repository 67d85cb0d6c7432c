//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Conversion error
    #[error("Conversion failed for {input}: {source}")]
    Convert {
        /// Input the record was read from
        input: String,
        /// Underlying conversion error
        #[source]
        source: newsmlg2_convert::ConvertError,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Conversion failure attributed to the input it was read from.
    pub fn convert(input: impl Into<String>, source: newsmlg2_convert::ConvertError) -> Self {
        CliError::Convert {
            input: input.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsmlg2_convert::ConvertError;
    use std::error::Error;

    #[test]
    fn test_convert_error_names_input() {
        let err = CliError::convert("story.json", ConvertError::Document("sink closed".to_string()));

        assert_eq!(err.to_string(), "Conversion failed for story.json: Document error: sink closed");
        assert!(err.source().is_some());
    }
}

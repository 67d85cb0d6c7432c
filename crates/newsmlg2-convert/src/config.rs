//! Configuration for the converter

use serde::{Deserialize, Serialize};

/// Default generator name written to `itemMeta/generator`
pub const DEFAULT_GENERATOR_NAME: &str = "dpa-digitalwires-to-newsmlg2";

/// Default generator role qcode
pub const DEFAULT_GENERATOR_ROLE: &str = "dnlgenerator:dw2newsmlg2";

/// IPTC catalog referenced by every emitted document
pub const DEFAULT_CATALOG_HREF: &str =
    "http://www.iptc.org/std/catalog/catalog.IPTC-G2-Standards_38.xml";

const MAX_INDENT: usize = 8;

/// Identity of the conversion tool, emitted as the static `generator` triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Tool name
    pub name: String,

    /// Role qcode
    pub role: String,

    /// Tool version
    pub version: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_GENERATOR_NAME.to_string(),
            role: DEFAULT_GENERATOR_ROLE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Layout options for the emitted NewsML-G2 document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Spaces per nesting level; `0` writes a compact document
    pub indent: usize,

    /// Value of the `standardversion` attribute
    pub standard_version: String,

    /// Catalog reference URL
    pub catalog_href: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            standard_version: "2.32".to_string(),
            catalog_href: DEFAULT_CATALOG_HREF.to_string(),
        }
    }
}

/// Configuration for the converter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Generator identity
    pub generator: GeneratorConfig,

    /// Document layout
    pub document: DocumentConfig,
}

impl ConverterConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.generator.name.trim().is_empty() {
            return Err("generator.name must not be empty".to_string());
        }
        if self.generator.role.trim().is_empty() {
            return Err("generator.role must not be empty".to_string());
        }
        if self.generator.version.trim().is_empty() {
            return Err("generator.version must not be empty".to_string());
        }
        if self.document.standard_version.trim().is_empty() {
            return Err("document.standard_version must not be empty".to_string());
        }
        if self.document.indent > MAX_INDENT {
            return Err(format!("document.indent cannot exceed {}", MAX_INDENT));
        }
        Ok(())
    }

    /// Compact preset: no indentation in emitted documents
    pub fn compact() -> Self {
        Self {
            document: DocumentConfig {
                indent: 0,
                ..DocumentConfig::default()
            },
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConverterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generator.name, "dpa-digitalwires-to-newsmlg2");
        assert_eq!(config.generator.role, "dnlgenerator:dw2newsmlg2");
        assert_eq!(config.document.indent, 2);
    }

    #[test]
    fn test_compact_config_is_valid() {
        let config = ConverterConfig::compact();
        assert!(config.validate().is_ok());
        assert_eq!(config.document.indent, 0);
    }

    #[test]
    fn test_empty_generator_name_rejected() {
        let mut config = ConverterConfig::default();
        config.generator.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_indent_too_large_rejected() {
        let mut config = ConverterConfig::default();
        config.document.indent = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ConverterConfig::from_toml("[document]\nindent = 4\n").unwrap();
        assert_eq!(config.document.indent, 4);
        assert_eq!(config.document.standard_version, "2.32");
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_invalid_toml_reports_error() {
        let err = ConverterConfig::from_toml("[document\nindent = 4").unwrap_err();
        assert!(err.starts_with("Failed to parse TOML"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ConverterConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ConverterConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }
}

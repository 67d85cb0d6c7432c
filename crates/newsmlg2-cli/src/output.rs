//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use colored::*;
use newsmlg2_convert::{G2DocumentWriter, NewsItemFields, Record};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// One row of the `inspect` summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Input name
    pub input: String,
    /// Item URN
    pub urn: String,
    /// Item class qcode
    pub item_class: String,
    /// Whether the item is a text message
    pub is_text: bool,
    /// Item version
    pub version: i64,
    /// Headline
    pub headline: Option<String>,
    /// Number of subjects
    pub subjects: usize,
    /// Number of item-meta links
    pub links: usize,
    /// Number of points of interest
    pub pois: usize,
}

impl Summary {
    /// Summarize a record and the fields assembled from it.
    pub fn new(input: impl Into<String>, record: &Record, fields: &NewsItemFields) -> Self {
        Self {
            input: input.into(),
            urn: fields.urn.clone(),
            item_class: fields.item_class.qcode.clone(),
            is_text: record.is_text_message(),
            version: fields.version,
            headline: fields.headline.clone(),
            subjects: fields.subjects.len(),
            links: fields.association_links.len(),
            pois: fields.pois.len(),
        }
    }
}

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Render the fields assembled from `input` in the requested format.
    pub fn document(
        &self,
        input: &str,
        fields: &NewsItemFields,
        format: OutputFormat,
        writer: &G2DocumentWriter,
    ) -> Result<String> {
        match format {
            OutputFormat::Xml => writer.write(fields).map_err(|source| CliError::convert(input, source)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(fields)?),
        }
    }

    /// Format inspection summaries as a table.
    pub fn summaries(&self, summaries: &[Summary]) -> String {
        if summaries.is_empty() {
            return self.colorize("No documents inspected.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Input", "URN", "Class", "Text", "Version", "Headline", "Subjects", "Links", "POIs"]);

        for summary in summaries {
            builder.push_record([
                summary.input.clone(),
                summary.urn.clone(),
                summary.item_class.clone(),
                if summary.is_text { "yes" } else { "no" }.to_string(),
                summary.version.to_string(),
                summary.headline.clone().unwrap_or_default(),
                summary.subjects.to_string(),
                summary.links.to_string(),
                summary.pois.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a written-file notice.
    pub fn written(&self, input: &str, path: &str) -> String {
        self.success(&format!("{} → {}", input, path))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsmlg2_convert::{convert_record, ConverterConfig};
    use serde_json::json;

    fn story() -> Record {
        Record::from_value(json!({
            "urn": "urn:newsml:dpa.com:1",
            "headline": "Hafen meldet Rekordumschlag",
        }))
        .unwrap()
    }

    fn fields() -> NewsItemFields {
        convert_record(&story(), &ConverterConfig::default()).unwrap()
    }

    #[test]
    fn test_xml_document() {
        let formatter = Formatter::new(false);
        let output = formatter
            .document("story.json", &fields(), OutputFormat::Xml, &G2DocumentWriter::default())
            .unwrap();
        assert!(output.starts_with("<?xml"));
    }

    #[test]
    fn test_json_document() {
        let formatter = Formatter::new(false);
        let output = formatter
            .document("story.json", &fields(), OutputFormat::Json, &G2DocumentWriter::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["urn"], "urn:newsml:dpa.com:1");
    }

    #[test]
    fn test_summary_table() {
        let formatter = Formatter::new(false);
        let summary = Summary::new("story.json", &story(), &fields());
        assert!(summary.is_text);

        let output = formatter.summaries(&[summary]);
        assert!(output.contains("Headline"));
        assert!(output.contains("ninat:text"));
    }

    #[test]
    fn test_summary_text_flag_follows_item_kind() {
        let video = Record::from_value(json!({
            "urn": "urn:newsml:dpa.com:2",
            "associations": [{"urn": "urn:video:1", "type": "video"}],
        }))
        .unwrap();
        let fields = convert_record(&video, &ConverterConfig::default()).unwrap();

        let summary = Summary::new("clip.json", &video, &fields);
        assert!(!summary.is_text);
        assert_eq!(summary.item_class, "ninat:video");
    }

    #[test]
    fn test_empty_summaries() {
        let formatter = Formatter::new(false);
        assert!(formatter.summaries(&[]).contains("No documents inspected"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("bad"), "✗ bad");
    }
}

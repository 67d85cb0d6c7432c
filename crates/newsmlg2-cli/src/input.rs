//! Reading digitalwires documents from files or stdin.

use crate::error::{CliError, Result};
use newsmlg2_convert::Record;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Name used for standard input.
pub const STDIN: &str = "-";

/// One parsed input document.
#[derive(Debug, Clone)]
pub struct Input {
    /// Source name (file path or `-`)
    pub name: String,

    /// Parsed record
    pub record: Record,
}

impl Input {
    /// Whether the document was read from stdin.
    pub fn is_stdin(&self) -> bool {
        self.name == STDIN
    }

    /// File stem used to name per-input output files.
    pub fn stem(&self) -> String {
        if self.is_stdin() {
            return "stdin".to_string();
        }
        Path::new(&self.name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string())
    }
}

/// Parse JSON text into a record; the document must be a mapping.
pub fn parse_record(name: &str, text: &str) -> Result<Record> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Record::from_value(value).ok_or_else(|| {
        CliError::InvalidInput(format!("{} does not contain a JSON object", name))
    })
}

/// Read every named input; no names (or `-`) means stdin.
pub fn read_inputs(names: &[String]) -> Result<Vec<Input>> {
    if names.is_empty() {
        return Ok(vec![read_input(STDIN)?]);
    }
    names.iter().map(|name| read_input(name)).collect()
}

fn read_input(name: &str) -> Result<Input> {
    let text = if name == STDIN {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(name)?
    };

    Ok(Input {
        name: name.to_string(),
        record: parse_record(name, &text)?,
    })
}

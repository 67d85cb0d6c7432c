//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::input::{read_inputs, Input};
use crate::output::Formatter;
use newsmlg2_convert::{G2Converter, G2DocumentWriter};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute the convert command.
pub fn execute_convert(args: ConvertArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let inputs = read_inputs(&args.inputs)?;
    if inputs.len() > 1 && args.out_dir.is_none() {
        return Err(CliError::InvalidInput(
            "Multiple inputs require --out-dir".to_string(),
        ));
    }

    let format = args.format.map(Into::into).unwrap_or(config.settings.format);
    let mut converter_config = config.converter.clone();
    if args.compact {
        converter_config.document.indent = 0;
    }
    let converter = G2Converter::new(converter_config).map_err(|e| CliError::Config(e.to_string()))?;
    let writer = G2DocumentWriter::new(converter.config().document.clone());

    for input in &inputs {
        let document = convert_one(input, &converter, &writer, format, formatter)?;
        match (&args.out_dir, &args.output) {
            (Some(dir), _) => {
                let path = output_path(dir, input, format);
                write_file(&path, &document)?;
                eprintln!("{}", formatter.written(&input.name, &path.display().to_string()));
            }
            (None, Some(path)) => {
                write_file(path, &document)?;
                eprintln!("{}", formatter.written(&input.name, &path.display().to_string()));
            }
            (None, None) => println!("{}", document),
        }
    }

    Ok(())
}

fn convert_one(
    input: &Input,
    converter: &G2Converter,
    writer: &G2DocumentWriter,
    format: OutputFormat,
    formatter: &Formatter,
) -> Result<String> {
    debug!("Converting {}", input.name);
    let fields = converter
        .assemble(&input.record)
        .map_err(|source| CliError::convert(&input.name, source))?;
    formatter.document(&input.name, &fields, format, writer)
}

/// Path of the output file for one input inside `dir`.
pub fn output_path(dir: &Path, input: &Input, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}.{}", input.stem(), format.extension()))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

//! Inspect command implementation.

use crate::cli::InspectArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::read_inputs;
use crate::output::{Formatter, Summary};
use newsmlg2_convert::G2Converter;

/// Execute the inspect command.
pub fn execute_inspect(args: InspectArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let summaries = collect_summaries(&args.inputs, config)?;
    println!("{}", formatter.summaries(&summaries));
    println!("{}", formatter.info(&format!("{} document(s) inspected", summaries.len())));
    Ok(())
}

/// Assemble every input and summarize the result.
pub fn collect_summaries(inputs: &[String], config: &Config) -> Result<Vec<Summary>> {
    let converter = G2Converter::new(config.converter.clone()).map_err(|e| CliError::Config(e.to_string()))?;

    read_inputs(inputs)?
        .iter()
        .map(|input| {
            let fields = converter
                .assemble(&input.record)
                .map_err(|source| CliError::convert(&input.name, source))?;
            Ok(Summary::new(input.name.clone(), &input.record, &fields))
        })
        .collect()
}

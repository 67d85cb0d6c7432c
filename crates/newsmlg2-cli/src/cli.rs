//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// newsmlg2 - Convert dpa digitalwires JSON into IPTC NewsML-G2.
#[derive(Debug, Parser)]
#[command(name = "newsmlg2")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NEWSMLG2_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log conversion details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// NewsML-G2 XML document
    Xml,
    /// Field mapping as pretty-printed JSON
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert digitalwires documents to NewsML-G2
    Convert(ConvertArgs),

    /// Summarize digitalwires documents without writing output
    Inspect(InspectArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Input files; reads stdin when omitted or `-`
    pub inputs: Vec<String>,

    /// Output file (single input only)
    #[arg(short, long, conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Directory receiving one `<stem>.xml` (or `.json`) per input
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Write a compact document without indentation
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the inspect command.
#[derive(Debug, Parser)]
pub struct InspectArgs {
    /// Input files; reads stdin when omitted or `-`
    pub inputs: Vec<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file location
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Xml => crate::config::OutputFormat::Xml,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_command() {
        let cli = Cli::parse_from(["newsmlg2", "convert", "story.json", "-o", "story.xml"]);
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.inputs, vec!["story.json".to_string()]);
                assert_eq!(args.output, Some(PathBuf::from("story.xml")));
                assert!(args.format.is_none());
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_output_conflicts_with_out_dir() {
        let result = Cli::try_parse_from(["newsmlg2", "convert", "a.json", "-o", "a.xml", "--out-dir", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["newsmlg2", "inspect", "--no-color", "-v", "a.json", "b.json"]);
        assert!(cli.no_color);
        assert!(cli.verbose);
        match cli.command {
            Command::Inspect(args) => assert_eq!(args.inputs.len(), 2),
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["newsmlg2", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs { action: ConfigAction::Init { force: true } })
        ));
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);
    }
}

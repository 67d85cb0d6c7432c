//! newsmlg2 CLI - Convert dpa digitalwires JSON into IPTC NewsML-G2.

use clap::Parser;
use newsmlg2_cli::commands;
use newsmlg2_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", Formatter::new(false).error(&e.to_string()));
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only documents; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&path)?;

    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(color_enabled);

    match cli.command {
        Command::Convert(args) => commands::execute_convert(args, &config, &formatter)?,
        Command::Inspect(args) => commands::execute_inspect(args, &config, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &path, &formatter)?,
    }

    Ok(())
}

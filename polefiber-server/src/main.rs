//! `polefiber` - plan fiber runs between marked utility poles

use std::path::PathBuf;

use clap::Parser;
use polefiber_server::commands::{self, Command};
use polefiber_server::logging::init_logging;
use polefiber_server::{AppConfig, CliError};

#[derive(Parser)]
#[command(name = "polefiber")]
#[command(about = "Fiber type, installation and cost planning for chains of utility poles", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./polefiber.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug details, including every connection
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        err.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.verbose)?;
    let config = AppConfig::load(cli.config.as_deref())?;
    commands::run(cli.command, config)
}

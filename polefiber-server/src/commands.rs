//! Command handlers for the `polefiber` binary

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use polefiber_core::render::{render_dot, render_legend, render_text};
use polefiber_core::{InstallationMethod, InstallationPlan, PointSourceConfig, plan, read_points};

use crate::config::AppConfig;
use crate::error::CliError;
use crate::prompt::prompt_methods;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process marked poles: distances, fiber types and costs
    Plan(PlanArgs),
    /// Serve the planning API over HTTP
    Serve(ServeArgs),
    /// Print fiber types, colors and prices
    Legend,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// GeoJSON file with the marked poles (defaults to the configured input path)
    pub input: Option<PathBuf>,

    /// Installation method for every connection
    #[arg(long, value_parser = parse_method, conflicts_with_all = ["methods", "interactive"])]
    pub method: Option<InstallationMethod>,

    /// Comma-separated installation method per connection, e.g. `aerial,underground`
    #[arg(long, value_delimiter = ',', value_parser = parse_method, conflicts_with = "interactive")]
    pub methods: Option<Vec<InstallationMethod>>,

    /// Ask for the installation method of each connection
    #[arg(long)]
    pub interactive: bool,

    /// Fail on features that are not points instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Write a Graphviz diagram of the chain
    #[arg(long)]
    pub dot: Option<PathBuf>,

    /// Write the annotated chain as GeoJSON
    #[arg(long)]
    pub geojson: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the configuration)
    #[arg(long)]
    pub bind: Option<String>,
}

fn parse_method(value: &str) -> Result<InstallationMethod, String> {
    value.parse().map_err(|e: polefiber_core::Error| e.to_string())
}

pub fn run(command: Command, config: AppConfig) -> Result<(), CliError> {
    match command {
        Command::Plan(args) => run_plan(args, &config),
        Command::Serve(args) => run_serve(args, config),
        Command::Legend => {
            println!("{}", render_legend(&config.cost_table()?));
            Ok(())
        }
    }
}

fn run_plan(args: PlanArgs, config: &AppConfig) -> Result<(), CliError> {
    let source = PointSourceConfig {
        path: args.input.clone().unwrap_or_else(|| config.input.path.clone()),
        strict: args.strict || config.input.strict,
    };
    let table = config.cost_table()?;
    let points = read_points(&source)?;

    let installation = if let Some(methods) = args.methods {
        InstallationPlan::PerConnection(methods)
    } else if args.interactive {
        let stdin = io::stdin();
        InstallationPlan::PerConnection(prompt_methods(&points, stdin.lock(), io::stdout())?)
    } else {
        InstallationPlan::Uniform(args.method.unwrap_or(config.default_method))
    };

    let report = plan(&points, &installation, &table)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::Output(e.to_string()))?;
        println!("{json}");
    } else {
        println!("{}", render_text(&report));
    }

    if let Some(path) = &args.dot {
        write_output(path, &render_dot(&report))?;
        tracing::info!("Wrote diagram to {}", path.display());
    }
    if let Some(path) = &args.geojson {
        write_output(path, &report.to_geojson_string()?)?;
        tracing::info!("Wrote annotated chain to {}", path.display());
    }

    tracing::info!("Processed {} poles", report.chain.pole_count());
    Ok(())
}

fn run_serve(args: ServeArgs, mut config: AppConfig) -> Result<(), CliError> {
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Serve)?;
    runtime.block_on(crate::api::serve(&config))
}

fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|source| CliError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

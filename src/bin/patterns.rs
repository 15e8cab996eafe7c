use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::debug;

use design_patterns::{run_selected, Demo, RunConfig};

#[derive(Parser)]
#[command(
    name = "patterns",
    about = "Gang-of-Four design pattern walkthroughs",
    version
)]
struct Cli {
    /// Demos to run (e.g. `iterator`, `strategy`, `all`); defaults to the iterator demo
    demos: Vec<String>,

    /// Load run settings from a TOML or JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List the available demos and exit
    #[arg(short, long)]
    list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> design_patterns::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        for demo in Demo::ALL {
            writeln!(out, "{:<18} {}", demo.name().green(), demo.summary())?;
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            RunConfig::load(path)?
        }
        None => RunConfig::default(),
    }
    .with_cli_demos(cli.demos);

    run_selected(&mut out, &config)
}

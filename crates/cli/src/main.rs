use clap::Parser;
use fnlab::{demos, logging};
use std::io::{self, Write};
use tracing::info;

#[derive(Parser)]
#[command(name = "fnlab")]
#[command(about = "Prints a report of functional programming idioms", long_about = None)]
#[command(version)]
struct Cli {
    /// List the demo labels instead of running them
    #[arg(long)]
    list: bool,

    /// Run only the demo with this label (repeatable, case-insensitive)
    #[arg(long, value_name = "LABEL")]
    only: Vec<String>,

    /// Log at debug level on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    logging::init(cli.verbose).map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;

    let registry = demos::registry();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        for label in registry.labels() {
            writeln!(out, "{label}")?;
        }
        return Ok(());
    }

    let registry = if cli.only.is_empty() {
        registry
    } else {
        registry.select(&cli.only)?
    };

    info!(demos = registry.len(), "running report");
    registry.run(&mut out)?;

    Ok(())
}

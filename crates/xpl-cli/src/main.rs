use clap::Parser;
use xpl_config::{ConfigError, DbConfig};

mod cli;
mod commands;
mod context;
mod output;

/// `EX_CONFIG` from sysexits.h.
const EX_CONFIG: i32 = 78;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("xpload error: {error:#}");
        if error.downcast_ref::<ConfigError>().is_some() {
            std::process::exit(EX_CONFIG);
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = DbConfig::resolve_with_dotenv(&flags.config)?;
    let ctx = context::AppContext::init(config)?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("XPLOAD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

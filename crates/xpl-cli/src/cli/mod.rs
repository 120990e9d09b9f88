use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `xpload` binary.
#[derive(Debug, Parser)]
#[command(
    name = "xpload",
    version,
    about = "xpload - calibration payload metadata client"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config name or path (defaults to XPLOAD_CONFIG_NAME, then "test")
    #[arg(short, long, global = true, default_value = "")]
    pub config: String,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            config: self.config.clone(),
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

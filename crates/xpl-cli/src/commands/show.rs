use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `xpload show`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entries = ctx
        .client
        .fetch_collection(&args.component, args.id)
        .await
        .with_context(|| format!("failed to read {}", args.component))?;

    if !flags.quiet {
        eprintln!("Found {} entries", entries.len());
    }
    output(&entries, flags.format)
}

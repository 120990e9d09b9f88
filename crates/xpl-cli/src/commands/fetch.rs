use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FetchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `xpload fetch`.
pub async fn handle(args: &FetchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let payloads = ctx
        .client
        .fetch_payloads(&args.tag, args.timestamp)
        .await
        .with_context(|| format!("failed to fetch payloads for tag '{}'", args.tag))?;

    if !flags.quiet {
        eprintln!("Found {} entries", payloads.len());
    }
    output(&payloads, flags.format)
}

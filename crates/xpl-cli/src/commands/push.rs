use xpl_push::Reconciler;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PushArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `xpload push`.
pub async fn handle(args: &PushArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reconciler = Reconciler::new(&ctx.client, ctx.config.on_read_error);
    let report = reconciler
        .push(&args.tag, &args.domain, &args.payload, args.start)
        .await?;

    if !flags.quiet {
        eprintln!(
            "Pushed {} to {}/{}: {} of 4 records created",
            args.payload,
            args.tag,
            args.domain,
            report.created_count()
        );
    }
    output(&report, flags.format)
}

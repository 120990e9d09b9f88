use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::Push(args) => commands::push::handle(&args, ctx, flags).await,
        Commands::Fetch(args) => commands::fetch::handle(&args, ctx, flags).await,
    }
}

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show entries of a collection.
    Show(ShowArgs),
    /// Insert a payload, creating its tag, domain, and domain list as needed.
    Push(PushArgs),
    /// Fetch payload intervals of a tag at a timestamp.
    Fetch(FetchArgs),
}

/// Arguments for `xpload show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Collection to list: tags, domains, domain_lists, payloads.
    pub component: String,
    /// Unique id of a single entry.
    #[arg(long)]
    pub id: Option<i64>,
}

/// Arguments for `xpload push`.
#[derive(Clone, Debug, Args)]
pub struct PushArgs {
    /// Tag for the payload file.
    pub tag: String,
    /// Domain of the payload file.
    pub domain: String,
    /// Payload file name.
    pub payload: String,
    /// Start of the interval when the payload applies.
    #[arg(short, long, default_value_t = 0)]
    pub start: u64,
}

/// Arguments for `xpload fetch`.
#[derive(Clone, Debug, Args)]
pub struct FetchArgs {
    /// Tag for the payload file.
    pub tag: String,
    /// Timestamp of the data to find payloads for.
    pub timestamp: u64,
}

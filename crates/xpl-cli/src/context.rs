use anyhow::Context;
use xpl_client::XploadClient;
use xpl_config::DbConfig;

/// Resolved configuration plus the client built from it.
pub struct AppContext {
    pub config: DbConfig,
    pub client: XploadClient,
}

impl AppContext {
    pub fn init(config: DbConfig) -> anyhow::Result<Self> {
        let client = XploadClient::from_config(&config).context("failed to build HTTP client")?;
        tracing::debug!(url = client.base_url(), "using calibration service");
        Ok(Self { config, client })
    }
}

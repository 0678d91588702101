use std::sync::Arc;

use coinlist_data::global::{get_config, init_config, ProviderKind};
use coinlist_data::infra::external::cgecko::CoinGeckoProvider;
use coinlist_data::infra::provider::CoinProvider;
use coinlist_data::infra::snapshot::SnapshotProvider;
use coinlist_data::server::{self, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    init_config();
    let config = get_config();

    let provider: Arc<dyn CoinProvider> = match config.provider {
        ProviderKind::Snapshot => Arc::new(SnapshotProvider::load(&config.snapshot_path)?),
        ProviderKind::CoinGecko => Arc::new(CoinGeckoProvider::from_config(config)),
    };

    tracing::info!("Starting coin list service...");
    server::start(AppState { provider }, config.bind_address).await;

    Ok(())
}

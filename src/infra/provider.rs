use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::model::coin::CoinRecord;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("snapshot read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of the coin dataset. Implementations return the full ordered
/// sequence; callers never see pages from here.
#[async_trait]
pub trait CoinProvider: Send + Sync {
    async fn coins(&self) -> Result<Arc<Vec<CoinRecord>>, ProviderError>;
}

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::model::coin::CoinRecord;
use crate::infra::provider::{CoinProvider, ProviderError};

/// Static dataset variant: a JSON snapshot read once at startup. The file
/// order is the dataset order for the process lifetime.
#[derive(Debug)]
pub struct SnapshotProvider {
    coins: Arc<Vec<CoinRecord>>,
}

impl SnapshotProvider {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let coins: Vec<CoinRecord> = serde_json::from_reader(BufReader::new(file))?;
        info!(count = coins.len(), path = %path.display(), "loaded coin snapshot");
        Ok(Self { coins: Arc::new(coins) })
    }

    pub fn from_coins(coins: Vec<CoinRecord>) -> Self {
        Self { coins: Arc::new(coins) }
    }
}

#[async_trait]
impl CoinProvider for SnapshotProvider {
    async fn coins(&self) -> Result<Arc<Vec<CoinRecord>>, ProviderError> {
        Ok(self.coins.clone())
    }
}

//! In-memory history.

use crate::record::{decode, new_record};
use async_trait::async_trait;
use sceneweaver_core::Production;
use sceneweaver_error::{SceneweaverResult, StorageError, StorageErrorKind};
use sceneweaver_interface::{HistoryRecord, LoadedProduction, ProductionStore};
use tokio::sync::RwLock;

/// History kept in a process-local list.
#[derive(Debug, Default)]
pub struct InMemoryProductionStore {
    records: RwLock<Vec<HistoryRecord>>,
}

impl InMemoryProductionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records across all tools.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProductionStore for InMemoryProductionStore {
    #[tracing::instrument(skip(self, production), fields(scenes = production.scenes.len()))]
    async fn save(&self, production: &Production, tool_tag: &str) -> SceneweaverResult<String> {
        let record = new_record(production, tool_tag)?;
        let id = record.id.clone();
        self.records.write().await.insert(0, record);
        tracing::debug!(id = %id, "Saved production");
        Ok(id)
    }

    async fn list(&self, tool_tag: &str) -> SceneweaverResult<Vec<HistoryRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|record| record.tool_tag == tool_tag)
            .cloned()
            .collect())
    }

    async fn load(&self, record_id: &str) -> SceneweaverResult<LoadedProduction> {
        let records = self.records.read().await;
        let record = records
            .iter()
            .find(|record| record.id == record_id)
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(record_id.to_string())))?;
        decode(record)
    }
}

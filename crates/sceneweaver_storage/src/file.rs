//! JSON file history.

use crate::record::{decode, new_record};
use async_trait::async_trait;
use derive_getters::Getters;
use sceneweaver_core::Production;
use sceneweaver_error::{SceneweaverResult, StorageError, StorageErrorKind};
use sceneweaver_interface::{HistoryRecord, LoadedProduction, ProductionStore};
use sceneweaver_rate_limit::StoreConfig;
use std::path::PathBuf;
use tokio::sync::Mutex;

/// History kept in a single JSON file.
///
/// The file holds the whole record list, newest first:
///
/// ```text
/// ~/.local/share/sceneweaver/
/// └── sceneweaver_history.json
/// ```
///
/// Saves read the list, prepend the new record and write it back through a
/// temp file and rename, so readers never see a half-written list. A missing
/// file reads as an empty history.
#[derive(Debug, Getters)]
pub struct JsonFileProductionStore {
    /// Path of the history file
    path: PathBuf,
    #[getter(skip)]
    write_lock: Mutex<()>,
}

impl JsonFileProductionStore {
    /// Create a store writing `{namespace}.json` under `directory`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[tracing::instrument(skip(directory))]
    pub fn new(directory: impl Into<PathBuf>, namespace: &str) -> SceneweaverResult<Self> {
        let directory = directory.into();
        std::fs::create_dir_all(&directory).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                directory.display(),
                e
            )))
        })?;

        let path = directory.join(format!("{}.json", namespace));
        tracing::info!(path = %path.display(), "Opened production history");
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Create a store from the `[store]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn from_config(config: &StoreConfig) -> SceneweaverResult<Self> {
        Self::new(config.resolved_path(), &config.namespace)
    }

    async fn read_all(&self) -> SceneweaverResult<Vec<HistoryRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::CorruptPayload(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()
        })
    }

    async fn write_all(&self, records: &[HistoryRecord]) -> SceneweaverResult<()> {
        let bytes = serde_json::to_vec_pretty(records).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!("encode history: {}", e)))
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &bytes).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;
        Ok(())
    }
}

#[async_trait]
impl ProductionStore for JsonFileProductionStore {
    #[tracing::instrument(skip(self, production), fields(path = %self.path.display(), scenes = production.scenes.len()))]
    async fn save(&self, production: &Production, tool_tag: &str) -> SceneweaverResult<String> {
        let record = new_record(production, tool_tag)?;
        let id = record.id.clone();

        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;
        records.insert(0, record);
        self.write_all(&records).await?;

        tracing::info!(id = %id, total = records.len(), "Saved production to history");
        Ok(id)
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn list(&self, tool_tag: &str) -> SceneweaverResult<Vec<HistoryRecord>> {
        let records = self.read_all().await?;
        Ok(records
            .into_iter()
            .filter(|record| record.tool_tag == tool_tag)
            .collect())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self, record_id: &str) -> SceneweaverResult<LoadedProduction> {
        let records = self.read_all().await?;
        let record = records
            .iter()
            .find(|record| record.id == record_id)
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(record_id.to_string())))?;
        decode(record)
    }
}

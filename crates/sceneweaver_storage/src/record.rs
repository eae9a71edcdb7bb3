//! Building history records.

use chrono::Utc;
use sceneweaver_core::Production;
use sceneweaver_error::{SceneweaverResult, StorageError, StorageErrorKind};
use sceneweaver_interface::{HistoryRecord, LoadedProduction, ProductionPayload};
use uuid::Uuid;

/// Wrap a production in a new record with a fresh id and the current time.
///
/// # Errors
///
/// Returns a JSON error if the production cannot be serialized.
pub fn new_record(production: &Production, tool_tag: &str) -> SceneweaverResult<HistoryRecord> {
    Ok(HistoryRecord {
        id: Uuid::new_v4().to_string(),
        timestamp: Utc::now().timestamp_millis(),
        tool_tag: tool_tag.to_string(),
        title: production.request.title(),
        payload: ProductionPayload::from_production(production).to_value()?,
    })
}

pub(crate) fn decode(record: &HistoryRecord) -> SceneweaverResult<LoadedProduction> {
    let payload = ProductionPayload::from_value(record.payload.clone()).map_err(|e| {
        StorageError::new(StorageErrorKind::CorruptPayload(format!("{}: {}", record.id, e)))
    })?;
    Ok(LoadedProduction::from_payload(payload))
}

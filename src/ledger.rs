//! Weight ledger
//!
//! The persisted store of body-weight observations, one record holding the
//! whole history under a single key. Upsert-by-date is the only mutation:
//! saving a weight for a date that already has one replaces it, and nothing
//! ever deletes an entry.

use std::sync::Arc;

use crate::metrics;
use crate::models::WeightEntry;
use crate::store::{Store, StoreError};

/// Store key holding the serialized entry list
pub const HISTORY_KEY: &str = "weightHistory";

pub struct WeightLedger {
    store: Arc<dyn Store>,
}

impl WeightLedger {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Load the full history. A missing or unparsable record reads as an
    /// empty ledger, never an error.
    pub async fn all(&self) -> Result<Vec<WeightEntry>, StoreError> {
        let raw = self.store.read(HISTORY_KEY).await?;
        Ok(raw
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default())
    }

    /// Insert or replace the entry for `date`
    pub async fn upsert(&self, date: &str, value: f64) -> Result<(), StoreError> {
        let mut entries = self.all().await?;
        entries.retain(|e| e.date != date);
        entries.push(WeightEntry::new(date, value));

        let json = serde_json::to_string(&entries)?;
        self.store.write(HISTORY_KEY, &json).await
    }

    /// The entry for an exact date, if any
    pub async fn get(&self, date: &str) -> Result<Option<WeightEntry>, StoreError> {
        let entries = self.all().await?;
        Ok(entries.into_iter().find(|e| e.date == date))
    }

    /// The latest entry strictly before `date`. Dates compare as opaque
    /// ISO strings, which is chronological for well-formed input.
    pub async fn previous_before(
        &self,
        date: &str,
    ) -> Result<Option<WeightEntry>, StoreError> {
        let entries = self.all().await?;
        Ok(metrics::previous_entry_before(&entries, date).cloned())
    }
}

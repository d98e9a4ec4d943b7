//! Workout completion tracker
//!
//! Per-date checklist state for training days: one store record per date,
//! mapping the exercise's 0-based position (string-encoded, as stored) to a
//! done-flag. A missing record or missing index reads as "not done".

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::PlanCatalog;
use crate::store::{Store, StoreError};

/// Store key for one date's completion record
fn completion_key(date: &str) -> String {
    format!("workout:{}", date)
}

pub struct CompletionTracker {
    store: Arc<dyn Store>,
}

impl CompletionTracker {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// The raw done-flag map for a date. Missing or unparsable records read
    /// as an empty map.
    pub async fn flags(&self, date: &str) -> Result<HashMap<String, bool>, StoreError> {
        let raw = self.store.read(&completion_key(date)).await?;
        Ok(raw
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default())
    }

    /// Flip the done-flag for one exercise, creating the record on first
    /// touch. Indexes are not bounds-checked against the day's plan; an
    /// out-of-range toggle just occupies an unused key.
    pub async fn toggle(&self, date: &str, exercise_index: usize) -> Result<(), StoreError> {
        let mut flags = self.flags(date).await?;
        let flag = flags.entry(exercise_index.to_string()).or_insert(false);
        *flag = !*flag;

        let json = serde_json::to_string(&flags)?;
        self.store.write(&completion_key(date), &json).await
    }

    /// Number of exercises currently flagged done for a date
    pub async fn completed_count(&self, date: &str) -> Result<usize, StoreError> {
        let flags = self.flags(date).await?;
        Ok(flags.values().filter(|done| **done).count())
    }
}

/// Exercises scheduled for a date, 0 when the catalog has no plan for it
pub fn total_exercises(catalog: &PlanCatalog, date: &str) -> usize {
    catalog.get(date).map(|day| day.exercise_count()).unwrap_or(0)
}

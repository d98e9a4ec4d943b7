//! Tauri commands for the weight ledger

use std::sync::Arc;
use tauri::State;

use crate::ledger::WeightLedger;
use crate::metrics::{self, WeightTrend};
use crate::models::WeightEntry;
use crate::store::{AppState, StoreError};

/// Save a weight for a date (replacing any existing entry) and return the
/// trend against the previous entry, the way the day-detail save flow
/// displays it. `None` when this is the earliest entry.
#[tauri::command]
pub async fn log_weight(
    state: State<'_, Arc<AppState>>,
    date: String,
    value: f64,
) -> Result<Option<WeightTrend>, StoreError> {
    let ledger = WeightLedger::new(state.store.clone());
    ledger.upsert(&date, value).await?;

    let prev = ledger.previous_before(&date).await?;
    Ok(prev.map(|p| WeightTrend::from_delta(value - p.value)))
}

/// Full weight history, unordered (the frontend sorts for display)
#[tauri::command]
pub async fn get_weight_history(
    state: State<'_, Arc<AppState>>,
) -> Result<Vec<WeightEntry>, StoreError> {
    WeightLedger::new(state.store.clone()).all().await
}

/// The entry logged for an exact date, if any
#[tauri::command]
pub async fn get_weight_for_date(
    state: State<'_, Arc<AppState>>,
    date: String,
) -> Result<Option<WeightEntry>, StoreError> {
    WeightLedger::new(state.store.clone()).get(&date).await
}

/// Trend of the entry logged on `date` against the previous entry.
/// `None` when that date has no entry or nothing earlier exists.
#[tauri::command]
pub async fn get_weight_trend(
    state: State<'_, Arc<AppState>>,
    date: String,
) -> Result<Option<WeightTrend>, StoreError> {
    let ledger = WeightLedger::new(state.store.clone());
    let entries = ledger.all().await?;

    let Some(entry) = entries.iter().find(|e| e.date == date) else {
        return Ok(None);
    };
    Ok(metrics::trend_vs_previous(&entries, &date, entry.value))
}

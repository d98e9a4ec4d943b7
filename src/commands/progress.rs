//! Tauri commands for the progress dashboard

use std::sync::Arc;

use chrono::Local;
use tauri::State;

use crate::ledger::WeightLedger;
use crate::metrics::{self, ProgressSummary};
use crate::store::{AppState, StoreError};

/// Every dashboard KPI plus the chart-ready history, in one call
#[tauri::command]
pub async fn get_progress_summary(
    state: State<'_, Arc<AppState>>,
) -> Result<ProgressSummary, StoreError> {
    let entries = WeightLedger::new(state.store.clone()).all().await?;
    Ok(ProgressSummary::compute(&entries))
}

/// Planned training days in the last 7 calendar days (inclusive of today,
/// local calendar)
#[tauri::command]
pub fn get_weekly_training_count(state: State<'_, Arc<AppState>>) -> usize {
    metrics::weekly_training_count(&state.catalog, Local::now().date_naive())
}

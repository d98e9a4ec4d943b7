pub mod progress;
pub mod weight;
pub mod workout;

use crate::models::DayPlan;
use crate::store::AppState;
use std::sync::Arc;
use tauri::State;

#[tauri::command]
pub fn get_day_plan(
  state: State<'_, Arc<AppState>>,
  date: String,
) -> Option<DayPlan> {
  state.catalog.get(&date).cloned()
}

#[tauri::command]
pub fn get_calendar_days(state: State<'_, Arc<AppState>>) -> Vec<DayPlan> {
  state.catalog.all_days().into_iter().cloned().collect()
}

//! Tauri commands for workout checklists

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tauri::State;

use crate::store::{AppState, StoreError};
use crate::workout::{total_exercises, CompletionTracker};

/// Checklist state for one date's workout panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutProgress {
    pub completed: usize,
    pub total: usize,
    pub flags: HashMap<String, bool>,
}

/// Flip the done-flag for one exercise of a date's plan
#[tauri::command]
pub async fn toggle_exercise(
    state: State<'_, Arc<AppState>>,
    date: String,
    exercise_index: usize,
) -> Result<(), StoreError> {
    CompletionTracker::new(state.store.clone())
        .toggle(&date, exercise_index)
        .await
}

/// Completed/total counters and the raw flags for a date
#[tauri::command]
pub async fn get_workout_progress(
    state: State<'_, Arc<AppState>>,
    date: String,
) -> Result<WorkoutProgress, StoreError> {
    let tracker = CompletionTracker::new(state.store.clone());
    let completed = tracker.completed_count(&date).await?;
    let flags = tracker.flags(&date).await?;

    Ok(WorkoutProgress {
        completed,
        total: total_exercises(&state.catalog, &date),
        flags,
    })
}

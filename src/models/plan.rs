use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Training or rest day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
  Training,
  Rest,
}

/// Meal slots of a daily menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
  Breakfast,
  Lunch,
  Dinner,
  Snack,
}

/// One exercise within a training day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSpec {
  pub name: String,
  pub instructions: String,
  pub image: String,
  pub sets: u32,
  pub reps: u32,
}

/// The plan for a single calendar date (ISO "YYYY-MM-DD")
///
/// Rest days usually carry only a menu; training days add an ordered
/// exercise list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
  pub date: String,
  #[serde(rename = "type")]
  pub kind: DayKind,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub menu: Option<BTreeMap<MealSlot, String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exercises: Option<Vec<ExerciseSpec>>,
}

impl DayPlan {
  /// Number of exercises scheduled for this day (0 for rest days)
  pub fn exercise_count(&self) -> usize {
    self.exercises.as_ref().map(|e| e.len()).unwrap_or(0)
  }
}

#[cfg(test)]
mod tests {
  use crate::test_utils::{mock_rest_day, mock_training_day};

  #[test]
  fn test_day_plan_wire_shape() {
    // The persisted shape uses "type" and lowercase kinds, matching the
    // bundled calendar data
    let training = serde_json::to_value(mock_training_day("2024-05-01")).unwrap();
    assert_eq!(training["type"], "training");
    assert_eq!(training["exercises"].as_array().unwrap().len(), 2);
    assert!(training.get("menu").is_none());

    let rest = serde_json::to_value(mock_rest_day("2024-05-02")).unwrap();
    assert_eq!(rest["type"], "rest");
    assert!(rest.get("exercises").is_none());
  }
}

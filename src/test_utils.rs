//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Store setup (in-memory fake)
//! - Mock data factories
//! - Seed helpers
//! - Helper assertions

use std::sync::Arc;

use crate::catalog::PlanCatalog;
use crate::ledger::WeightLedger;
use crate::models::{DayKind, DayPlan, ExerciseSpec};
use crate::store::{MemoryStore, Store};

/// ---------------------------------------------------------------------------
/// Store Test Utilities
/// ---------------------------------------------------------------------------

/// Create an empty in-memory store for testing.
/// The ledger and completion tracker only see the `Store` trait, so tests
/// never touch a real database file.
pub fn setup_test_store() -> Arc<dyn Store> {
  Arc::new(MemoryStore::new())
}

/// Seed a ledger with (date, value) pairs
pub async fn seed_weight_history(ledger: &WeightLedger, entries: &[(&str, f64)]) {
  for (date, value) in entries {
    ledger
      .upsert(date, *value)
      .await
      .expect("Failed to seed weight entry");
  }
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a mock exercise for testing
pub fn mock_exercise(name: &str) -> ExerciseSpec {
  ExerciseSpec {
    name: name.to_string(),
    instructions: "Espalda recta, movimiento controlado.".to_string(),
    image: format!("/exercises/{}.png", name.to_lowercase()),
    sets: 3,
    reps: 12,
  }
}

/// Create a mock training day with two exercises
pub fn mock_training_day(date: &str) -> DayPlan {
  DayPlan {
    date: date.to_string(),
    kind: DayKind::Training,
    menu: None,
    exercises: Some(vec![mock_exercise("Sentadillas"), mock_exercise("Flexiones")]),
  }
}

/// Create a mock rest day
pub fn mock_rest_day(date: &str) -> DayPlan {
  DayPlan {
    date: date.to_string(),
    kind: DayKind::Rest,
    menu: None,
    exercises: None,
  }
}

/// Create a small catalog: training on 05-01 (2 exercises), rest on 05-02
pub fn mock_catalog() -> PlanCatalog {
  PlanCatalog::from_json(
    r#"{"days":[
      {"date":"2024-05-01","type":"training","exercises":[
        {"name":"Sentadillas","instructions":"Espalda recta.","image":"/exercises/squat.png","sets":4,"reps":12},
        {"name":"Flexiones","instructions":"Codos pegados.","image":"/exercises/pushup.png","sets":3,"reps":10}
      ]},
      {"date":"2024-05-02","type":"rest","menu":{"lunch":"Pollo con arroz"}}
    ]}"#,
  )
  .expect("mock catalog should parse")
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_seed_weight_history() {
    let ledger = WeightLedger::new(setup_test_store());
    seed_weight_history(&ledger, &[("2024-05-01", 80.0), ("2024-05-02", 79.5)]).await;

    assert_eq!(ledger.all().await.unwrap().len(), 2);
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let day = mock_training_day("2024-05-01");
    assert_eq!(day.kind, DayKind::Training);
    assert_eq!(day.exercise_count(), 2);

    let rest = mock_rest_day("2024-05-02");
    assert_eq!(rest.exercise_count(), 0);

    let catalog = mock_catalog();
    assert_eq!(catalog.len(), 2);
  }
}

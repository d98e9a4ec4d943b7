pub mod plan;
pub mod weight;

pub use plan::{DayKind, DayPlan, ExerciseSpec, MealSlot};
pub use weight::WeightEntry;

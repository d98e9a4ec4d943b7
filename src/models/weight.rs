use serde::{Deserialize, Deserializer, Serialize};

/// One body-weight observation, keyed by calendar date (ISO "YYYY-MM-DD")
///
/// The value is kilograms with one decimal of display precision. The core
/// does not validate it; zero, negative or non-finite input flows through
/// unchanged and the UI decides what to show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
  pub date: String,
  #[serde(deserialize_with = "value_or_nan")]
  pub value: f64,
}

/// serde_json serializes non-finite floats as `null`; read those back as
/// NaN so one such entry can't fail deserialization of the whole history
fn value_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
  D: Deserializer<'de>,
{
  let value: Option<f64> = Option::deserialize(deserializer)?;
  Ok(value.unwrap_or(f64::NAN))
}

impl WeightEntry {
  pub fn new(date: impl Into<String>, value: f64) -> Self {
    Self {
      date: date.into(),
      value,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_null_value_reads_as_nan() {
    let entries: Vec<WeightEntry> = serde_json::from_str(
      r#"[{"date":"2024-05-01","value":80.0},{"date":"2024-05-02","value":null}]"#,
    )
    .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value, 80.0);
    assert!(entries[1].value.is_nan());
  }
}

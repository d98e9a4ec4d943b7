//! Static plan catalog
//!
//! The daily diet/training plans ship with the app as bundled data. The
//! catalog is built once at startup and is read-only afterwards; weight
//! entries and completion flags reference its dates by value only, so a
//! weight can exist for a date with no plan and vice versa.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::DayPlan;

/// Bundled plan data, same shape as the persisted records: `{"days": [...]}`
const CALENDAR_DATA: &str = include_str!("../data/calendar.json");

#[derive(Debug, Deserialize)]
struct CalendarFile {
    days: Vec<DayPlan>,
}

/// Date-keyed lookup over the bundled day plans
#[derive(Debug, Default)]
pub struct PlanCatalog {
    days: HashMap<String, DayPlan>,
}

impl PlanCatalog {
    /// Parse a catalog from raw JSON. Later duplicates of a date win, which
    /// keeps dates unique without rejecting sloppy source data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: CalendarFile = serde_json::from_str(json)?;
        let mut days = HashMap::with_capacity(file.days.len());
        for day in file.days {
            days.insert(day.date.clone(), day);
        }
        Ok(Self { days })
    }

    /// Load the bundled catalog. Malformed bundled data degrades to an
    /// empty catalog rather than aborting startup.
    pub fn load() -> Self {
        match Self::from_json(CALENDAR_DATA) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to parse bundled calendar data: {}", e);
                Self::default()
            }
        }
    }

    /// Exact-date lookup (ISO "YYYY-MM-DD")
    pub fn get(&self, date: &str) -> Option<&DayPlan> {
        self.days.get(date)
    }

    /// Every plan, sorted ascending by date (for calendar rendering)
    pub fn all_days(&self) -> Vec<&DayPlan> {
        let mut days: Vec<&DayPlan> = self.days.values().collect();
        days.sort_by(|a, b| a.date.cmp(&b.date));
        days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayKind;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = PlanCatalog::load();
        assert!(!catalog.is_empty(), "bundled calendar data should parse");
    }

    #[test]
    fn test_lookup_by_exact_date() {
        let catalog = PlanCatalog::from_json(
            r#"{"days":[
                {"date":"2025-06-02","type":"training","exercises":[
                    {"name":"Sentadillas","instructions":"Espalda recta","image":"/exercises/squat.png","sets":4,"reps":12}
                ]},
                {"date":"2025-06-03","type":"rest","menu":{"lunch":"Pollo con arroz"}}
            ]}"#,
        )
        .unwrap();

        let day = catalog.get("2025-06-02").expect("plan should exist");
        assert_eq!(day.kind, DayKind::Training);
        assert_eq!(day.exercise_count(), 1);

        let rest = catalog.get("2025-06-03").unwrap();
        assert_eq!(rest.kind, DayKind::Rest);
        assert_eq!(rest.exercise_count(), 0);

        assert!(catalog.get("2025-06-04").is_none());
    }

    #[test]
    fn test_duplicate_dates_last_wins() {
        let catalog = PlanCatalog::from_json(
            r#"{"days":[
                {"date":"2025-06-02","type":"rest"},
                {"date":"2025-06-02","type":"training"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("2025-06-02").unwrap().kind, DayKind::Training);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(PlanCatalog::from_json("{not json").is_err());
        assert!(PlanCatalog::from_json(r#"{"days":[{"date":1}]}"#).is_err());
    }

    #[test]
    fn test_all_days_sorted_ascending() {
        let catalog = PlanCatalog::from_json(
            r#"{"days":[
                {"date":"2025-06-10","type":"rest"},
                {"date":"2025-06-02","type":"training"},
                {"date":"2025-06-05","type":"rest"}
            ]}"#,
        )
        .unwrap();

        let dates: Vec<&str> = catalog.all_days().iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-06-02", "2025-06-05", "2025-06-10"]);
    }
}

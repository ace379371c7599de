//! Birth data as supplied by the caller.

use kundli_vedic_base::ChartSystem;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Birth details. Deserializes from
/// `{ name, birthDate, birthTime, birthPlace, system }`.
///
/// `birthTime` may be empty or absent; `system` defaults to Vedic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    /// `HH:MM`, `HH:MM:SS` or empty when unknown.
    #[serde(default)]
    pub birth_time: String,
    pub birth_place: String,
    #[serde(default)]
    pub system: ChartSystem,
}

impl BirthInput {
    pub fn new(
        name: impl Into<String>,
        birth_date: impl Into<String>,
        birth_time: impl Into<String>,
        birth_place: impl Into<String>,
        system: ChartSystem,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            birth_time: birth_time.into(),
            birth_place: birth_place.into(),
            system,
        }
    }

    /// Birth time if one was given.
    pub fn known_time(&self) -> Option<&str> {
        let t = self.birth_time.trim();
        (!t.is_empty()).then_some(t)
    }

    /// Check the mandatory fields are present. Formats are checked later,
    /// when the date and time are parsed.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.name.trim().is_empty() {
            return Err(ChartError::missing("name"));
        }
        if self.birth_date.trim().is_empty() {
            return Err(ChartError::missing("birth date"));
        }
        if self.birth_place.trim().is_empty() {
            return Err(ChartError::missing("birth place"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_caller_contract() {
        let json = r#"{
            "name": "Asha",
            "birthDate": "1990-06-15",
            "birthTime": "14:30",
            "birthPlace": "Delhi, India",
            "system": "western"
        }"#;
        let input: BirthInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.birth_place, "Delhi, India");
        assert_eq!(input.system, ChartSystem::Western);
        assert_eq!(input.known_time(), Some("14:30"));
    }

    #[test]
    fn time_and_system_optional() {
        let json = r#"{"name": "A", "birthDate": "2000-01-01", "birthPlace": "Patna"}"#;
        let input: BirthInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.known_time(), None);
        assert_eq!(input.system, ChartSystem::Vedic);
    }

    #[test]
    fn missing_fields_rejected() {
        let ok = BirthInput::new("A", "2000-01-01", "", "Patna", ChartSystem::Vedic);
        assert!(ok.validate().is_ok());

        let mut no_name = ok.clone();
        no_name.name = " ".into();
        assert_eq!(no_name.validate(), Err(ChartError::missing("name")));

        let mut no_place = ok.clone();
        no_place.birth_place = String::new();
        assert_eq!(no_place.validate(), Err(ChartError::missing("birth place")));

        let mut no_date = ok;
        no_date.birth_date = String::new();
        assert_eq!(no_date.validate(), Err(ChartError::missing("birth date")));
    }
}

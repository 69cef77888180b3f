use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::merit::{validate_formula, MeritFormula};

pub const STORE_VERSION: u32 = 1;

/// User-defined formulas saved between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaStore {
    pub version: u32,
    #[serde(default)]
    pub formulas: Vec<StoredFormula>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFormula {
    #[serde(flatten)]
    pub formula: MeritFormula,
    pub created_at: DateTime<Utc>,
}

/// Fields a user supplies for a new formula; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewFormula {
    pub name: String,
    pub short_name: String,
    pub matric_weight: u32,
    pub inter_weight: u32,
    pub test_weight: u32,
    pub test_name: String,
    pub color: String,
}

pub const DEFAULT_CUSTOM_COLOR: &str = "#10B981";

impl Default for FormulaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormulaStore {
    /// Create a new empty store with the current version
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            formulas: Vec::new(),
        }
    }

    pub fn list(&self) -> &[StoredFormula] {
        &self.formulas
    }

    /// The stored formulas as plain values, oldest first.
    pub fn formulas(&self) -> Vec<MeritFormula> {
        self.formulas.iter().map(|s| s.formula.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&StoredFormula> {
        self.formulas.iter().find(|s| s.formula.matches(id))
    }

    /// Validate and add a formula under a fresh id.
    pub fn create(&mut self, new: NewFormula) -> Result<&StoredFormula, Vec<String>> {
        let formula = MeritFormula {
            id: Uuid::new_v4().to_string(),
            name: new.name.trim().to_string(),
            short_name: new.short_name.trim().to_string(),
            matric_weight: new.matric_weight,
            inter_weight: new.inter_weight,
            test_weight: new.test_weight,
            test_name: new.test_name.trim().to_string(),
            color: new.color,
        };
        validate_formula(&formula)?;

        if self.get(&formula.short_name).is_some() {
            return Err(vec![format!(
                "formula.short_name: '{}' is already used by another custom formula",
                formula.short_name
            )]);
        }

        self.formulas.push(StoredFormula {
            formula,
            created_at: Utc::now(),
        });
        Ok(&self.formulas[self.formulas.len() - 1])
    }

    /// Remove a formula by id or short name.
    /// Returns true if a formula was removed, false otherwise
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.formulas.len();
        self.formulas.retain(|s| !s.formula.matches(id));
        self.formulas.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_formula(short_name: &str) -> NewFormula {
        NewFormula {
            name: "Institute of Testing".to_string(),
            short_name: short_name.to_string(),
            matric_weight: 20,
            inter_weight: 30,
            test_weight: 50,
            test_name: "IoT Test".to_string(),
            color: DEFAULT_CUSTOM_COLOR.to_string(),
        }
    }

    #[test]
    fn test_new_store_empty() {
        let store = FormulaStore::new();
        assert_eq!(store.version, 1);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_create_assigns_id() {
        let mut store = FormulaStore::new();
        let id = store.create(new_formula("IOT")).unwrap().formula.id.clone();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.get(&id).unwrap().formula.short_name, "IOT");
        assert!(store.get("iot").is_some());
    }

    #[test]
    fn test_create_rejects_invalid_weights() {
        let mut store = FormulaStore::new();
        let mut new = new_formula("IOT");
        new.test_weight = 60;
        let errors = store.create(new).unwrap_err();
        assert!(errors[0].contains("must equal 100"));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_create_rejects_duplicate_short_name() {
        let mut store = FormulaStore::new();
        store.create(new_formula("IOT")).unwrap();
        let errors = store.create(new_formula("iot")).unwrap_err();
        assert!(errors[0].contains("already used"));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut store = FormulaStore::new();
        let id = store.create(new_formula("IOT")).unwrap().formula.id.clone();
        store.create(new_formula("XYZ")).unwrap();

        assert!(store.delete(&id));
        assert!(!store.delete(&id));
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.formulas()[0].short_name, "XYZ");
    }

    #[test]
    fn test_stored_formula_is_flat_json() {
        let mut store = FormulaStore::new();
        store.create(new_formula("IOT")).unwrap();
        let json = serde_json::to_value(&store).unwrap();
        let entry = &json["formulas"][0];
        assert_eq!(entry["short_name"], "IOT");
        assert_eq!(entry["test_weight"], 50);
        assert!(entry["created_at"].is_string());
    }
}

use serde::{Deserialize, Serialize};

/// A university's weighting of matric, intermediate and entry-test scores.
///
/// Weights are percentages and are expected to sum to 100, but nothing in
/// the engine enforces that. Run [`crate::merit::validate_formula`] first
/// when the formula comes from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeritFormula {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub matric_weight: u32,
    pub inter_weight: u32,
    pub test_weight: u32,
    pub test_name: String,
    /// Display color as `#RRGGBB`
    pub color: String,
}

impl MeritFormula {
    /// Sum of the three weights. Widened so hand-edited weights cannot wrap.
    pub fn weight_sum(&self) -> u64 {
        u64::from(self.matric_weight) + u64::from(self.inter_weight) + u64::from(self.test_weight)
    }

    /// Compact "10/15/75" weight summary.
    pub fn weights_label(&self) -> String {
        format!(
            "{}/{}/{}",
            self.matric_weight, self.inter_weight, self.test_weight
        )
    }

    /// Whether `key` names this formula, by id or short name.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.eq_ignore_ascii_case(key) || self.short_name.eq_ignore_ascii_case(key)
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::grading::Scale;

/// Calculator defaults, read from `~/.config/merit-calc/config.yaml`.
///
/// Example YAML:
/// ```yaml
/// default_scale: hec
/// total_cgpa: 4.0
/// default_formula: nust
/// records_path: ~/merit/closing-merits.json
/// log_level: info
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scale used by `cgpa` / `percentage` when `--scale` is not given
    #[serde(default)]
    pub default_scale: Option<Scale>,

    /// Total CGPA; falls back to the scale's own total (4.0 or 5.0)
    #[serde(default)]
    pub total_cgpa: Option<f64>,

    /// Formula id or short name used when `--formula` is not given
    #[serde(default)]
    pub default_formula: Option<String>,

    /// Override for the custom formula store location
    #[serde(default)]
    pub formulas_path: Option<PathBuf>,

    /// Historical closing merits (JSON array) for `chance` and `records`
    #[serde(default)]
    pub records_path: Option<PathBuf>,

    /// tracing filter, e.g. "info" or "merit_calc=debug"
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    pub fn scale(&self) -> Scale {
        self.default_scale.unwrap_or_default()
    }

    /// Total CGPA for `scale`, honouring the configured override.
    pub fn total_cgpa_for(&self, scale: Scale) -> f64 {
        self.total_cgpa.unwrap_or_else(|| scale.default_total())
    }
}

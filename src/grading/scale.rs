use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::round2;
use super::tables::cgpa_band;
use crate::error::ConversionError;

pub const DEFAULT_TOTAL_CGPA: f64 = 4.0;

/// CGPA to percentage policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Scale {
    /// `cgpa / total * 100`
    #[default]
    #[serde(rename = "4.0")]
    Linear4,
    /// `cgpa * 20`
    #[serde(rename = "5.0")]
    Linear5,
    /// HEC Pakistan: `cgpa * 20 + 10`. Tops out at 90% for a 4.0 CGPA.
    #[serde(rename = "hec")]
    Hec,
}

impl Scale {
    /// Total CGPA to assume when the caller does not supply one.
    pub fn default_total(self) -> f64 {
        match self {
            Scale::Linear5 => 5.0,
            Scale::Linear4 | Scale::Hec => DEFAULT_TOTAL_CGPA,
        }
    }
}

impl FromStr for Scale {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4.0" | "4" => Ok(Scale::Linear4),
            "5.0" | "5" => Ok(Scale::Linear5),
            "hec" => Ok(Scale::Hec),
            other => Err(ConversionError::UnknownScale(other.to_string())),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Linear4 => write!(f, "4.0"),
            Scale::Linear5 => write!(f, "5.0"),
            Scale::Hec => write!(f, "hec"),
        }
    }
}

/// Output of a CGPA/percentage conversion. `value` is rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    pub grade: String,
    pub remarks: String,
}

impl ConversionResult {
    fn graded(value: f64, cgpa: f64) -> Self {
        // Grades always come from the 4.0 band table, whatever the scale.
        let band = cgpa_band(cgpa);
        Self {
            value,
            grade: band.letter_grade.to_string(),
            remarks: band.remark.to_string(),
        }
    }
}

/// Convert a CGPA to a percentage under `scale`.
///
/// Fails when `total_cgpa` is not a positive number or `cgpa` is outside
/// `[0, total_cgpa]`.
pub fn cgpa_to_percentage(
    cgpa: f64,
    scale: Scale,
    total_cgpa: f64,
) -> Result<ConversionResult, ConversionError> {
    check_total(total_cgpa)?;
    if !(0.0..=total_cgpa).contains(&cgpa) {
        return Err(ConversionError::CgpaOutOfRange { total: total_cgpa });
    }

    let percentage = match scale {
        Scale::Hec => cgpa * 20.0 + 10.0,
        Scale::Linear5 => cgpa * 20.0,
        Scale::Linear4 => cgpa / total_cgpa * 100.0,
    };

    Ok(ConversionResult::graded(
        round2(percentage.clamp(0.0, 100.0)),
        cgpa,
    ))
}

/// Convert a percentage back to a CGPA under `scale`.
///
/// Results above `total_cgpa` saturate: HEC at 100% gives 4.5, reported as 4.0.
pub fn percentage_to_cgpa(
    percentage: f64,
    scale: Scale,
    total_cgpa: f64,
) -> Result<ConversionResult, ConversionError> {
    check_total(total_cgpa)?;
    if !(0.0..=100.0).contains(&percentage) {
        return Err(ConversionError::PercentageOutOfRange);
    }

    let cgpa = match scale {
        Scale::Hec => (percentage - 10.0) / 20.0,
        Scale::Linear5 => percentage / 20.0,
        Scale::Linear4 => percentage / 100.0 * total_cgpa,
    };
    let cgpa = round2(cgpa.clamp(0.0, total_cgpa));

    Ok(ConversionResult::graded(cgpa, cgpa))
}

fn check_total(total_cgpa: f64) -> Result<(), ConversionError> {
    if total_cgpa.is_finite() && total_cgpa > 0.0 {
        Ok(())
    } else {
        Err(ConversionError::InvalidTotalCgpa(total_cgpa))
    }
}

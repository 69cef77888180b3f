//! Admission chance buckets.
//!
//! These tiers are an advisory heuristic over past closing merits, not a
//! prediction: a new admission cycle can close anywhere.

use serde::Serialize;
use std::fmt;

/// Margin below the lowest past cutoff that still counts as `Low`.
const BELOW_MIN_MARGIN: f64 = 5.0;
/// Margins above a single minimum aggregate for the fallback policy.
const FALLBACK_HIGH_MARGIN: f64 = 15.0;
const FALLBACK_MEDIUM_MARGIN: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChanceTier {
    Unlikely,
    Low,
    Medium,
    High,
}

impl ChanceTier {
    pub fn label(self) -> &'static str {
        match self {
            ChanceTier::High => "high",
            ChanceTier::Medium => "medium",
            ChanceTier::Low => "low",
            ChanceTier::Unlikely => "unlikely",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ChanceTier::High => "At or above the median past closing merit",
            ChanceTier::Medium => "Within the range of past closing merits",
            ChanceTier::Low => "Slightly below the lowest past closing merit",
            ChanceTier::Unlikely => "Well below past closing merits",
        }
    }
}

impl fmt::Display for ChanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket `aggregate` against past closing merits.
///
/// Cutoffs are sorted descending; the median is the middle element
/// (`len / 2`) and the minimum the last. Returns `None` when there are no
/// usable cutoffs, in which case see [`classify_against_minimum`].
pub fn classify_chance(aggregate: f64, cutoffs: &[f64]) -> Option<ChanceTier> {
    let mut sorted: Vec<f64> = cutoffs.iter().copied().filter(|c| !c.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| b.total_cmp(a));

    let median = sorted[sorted.len() / 2];
    let min = sorted[sorted.len() - 1];

    let tier = if aggregate >= median {
        ChanceTier::High
    } else if aggregate >= min {
        ChanceTier::Medium
    } else if aggregate >= min - BELOW_MIN_MARGIN {
        ChanceTier::Low
    } else {
        ChanceTier::Unlikely
    };
    Some(tier)
}

/// Fixed-offset fallback against a single minimum aggregate, for programs
/// without historical records.
pub fn classify_against_minimum(aggregate: f64, min_aggregate: f64) -> ChanceTier {
    if aggregate >= min_aggregate + FALLBACK_HIGH_MARGIN {
        ChanceTier::High
    } else if aggregate >= min_aggregate + FALLBACK_MEDIUM_MARGIN {
        ChanceTier::Medium
    } else if aggregate >= min_aggregate {
        ChanceTier::Low
    } else {
        ChanceTier::Unlikely
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_cutoffs() {
        // sorted: 85, 80, 75 -> median 80, min 75
        let cutoffs = [75.0, 85.0, 80.0];
        assert_eq!(classify_chance(80.0, &cutoffs), Some(ChanceTier::High));
        assert_eq!(classify_chance(90.0, &cutoffs), Some(ChanceTier::High));
        assert_eq!(classify_chance(79.9, &cutoffs), Some(ChanceTier::Medium));
        assert_eq!(classify_chance(75.0, &cutoffs), Some(ChanceTier::Medium));
        assert_eq!(classify_chance(74.9, &cutoffs), Some(ChanceTier::Low));
        assert_eq!(classify_chance(70.0, &cutoffs), Some(ChanceTier::Low));
        assert_eq!(classify_chance(69.9, &cutoffs), Some(ChanceTier::Unlikely));
    }

    #[test]
    fn test_even_cutoffs_use_lower_middle() {
        // sorted: 90, 85, 80, 70 -> index 2 -> median 80
        let cutoffs = [70.0, 90.0, 80.0, 85.0];
        assert_eq!(classify_chance(80.0, &cutoffs), Some(ChanceTier::High));
        assert_eq!(classify_chance(79.0, &cutoffs), Some(ChanceTier::Medium));
    }

    #[test]
    fn test_single_cutoff() {
        let cutoffs = [72.5];
        assert_eq!(classify_chance(72.5, &cutoffs), Some(ChanceTier::High));
        assert_eq!(classify_chance(70.0, &cutoffs), Some(ChanceTier::Low));
        assert_eq!(classify_chance(60.0, &cutoffs), Some(ChanceTier::Unlikely));
    }

    #[test]
    fn test_empty_cutoffs() {
        assert_eq!(classify_chance(80.0, &[]), None);
        assert_eq!(classify_chance(80.0, &[f64::NAN]), None);
    }

    #[test]
    fn test_fallback_policy() {
        assert_eq!(classify_against_minimum(75.0, 60.0), ChanceTier::High);
        assert_eq!(classify_against_minimum(74.9, 60.0), ChanceTier::Medium);
        assert_eq!(classify_against_minimum(65.0, 60.0), ChanceTier::Medium);
        assert_eq!(classify_against_minimum(64.9, 60.0), ChanceTier::Low);
        assert_eq!(classify_against_minimum(60.0, 60.0), ChanceTier::Low);
        assert_eq!(classify_against_minimum(59.9, 60.0), ChanceTier::Unlikely);
    }

    #[test]
    fn test_tier_order_and_labels() {
        assert!(ChanceTier::High > ChanceTier::Medium);
        assert!(ChanceTier::Low > ChanceTier::Unlikely);
        assert_eq!(ChanceTier::Unlikely.to_string(), "unlikely");
        assert_eq!(serde_json::to_string(&ChanceTier::High).unwrap(), "\"high\"");
    }
}

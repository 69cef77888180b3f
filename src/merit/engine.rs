use serde::Serialize;

use super::formula::MeritFormula;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateBreakdown {
    pub matric_contribution: f64,
    pub inter_contribution: f64,
    pub test_contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Weighted sum of the three components, clamped to [0, 100]
    pub aggregate: f64,
    pub breakdown: AggregateBreakdown,
}

/// Share of the aggregate contributed by one component.
pub(crate) fn contribution(percentage: f64, weight: u32) -> f64 {
    percentage * f64::from(weight) / 100.0
}

/// Apply `formula` to matric, intermediate and test percentages.
///
/// The weight sum is not checked here. A formula whose weights do not add
/// up to 100 still yields a number, it just does not mean much.
pub fn compute_aggregate(
    formula: &MeritFormula,
    matric_pct: f64,
    inter_pct: f64,
    test_pct: f64,
) -> AggregateResult {
    let breakdown = AggregateBreakdown {
        matric_contribution: contribution(matric_pct, formula.matric_weight),
        inter_contribution: contribution(inter_pct, formula.inter_weight),
        test_contribution: contribution(test_pct, formula.test_weight),
    };

    let sum = breakdown.matric_contribution
        + breakdown.inter_contribution
        + breakdown.test_contribution;

    AggregateResult {
        aggregate: sum.clamp(0.0, 100.0),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(matric: u32, inter: u32, test: u32) -> MeritFormula {
        MeritFormula {
            id: "test".to_string(),
            name: "Test".to_string(),
            short_name: "T".to_string(),
            matric_weight: matric,
            inter_weight: inter,
            test_weight: test,
            test_name: "Entry Test".to_string(),
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn test_nust_style_aggregate() {
        let result = compute_aggregate(&formula(10, 15, 75), 90.0, 85.0, 71.0);
        assert!((result.breakdown.matric_contribution - 9.0).abs() < 1e-9);
        assert!((result.breakdown.inter_contribution - 12.75).abs() < 1e-9);
        assert!((result.breakdown.test_contribution - 53.25).abs() < 1e-9);
        assert!((result.aggregate - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_scores_give_exactly_hundred() {
        for (m, i, t) in [(10, 15, 75), (10, 40, 50), (25, 45, 30), (0, 0, 100), (33, 33, 34)] {
            let result = compute_aggregate(&formula(m, i, t), 100.0, 100.0, 100.0);
            assert_eq!(result.aggregate, 100.0);
        }
    }

    #[test]
    fn test_zero_scores_give_zero() {
        let result = compute_aggregate(&formula(10, 40, 50), 0.0, 0.0, 0.0);
        assert_eq!(result.aggregate, 0.0);
    }

    #[test]
    fn test_overweighted_formula_is_clamped() {
        // 150 total weight: not rejected, just clamped
        let result = compute_aggregate(&formula(50, 50, 50), 100.0, 100.0, 100.0);
        assert_eq!(result.aggregate, 100.0);
        assert_eq!(result.breakdown.test_contribution, 50.0);
    }

    #[test]
    fn test_underweighted_formula_is_not_rescaled() {
        let result = compute_aggregate(&formula(10, 10, 10), 100.0, 100.0, 100.0);
        assert!((result.aggregate - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_inputs_clamp_to_zero() {
        let result = compute_aggregate(&formula(10, 40, 50), -50.0, -50.0, -50.0);
        assert_eq!(result.aggregate, 0.0);
    }
}

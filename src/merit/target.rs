use serde::Serialize;

use super::engine::contribution;
use super::formula::MeritFormula;

/// Tolerance applied before rounding the required score up, so that
/// 71.00000000000001 is shown as 71 and not 72.
const CEIL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetSolveResult {
    pub required_test_score: f64,
    pub achievable: bool,
    pub current_aggregate_without_test: f64,
    /// Aggregate reached with a perfect test score
    pub max_possible_aggregate: f64,
}

impl TargetSolveResult {
    /// Required score as shown to users: always rounded up, never to nearest,
    /// so the number shown is enough on its own.
    pub fn display_required_score(&self) -> f64 {
        (self.required_test_score - CEIL_TOLERANCE).ceil()
    }

    /// Target is already met without any test marks.
    pub fn already_met(&self) -> bool {
        self.required_test_score < 0.0 || (self.required_test_score == 0.0 && self.achievable)
    }
}

/// Solve for the test percentage that brings the aggregate to `target`.
///
/// `target` is used as given; callers clamp it to [0, 100] beforehand.
pub fn solve_required_test_score(
    formula: &MeritFormula,
    matric_pct: f64,
    inter_pct: f64,
    target: f64,
) -> TargetSolveResult {
    let current = contribution(matric_pct, formula.matric_weight)
        + contribution(inter_pct, formula.inter_weight);
    let test_weight = f64::from(formula.test_weight);

    let (required_test_score, achievable) = if formula.test_weight > 0 {
        let required = (target - current) * 100.0 / test_weight;
        (required, (0.0..=100.0).contains(&required))
    } else {
        (0.0, current >= target)
    };

    TargetSolveResult {
        required_test_score,
        achievable,
        current_aggregate_without_test: current,
        max_possible_aggregate: current + test_weight,
    }
}

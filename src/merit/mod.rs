pub mod chance;
pub mod engine;
pub mod formula;
pub mod presets;
pub mod target;
pub mod validation;

pub use chance::{classify_against_minimum, classify_chance, ChanceTier};
pub use engine::{compute_aggregate, AggregateBreakdown, AggregateResult};
pub use formula::MeritFormula;
pub use presets::{builtin_formulas, find_formula};
pub use target::{solve_required_test_score, TargetSolveResult};
pub use validation::validate_formula;

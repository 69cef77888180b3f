use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::grading::{ConversionResult, EquivalenceResult};
use crate::merit::{AggregateResult, ChanceTier, MeritFormula, TargetSolveResult};
use crate::records::ProgramSummary;

const ADVISORY_NOTE: &str = "Advisory only: past cutoffs do not predict future ones.";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a percentage with at most 2 decimals, dropping trailing zeros
/// ("80%", "71.25%", "70.6%").
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

/// Format a number with at most 2 decimals, dropping trailing zeros.
pub fn format_number(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// CGPA -> percentage or percentage -> CGPA result block.
pub fn format_conversion(
    heading: &str,
    value: &str,
    result: &ConversionResult,
    use_colors: bool,
) -> String {
    if use_colors {
        format!(
            "{}: {}\n  Grade: {}\n  Remarks: {}",
            heading,
            value.bold(),
            result.grade.cyan(),
            result.remarks
        )
    } else {
        format!(
            "{}: {}\n  Grade: {}\n  Remarks: {}",
            heading, value, result.grade, result.remarks
        )
    }
}

/// O-Level / A-Level equivalence block. `certificate` is "Matric" or
/// "Intermediate".
pub fn format_equivalence(
    certificate: &str,
    result: &EquivalenceResult,
    use_colors: bool,
) -> String {
    let marks = format!("{}/{}", result.equivalent_marks, result.total_marks);
    let mut out = if use_colors {
        format!(
            "{} equivalent: {} ({})\n  Grade: {}\n  IBCC points: {}/{}",
            certificate,
            marks.bold(),
            format_percent(result.percentage),
            result.grade.cyan(),
            result.total_points,
            result.max_points
        )
    } else {
        format!(
            "{} equivalent: {} ({})\n  Grade: {}\n  IBCC points: {}/{}",
            certificate,
            marks,
            format_percent(result.percentage),
            result.grade,
            result.total_points,
            result.max_points
        )
    };

    if result.unrecognized > 0 {
        let warning = format!(
            "  Ignored {} unrecognized grade{}",
            result.unrecognized,
            if result.unrecognized == 1 { "" } else { "s" }
        );
        out.push('\n');
        if use_colors {
            out.push_str(&warning.yellow().to_string());
        } else {
            out.push_str(&warning);
        }
    }
    out
}

/// Aggregate with its per-component breakdown.
pub fn format_aggregate(
    formula: &MeritFormula,
    result: &AggregateResult,
    use_colors: bool,
) -> String {
    let aggregate = format_percent(result.aggregate);
    let header = if use_colors {
        format!("{} aggregate: {}", formula.short_name.bold(), aggregate.bold().green())
    } else {
        format!("{} aggregate: {}", formula.short_name, aggregate)
    };

    format!(
        "{}\n  Matric ({}%): {}\n  Inter ({}%): {}\n  {} ({}%): {}",
        header,
        formula.matric_weight,
        format_number(result.breakdown.matric_contribution),
        formula.inter_weight,
        format_number(result.breakdown.inter_contribution),
        formula.test_name,
        formula.test_weight,
        format_number(result.breakdown.test_contribution)
    )
}

/// Target solver result. The required score is always shown rounded up.
pub fn format_target(
    formula: &MeritFormula,
    target: f64,
    result: &TargetSolveResult,
    use_colors: bool,
) -> String {
    let context = format!(
        "  Without {}: {}\n  Best possible: {}",
        formula.test_name,
        format_number(result.current_aggregate_without_test),
        format_number(result.max_possible_aggregate)
    );

    let headline = if result.already_met() {
        format!(
            "Target {} is already met without the {}",
            format_percent(target),
            formula.test_name
        )
    } else if result.achievable {
        let score = format_percent(result.display_required_score());
        if use_colors {
            format!(
                "Score at least {} in the {} to reach {}",
                score.bold().green(),
                formula.test_name,
                format_percent(target)
            )
        } else {
            format!(
                "Score at least {} in the {} to reach {}",
                score,
                formula.test_name,
                format_percent(target)
            )
        }
    } else {
        let msg = format!(
            "Target {} is out of reach: even 100% in the {} gives {}",
            format_percent(target),
            formula.test_name,
            format_percent(result.max_possible_aggregate)
        );
        if use_colors {
            msg.red().to_string()
        } else {
            msg
        }
    };

    format!("{}\n{}", headline, context)
}

/// Color a chance tier label.
pub fn format_tier(tier: ChanceTier, use_colors: bool) -> String {
    let label = tier.label().to_uppercase();
    if !use_colors {
        return label;
    }
    match tier {
        ChanceTier::High => label.green().bold().to_string(),
        ChanceTier::Medium => label.yellow().bold().to_string(),
        ChanceTier::Low => label.magenta().bold().to_string(),
        ChanceTier::Unlikely => label.red().bold().to_string(),
    }
}

/// Chance classification block. `basis` says what the tier was measured
/// against, e.g. "12 past closing merits".
pub fn format_chance(aggregate: f64, tier: ChanceTier, basis: &str, use_colors: bool) -> String {
    format!(
        "Chance: {} ({})\n  Aggregate: {}\n  Based on {}\n  {}",
        format_tier(tier, use_colors),
        tier.description(),
        format_percent(aggregate),
        basis,
        ADVISORY_NOTE
    )
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// A formula row for the formula table.
pub struct FormulaRow<'a> {
    pub formula: &'a MeritFormula,
    pub custom: bool,
}

/// Format formulas as a table with columns: Key, Weights, Test, Name
/// No headers. Key column is 10 chars wide, weights 8 chars wide.
/// Custom formulas show their id (needed for `formulas remove`) on a second line.
pub fn format_formula_table(rows: &[FormulaRow], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No formulas found.".to_string();
    }

    let term_width = get_terminal_width();
    let key_width = 10;
    let weights_width = 8;
    let test_width = 20;
    let separator = "  ";

    rows.iter()
        .map(|row| {
            let key = format!("{:<width$}", row.formula.short_name, width = key_width);
            let weights = format!("{:>width$}", row.formula.weights_label(), width = weights_width);
            let test = format!(
                "{:<width$}",
                truncate_name(&row.formula.test_name, test_width),
                width = test_width
            );

            let fixed_width = key_width + weights_width + test_width + separator.len() * 3;
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&row.formula.name, width - fixed_width)
                }
                Some(_) => truncate_name(&row.formula.name, 20),
                None => row.formula.name.clone(),
            };

            let mut line = if use_colors {
                format!(
                    "{}{}{}{}{}{}{}",
                    key.bold(),
                    separator,
                    weights,
                    separator,
                    test,
                    separator,
                    name.dimmed()
                )
            } else {
                format!("{}{}{}{}{}{}{}", key, separator, weights, separator, test, separator, name)
            };

            if row.custom {
                let indent = key_width + separator.len();
                line.push_str(&format!("\n{:>indent$}id: {}", "", row.formula.id));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format program summaries, one per line: min / avg / max (count).
pub fn format_summary_table(summaries: &[ProgramSummary], use_colors: bool) -> String {
    if summaries.is_empty() {
        return "No merit records found.".to_string();
    }

    summaries
        .iter()
        .map(|s| {
            let stats = format!(
                "min {:>6}  avg {:>6}  max {:>6}  ({} record{})",
                format_number(s.min),
                format_number(s.avg),
                format_number(s.max),
                s.count,
                if s.count == 1 { "" } else { "s" }
            );
            if use_colors {
                format!("{}\n  {}", s.program_name.bold(), stats)
            } else {
                format!("{}\n  {}", s.program_name, stats)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

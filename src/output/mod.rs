pub mod formatter;

pub use formatter::{
    format_aggregate, format_chance, format_conversion, format_equivalence, format_formula_table,
    format_number, format_percent, format_summary_table, format_target, format_tier,
    should_use_colors, FormulaRow,
};

pub mod cambridge;
pub mod marks;
pub mod scale;
pub mod tables;

pub use cambridge::{
    convert_a_level_to_inter, convert_o_level_to_matric, local_board_grade, EquivalenceResult,
};
pub use marks::{
    check_percentage, clamp_percentage, marks_to_percentage, parse_score,
    percentage_to_board_marks,
};
pub use scale::{
    cgpa_to_percentage, percentage_to_cgpa, ConversionResult, Scale, DEFAULT_TOTAL_CGPA,
};
pub use tables::{cgpa_band, CambridgeGrade, CgpaBand};

/// Full marks of a matric or intermediate board certificate.
pub const BOARD_TOTAL_MARKS: u32 = 1100;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use serde::Serialize;
use tracing::debug;

use super::tables::{ibcc_mark, CambridgeGrade, A_LEVEL_GRADES, O_LEVEL_GRADES};
use super::BOARD_TOTAL_MARKS;

/// Subjects counted towards the matric equivalence.
pub const O_LEVEL_BEST_OF: usize = 8;
/// Subjects counted towards the intermediate equivalence.
pub const A_LEVEL_BEST_OF: usize = 3;

/// Output of a Cambridge to local-board conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquivalenceResult {
    pub total_points: u32,
    pub max_points: u32,
    pub percentage: f64,
    pub equivalent_marks: u32,
    pub total_marks: u32,
    pub grade: String,
    /// Grade strings that matched nothing in the table and were left out.
    pub unrecognized: usize,
}

impl EquivalenceResult {
    fn empty(unrecognized: usize) -> Self {
        Self {
            total_points: 0,
            max_points: 0,
            percentage: 0.0,
            equivalent_marks: 0,
            total_marks: BOARD_TOTAL_MARKS,
            grade: "F".to_string(),
            unrecognized,
        }
    }
}

/// O-Level grades to a matric (SSC) equivalent over the best 8 subjects.
pub fn convert_o_level_to_matric<S: AsRef<str>>(grades: &[S]) -> EquivalenceResult {
    convert_best_of(grades, O_LEVEL_GRADES, O_LEVEL_BEST_OF)
}

/// A-Level grades to an intermediate (HSSC) equivalent over the best 3 subjects.
pub fn convert_a_level_to_inter<S: AsRef<str>>(grades: &[S]) -> EquivalenceResult {
    convert_best_of(grades, A_LEVEL_GRADES, A_LEVEL_BEST_OF)
}

/// Local board letter grade for a percentage.
pub fn local_board_grade(percentage: f64) -> &'static str {
    match percentage {
        p if p >= 80.0 => "A-1",
        p if p >= 70.0 => "A",
        p if p >= 60.0 => "B",
        p if p >= 50.0 => "C",
        p if p >= 40.0 => "D",
        p if p >= 33.0 => "E",
        _ => "F",
    }
}

fn convert_best_of<S: AsRef<str>>(
    grades: &[S],
    table: &[CambridgeGrade],
    best_of: usize,
) -> EquivalenceResult {
    let mut marks = Vec::with_capacity(grades.len());
    let mut unrecognized = 0;

    for grade in grades {
        match ibcc_mark(table, grade.as_ref()) {
            Some(mark) => marks.push(mark),
            None => {
                debug!(grade = grade.as_ref(), "dropping unrecognized grade");
                unrecognized += 1;
            }
        }
    }

    if marks.is_empty() {
        return EquivalenceResult::empty(unrecognized);
    }

    marks.sort_unstable_by(|a, b| b.cmp(a));
    marks.truncate(best_of);

    let total_points: u32 = marks.iter().sum();
    let max_points = marks.len() as u32 * 100;
    let percentage = f64::from(total_points) / f64::from(max_points) * 100.0;
    let equivalent_marks = (percentage / 100.0 * f64::from(BOARD_TOTAL_MARKS)).round() as u32;

    EquivalenceResult {
        total_points,
        max_points,
        percentage,
        equivalent_marks,
        total_marks: BOARD_TOTAL_MARKS,
        grade: local_board_grade(percentage).to_string(),
        unrecognized,
    }
}

use serde::Serialize;

/// A 4.0-scale CGPA band with its letter grade and remark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CgpaBand {
    pub min_cgpa: f64,
    pub max_cgpa: f64,
    pub letter_grade: &'static str,
    pub remark: &'static str,
}

/// IBCC equivalence mark for one Cambridge letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CambridgeGrade {
    pub letter_grade: &'static str,
    pub ibcc_mark: u32,
}

const fn band(
    min_cgpa: f64,
    max_cgpa: f64,
    letter_grade: &'static str,
    remark: &'static str,
) -> CgpaBand {
    CgpaBand {
        min_cgpa,
        max_cgpa,
        letter_grade,
        remark,
    }
}

const fn grade(letter_grade: &'static str, ibcc_mark: u32) -> CambridgeGrade {
    CambridgeGrade {
        letter_grade,
        ibcc_mark,
    }
}

/// CGPA bands, highest first. Together they cover [0, 4.0].
pub static CGPA_BANDS: &[CgpaBand] = &[
    band(3.70, 4.00, "A+", "Outstanding"),
    band(3.30, 3.69, "A", "Excellent"),
    band(3.00, 3.29, "B+", "Very Good"),
    band(2.70, 2.99, "B", "Good"),
    band(2.30, 2.69, "C+", "Above Average"),
    band(2.00, 2.29, "C", "Average"),
    band(1.70, 1.99, "D+", "Below Average"),
    band(1.00, 1.69, "D", "Pass"),
    band(0.00, 0.99, "F", "Fail"),
];

pub static O_LEVEL_GRADES: &[CambridgeGrade] = &[
    grade("A*", 90),
    grade("A", 85),
    grade("B", 75),
    grade("C", 65),
    grade("D", 55),
    grade("E", 45),
    grade("U", 0),
];

pub static A_LEVEL_GRADES: &[CambridgeGrade] = &[
    grade("A*", 90),
    grade("A", 85),
    grade("B", 75),
    grade("C", 65),
    grade("D", 55),
    grade("E", 45),
    grade("U", 0),
];

/// Find the band containing `cgpa`.
///
/// Bands are walked from the top, so a value falling between one band's
/// `max_cgpa` and the next band's `min_cgpa` (e.g. 3.695) lands in the
/// lower band. Values above 4.0 land in the top band, negatives in the
/// bottom one.
pub fn cgpa_band(cgpa: f64) -> &'static CgpaBand {
    CGPA_BANDS
        .iter()
        .find(|band| cgpa >= band.min_cgpa)
        .unwrap_or(&CGPA_BANDS[CGPA_BANDS.len() - 1])
}

/// Case-insensitive lookup of a letter grade in a Cambridge table.
pub fn ibcc_mark(table: &[CambridgeGrade], grade: &str) -> Option<u32> {
    let grade = grade.trim();
    table
        .iter()
        .find(|entry| entry.letter_grade.eq_ignore_ascii_case(grade))
        .map(|entry| entry.ibcc_mark)
}

use super::{round2, BOARD_TOTAL_MARKS};
use crate::error::ConversionError;

/// Obtained/total board marks as a percentage, rounded to 2 decimals.
pub fn marks_to_percentage(obtained: f64, total: f64) -> Result<f64, ConversionError> {
    if total.is_nan() || total <= 0.0 || !(0.0..=total).contains(&obtained) {
        return Err(ConversionError::InvalidMarks { obtained, total });
    }
    Ok(round2(obtained / total * 100.0))
}

/// Percentage as marks out of the standard 1100.
pub fn percentage_to_board_marks(percentage: f64) -> u32 {
    (percentage.clamp(0.0, 100.0) / 100.0 * f64::from(BOARD_TOTAL_MARKS)).round() as u32
}

/// Parse a score typed by a user: either a percentage ("92.5") or marks
/// ("1020/1100").
pub fn parse_score(input: &str) -> Result<f64, ConversionError> {
    let input = input.trim().trim_end_matches('%').trim();

    if let Some((obtained, total)) = input.split_once('/') {
        let obtained: f64 = obtained
            .trim()
            .parse()
            .map_err(|_| ConversionError::InvalidScore(input.to_string()))?;
        let total: f64 = total
            .trim()
            .parse()
            .map_err(|_| ConversionError::InvalidScore(input.to_string()))?;
        return marks_to_percentage(obtained, total);
    }

    let percentage: f64 = input
        .parse()
        .map_err(|_| ConversionError::InvalidScore(input.to_string()))?;
    check_percentage(percentage)
}

/// Accept `value` only when it is a percentage in `[0, 100]`. NaN fails.
pub fn check_percentage(value: f64) -> Result<f64, ConversionError> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConversionError::PercentageOutOfRange)
    }
}

/// Pull a finite value into `[0, 100]`. NaN and infinities are rejected.
pub fn clamp_percentage(value: f64) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidScore(value.to_string()));
    }
    Ok(value.clamp(0.0, 100.0))
}

use thiserror::Error;

/// Hard failures of the conversion core.
///
/// Everything else (unrecognized grades, empty input, odd formula weights)
/// produces a well-formed result instead of an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("CGPA must be between 0 and {total}")]
    CgpaOutOfRange { total: f64 },

    #[error("Percentage must be between 0 and 100")]
    PercentageOutOfRange,

    #[error("Total CGPA must be a positive number, got {0}")]
    InvalidTotalCgpa(f64),

    #[error("Obtained marks ({obtained}) must be between 0 and total marks ({total})")]
    InvalidMarks { obtained: f64, total: f64 },

    #[error("Invalid score '{0}': expected a percentage or obtained/total marks")]
    InvalidScore(String),

    #[error("Unknown scale '{0}': expected 4.0, 5.0 or hec")]
    UnknownScale(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cgpa_message_includes_total() {
        let err = ConversionError::CgpaOutOfRange { total: 4.0 };
        assert_eq!(err.to_string(), "CGPA must be between 0 and 4");

        let err = ConversionError::CgpaOutOfRange { total: 5.0 };
        assert_eq!(err.to_string(), "CGPA must be between 0 and 5");
    }

    #[test]
    fn test_invalid_total_message() {
        let err = ConversionError::InvalidTotalCgpa(0.0);
        assert_eq!(err.to_string(), "Total CGPA must be a positive number, got 0");
    }

    #[test]
    fn test_unknown_scale_message() {
        let err = ConversionError::UnknownScale("10".to_string());
        assert!(err.to_string().contains("'10'"));
    }
}

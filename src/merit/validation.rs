use super::formula::MeritFormula;

/// Validate a merit formula.
/// Returns all validation errors at once (not just the first).
///
/// The aggregate engine never calls this; it is the opt-in check for
/// formulas coming from users or files.
pub fn validate_formula(formula: &MeritFormula) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if formula.name.trim().is_empty() {
        errors.push("formula.name: must not be empty".to_string());
    }

    if formula.short_name.trim().is_empty() {
        errors.push("formula.short_name: must not be empty".to_string());
    }

    let sum = formula.weight_sum();
    if sum != 100 {
        errors.push(format!(
            "formula weights: matric + inter + test must equal 100, got {} ({})",
            sum,
            formula.weights_label()
        ));
    }

    if !is_hex_color(&formula.color) {
        errors.push(format!(
            "formula.color: invalid '{}' - expected #RRGGBB",
            formula.color
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_hex_color(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(matric: u32, inter: u32, test: u32) -> MeritFormula {
        MeritFormula {
            id: "custom".to_string(),
            name: "Custom".to_string(),
            short_name: "CU".to_string(),
            matric_weight: matric,
            inter_weight: inter,
            test_weight: test,
            test_name: "Test".to_string(),
            color: "#10B981".to_string(),
        }
    }

    #[test]
    fn test_valid_formula() {
        assert!(validate_formula(&formula(10, 40, 50)).is_ok());
        assert!(validate_formula(&formula(0, 0, 100)).is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_hundred() {
        let errors = validate_formula(&formula(10, 40, 40)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("got 90"));
    }

    #[test]
    fn test_huge_weights_do_not_wrap_to_hundred() {
        // u32::MAX + 101 would wrap to 100 in 32 bits
        let errors = validate_formula(&formula(u32::MAX, 101, 0)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("got 4294967396"));

        assert!(validate_formula(&formula(u32::MAX, u32::MAX, u32::MAX)).is_err());
    }

    #[test]
    fn test_invalid_color() {
        let mut f = formula(10, 40, 50);
        f.color = "blue".to_string();
        let errors = validate_formula(&f).unwrap_err();
        assert!(errors[0].contains("formula.color"));

        f.color = "#12345G".to_string();
        assert!(validate_formula(&f).is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut f = formula(50, 50, 50); // Error 1
        f.name = "  ".to_string(); // Error 2
        f.short_name = String::new(); // Error 3
        f.color = "#fff".to_string(); // Error 4
        let errors = validate_formula(&f).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}

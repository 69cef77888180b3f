use super::formula::MeritFormula;

struct Preset {
    id: &'static str,
    name: &'static str,
    short_name: &'static str,
    weights: (u32, u32, u32),
    test_name: &'static str,
    color: &'static str,
}

static PRESETS: &[Preset] = &[
    Preset {
        id: "nust",
        name: "National University of Sciences and Technology",
        short_name: "NUST",
        weights: (10, 15, 75),
        test_name: "NET",
        color: "#1E3A8A",
    },
    Preset {
        id: "fast",
        name: "FAST National University of Computer and Emerging Sciences",
        short_name: "FAST",
        weights: (10, 40, 50),
        test_name: "NU Admission Test",
        color: "#0EA5E9",
    },
    Preset {
        id: "uet",
        name: "University of Engineering and Technology Lahore",
        short_name: "UET",
        weights: (25, 45, 30),
        test_name: "ECAT",
        color: "#B91C1C",
    },
    Preset {
        id: "comsats",
        name: "COMSATS University Islamabad",
        short_name: "COMSATS",
        weights: (10, 40, 50),
        test_name: "NTS NAT",
        color: "#2563EB",
    },
    Preset {
        id: "giki",
        name: "Ghulam Ishaq Khan Institute",
        short_name: "GIKI",
        weights: (10, 5, 85),
        test_name: "GIKI Admission Test",
        color: "#047857",
    },
    Preset {
        id: "mdcat",
        name: "Medical and Dental Colleges (PMDC)",
        short_name: "MDCAT",
        weights: (10, 40, 50),
        test_name: "MDCAT",
        color: "#7C3AED",
    },
];

impl Preset {
    fn to_formula(&self) -> MeritFormula {
        let (matric_weight, inter_weight, test_weight) = self.weights;
        MeritFormula {
            id: self.id.to_string(),
            name: self.name.to_string(),
            short_name: self.short_name.to_string(),
            matric_weight,
            inter_weight,
            test_weight,
            test_name: self.test_name.to_string(),
            color: self.color.to_string(),
        }
    }
}

/// Formulas shipped with the calculator.
pub fn builtin_formulas() -> Vec<MeritFormula> {
    PRESETS.iter().map(Preset::to_formula).collect()
}

/// Look a formula up by id or short name: presets first, then `custom`.
pub fn find_formula(key: &str, custom: &[MeritFormula]) -> Option<MeritFormula> {
    builtin_formulas()
        .into_iter()
        .find(|f| f.matches(key))
        .or_else(|| custom.iter().find(|f| f.matches(key)).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merit::validate_formula;

    #[test]
    fn test_builtin_formulas_are_valid() {
        for formula in builtin_formulas() {
            assert!(
                validate_formula(&formula).is_ok(),
                "preset {} is invalid",
                formula.id
            );
        }
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let formulas = builtin_formulas();
        for (i, a) in formulas.iter().enumerate() {
            for b in &formulas[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_builtin() {
        let nust = find_formula("NUST", &[]).unwrap();
        assert_eq!(nust.weights_label(), "10/15/75");
        assert_eq!(nust.test_name, "NET");
    }

    #[test]
    fn test_find_custom() {
        let custom = MeritFormula {
            id: "abc-123".to_string(),
            name: "My Uni".to_string(),
            short_name: "MU".to_string(),
            matric_weight: 20,
            inter_weight: 30,
            test_weight: 50,
            test_name: "MU Test".to_string(),
            color: "#000000".to_string(),
        };
        let found = find_formula("mu", std::slice::from_ref(&custom)).unwrap();
        assert_eq!(found, custom);
        assert!(find_formula("unknown", &[custom]).is_none());
    }

    #[test]
    fn test_builtin_wins_over_custom_with_same_key() {
        let shadow = MeritFormula {
            id: "nust".to_string(),
            name: "Shadow".to_string(),
            short_name: "NUST".to_string(),
            matric_weight: 50,
            inter_weight: 50,
            test_weight: 0,
            test_name: "None".to_string(),
            color: "#000000".to_string(),
        };
        let found = find_formula("nust", &[shadow]).unwrap();
        assert_eq!(found.test_weight, 75);
    }
}

use serde::Serialize;
use std::collections::BTreeMap;

use super::types::MeritRecord;

/// Descriptive min / avg / max of one program's closing merits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramSummary {
    pub program_name: String,
    pub min: f64,
    pub avg: f64,
    pub max: f64,
    pub count: usize,
}

/// Closing merits of `records`, in input order.
pub fn cutoffs(records: &[&MeritRecord]) -> Vec<f64> {
    records.iter().map(|r| r.closing_merit).collect()
}

/// Group records by program and summarize each, sorted by program name.
pub fn summarize(records: &[&MeritRecord]) -> Vec<ProgramSummary> {
    let mut by_program: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        if record.closing_merit.is_nan() {
            continue;
        }
        by_program
            .entry(record.program_name.as_str())
            .or_default()
            .push(record.closing_merit);
    }

    by_program
        .into_iter()
        .map(|(program_name, merits)| {
            let min = merits.iter().copied().fold(f64::INFINITY, f64::min);
            let max = merits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let avg = merits.iter().sum::<f64>() / merits.len() as f64;
            ProgramSummary {
                program_name: program_name.to_string(),
                min,
                avg,
                max,
                count: merits.len(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(program: &str, merit: f64) -> MeritRecord {
        MeritRecord {
            university_short_name: "NUST".to_string(),
            program_name: program.to_string(),
            year: 2024,
            session: None,
            closing_merit: merit,
        }
    }

    #[test]
    fn test_summarize_groups_by_program() {
        let records = vec![
            record("Mechanical", 70.0),
            record("Computer Science", 80.0),
            record("Computer Science", 76.0),
            record("Computer Science", 78.0),
        ];
        let refs: Vec<&MeritRecord> = records.iter().collect();
        let summary = summarize(&refs);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].program_name, "Computer Science");
        assert_eq!(summary[0].min, 76.0);
        assert_eq!(summary[0].max, 80.0);
        assert!((summary[0].avg - 78.0).abs() < 1e-9);
        assert_eq!(summary[0].count, 3);
        assert_eq!(summary[1].program_name, "Mechanical");
        assert_eq!(summary[1].count, 1);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_cutoffs() {
        let records = vec![record("CS", 80.0), record("EE", 75.5)];
        let refs: Vec<&MeritRecord> = records.iter().collect();
        assert_eq!(cutoffs(&refs), vec![80.0, 75.5]);
    }
}

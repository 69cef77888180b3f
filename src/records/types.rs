use serde::{Deserialize, Serialize};

/// One program's closing merit in one admission cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeritRecord {
    pub university_short_name: String,
    pub program_name: String,
    pub year: i32,
    #[serde(default)]
    pub session: Option<String>,
    pub closing_merit: f64,
}

/// Narrow a record set down to one university / year / program.
/// Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub university: Option<String>,
    pub year: Option<i32>,
    /// Case-insensitive substring of the program name
    pub program: Option<String>,
}

impl RecordFilter {
    pub fn matches(&self, record: &MeritRecord) -> bool {
        if let Some(ref university) = self.university {
            if !record
                .university_short_name
                .eq_ignore_ascii_case(university.trim())
            {
                return false;
            }
        }

        if let Some(year) = self.year {
            if record.year != year {
                return false;
            }
        }

        if let Some(ref program) = self.program {
            let needle = program.trim().to_lowercase();
            if !record.program_name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }

    pub fn apply<'a>(&self, records: &'a [MeritRecord]) -> Vec<&'a MeritRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(university: &str, program: &str, year: i32, merit: f64) -> MeritRecord {
        MeritRecord {
            university_short_name: university.to_string(),
            program_name: program.to_string(),
            year,
            session: None,
            closing_merit: merit,
        }
    }

    #[test]
    fn test_parse_camel_case() {
        let json = r#"{
            "universityShortName": "NUST",
            "programName": "Computer Science",
            "year": 2024,
            "session": "Fall",
            "closingMerit": 78.4
        }"#;
        let parsed: MeritRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.university_short_name, "NUST");
        assert_eq!(parsed.session.as_deref(), Some("Fall"));
        assert_eq!(parsed.closing_merit, 78.4);
    }

    #[test]
    fn test_session_optional() {
        let json = r#"{"universityShortName":"UET","programName":"EE","year":2023,"closingMerit":80}"#;
        let parsed: MeritRecord = serde_json::from_str(json).unwrap();
        assert!(parsed.session.is_none());
        assert_eq!(parsed.closing_merit, 80.0);
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let records = vec![record("NUST", "CS", 2024, 78.0), record("UET", "EE", 2023, 80.0)];
        assert_eq!(RecordFilter::default().apply(&records).len(), 2);
    }

    #[test]
    fn test_filter_by_university_and_year() {
        let records = vec![
            record("NUST", "CS", 2024, 78.0),
            record("nust", "EE", 2023, 76.0),
            record("UET", "CS", 2024, 80.0),
        ];
        let filter = RecordFilter {
            university: Some("Nust".to_string()),
            year: Some(2024),
            program: None,
        };
        let matched = filter.apply(&records);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].program_name, "CS");
    }

    #[test]
    fn test_filter_program_substring() {
        let records = vec![
            record("FAST", "BS Computer Science", 2024, 70.0),
            record("FAST", "BS Software Engineering", 2024, 68.0),
        ];
        let filter = RecordFilter {
            program: Some("computer".to_string()),
            ..RecordFilter::default()
        };
        assert_eq!(filter.apply(&records).len(), 1);
    }
}

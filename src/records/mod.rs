//! Historical closing merits supplied by the user as a JSON array.
//!
//! Filtering and grouping live here so the chance classifier only ever
//! sees a plain list of cutoffs.

pub mod summary;
pub mod types;

pub use summary::{cutoffs, summarize, ProgramSummary};
pub use types::{MeritRecord, RecordFilter};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Load merit records from a JSON file containing an array of records.
pub fn load_records(path: &Path) -> Result<Vec<MeritRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open merit records at {}", path.display()))?;

    let records: Vec<MeritRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse merit records in {}", path.display()))?;

    debug!(path = %path.display(), count = records.len(), "loaded merit records");
    Ok(records)
}

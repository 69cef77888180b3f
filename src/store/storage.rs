use super::types::{FormulaStore, STORE_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the default formula store path (~/.config/merit-calc/formulas.json)
pub fn get_store_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("formulas.json"))
}

/// Load custom formulas from a JSON file
///
/// If the file doesn't exist, returns a new empty store.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_formula_store(path: &Path) -> Result<FormulaStore> {
    if !path.exists() {
        debug!(path = %path.display(), "no formula store yet");
        return Ok(FormulaStore::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open formula store at {}", path.display()))?;

    let store: FormulaStore =
        serde_json::from_reader(file).context("Failed to load custom formulas")?;

    if store.version != STORE_VERSION {
        anyhow::bail!("Unsupported formula store version: {}", store.version);
    }

    debug!(path = %path.display(), count = store.formulas.len(), "loaded custom formulas");
    Ok(store)
}

/// Save custom formulas to a JSON file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_formula_store(path: &Path, store: &FormulaStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, store).context("Failed to serialize custom formulas")?;

    file.commit().context("Failed to save custom formulas")?;

    debug!(path = %path.display(), count = store.formulas.len(), "saved custom formulas");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{NewFormula, DEFAULT_CUSTOM_COLOR};
    use std::env;

    #[test]
    fn test_load_missing_file_returns_empty() {
        let temp_path = env::temp_dir().join("merit_calc_test_missing.json");
        let _ = std::fs::remove_file(&temp_path);

        let store = load_formula_store(&temp_path).unwrap();
        assert_eq!(store.version, 1);
        assert!(store.formulas.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_path = env::temp_dir().join("merit_calc_test_store_roundtrip.json");
        let _ = std::fs::remove_file(&temp_path);

        let mut store = FormulaStore::new();
        store
            .create(NewFormula {
                name: "Air University".to_string(),
                short_name: "AU".to_string(),
                matric_weight: 15,
                inter_weight: 35,
                test_weight: 50,
                test_name: "AU Test".to_string(),
                color: DEFAULT_CUSTOM_COLOR.to_string(),
            })
            .unwrap();

        save_formula_store(&temp_path, &store).unwrap();
        let loaded = load_formula_store(&temp_path).unwrap();

        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.formulas, store.formulas);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_unsupported_version() {
        let temp_path = env::temp_dir().join("merit_calc_test_store_version.json");
        std::fs::write(&temp_path, r#"{"version": 2, "formulas": []}"#).unwrap();

        let err = load_formula_store(&temp_path).unwrap_err();
        assert!(err.to_string().contains("Unsupported formula store version"));

        let _ = std::fs::remove_file(&temp_path);
    }
}

pub mod storage;
pub mod types;

pub use storage::{get_store_path, load_formula_store, save_formula_store};
pub use types::{FormulaStore, NewFormula, StoredFormula, DEFAULT_CUSTOM_COLOR};

use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const DOMINIC_DIR: &str = ".dominic";
pub const CONFIG_FILE: &str = ".dominic/config.yaml";
pub const DEFAULT_TABLE: &str = "dominic.txt";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn dominic_dir(root: &Path) -> PathBuf {
    root.join(DOMINIC_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn default_table_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_TABLE)
}

/// Anchor a relative table path at `root`; absolute paths pass through.
pub fn resolve_table(root: &Path, table: &Path) -> PathBuf {
    if table.is_absolute() {
        table.to_path_buf()
    } else {
        root.join(table)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project settings read from `.dominic/config.yaml`. The file is optional
/// and never written by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Table location; relative paths are taken from the project root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            table: None,
        }
    }
}

impl Config {
    /// Load the config under `root`, returning `None` when there is no file.
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Some(cfg))
    }

    pub fn load_or_default(root: &Path) -> Result<Self> {
        Ok(Self::load(root)?.unwrap_or_default())
    }

    /// Table to read: `explicit` wins, then the configured table, then
    /// `dominic.txt` under `root`.
    pub fn table_path(&self, root: &Path, explicit: Option<&Path>) -> PathBuf {
        match explicit.or(self.table.as_deref()) {
            Some(table) => paths::resolve_table(root, table),
            None => paths::default_table_path(root),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

pub mod code;
pub mod range;
pub mod show;

use anyhow::Context;
use dominic_core::{config::Config, store::RecordStore};
use std::path::Path;

/// Resolve the table path from flag, config and default, then load it.
pub(crate) fn load_store(root: &Path, table: Option<&Path>) -> anyhow::Result<RecordStore> {
    let config = Config::load_or_default(root).context("failed to load config")?;
    let path = config.table_path(root, table);
    RecordStore::load(&path).context("failed to load table")
}

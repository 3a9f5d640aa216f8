use crate::output::{phrase_line, print_json};
use anyhow::Context;
use dominic_core::range::{run_range, CellRange, Entry, RangeRunner};
use std::io::Write;
use std::path::Path;

/// Load the table, then print one phrase per number in `range`. Without a
/// range the table is only loaded, which still reports a bad table.
pub fn run(
    root: &Path,
    table: Option<&Path>,
    range: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let range = range
        .map(|r| r.parse::<CellRange>())
        .transpose()
        .context("bad --range")?;

    let store = super::load_store(root, table)?;

    let Some(range) = range else {
        tracing::debug!(records = store.len(), "no range requested");
        return Ok(());
    };

    if json {
        let entries: Vec<Entry> = RangeRunner::new(&store, range).collect();
        return print_json(&entries);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_range(&store, range, |entry| {
        writeln!(out, "{}", phrase_line(entry.number, &entry.name, &entry.action))
    })
    .context("failed to write output")?;
    out.flush()?;
    Ok(())
}

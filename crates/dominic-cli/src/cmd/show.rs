use crate::output::{phrase_line, write_json};
use dominic_core::store::Record;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct ShowOutput<'a> {
    index: u64,
    #[serde(flatten)]
    record: &'a Record,
}

pub fn run(root: &Path, table: Option<&Path>, index: u64, json: bool) -> anyhow::Result<()> {
    let store = super::load_store(root, table)?;
    let record = store.get(index);
    write_record(&mut std::io::stdout().lock(), index, &record, json)
}

fn write_record<W: Write>(
    out: &mut W,
    index: u64,
    record: &Record,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        write_json(out, &ShowOutput { index, record })?;
    } else {
        writeln!(out, "{}", phrase_line(index, &record.name, &record.action))?;
    }
    Ok(())
}

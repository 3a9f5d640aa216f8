use crate::error::{DominicError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Separator between `label`, `name` and `action` on a table line.
pub const FIELD_SEPARATOR: char = ':';

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// A person and the action they perform. The default value (both fields
/// empty) stands in for any index the table does not cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub name: String,
    pub action: String,
}

impl Record {
    pub fn new(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: action.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// RecordStore
// ---------------------------------------------------------------------------

/// Read-only table of records keyed by line ordinal: the Nth line of the
/// source (zero-based) is index N. The label column is not used for keying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Load a `label:name:action` table from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| DominicError::TableOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::parse(BufReader::new(file)).map_err(|e| match e {
            DominicError::Io(source) => DominicError::TableOpen {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), records = store.len(), "loaded table");
        Ok(store)
    }

    /// Parse a table from any line source. Each line must have at least three
    /// fields; name and action are kept verbatim and extra fields are dropped.
    /// A short line fails the whole parse.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = Vec::new();
        for (ordinal, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            if fields.len() < 3 {
                return Err(DominicError::TableFormat {
                    line: ordinal + 1,
                    fields: fields.len(),
                });
            }
            records.push(Record::new(fields[1], fields[2]));
        }
        Ok(Self { records })
    }

    /// The record stored at `index`, if the table reaches that far.
    pub fn lookup(&self, index: u64) -> Option<&Record> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.records.get(i))
    }

    /// The record at `index`, or an empty record when the table is shorter.
    /// Sparse tables are allowed, so a miss is never an error.
    pub fn get(&self, index: u64) -> Record {
        match self.lookup(index) {
            Some(record) => record.clone(),
            None => {
                tracing::trace!(index, "no record, using empty");
                Record::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Record)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (i as u64, r))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    const SAMPLE: &str = "0:Albert Einstein:writes on a chalkboard\n\
                          1:Santa Claus:laughs HO HO HO\n\
                          2:X:Y\n";

    #[test]
    fn index_is_line_ordinal() {
        let store = RecordStore::parse(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.get(0),
            Record::new("Albert Einstein", "writes on a chalkboard")
        );
        assert_eq!(store.get(1).action, "laughs HO HO HO");
        assert_eq!(store.get(2), Record::new("X", "Y"));
    }

    #[test]
    fn label_is_not_the_key() {
        let store = RecordStore::parse(Cursor::new("AE:first:one\nOO:second:two\n")).unwrap();
        assert_eq!(store.get(0).name, "first");
        assert_eq!(store.get(1).name, "second");
    }

    #[test]
    fn missing_index_is_empty_record() {
        let store = RecordStore::parse(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(store.get(5), Record::default());
        assert!(store.lookup(5).is_none());
        assert_eq!(store.get(u64::MAX), Record::default());
    }

    #[test]
    fn fields_kept_verbatim() {
        let store = RecordStore::parse(Cursor::new("x: Ann : waves \n")).unwrap();
        assert_eq!(store.get(0), Record::new(" Ann ", " waves "));
    }

    #[test]
    fn extra_fields_are_dropped() {
        let store = RecordStore::parse(Cursor::new("x:Ann:waves:ignored\n")).unwrap();
        assert_eq!(store.get(0), Record::new("Ann", "waves"));
    }

    #[test]
    fn trailing_newline_optional_and_crlf_stripped() {
        let store = RecordStore::parse(Cursor::new("a:N1:A1\r\nb:N2:A2")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).action, "A1");
        assert_eq!(store.get(1).action, "A2");
    }

    #[test]
    fn short_line_fails_whole_parse() {
        let err = RecordStore::parse(Cursor::new("a:N1:A1\nb:N2\nc:N3:A3\n")).unwrap_err();
        assert!(matches!(
            err,
            DominicError::TableFormat { line: 2, fields: 2 }
        ));
    }

    #[test]
    fn blank_line_is_malformed() {
        let err = RecordStore::parse(Cursor::new("a:N1:A1\n\nc:N3:A3\n")).unwrap_err();
        assert!(matches!(
            err,
            DominicError::TableFormat { line: 2, fields: 1 }
        ));
    }

    #[test]
    fn empty_input_is_empty_store() {
        let store = RecordStore::parse(Cursor::new("")).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get(0), Record::default());
    }

    #[test]
    fn iter_is_ordered() {
        let store = RecordStore::parse(Cursor::new(SAMPLE)).unwrap();
        let indices: Vec<u64> = store.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dominic.txt");
        std::fs::write(&path, SAMPLE).unwrap();
        let store = RecordStore::load(&path).unwrap();
        assert_eq!(store.get(0).name, "Albert Einstein");
    }

    #[test]
    fn load_missing_file_is_open_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        let err = RecordStore::load(&path).unwrap_err();
        assert!(matches!(err, DominicError::TableOpen { path: p, .. } if p == path));
    }

    #[test]
    fn load_invalid_utf8_is_open_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, b"a:\xff\xfe:b\n").unwrap();
        let err = RecordStore::load(&path).unwrap_err();
        assert!(matches!(err, DominicError::TableOpen { .. }));
    }
}

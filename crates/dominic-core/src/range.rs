use crate::compose::compose;
use crate::error::{DominicError, Result};
use crate::store::RecordStore;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// CellRange
// ---------------------------------------------------------------------------

/// Inclusive `begin..=end` with `begin <= end` guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    begin: u64,
    end: u64,
}

impl CellRange {
    pub fn new(begin: u64, end: u64) -> Result<Self> {
        if begin > end {
            return Err(DominicError::InvalidRange(format!(
                "begin {begin} is greater than end {end}"
            )));
        }
        Ok(Self { begin, end })
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

static RANGE_RE: OnceLock<Regex> = OnceLock::new();

fn range_re() -> &'static Regex {
    RANGE_RE.get_or_init(|| Regex::new(r"^([0-9]+)-([0-9]+)$").unwrap())
}

impl FromStr for CellRange {
    type Err = DominicError;

    /// Parse `"<begin>-<end>"`, e.g. `"0-99"`.
    fn from_str(s: &str) -> Result<Self> {
        let caps = range_re().captures(s.trim()).ok_or_else(|| {
            DominicError::InvalidRange(format!("'{s}' is not of the form <begin>-<end>"))
        })?;
        let bound = |i: usize| -> Result<u64> {
            caps[i].parse().map_err(|_| {
                DominicError::InvalidRange(format!("bound '{}' is too large", &caps[i]))
            })
        };
        Self::new(bound(1)?, bound(2)?)
    }
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// One output line: the number and its composed phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub number: u64,
    pub name: String,
    pub action: String,
}

// ---------------------------------------------------------------------------
// RangeRunner
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running(u64),
    Done,
}

/// Walks a range in increasing order, composing one [`Entry`] per number.
/// A runner makes a single pass; once `Done` it yields nothing more.
pub struct RangeRunner<'a> {
    store: &'a RecordStore,
    range: CellRange,
    state: RunState,
}

impl<'a> RangeRunner<'a> {
    pub fn new(store: &'a RecordStore, range: CellRange) -> Self {
        Self {
            store,
            range,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }
}

impl Iterator for RangeRunner<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        let number = match self.state {
            RunState::Idle => self.range.begin,
            RunState::Running(next) => next,
            RunState::Done => return None,
        };
        self.state = if number == self.range.end {
            RunState::Done
        } else {
            RunState::Running(number + 1)
        };
        let phrase = compose(self.store, number);
        Some(Entry {
            number,
            name: phrase.name,
            action: phrase.action,
        })
    }
}

/// Feed every entry of `range` to `sink`, stopping at the first sink error.
pub fn run_range<F, E>(
    store: &RecordStore,
    range: CellRange,
    mut sink: F,
) -> std::result::Result<(), E>
where
    F: FnMut(Entry) -> std::result::Result<(), E>,
{
    tracing::debug!(%range, "running range");
    for entry in RangeRunner::new(store, range) {
        sink(entry)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use serde::Serialize;

/// The two table indices a number is split into: whose name to use, and
/// whose action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    pub person: u64,
    pub action: u64,
}

/// Split `i` into a person index and an action index.
///
/// `person = i / 100`. Below 100 the person is record 0 and the action index
/// is `i` itself. From 100 up the action index is `i % (person * 100)`;
/// because `person * 100 <= i < person * 100 + 100` this always lands on the
/// last two digits, e.g. 1580 splits as `(15, 1580 % 1500) = (15, 80)`.
pub fn decompose(i: u64) -> Decomposition {
    let person = i / 100;
    let action = if person > 0 { i % (person * 100) } else { i };
    Decomposition { person, action }
}

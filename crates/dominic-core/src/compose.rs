use crate::decompose::decompose;
use crate::store::RecordStore;
use serde::Serialize;

/// A composed mnemonic: one record's person doing another record's action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Phrase {
    pub name: String,
    pub action: String,
}

/// Compose the phrase for `i`: the name of the person record and the action
/// of the action record, both taken as stored. Indices past the end of the
/// table contribute empty strings.
pub fn compose(store: &RecordStore, i: u64) -> Phrase {
    let parts = decompose(i);
    Phrase {
        name: store.get(parts.person).name,
        action: store.get(parts.action).action,
    }
}

//! Storage-facing traits shared by every collection.
//!
//! A `Draft` is what callers hand to the store; the store assigns the id and
//! creation time and gets back a `Record`. A `Patch` carries optional fields
//! and overwrites only the ones that are set.

use chrono::{DateTime, Utc};

/// A stored entity with a per-collection string identifier.
pub trait Record: Clone + Send + Sync + 'static {
    /// Identifier prefix; ids are `"{PREFIX}{n}"` with `n` starting at 1.
    const PREFIX: &'static str;

    /// Collection name used in errors and logs.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}

/// The caller-supplied part of a record, before the store stamps it.
pub trait Draft {
    type Output: Record;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Self::Output;
}

/// A shallow field-level update. `None` fields leave the record untouched.
pub trait Patch<T> {
    fn apply(self, record: &mut T);
}

/// Overwrite `slot` when `value` is set.
pub(crate) fn merge<V>(slot: &mut V, value: Option<V>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// `merge` for optional fields: a set value fills the slot, `None` keeps it.
pub(crate) fn merge_some<V>(slot: &mut Option<V>, value: Option<V>) {
    if value.is_some() {
        *slot = value;
    }
}

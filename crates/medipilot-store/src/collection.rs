//! One typed, append-ordered table.

use chrono::{DateTime, Utc};

use medipilot_contracts::{
    error::{PortalError, PortalResult},
    record::{Draft, Patch, Record},
};

/// Records of one kind, kept in insertion order.
///
/// Ids are `"{PREFIX}{n}"` where `n` is the row count after insertion.
/// Records are never deleted, so ids are never reused.
#[derive(Debug, Clone)]
pub(crate) struct Collection<T: Record> {
    rows: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub(crate) fn insert<D>(&mut self, draft: D, created_at: DateTime<Utc>) -> T
    where
        D: Draft<Output = T>,
    {
        let id = format!("{}{}", T::PREFIX, self.rows.len() + 1);
        let record = draft.into_record(id, created_at);
        self.rows.push(record.clone());
        record
    }

    pub(crate) fn get(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    /// Apply `patch` and return the merged record.
    pub(crate) fn update<P: Patch<T>>(&mut self, id: &str, patch: P) -> PortalResult<T> {
        self.update_if(id, |_| Ok(()), patch)
    }

    /// Apply `patch` only if `guard` accepts the current record.
    ///
    /// The guard runs under the same lock as the write, so the check and the
    /// update cannot be separated by another mutation.
    pub(crate) fn update_if<P, G>(&mut self, id: &str, guard: G, patch: P) -> PortalResult<T>
    where
        P: Patch<T>,
        G: FnOnce(&T) -> PortalResult<()>,
    {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| PortalError::not_found(T::COLLECTION, id))?;
        guard(row)?;
        patch.apply(row);
        Ok(row.clone())
    }

    pub(crate) fn all(&self) -> Vec<T> {
        self.rows.clone()
    }

    pub(crate) fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.iter().filter(|r| pred(r)).cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

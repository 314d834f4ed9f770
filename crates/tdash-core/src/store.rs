//! Collection Store: the authoritative in-memory sequence of records for one view.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{DashError, DashResult};
use crate::record::{Record, RecordId};

/// Ordered, id-unique sequence of records owned by a single view.
///
/// Appending a record whose id is already present is rejected with
/// [`DashError::DuplicateId`]; nothing is ever silently overwritten.
#[derive(Debug, Clone)]
pub struct Store<T> {
    records: Vec<T>,
    strict: bool,
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            strict: true,
        }
    }
}

impl<T: Record> Store<T> {
    /// Create a store from seed data, failing fast on duplicate ids or
    /// records that break their entity invariants.
    pub fn initialize(seed: Vec<T>) -> DashResult<Self> {
        check_sequence(&seed, true)?;
        debug!(kind = T::KIND, count = seed.len(), "Store initialized");
        Ok(Self {
            records: seed,
            strict: true,
        })
    }

    /// Create a store without validating the seed.
    ///
    /// Later writes still reject duplicate ids but skip per-entity
    /// invariants, so records with out-of-set enum values can be held and
    /// derived into the `other` bucket.
    pub fn initialize_unchecked(seed: Vec<T>) -> Self {
        debug!(kind = T::KIND, count = seed.len(), "Store initialized (unchecked)");
        Self {
            records: seed,
            strict: false,
        }
    }

    /// Current snapshot, in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Next free id: one past the largest id held, or 1 when empty.
    /// Fails once the largest id is `RecordId::MAX`.
    pub fn next_id(&self) -> DashResult<RecordId> {
        match self.records.iter().map(Record::id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or(DashError::IdsExhausted { kind: T::KIND, max }),
        }
    }

    /// Atomically replace the whole sequence.
    ///
    /// The new sequence is checked before the swap, so a failed replace
    /// leaves the previous contents untouched.
    pub fn replace_all(&mut self, records: Vec<T>) -> DashResult<()> {
        check_sequence(&records, self.strict)?;
        debug!(kind = T::KIND, count = records.len(), "Store replaced");
        self.records = records;
        Ok(())
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        debug!(kind = T::KIND, dropped = self.records.len(), "Store cleared");
        self.records.clear();
    }

    /// Append a record at the end of the sequence.
    pub fn append(&mut self, record: T) -> DashResult<()> {
        let id = record.id();
        if self.contains(id) {
            warn!(kind = T::KIND, id, "Rejected append of duplicate id");
            return Err(DashError::DuplicateId { kind: T::KIND, id });
        }
        if self.strict {
            record.validate()?;
        }
        debug!(kind = T::KIND, id, "Record appended");
        self.records.push(record);
        Ok(())
    }

    /// Remove a record, returning it when present.
    pub fn remove_by_id(&mut self, id: RecordId) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        debug!(kind = T::KIND, id, "Record removed");
        Some(self.records.remove(index))
    }
}

impl<T: Record + Clone> Store<T> {
    /// Apply `patch` to the record with `id`.
    ///
    /// Returns `Ok(false)` without touching anything when no record has
    /// that id. The patch runs on a copy, so a patch that breaks an
    /// invariant or moves the record onto another record's id is
    /// rejected and the stored record is left as it was.
    pub fn update_by_id(&mut self, id: RecordId, patch: impl FnOnce(&mut T)) -> DashResult<bool> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            debug!(kind = T::KIND, id, "Update of missing id ignored");
            return Ok(false);
        };

        let mut candidate = self.records[index].clone();
        patch(&mut candidate);

        let new_id = candidate.id();
        if new_id != id && self.contains(new_id) {
            return Err(DashError::DuplicateId {
                kind: T::KIND,
                id: new_id,
            });
        }
        if self.strict {
            candidate.validate()?;
        }

        self.records[index] = candidate;
        Ok(true)
    }

    /// Apply `patch` to every record. Used for bulk transitions such as
    /// marking every notification read.
    pub fn update_all(&mut self, mut patch: impl FnMut(&mut T)) -> DashResult<()> {
        let mut next = self.records.clone();
        next.iter_mut().for_each(|r| patch(r));
        self.replace_all(next)
    }
}

fn check_sequence<T: Record>(records: &[T], strict: bool) -> DashResult<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(DashError::DuplicateId {
                kind: T::KIND,
                id: record.id(),
            });
        }
        if strict {
            record.validate()?;
        }
    }
    Ok(())
}

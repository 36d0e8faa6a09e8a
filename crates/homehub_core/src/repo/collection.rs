//! Generic record collection manager.
//!
//! # Responsibility
//! - Own one panel's ordered records and apply add/remove/toggle intents.
//! - Expose lazy, non-mutating views for panel derivations.
//!
//! # Invariants
//! - `add` appends at the end with a fresh v4 id; rejected drafts leave the
//!   collection untouched.
//! - `remove`/`toggle`/`update` on an unknown id change nothing.
//! - Seeded duplicates are dropped so ids stay unique.

use crate::model::record::{DraftError, Record, RecordId};
use crate::repo::derive::{self, Groups};
use log::{debug, warn};
use std::collections::HashSet;
use std::ops::Add;
use uuid::Uuid;

/// Ordered, id-keyed, in-memory list of one record kind.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCollection<T> {
    records: Vec<T>,
}

impl<T: Record> Default for RecordCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordCollection<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Builds a collection from existing records (sample seeds, imports).
    ///
    /// A record whose id was already seen is skipped.
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for record in records {
            if seen.insert(record.id()) {
                kept.push(record);
            } else {
                warn!(
                    "event=seed_duplicate module={} status=skipped id={}",
                    T::KIND,
                    record.id()
                );
            }
        }
        Self { records: kept }
    }

    /// Builds seeds from drafts, silently skipping any that fail validation.
    pub fn from_drafts(drafts: impl IntoIterator<Item = T::Draft>) -> Self {
        let mut collection = Self::new();
        for draft in drafts {
            collection.add(draft);
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Validates `draft` and appends it under a fresh id.
    ///
    /// # Errors
    /// - Returns the draft validation error; the collection is unchanged.
    pub fn try_add(&mut self, draft: T::Draft) -> Result<RecordId, DraftError> {
        let mut id = Uuid::new_v4();
        while self.contains(id) {
            id = Uuid::new_v4();
        }
        let record = T::from_draft(id, draft)?;
        self.records.push(record);
        debug!(
            "event=record_added module={} status=ok id={} len={}",
            T::KIND,
            id,
            self.records.len()
        );
        Ok(id)
    }

    /// Adds `draft`, ignoring invalid submissions.
    ///
    /// Returns the new id, or `None` when the draft was discarded.
    pub fn add(&mut self, draft: T::Draft) -> Option<RecordId> {
        match self.try_add(draft) {
            Ok(id) => Some(id),
            Err(err) => {
                debug!(
                    "event=record_added module={} status=ignored reason={}",
                    T::KIND,
                    err.code()
                );
                None
            }
        }
    }

    /// Removes the record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        let removed = self.records.len() != before;
        if !removed {
            debug!(
                "event=record_removed module={} status=ignored reason=unknown_id",
                T::KIND
            );
        }
        removed
    }

    /// Applies `mutate` to the record with `id`.
    ///
    /// Returns `None` without calling `mutate` when `id` is unknown.
    pub fn update<R>(&mut self, id: RecordId, mutate: impl FnOnce(&mut T) -> R) -> Option<R> {
        match self.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => Some(mutate(record)),
            None => {
                debug!(
                    "event=record_updated module={} status=ignored reason=unknown_id",
                    T::KIND
                );
                None
            }
        }
    }

    /// Flips the boolean selected by `field` and returns its new value.
    pub fn toggle(&mut self, id: RecordId, field: impl FnOnce(&mut T) -> &mut bool) -> Option<bool> {
        self.update(id, |record| {
            let flag = field(record);
            *flag = !*flag;
            *flag
        })
    }

    /// Lazy view of records matching `predicate`; storage is not touched.
    pub fn filter<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a T> + 'a
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.records.iter().filter(move |record| predicate(*record))
    }

    /// Groups records by `key_fn`, keys in first-seen order.
    pub fn group_by<K, F>(&self, mut key_fn: F) -> Groups<K, &T>
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        derive::group_by(self.records.iter(), |record| key_fn(*record))
    }

    /// Sums `value_fn` per `key_fn` group, keys in first-seen order.
    pub fn aggregate<K, V, F, G>(&self, mut value_fn: F, mut key_fn: G) -> Vec<(K, V)>
    where
        K: PartialEq,
        V: Add<Output = V> + Default + Copy,
        F: FnMut(&T) -> V,
        G: FnMut(&T) -> K,
    {
        derive::aggregate(
            self.records.iter(),
            |record| value_fn(*record),
            |record| key_fn(*record),
        )
    }
}

impl<'a, T> IntoIterator for &'a RecordCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

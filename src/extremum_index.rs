// Ordered container of CameraStats keyed by one field, for min/max lookups.
// Entries live in a flat vector kept sorted by key; inserts use binary search.

use crate::error::SummaryError;
use crate::models::{CameraStats, KeyField};

#[derive(Debug, Clone)]
pub struct ExtremumIndex {
    key: KeyField,
    // Non-decreasing by `key`.
    entries: Vec<CameraStats>,
}

impl ExtremumIndex {
    pub fn new(key: KeyField) -> Self {
        Self {
            key,
            entries: Vec::new(),
        }
    }

    pub fn key(&self) -> KeyField {
        self.key
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Inserts `entry` at its ordered position. Placement among equal keys is unspecified.
    pub fn insert(&mut self, entry: CameraStats) {
        let value = self.key.value(&entry);
        let pos = self
            .entries
            .partition_point(|e| self.key.value(e) <= value);
        self.entries.insert(pos, entry);
    }

    /// Entry with the maximum key.
    pub fn highest(&self) -> Result<&CameraStats, SummaryError> {
        self.entries
            .last()
            .ok_or(SummaryError::EmptyIndex { key: self.key })
    }

    /// Entry with the minimum key.
    pub fn lowest(&self) -> Result<&CameraStats, SummaryError> {
        self.entries
            .first()
            .ok_or(SummaryError::EmptyIndex { key: self.key })
    }

    /// Entries from lowest to highest key.
    pub fn iter(&self) -> impl Iterator<Item = &CameraStats> {
        self.entries.iter()
    }
}

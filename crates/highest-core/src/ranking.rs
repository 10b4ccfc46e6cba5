//! Record accumulation and top-N selection.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::record::Record;

/// Records accepted so far in one run, plus the set of scores they use.
///
/// The two collections always have the same length; an insert that would
/// break this is a duplicate score and is refused.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<Record>,
    scores: HashSet<u64>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record read from `line`. Fails on a score that was already seen.
    pub fn insert(&mut self, record: Record, line: usize) -> Result<()> {
        if !self.scores.insert(record.score) {
            return Err(Error::DuplicateScore {
                line,
                score: record.score,
            });
        }
        self.records.push(record);
        debug_assert_eq!(self.records.len(), self.scores.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Highest `limit` records, best first. Shorter when fewer are held.
    pub fn top(self, limit: usize) -> Vec<Record> {
        let mut ranked = self.records;
        ranked.sort_unstable_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(limit);
        ranked
    }
}

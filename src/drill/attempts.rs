use crate::drill::types::{same_word, AttemptRecord};

/// Append-only trace of scored answers, read back only in aggregate.
#[derive(Debug, Clone, Default)]
pub struct AttemptLog {
    records: Vec<AttemptRecord>,
}

impl AttemptLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<AttemptRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: AttemptRecord) -> &AttemptRecord {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every row for `word`. Only word removal and reset shrink the log.
    pub fn purge_word(&mut self, word: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !same_word(r.word.trim(), word.trim()));
        before - self.records.len()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::drill::catalog::WordCatalog;
use crate::drill::scheduler;
use crate::drill::types::{same_word, ProgressRecord, WordEntry};

/// word → scheduling state. Keys keep the exact case of first insertion and
/// iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressStore {
    records: IndexMap<String, ProgressRecord>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(records: IndexMap<String, ProgressRecord>) -> Self {
        Self { records }
    }

    pub fn as_map(&self) -> &IndexMap<String, ProgressRecord> {
        &self.records
    }

    /// Inserts the default record for `word` if absent. Idempotent.
    pub fn ensure(&mut self, word: &str, today: NaiveDate) -> &ProgressRecord {
        self.records
            .entry(word.to_string())
            .or_insert_with(|| ProgressRecord::fresh(today))
    }

    pub fn get(&self, word: &str) -> Option<&ProgressRecord> {
        self.records.get(word)
    }

    /// Due entries in catalog order. Every catalog word gets a record on the way.
    pub fn get_due(&mut self, catalog: &WordCatalog, today: NaiveDate) -> Vec<WordEntry> {
        let mut due = Vec::new();
        for entry in catalog.list() {
            let record = self.ensure(&entry.word, today);
            if scheduler::is_due(record, today) {
                due.push(entry.clone());
            }
        }
        due
    }

    /// Applies one scored answer through the scheduler and returns the new state.
    pub fn apply_answer(&mut self, word: &str, correct: bool, today: NaiveDate) -> ProgressRecord {
        let record = self
            .records
            .entry(word.to_string())
            .or_insert_with(|| ProgressRecord::fresh(today));
        *record = scheduler::update(record, correct, today);
        *record
    }

    /// Drops the first key matching `word` case-insensitively.
    pub fn remove(&mut self, word: &str) -> bool {
        let key = self
            .records
            .keys()
            .find(|k| same_word(k, word))
            .cloned();
        match key {
            Some(key) => self.records.shift_remove(&key).is_some(),
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProgressRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

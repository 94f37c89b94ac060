use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub meaning: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
        }
    }

    /// Case-insensitive identity match on `word`.
    pub fn is(&self, word: &str) -> bool {
        same_word(&self.word, word)
    }
}

/// Per-word scheduling state, persisted as one entry of the progress document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub next_review: NaiveDate,
    pub streak: u32,
    pub wrong_count: u32,
}

impl ProgressRecord {
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            next_review: today,
            streak: 0,
            wrong_count: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub date: NaiveDate,
    pub word: String,
    pub is_correct: bool,
    pub user_answer: String,
}

pub fn same_word(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

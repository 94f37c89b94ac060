use thiserror::Error;

use crate::drill::types::WordEntry;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate word: '{}' already exists", existing.word)]
    Duplicate { existing: WordEntry },
    #[error("word must not be empty")]
    EmptyWord,
}

/// Insertion-ordered word list with case-insensitive uniqueness on `word`.
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from persisted rows, keeping their order. Rows with an
    /// empty word are dropped.
    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|e| !e.word.is_empty())
            .collect();
        Self { entries }
    }

    pub fn add(&mut self, word: &str, meaning: &str) -> Result<&WordEntry, CatalogError> {
        if word.is_empty() {
            return Err(CatalogError::EmptyWord);
        }
        if let Some(existing) = self.find(word) {
            return Err(CatalogError::Duplicate {
                existing: existing.clone(),
            });
        }
        self.entries.push(WordEntry::new(word, meaning));
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Removes the first case-insensitive match.
    pub fn remove(&mut self, word: &str) -> bool {
        match self.entries.iter().position(|e| e.is(word)) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn find(&self, word: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.is(word))
    }

    pub fn list(&self) -> &[WordEntry] {
        &self.entries
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_insertion_order() {
        let mut catalog = WordCatalog::new();
        catalog.add("banana", "바나나").unwrap();
        catalog.add("apple", "사과").unwrap();
        let words: Vec<_> = catalog.list().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["banana", "apple"]);
    }

    #[test]
    fn duplicate_differing_only_in_case_is_rejected() {
        let mut catalog = WordCatalog::new();
        catalog.add("Apple", "사과").unwrap();
        let err = catalog.add("aPPLE", "other").unwrap_err();
        assert_eq!(
            err,
            CatalogError::Duplicate {
                existing: WordEntry::new("Apple", "사과")
            }
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn empty_word_never_stored() {
        let mut catalog = WordCatalog::new();
        assert_eq!(catalog.add("", "x").unwrap_err(), CatalogError::EmptyWord);
        assert!(catalog.is_empty());

        let loaded = WordCatalog::from_entries(vec![
            WordEntry::new("", "ghost"),
            WordEntry::new("cat", "고양이"),
        ]);
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn remove_matches_case_insensitively() {
        let mut catalog = WordCatalog::new();
        catalog.add("Dog", "개").unwrap();
        assert!(!catalog.remove("cat"));
        assert!(catalog.remove("DOG"));
        assert!(catalog.is_empty());
    }
}

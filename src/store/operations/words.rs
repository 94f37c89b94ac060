use serde::{Deserialize, Serialize};

use crate::drill::types::WordEntry;
use crate::store::{Store, StoreError};

#[derive(Debug, Serialize, Deserialize)]
struct WordRow {
    word: String,
    #[serde(default)]
    meaning: String,
}

impl Store {
    /// Rows in file order; blank words are skipped.
    pub fn load_words(&self) -> Result<Vec<WordEntry>, StoreError> {
        if !self.paths.words.exists() {
            return Ok(Vec::new());
        }
        let mut reader = Self::csv_reader(&self.paths.words)?;
        let mut words = Vec::new();
        for row in reader.deserialize::<WordRow>() {
            let row = row?;
            if row.word.is_empty() {
                continue;
            }
            words.push(WordEntry::new(row.word, row.meaning));
        }
        Ok(words)
    }

    pub fn append_word(&self, entry: &WordEntry) -> Result<(), StoreError> {
        let mut writer = Self::csv_appender(&self.paths.words)?;
        writer.serialize(WordRow {
            word: entry.word.trim().to_string(),
            meaning: entry.meaning.trim().to_string(),
        })?;
        writer.flush()?;
        Ok(())
    }

    pub fn save_words(&self, entries: &[WordEntry]) -> Result<(), StoreError> {
        let mut writer = Self::csv_writer(&self.paths.words)?;
        writer.write_record(crate::store::files::WORDS_HEADER)?;
        for entry in entries {
            writer.serialize(WordRow {
                word: entry.word.clone(),
                meaning: entry.meaning.clone(),
            })?;
        }
        writer.flush()?;
        tracing::info!(rows = entries.len(), "Word list saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::drill::types::WordEntry;
    use crate::store::{Store, StorePaths};
    use tempfile::tempdir;

    #[test]
    fn load_trims_fields_and_skips_blank_words() {
        let dir = tempdir().unwrap();
        let paths = StorePaths::in_dir(dir.path());
        fs::write(
            &paths.words,
            "word,meaning\n apple , 사과 \n,orphan\n\"hello, world\",인사\n",
        )
        .unwrap();
        let store = Store::open(paths).unwrap();

        let words = store.load_words().unwrap();
        assert_eq!(
            words,
            vec![
                WordEntry::new("apple", "사과"),
                WordEntry::new("hello, world", "인사"),
            ]
        );
    }

    #[test]
    fn append_then_rewrite_round_trips_order() {
        let dir = tempdir().unwrap();
        let store = Store::open(StorePaths::in_dir(dir.path())).unwrap();

        store.append_word(&WordEntry::new("b", "비")).unwrap();
        store.append_word(&WordEntry::new("a", "에이")).unwrap();
        let words = store.load_words().unwrap();
        assert_eq!(words[0].word, "b");
        assert_eq!(words[1].word, "a");

        store.save_words(&words[1..]).unwrap();
        assert_eq!(store.load_words().unwrap(), vec![WordEntry::new("a", "에이")]);

        store.save_words(&[]).unwrap();
        assert_eq!(
            fs::read_to_string(&store.paths().words).unwrap(),
            "word,meaning\n"
        );
    }
}

use std::fs;

use indexmap::IndexMap;

use crate::drill::progress::ProgressStore;
use crate::drill::types::ProgressRecord;
use crate::store::{Store, StoreError};

impl Store {
    /// 整体读取进度文档；文件缺失或为空时视为空表。
    pub fn load_progress(&self) -> Result<ProgressStore, StoreError> {
        if !self.paths.progress.exists() {
            return Ok(ProgressStore::new());
        }
        let content = fs::read_to_string(&self.paths.progress)?;
        if content.trim().is_empty() {
            return Ok(ProgressStore::new());
        }
        let records: IndexMap<String, ProgressRecord> = serde_json::from_str(&content)?;
        Ok(ProgressStore::from_map(records))
    }

    /// 整体覆盖写入，没有增量写。
    pub fn save_progress(&self, progress: &ProgressStore) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(progress.as_map())?;
        fs::write(&self.paths.progress, body)?;
        tracing::info!(records = progress.len(), "Progress saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use tempfile::tempdir;

    use crate::drill::progress::ProgressStore;
    use crate::store::{Store, StorePaths};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn save_and_load_preserve_records_and_key_order() {
        let dir = tempdir().unwrap();
        let store = Store::open(StorePaths::in_dir(dir.path())).unwrap();

        let mut progress = ProgressStore::new();
        progress.ensure("zebra", day(2024, 1, 1));
        progress.ensure("Apple", day(2024, 1, 1));
        progress.apply_answer("Apple", false, day(2024, 1, 1));
        store.save_progress(&progress).unwrap();

        let loaded = store.load_progress().unwrap();
        assert_eq!(loaded, progress);
        let keys: Vec<_> = loaded.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["zebra", "Apple"]);
    }

    #[test]
    fn document_uses_iso_dates() {
        let dir = tempdir().unwrap();
        let store = Store::open(StorePaths::in_dir(dir.path())).unwrap();
        let mut progress = ProgressStore::new();
        progress.ensure("cat", day(2024, 2, 29));
        store.save_progress(&progress).unwrap();

        let raw = fs::read_to_string(&store.paths().progress).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["cat"]["next_review"], "2024-02-29");
        assert_eq!(json["cat"]["streak"], 0);
        assert_eq!(json["cat"]["wrong_count"], 0);
    }

    #[test]
    fn empty_file_loads_as_empty_store() {
        let dir = tempdir().unwrap();
        let paths = StorePaths::in_dir(dir.path());
        fs::write(&paths.progress, "").unwrap();
        let store = Store::open(paths).unwrap();
        assert!(store.load_progress().unwrap().is_empty());
    }
}

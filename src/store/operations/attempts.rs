use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::drill::attempts::AttemptLog;
use crate::drill::types::AttemptRecord;
use crate::store::{Store, StoreError};

#[derive(Debug, Serialize, Deserialize)]
struct AttemptRow {
    date: NaiveDate,
    word: String,
    is_correct: u8,
    #[serde(default)]
    user_answer: String,
}

impl From<&AttemptRecord> for AttemptRow {
    fn from(record: &AttemptRecord) -> Self {
        Self {
            date: record.date,
            word: record.word.clone(),
            is_correct: u8::from(record.is_correct),
            user_answer: record.user_answer.clone(),
        }
    }
}

impl TryFrom<AttemptRow> for AttemptRecord {
    type Error = StoreError;

    fn try_from(row: AttemptRow) -> Result<Self, Self::Error> {
        let is_correct = match row.is_correct {
            0 => false,
            1 => true,
            other => {
                return Err(StoreError::Validation(format!(
                    "is_correct must be 0 or 1, got {other} for word '{}'",
                    row.word
                )))
            }
        };
        Ok(Self {
            date: row.date,
            word: row.word,
            is_correct,
            user_answer: row.user_answer,
        })
    }
}

impl Store {
    pub fn load_attempts(&self) -> Result<AttemptLog, StoreError> {
        if !self.paths.attempts.exists() {
            return Ok(AttemptLog::new());
        }
        let mut reader = Self::csv_reader(&self.paths.attempts)?;
        let mut records = Vec::new();
        for row in reader.deserialize::<AttemptRow>() {
            records.push(AttemptRecord::try_from(row?)?);
        }
        Ok(AttemptLog::from_records(records))
    }

    /// Appends one row and flushes it before returning.
    pub fn append_attempt(&self, record: &AttemptRecord) -> Result<(), StoreError> {
        let mut writer = Self::csv_appender(&self.paths.attempts)?;
        writer.serialize(AttemptRow::from(record))?;
        writer.flush()?;
        Ok(())
    }

    pub fn save_attempts(&self, log: &AttemptLog) -> Result<(), StoreError> {
        let mut writer = Self::csv_writer(&self.paths.attempts)?;
        writer.write_record(crate::store::files::ATTEMPTS_HEADER)?;
        for record in log.records() {
            writer.serialize(AttemptRow::from(record))?;
        }
        writer.flush()?;
        tracing::info!(rows = log.len(), "Attempt log rewritten");
        Ok(())
    }
}

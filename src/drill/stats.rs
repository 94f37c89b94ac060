use std::fmt;

use crate::drill::attempts::AttemptLog;
use crate::drill::progress::ProgressStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accuracy {
    pub correct: usize,
    pub total: usize,
}

impl Accuracy {
    /// `None` when no attempt has been logged yet.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct as f64 / self.total as f64 * 100.0)
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percentage() {
            Some(pct) => write!(f, "{pct:.1}% ({}/{})", self.correct, self.total),
            None => write!(f, "no data"),
        }
    }
}

pub fn overall_accuracy(log: &AttemptLog) -> Accuracy {
    let correct = log.records().iter().filter(|r| r.is_correct).count();
    Accuracy {
        correct,
        total: log.len(),
    }
}

/// Words with `wrong_count > 0`, most-missed first. Ties keep progress
/// iteration order.
pub fn most_wrong(progress: &ProgressStore, top_k: usize) -> Vec<(String, u32)> {
    let mut missed: Vec<(String, u32)> = progress
        .iter()
        .filter(|(_, record)| record.wrong_count > 0)
        .map(|(word, record)| (word.to_string(), record.wrong_count))
        .collect();
    // sort_by 是稳定排序
    missed.sort_by(|a, b| b.1.cmp(&a.1));
    missed.truncate(top_k);
    missed
}

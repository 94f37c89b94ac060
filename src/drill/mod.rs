//! 复习调度与测验核心：单词表、进度、调度策略、答题日志、测验会话与统计。

pub mod attempts;
pub mod catalog;
pub mod progress;
pub mod scheduler;
pub mod session;
pub mod stats;
pub mod types;

pub use attempts::AttemptLog;
pub use catalog::{CatalogError, WordCatalog};
pub use progress::ProgressStore;
pub use session::{AnswerOutcome, QuizPhase, QuizSession, QuizSummary};
pub use types::{AttemptRecord, ProgressRecord, WordEntry};

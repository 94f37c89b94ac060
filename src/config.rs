use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::constants::{
    DEFAULT_ATTEMPTS_FILE, DEFAULT_DATA_DIR, DEFAULT_LOG_LEVEL, DEFAULT_PROGRESS_FILE,
    DEFAULT_QUIZ_SIZE, DEFAULT_WORDS_FILE,
};
use crate::logging::LogConfig;
use crate::store::StorePaths;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub words_file: String,
    pub progress_file: String,
    pub attempts_file: String,
    pub quiz_size: usize,
    /// Pins "today" instead of reading the system clock.
    pub fixed_today: Option<NaiveDate>,
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            words_file: DEFAULT_WORDS_FILE.to_string(),
            progress_file: DEFAULT_PROGRESS_FILE.to_string(),
            attempts_file: DEFAULT_ATTEMPTS_FILE.to_string(),
            quiz_size: DEFAULT_QUIZ_SIZE,
            fixed_today: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            enable_file_logs: false,
            log_dir: "./logs".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: PathBuf::from(env_or("DRILL_DATA_DIR", DEFAULT_DATA_DIR)),
            words_file: env_or("DRILL_WORDS_FILE", DEFAULT_WORDS_FILE),
            progress_file: env_or("DRILL_PROGRESS_FILE", DEFAULT_PROGRESS_FILE),
            attempts_file: env_or("DRILL_ATTEMPTS_FILE", DEFAULT_ATTEMPTS_FILE),
            quiz_size: clamp_quiz_size(env_or_parse("DRILL_QUIZ_SIZE", DEFAULT_QUIZ_SIZE)),
            fixed_today: env_opt_parse::<NaiveDate>("DRILL_TODAY"),
            log_level: env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
        }
    }

    /// Config rooted at `dir` with every other value at its default.
    pub fn for_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Overrides the round size; zero is raised to one.
    pub fn with_quiz_size(self, quiz_size: usize) -> Self {
        Self {
            quiz_size: clamp_quiz_size(quiz_size),
            ..self
        }
    }

    pub fn store_paths(&self) -> StorePaths {
        StorePaths {
            words: self.data_dir.join(&self.words_file),
            progress: self.data_dir.join(&self.progress_file),
            attempts: self.data_dir.join(&self.attempts_file),
        }
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            log_level: self.log_level.clone(),
            enable_file_logs: self.enable_file_logs,
            log_dir: self.log_dir.clone(),
        }
    }
}

fn clamp_quiz_size(size: usize) -> usize {
    size.max(1)
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_opt_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Failed to parse env var, ignoring it");
            None
        }
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

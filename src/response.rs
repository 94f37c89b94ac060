use std::fmt;

use crate::drill::catalog::CatalogError;
use crate::drill::types::WordEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Duplicate,
    NotFound,
    Storage,
    Console,
}

/// Failure of a single command. Never terminates the loop.
#[derive(Debug, Clone)]
pub struct AppError {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
    pub is_operational: bool,
}

impl AppError {
    pub fn validation(code: &str, message: &str) -> Self {
        Self {
            kind: ErrorKind::Validation,
            code: code.to_string(),
            message: message.to_string(),
            is_operational: true,
        }
    }

    pub fn duplicate(existing: &WordEntry) -> Self {
        Self {
            kind: ErrorKind::Duplicate,
            code: "WORD_DUPLICATE".to_string(),
            message: format!(
                "Duplicate! '{}' is already in the list, not adding it.\n   Existing meaning: {}",
                existing.word, existing.meaning
            ),
            is_operational: true,
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            code: "NOT_FOUND".to_string(),
            message: message.to_string(),
            is_operational: true,
        }
    }

    pub fn storage(message: &str) -> Self {
        Self {
            kind: ErrorKind::Storage,
            code: "STORAGE_ERROR".to_string(),
            message: message.to_string(),
            is_operational: false,
        }
    }

    /// Operator-facing text. Storage failures keep their detail in the log.
    pub fn render(&self) -> String {
        if self.is_operational {
            tracing::debug!(code = %self.code, error = %self.message, "Command rejected");
            self.message.clone()
        } else {
            tracing::error!(code = %self.code, error = %self.message, "Command failed");
            match self.kind {
                ErrorKind::Console => format!("Input/output failed: {}", self.message),
                _ => format!("Could not save or load data files: {}", self.message),
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// StoreError 映射：Validation 视为输入问题，其余均为存储故障
impl From<crate::store::StoreError> for AppError {
    fn from(value: crate::store::StoreError) -> Self {
        match &value {
            crate::store::StoreError::Validation(msg) => AppError::validation("DATA_INVALID", msg),
            _ => AppError::storage(&value.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Console,
            code: "CONSOLE_IO".to_string(),
            message: value.to_string(),
            is_operational: false,
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::Duplicate { existing } => AppError::duplicate(&existing),
            CatalogError::EmptyWord => AppError::validation("WORD_EMPTY", &value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Text a handler wants shown, plus whether the loop should keep going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub control: Control,
}

impl Reply {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn ok<I, S>(lines: I) -> Reply
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Reply {
        lines: lines.into_iter().map(Into::into).collect(),
        control: Control::Continue,
    }
}

pub fn ok_line(line: impl Into<String>) -> Reply {
    ok([line.into()])
}

pub fn exit(line: impl Into<String>) -> Reply {
    Reply {
        lines: vec![line.into()],
        control: Control::Exit,
    }
}

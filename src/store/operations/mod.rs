pub mod attempts;
pub mod progress;
pub mod words;

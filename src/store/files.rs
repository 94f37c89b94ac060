pub const WORDS_HEADER: [&str; 2] = ["word", "meaning"];
pub const ATTEMPTS_HEADER: [&str; 4] = ["date", "word", "is_correct", "user_answer"];
pub const EMPTY_PROGRESS: &str = "{}";

/// 每轮测验默认题数
pub const DEFAULT_QUIZ_SIZE: usize = 10;

/// `today` 命令最多列出的到期单词数
pub const TODAY_LIST_LIMIT: usize = 20;

/// 统计中“最常答错”列表的长度
pub const MOST_WRONG_TOP_K: usize = 10;

/// 测验中输入此字符（不区分大小写）提前结束本轮
pub const QUIT_TOKEN: &str = "q";

/// `reset` 命令要求的确认口令（区分大小写）
pub const RESET_CONFIRM_TOKEN: &str = "YES";

/// 默认数据目录与文件名
pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_WORDS_FILE: &str = "words.csv";
pub const DEFAULT_PROGRESS_FILE: &str = "progress.json";
pub const DEFAULT_ATTEMPTS_FILE: &str = "attempts.csv";

/// 默认日志级别；日志写到 stderr，不影响交互输出
pub const DEFAULT_LOG_LEVEL: &str = "warn";

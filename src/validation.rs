//! 输入校验：命令层在调用核心之前统一裁剪并检查空值。

/// 裁剪后的单词，不能为空
pub fn validate_word(raw: &str) -> Result<String, &'static str> {
    let word = raw.trim();
    if word.is_empty() {
        return Err("Word is empty. Please try again.");
    }
    Ok(word.to_string())
}

/// 裁剪后的释义，不能为空
pub fn validate_meaning(raw: &str) -> Result<String, &'static str> {
    let meaning = raw.trim();
    if meaning.is_empty() {
        return Err("Meaning is empty. Please try again.");
    }
    Ok(meaning.to_string())
}

/// `remove` 的目标单词，不能为空
pub fn validate_target(raw: &str) -> Result<String, &'static str> {
    let target = raw.trim();
    if target.is_empty() {
        return Err("No word given.");
    }
    Ok(target.to_string())
}

/// 命令名：去掉首尾空白并转为小写
pub fn normalize_command(raw: &str) -> String {
    raw.trim().to_lowercase()
}

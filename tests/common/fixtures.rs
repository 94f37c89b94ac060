use std::fs;
use std::path::Path;

pub fn write_words_csv(dir: &Path, rows: &[(&str, &str)]) {
    let mut body = String::from("word,meaning\n");
    for (word, meaning) in rows {
        body.push_str(&format!("{word},{meaning}\n"));
    }
    fs::write(dir.join("words.csv"), body).expect("write words.csv");
}

pub fn seed_rows() -> Vec<(&'static str, &'static str)> {
    vec![
        ("apple", "사과"),
        ("river", "강"),
        ("window", "창문"),
    ]
}

/// `word{i}` / `meaning{i}` pairs.
pub fn numbered_rows(n: usize) -> Vec<(String, String)> {
    (0..n)
        .map(|i| (format!("word{i}"), format!("meaning{i}")))
        .collect()
}

//! Line-oriented operator I/O.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Shows `prompt` and blocks for one line. `Ok(None)` on end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn print(&mut self, text: &str) -> io::Result<()>;
}

/// stdin/stdout console used by the binary.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

/// Replays canned input lines and records every prompt and printed line.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let line = self.input.pop_front();
        self.transcript
            .push(format!("{prompt}{}", line.as_deref().unwrap_or("")));
        Ok(line)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_console_strips_line_endings_and_reports_eof() {
        let input = io::Cursor::new(b"apple\r\nbanana\n".to_vec());
        let mut out = Vec::new();
        let mut console = StdConsole::new(input, &mut out);
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("apple"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("banana"));
        assert_eq!(console.read_line("> ").unwrap(), None);
        console.print("done").unwrap();
        drop(console);
        assert_eq!(String::from_utf8(out).unwrap(), "> > > done\n");
    }

    #[test]
    fn scripted_console_records_prompts_with_answers() {
        let mut console = ScriptedConsole::new(["cat"]);
        console.read_line("word: ").unwrap();
        console.print("ok").unwrap();
        assert_eq!(console.output(), "word: cat\nok");
        assert_eq!(console.read_line("word: ").unwrap(), None);
    }
}

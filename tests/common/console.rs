use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io;
use std::path::PathBuf;

use word_drill::console::Console;

const QUESTION_PREFIX: &str = "meaning: ";
const QUESTION_SUFFIX: &str = "  word? ";

/// Scripted console that answers quiz questions by meaning, since the quiz
/// order is shuffled. Every other prompt pops the next scripted line.
#[derive(Default)]
pub struct QuizConsole {
    script: VecDeque<String>,
    answers: HashMap<String, String>,
    pub questions: Vec<String>,
    pub printed: Vec<String>,
}

impl QuizConsole {
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: script.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn answer(mut self, meaning: &str, answer: &str) -> Self {
        self.answers.insert(meaning.to_string(), answer.to_string());
        self
    }

    pub fn output(&self) -> String {
        self.printed.join("\n")
    }
}

impl Console for QuizConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if let Some(meaning) = prompt
            .strip_prefix(QUESTION_PREFIX)
            .and_then(|rest| rest.strip_suffix(QUESTION_SUFFIX))
        {
            self.questions.push(meaning.to_string());
            if let Some(answer) = self.answers.get(meaning) {
                return Ok(Some(answer.clone()));
            }
        }
        Ok(self.script.pop_front())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.printed.push(text.to_string());
        Ok(())
    }
}

/// Wraps a [`QuizConsole`] and turns `target` into a directory right before
/// the `at`-th quiz question, so writes to that file start failing mid-round.
pub struct BreakOnQuestion {
    inner: QuizConsole,
    target: PathBuf,
    at: usize,
    seen: usize,
}

impl BreakOnQuestion {
    pub fn new(inner: QuizConsole, target: PathBuf, at: usize) -> Self {
        Self {
            inner,
            target,
            at,
            seen: 0,
        }
    }
}

impl Console for BreakOnQuestion {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if prompt.starts_with(QUESTION_PREFIX) && prompt.ends_with(QUESTION_SUFFIX) {
            self.seen += 1;
            if self.seen == self.at {
                fs::remove_file(&self.target)?;
                fs::create_dir(&self.target)?;
            }
        }
        self.inner.read_line(prompt)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.inner.print(text)
    }
}

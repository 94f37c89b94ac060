//! 单轮测验会话：选出到期词、逐个出题、判分，并驱动调度与答题日志。
//!
//! `START → SELECT_DUE → (PRESENT → AWAIT_ANSWER → SCORE | QUIT)* → FINISH`
//!
//! The session itself does no I/O. The caller reads answers, persists each
//! attempt row through [`QuizSession::submit_with`] before it is applied, and
//! writes the progress store once the round ends. A crash between those two
//! writes keeps the attempt row but loses the schedule update.

use std::convert::Infallible;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::QUIT_TOKEN;
use crate::drill::attempts::AttemptLog;
use crate::drill::catalog::WordCatalog;
use crate::drill::progress::ProgressStore;
use crate::drill::types::{same_word, AttemptRecord, ProgressRecord, WordEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NothingDue,
    Presenting,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Scored {
        attempt: AttemptRecord,
        expected: String,
        progress: ProgressRecord,
    },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizSummary {
    pub selected: usize,
    pub asked: usize,
    pub correct: usize,
    pub quit_early: bool,
}

impl QuizSummary {
    pub fn unasked(&self) -> usize {
        self.selected - self.asked
    }
}

/// Uniform shuffle, then keep at most `limit` words in shuffled order.
pub fn select_round<R: Rng + ?Sized>(
    mut due: Vec<WordEntry>,
    limit: usize,
    rng: &mut R,
) -> Vec<WordEntry> {
    due.shuffle(rng);
    due.truncate(limit.min(due.len()));
    due
}

pub fn is_quit(answer: &str) -> bool {
    answer.eq_ignore_ascii_case(QUIT_TOKEN)
}

pub fn is_correct(answer: &str, word: &str) -> bool {
    same_word(answer, word)
}

pub struct QuizSession<'a> {
    progress: &'a mut ProgressStore,
    log: &'a mut AttemptLog,
    queue: Vec<WordEntry>,
    cursor: usize,
    correct: usize,
    today: NaiveDate,
    phase: QuizPhase,
}

impl<'a> QuizSession<'a> {
    pub fn start<R: Rng + ?Sized>(
        catalog: &WordCatalog,
        progress: &'a mut ProgressStore,
        log: &'a mut AttemptLog,
        today: NaiveDate,
        limit: usize,
        rng: &mut R,
    ) -> Self {
        let due = progress.get_due(catalog, today);
        let phase = if due.is_empty() {
            QuizPhase::NothingDue
        } else {
            QuizPhase::Presenting
        };
        let queue = select_round(due, limit, rng);
        let phase = if phase == QuizPhase::Presenting && queue.is_empty() {
            QuizPhase::Finished
        } else {
            phase
        };

        tracing::info!(selected = queue.len(), %today, "Quiz session started");

        Self {
            progress,
            log,
            queue,
            cursor: 0,
            correct: 0,
            today,
            phase,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn selected(&self) -> &[WordEntry] {
        &self.queue
    }

    /// The word awaiting an answer, if any.
    pub fn current(&self) -> Option<&WordEntry> {
        match self.phase {
            QuizPhase::Presenting => self.queue.get(self.cursor),
            _ => None,
        }
    }

    /// Scores one answer for the current word. Returns `None` outside of
    /// [`QuizPhase::Presenting`].
    pub fn submit(&mut self, answer: &str) -> Option<AnswerOutcome> {
        match self.submit_with(answer, |_| Ok::<(), Infallible>(())) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Like [`submit`](Self::submit), but hands the attempt row to `persist`
    /// first. The log and the progress store only change once `persist`
    /// succeeds; on error the current word stays unscored.
    pub fn submit_with<E, F>(
        &mut self,
        answer: &str,
        persist: F,
    ) -> Result<Option<AnswerOutcome>, E>
    where
        F: FnOnce(&AttemptRecord) -> Result<(), E>,
    {
        let Some(entry) = self.current().cloned() else {
            return Ok(None);
        };

        if is_quit(answer) {
            self.phase = QuizPhase::Finished;
            return Ok(Some(AnswerOutcome::Quit));
        }

        let correct = is_correct(answer, &entry.word);
        let attempt = AttemptRecord {
            date: self.today,
            word: entry.word.clone(),
            is_correct: correct,
            user_answer: answer.to_string(),
        };
        persist(&attempt)?;

        self.log.append(attempt.clone());
        let progress = self.progress.apply_answer(&entry.word, correct, self.today);

        tracing::debug!(
            word = %entry.word,
            correct,
            streak = progress.streak,
            next_review = %progress.next_review,
            "Answer scored"
        );

        if correct {
            self.correct += 1;
        }
        self.cursor += 1;
        if self.cursor >= self.queue.len() {
            self.phase = QuizPhase::Finished;
        }

        Ok(Some(AnswerOutcome::Scored {
            attempt,
            expected: entry.word,
            progress,
        }))
    }

    /// Ends the round early; unscored words keep their schedule.
    pub fn quit(&mut self) {
        if self.phase == QuizPhase::Presenting {
            self.phase = QuizPhase::Finished;
        }
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            selected: self.queue.len(),
            asked: self.cursor,
            correct: self.correct,
            quit_early: self.cursor < self.queue.len(),
        }
    }
}

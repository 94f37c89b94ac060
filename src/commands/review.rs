use crate::commands::CommandContext;
use crate::constants::TODAY_LIST_LIMIT;
use crate::drill::{AnswerOutcome, QuizPhase, QuizSession};
use crate::response::{ok, ok_line, AppError, Reply};

pub fn today(ctx: &mut CommandContext<'_>) -> Result<Reply, AppError> {
    let today = ctx.state.today();
    let state = &mut *ctx.state;
    let due = state.progress.get_due(&state.catalog, today);
    if due.is_empty() {
        return Ok(ok_line("No words due for review today!"));
    }

    let mut lines = vec!["\n[Today Due Words]".to_string()];
    for entry in due.iter().take(TODAY_LIST_LIMIT) {
        let line = match state.progress.get(&entry.word) {
            Some(p) => format!(
                "- {} : {}  (next={}, streak={})",
                entry.word, entry.meaning, p.next_review, p.streak
            ),
            None => format!("- {} : {}", entry.word, entry.meaning),
        };
        lines.push(line);
    }
    Ok(ok(lines))
}

/// One review round. Each answer is appended to the attempt file before it is
/// scored; the progress document is written once when the round ends, even
/// if an append failed.
pub fn quiz(ctx: &mut CommandContext<'_>) -> Result<Reply, AppError> {
    let today = ctx.state.today();
    let limit = ctx.state.config.quiz_size.max(1);
    let state = &mut *ctx.state;
    let console = &mut *ctx.console;

    let mut session = QuizSession::start(
        &state.catalog,
        &mut state.progress,
        &mut state.attempts,
        today,
        limit,
        &mut *ctx.rng,
    );
    if session.phase() == QuizPhase::NothingDue {
        return Ok(ok_line(
            "No words due today. Add some with 'add' or come back tomorrow!",
        ));
    }

    console.print("\n[Quiz: meaning -> word] (type 'q' to quit)")?;
    let mut failure = None;
    while let Some(entry) = session.current() {
        let question = format!("meaning: {}  word? ", entry.meaning);
        let answer = match console.read_line(&question)? {
            Some(line) => line.trim().to_string(),
            None => {
                session.quit();
                break;
            }
        };

        let store = &state.store;
        match session.submit_with(&answer, |attempt| store.append_attempt(attempt)) {
            Ok(Some(AnswerOutcome::Scored {
                attempt, expected, ..
            })) => {
                if attempt.is_correct {
                    console.print("Correct")?;
                } else {
                    console.print(&format!("Wrong (answer: {expected})"))?;
                }
            }
            Ok(Some(AnswerOutcome::Quit)) | Ok(None) => break,
            Err(err) => {
                failure = Some(err);
                session.quit();
                break;
            }
        }
    }

    let summary = session.summary();
    drop(session);
    state.store.save_progress(&state.progress)?;
    if let Some(err) = failure {
        return Err(err.into());
    }

    tracing::info!(
        asked = summary.asked,
        correct = summary.correct,
        quit_early = summary.quit_early,
        "Quiz session finished"
    );

    let mut lines = vec![
        "Quiz finished.".to_string(),
        format!("Score: {}/{} correct", summary.correct, summary.asked),
    ];
    if summary.quit_early {
        lines.push(format!("{} word(s) left for later.", summary.unasked()));
    }
    Ok(ok(lines))
}

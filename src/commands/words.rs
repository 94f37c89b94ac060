use crate::commands::CommandContext;
use crate::response::{ok, ok_line, AppError, Reply};
use crate::validation::{validate_meaning, validate_target, validate_word};

fn prompt(ctx: &mut CommandContext<'_>, label: &str) -> Result<String, AppError> {
    Ok(ctx.console.read_line(label)?.unwrap_or_default())
}

pub fn add(ctx: &mut CommandContext<'_>) -> Result<Reply, AppError> {
    let raw_word = prompt(ctx, "word: ")?;
    let raw_meaning = prompt(ctx, "meaning: ")?;

    let word = validate_word(&raw_word).map_err(|msg| AppError::validation("WORD_EMPTY", msg))?;
    let meaning =
        validate_meaning(&raw_meaning).map_err(|msg| AppError::validation("MEANING_EMPTY", msg))?;

    let today = ctx.state.today();
    let state = &mut *ctx.state;
    let entry = state.catalog.add(&word, &meaning)?.clone();

    if let Err(err) = state.store.append_word(&entry) {
        state.catalog.remove(&entry.word);
        return Err(err.into());
    }
    state.progress.ensure(&entry.word, today);
    state.store.save_progress(&state.progress)?;

    tracing::info!(word = %entry.word, "Word added");
    Ok(ok_line(format!("Added: {} - {}", entry.word, entry.meaning)))
}

pub fn list(ctx: &mut CommandContext<'_>) -> Result<Reply, AppError> {
    let catalog = &ctx.state.catalog;
    if catalog.is_empty() {
        return Ok(ok_line("The word list is empty."));
    }

    let mut lines = vec!["\n[All Words]".to_string()];
    lines.extend(
        catalog
            .list()
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {} - {}", i + 1, e.word, e.meaning)),
    );
    Ok(ok(lines))
}

/// Removes the word from the catalog, its attempt rows and its progress
/// record. An unknown word changes nothing.
pub fn remove(ctx: &mut CommandContext<'_>) -> Result<Reply, AppError> {
    let raw = prompt(ctx, "word to remove: ")?;
    let target = validate_target(&raw).map_err(|msg| AppError::validation("TARGET_EMPTY", msg))?;

    let state = &mut *ctx.state;
    if state.catalog.find(&target).is_none() {
        return Err(AppError::not_found(&format!(
            "'{target}' was not found in the word list."
        )));
    }

    // attempts first: a failed rewrite here leaves the word list untouched
    let mut kept = state.attempts.clone();
    let purged = kept.purge_word(&target);
    state.store.save_attempts(&kept)?;
    state.attempts = kept;

    state.catalog.remove(&target);
    state.store.save_words(state.catalog.list())?;

    state.progress.remove(&target);
    state.store.save_progress(&state.progress)?;

    tracing::info!(word = %target, purged_attempts = purged, "Word removed");
    Ok(ok_line(format!("Removed: {target}")))
}

use crate::commands::{help_text, CommandContext};
use crate::constants::RESET_CONFIRM_TOKEN;
use crate::response::{exit as exit_reply, ok_line, AppError, Reply};

pub fn reset(ctx: &mut CommandContext<'_>) -> Result<Reply, AppError> {
    ctx.console
        .print("Warning: the word list, progress and quiz history will all be deleted.")?;
    let confirm = ctx
        .console
        .read_line(&format!("Type {RESET_CONFIRM_TOKEN} to continue: "))?
        .unwrap_or_default();
    if confirm.trim() != RESET_CONFIRM_TOKEN {
        return Ok(ok_line("Cancelled."));
    }

    let state = &mut *ctx.state;
    state.store.reset()?;
    state.catalog.clear();
    state.progress.clear();
    state.attempts.clear();
    Ok(ok_line("Reset complete."))
}

pub fn help(_ctx: &mut CommandContext<'_>) -> Result<Reply, AppError> {
    Ok(ok_line(help_text()))
}

pub fn exit(_ctx: &mut CommandContext<'_>) -> Result<Reply, AppError> {
    Ok(exit_reply("Good work. Good luck on your vocab test!"))
}

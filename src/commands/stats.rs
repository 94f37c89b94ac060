use crate::commands::CommandContext;
use crate::constants::MOST_WRONG_TOP_K;
use crate::drill::stats::{most_wrong, overall_accuracy};
use crate::response::{ok, AppError, Reply};

pub fn stats(ctx: &mut CommandContext<'_>) -> Result<Reply, AppError> {
    let accuracy = overall_accuracy(&ctx.state.attempts);
    let mut lines = vec!["\n[Stats]".to_string()];
    match accuracy.percentage() {
        Some(_) => lines.push(format!("- Overall accuracy: {accuracy}")),
        None => lines.push("- No quiz attempts yet.".to_string()),
    }

    let missed = most_wrong(&ctx.state.progress, MOST_WRONG_TOP_K);
    if !missed.is_empty() {
        lines.push("- Most wrong words:".to_string());
        lines.extend(missed.iter().map(|(w, n)| format!("  * {w}: {n}")));
    }
    Ok(ok(lines))
}

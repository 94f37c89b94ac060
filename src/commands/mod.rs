//! 命令分发：命令名 → 处理函数的有限映射，以及交互主循环。

pub mod review;
pub mod stats;
pub mod system;
pub mod words;

use std::io;

use rand::RngCore;

use crate::console::Console;
use crate::response::{ok_line, AppError, Control, Reply};
use crate::state::AppState;
use crate::validation::normalize_command;

pub const PROMPT: &str = "\n> ";
pub const BANNER: &str = "=== English Word Drill ===";

/// What a handler gets: the state it may mutate, the operator console and the
/// randomness source for quiz shuffles.
pub struct CommandContext<'a> {
    pub state: &'a mut AppState,
    pub console: &'a mut dyn Console,
    pub rng: &'a mut dyn RngCore,
}

pub type Handler = fn(&mut CommandContext<'_>) -> Result<Reply, AppError>;

pub struct Command {
    pub name: &'static str,
    pub summary: &'static str,
    pub handler: Handler,
}

pub const COMMANDS: &[Command] = &[
    Command {
        name: "add",
        summary: "add a word (duplicates are not added)",
        handler: words::add,
    },
    Command {
        name: "list",
        summary: "show every word",
        handler: words::list,
    },
    Command {
        name: "today",
        summary: "show words due for review today",
        handler: review::today,
    },
    Command {
        name: "quiz",
        summary: "quiz (meaning -> word)",
        handler: review::quiz,
    },
    Command {
        name: "stats",
        summary: "accuracy and most-missed words",
        handler: stats::stats,
    },
    Command {
        name: "remove",
        summary: "delete one word with its progress and attempts",
        handler: words::remove,
    },
    Command {
        name: "reset",
        summary: "wipe the word list, progress and attempt log",
        handler: system::reset,
    },
    Command {
        name: "help",
        summary: "show commands",
        handler: system::help,
    },
    Command {
        name: "exit",
        summary: "quit",
        handler: system::exit,
    },
];

pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}

pub fn help_text() -> String {
    let mut text = String::from("Commands:");
    for command in COMMANDS {
        text.push_str(&format!("\n  {:<7} : {}", command.name, command.summary));
    }
    text
}

/// Runs one command line. Unknown names are answered, not failed.
pub fn dispatch(raw: &str, ctx: &mut CommandContext<'_>) -> Result<Reply, AppError> {
    let name = normalize_command(raw);
    match find_command(&name) {
        Some(command) => {
            tracing::debug!(command = command.name, "Dispatching command");
            (command.handler)(ctx)
        }
        None => Ok(ok_line("Unknown command. Type 'help'.")),
    }
}

/// The operator loop. Returns once `exit` runs or input ends. Command failures
/// are printed and the loop keeps going.
pub fn run_loop(
    state: &mut AppState,
    console: &mut dyn Console,
    rng: &mut dyn RngCore,
) -> io::Result<()> {
    console.print(BANNER)?;
    console.print(&help_text())?;

    let mut ctx = CommandContext {
        state,
        console,
        rng,
    };

    loop {
        let line = match ctx.console.read_line(PROMPT)? {
            Some(line) => line,
            None => "exit".to_string(),
        };
        if line.trim().is_empty() {
            continue;
        }

        match dispatch(&line, &mut ctx) {
            Ok(reply) => {
                if !reply.lines.is_empty() {
                    ctx.console.print(&reply.text())?;
                }
                if reply.control == Control::Exit {
                    break;
                }
            }
            Err(err) => {
                tracing::warn!(command = %line.trim(), code = %err.code, "Command failed");
                ctx.console.print(&err.render())?;
            }
        }
    }

    tracing::info!("Command loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_is_routed_once() {
        for name in ["add", "list", "today", "quiz", "stats", "remove", "reset", "help", "exit"] {
            assert!(find_command(name).is_some(), "missing {name}");
        }
        assert_eq!(COMMANDS.len(), 9);
        assert!(find_command("ADD").is_none());
    }

    #[test]
    fn help_lists_all_commands() {
        let text = help_text();
        for command in COMMANDS {
            assert!(text.contains(command.name));
        }
    }
}

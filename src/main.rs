use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use word_drill::commands::run_loop;
use word_drill::config::Config;
use word_drill::console::StdConsole;
use word_drill::logging::init_tracing;
use word_drill::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "word-drill")]
#[command(about = "Spaced-repetition vocabulary drills on the command line")]
struct Args {
    /// Directory holding words.csv, progress.json and attempts.csv
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Maximum number of words per quiz round
    #[arg(short, long)]
    quiz_size: Option<usize>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = Config::from_env();
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(size) = args.quiz_size {
        config = config.with_quiz_size(size);
    }
    if args.today.is_some() {
        config.fixed_today = args.today;
    }

    init_tracing(&config.log_config());
    tracing::info!(?config, "Starting word-drill");

    let mut state = AppState::open(config)?;
    let mut console = StdConsole::stdio();
    let mut rng = rand::thread_rng();
    run_loop(&mut state, &mut console, &mut rng)?;

    Ok(())
}

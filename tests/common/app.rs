use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use word_drill::commands::{dispatch, CommandContext};
use word_drill::config::Config;
use word_drill::console::Console;
use word_drill::response::{AppError, Reply};
use word_drill::state::{AppState, Clock};

pub struct TestApp {
    pub state: AppState,
    pub config: Config,
    pub rng: StdRng,
    pub temp_dir: TempDir,
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn test_config(temp_dir: &TempDir, today: NaiveDate) -> Config {
    Config {
        fixed_today: Some(today),
        ..Config::for_data_dir(temp_dir.path())
    }
}

pub fn spawn_test_app(today: NaiveDate) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    spawn_in(temp_dir, today)
}

/// Opens state over an existing directory, as a fresh process would.
pub fn spawn_in(temp_dir: TempDir, today: NaiveDate) -> TestApp {
    let config = test_config(&temp_dir, today);
    spawn_with(temp_dir, config)
}

pub fn spawn_with(temp_dir: TempDir, config: Config) -> TestApp {
    let state = AppState::open(config.clone()).expect("open state");
    TestApp {
        state,
        config,
        rng: StdRng::seed_from_u64(42),
        temp_dir,
    }
}

impl TestApp {
    pub fn run(&mut self, command: &str, console: &mut dyn Console) -> Result<Reply, AppError> {
        let mut ctx = CommandContext {
            state: &mut self.state,
            console,
            rng: &mut self.rng,
        };
        dispatch(command, &mut ctx)
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.state.set_clock(Clock::Fixed(today));
    }

    /// Simulates a restart over the same data directory.
    pub fn restart(self) -> TestApp {
        let today = self.state.today();
        spawn_in(self.temp_dir, today)
    }

    /// Swaps a data file for a directory so every later write to it fails.
    pub fn break_file(&self, name: &str) {
        let path = self.temp_dir.path().join(name);
        std::fs::remove_file(&path).expect("remove data file");
        std::fs::create_dir(&path).expect("create blocking dir");
    }

    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.temp_dir.path().join(name)).expect("read data file")
    }
}

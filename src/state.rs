use chrono::NaiveDate;

use crate::config::Config;
use crate::drill::{AttemptLog, ProgressStore, WordCatalog};
use crate::store::{Store, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => chrono::Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Everything a command handler reads or mutates: the config, the store, and
/// the in-memory catalog/progress/log loaded from it at startup.
#[derive(Debug)]
pub struct AppState {
    pub(crate) config: Config,
    pub(crate) store: Store,
    pub(crate) catalog: WordCatalog,
    pub(crate) progress: ProgressStore,
    pub(crate) attempts: AttemptLog,
    clock: Clock,
}

impl AppState {
    /// Opens the store, loads all three files and backfills a progress record
    /// for every catalog word, persisting progress once.
    pub fn open(config: Config) -> Result<Self, StoreError> {
        let store = Store::open(config.store_paths())?;
        let catalog = WordCatalog::from_entries(store.load_words()?);
        let mut progress = store.load_progress()?;
        let attempts = store.load_attempts()?;
        let clock = match config.fixed_today {
            Some(date) => Clock::Fixed(date),
            None => Clock::System,
        };

        let today = clock.today();
        for entry in catalog.list() {
            progress.ensure(&entry.word, today);
        }
        store.save_progress(&progress)?;

        tracing::info!(
            words = catalog.len(),
            progress = progress.len(),
            attempts = attempts.len(),
            %today,
            "State loaded"
        );

        Ok(Self {
            config,
            store,
            catalog,
            progress,
            attempts,
            clock,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn attempts(&self) -> &AttemptLog {
        &self.attempts
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

use std::{
    cell::Cell,
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Number of entries kept by a repository.
pub const MAX_ENTRIES: usize = 100;

pub static LOG: Mutex<Option<Arc<dyn Repository>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Service {
    fn get_log_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn add_log_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    /// Newest entry first.
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    /// Implementations keep at most [`MAX_ENTRIES`] entries.
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(repository: Arc<dyn Repository>, level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        };

        if entry.level <= Level::Warn {
            eprintln!("{} {:<5} {}", entry.time, entry.level, entry.message);
        }

        if WRITING.get() {
            return;
        }
        match LOG.lock() {
            Ok(log) => {
                if let Some(repository) = log.as_deref() {
                    write_entry(repository, entry);
                }
            }
            Err(err) => eprintln!("failed to access log repository: {err}"),
        }
    }

    fn flush(&self) {}
}

thread_local! {
    static WRITING: Cell<bool> = const { Cell::new(false) };
}

/// Records emitted by the repository while it writes an entry are dropped.
///
/// The logger calls this with the lock of [`LOG`] held.
fn write_entry(repository: &dyn Repository, entry: Entry) {
    if WRITING.replace(true) {
        return;
    }
    if let Err(err) = repository.write_entry(entry) {
        eprintln!("failed to write log entry: {err}");
    }
    WRITING.set(false);
}

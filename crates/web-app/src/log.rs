use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Number of entries kept by a log repository.
pub const CAPACITY: usize = 100;

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

impl Entry {
    #[must_use]
    pub fn new(level: Level, message: String) -> Self {
        Self {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level,
            message,
        }
    }
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

/// Adds an entry as the newest one and drops the oldest entries beyond
/// [`CAPACITY`].
pub fn append(entries: &mut VecDeque<Entry>, entry: Entry) {
    entries.push_front(entry);
    entries.truncate(CAPACITY);
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();

        #[cfg(target_arch = "wasm32")]
        match record.level() {
            Level::Error => gloo_console::error!(message.clone()),
            Level::Warn => gloo_console::warn!(message.clone()),
            Level::Info => gloo_console::info!(message.clone()),
            Level::Debug | Level::Trace => gloo_console::debug!(message.clone()),
        }

        if let Ok(log) = LOG.lock() {
            if let Some(repository) = log.as_ref() {
                if let Ok(repository) = repository.lock() {
                    let _ = repository.write_entry(Entry::new(record.level(), message));
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use gymlog_domain::{WeightPair, range};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct Entries(Mutex<VecDeque<Entry>>);

    impl Repository for Entries {
        fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
            self.0
                .lock()
                .map(|entries| entries.clone())
                .map_err(|err| Error::Unknown(err.to_string()))
        }

        fn write_entry(&self, entry: Entry) -> Result<(), Error> {
            let mut entries = self
                .0
                .lock()
                .map_err(|err| Error::Unknown(err.to_string()))?;
            append(&mut entries, entry);
            Ok(())
        }
    }

    fn entries(repository: &Mutex<Entries>) -> VecDeque<Entry> {
        repository.lock().unwrap().read_entries().unwrap()
    }

    // The only test installing the global logger.
    #[test]
    fn test_init_records_parse_warning() {
        let repository = Arc::new(Mutex::new(Entries::default()));
        init(repository.clone()).unwrap();

        assert_eq!(range::parse("garbage!!"), WeightPair::default());

        assert!(entries(&repository).iter().any(|entry| {
            entry.level == Level::Warn && entry.message.contains("garbage!!")
        }));

        ::log::trace!("below max level");
        assert!(
            !entries(&repository)
                .iter()
                .any(|entry| entry.message == "below max level")
        );

        ::log::debug!("stored debug message");
        assert!(entries(&repository).iter().any(|entry| {
            entry.level == Level::Debug && entry.message == "stored debug message"
        }));

        assert!(init(repository).is_err());
    }

    fn entry(message: &str) -> Entry {
        Entry {
            time: String::from("Oct 18 09:30:00"),
            level: Level::Warn,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_append() {
        let mut entries = VecDeque::new();
        for i in 0..=CAPACITY {
            append(&mut entries, entry(&i.to_string()));
        }
        assert_eq!(entries.len(), CAPACITY);
        assert_eq!(entries.front().unwrap().message, CAPACITY.to_string());
        assert_eq!(entries.back().unwrap().message, "1");
    }

    #[test]
    fn test_entry_serde() {
        let serialized = json!(entry("failed to parse weight range \"x\""));
        assert_eq!(
            serialized,
            json!({
                "time": "Oct 18 09:30:00",
                "level": "Warn",
                "message": "failed to parse weight range \"x\""
            })
        );
        let deserialized: Entry = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, entry("failed to parse weight range \"x\""));
    }

    #[test]
    fn test_entry_new() {
        let entry = Entry::new(Level::Info, String::from("saved"));
        assert_eq!(entry.level, Level::Info);
        assert_eq!(entry.message, "saved");
        assert!(!entry.time.is_empty());
    }
}

use std::{
    collections::VecDeque,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

const MAX_ENTRIES: usize = 100;

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

/// Install the logger. Records are written to stderr and, if given, to the journal.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(
    journal: Option<Arc<Mutex<dyn Repository>>>,
    max_level: LevelFilter,
) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = journal;
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
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

        let message = record.args().to_string();
        eprintln!("[{}] {message}", record.level());

        if let Ok(log) = LOG.lock() {
            if let Some(journal) = log.as_ref() {
                if let Ok(journal) = journal.lock() {
                    let _ = journal.write_entry(Entry {
                        time: Local::now().format("%b %d %H:%M:%S").to_string(),
                        level: record.level(),
                        message,
                    });
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Journal kept as a JSON file, newest entry first.
pub struct JsonJournal {
    path: PathBuf,
}

impl JsonJournal {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Repository for JsonJournal {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|err| Error::Unknown(err.to_string())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(VecDeque::new()),
            Err(err) => Err(Error::Unknown(err.to_string())),
        }
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_ENTRIES);
        let text = serde_json::to_string(&entries).map_err(|err| Error::Unknown(err.to_string()))?;
        fs::write(&self.path, text).map_err(|err| Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: "Oct 16 10:00:00".to_string(),
            level: Level::Warn,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_journal_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let journal = JsonJournal::new(dir.path().join("log.json"));

        assert_eq!(journal.read_entries(), Ok(VecDeque::new()));
    }

    #[test]
    fn test_journal_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let journal = JsonJournal::new(dir.path().join("log.json"));

        journal.write_entry(entry("a")).unwrap();
        journal.write_entry(entry("b")).unwrap();

        assert_eq!(
            journal.read_entries(),
            Ok(VecDeque::from([entry("b"), entry("a")]))
        );
    }

    #[test]
    fn test_journal_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let journal = JsonJournal::new(dir.path().join("log.json"));

        for i in 0..=MAX_ENTRIES {
            journal.write_entry(entry(&i.to_string())).unwrap();
        }

        let entries = journal.read_entries().unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries.front(), Some(&entry(&MAX_ENTRIES.to_string())));
        assert_eq!(entries.back(), Some(&entry("1")));
    }

    #[test]
    fn test_journal_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        fs::write(&path, "entries").unwrap();

        assert!(matches!(
            JsonJournal::new(path).read_entries(),
            Err(Error::Unknown(_))
        ));
    }

    #[test]
    fn test_entry_level_format() {
        assert_eq!(
            serde_json::to_string(&entry("m")).unwrap(),
            r#"{"time":"Oct 16 10:00:00","level":"Warn","message":"m"}"#
        );
    }
}

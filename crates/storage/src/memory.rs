use std::{
    cell::RefCell,
    collections::{BTreeMap, VecDeque},
    sync::Mutex,
};

use gymlog_domain as domain;
use gymlog_web_app::log;

use crate::{history_key, model};

/// Key-value store kept in memory, holding the same serialized values as
/// the browser's local storage.
#[derive(Default)]
pub struct Memory {
    items: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the total size of all keys and values in bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: RefCell::default(),
            quota: Some(quota),
        }
    }

    #[must_use]
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<(), domain::StorageError> {
        let mut items = self.items.borrow_mut();
        if let Some(quota) = self.quota {
            let used = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum::<usize>();
            if used + key.len() + value.len() > quota {
                return Err(domain::StorageError::QuotaExceeded);
            }
        }
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl domain::HistoryRepository for Memory {
    fn read_history(
        &self,
        group: domain::MuscleGroup,
    ) -> Result<domain::HistoryLog, domain::ReadError> {
        let Some(value) = self.get_item(&history_key(group)) else {
            return Ok(domain::HistoryLog::new());
        };
        let records: Vec<model::SessionRecord> = serde_json::from_str(&value)
            .map_err(|err| domain::ReadError::Corrupt(err.to_string()))?;
        model::decode(records).map_err(|err| domain::ReadError::Corrupt(err.to_string()))
    }

    fn write_history(
        &self,
        group: domain::MuscleGroup,
        history: &domain::HistoryLog,
    ) -> Result<(), domain::WriteError> {
        let value = serde_json::to_string(&model::encode(history))
            .map_err(|err| domain::WriteError::Other(err.into()))?;
        Ok(self.set_item(&history_key(group), &value)?)
    }
}

#[derive(Default)]
pub struct Log(Mutex<VecDeque<log::Entry>>);

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.0
            .lock()
            .map(|entries| entries.clone())
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self
            .0
            .lock()
            .map_err(|err| log::Error::Unknown(err.to_string()))?;
        log::append(&mut entries, entry);
        Ok(())
    }
}

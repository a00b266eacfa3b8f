use std::collections::VecDeque;

use gloo_storage::{Storage as GlooStorage, errors::StorageError as GlooStorageError};
use gymlog_domain as domain;
use gymlog_web_app::log;

use crate::{history_key, model};

/// Session history kept in the browser's local storage.
pub struct LocalStorage;

impl domain::HistoryRepository for LocalStorage {
    fn read_history(
        &self,
        group: domain::MuscleGroup,
    ) -> Result<domain::HistoryLog, domain::ReadError> {
        match gloo_storage::LocalStorage::get::<Vec<model::SessionRecord>>(history_key(group)) {
            Ok(records) => {
                model::decode(records).map_err(|err| domain::ReadError::Corrupt(err.to_string()))
            }
            Err(err) => match err {
                GlooStorageError::KeyNotFound(key) => {
                    ::log::debug!("no history stored under {key}");
                    Ok(domain::HistoryLog::new())
                }
                GlooStorageError::SerdeError(err) => {
                    Err(domain::ReadError::Corrupt(err.to_string()))
                }
                err => Err(domain::ReadError::Storage(storage_error(err))),
            },
        }
    }

    fn write_history(
        &self,
        group: domain::MuscleGroup,
        history: &domain::HistoryLog,
    ) -> Result<(), domain::WriteError> {
        gloo_storage::LocalStorage::set(history_key(group), model::encode(history))
            .map_err(|err| match err {
                GlooStorageError::SerdeError(err) => domain::WriteError::Other(err.into()),
                err => domain::WriteError::Storage(storage_error(err)),
            })
    }
}

fn storage_error(err: GlooStorageError) -> domain::StorageError {
    match err {
        GlooStorageError::JsError(ref js) if js.name == "QuotaExceededError" => {
            domain::StorageError::QuotaExceeded
        }
        err => domain::StorageError::Other(err.into()),
    }
}

pub struct Log;

const KEY_LOG: &str = "log";

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                GlooStorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::append(&mut entries, entry);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

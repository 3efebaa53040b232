use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;
use gymlog_domain::StorageError;
use gymlog_web_app::log;

use crate::{Key, KeyValueStore};

/// The browser's `localStorage`.
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        gloo_storage::LocalStorage::raw()
            .get_item(key)
            .map_err(|err| StorageError::Other(format!("{err:?}").into()))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        gloo_storage::LocalStorage::raw()
            .set_item(key, &value)
            .map_err(|err| StorageError::Other(format!("{err:?}").into()))
    }
}

pub struct Log;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(Key::Log.as_ref()) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::push_entry(&mut entries, entry);
        gloo_storage::LocalStorage::set(Key::Log.as_ref(), entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

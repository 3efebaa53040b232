#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use gymlog_domain::StorageError;
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

pub mod local_storage;
pub mod memory;
mod settings;
mod workouts;

pub use local_storage::LocalStorage;
pub use memory::MemoryStorage;

/// A string key-value store holding the persisted state of the app.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Key {
    Workouts,
    Settings,
    Log,
}

/// Repositories storing each kind of data as one JSON document under its own [`Key`].
///
/// Every modification reads the whole document, changes it and writes it back. Concurrent
/// writers are not supported: the last write wins.
pub struct JsonStorage<S> {
    store: S,
}

impl<S: KeyValueStore> JsonStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn read<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, StorageError> {
        match self.store.get(key.as_ref()).await? {
            Some(value) => serde_json::from_str(&value)
                .map(Some)
                .map_err(|err| StorageError::InvalidData(err.into())),
            None => Ok(None),
        }
    }

    async fn write<T: Serialize + ?Sized>(&self, key: Key, value: &T) -> Result<(), StorageError> {
        let value = serde_json::to_string(value).map_err(|err| StorageError::Other(err.into()))?;
        self.store.set(key.as_ref(), value).await
    }
}

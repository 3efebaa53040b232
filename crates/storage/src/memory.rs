use std::{cell::RefCell, collections::BTreeMap};

use gymlog_domain::StorageError;

use crate::{Key, KeyValueStore};

/// Non-persistent store for hosts without browser storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl<const N: usize> From<[(Key, &str); N]> for MemoryStorage {
    fn from(entries: [(Key, &str); N]) -> Self {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.as_ref().to_string(), value.to_string()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_get_set() {
        let storage = MemoryStorage::from([(Key::Log, "[]")]);

        assert_eq!(block_on(storage.get("log")).unwrap(), Some(String::from("[]")));
        assert_eq!(block_on(storage.get("workouts")).unwrap(), None);

        block_on(storage.set("workouts", String::from("[]"))).unwrap();
        block_on(storage.set("log", String::from("[{}]"))).unwrap();

        assert_eq!(storage.value("workouts"), Some(String::from("[]")));
        assert_eq!(storage.value("log"), Some(String::from("[{}]")));
    }
}

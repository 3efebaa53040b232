use gymlog_web_app::{Settings, SettingsRepository};

use crate::{JsonStorage, Key, KeyValueStore};

impl<S: KeyValueStore> SettingsRepository for JsonStorage<S> {
    async fn read_settings(&self) -> Result<Settings, String> {
        self.read::<Settings>(Key::Settings)
            .await
            .map(Option::unwrap_or_default)
            .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        self.write(Key::Settings, &settings)
            .await
            .map_err(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use gymlog_domain::DateFormat;
    use pretty_assertions::assert_eq;

    use crate::MemoryStorage;

    use super::*;

    #[test]
    fn test_read_settings_missing() {
        let storage = JsonStorage::new(MemoryStorage::new());
        assert_eq!(block_on(storage.read_settings()), Ok(Settings::default()));
    }

    #[test]
    fn test_read_settings_invalid() {
        let storage = JsonStorage::new(MemoryStorage::from([(
            Key::Settings,
            "{\"date_format\": \"Weekly\"}",
        )]));
        assert!(block_on(storage.read_settings()).is_err());
    }

    #[test]
    fn test_write_settings() {
        let storage = JsonStorage::new(MemoryStorage::new());
        let settings = Settings {
            date_format: DateFormat::DayMonthYear,
        };

        assert_eq!(block_on(storage.write_settings(settings)), Ok(()));
        assert_eq!(
            storage.store().value("settings"),
            Some(String::from("{\"date_format\":\"DayMonthYear\"}"))
        );
        assert_eq!(block_on(storage.read_settings()), Ok(settings));
    }
}

use gymlog_domain::DateFormat;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

/// User preferences. Missing fields take their default value when read.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "DateFormatDef")]
    pub date_format: DateFormat,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(remote = "DateFormat")]
enum DateFormatDef {
    MonthDayYear,
    DayMonthYear,
    Iso,
}

use std::{path::PathBuf, time::Duration};

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, SettingsError>;
    async fn set_settings(&self, settings: Settings) -> Result<(), SettingsError>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    /// The default settings if none have been stored.
    async fn read_settings(&self) -> Result<Settings, SettingsError>;
    async fn write_settings(&self, settings: Settings) -> Result<(), SettingsError>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of workouts shown on the home screen
    pub recent_workouts: usize,
    /// Refresh interval of the elapsed time display
    pub timer_interval_ms: u64,
    /// Directory of the file store, the platform data directory if unset
    pub storage_dir: Option<PathBuf>,
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.recent_workouts == 0 {
            return Err(SettingsError::Invalid(
                "number of recent workouts must be positive".into(),
            ));
        }
        if !(100..=60_000).contains(&self.timer_interval_ms) {
            return Err(SettingsError::Invalid(format!(
                "timer interval must be between 100 and 60000 ms ({})",
                self.timer_interval_ms
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn timer_interval(&self) -> Duration {
        Duration::from_millis(self.timer_interval_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recent_workouts: 3,
            timer_interval_ms: 1000,
            storage_dir: None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Invalid(String),
    #[error("{0}")]
    Storage(String),
}

use std::collections::VecDeque;

use ::log::warn;

use crate::{Settings, SettingsError, SettingsRepository, SettingsService, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    /// Invalid stored settings are replaced by the defaults.
    async fn get_settings(&self) -> Result<Settings, SettingsError> {
        let settings = self.repository.read_settings().await?;
        match settings.validate() {
            Ok(()) => Ok(settings),
            Err(err) => {
                warn!("using default settings: {err}");
                Ok(Settings::default())
            }
        }
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.repository.write_settings(settings).await
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, sync::Mutex};

    use pretty_assertions::assert_eq;

    use crate::log::Service as _;

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        settings: RefCell<Option<Settings>>,
    }

    impl SettingsRepository for FakeRepository {
        async fn read_settings(&self) -> Result<Settings, SettingsError> {
            Ok(self.settings.borrow().clone().unwrap_or_default())
        }

        async fn write_settings(&self, settings: Settings) -> Result<(), SettingsError> {
            *self.settings.borrow_mut() = Some(settings);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_settings() {
        let service = Service::new(FakeRepository::default());
        assert_eq!(service.get_settings().await, Ok(Settings::default()));

        let settings = Settings {
            recent_workouts: 5,
            ..Settings::default()
        };
        service.set_settings(settings.clone()).await.unwrap();
        assert_eq!(service.get_settings().await, Ok(settings));
    }

    #[tokio::test]
    async fn test_set_invalid_settings() {
        let service = Service::new(FakeRepository::default());
        assert!(matches!(
            service
                .set_settings(Settings {
                    timer_interval_ms: 0,
                    ..Settings::default()
                })
                .await,
            Err(SettingsError::Invalid(_))
        ));
        assert_eq!(*service.repository.settings.borrow(), None);
    }

    #[tokio::test]
    async fn test_get_invalid_stored_settings() {
        let repository = FakeRepository::default();
        *repository.settings.borrow_mut() = Some(Settings {
            recent_workouts: 0,
            ..Settings::default()
        });
        let service = Service::new(repository);
        assert_eq!(service.get_settings().await, Ok(Settings::default()));
    }

    struct Entries(Mutex<VecDeque<log::Entry>>);

    impl log::Repository for Entries {
        fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
            Ok(self.0.lock().unwrap().clone())
        }

        fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
            self.0.lock().unwrap().push_front(entry);
            Ok(())
        }
    }

    #[test]
    fn test_log_entries() {
        let service = Service::new(Entries(Mutex::new(VecDeque::new())));
        let entry = log::Entry {
            time: String::from("Jan 05 07:30:00"),
            level: ::log::Level::Info,
            message: String::from("loaded 3 workouts and 0 goals"),
        };
        service.add_log_entry(entry.clone()).unwrap();
        assert_eq!(service.get_log_entries().unwrap(), VecDeque::from([entry]));
    }
}

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::{collections::VecDeque, sync::Arc};

use fittrack_app::{Settings, SettingsError, SettingsRepository, log::MAX_ENTRIES};
use fittrack_domain as domain;
use log::debug;
use strum::AsRefStr;

mod dto;
pub mod local_storage;
pub mod memory;

pub use local_storage::LocalStorage;
pub use memory::InMemoryStore;

/// Asynchronous access to byte values stored under string keys.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}

/// Synchronous store implementation.
///
/// The log repository is written from within the logger and cannot await.
pub trait Backend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

impl<B: Backend> KeyValueStore for B {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.read(key)
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.write(key, &value)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("store unavailable")]
    Unavailable,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for domain::StorageError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Unavailable => domain::StorageError::Unavailable,
            StoreError::Io(err) => domain::StorageError::Other(Box::new(err)),
        }
    }
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "workout-storage")]
    WorkoutStorage,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}

/// Repositories of the domain and the application on top of a key-value store.
pub struct Storage<S> {
    store: S,
}

impl<S> Storage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> domain::StateRepository for Storage<S> {
    async fn load_state(&self) -> Result<Option<domain::PersistedState>, domain::ReadError> {
        let Some(bytes) = self
            .store
            .get(Key::WorkoutStorage.as_ref())
            .await
            .map_err(domain::StorageError::from)?
        else {
            return Ok(None);
        };
        let document: dto::Document = serde_json::from_slice(&bytes)
            .map_err(|err| domain::StorageError::Corrupt(err.to_string()))?;
        Ok(Some(
            domain::PersistedState::try_from(document.state)
                .map_err(|err| domain::StorageError::Corrupt(err.to_string()))?,
        ))
    }

    async fn save_state(&self, state: &domain::PersistedState) -> Result<(), domain::WriteError> {
        let bytes = serde_json::to_vec(&dto::Document::from(state))
            .map_err(|err| domain::WriteError::Other(Box::new(err)))?;
        self.store
            .set(Key::WorkoutStorage.as_ref(), bytes)
            .await
            .map_err(domain::StorageError::from)?;
        debug!(
            "saved {} workouts and {} goals",
            state.history.len(),
            state.goals.len()
        );
        Ok(())
    }
}

impl<S: KeyValueStore> SettingsRepository for Storage<S> {
    async fn read_settings(&self) -> Result<Settings, SettingsError> {
        match self
            .store
            .get(Key::Settings.as_ref())
            .await
            .map_err(|err| SettingsError::Storage(err.to_string()))?
        {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| SettingsError::Storage(err.to_string())),
            None => Ok(Settings::default()),
        }
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), SettingsError> {
        let bytes = serde_json::to_vec(&settings)
            .map_err(|err| SettingsError::Storage(err.to_string()))?;
        self.store
            .set(Key::Settings.as_ref(), bytes)
            .await
            .map_err(|err| SettingsError::Storage(err.to_string()))
    }
}

impl<S: Backend + 'static> fittrack_app::log::Repository for Storage<S> {
    fn read_entries(&self) -> Result<VecDeque<fittrack_app::log::Entry>, fittrack_app::log::Error> {
        match self.store.read(Key::Log.as_ref()) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes)
                .map_err(|err| fittrack_app::log::Error::Unknown(err.to_string())),
            Ok(None) => Ok(VecDeque::new()),
            Err(err) => Err(fittrack_app::log::Error::Unknown(err.to_string())),
        }
    }

    fn write_entry(&self, entry: fittrack_app::log::Entry) -> Result<(), fittrack_app::log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_ENTRIES);
        let bytes = serde_json::to_vec(&entries)
            .map_err(|err| fittrack_app::log::Error::Unknown(err.to_string()))?;
        self.store
            .write(Key::Log.as_ref(), &bytes)
            .map_err(|err| fittrack_app::log::Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    pub mod data;

    use std::path::PathBuf;

    use domain::{Catalog, StateRepository};
    use fittrack_app::log::Repository as _;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use data::PERSISTED_STATE;

    use super::*;

    #[rstest]
    #[case(Key::WorkoutStorage, "workout-storage")]
    #[case(Key::Settings, "settings")]
    #[case(Key::Log, "log")]
    fn test_key(#[case] key: Key, #[case] expected: &str) {
        assert_eq!(key.as_ref(), expected);
    }

    #[tokio::test]
    async fn test_load_state_empty() {
        let storage = Storage::new(InMemoryStore::new());
        assert_eq!(storage.load_state().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_and_load_state() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(LocalStorage::new(dir.path()));

        storage.save_state(&PERSISTED_STATE).await.unwrap();

        let restored = Storage::new(LocalStorage::new(dir.path()))
            .load_state()
            .await
            .unwrap();
        assert_eq!(restored, Some(PERSISTED_STATE.clone()));
    }

    #[tokio::test]
    async fn test_load_document_of_earlier_version() {
        let store = InMemoryStore::new();
        store
            .set(
                "workout-storage",
                br#"{
                    "state": {
                        "workoutHistory": [{
                            "id": "2024-01-05T07:30:00.000Z",
                            "name": "Quick",
                            "date": "2024-01-05T07:30:00.000Z",
                            "exercises": [{
                                "id": "4",
                                "name": "Plank",
                                "category": "strength",
                                "muscleGroups": ["core", "shoulders"],
                                "difficulty": "beginner",
                                "description": "An isometric core exercise.",
                                "instructions": [],
                                "caloriesPerMinute": 5,
                                "imageUrl": "https://example.com/plank.jpg",
                                "duration": 1,
                                "completed": true,
                                "actualDuration": 2
                            }],
                            "duration": 3,
                            "caloriesBurned": 10
                        }],
                        "workoutGoals": [{
                            "id": "1704440000000",
                            "name": "Run 50 km",
                            "targetDate": "2024-06-30T00:00:00.000Z",
                            "description": "",
                            "completed": false,
                            "type": "distance",
                            "target": 50,
                            "current": 0,
                            "unit": "km"
                        }]
                    },
                    "version": 0
                }"#
                .to_vec(),
            )
            .await
            .unwrap();

        let state = Storage::new(store).load_state().await.unwrap().unwrap();

        assert_eq!(state.history.len(), 1);
        let workout = &state.history[0];
        assert_eq!(
            *workout.id,
            uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_OID, b"2024-01-05T07:30:00.000Z")
        );
        assert_eq!(workout.exercises[0].actual_duration, Some(2.0));
        assert_eq!(workout.exercises[0].calories(), 10.0);
        assert_eq!(state.goals.len(), 1);
        assert_eq!(*state.goals[0].id, uuid::Uuid::from_u128(1_704_440_000_000));
        assert_eq!(
            state.goals[0].target_date,
            chrono::NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
    }

    #[tokio::test]
    async fn test_load_corrupt_state() {
        let store = InMemoryStore::new();
        store
            .set("workout-storage", b"{\"state\":".to_vec())
            .await
            .unwrap();
        assert!(matches!(
            Storage::new(store).load_state().await,
            Err(domain::ReadError::Storage(domain::StorageError::Corrupt(_)))
        ));
    }

    #[tokio::test]
    async fn test_save_state_unavailable() {
        let store = Arc::new(InMemoryStore::new());
        store.set_available(false);
        assert!(matches!(
            Storage::new(store.clone())
                .save_state(&PERSISTED_STATE)
                .await,
            Err(domain::WriteError::Storage(
                domain::StorageError::Unavailable
            ))
        ));
    }

    #[tokio::test]
    async fn test_settings() {
        let storage = Storage::new(InMemoryStore::new());
        assert_eq!(storage.read_settings().await, Ok(Settings::default()));

        let settings = Settings {
            recent_workouts: 5,
            timer_interval_ms: 500,
            storage_dir: Some(PathBuf::from("/var/lib/fittrack")),
        };
        storage.write_settings(settings.clone()).await.unwrap();
        assert_eq!(storage.read_settings().await, Ok(settings));
    }

    #[test]
    fn test_log_entries_are_truncated() {
        let storage = Storage::new(InMemoryStore::new());
        for i in 0..=MAX_ENTRIES {
            storage
                .write_entry(fittrack_app::log::Entry {
                    time: String::from("Jan 05 07:30:00"),
                    level: log::Level::Info,
                    message: format!("entry {i}"),
                })
                .unwrap();
        }

        let entries = storage.read_entries().unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].message, format!("entry {MAX_ENTRIES}"));
        assert_eq!(entries[MAX_ENTRIES - 1].message, "entry 1");
    }

    #[test]
    fn test_file_backed_logger() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(Storage::new(LocalStorage::new(dir.path())));
        fittrack_app::log::init(storage.clone(), log::LevelFilter::Debug).unwrap();

        log::debug!("file logger installed");
        log::set_max_level(log::LevelFilter::Off);

        assert!(
            storage
                .read_entries()
                .unwrap()
                .iter()
                .any(|e| e.level == log::Level::Debug && e.message == "file logger installed")
        );
    }

    #[tokio::test]
    async fn test_service_round_trip() {
        let store = Arc::new(InMemoryStore::new());
        let mut service = domain::Service::new(Storage::new(store.clone()));
        service.initialize().await;
        service
            .add_exercise(domain::BuiltinCatalog.get_by_id(&"1".into()).unwrap())
            .await;
        service
            .start_workout(&domain::Name::new("Push").unwrap())
            .await
            .unwrap();

        store.set_available(false);
        let workout = service.end_workout(None).await.unwrap();
        assert!(service.pending_save());

        store.set_available(true);
        assert!(service.flush().await.is_ok());
        assert!(!service.pending_save());

        let mut restarted = domain::Service::new(Storage::new(store));
        restarted.initialize().await;
        assert_eq!(restarted.workout_history().len(), 1);
        assert_eq!(restarted.workout_history()[0], workout);
    }
}

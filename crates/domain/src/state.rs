use crate::{Goals, History, ReadError, WorkoutDraft, WorkoutSession, WriteError};

#[allow(async_fn_in_trait)]
pub trait StateRepository {
    /// `None` if nothing has been stored yet.
    async fn load_state(&self) -> Result<Option<PersistedState>, ReadError>;
    async fn save_state(&self, state: &PersistedState) -> Result<(), WriteError>;
}

/// The part of the application state that survives a restart.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PersistedState {
    pub history: History,
    pub goals: Goals,
}

/// Complete in-memory application state.
///
/// A draft or an active workout is lost on restart.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct State {
    pub draft: WorkoutDraft,
    pub session: WorkoutSession,
    pub history: History,
    pub goals: Goals,
}

impl State {
    #[must_use]
    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            history: self.history.clone(),
            goals: self.goals.clone(),
        }
    }

    #[must_use]
    pub fn from_persisted(persisted: PersistedState) -> Self {
        Self {
            draft: WorkoutDraft::default(),
            session: WorkoutSession::Idle,
            history: persisted.history,
            goals: persisted.goals,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use crate::{
        StartRequest,
        goal::tests::new_goal,
        workout::tests::{exercise, finished_workout},
    };

    use super::*;

    fn state() -> State {
        let mut state = State {
            history: History::new(vec![finished_workout(1, (2024, 1, 5), 35, 420.0)]),
            ..State::default()
        };
        state.goals.add(new_goal());
        state.draft.add_exercise(&exercise("2").definition);
        state
            .session
            .start(
                StartRequest::new("Active", vec![exercise("1")]),
                Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap(),
            )
            .unwrap();
        state
    }

    #[test]
    fn test_persisted_drops_transient_state() {
        let state = state();
        let persisted = state.persisted();
        assert_eq!(persisted.history, state.history);
        assert_eq!(persisted.goals, state.goals);
    }

    #[test]
    fn test_from_persisted() {
        let persisted = state().persisted();
        let restored = State::from_persisted(persisted.clone());

        assert!(!restored.session.is_active());
        assert!(restored.draft.is_empty());
        assert_eq!(restored.persisted(), persisted);
    }

    #[test]
    fn test_from_default() {
        assert_eq!(State::from_persisted(PersistedState::default()), State::default());
    }
}

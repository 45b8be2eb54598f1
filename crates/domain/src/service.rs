use chrono::{DateTime, Duration, Utc};
use log::{debug, error, info};

use crate::{
    Achievement, ExerciseDefinition, ExerciseID, ExerciseStats, GoalID, GoalUpdate, Goals,
    History, HistoryStats, MonthGroup, Name, NewGoal, ReadError, SessionError, State,
    StateRepository, Workout, WorkoutExercise, WriteError, statistics,
};

/// Owner of the application state and its persistence.
///
/// Every mutation is applied to the in-memory state first. Changes of the persisted part are
/// written afterwards. A failed write keeps the in-memory state and is retried on the next
/// mutation or by [`Service::flush`].
pub struct Service<R> {
    repository: R,
    state: State,
    pending_save: bool,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: StateRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            state: State::default(),
            pending_save: false,
        }
    }

    /// Replace the in-memory state by the stored one.
    ///
    /// Falls back to an empty history if nothing is stored or loading fails.
    pub async fn initialize(&mut self) {
        let loaded: Result<_, ReadError> =
            log_on_error!(self.repository.load_state(), ReadError, "load", "state");
        self.state = match loaded {
            Ok(Some(persisted)) => {
                info!(
                    "loaded {} workouts and {} goals",
                    persisted.history.len(),
                    persisted.goals.len()
                );
                State::from_persisted(persisted)
            }
            Ok(None) => {
                info!("no stored state found");
                State::default()
            }
            Err(_) => State::default(),
        };
        self.pending_save = false;
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.session.is_active()
    }

    #[must_use]
    pub fn current_workout(&self) -> Option<&Workout> {
        self.state.session.current_workout()
    }

    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.state.session.elapsed(now)
    }

    #[must_use]
    pub fn selected_exercises(&self) -> &[WorkoutExercise] {
        self.state.draft.exercises()
    }

    #[must_use]
    pub fn workout_history(&self) -> &History {
        &self.state.history
    }

    #[must_use]
    pub fn workout_goals(&self) -> &Goals {
        &self.state.goals
    }

    #[must_use]
    pub fn stats(&self) -> HistoryStats {
        self.state.history.stats()
    }

    #[must_use]
    pub fn recent_workouts(&self, n: usize) -> Vec<&Workout> {
        self.state.history.recent(n)
    }

    #[must_use]
    pub fn history_by_month(&self) -> Vec<MonthGroup<'_>> {
        self.state.history.group_by_month()
    }

    #[must_use]
    pub fn achievements(&self) -> Vec<Achievement> {
        statistics::achievements(&self.state.history)
    }

    /// True if the last write of the persisted state failed.
    #[must_use]
    pub fn pending_save(&self) -> bool {
        self.pending_save
    }

    pub async fn add_exercise(&mut self, definition: &ExerciseDefinition) {
        self.state.draft.add_exercise(definition);
        self.persist(false).await;
    }

    pub async fn remove_exercise(&mut self, id: &ExerciseID) {
        self.state.draft.remove_exercise(id);
        self.persist(false).await;
    }

    pub async fn start_workout(&mut self, name: &Name) -> Result<(), SessionError> {
        self.start_workout_at(name, Utc::now()).await
    }

    /// Start the selected exercises as a new workout and clear the selection.
    pub async fn start_workout_at(
        &mut self,
        name: &Name,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let result = if self.state.session.is_active() {
            Err(SessionError::AlreadyActive)
        } else {
            self.state
                .draft
                .build_start_request(name.as_str())
                .and_then(|request| self.state.session.start(request, now).map(|_| ()))
        };
        match result {
            Ok(()) => {
                self.state.draft.clear();
                info!("started workout \"{name}\"");
            }
            Err(ref err) => debug!("failed to start workout: {err}"),
        }
        self.persist(false).await;
        result
    }

    pub async fn toggle_exercise_completed(&mut self, id: &ExerciseID, completed: bool) {
        self.state.session.toggle_exercise_completed(id, completed);
        self.persist(false).await;
    }

    pub async fn update_exercise_stats(&mut self, id: &ExerciseID, stats: ExerciseStats) {
        self.state.session.update_exercise_stats(id, stats);
        self.persist(false).await;
    }

    pub async fn end_workout(&mut self, notes: Option<String>) -> Option<Workout> {
        self.end_workout_at(notes, Utc::now()).await
    }

    /// Finish the active workout, add it to the history and clear the exercise selection.
    ///
    /// Without an active workout nothing happens and `None` is returned.
    pub async fn end_workout_at(
        &mut self,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Option<Workout> {
        match self.state.session.end(notes, now) {
            Ok(workout) => {
                info!(
                    "finished workout \"{}\" ({} min, {:.0} kcal)",
                    workout.name, workout.duration, workout.calories_burned
                );
                self.state.history.append(workout.clone());
                self.state.draft.clear();
                self.persist(true).await;
                Some(workout)
            }
            Err(err) => {
                debug!("ignored end of workout: {err}");
                self.persist(false).await;
                None
            }
        }
    }

    /// Abandon the active workout and the exercise selection.
    pub async fn discard_workout(&mut self) -> bool {
        let discarded = self.state.session.discard().is_some();
        self.state.draft.clear();
        self.persist(false).await;
        discarded
    }

    pub async fn add_goal(&mut self, goal: NewGoal) -> GoalID {
        let id = self.state.goals.add(goal);
        self.persist(true).await;
        id
    }

    pub async fn update_goal(&mut self, id: GoalID, update: GoalUpdate) {
        let changed = self.state.goals.update(id, update);
        if !changed {
            debug!("goal {} not found", *id);
        }
        self.persist(changed).await;
    }

    pub async fn delete_goal(&mut self, id: GoalID) {
        let changed = self.state.goals.delete(id);
        if !changed {
            debug!("goal {} not found", *id);
        }
        self.persist(changed).await;
    }

    /// Write the current persisted state.
    pub async fn flush(&mut self) -> Result<(), WriteError> {
        let persisted = self.state.persisted();
        let result = log_on_error!(
            self.repository.save_state(&persisted),
            WriteError,
            "save",
            "state"
        );
        self.pending_save = result.is_err();
        result
    }

    async fn persist(&mut self, changed: bool) {
        if changed || self.pending_save {
            let _ = self.flush().await;
        }
    }
}

use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::{ExerciseID, ExerciseStats, SessionError, StartRequest, Workout, WorkoutID};

/// Lifecycle of the single workout that may be in progress.
///
/// Pausing is a concern of the elapsed time display only. The duration of a workout is
/// always the wall-clock time between start and end.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum WorkoutSession {
    #[default]
    Idle,
    Active(Workout),
}

impl WorkoutSession {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, WorkoutSession::Active(_))
    }

    #[must_use]
    pub fn current_workout(&self) -> Option<&Workout> {
        match self {
            WorkoutSession::Idle => None,
            WorkoutSession::Active(workout) => Some(workout),
        }
    }

    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.current_workout().map(|w| w.date)
    }

    pub fn start(
        &mut self,
        request: StartRequest,
        now: DateTime<Utc>,
    ) -> Result<WorkoutID, SessionError> {
        if self.is_active() {
            return Err(SessionError::AlreadyActive);
        }
        if request.exercises().is_empty() {
            return Err(SessionError::EmptyDraft);
        }

        let (name, exercises) = request.into_parts();
        let workout = Workout {
            id: WorkoutID::new(),
            name,
            date: now,
            exercises,
            duration: 0,
            calories_burned: 0.0,
            notes: None,
        };
        debug!(
            "started workout {} with {} exercises",
            *workout.id,
            workout.exercises.len()
        );
        let id = workout.id;
        *self = WorkoutSession::Active(workout);
        Ok(id)
    }

    /// Unknown exercises and an idle session are ignored.
    pub fn toggle_exercise_completed(&mut self, id: &ExerciseID, completed: bool) {
        if let WorkoutSession::Active(workout) = self {
            for exercise in workout.exercises_mut(id) {
                exercise.completed = completed;
            }
        }
    }

    /// Unknown exercises and an idle session are ignored.
    pub fn update_exercise_stats(&mut self, id: &ExerciseID, stats: ExerciseStats) {
        if let WorkoutSession::Active(workout) = self {
            for exercise in workout.exercises_mut(id) {
                exercise.merge(stats);
            }
        }
    }

    /// Finish the active workout and return to idle.
    ///
    /// The duration is rounded to whole minutes. Only completed exercises contribute to
    /// the burned calories.
    pub fn end(
        &mut self,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Workout, SessionError> {
        let WorkoutSession::Active(mut workout) = std::mem::take(self) else {
            return Err(SessionError::NoActiveWorkout);
        };
        workout.finish(rounded_minutes(now - workout.date), notes);
        debug!(
            "ended workout {} after {} min",
            *workout.id, workout.duration
        );
        Ok(workout)
    }

    /// Abandon the active workout without recording it.
    pub fn discard(&mut self) -> Option<Workout> {
        match std::mem::take(self) {
            WorkoutSession::Idle => None,
            WorkoutSession::Active(workout) => {
                debug!("discarded workout {}", *workout.id);
                Some(workout)
            }
        }
    }

    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.start_time()
            .map(|start| (now - start).max(Duration::zero()))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rounded_minutes(elapsed: Duration) -> u32 {
    if elapsed <= Duration::zero() {
        return 0;
    }
    (elapsed.num_milliseconds() as f64 / 60_000.0).round() as u32
}

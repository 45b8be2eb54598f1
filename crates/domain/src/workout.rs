use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{Category, ExerciseDefinition, ExerciseID, statistics};

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: String,
    /// Start of the session
    pub date: DateTime<Utc>,
    pub exercises: Vec<WorkoutExercise>,
    /// Minutes, zero until the workout has ended
    pub duration: u32,
    /// Zero until the workout has ended
    pub calories_burned: f64,
    pub notes: Option<String>,
}

impl Workout {
    #[must_use]
    pub fn completed_exercises(&self) -> Vec<&WorkoutExercise> {
        self.exercises.iter().filter(|e| e.completed).collect()
    }

    #[must_use]
    pub fn categories(&self) -> BTreeSet<Category> {
        self.exercises
            .iter()
            .map(|e| e.definition.category)
            .collect()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_ratio(&self) -> f32 {
        if self.exercises.is_empty() {
            return 0.0;
        }
        self.completed_exercises().len() as f32 / self.exercises.len() as f32
    }

    pub(crate) fn exercises_mut<'a>(
        &'a mut self,
        id: &'a ExerciseID,
    ) -> impl Iterator<Item = &'a mut WorkoutExercise> {
        self.exercises
            .iter_mut()
            .filter(move |e| e.definition.id == *id)
    }

    pub(crate) fn finish(&mut self, duration: u32, notes: Option<String>) {
        self.duration = duration;
        self.calories_burned = statistics::calories_burned(self.completed_exercises());
        self.notes = notes;
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Snapshot of a catalog exercise together with the performance of the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub definition: ExerciseDefinition,
    pub completed: bool,
    pub actual_sets: Option<u32>,
    pub actual_reps: Option<u32>,
    /// Minutes
    pub actual_duration: Option<f64>,
    /// Kilometers
    pub actual_distance: Option<f64>,
    pub notes: Option<String>,
}

impl WorkoutExercise {
    #[must_use]
    pub fn id(&self) -> &ExerciseID {
        &self.definition.id
    }

    /// Estimated energy expenditure.
    ///
    /// A recorded duration takes precedence. Without one, sets and reps are converted
    /// into minutes assuming ten repetitions per minute. This is a rough approximation,
    /// not a physiological model.
    #[must_use]
    pub fn calories(&self) -> f64 {
        let calories_per_minute = self.definition.calories_per_minute;
        match (self.actual_duration, self.actual_sets, self.actual_reps) {
            (Some(duration), _, _) if duration > 0.0 => calories_per_minute * duration,
            (_, Some(sets), Some(reps)) if sets > 0 && reps > 0 => {
                calories_per_minute * f64::from(sets) * f64::from(reps) / 10.0
            }
            _ => 0.0,
        }
    }

    pub(crate) fn merge(&mut self, stats: ExerciseStats) {
        if let Some(sets) = stats.sets {
            self.actual_sets = Some(sets);
        }
        if let Some(reps) = stats.reps {
            self.actual_reps = Some(reps);
        }
        if let Some(duration) = stats.duration {
            self.actual_duration = Some(duration);
        }
        if let Some(distance) = stats.distance {
            self.actual_distance = Some(distance);
        }
    }
}

impl From<&ExerciseDefinition> for WorkoutExercise {
    fn from(value: &ExerciseDefinition) -> Self {
        Self {
            definition: value.clone(),
            completed: false,
            actual_sets: value.template.sets,
            actual_reps: value.template.reps,
            actual_duration: value.template.duration,
            actual_distance: value.template.distance,
            notes: None,
        }
    }
}

/// Partial update of the actual performance of an exercise.
///
/// Values are expected to be validated as non-negative numbers by the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ExerciseStats {
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub duration: Option<f64>,
    pub distance: Option<f64>,
}

use crate::{ExerciseDefinition, ExerciseID, SessionError, WorkoutExercise};

/// Exercises selected for a workout that has not been started yet.
///
/// Adding the same exercise twice is not prevented here; callers check [`Self::contains`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutDraft {
    exercises: Vec<WorkoutExercise>,
}

impl WorkoutDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_exercise(&mut self, definition: &ExerciseDefinition) {
        self.exercises.push(WorkoutExercise::from(definition));
    }

    pub fn remove_exercise(&mut self, id: &ExerciseID) {
        self.exercises.retain(|e| e.id() != id);
    }

    #[must_use]
    pub fn contains(&self, id: &ExerciseID) -> bool {
        self.exercises.iter().any(|e| e.id() == id)
    }

    #[must_use]
    pub fn exercises(&self) -> &[WorkoutExercise] {
        &self.exercises
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn clear(&mut self) {
        self.exercises.clear();
    }

    pub fn build_start_request(
        &self,
        name: impl Into<String>,
    ) -> Result<StartRequest, SessionError> {
        if self.exercises.is_empty() {
            return Err(SessionError::EmptyDraft);
        }
        Ok(StartRequest::new(name, self.exercises.clone()))
    }
}

/// Name and ordered exercise snapshot of a workout about to be started.
#[derive(Debug, Clone, PartialEq)]
pub struct StartRequest {
    name: String,
    exercises: Vec<WorkoutExercise>,
}

impl StartRequest {
    pub fn new(name: impl Into<String>, exercises: Vec<WorkoutExercise>) -> Self {
        Self {
            name: name.into(),
            exercises,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn exercises(&self) -> &[WorkoutExercise] {
        &self.exercises
    }

    pub(crate) fn into_parts(self) -> (String, Vec<WorkoutExercise>) {
        (self.name, self.exercises)
    }
}

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod draft;
mod error;
mod exercise;
mod goal;
mod history;
mod name;
mod service;
mod session;
mod state;
pub mod statistics;
mod workout;

pub use catalog::BuiltinCatalog;
pub use draft::{StartRequest, WorkoutDraft};
pub use error::{ReadError, SessionError, StorageError, WriteError};
pub use exercise::{
    Catalog, Category, Difficulty, ExerciseDefinition, ExerciseFilter, ExerciseID,
    ExerciseTemplate, MuscleGroup, Property, PropertyError, TemplateKind,
};
pub use goal::{GoalID, GoalType, GoalUpdate, Goals, NewGoal, WorkoutGoal};
pub use history::{History, MonthGroup};
pub use name::{Name, NameError};
pub use service::Service;
pub use session::WorkoutSession;
pub use state::{PersistedState, State, StateRepository};
pub use statistics::{Achievement, HistoryStats};
pub use workout::{ExerciseStats, Workout, WorkoutExercise, WorkoutID};

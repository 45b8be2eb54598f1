use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use fittrack_domain::{self as domain, Property};
use uuid::Uuid;

/// Stored document of the persisted state.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Document {
    pub state: PersistedState,
    #[serde(default)]
    pub version: u32,
}

impl From<&domain::PersistedState> for Document {
    fn from(value: &domain::PersistedState) -> Self {
        Self {
            state: PersistedState::from(value),
            version: 0,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub workout_history: Vec<Workout>,
    #[serde(default)]
    pub workout_goals: Vec<WorkoutGoal>,
}

impl From<&domain::PersistedState> for PersistedState {
    fn from(value: &domain::PersistedState) -> Self {
        Self {
            workout_history: value.history.iter().map(Workout::from).collect(),
            workout_goals: value.goals.iter().map(WorkoutGoal::from).collect(),
        }
    }
}

impl TryFrom<PersistedState> for domain::PersistedState {
    type Error = DocumentError;

    fn try_from(value: PersistedState) -> Result<Self, Self::Error> {
        Ok(Self {
            history: domain::History::new(
                value
                    .workout_history
                    .into_iter()
                    .map(domain::Workout::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            goals: domain::Goals::new(
                value
                    .workout_goals
                    .into_iter()
                    .map(domain::WorkoutGoal::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DocumentError {
    #[error("invalid id: {0}")]
    InvalidID(String),
    #[error(transparent)]
    InvalidProperty(#[from] domain::PropertyError),
}

/// Parse an id written by this or an earlier version.
///
/// Earlier versions used decimal numbers and timestamps. Ids that are no UUID are mapped to
/// a name-based UUID, so the same document always yields the same ids.
fn parse_id(id: &str) -> Result<Uuid, DocumentError> {
    if id.trim().is_empty() {
        return Err(DocumentError::InvalidID(id.to_string()));
    }
    Ok(Uuid::parse_str(id).unwrap_or_else(|_| match id.parse::<u128>() {
        Ok(value) => Uuid::from_u128(value),
        Err(_) => Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes()),
    }))
}

/// Accept a calendar date or an RFC 3339 timestamp, as written by earlier versions.
fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <String as serde::Deserialize>::deserialize(deserializer)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(&value).map(|date| date.to_utc().date_naive()))
        .map_err(serde::de::Error::custom)
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub exercises: Vec<WorkoutExercise>,
    pub duration: u32,
    pub calories_burned: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            date: value.date,
            exercises: value.exercises.iter().map(WorkoutExercise::from).collect(),
            duration: value.duration,
            calories_burned: value.calories_burned,
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = DocumentError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&value.id)?.into(),
            name: value.name,
            date: value.date,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            duration: value.duration,
            calories_burned: value.calories_burned,
            notes: value.notes,
        })
    }
}

/// Exercise definition and actual performance in one flat object.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub id: String,
    pub name: String,
    pub category: String,
    pub muscle_groups: Vec<String>,
    pub difficulty: String,
    pub description: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub calories_per_minute: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: &domain::WorkoutExercise) -> Self {
        let definition = &value.definition;
        Self {
            id: definition.id.to_string(),
            name: definition.name.clone(),
            category: definition.category.id().to_string(),
            muscle_groups: definition
                .muscle_groups
                .iter()
                .map(|m| m.id().to_string())
                .collect(),
            difficulty: definition.difficulty.id().to_string(),
            description: definition.description.clone(),
            instructions: definition.instructions.clone(),
            calories_per_minute: definition.calories_per_minute,
            sets: definition.template.sets,
            reps: definition.template.reps,
            duration: definition.template.duration,
            distance: definition.template.distance,
            completed: value.completed,
            actual_sets: value.actual_sets,
            actual_reps: value.actual_reps,
            actual_duration: value.actual_duration,
            actual_distance: value.actual_distance,
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<WorkoutExercise> for domain::WorkoutExercise {
    type Error = DocumentError;

    fn try_from(value: WorkoutExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            definition: domain::ExerciseDefinition {
                id: value.id.into(),
                name: value.name,
                description: value.description,
                instructions: value.instructions,
                category: domain::Category::from_id(&value.category)?,
                muscle_groups: value
                    .muscle_groups
                    .iter()
                    .map(|m| domain::MuscleGroup::from_id(m))
                    .collect::<Result<BTreeSet<_>, _>>()?,
                difficulty: domain::Difficulty::from_id(&value.difficulty)?,
                calories_per_minute: value.calories_per_minute,
                template: domain::ExerciseTemplate {
                    sets: value.sets,
                    reps: value.reps,
                    duration: value.duration,
                    distance: value.distance,
                },
            },
            completed: value.completed,
            actual_sets: value.actual_sets,
            actual_reps: value.actual_reps,
            actual_duration: value.actual_duration,
            actual_distance: value.actual_distance,
            notes: value.notes,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutGoal {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub target_date: NaiveDate,
    pub description: String,
    pub completed: bool,
    #[serde(rename = "type")]
    pub goal_type: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
}

impl From<&domain::WorkoutGoal> for WorkoutGoal {
    fn from(value: &domain::WorkoutGoal) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            target_date: value.target_date,
            description: value.description.clone(),
            completed: value.completed,
            goal_type: value.goal_type.id().to_string(),
            target: value.target,
            current: value.current,
            unit: value.unit.clone(),
        }
    }
}

impl TryFrom<WorkoutGoal> for domain::WorkoutGoal {
    type Error = DocumentError;

    fn try_from(value: WorkoutGoal) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&value.id)?.into(),
            name: value.name,
            target_date: value.target_date,
            description: value.description,
            completed: value.completed,
            goal_type: domain::GoalType::from_id(&value.goal_type)?,
            target: value.target,
            current: value.current,
            unit: value.unit,
        })
    }
}

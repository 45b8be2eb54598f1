use std::{collections::BTreeSet, slice::Iter};

use derive_more::{AsRef, Deref, Display};

/// Read access to a reference set of exercise definitions.
pub trait Catalog {
    fn all(&self) -> Vec<&ExerciseDefinition>;

    fn get_by_id(&self, id: &ExerciseID) -> Option<&ExerciseDefinition> {
        self.all().into_iter().find(|e| e.id == *id)
    }

    fn filter_by_category(&self, category: Category) -> Vec<&ExerciseDefinition> {
        self.all()
            .into_iter()
            .filter(|e| e.category == category)
            .collect()
    }

    fn filter_by_muscle_group(&self, muscle_group: MuscleGroup) -> Vec<&ExerciseDefinition> {
        self.all()
            .into_iter()
            .filter(|e| e.muscle_groups.contains(&muscle_group))
            .collect()
    }

    /// Case-insensitive substring match over name, description and muscle groups.
    ///
    /// A blank query matches every exercise.
    fn search(&self, query: &str) -> Vec<&ExerciseDefinition> {
        let query = query.trim().to_lowercase();
        self.all()
            .into_iter()
            .filter(|e| e.matches(&query))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDefinition {
    pub id: ExerciseID,
    pub name: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub category: Category,
    pub muscle_groups: BTreeSet<MuscleGroup>,
    pub difficulty: Difficulty,
    pub calories_per_minute: f64,
    pub template: ExerciseTemplate,
}

impl ExerciseDefinition {
    fn matches(&self, lowercase_query: &str) -> bool {
        lowercase_query.is_empty()
            || self.name.to_lowercase().contains(lowercase_query)
            || self.description.to_lowercase().contains(lowercase_query)
            || self
                .muscle_groups
                .iter()
                .any(|m| m.id().to_lowercase().contains(lowercase_query))
    }
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[as_ref(forward)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Planned performance values of an exercise.
///
/// Discrete exercises usually declare sets and reps, continuous ones a duration and
/// possibly a distance. Any combination, including none at all, is valid, so consumers
/// must not assume exactly one of the two shapes is present. Use [`Self::kind`] instead
/// of checking individual fields.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ExerciseTemplate {
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    /// Minutes
    pub duration: Option<f64>,
    /// Kilometers
    pub distance: Option<f64>,
}

impl ExerciseTemplate {
    #[must_use]
    pub const fn discrete(sets: u32, reps: u32) -> Self {
        Self {
            sets: Some(sets),
            reps: Some(reps),
            duration: None,
            distance: None,
        }
    }

    #[must_use]
    pub const fn continuous(duration: f64, distance: Option<f64>) -> Self {
        Self {
            sets: None,
            reps: None,
            duration: Some(duration),
            distance,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TemplateKind {
        let discrete = self.sets.is_some() || self.reps.is_some();
        let continuous = self.duration.is_some() || self.distance.is_some();
        match (discrete, continuous) {
            (true, false) => TemplateKind::Discrete,
            (false, true) => TemplateKind::Continuous,
            (true, true) => TemplateKind::Mixed,
            (false, false) => TemplateKind::Unspecified,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Discrete,
    Continuous,
    Mixed,
    Unspecified,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Category {
    Strength,
    Cardio,
    Flexibility,
    Hiit,
    Yoga,
    Calisthenics,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 6] = [
            Category::Strength,
            Category::Cardio,
            Category::Flexibility,
            Category::Hiit,
            Category::Yoga,
            Category::Calisthenics,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Cardio => "Cardio",
            Category::Flexibility => "Flexibility",
            Category::Hiit => "HIIT",
            Category::Yoga => "Yoga",
            Category::Calisthenics => "Calisthenics",
        }
    }

    fn id(self) -> &'static str {
        match self {
            Category::Strength => "strength",
            Category::Cardio => "cardio",
            Category::Flexibility => "flexibility",
            Category::Hiit => "hiit",
            Category::Yoga => "yoga",
            Category::Calisthenics => "calisthenics",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Core,
    FullBody,
    Cardio,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUP: [MuscleGroup; 9] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::FullBody,
            MuscleGroup::Cardio,
        ];
        MUSCLE_GROUP.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
            MuscleGroup::Cardio => "Cardio",
        }
    }

    fn id(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Core => "core",
            MuscleGroup::FullBody => "fullBody",
            MuscleGroup::Cardio => "cardio",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    fn id(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Enumerated exercise attribute with a display name and a stable identifier.
pub trait Property: Clone + Copy + Sized + 'static {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
    fn id(self) -> &'static str;

    fn from_id(id: &str) -> Result<Self, PropertyError> {
        Self::iter()
            .find(|p| p.id() == id)
            .copied()
            .ok_or_else(|| PropertyError::Unknown(id.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PropertyError {
    #[error("unknown value: {0}")]
    Unknown(String),
}

/// Combined category and text filter of the exercise browser.
#[derive(Debug, Default, PartialEq)]
pub struct ExerciseFilter {
    pub query: String,
    pub category: Option<Category>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(&self, catalog: &'a impl Catalog) -> Vec<&'a ExerciseDefinition> {
        let query = self.query.trim().to_lowercase();
        catalog
            .all()
            .into_iter()
            .filter(|e| self.category.is_none_or(|c| e.category == c) && e.matches(&query))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.category.is_none()
    }
}

use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::Property;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutGoal {
    pub id: GoalID,
    pub name: String,
    pub target_date: NaiveDate,
    pub description: String,
    pub completed: bool,
    pub goal_type: GoalType,
    pub target: f64,
    pub current: f64,
    pub unit: String,
}

impl WorkoutGoal {
    /// Share of the target reached, between 0 and 1.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            return if self.completed { 1.0 } else { 0.0 };
        }
        (self.current / self.target).clamp(0.0, 1.0)
    }

    fn apply(&mut self, update: GoalUpdate) {
        let GoalUpdate {
            name,
            target_date,
            description,
            completed,
            goal_type,
            target,
            current,
            unit,
        } = update;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(target_date) = target_date {
            self.target_date = target_date;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(completed) = completed {
            self.completed = completed;
        }
        if let Some(goal_type) = goal_type {
            self.goal_type = goal_type;
        }
        if let Some(target) = target {
            self.target = target;
        }
        if let Some(current) = current {
            self.current = current;
        }
        if let Some(unit) = unit {
            self.unit = unit;
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GoalID(Uuid);

impl GoalID {
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

impl From<Uuid> for GoalID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for GoalID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum GoalType {
    Frequency,
    Duration,
    Distance,
    Strength,
}

impl Property for GoalType {
    fn iter() -> std::slice::Iter<'static, GoalType> {
        static GOAL_TYPE: [GoalType; 4] = [
            GoalType::Frequency,
            GoalType::Duration,
            GoalType::Distance,
            GoalType::Strength,
        ];
        GOAL_TYPE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            GoalType::Frequency => "Frequency",
            GoalType::Duration => "Duration",
            GoalType::Distance => "Distance",
            GoalType::Strength => "Strength",
        }
    }

    fn id(self) -> &'static str {
        match self {
            GoalType::Frequency => "frequency",
            GoalType::Duration => "duration",
            GoalType::Distance => "distance",
            GoalType::Strength => "strength",
        }
    }
}

/// A goal that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub target_date: NaiveDate,
    pub description: String,
    pub goal_type: GoalType,
    pub target: f64,
    pub current: f64,
    pub unit: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub goal_type: Option<GoalType>,
    pub target: Option<f64>,
    pub current: Option<f64>,
    pub unit: Option<String>,
}

/// Workout goals in creation order.
#[derive(Debug, Default, Clone, PartialEq, Deref)]
pub struct Goals(Vec<WorkoutGoal>);

impl Goals {
    #[must_use]
    pub fn new(goals: Vec<WorkoutGoal>) -> Self {
        Self(goals)
    }

    pub fn add(&mut self, goal: NewGoal) -> GoalID {
        let id = GoalID::new();
        self.0.push(WorkoutGoal {
            id,
            name: goal.name,
            target_date: goal.target_date,
            description: goal.description,
            completed: false,
            goal_type: goal.goal_type,
            target: goal.target,
            current: goal.current,
            unit: goal.unit,
        });
        id
    }

    /// Returns false if no goal with the given id exists.
    pub fn update(&mut self, id: GoalID, update: GoalUpdate) -> bool {
        match self.0.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.apply(update);
                true
            }
            None => false,
        }
    }

    /// Returns false if no goal with the given id exists.
    pub fn delete(&mut self, id: GoalID) -> bool {
        let len = self.0.len();
        self.0.retain(|g| g.id != id);
        self.0.len() != len
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<WorkoutGoal> {
        self.0
    }
}

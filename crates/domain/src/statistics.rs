use std::collections::BTreeMap;

use crate::{Category, Property, Workout, WorkoutExercise};

/// Sum of the estimated calories of the given exercises.
///
/// The caller decides which exercises count. For a finished workout these are the completed
/// ones. The result is not rounded.
pub fn calories_burned<'a>(exercises: impl IntoIterator<Item = &'a WorkoutExercise>) -> f64 {
    exercises.into_iter().map(WorkoutExercise::calories).sum()
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct HistoryStats {
    pub total_workouts: usize,
    /// Minutes
    pub total_duration: u64,
    pub total_calories: f64,
    /// Number of workouts containing at least one exercise of a category
    pub per_category_counts: BTreeMap<Category, usize>,
}

#[must_use]
pub fn aggregate_history(workouts: &[Workout]) -> HistoryStats {
    let mut per_category_counts = Category::iter()
        .map(|c| (*c, 0))
        .collect::<BTreeMap<_, _>>();

    for workout in workouts {
        for category in workout.categories() {
            *per_category_counts.entry(category).or_default() += 1;
        }
    }

    HistoryStats {
        total_workouts: workouts.len(),
        total_duration: workouts.iter().map(|w| u64::from(w.duration)).sum(),
        total_calories: workouts.iter().map(|w| w.calories_burned).sum(),
        per_category_counts,
    }
}

/// The `n` latest workouts by date, newest first.
///
/// Workouts with the same date keep their relative order.
#[must_use]
pub fn recent_workouts(workouts: &[Workout], n: usize) -> Vec<&Workout> {
    let mut sorted = workouts.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: &'static str,
    /// Number of workouts required
    pub threshold: usize,
    pub achieved: bool,
}

const MILESTONES: [(&str, &str, usize); 3] = [
    ("First Workout", "Completed your first workout", 1),
    ("Getting Started", "Completed 5 workouts", 5),
    ("Consistency", "Completed 10 workouts", 10),
];

#[must_use]
pub fn achievements(workouts: &[Workout]) -> Vec<Achievement> {
    MILESTONES
        .iter()
        .map(|&(title, description, threshold)| Achievement {
            title,
            description,
            threshold,
            achieved: workouts.len() >= threshold,
        })
        .collect()
}

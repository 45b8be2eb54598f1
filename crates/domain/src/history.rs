use chrono::{Datelike, NaiveDate};
use derive_more::{Deref, Into};

use crate::{HistoryStats, Workout, statistics};

/// Finished workouts, newest first.
#[derive(Debug, Default, Clone, PartialEq, Deref, Into)]
pub struct History(Vec<Workout>);

impl History {
    /// Workouts are taken in the given order.
    #[must_use]
    pub fn new(workouts: Vec<Workout>) -> Self {
        Self(workouts)
    }

    pub fn append(&mut self, workout: Workout) {
        self.0.insert(0, workout);
    }

    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<&Workout> {
        statistics::recent_workouts(&self.0, n)
    }

    #[must_use]
    pub fn stats(&self) -> HistoryStats {
        statistics::aggregate_history(&self.0)
    }

    /// Workouts grouped by calendar month of their start date.
    ///
    /// Groups and the workouts inside each group are ordered newest first.
    #[must_use]
    pub fn group_by_month(&self) -> Vec<MonthGroup<'_>> {
        let mut sorted = self.0.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        let mut groups: Vec<MonthGroup> = vec![];
        for workout in sorted {
            let month = first_day_of_month(workout);
            match groups.last_mut() {
                Some(group) if group.month == month => group.workouts.push(workout),
                _ => groups.push(MonthGroup {
                    month,
                    label: month.format("%B %Y").to_string(),
                    workouts: vec![workout],
                }),
            }
        }
        groups
    }
}

fn first_day_of_month(workout: &Workout) -> NaiveDate {
    let date = workout.date.date_naive();
    date.with_day(1).unwrap_or(date)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a> {
    pub month: NaiveDate,
    /// Month and year, e.g. "January 2024"
    pub label: String,
    pub workouts: Vec<&'a Workout>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{WorkoutID, workout::tests::finished_workout};

    use super::*;

    fn ids(workouts: &[&Workout]) -> Vec<WorkoutID> {
        workouts.iter().map(|w| w.id).collect()
    }

    #[test]
    fn test_append_prepends() {
        let mut history = History::default();
        history.append(finished_workout(1, (2024, 1, 5), 35, 420.0));
        history.append(finished_workout(2, (2024, 1, 20), 45, 320.0));
        assert_eq!(
            history.iter().map(|w| w.id).collect::<Vec<_>>(),
            vec![WorkoutID::from(2), WorkoutID::from(1)]
        );
    }

    #[test]
    fn test_recent_and_stats() {
        let mut history = History::default();
        history.append(finished_workout(3, (2024, 2, 1), 30, 380.0));
        history.append(finished_workout(1, (2024, 1, 5), 35, 420.0));
        history.append(finished_workout(2, (2024, 1, 20), 45, 320.0));

        assert_eq!(
            ids(&history.recent(2)),
            vec![WorkoutID::from(3), WorkoutID::from(2)]
        );
        assert_eq!(history.stats().total_duration, 110);
    }

    #[test]
    fn test_group_by_month() {
        let history = History::new(vec![
            finished_workout(3, (2024, 2, 1), 30, 380.0),
            finished_workout(1, (2024, 1, 5), 35, 420.0),
            finished_workout(2, (2024, 1, 20), 45, 320.0),
        ]);

        let groups = history.group_by_month();

        assert_eq!(
            groups
                .iter()
                .map(|g| (g.label.as_str(), ids(&g.workouts)))
                .collect::<Vec<_>>(),
            vec![
                ("February 2024", vec![WorkoutID::from(3)]),
                (
                    "January 2024",
                    vec![WorkoutID::from(2), WorkoutID::from(1)]
                ),
            ]
        );
        assert_eq!(groups[1].month, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_group_by_month_separates_years() {
        let history = History::new(vec![
            finished_workout(2, (2025, 1, 3), 30, 0.0),
            finished_workout(1, (2024, 1, 3), 30, 0.0),
        ]);
        assert_eq!(
            history
                .group_by_month()
                .iter()
                .map(|g| g.label.as_str())
                .collect::<Vec<_>>(),
            vec!["January 2025", "January 2024"]
        );
    }

    #[test]
    fn test_group_by_month_empty() {
        assert!(History::default().group_by_month().is_empty());
    }
}

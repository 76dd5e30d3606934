use chrono::{Duration, NaiveDate};

use crate::models::training_plan::{self, RaceGoal, TrainingWeek, TrainingWeeks};

pub const PLAN_LENGTH_WEEKS: i64 = 12;

/// Builds a training plan for `goal` starting on `start`.
///
/// Placeholder generator: every goal gets the same single base-building
/// week, regardless of the runner's profile.
pub fn generate_plan(user_id: &str, goal: RaceGoal, start: NaiveDate) -> training_plan::Model {
    training_plan::Model {
        id: training_plan::new_plan_id(),
        user_id: user_id.to_string(),
        name: format!("{} Plan", goal.label()),
        goal,
        start_date: start,
        end_date: start + Duration::weeks(PLAN_LENGTH_WEEKS),
        weeks: TrainingWeeks(vec![TrainingWeek {
            week_number: 1,
            focus: "Base Building".to_string(),
            workouts: Vec::new(),
            total_mileage: 20.0,
        }]),
    }
}

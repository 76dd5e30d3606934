use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[sea_orm(string_value = "easy")]
    Easy,
    #[sea_orm(string_value = "tempo")]
    Tempo,
    #[sea_orm(string_value = "interval")]
    Interval,
    #[sea_orm(string_value = "long")]
    Long,
    #[sea_orm(string_value = "recovery")]
    Recovery,
    #[sea_orm(string_value = "race")]
    Race,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workouts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub title: String,
    pub description: String,

    // Planned effort: minutes and kilometres
    pub duration: f64,
    pub distance: Option<f64>,
    pub target_pace: Option<String>,
    pub intervals: Option<Json>,

    // Completion tracking
    pub completed: bool,
    pub completed_at: Option<ChronoDateTimeUtc>,
    pub actual_distance: Option<f64>,
    pub actual_duration: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// What the runner reports when finishing a workout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct WorkoutCompletion {
    pub distance: Option<f64>,
    pub duration: Option<f64>,
}

impl Model {
    /// Marks the workout done at `at` with the reported actuals.
    pub fn complete(&mut self, completion: WorkoutCompletion, at: ChronoDateTimeUtc) {
        self.completed = true;
        self.completed_at = Some(at);
        self.actual_distance = completion.distance;
        self.actual_duration = completion.duration;
    }
}

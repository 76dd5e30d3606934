use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ChallengeType {
    #[sea_orm(string_value = "distance")]
    Distance,
    #[sea_orm(string_value = "streak")]
    Streak,
    #[sea_orm(string_value = "time")]
    Time,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "challenges")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub challenge_type: ChallengeType,
    pub target: f64,
    pub unit: String,
    pub start_date: ChronoDate,
    pub end_date: ChronoDate,
    pub participants: i32,
    pub user_progress: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Counts one more participant and restarts the joiner's progress.
    pub fn join(&mut self) {
        self.participants += 1;
        self.user_progress = Some(0.0);
    }
}

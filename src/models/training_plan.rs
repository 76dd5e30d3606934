use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RaceGoal {
    #[sea_orm(string_value = "5K")]
    #[serde(rename = "5K")]
    FiveK,
    #[sea_orm(string_value = "10K")]
    #[serde(rename = "10K")]
    TenK,
    #[sea_orm(string_value = "Half Marathon")]
    #[serde(rename = "Half Marathon")]
    HalfMarathon,
    #[sea_orm(string_value = "Marathon")]
    #[serde(rename = "Marathon")]
    Marathon,
}

impl RaceGoal {
    pub fn label(&self) -> &'static str {
        match self {
            RaceGoal::FiveK => "5K",
            RaceGoal::TenK => "10K",
            RaceGoal::HalfMarathon => "Half Marathon",
            RaceGoal::Marathon => "Marathon",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingWeek {
    pub week_number: i32,
    pub focus: String,
    pub workouts: Vec<serde_json::Value>,
    pub total_mileage: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TrainingWeeks(pub Vec<TrainingWeek>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "training_plans")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    // One active plan per runner
    #[sea_orm(unique)]
    pub user_id: String,
    pub name: String,
    pub goal: RaceGoal,
    pub start_date: ChronoDate,
    pub end_date: ChronoDate,
    pub weeks: TrainingWeeks,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn new_plan_id() -> String {
    format!("plan-{}", Uuid::new_v4())
}

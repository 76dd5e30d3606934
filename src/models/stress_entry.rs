use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stress_entries")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    // Assigned by the server, clients may leave it out
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub date: ChronoDate,
    pub level: i32,
    #[serde(default)]
    pub sleep_quality: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    // Server-side only; orders entries that share a date
    #[serde(skip, default = "Utc::now")]
    pub logged_at: ChronoDateTimeUtc,
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

pub fn new_stress_entry_id() -> String {
    format!("stress-{}", Uuid::new_v4())
}

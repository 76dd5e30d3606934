use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Subscription {
    #[sea_orm(string_value = "free")]
    Free,
    #[sea_orm(string_value = "premium")]
    Premium,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub subscription: Subscription,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_profile::Entity")]
    UserProfile,
    #[sea_orm(has_many = "super::stress_entry::Entity")]
    StressEntries,
    #[sea_orm(has_one = "super::training_plan::Entity")]
    TrainingPlan,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfile.def()
    }
}

impl Related<super::stress_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StressEntries.def()
    }
}

impl Related<super::training_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingPlan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A user account together with its profile, as returned by every
/// account-facing endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub account: Model,
    pub profile: super::user_profile::Model,
}

impl User {
    pub fn new(account: Model, profile: super::user_profile::Model) -> Self {
        Self { account, profile }
    }

    pub fn id(&self) -> &str {
        &self.account.id
    }
}

/// Builds a fresh user id in the `user-<uuid>` format.
pub fn new_user_id() -> String {
    format!("user-{}", Uuid::new_v4())
}

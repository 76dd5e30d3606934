use std::collections::BTreeMap;

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "advanced")]
    Advanced,
}

/// Weekdays the runner can train on, 0 = Sunday .. 6 = Saturday.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TrainingDays(pub Vec<i32>);

/// Personal records: metric name (e.g. "5K") to best time in seconds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct PersonalRecords(pub BTreeMap<String, f64>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_profiles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    // Owned by the path parameter on the way in, never part of the payload
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip)]
    pub user_id: String,

    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub experience_level: ExperienceLevel,
    pub weekly_mileage: f64,
    pub available_training_days: TrainingDays,
    #[serde(default)]
    pub injury_history: Option<String>,
    #[serde(default)]
    pub prs: PersonalRecords,
    #[serde(default)]
    pub race_goal: Option<Json>,
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

impl Model {
    /// Profile attached to every freshly registered account.
    pub fn registration_default(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            age: 30,
            height: 175.0,
            weight: 70.0,
            experience_level: ExperienceLevel::Beginner,
            weekly_mileage: 0.0,
            available_training_days: TrainingDays(vec![1, 3, 5]),
            injury_history: None,
            prs: PersonalRecords::default(),
            race_goal: None,
        }
    }

    /// Rebinds a profile received over the wire to its owning user.
    pub fn owned_by(mut self, user_id: &str) -> Self {
        self.user_id = user_id.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_shape() {
        let profile = Model::registration_default("user-1");
        let value = serde_json::to_value(&profile).unwrap();

        assert!(value.get("userId").is_none());
        assert_eq!(value["experienceLevel"], "beginner");
        assert_eq!(value["availableTrainingDays"], serde_json::json!([1, 3, 5]));
        assert_eq!(value["prs"], serde_json::json!({}));
    }

    #[test]
    fn test_profile_payload_without_optional_fields() {
        let payload = serde_json::json!({
            "age": 25,
            "height": 180,
            "weight": 75,
            "experienceLevel": "intermediate",
            "weeklyMileage": 20,
            "availableTrainingDays": [0, 2, 4]
        });
        let profile: Model = serde_json::from_value(payload).unwrap();

        assert_eq!(profile.user_id, "");
        assert_eq!(profile.age, 25);
        assert_eq!(profile.available_training_days, TrainingDays(vec![0, 2, 4]));
        assert!(profile.prs.0.is_empty());
    }

    #[test]
    fn test_unknown_experience_level_is_rejected() {
        let payload = serde_json::json!({
            "age": 25,
            "height": 180,
            "weight": 75,
            "experienceLevel": "elite",
            "weeklyMileage": 20,
            "availableTrainingDays": []
        });
        assert!(serde_json::from_value::<Model>(payload).is_err());
    }
}

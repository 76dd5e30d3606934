use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachMessageType {
    Motivation,
    Tip,
    Feedback,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub message_type: CoachMessageType,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

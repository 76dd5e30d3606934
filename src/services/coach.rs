use chrono::Utc;
use uuid::Uuid;

use crate::models::coach_message::{CoachMessage, CoachMessageType};
use crate::services::randomness::RandomSource;

const MESSAGES: [(CoachMessageType, &str); 3] = [
    (CoachMessageType::Motivation, "You're doing great! Keep it up."),
    (CoachMessageType::Tip, "Focus on your breathing during intervals."),
    (CoachMessageType::Warning, "High stress detected. Take it easy today."),
];

/// Picks one of the canned coach messages. The runner's context is not
/// consulted yet.
pub fn pick_message(random: &RandomSource) -> CoachMessage {
    let (message_type, content) = random.choose(&MESSAGES).copied().unwrap_or(MESSAGES[0]);

    CoachMessage {
        id: Uuid::new_v4().to_string(),
        message_type,
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

use chrono::{Duration, NaiveDate, Utc};

use crate::models::stress_entry;
use crate::services::randomness::RandomSource;

pub const DEFAULT_HISTORY_DAYS: u32 = 7;
pub const MAX_HISTORY_DAYS: u32 = 365;

/// Stand-in history for users who have never logged stress: one entry per
/// day counting back from `today`, with random ratings.
pub fn synthesize_history(
    user_id: &str,
    days: u32,
    today: NaiveDate,
    random: &RandomSource,
) -> Vec<stress_entry::Model> {
    (0..days)
        .map(|i| stress_entry::Model {
            id: format!("s-{}", i),
            user_id: user_id.to_string(),
            date: today - Duration::days(i64::from(i)),
            level: random.rating(),
            sleep_quality: Some(random.rating()),
            notes: None,
            logged_at: Utc::now(),
        })
        .collect()
}

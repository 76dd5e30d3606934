use serde::{Deserialize, Serialize};

// Not persisted: the leaderboard is a fixed list served from seed data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: i32,
    pub user_id: String,
    pub user_name: String,
    pub avatar: Option<String>,
    pub value: f64,
    pub unit: String,
}

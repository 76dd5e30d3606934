pub mod user;
pub mod user_profile;
pub mod stress_entry;
pub mod workout;
pub mod training_plan;
pub mod challenge;
pub mod nutrition_tip;
pub mod strength_routine;
pub mod leaderboard_entry;
pub mod coach_message;

pub mod auth;
pub mod catalog;
pub mod coach;
pub mod community;
pub mod health;
pub mod profile;
pub mod progress;
pub mod stress;
pub mod subscription;
pub mod training_plans;
pub mod workouts;

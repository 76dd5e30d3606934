//! Persistence layer.
//!
//! Handlers only ever talk to [`Storage`]. Two implementations exist: an
//! in-memory store used for prototyping and tests, and a relational store
//! backed by sea-orm. Both are seeded with the same fixed sample rows.

pub mod database;
pub mod memory;
pub mod seed;

use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::leaderboard_entry::LeaderboardEntry;
use crate::models::nutrition_tip::NutritionCategory;
use crate::models::user::{Subscription, User};
use crate::models::workout::WorkoutCompletion;
use crate::models::{
    challenge, nutrition_tip, strength_routine, stress_entry, training_plan, user,
    user_profile, workout,
};

pub use database::DatabaseStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("corrupt record: {0}")]
    Corrupt(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Short name of the backend, reported by the health endpoint.
    fn backend_name(&self) -> &'static str;

    // ============ Accounts ============

    async fn find_user(&self, user_id: &str) -> StorageResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> StorageResult<Option<User>>;

    /// Creates the account and its profile together. Fails with
    /// [`StorageError::Conflict`] when the email is taken; nothing is written
    /// in that case.
    async fn create_user(
        &self,
        account: user::Model,
        profile: user_profile::Model,
    ) -> StorageResult<User>;

    /// Replaces every profile field of an existing user.
    async fn replace_profile(
        &self,
        user_id: &str,
        profile: user_profile::Model,
    ) -> StorageResult<User>;

    async fn set_subscription(
        &self,
        user_id: &str,
        subscription: Subscription,
    ) -> StorageResult<User>;

    // ============ Stress ============

    async fn insert_stress_entry(
        &self,
        entry: stress_entry::Model,
    ) -> StorageResult<stress_entry::Model>;

    /// Most recent entries first, at most `limit` of them.
    async fn list_stress_entries(
        &self,
        user_id: &str,
        limit: u64,
    ) -> StorageResult<Vec<stress_entry::Model>>;

    // ============ Training plans ============

    async fn find_training_plan(
        &self,
        user_id: &str,
    ) -> StorageResult<Option<training_plan::Model>>;

    /// Stores `plan` as the user's only plan, dropping any previous one.
    async fn replace_training_plan(
        &self,
        plan: training_plan::Model,
    ) -> StorageResult<training_plan::Model>;

    // ============ Workouts ============

    async fn list_workouts(&self) -> StorageResult<Vec<workout::Model>>;

    async fn complete_workout(
        &self,
        workout_id: &str,
        completion: WorkoutCompletion,
    ) -> StorageResult<workout::Model>;

    // ============ Catalogs ============

    async fn list_strength_routines(&self) -> StorageResult<Vec<strength_routine::Model>>;

    async fn list_nutrition_tips(
        &self,
        category: Option<NutritionCategory>,
    ) -> StorageResult<Vec<nutrition_tip::Model>>;

    // ============ Community ============

    async fn list_challenges(&self) -> StorageResult<Vec<challenge::Model>>;

    async fn join_challenge(&self, challenge_id: &str) -> StorageResult<challenge::Model>;

    async fn leaderboard(&self) -> StorageResult<Vec<LeaderboardEntry>> {
        Ok(seed::leaderboard())
    }
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;

use crate::models::nutrition_tip::NutritionCategory;
use crate::models::user::{Subscription, User};
use crate::models::workout::WorkoutCompletion;
use crate::models::{
    challenge, nutrition_tip, strength_routine, stress_entry, training_plan, user,
    user_profile, workout,
};

use super::{Storage, StorageError, StorageResult};

/// Relational store. Every multi-row write runs in its own transaction.
#[derive(Debug, Clone)]
pub struct DatabaseStorage {
    db: DatabaseConnection,
}

impl DatabaseStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

async fn load_user<C: ConnectionTrait>(conn: &C, user_id: &str) -> StorageResult<Option<User>> {
    let account = user::Entity::find_by_id(user_id.to_string()).one(conn).await?;
    let account = match account {
        Some(account) => account,
        None => return Ok(None),
    };

    let profile = user_profile::Entity::find_by_id(user_id.to_string())
        .one(conn)
        .await?
        .ok_or_else(|| StorageError::Corrupt(format!("user {} has no profile", user_id)))?;

    Ok(Some(User::new(account, profile)))
}

async fn require_user<C: ConnectionTrait>(conn: &C, user_id: &str) -> StorageResult<User> {
    load_user(conn, user_id)
        .await?
        .ok_or(StorageError::NotFound("User"))
}

fn duplicate_email(email: &str) -> StorageError {
    StorageError::Conflict(format!("Email '{}' is already registered", email))
}

fn email_conflict(err: DbErr, email: &str) -> StorageError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_email(email),
        _ => StorageError::Database(err),
    }
}

fn profile_active_model(profile: user_profile::Model) -> user_profile::ActiveModel {
    user_profile::ActiveModel {
        user_id: Set(profile.user_id),
        age: Set(profile.age),
        height: Set(profile.height),
        weight: Set(profile.weight),
        experience_level: Set(profile.experience_level),
        weekly_mileage: Set(profile.weekly_mileage),
        available_training_days: Set(profile.available_training_days),
        injury_history: Set(profile.injury_history),
        prs: Set(profile.prs),
        race_goal: Set(profile.race_goal),
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    fn backend_name(&self) -> &'static str {
        "database"
    }

    async fn find_user(&self, user_id: &str) -> StorageResult<Option<User>> {
        load_user(&self.db, user_id).await
    }

    async fn find_user_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let account = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        match account {
            Some(account) => load_user(&self.db, &account.id).await,
            None => Ok(None),
        }
    }

    async fn create_user(
        &self,
        account: user::Model,
        profile: user_profile::Model,
    ) -> StorageResult<User> {
        let txn = self.db.begin().await?;

        let existing = user::Entity::find()
            .filter(user::Column::Email.eq(&account.email))
            .one(&txn)
            .await?;
        if existing.is_some() {
            txn.rollback().await?;
            return Err(duplicate_email(&account.email));
        }

        // A concurrent registration can still win the race between the
        // check above and this insert; the unique index reports it
        let email = account.email.clone();
        let profile = profile.owned_by(&account.id);
        let account = user::ActiveModel::from(account)
            .insert(&txn)
            .await
            .map_err(|err| email_conflict(err, &email))?;
        let profile = profile_active_model(profile).insert(&txn).await?;

        txn.commit().await?;

        Ok(User::new(account, profile))
    }

    async fn replace_profile(
        &self,
        user_id: &str,
        profile: user_profile::Model,
    ) -> StorageResult<User> {
        let txn = self.db.begin().await?;

        let account = match user::Entity::find_by_id(user_id.to_string()).one(&txn).await? {
            Some(account) => account,
            None => {
                txn.rollback().await?;
                return Err(StorageError::NotFound("User"));
            }
        };
        let exists = user_profile::Entity::find_by_id(user_id.to_string())
            .one(&txn)
            .await?
            .is_some();
        if !exists {
            txn.rollback().await?;
            return Err(StorageError::NotFound("User"));
        }

        // Every column is Set, so this is a full replace
        let profile = profile_active_model(profile.owned_by(user_id))
            .update(&txn)
            .await?;

        txn.commit().await?;

        Ok(User::new(account, profile))
    }

    async fn set_subscription(
        &self,
        user_id: &str,
        subscription: Subscription,
    ) -> StorageResult<User> {
        let result = user::Entity::update_many()
            .col_expr(user::Column::Subscription, Expr::value(subscription.to_value()))
            .filter(user::Column::Id.eq(user_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StorageError::NotFound("User"));
        }

        require_user(&self.db, user_id).await
    }

    async fn insert_stress_entry(
        &self,
        entry: stress_entry::Model,
    ) -> StorageResult<stress_entry::Model> {
        let owner = user::Entity::find_by_id(entry.user_id.clone())
            .one(&self.db)
            .await?;
        if owner.is_none() {
            return Err(StorageError::NotFound("User"));
        }

        Ok(stress_entry::ActiveModel::from(entry)
            .insert(&self.db)
            .await?)
    }

    async fn list_stress_entries(
        &self,
        user_id: &str,
        limit: u64,
    ) -> StorageResult<Vec<stress_entry::Model>> {
        Ok(stress_entry::Entity::find()
            .filter(stress_entry::Column::UserId.eq(user_id))
            .order_by_desc(stress_entry::Column::Date)
            .order_by_desc(stress_entry::Column::LoggedAt)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    async fn find_training_plan(
        &self,
        user_id: &str,
    ) -> StorageResult<Option<training_plan::Model>> {
        Ok(training_plan::Entity::find()
            .filter(training_plan::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?)
    }

    async fn replace_training_plan(
        &self,
        plan: training_plan::Model,
    ) -> StorageResult<training_plan::Model> {
        let txn = self.db.begin().await?;

        let owner = user::Entity::find_by_id(plan.user_id.clone())
            .one(&txn)
            .await?;
        if owner.is_none() {
            txn.rollback().await?;
            return Err(StorageError::NotFound("User"));
        }

        training_plan::Entity::delete_many()
            .filter(training_plan::Column::UserId.eq(&plan.user_id))
            .exec(&txn)
            .await?;
        let plan = training_plan::ActiveModel::from(plan).insert(&txn).await?;

        txn.commit().await?;

        Ok(plan)
    }

    async fn list_workouts(&self) -> StorageResult<Vec<workout::Model>> {
        Ok(workout::Entity::find()
            .order_by_asc(workout::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn complete_workout(
        &self,
        workout_id: &str,
        completion: WorkoutCompletion,
    ) -> StorageResult<workout::Model> {
        let workout = workout::Entity::find_by_id(workout_id.to_string())
            .one(&self.db)
            .await?
            .ok_or(StorageError::NotFound("Workout"))?;

        let mut active_workout: workout::ActiveModel = workout.into();
        active_workout.completed = Set(true);
        active_workout.completed_at = Set(Some(Utc::now()));
        active_workout.actual_distance = Set(completion.distance);
        active_workout.actual_duration = Set(completion.duration);

        Ok(active_workout.update(&self.db).await?)
    }

    async fn list_strength_routines(&self) -> StorageResult<Vec<strength_routine::Model>> {
        Ok(strength_routine::Entity::find()
            .order_by_asc(strength_routine::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn list_nutrition_tips(
        &self,
        category: Option<NutritionCategory>,
    ) -> StorageResult<Vec<nutrition_tip::Model>> {
        let mut query = nutrition_tip::Entity::find().order_by_asc(nutrition_tip::Column::Id);

        if let Some(category) = category {
            query = query.filter(nutrition_tip::Column::Category.eq(category));
        }

        Ok(query.all(&self.db).await?)
    }

    async fn list_challenges(&self) -> StorageResult<Vec<challenge::Model>> {
        Ok(challenge::Entity::find()
            .order_by_asc(challenge::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn join_challenge(&self, challenge_id: &str) -> StorageResult<challenge::Model> {
        // Single UPDATE so concurrent joins never lose an increment
        let result = challenge::Entity::update_many()
            .col_expr(
                challenge::Column::Participants,
                Expr::col(challenge::Column::Participants).add(1),
            )
            .col_expr(challenge::Column::UserProgress, Expr::value(0.0_f64))
            .filter(challenge::Column::Id.eq(challenge_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StorageError::NotFound("Challenge"));
        }

        challenge::Entity::find_by_id(challenge_id.to_string())
            .one(&self.db)
            .await?
            .ok_or(StorageError::NotFound("Challenge"))
    }
}

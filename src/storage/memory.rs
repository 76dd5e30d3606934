use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::nutrition_tip::NutritionCategory;
use crate::models::user::{Subscription, User};
use crate::models::workout::WorkoutCompletion;
use crate::models::{
    challenge, nutrition_tip, strength_routine, stress_entry, training_plan, user,
    user_profile, workout,
};

use super::{seed, Storage, StorageError, StorageResult};

#[derive(Default)]
struct MemoryState {
    users: HashMap<String, user::Model>,
    profiles: HashMap<String, user_profile::Model>,
    stress_entries: Vec<stress_entry::Model>,
    // Keyed by user id
    training_plans: HashMap<String, training_plan::Model>,
    workouts: Vec<workout::Model>,
    challenges: Vec<challenge::Model>,
    nutrition_tips: Vec<nutrition_tip::Model>,
    strength_routines: Vec<strength_routine::Model>,
}

impl MemoryState {
    fn user(&self, user_id: &str) -> Option<User> {
        let account = self.users.get(user_id)?;
        let profile = self.profiles.get(user_id)?;
        Some(User::new(account.clone(), profile.clone()))
    }
}

/// Process-lifetime store. Writers are serialised by the lock; nothing
/// survives a restart.
pub struct MemoryStorage {
    state: RwLock<MemoryState>,
}

impl MemoryStorage {
    /// An empty store, mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }

    /// A store holding the standard sample rows.
    pub fn seeded() -> Self {
        let (account, profile) = seed::demo_user();
        let mut state = MemoryState {
            workouts: seed::workouts(),
            challenges: seed::challenges(),
            nutrition_tips: seed::nutrition_tips(),
            strength_routines: seed::strength_routines(),
            ..MemoryState::default()
        };
        state.profiles.insert(account.id.clone(), profile);
        state.users.insert(account.id.clone(), account);

        Self {
            state: RwLock::new(state),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn find_user(&self, user_id: &str) -> StorageResult<Option<User>> {
        Ok(self.state.read().await.user(user_id))
    }

    async fn find_user_by_email(&self, email: &str) -> StorageResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|u| u.email == email)
            .and_then(|u| state.user(&u.id)))
    }

    async fn create_user(
        &self,
        account: user::Model,
        profile: user_profile::Model,
    ) -> StorageResult<User> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.email == account.email) {
            return Err(StorageError::Conflict(format!(
                "Email '{}' is already registered",
                account.email
            )));
        }

        let profile = profile.owned_by(&account.id);
        state.profiles.insert(account.id.clone(), profile.clone());
        state.users.insert(account.id.clone(), account.clone());

        Ok(User::new(account, profile))
    }

    async fn replace_profile(
        &self,
        user_id: &str,
        profile: user_profile::Model,
    ) -> StorageResult<User> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(user_id) || !state.profiles.contains_key(user_id) {
            return Err(StorageError::NotFound("User"));
        }
        state
            .profiles
            .insert(user_id.to_string(), profile.owned_by(user_id));

        state.user(user_id).ok_or(StorageError::NotFound("User"))
    }

    async fn set_subscription(
        &self,
        user_id: &str,
        subscription: Subscription,
    ) -> StorageResult<User> {
        let mut state = self.state.write().await;

        let account = state
            .users
            .get_mut(user_id)
            .ok_or(StorageError::NotFound("User"))?;
        account.subscription = subscription;

        state.user(user_id).ok_or(StorageError::NotFound("User"))
    }

    async fn insert_stress_entry(
        &self,
        entry: stress_entry::Model,
    ) -> StorageResult<stress_entry::Model> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&entry.user_id) {
            return Err(StorageError::NotFound("User"));
        }
        state.stress_entries.push(entry.clone());

        Ok(entry)
    }

    async fn list_stress_entries(
        &self,
        user_id: &str,
        limit: u64,
    ) -> StorageResult<Vec<stress_entry::Model>> {
        let state = self.state.read().await;

        let mut entries: Vec<stress_entry::Model> = state
            .stress_entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        // Insertion order breaks ties between identical timestamps
        entries.reverse();
        entries.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.logged_at.cmp(&a.logged_at))
        });
        entries.truncate(usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(entries)
    }

    async fn find_training_plan(
        &self,
        user_id: &str,
    ) -> StorageResult<Option<training_plan::Model>> {
        Ok(self.state.read().await.training_plans.get(user_id).cloned())
    }

    async fn replace_training_plan(
        &self,
        plan: training_plan::Model,
    ) -> StorageResult<training_plan::Model> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&plan.user_id) {
            return Err(StorageError::NotFound("User"));
        }
        state
            .training_plans
            .insert(plan.user_id.clone(), plan.clone());

        Ok(plan)
    }

    async fn list_workouts(&self) -> StorageResult<Vec<workout::Model>> {
        Ok(self.state.read().await.workouts.clone())
    }

    async fn complete_workout(
        &self,
        workout_id: &str,
        completion: WorkoutCompletion,
    ) -> StorageResult<workout::Model> {
        let mut state = self.state.write().await;

        let workout = state
            .workouts
            .iter_mut()
            .find(|w| w.id == workout_id)
            .ok_or(StorageError::NotFound("Workout"))?;
        workout.complete(completion, Utc::now());

        Ok(workout.clone())
    }

    async fn list_strength_routines(&self) -> StorageResult<Vec<strength_routine::Model>> {
        Ok(self.state.read().await.strength_routines.clone())
    }

    async fn list_nutrition_tips(
        &self,
        category: Option<NutritionCategory>,
    ) -> StorageResult<Vec<nutrition_tip::Model>> {
        let state = self.state.read().await;
        Ok(state
            .nutrition_tips
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .cloned()
            .collect())
    }

    async fn list_challenges(&self) -> StorageResult<Vec<challenge::Model>> {
        Ok(self.state.read().await.challenges.clone())
    }

    async fn join_challenge(&self, challenge_id: &str) -> StorageResult<challenge::Model> {
        let mut state = self.state.write().await;

        let challenge = state
            .challenges
            .iter_mut()
            .find(|c| c.id == challenge_id)
            .ok_or(StorageError::NotFound("Challenge"))?;
        challenge.join();

        Ok(challenge.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::new_user_id;
    use chrono::NaiveDate;

    fn account(email: &str) -> user::Model {
        user::Model {
            id: new_user_id(),
            email: email.to_string(),
            name: "Test".to_string(),
            avatar: None,
            subscription: Subscription::Free,
            created_at: Utc::now(),
        }
    }

    fn stress(user_id: &str, day: u32, level: i32) -> stress_entry::Model {
        stress_entry::Model {
            id: stress_entry::new_stress_entry_id(),
            user_id: user_id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
            level,
            sleep_quality: None,
            notes: None,
            logged_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_seeded_store_has_demo_user() {
        let storage = MemoryStorage::seeded();
        let user = storage
            .find_user_by_email(seed::DEMO_USER_EMAIL)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.id(), seed::DEMO_USER_ID);
        assert_eq!(user.profile.user_id, seed::DEMO_USER_ID);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_conflict() {
        let storage = MemoryStorage::empty();
        let first = account("dup@example.com");
        let first_id = first.id.clone();
        storage
            .create_user(first, user_profile::Model::registration_default(&first_id))
            .await
            .unwrap();

        let second = account("dup@example.com");
        let second_id = second.id.clone();
        let result = storage
            .create_user(second, user_profile::Model::registration_default(&second_id))
            .await;

        assert!(matches!(result, Err(StorageError::Conflict(_))));
        assert!(storage.find_user(&second_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_profile_for_unknown_user() {
        let storage = MemoryStorage::empty();
        let result = storage
            .replace_profile("user-missing", user_profile::Model::registration_default(""))
            .await;
        assert!(matches!(result, Err(StorageError::NotFound("User"))));
    }

    #[tokio::test]
    async fn test_stress_entries_newest_first_and_limited() {
        let storage = MemoryStorage::seeded();
        for (day, level) in [(10, 1), (12, 3), (11, 2)] {
            storage
                .insert_stress_entry(stress(seed::DEMO_USER_ID, day, level))
                .await
                .unwrap();
        }

        let entries = storage
            .list_stress_entries(seed::DEMO_USER_ID, 2)
            .await
            .unwrap();
        let levels: Vec<i32> = entries.iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![3, 2]);
    }

    #[tokio::test]
    async fn test_same_day_entries_ordered_by_log_time() {
        let storage = MemoryStorage::seeded();
        let earlier = Utc::now() - chrono::Duration::minutes(10);
        // Later log inserted first, so insertion order alone would be wrong
        for (level, logged_at) in [(5, earlier + chrono::Duration::minutes(3)), (2, earlier)] {
            let mut entry = stress(seed::DEMO_USER_ID, 17, level);
            entry.logged_at = logged_at;
            storage.insert_stress_entry(entry).await.unwrap();
        }

        let entries = storage
            .list_stress_entries(seed::DEMO_USER_ID, 7)
            .await
            .unwrap();
        let levels: Vec<i32> = entries.iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![5, 2]);
    }

    #[tokio::test]
    async fn test_join_challenge_counts_every_call() {
        let storage = MemoryStorage::seeded();
        let before = storage.list_challenges().await.unwrap()[0].clone();

        for _ in 0..3 {
            storage.join_challenge(&before.id).await.unwrap();
        }

        let after = storage.join_challenge(&before.id).await.unwrap();
        assert_eq!(after.participants, before.participants + 4);
        assert_eq!(after.user_progress, Some(0.0));
    }

    #[tokio::test]
    async fn test_complete_unknown_workout() {
        let storage = MemoryStorage::seeded();
        let result = storage
            .complete_workout("nope", WorkoutCompletion::default())
            .await;
        assert!(matches!(result, Err(StorageError::NotFound("Workout"))));
    }

    #[tokio::test]
    async fn test_nutrition_tips_filtered_by_category() {
        let storage = MemoryStorage::seeded();
        let tips = storage
            .list_nutrition_tips(Some(NutritionCategory::Hydration))
            .await
            .unwrap();
        assert!(!tips.is_empty());
        assert!(tips.iter().all(|t| t.category == NutritionCategory::Hydration));
    }
}

//! Fixed sample rows loaded into an empty store at startup.

use chrono::{NaiveDate, Utc};
use serde_json::json;

use crate::models::challenge::{self, ChallengeType};
use crate::models::leaderboard_entry::LeaderboardEntry;
use crate::models::nutrition_tip::{self, NutritionCategory};
use crate::models::strength_routine::{self, Difficulty, Exercise, Exercises, TargetAreas};
use crate::models::user::{self, Subscription};
use crate::models::user_profile::{self, ExperienceLevel, PersonalRecords, TrainingDays};
use crate::models::workout::{self, WorkoutType};

pub const DEMO_USER_ID: &str = "user-123";
pub const DEMO_USER_EMAIL: &str = "runner@example.com";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn demo_user() -> (user::Model, user_profile::Model) {
    let account = user::Model {
        id: DEMO_USER_ID.to_string(),
        email: DEMO_USER_EMAIL.to_string(),
        name: "John Doe".to_string(),
        avatar: None,
        subscription: Subscription::Free,
        created_at: Utc::now(),
    };

    let profile = user_profile::Model {
        user_id: DEMO_USER_ID.to_string(),
        age: 30,
        height: 175.0,
        weight: 70.0,
        experience_level: ExperienceLevel::Intermediate,
        weekly_mileage: 30.0,
        available_training_days: TrainingDays(vec![1, 3, 5, 6]),
        injury_history: None,
        prs: PersonalRecords(
            [("5K".to_string(), 1320.0), ("10K".to_string(), 2800.0)]
                .into_iter()
                .collect(),
        ),
        race_goal: None,
    };

    (account, profile)
}

fn planned_workout(
    id: &str,
    workout_type: WorkoutType,
    title: &str,
    description: &str,
    duration: f64,
    distance: Option<f64>,
    target_pace: Option<&str>,
) -> workout::Model {
    workout::Model {
        id: id.to_string(),
        workout_type,
        title: title.to_string(),
        description: description.to_string(),
        duration,
        distance,
        target_pace: target_pace.map(str::to_string),
        intervals: None,
        completed: false,
        completed_at: None,
        actual_distance: None,
        actual_duration: None,
    }
}

pub fn workouts() -> Vec<workout::Model> {
    let mut repeats = planned_workout(
        "workout-3",
        WorkoutType::Interval,
        "800m Repeats",
        "Classic speed workout to improve your VO2max.",
        50.0,
        None,
        None,
    );
    let rep = json!({ "distance": 0.8, "pace": "4:00/km", "rest": "90 sec jog" });
    repeats.intervals = Some(json!(vec![rep; 6]));

    vec![
        planned_workout(
            "workout-1",
            WorkoutType::Easy,
            "Easy Recovery Run",
            "Keep it conversational. Focus on feeling relaxed and recovering from harder efforts.",
            35.0,
            Some(5.0),
            Some("6:00-6:30/km"),
        ),
        planned_workout(
            "workout-2",
            WorkoutType::Tempo,
            "Tempo Run",
            "Comfortably hard effort. You should be able to speak in short sentences.",
            45.0,
            Some(8.0),
            Some("5:15-5:30/km"),
        ),
        repeats,
        planned_workout(
            "workout-4",
            WorkoutType::Long,
            "Long Run",
            "Building endurance at a comfortable pace. Time on feet is the goal.",
            90.0,
            Some(16.0),
            Some("6:15-6:45/km"),
        ),
        planned_workout(
            "workout-5",
            WorkoutType::Recovery,
            "Active Recovery",
            "Very easy jog or walk. Focus on blood flow and recovery.",
            25.0,
            Some(3.0),
            Some("7:00+/km"),
        ),
    ]
}

fn tip(
    id: &str,
    category: NutritionCategory,
    title: &str,
    content: &str,
    timing: Option<&str>,
) -> nutrition_tip::Model {
    nutrition_tip::Model {
        id: id.to_string(),
        category,
        title: title.to_string(),
        content: content.to_string(),
        timing: timing.map(str::to_string),
    }
}

pub fn nutrition_tips() -> Vec<nutrition_tip::Model> {
    vec![
        tip(
            "nutrition-1",
            NutritionCategory::PreRun,
            "Pre-Run Fueling",
            "Eat 2-3 hours before your run. Focus on easily digestible carbs with moderate protein. Avoid high fiber and fat close to your run.",
            Some("2-3 hours before"),
        ),
        tip(
            "nutrition-2",
            NutritionCategory::PreRun,
            "Quick Pre-Run Snack",
            "If you need a quick snack 30-60 minutes before, try a banana, toast with honey, or a small energy bar.",
            Some("30-60 minutes before"),
        ),
        tip(
            "nutrition-3",
            NutritionCategory::PostRun,
            "Recovery Window",
            "Consume protein and carbs within 30 minutes of finishing. Aim for a 3:1 or 4:1 carb-to-protein ratio.",
            Some("Within 30 minutes"),
        ),
        tip(
            "nutrition-4",
            NutritionCategory::PostRun,
            "Recovery Meal Ideas",
            "Greek yogurt with berries and granola, chocolate milk, or a turkey sandwich are excellent post-run options.",
            None,
        ),
        tip(
            "nutrition-5",
            NutritionCategory::RaceDay,
            "Race Morning",
            "Stick to familiar foods you've tested in training. Eat 3 hours before start time. Avoid experimenting with new foods.",
            Some("3 hours before race"),
        ),
        tip(
            "nutrition-6",
            NutritionCategory::Hydration,
            "Daily Hydration",
            "Aim for half your body weight in ounces of water daily. Increase during hot weather or intense training periods.",
            None,
        ),
    ]
}

fn exercise(name: &str, reps: i32, sets: i32, description: &str) -> Exercise {
    Exercise {
        name: name.to_string(),
        reps,
        sets,
        description: description.to_string(),
    }
}

fn areas(names: &[&str]) -> TargetAreas {
    TargetAreas(names.iter().map(|n| n.to_string()).collect())
}

pub fn strength_routines() -> Vec<strength_routine::Model> {
    vec![
        strength_routine::Model {
            id: "strength-1".to_string(),
            name: "Runner's Core Basics".to_string(),
            duration: 15.0,
            difficulty: Difficulty::Easy,
            exercises: Exercises(vec![
                exercise("Plank", 30, 3, "Hold a forearm plank position, keeping body straight"),
                exercise("Glute Bridges", 15, 3, "Lift hips toward ceiling, squeeze glutes at top"),
                exercise("Bird Dogs", 10, 3, "Extend opposite arm and leg while maintaining balance"),
                exercise("Dead Bug", 10, 3, "Lower opposite arm and leg while keeping core engaged"),
            ]),
            target_areas: areas(&["core", "glutes"]),
        },
        strength_routine::Model {
            id: "strength-2".to_string(),
            name: "Lower Body Power".to_string(),
            duration: 25.0,
            difficulty: Difficulty::Medium,
            exercises: Exercises(vec![
                exercise("Bodyweight Squats", 15, 3, "Squat down until thighs are parallel to floor"),
                exercise("Lunges", 12, 3, "Alternate legs, step forward and lower back knee toward floor"),
                exercise("Single-Leg Deadlift", 10, 3, "Balance on one leg while hinging forward"),
                exercise("Calf Raises", 20, 3, "Rise up on toes, pause at top, lower slowly"),
                exercise("Wall Sits", 45, 3, "Hold seated position against wall (seconds)"),
            ]),
            target_areas: areas(&["quads", "hamstrings", "glutes"]),
        },
        strength_routine::Model {
            id: "strength-3".to_string(),
            name: "Full Body Runner".to_string(),
            duration: 30.0,
            difficulty: Difficulty::Hard,
            exercises: Exercises(vec![
                exercise("Burpees", 10, 3, "Full burpee with push-up and jump"),
                exercise("Mountain Climbers", 20, 3, "Alternate driving knees toward chest in plank position"),
                exercise("Jump Squats", 12, 3, "Explosive squat with jump at top"),
                exercise("Push-ups", 15, 3, "Standard push-up, modify on knees if needed"),
                exercise("Plank with Shoulder Taps", 20, 3, "In plank, alternate tapping opposite shoulder"),
                exercise("Split Jumps", 12, 3, "Lunge position, jump and switch legs in air"),
            ]),
            target_areas: areas(&["core", "legs", "upper body"]),
        },
    ]
}

pub fn challenges() -> Vec<challenge::Model> {
    vec![
        challenge::Model {
            id: "challenge-1".to_string(),
            title: "Monthly 100K".to_string(),
            description: "Run 100 kilometers this month. Every kilometer counts!".to_string(),
            challenge_type: ChallengeType::Distance,
            target: 100.0,
            unit: "km".to_string(),
            start_date: date(2026, 10, 1),
            end_date: date(2026, 10, 31),
            participants: 1234,
            user_progress: None,
        },
        challenge::Model {
            id: "challenge-2".to_string(),
            title: "7-Day Streak".to_string(),
            description: "Run every day for 7 days straight. Any distance counts!".to_string(),
            challenge_type: ChallengeType::Streak,
            target: 7.0,
            unit: "days".to_string(),
            start_date: date(2026, 1, 1),
            end_date: date(2026, 12, 31),
            participants: 856,
            user_progress: None,
        },
        challenge::Model {
            id: "challenge-3".to_string(),
            title: "Speed Demon".to_string(),
            description: "Log 60 minutes of tempo or interval runs this week.".to_string(),
            challenge_type: ChallengeType::Time,
            target: 60.0,
            unit: "min".to_string(),
            start_date: date(2026, 10, 12),
            end_date: date(2026, 10, 18),
            participants: 423,
            user_progress: None,
        },
    ]
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    [
        ("user-100", "Sarah K.", 156.3),
        ("user-101", "Mike R.", 142.8),
        ("user-102", "Emma L.", 138.5),
        ("user-103", "David M.", 125.2),
        ("user-104", "Lisa W.", 118.9),
        (DEMO_USER_ID, "You", 67.0),
        ("user-105", "Tom H.", 62.4),
        ("user-106", "Anna P.", 58.1),
    ]
    .into_iter()
    .zip(1..)
    .map(|((user_id, user_name, value), rank)| LeaderboardEntry {
        rank,
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        avatar: None,
        value,
        unit: "km".to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_tips_cover_every_category() {
        let tips = nutrition_tips();
        for category in [
            NutritionCategory::PreRun,
            NutritionCategory::PostRun,
            NutritionCategory::RaceDay,
            NutritionCategory::Hydration,
        ] {
            assert!(tips.iter().any(|t| t.category == category));
        }
    }

    #[test]
    fn test_leaderboard_is_ranked_in_order() {
        let ranks: Vec<i32> = leaderboard().iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_workouts_start_incomplete() {
        let workouts = workouts();
        assert_eq!(workouts.len(), 5);
        assert!(workouts.iter().all(|w| !w.completed && w.completed_at.is_none()));
        assert!(workouts[2].intervals.is_some());
    }
}

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use runai_backend::routes;
use runai_backend::services::randomness::RandomSource;
use runai_backend::storage::{DatabaseStorage, MemoryStorage, Storage};
use runai_backend::utils::db::{establish_connection, prepare_schema};

fn build_app(
    storage: Arc<dyn Storage>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(storage))
        .app_data(web::Data::new(RandomSource::seeded(7)))
        .configure(routes::configure)
}

fn seeded_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    build_app(Arc::new(MemoryStorage::seeded()))
}

fn full_profile(age: i32) -> Value {
    json!({
        "age": age,
        "height": 180.0,
        "weight": 72.5,
        "experienceLevel": "intermediate",
        "weeklyMileage": 30.0,
        "availableTrainingDays": [1, 3, 5, 6],
        "prs": { "5K": 1320.0 }
    })
}

#[actix_web::test]
async fn health_reports_storage_backend() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[actix_web::test]
async fn register_login_profile_stress_and_plan_flow() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": "t@x.com", "password": "p", "name": "T" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let registered: Value = test::read_body_json(resp).await;

    let user_id = registered["user"]["id"].as_str().unwrap().to_string();
    assert!(user_id.starts_with("user-"));
    assert_eq!(registered["user"]["email"], "t@x.com");
    assert_eq!(registered["user"]["subscription"], "free");
    assert_eq!(registered["user"]["profile"]["experienceLevel"], "beginner");
    assert!(!registered["token"].as_str().unwrap().is_empty());

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "t@x.com", "password": "anything" }))
        .to_request();
    let logged_in: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(logged_in["user"]["id"], user_id.as_str());

    let req = test::TestRequest::patch()
        .uri(&format!("/api/profile/{}", user_id))
        .set_json(full_profile(25))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/profile/{}", user_id))
        .to_request();
    let profile: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(profile["profile"]["age"], 25);
    assert_eq!(profile["profile"]["availableTrainingDays"], json!([1, 3, 5, 6]));

    let req = test::TestRequest::post()
        .uri("/api/stress")
        .set_json(json!({ "userId": user_id, "date": "2026-10-17", "level": 4 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let entry: Value = test::read_body_json(resp).await;
    assert!(entry["id"].as_str().unwrap().starts_with("stress-"));
    assert_eq!(entry["level"], 4);

    let req = test::TestRequest::get()
        .uri(&format!("/api/stress/history/{}", user_id))
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["id"], entry["id"]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/training-plans/{}", user_id))
        .to_request();
    let before: Value = test::call_and_read_body_json(&app, req).await;
    assert!(before.is_null());

    let req = test::TestRequest::post()
        .uri("/api/training-plans/generate")
        .set_json(json!({ "userId": user_id, "goal": "Marathon" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let plan: Value = test::read_body_json(resp).await;
    assert_eq!(plan["goal"], "Marathon");
    assert_eq!(plan["userId"], user_id.as_str());
    assert_eq!(plan["weeks"].as_array().unwrap().len(), 1);
    assert_eq!(plan["weeks"][0]["focus"], "Base Building");

    let req = test::TestRequest::get()
        .uri(&format!("/api/training-plans/{}", user_id))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["id"], plan["id"]);
}

#[actix_web::test]
async fn duplicate_registration_is_rejected() {
    let app = test::init_service(seeded_app()).await;
    let body = json!({ "email": "dup@x.com", "password": "p", "name": "Dup" });

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": " DUP@x.com", "password": "q", "name": "Again" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert!(error["error"].as_str().unwrap().contains("dup@x.com"));
}

#[actix_web::test]
async fn login_with_unknown_email_is_unauthorized() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "nobody@x.com", "password": "p" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn demo_user_can_log_in() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "runner@example.com", "password": "p" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["user"]["id"], "user-123");
}

#[actix_web::test]
async fn invalid_input_is_a_validation_error() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/stress")
        .set_json(json!({ "userId": "user-123", "date": "2026-10-17", "level": 6 }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let req = test::TestRequest::post()
        .uri("/api/training-plans/generate")
        .set_json(json!({ "userId": "user-123", "goal": "Ultra" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": "not-an-email", "password": "p", "name": "X" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let req = test::TestRequest::get()
        .uri("/api/nutrition-tips?category=dessert")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[actix_web::test]
async fn unknown_user_is_not_found() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/profile/user-missing")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::patch()
        .uri("/api/profile/user-missing")
        .set_json(full_profile(40))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/subscription/upgrade")
        .set_json(json!({ "userId": "user-missing" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn stress_history_is_synthesized_when_empty() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/stress/history/user-123?days=5")
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    let history = history.as_array().unwrap();

    assert_eq!(history.len(), 5);
    for entry in history {
        let level = entry["level"].as_i64().unwrap();
        assert!((1..=5).contains(&level));
        assert_eq!(entry["userId"], "user-123");
    }
}

#[actix_web::test]
async fn completing_workouts() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/workouts/workout-999/complete")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/workouts/workout-2/complete")
        .set_json(json!({ "distance": 8.3, "duration": 44.0 }))
        .to_request();
    let workout: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(workout["completed"], true);
    assert_eq!(workout["actualDistance"], 8.3);
    assert_eq!(workout["actualDuration"], 44.0);
    assert!(workout["completedAt"].is_string());

    let req = test::TestRequest::get().uri("/api/workouts").to_request();
    let workouts: Value = test::call_and_read_body_json(&app, req).await;
    let workouts = workouts.as_array().unwrap();
    assert_eq!(workouts.len(), 5);
    let stored = workouts.iter().find(|w| w["id"] == "workout-2").unwrap();
    assert_eq!(stored["completed"], true);

    let req = test::TestRequest::post()
        .uri("/api/workouts/workout-1/complete")
        .set_json(json!({ "distance": -1.0 }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[actix_web::test]
async fn today_workout_comes_from_catalog() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/workouts/today/user-123")
        .to_request();
    let workout: Value = test::call_and_read_body_json(&app, req).await;

    let id = workout["id"].as_str().unwrap();
    assert!(id.starts_with("workout-"));
}

#[actix_web::test]
async fn joining_a_challenge_increments_participants() {
    let app = test::init_service(seeded_app()).await;

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/challenges/challenge-2/join")
            .set_json(json!({ "userId": "user-123" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/api/challenges").to_request();
    let challenges: Value = test::call_and_read_body_json(&app, req).await;
    let joined = challenges
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == "challenge-2")
        .unwrap();
    assert_eq!(joined["participants"], 859);
    assert_eq!(joined["userProgress"], 0.0);

    let req = test::TestRequest::post()
        .uri("/api/challenges/challenge-404/join")
        .set_json(json!({ "userId": "user-123" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn catalog_endpoints() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/nutrition-tips?category=pre-run")
        .to_request();
    let tips: Value = test::call_and_read_body_json(&app, req).await;
    let tips = tips.as_array().unwrap();
    assert_eq!(tips.len(), 2);
    assert!(tips.iter().all(|t| t["category"] == "pre-run"));

    let req = test::TestRequest::get().uri("/api/nutrition-tips").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().unwrap().len(), 6);

    let req = test::TestRequest::get().uri("/api/strength-routines").to_request();
    let routines: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(routines.as_array().unwrap().len(), 3);
    assert!(routines[0]["exercises"].as_array().is_some());
}

#[actix_web::test]
async fn leaderboard_coach_and_progress() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/leaderboard?type=monthly")
        .to_request();
    let board: Value = test::call_and_read_body_json(&app, req).await;
    let board = board.as_array().unwrap();
    assert_eq!(board.len(), 8);
    assert_eq!(board[0]["rank"], 1);

    let req = test::TestRequest::get()
        .uri("/api/coach/message?workoutCompleted=true&stressLevel=3")
        .to_request();
    let message: Value = test::call_and_read_body_json(&app, req).await;
    assert!(["motivation", "tip", "warning"].contains(&message["type"].as_str().unwrap()));
    assert!(!message["content"].as_str().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri("/api/progress/stats/user-123")
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["totalRuns"], 47);
    assert_eq!(stats["weeklyData"].as_array().unwrap().len(), 7);
}

#[actix_web::test]
async fn upgrade_switches_to_premium() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/subscription/upgrade")
        .set_json(json!({ "userId": "user-123" }))
        .to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(user["subscription"], "premium");

    let req = test::TestRequest::get().uri("/api/profile/user-123").to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["subscription"], "premium");
}

#[actix_web::test]
async fn database_backend_serves_the_same_api() {
    let db = establish_connection("sqlite::memory:").await.unwrap();
    prepare_schema(&db).await.unwrap();
    let app = test::init_service(build_app(Arc::new(DatabaseStorage::new(db)))).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["storage"], "database");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": "db@x.com", "password": "p", "name": "Db" }))
        .to_request();
    let registered: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = registered["user"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/training-plans/generate")
        .set_json(json!({ "userId": user_id, "goal": "Half Marathon" }))
        .to_request();
    let plan: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(plan["name"], "Half Marathon Plan");

    let req = test::TestRequest::post()
        .uri("/api/training-plans/generate")
        .set_json(json!({ "userId": user_id, "goal": "5K" }))
        .to_request();
    let replaced: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/training-plans/{}", user_id))
        .to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["id"], replaced["id"]);
    assert_eq!(stored["goal"], "5K");

    let req = test::TestRequest::post()
        .uri("/api/challenges/challenge-1/join")
        .set_json(json!({ "userId": user_id }))
        .to_request();
    let challenge: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(challenge["participants"], 1235);

    let req = test::TestRequest::get().uri("/api/workouts").to_request();
    let workouts: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(workouts.as_array().unwrap().len(), 5);
}

#[actix_web::test]
async fn onboarding_replaces_profile() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/profile/user-123/onboarding")
        .set_json(full_profile(41))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let onboarded: Value = test::read_body_json(resp).await;
    assert_eq!(onboarded["id"], "user-123");
    assert_eq!(onboarded["profile"]["age"], 41);

    let req = test::TestRequest::get().uri("/api/profile/user-123").to_request();
    let stored: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stored["profile"], onboarded["profile"]);
    assert_eq!(stored["profile"]["experienceLevel"], "intermediate");
    assert_eq!(stored["profile"]["prs"]["5K"], 1320.0);

    let req = test::TestRequest::post()
        .uri("/api/profile/user-missing/onboarding")
        .set_json(full_profile(41))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn today_workout_is_null_for_empty_catalog() {
    let app = test::init_service(build_app(Arc::new(MemoryStorage::empty()))).await;

    let req = test::TestRequest::get()
        .uri("/api/workouts/today/user-123")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert!(body.is_null());
}

#[actix_web::test]
async fn stress_history_window_is_capped() {
    let app = test::init_service(seeded_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/stress/history/user-123?days=365")
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(history.as_array().unwrap().len(), 365);

    let req = test::TestRequest::get()
        .uri("/api/stress/history/user-123?days=3000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error: Value = test::read_body_json(resp).await;
    assert!(error["error"].as_str().unwrap().contains("365"));
}

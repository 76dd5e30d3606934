use actix_web::web;

use crate::errors::AppError;
use crate::handlers;

/// Registers every endpoint under `/api`, plus the extractor configs that
/// turn malformed input into validation errors.
///
/// The storage (`web::Data<dyn Storage>`) and the random source
/// (`web::Data<RandomSource>`) must be registered on the `App` by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::validation(err).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::validation(err).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::validation(err).into()),
    )
    .service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health::health))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(handlers::auth::register))
                    .route("/login", web::post().to(handlers::auth::login)),
            )
            .service(
                web::scope("/profile")
                    .route("/{user_id}", web::get().to(handlers::profile::get_profile))
                    .route("/{user_id}", web::patch().to(handlers::profile::update_profile))
                    .route(
                        "/{user_id}/onboarding",
                        web::post().to(handlers::profile::complete_onboarding),
                    ),
            )
            .service(
                web::scope("/stress")
                    .route("", web::post().to(handlers::stress::log_stress))
                    .route(
                        "/history/{user_id}",
                        web::get().to(handlers::stress::get_stress_history),
                    ),
            )
            // "/generate" must be registered before the "/{user_id}" catch-all
            .service(
                web::scope("/training-plans")
                    .route(
                        "/generate",
                        web::post().to(handlers::training_plans::generate_training_plan),
                    )
                    .route(
                        "/{user_id}",
                        web::get().to(handlers::training_plans::get_training_plan),
                    ),
            )
            .service(
                web::scope("/workouts")
                    .route("", web::get().to(handlers::workouts::list_workouts))
                    .route(
                        "/today/{user_id}",
                        web::get().to(handlers::workouts::get_today_workout),
                    )
                    .route(
                        "/{workout_id}/complete",
                        web::post().to(handlers::workouts::complete_workout),
                    ),
            )
            .route(
                "/strength-routines",
                web::get().to(handlers::catalog::list_strength_routines),
            )
            .route(
                "/nutrition-tips",
                web::get().to(handlers::catalog::list_nutrition_tips),
            )
            .service(
                web::scope("/challenges")
                    .route("", web::get().to(handlers::community::list_challenges))
                    .route(
                        "/{challenge_id}/join",
                        web::post().to(handlers::community::join_challenge),
                    ),
            )
            .route(
                "/leaderboard",
                web::get().to(handlers::community::get_leaderboard),
            )
            .route(
                "/coach/message",
                web::get().to(handlers::coach::get_coach_message),
            )
            .route(
                "/progress/stats/{user_id}",
                web::get().to(handlers::progress::get_progress_stats),
            )
            .route(
                "/subscription/upgrade",
                web::post().to(handlers::subscription::upgrade_subscription),
            ),
    );
}

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::services::coach::pick_message;
use crate::services::randomness::RandomSource;

// Parsed so malformed values are rejected, but not used to pick a message
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachMessageQuery {
    pub workout_completed: Option<bool>,
    pub stress_level: Option<i32>,
}

/// GET /api/coach/message?workoutCompleted=B&stressLevel=N
pub async fn get_coach_message(
    random: web::Data<RandomSource>,
    _query: web::Query<CoachMessageQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(pick_message(&random))
}

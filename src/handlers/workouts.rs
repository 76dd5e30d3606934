use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::workout::WorkoutCompletion;
use crate::services::randomness::RandomSource;
use crate::storage::Storage;

/// GET /api/workouts
pub async fn list_workouts(storage: web::Data<dyn Storage>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(storage.list_workouts().await?))
}

/// GET /api/workouts/today/{user_id}
/// Any workout from the catalog; the user is not consulted yet
pub async fn get_today_workout(
    storage: web::Data<dyn Storage>,
    random: web::Data<RandomSource>,
    _path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let workouts = storage.list_workouts().await?;
    Ok(HttpResponse::Ok().json(random.choose(&workouts)))
}

/// POST /api/workouts/{workout_id}/complete
pub async fn complete_workout(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
    payload: web::Json<WorkoutCompletion>,
) -> Result<HttpResponse, AppError> {
    let workout_id = path.into_inner();
    let completion = payload.into_inner();

    if completion.distance.map_or(false, |d| d < 0.0)
        || completion.duration.map_or(false, |d| d < 0.0)
    {
        return Err(AppError::validation("distance and duration must not be negative"));
    }

    let workout = storage.complete_workout(&workout_id, completion).await?;
    log::info!("Workout {} completed", workout_id);

    Ok(HttpResponse::Ok().json(workout))
}

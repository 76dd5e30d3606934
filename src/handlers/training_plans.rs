use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::training_plan::RaceGoal;
use crate::services::plan_generator::generate_plan;
use crate::storage::Storage;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    pub user_id: String,
    pub goal: RaceGoal,
}

/// GET /api/training-plans/{user_id}
/// Returns `null` rather than 404 when the user has no plan
pub async fn get_training_plan(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let plan = storage.find_training_plan(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plan))
}

/// POST /api/training-plans/generate
pub async fn generate_training_plan(
    storage: web::Data<dyn Storage>,
    payload: web::Json<GeneratePlanRequest>,
) -> Result<HttpResponse, AppError> {
    let plan = generate_plan(&payload.user_id, payload.goal, Utc::now().date_naive());
    let plan = storage.replace_training_plan(plan).await?;

    log::info!(
        "Generated {} plan {} for user {}",
        plan.goal.label(),
        plan.id,
        plan.user_id
    );

    Ok(HttpResponse::Ok().json(plan))
}

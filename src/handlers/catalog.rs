use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::nutrition_tip::NutritionCategory;
use crate::storage::Storage;

#[derive(Debug, Deserialize)]
pub struct NutritionTipsQuery {
    pub category: Option<NutritionCategory>,
}

/// GET /api/strength-routines
pub async fn list_strength_routines(
    storage: web::Data<dyn Storage>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(storage.list_strength_routines().await?))
}

/// GET /api/nutrition-tips?category=C
pub async fn list_nutrition_tips(
    storage: web::Data<dyn Storage>,
    query: web::Query<NutritionTipsQuery>,
) -> Result<HttpResponse, AppError> {
    let tips = storage.list_nutrition_tips(query.category).await?;
    Ok(HttpResponse::Ok().json(tips))
}

use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::user_profile;
use crate::storage::Storage;
use crate::utils::validators::validate_profile;

/// GET /api/profile/{user_id}
pub async fn get_profile(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();

    match storage.find_user(&user_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// PATCH /api/profile/{user_id}
/// Replaces the whole profile; the body must be a complete profile
pub async fn update_profile(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
    payload: web::Json<user_profile::Model>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let profile = payload.into_inner();

    validate_profile(&profile).map_err(AppError::validation)?;

    let user = storage.replace_profile(&user_id, profile).await?;
    log::info!("Profile updated for user {}", user_id);

    Ok(HttpResponse::Ok().json(user))
}

/// POST /api/profile/{user_id}/onboarding
pub async fn complete_onboarding(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
    payload: web::Json<user_profile::Model>,
) -> Result<HttpResponse, AppError> {
    update_profile(storage, path, payload).await
}

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::user::{self, new_user_id, Subscription, User};
use crate::models::user_profile;
use crate::storage::Storage;
use crate::utils::auth::{issue_session_token, normalize_email};
use crate::utils::validators::{validate_email, validate_name};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    // Accepted for API compatibility; passwords are not stored or checked
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// POST /api/auth/register
pub async fn register(
    storage: web::Data<dyn Storage>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let req = req.into_inner();
    let email = normalize_email(&req.email);
    log::info!("📝 Registration attempt for email: {}", email);

    validate_email(&email).map_err(AppError::validation)?;
    validate_name(&req.name).map_err(AppError::validation)?;

    let account = user::Model {
        id: new_user_id(),
        email,
        name: req.name.trim().to_string(),
        avatar: None,
        subscription: Subscription::Free,
        created_at: Utc::now(),
    };
    let profile = user_profile::Model::registration_default(&account.id);

    let user = storage.create_user(account, profile).await.map_err(|e| {
        log::warn!("❌ Registration failed: {}", e);
        AppError::from(e)
    })?;

    log::info!("✅ User '{}' created successfully (ID: {})", user.account.email, user.id());

    Ok(HttpResponse::Ok().json(AuthResponse {
        user,
        token: issue_session_token(),
    }))
}

/// POST /api/auth/login
pub async fn login(
    storage: web::Data<dyn Storage>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let email = normalize_email(&req.email);
    log::info!("🔐 Login attempt for email: {}", email);

    match storage.find_user_by_email(&email).await? {
        Some(user) => {
            log::info!("✅ User '{}' logged in", user.id());
            Ok(HttpResponse::Ok().json(AuthResponse {
                user,
                token: issue_session_token(),
            }))
        }
        None => {
            log::warn!("❌ No user registered with email '{}'", email);
            Err(AppError::Unauthorized("Invalid credentials".to_string()))
        }
    }
}

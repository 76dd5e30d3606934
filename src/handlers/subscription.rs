use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::user::Subscription;
use crate::storage::Storage;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRequest {
    pub user_id: String,
}

/// POST /api/subscription/upgrade
/// No payment step: the account is switched to premium directly
pub async fn upgrade_subscription(
    storage: web::Data<dyn Storage>,
    payload: web::Json<UpgradeRequest>,
) -> Result<HttpResponse, AppError> {
    let user = storage
        .set_subscription(&payload.user_id, Subscription::Premium)
        .await?;
    log::info!("User {} upgraded to premium", user.id());

    Ok(HttpResponse::Ok().json(user))
}

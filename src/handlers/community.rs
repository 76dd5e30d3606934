use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::storage::Storage;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinChallengeRequest {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(rename = "type")]
    pub board_type: Option<String>,
}

/// GET /api/challenges
pub async fn list_challenges(storage: web::Data<dyn Storage>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(storage.list_challenges().await?))
}

/// POST /api/challenges/{challenge_id}/join
pub async fn join_challenge(
    storage: web::Data<dyn Storage>,
    path: web::Path<String>,
    payload: web::Json<JoinChallengeRequest>,
) -> Result<HttpResponse, AppError> {
    let challenge_id = path.into_inner();

    let challenge = storage.join_challenge(&challenge_id).await?;
    log::info!(
        "User {} joined challenge {} ({} participants)",
        payload.user_id,
        challenge.id,
        challenge.participants
    );

    Ok(HttpResponse::Ok().json(challenge))
}

/// GET /api/leaderboard?type=T
/// Every board type currently serves the same static ranking
pub async fn get_leaderboard(
    storage: web::Data<dyn Storage>,
    query: web::Query<LeaderboardQuery>,
) -> Result<HttpResponse, AppError> {
    log::debug!(
        "Leaderboard requested (type: {})",
        query.board_type.as_deref().unwrap_or("weekly")
    );
    Ok(HttpResponse::Ok().json(storage.leaderboard().await?))
}

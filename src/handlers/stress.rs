use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::stress_entry;
use crate::services::randomness::RandomSource;
use crate::services::stress_history::{synthesize_history, DEFAULT_HISTORY_DAYS, MAX_HISTORY_DAYS};
use crate::storage::Storage;
use crate::utils::validators::validate_stress_entry;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub days: Option<u32>,
}

/// POST /api/stress
pub async fn log_stress(
    storage: web::Data<dyn Storage>,
    payload: web::Json<stress_entry::Model>,
) -> Result<HttpResponse, AppError> {
    let mut entry = payload.into_inner();

    validate_stress_entry(&entry).map_err(AppError::validation)?;

    entry.id = stress_entry::new_stress_entry_id();
    entry.logged_at = Utc::now();
    let entry = storage.insert_stress_entry(entry).await?;

    Ok(HttpResponse::Ok().json(entry))
}

/// GET /api/stress/history/{user_id}?days=N (N at most 365)
/// Falls back to a synthesized week when the user has logged nothing
pub async fn get_stress_history(
    storage: web::Data<dyn Storage>,
    random: web::Data<RandomSource>,
    path: web::Path<String>,
    query: web::Query<HistoryQuery>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let days = query.days.unwrap_or(DEFAULT_HISTORY_DAYS);
    if days > MAX_HISTORY_DAYS {
        return Err(AppError::validation(format!(
            "days must be at most {}",
            MAX_HISTORY_DAYS
        )));
    }

    let entries = storage
        .list_stress_entries(&user_id, u64::from(days))
        .await?;

    if entries.is_empty() {
        let today = Utc::now().date_naive();
        return Ok(HttpResponse::Ok().json(synthesize_history(&user_id, days, today, &random)));
    }

    Ok(HttpResponse::Ok().json(entries))
}

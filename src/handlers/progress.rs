use actix_web::{web, HttpResponse, Responder};

use crate::services::progress::progress_stats;

/// GET /api/progress/stats/{user_id}
/// Same figures for every user
pub async fn get_progress_stats(_path: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(progress_stats())
}

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::storage::Storage;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
}

/// GET /api/health
pub async fn health(storage: web::Data<dyn Storage>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        storage: storage.backend_name(),
    })
}

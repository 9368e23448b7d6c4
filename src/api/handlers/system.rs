// src/api/handlers/system.rs
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use crate::core::meter::PasswordMeter;
use crate::api::types::SystemStatusResponse;

/// Get system status
#[utoipa::path(
    get,
    path = "/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Current system status", body = SystemStatusResponse)
    )
)]
pub async fn get_status(meter: web::Data<Arc<PasswordMeter>>) -> impl Responder {
    let history_file = meter
        .history_store()
        .location()
        .map(|path| path.display().to_string());

    let meter = meter.get_ref().clone();
    let history_count = match web::block(move || meter.get_history().len()).await {
        Ok(count) => count,
        Err(e) => {
            log::error!("History read task failed: {}", e);
            0
        }
    };

    HttpResponse::Ok().json(SystemStatusResponse {
        success: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        history_file,
        history_count,
    })
}

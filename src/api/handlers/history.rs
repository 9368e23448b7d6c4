// src/api/handlers/history.rs

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use std::cmp::Reverse;
use log::{info, error};
use crate::core::meter::PasswordMeter;
use crate::api::types::{HistoryResponse, SuccessResponse};

/// List password check history
///
/// Returns every recorded check, newest first, with passwords masked.
#[utoipa::path(
    get,
    path = "/history",
    tag = "History",
    responses(
        (status = 200, description = "Recorded checks", body = HistoryResponse)
    )
)]
pub async fn list_history(meter: web::Data<Arc<PasswordMeter>>) -> impl Responder {
    let meter = meter.get_ref().clone();
    let records = match web::block(move || meter.get_history()).await {
        Ok(records) => records,
        Err(e) => {
            error!("History read task failed: {}", e);
            Vec::new()
        }
    };

    let mut entries: Vec<_> = records.iter().map(|record| record.masked()).collect();
    // Stable sort keeps insertion order for checks within the same second
    entries.reverse();
    entries.sort_by_key(|record| Reverse(record.timestamp));

    HttpResponse::Ok().json(HistoryResponse {
        success: true,
        entries,
    })
}

/// Clear password check history
#[utoipa::path(
    delete,
    path = "/history",
    tag = "History",
    responses(
        (status = 200, description = "History cleared", body = SuccessResponse),
        (status = 500, description = "History could not be cleared", body = SuccessResponse)
    )
)]
pub async fn clear_history(meter: web::Data<Arc<PasswordMeter>>) -> impl Responder {
    let meter = meter.get_ref().clone();
    let cleared = match web::block(move || meter.clear_history()).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match cleared {
        Ok(()) => {
            info!("Password history cleared via API");
            HttpResponse::Ok().json(SuccessResponse {
                success: true,
                message: Some("Password history cleared!".to_string()),
                error: None,
            })
        }
        Err(e) => {
            error!("Failed to clear password history: {}", e);
            HttpResponse::InternalServerError().json(SuccessResponse {
                success: false,
                message: None,
                error: Some(format!("Failed to clear password history: {}", e)),
            })
        }
    }
}

// src/api/handlers/meter.rs

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use log::error;
use crate::core::meter::PasswordMeter;
use crate::api::types::{CheckPasswordRequest, CheckPasswordResponse};

/// Check password strength
///
/// Scores the password, returns improvement suggestions and records the
/// check in history unless the password is blacklisted.
#[utoipa::path(
    post,
    path = "/meter/check",
    tag = "Meter",
    request_body = CheckPasswordRequest,
    responses(
        (status = 200, description = "Strength check result", body = CheckPasswordResponse),
        (status = 400, description = "Empty password", body = CheckPasswordResponse),
        (status = 500, description = "History could not be written", body = CheckPasswordResponse)
    )
)]
pub async fn check_password(
    meter: web::Data<Arc<PasswordMeter>>,
    check_req: web::Json<CheckPasswordRequest>,
) -> impl Responder {
    if check_req.password.is_empty() {
        return HttpResponse::BadRequest().json(CheckPasswordResponse::failure(
            "Password must not be empty".to_string(),
        ));
    }

    // History writes touch the file system
    let meter = meter.get_ref().clone();
    let password = check_req.into_inner().password;
    let checked = match web::block(move || meter.check_password(&password)).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    let result = match checked {
        Ok(result) => result,
        Err(e) => {
            error!("Failed to record password check: {}", e);
            return HttpResponse::InternalServerError().json(CheckPasswordResponse::failure(
                format!("Failed to record password check: {}", e),
            ));
        }
    };

    let strength = result.strength();
    let feedback = if result.score < 5 { result.feedback.clone() } else { Vec::new() };

    HttpResponse::Ok().json(CheckPasswordResponse {
        success: true,
        score: result.score,
        strength: Some(strength),
        color: Some(strength.color().to_string()),
        is_blacklisted: result.is_blacklisted,
        feedback,
        message: Some(result.summary().to_string()),
        error: None,
    })
}

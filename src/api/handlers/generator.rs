// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use crate::core::meter::{MeterError, PasswordMeter};
use crate::models::PasswordGenerationOptions;
use crate::strength;
use crate::api::types::{PasswordGenerationRequest, PasswordGenerationResponse};

/// Generate a secure password
///
/// Generates a password containing at least one character of every selected
/// type. Generated passwords are not recorded in history.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid options", body = PasswordGenerationResponse),
        (status = 500, description = "Server error", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    meter: web::Data<Arc<PasswordMeter>>,
    defaults: web::Data<PasswordGenerationOptions>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    // Create options with defaults or provided values
    let options = PasswordGenerationOptions {
        length: generation_req.length.unwrap_or(defaults.length),
        include_uppercase: generation_req.include_uppercase.unwrap_or(defaults.include_uppercase),
        include_lowercase: generation_req.include_lowercase.unwrap_or(defaults.include_lowercase),
        include_numbers: generation_req.include_numbers.unwrap_or(defaults.include_numbers),
        include_symbols: generation_req.include_symbols.unwrap_or(defaults.include_symbols),
    };

    // Validate options
    if !(PasswordGenerationOptions::MIN_LENGTH..=PasswordGenerationOptions::MAX_LENGTH).contains(&options.length) {
        return Ok(HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(format!(
            "Password length must be between {} and {} characters",
            PasswordGenerationOptions::MIN_LENGTH,
            PasswordGenerationOptions::MAX_LENGTH
        ))));
    }

    let password = match meter.generate_password(&options) {
        Ok(pwd) => pwd,
        Err(MeterError::Generator(e)) => {
            return Ok(HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e.to_string())));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError().json(PasswordGenerationResponse::failure(
                format!("Failed to generate password: {}", e),
            )));
        }
    };

    let result = strength::score(&password);

    Ok(HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        score: Some(result.score),
        strength: Some(result.strength()),
        is_strong: result.score == 5,
        error: None,
    }))
}

// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use std::sync::Arc;
use crate::core::meter::PasswordMeter;
use crate::models::PasswordGenerationOptions;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Meter endpoints
        crate::api::handlers::meter::check_password,

        // Generator endpoints
        crate::api::handlers::generator::generate_password,

        // History endpoints
        crate::api::handlers::history::list_history,
        crate::api::handlers::history::clear_history,

        // System endpoints
        crate::api::handlers::system::get_status
    ),
    components(
        schemas(
            crate::api::types::SuccessResponse,
            crate::api::types::CheckPasswordRequest,
            crate::api::types::CheckPasswordResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::HistoryResponse,
            crate::api::types::SystemStatusResponse,

            // Models
            crate::models::Strength,
            crate::models::PasswordCheckRecord,
            crate::models::ScoreResult
        )
    ),
    tags(
        (name = "Meter", description = "Password strength checks"),
        (name = "Generator", description = "Password generation endpoints"),
        (name = "History", description = "Check history endpoints"),
        (name = "System", description = "System status")
    ),
    info(
        title = "Password Strength Meter API",
        version = "0.1.0",
        description = "Check password strength, generate passwords and review check history",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(
    meter: Arc<PasswordMeter>,
    defaults: PasswordGenerationOptions,
    address: String,
    port: u16,
) -> std::io::Result<()> {
    log::info!("Starting password meter web server on {}:{}", address, port);

    let meter_data = web::Data::new(meter);
    let defaults_data = web::Data::new(defaults);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(meter_data.clone())
            .app_data(defaults_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Web form
    cfg.route("/", web::get().to(handlers::web::index));

    // Strength meter
    cfg.service(
        web::scope("/meter")
            .route("/check", web::post().to(handlers::meter::check_password))
    );

    // Password generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
    );

    // Check history
    cfg.service(
        web::scope("/history")
            .route("", web::get().to(handlers::history::list_history))
            .route("", web::delete().to(handlers::history::clear_history))
    );

    // System
    cfg.service(
        web::scope("/system")
            .route("/status", web::get().to(handlers::system::get_status))
    );
}

// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod places;

pub use health::config as health_config;
pub use places::config as places_config;

use actix_web::middleware::DefaultHeaders;

/// Cross-origin access for every origin
/// DOCUMENTATION: The relay only serves simple GETs, so the allow-origin
/// header alone is enough for browsers
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*"))
}

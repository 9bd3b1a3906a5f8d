// src/main.rs
// DOCUMENTATION: Relay entry point
// PURPOSE: Initialize config and logging, then serve the places relay

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use lunchlord::config::Config;
use lunchlord::handlers;
use lunchlord::services::GooglePlacesClient;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(format!("{},actix_web=info", config.log_level)),
    )
    .init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting lunchlord places relay...");
    log::info!("Environment: {}", config.environment);

    // 4. Shared upstream client (holds the API key, never sent to callers)
    let places_client = GooglePlacesClient::from_config(&config).map_err(|e| {
        log::error!("Failed to build upstream HTTP client: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    let places_client = web::Data::new(places_client);
    log::info!(
        "Forwarding to {} (timeout: {}s)",
        config.places_base_url,
        config.upstream_timeout_secs
    );

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    log::info!("Proxy server running on http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(places_client.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(handlers::cors_headers())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::places_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}

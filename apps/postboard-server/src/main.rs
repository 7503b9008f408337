//! # Postboard Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        workers = config.workers,
        "Starting Postboard server"
    );

    let state = AppState::from_config(&config).await;

    let max_body_bytes = config.max_body_bytes;
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .configure(handlers::configure_routes)
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?
    .run();

    println!("Server running at http://localhost:{}", config.port);

    server.await
}

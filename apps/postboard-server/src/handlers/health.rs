//! Health check endpoint.

use actix_web::{HttpResponse, web};
use postboard_shared::HealthResponse;

use crate::state::AppState;

/// Health check endpoint - returns server status and the post count.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        posts: state.posts.len().await,
    };

    HttpResponse::Ok().json(response)
}

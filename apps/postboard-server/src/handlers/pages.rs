//! Static landing page.

use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET / - the landing page, read from disk on every request.
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let page = tokio::fs::read(&state.index_file).await.map_err(|e| {
        AppError::Internal(format!(
            "Failed to read {}: {}",
            state.index_file.display(),
            e
        ))
    })?;

    Ok(HttpResponse::Ok().content_type("text/html").body(page))
}

//! HTTP handlers and route configuration.

mod health;
mod pages;
mod posts;


use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
///
/// Paths match by prefix: anything under `/addPost` or `/posts` reaches
/// those handlers, and every other path serves the landing page.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/addPost{tail:.*}")
                .route(web::post().to(posts::add_post))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/posts{tail:.*}")
                .route(web::get().to(posts::list_posts))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/{tail:.*}")
                .route(web::get().to(pages::index))
                .default_service(web::to(method_not_allowed)),
        );
}

async fn method_not_allowed(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed(format!(
        "{} {}",
        req.method(),
        req.path()
    )))
}

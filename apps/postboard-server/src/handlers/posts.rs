//! Post handlers.

use actix_web::{HttpResponse, http::header::ContentType, web};

use postboard_infra::decode_form;
use postboard_infra::snapshot::codec;
use postboard_shared::StatusResponse;

use crate::state::AppState;

/// POST /addPost - store a URL-encoded `title` / `content` submission.
pub async fn add_post(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let fields = decode_form(&body);
    let post = state.posts.append(fields).await;

    tracing::info!(post_id = %post.id(), "Post added");

    HttpResponse::Ok().json(StatusResponse::ok())
}

/// GET /posts - all posts, oldest first.
pub async fn list_posts(state: web::Data<AppState>) -> HttpResponse {
    let posts = state.posts.list().await;

    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(codec::encode(&posts))
}

//! Domain entities - the core business objects.

mod post;

pub use post::{CONTENT_KEY, ID_KEY, POST_LOG_CAPACITY, Post, PostFields, TITLE_KEY};

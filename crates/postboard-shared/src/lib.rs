//! # Postboard Shared
//!
//! Wire types shared by the server and its browser client.

pub mod dto;
pub mod response;

pub use dto::{HealthResponse, StatusResponse};
pub use response::ErrorResponse;

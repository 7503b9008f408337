//! Data Transfer Objects - response bodies for the JSON API.

use serde::{Deserialize, Serialize};

/// Acknowledgement returned after a post is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Server status document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub posts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ok_wire_shape() {
        let json = serde_json::to_string(&StatusResponse::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}

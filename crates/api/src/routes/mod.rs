//! HTTP route handlers.

use serde::Serialize;

pub mod eta;
pub mod groups;
pub mod health;
pub mod products;
pub mod signups;

/// Generic `{message}` response body used by mutation endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialization() {
        let response = MessageResponse::new("done");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"done"}"#);
    }
}

//! API request and response types

use crate::format::Reply;
use crate::state_machine::ConvState;
use serde::{Deserialize, Serialize};

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub text: String,
}

/// Reply to a chat message with the resulting state
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(flatten)]
    pub reply: Reply,
    pub state: ConvState,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

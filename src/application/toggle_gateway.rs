// Ports for the availability toggle exchange
use crate::domain::slot::{SlotId, ToggleResult};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("toggle request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("toggle endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("toggle response is not a valid slot state: {0}")]
    InvalidBody(#[source] serde_json::Error),
}

#[async_trait]
pub trait ToggleGateway: Send + Sync {
    /// Ask the server to flip a slot's availability and return its new state
    async fn toggle(&self, slot_id: &SlotId, csrf_token: &str) -> Result<ToggleResult, ToggleError>;
}

/// Source of the CSRF token sent with every toggle request.
pub trait CsrfTokenProvider: Send + Sync {
    /// Empty when no token is available; the request is still sent.
    fn csrf_token(&self) -> String;
}

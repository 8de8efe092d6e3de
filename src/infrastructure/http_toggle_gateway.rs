// HTTP implementation of the toggle endpoint exchange
use crate::application::toggle_gateway::{ToggleError, ToggleGateway};
use crate::domain::slot::{SlotId, ToggleResult};
use crate::infrastructure::csrf::CookieJar;
use async_trait::async_trait;
use reqwest::header;

pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone)]
pub struct HttpToggleGateway {
    client: reqwest::Client,
    toggle_url: String,
    cookies: CookieJar,
}

impl HttpToggleGateway {
    pub fn new(toggle_url: String, cookies: CookieJar) -> Self {
        Self {
            client: reqwest::Client::new(),
            toggle_url,
            cookies,
        }
    }

    fn form_body(slot_id: &SlotId) -> String {
        format!("slot_id={}", urlencoding::encode(slot_id.as_str()))
    }
}

#[async_trait]
impl ToggleGateway for HttpToggleGateway {
    async fn toggle(&self, slot_id: &SlotId, csrf_token: &str) -> Result<ToggleResult, ToggleError> {
        let mut request = self
            .client
            .post(&self.toggle_url)
            .header(CSRF_HEADER, csrf_token)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::ACCEPT, "application/json")
            .body(Self::form_body(slot_id));

        if !self.cookies.header_value().is_empty() {
            request = request.header(header::COOKIE, self.cookies.header_value());
        }

        tracing::debug!("Toggling slot {} via {}", slot_id, self.toggle_url);
        let response = request.send().await.map_err(ToggleError::Transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ToggleError::Status { status, body });
        }

        let bytes = response.bytes().await.map_err(ToggleError::Transport)?;
        serde_json::from_slice::<ToggleResult>(&bytes).map_err(ToggleError::InvalidBody)
    }
}

//! Client for the Resend delivery API.
//!
//! This module is the provider seam: everything Resend-specific (payload
//! shape, endpoint, response decoding) lives here and in `types`. Swapping
//! providers means replacing this module behind the same
//! request-in/message-id-out contract; the validator and encoder stay as
//! they are.

pub mod types;

use std::time::Duration;

use crate::attachment;
use crate::credential::ApiKey;
use crate::email::SendEmailRequest;
use crate::error::Error;

use types::{ErrorResponse, SendEmailPayload, SendResponse};

/// Hosted API endpoint; overridable for tests and self-hosted gateways.
pub const DEFAULT_BASE_URL: &str = "https://api.resend.com";

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The pipeline behind the `send_email` tool: validate and normalize,
    /// encode attachments, build the provider payload, dispatch with the
    /// caller's credential.
    ///
    /// Every check runs before the outbound call; a request that fails any
    /// of them never reaches the provider.
    pub async fn send_email(
        &self,
        request: SendEmailRequest,
        api_key: &ApiKey,
    ) -> Result<String, Error> {
        let email = request.validate()?;
        let attachments = attachment::encode_all(&email.attachments)?;

        log::info!(
            "Sending email: to={}, cc={}, bcc={}, attachments={}, subject={:?}",
            email.to.len(),
            email.cc.as_ref().map_or(0, Vec::len),
            email.bcc.as_ref().map_or(0, Vec::len),
            attachments.len(),
            email.subject,
        );
        if let Some(ref scheduled_at) = email.scheduled_at {
            log::info!("Scheduled at: {}", scheduled_at);
        }

        let payload = SendEmailPayload::build(email, attachments);
        self.dispatch(&payload, api_key).await
    }

    /// One POST to the delivery endpoint. A single attempt per call; retries
    /// are the caller's responsibility.
    async fn dispatch(&self, payload: &SendEmailPayload, api_key: &ApiKey) -> Result<String, Error> {
        let url = format!("{}/emails", self.base_url);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key.expose())
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::DeliveryUnreachable(e.to_string()))?;

        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();

            // Surface the provider's message verbatim; fall back to the raw
            // body when it is not the documented error shape.
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or(body);

            log::error!("Delivery API error ({}): {}", status.as_u16(), message);

            return Err(Error::DeliveryRejected {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SendResponse = resp
            .json()
            .await
            .map_err(|e| Error::DeliveryUnreachable(e.to_string()))?;

        log::info!("Email accepted, id = {}", parsed.id);

        Ok(parsed.id)
    }
}

//! Pluggable delivery of contact notifications.

use super::ContactMessage;
use crate::config::Config;
use crate::render::CONTACT_EMAIL;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("webhook returned {status}: {body}")]
    Status { status: u16, body: String },
}

impl DeliveryError {
    /// Network failures and 5xx responses are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            DeliveryError::Request(_) => true,
            DeliveryError::Status { status, .. } => *status >= 500,
        }
    }
}

/// Forwards a validated submission to whoever handles enquiries.
#[async_trait]
pub trait Delivery: Send + Sync {
    fn name(&self) -> &'static str;

    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError>;
}

/// Writes the message to the log and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDelivery;

#[async_trait]
impl Delivery for LogDelivery {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        info!("Contact form submission:\n{}", message.body());
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookPayload<'a> {
    to: &'a str,
    subject: &'a str,
    body: String,
    submission: &'a super::ValidSubmission,
    submitted_at: String,
}

/// POSTs the message as JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct WebhookDelivery {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
    retry: RetryConfig,
}

impl WebhookDelivery {
    pub fn new(url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
            token,
            retry: RetryConfig::webhook(),
        })
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn request(&self, payload: &WebhookPayload<'_>) -> reqwest::RequestBuilder {
        let request = self.client.post(&self.url).json(payload);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl Delivery for WebhookDelivery {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let payload = WebhookPayload {
            to: CONTACT_EMAIL,
            subject: ContactMessage::SUBJECT,
            body: message.body(),
            submission: &message.submission,
            submitted_at: message.submitted_at.to_rfc3339(),
        };

        with_retry_if(
            &self.retry,
            "Contact webhook",
            || {
                let request = self.request(&payload);
                send(request)
            },
            DeliveryError::is_retryable,
        )
        .await?;

        debug!("Contact submission delivered to {}", self.url);
        Ok(())
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<(), DeliveryError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(DeliveryError::Status {
        status: status.as_u16(),
        body,
    })
}

/// The webhook when one is configured, logging otherwise.
pub fn delivery_from_config(config: &Config) -> Result<Arc<dyn Delivery>> {
    match &config.contact_webhook_url {
        Some(url) => {
            info!("Contact submissions will be posted to {}", url);
            let webhook = WebhookDelivery::new(url.clone(), config.contact_webhook_token.clone())?;
            Ok(Arc::new(webhook))
        }
        None => {
            info!("No CONTACT_WEBHOOK_URL set; contact submissions will be logged");
            Ok(Arc::new(LogDelivery))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactSubmission;
    use chrono::Utc;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> ContactMessage {
        let submission = ContactSubmission {
            name: Some("Jane".to_string()),
            email: Some("jane@example.com".to_string()),
            inquiry_type: Some("web3".to_string()),
            message: Some("Hi there".to_string()),
            lang: Some("en".to_string()),
            ..ContactSubmission::default()
        }
        .validate()
        .unwrap();
        ContactMessage::new(submission, Utc::now())
    }

    fn webhook(server: &MockServer, token: Option<&str>) -> WebhookDelivery {
        WebhookDelivery::new(format!("{}/hook", server.uri()), token.map(str::to_string))
            .unwrap()
            .with_retry_config(RetryConfig::immediate(3))
    }

    #[test]
    fn test_retryable_statuses() {
        let server_error = DeliveryError::Status {
            status: 502,
            body: String::new(),
        };
        let client_error = DeliveryError::Status {
            status: 401,
            body: String::new(),
        };
        assert!(server_error.is_retryable());
        assert!(!client_error.is_retryable());
    }

    #[tokio::test]
    async fn test_log_delivery_always_succeeds() {
        assert!(LogDelivery.deliver(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn test_webhook_posts_json_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(header("authorization", "Bearer secret"))
            .and(body_partial_json(serde_json::json!({
                "to": "info@nebulainfinity.com",
                "subject": "New Contact Form Submission",
                "submission": { "name": "Jane", "inquiryType": "web3" }
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        webhook(&server, Some("secret"))
            .deliver(&message())
            .await
            .expect("delivery should succeed");
    }

    #[tokio::test]
    async fn test_webhook_retries_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        assert!(webhook(&server, None).deliver(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn test_webhook_does_not_retry_client_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
            .expect(1)
            .mount(&server)
            .await;

        let err = webhook(&server, Some("wrong")).deliver(&message()).await.unwrap_err();
        match err {
            DeliveryError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad token");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn test_delivery_from_config() {
        let config = Config::default();
        assert_eq!(delivery_from_config(&config).unwrap().name(), "log");

        let config = Config {
            contact_webhook_url: Some("https://hooks.example.com/contact".to_string()),
            ..Config::default()
        };
        assert_eq!(delivery_from_config(&config).unwrap().name(), "webhook");
    }
}

use reqwest::{Client, Method};
use std::time::Duration;

use super::channel::NotifyError;

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookRequest {
    pub url: String,
    pub http_method: String,
    pub body: String,
    pub content_type: String,
}

impl WebhookRequest {
    pub fn post_json(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http_method: "POST".to_string(),
            body: body.into(),
            content_type: "application/json".to_string(),
        }
    }
}

/// Performs the HTTP call for a notifier. Failures are reported once and never
/// retried here.
#[async_trait::async_trait]
pub trait WebhookSender: Send + Sync {
    async fn send_webhook(&self, request: &WebhookRequest) -> Result<(), NotifyError>;
}

pub struct HttpWebhookSender {
    client: Client,
}

impl HttpWebhookSender {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Default for HttpWebhookSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl WebhookSender for HttpWebhookSender {
    async fn send_webhook(&self, request: &WebhookRequest) -> Result<(), NotifyError> {
        let method = Method::from_bytes(request.http_method.as_bytes()).map_err(|_| {
            NotifyError::Delivery(format!("invalid http method '{}'", request.http_method))
        })?;

        tracing::debug!(url = %request.url, method = %method, bytes = request.body.len(), "sending webhook");

        self.client
            .request(method, &request.url)
            .header("Content-Type", request.content_type.as_str())
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?
            .error_for_status()
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        Ok(())
    }
}

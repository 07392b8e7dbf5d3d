//! Webhook API Client

use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{
    ClientError, EventType, PaymentRequest, RegisterWebhookRequest, TriggerPayload,
    UnregisterWebhookRequest,
};

/// Statuses each call treats as success
pub mod accepted {
    pub const REGISTER: &[u16] = &[200, 201];
    pub const PING: &[u16] = &[200];
    pub const PAYMENT: &[u16] = &[200, 201];
    pub const TRIGGER: &[u16] = &[200];
    pub const LIST_EVENTS: &[u16] = &[200];
    pub const UNREGISTER: &[u16] = &[200];
}

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON, or the raw text as a JSON string when it isn't JSON
    pub body: Value,
}

impl ApiResponse {
    pub fn is_accepted(&self, statuses: &[u16]) -> bool {
        statuses.contains(&self.status)
    }

    /// The body, if the status is one of `statuses`
    pub fn accepted(self, statuses: &[u16]) -> Option<Value> {
        if self.is_accepted(statuses) {
            Some(self.body)
        } else {
            None
        }
    }

    async fn read(url: &str, resp: Response) -> Result<Self, ClientError> {
        let status = resp.status().as_u16();
        let text = resp.text().await.map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })?;

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        debug!(url = %url, status, "Received response");
        Ok(Self { status, body })
    }
}

/// API client for the webhook service
pub struct HookcheckClient {
    client: Client,
    base_url: String,
}

impl HookcheckClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register `callback_url` for `event_type`
    pub async fn register_webhook(
        &self,
        callback_url: &str,
        event_type: &EventType,
        secret_key: &str,
    ) -> Result<ApiResponse, ClientError> {
        let request = RegisterWebhookRequest {
            callback_url: callback_url.to_string(),
            event_type: event_type.clone(),
            secret_key: secret_key.to_string(),
        };
        self.send(Method::POST, "/api/webhooks/register", Some(&request))
            .await
    }

    /// Ask the server to ping every registered webhook
    pub async fn ping(&self) -> Result<ApiResponse, ClientError> {
        self.send::<()>(Method::POST, "/api/webhooks/ping", None).await
    }

    /// Create a payment, which fires the payment webhooks server-side
    pub async fn create_payment(
        &self,
        payment: &PaymentRequest,
    ) -> Result<ApiResponse, ClientError> {
        self.send(Method::POST, "/api/payments", Some(payment)).await
    }

    /// Trigger `event_type` directly
    pub async fn trigger_event(
        &self,
        event_type: &EventType,
        payload: &TriggerPayload,
    ) -> Result<ApiResponse, ClientError> {
        let path = format!("/events/{}/trigger", event_type);
        self.send(Method::POST, &path, Some(payload)).await
    }

    /// Event types the server advertises
    pub async fn list_events(&self) -> Result<ApiResponse, ClientError> {
        self.send::<()>(Method::GET, "/events", None).await
    }

    /// Remove a registration
    pub async fn unregister_webhook(
        &self,
        callback_url: &str,
        event_type: &EventType,
    ) -> Result<ApiResponse, ClientError> {
        let request = UnregisterWebhookRequest {
            callback_url: callback_url.to_string(),
            event_type: event_type.clone(),
        };
        self.send(Method::DELETE, "/api/webhooks/unregister", Some(&request))
            .await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        ApiResponse::read(&url, resp).await
    }
}

//! Request bodies sent to the webhook API

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use super::event_type::EventType;

/// Body for `POST /api/webhooks/register`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterWebhookRequest {
    pub callback_url: String,
    pub event_type: EventType,
    pub secret_key: String,
}

/// Body for `DELETE /api/webhooks/unregister`
///
/// The unregister route reads the callback as `url`, unlike registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnregisterWebhookRequest {
    #[serde(rename = "url")]
    pub callback_url: String,
    pub event_type: EventType,
}

/// Body for `POST /api/payments`
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    pub amount: f64,
    pub currency: String,
    pub description: String,
}

impl PaymentRequest {
    /// The fixed test payment
    pub fn sample() -> Self {
        Self {
            amount: 100.50,
            currency: "USD".to_string(),
            description: "Test payment via hookcheck".to_string(),
        }
    }
}

/// Body for `POST /events/{type}/trigger`
#[derive(Debug, Clone, Serialize)]
pub struct TriggerPayload {
    pub id: Uuid,
    pub amount: f64,
    pub currency: String,
    /// Unix time in fractional seconds
    pub timestamp: f64,
}

impl TriggerPayload {
    /// A sample payload with a fresh id and the current time
    pub fn sample() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            amount: 150.75,
            currency: "USD".to_string(),
            timestamp: now.timestamp_micros() as f64 / 1_000_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_uses_camel_case() {
        let request = RegisterWebhookRequest {
            callback_url: "https://webhook.site/abc".to_string(),
            event_type: EventType::PaymentReceived,
            secret_key: "s3cret".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "callbackUrl": "https://webhook.site/abc",
                "eventType": "payment_received",
                "secretKey": "s3cret"
            })
        );
    }

    #[test]
    fn test_unregister_request_sends_url() {
        let request = UnregisterWebhookRequest {
            callback_url: "https://webhook.site/abc".to_string(),
            event_type: EventType::InvoiceCompleted,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "url": "https://webhook.site/abc",
                "eventType": "invoice_completed"
            })
        );
    }

    #[test]
    fn test_trigger_samples_get_distinct_ids() {
        let a = TriggerPayload::sample();
        let b = TriggerPayload::sample();

        assert_ne!(a.id, b.id);
        assert_eq!(a.currency, "USD");
        assert!(a.timestamp > 1_600_000_000.0);
    }
}

//! hookcheck
//!
//! Client library for manually exercising a webhook API: register a
//! callback, ping it, and fire sample payment and invoice events.
//!
//! - `domain/`: event types, request bodies and errors
//! - `client`: the HTTP client
//! - `settings`: run configuration from arguments and environment
//!
//! # Usage
//!
//! ```rust,ignore
//! use hookcheck::{HookcheckClient, EventType, accepted};
//!
//! let client = HookcheckClient::new("https://abc.ngrok.io");
//! let resp = client.register_webhook(url, &EventType::PaymentReceived, "secret").await?;
//! let body = resp.accepted(accepted::REGISTER);
//! ```

pub mod client;
pub mod domain;
pub mod settings;

pub use client::{accepted, ApiResponse, HookcheckClient};
pub use domain::{
    ClientError, ConfigError, EventType, PaymentRequest, RegisterWebhookRequest, TriggerPayload,
    UnregisterWebhookRequest,
};
pub use settings::{Settings, SettingsSource, TestMethod};

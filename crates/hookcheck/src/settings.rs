//! Run configuration
//!
//! Resolved once at startup from the command line and the environment.
//! Nothing is written back anywhere.

use std::env;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{ConfigError, EventType};

pub const ENV_NGROK_URL: &str = "NGROK_URL";
pub const ENV_WEBHOOK_URL: &str = "WEBHOOK_URL";
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_EVENT_TYPE: &str = "EVENT_TYPE";
pub const ENV_TRIGGER_EVENT_TYPE: &str = "TRIGGER_EVENT_TYPE";
pub const ENV_AUTO_OPEN: &str = "AUTO_OPEN";
pub const ENV_TEST_METHOD: &str = "TEST_METHOD";

/// How the last step of a run exercises the webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestMethod {
    Payment,
    Trigger,
    /// Ask the user at run time
    Ask,
}

impl TestMethod {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("payment") => TestMethod::Payment,
            Some("trigger") => TestMethod::Trigger,
            _ => TestMethod::Ask,
        }
    }
}

/// Raw, unvalidated inputs
#[derive(Debug, Clone, Default)]
pub struct SettingsSource {
    /// Positional base URL from the command line
    pub base_url_arg: Option<String>,
    pub ngrok_url: Option<String>,
    pub webhook_url: Option<String>,
    pub secret_key: Option<String>,
    pub event_type: Option<String>,
    pub trigger_event_type: Option<String>,
    pub auto_open: Option<String>,
    pub test_method: Option<String>,
}

impl SettingsSource {
    /// Read every variable from the process environment
    pub fn from_env(base_url_arg: Option<String>) -> Self {
        Self {
            base_url_arg,
            ngrok_url: var(ENV_NGROK_URL),
            webhook_url: var(ENV_WEBHOOK_URL),
            secret_key: var(ENV_SECRET_KEY),
            event_type: var(ENV_EVENT_TYPE),
            trigger_event_type: var(ENV_TRIGGER_EVENT_TYPE),
            auto_open: var(ENV_AUTO_OPEN),
            test_method: var(ENV_TEST_METHOD),
        }
    }
}

/// Empty values count as unset
fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub webhook_url: Option<String>,
    pub secret_key: String,
    /// True when `secret_key` was generated for this run
    pub secret_generated: bool,
    pub event_type: Option<EventType>,
    pub trigger_event_type: Option<EventType>,
    pub auto_open: bool,
    pub test_method: TestMethod,
}

impl Settings {
    pub fn resolve(source: SettingsSource) -> Result<Self, ConfigError> {
        let base_url = source
            .base_url_arg
            .filter(|s| !s.trim().is_empty())
            .or(source.ngrok_url.filter(|s| !s.trim().is_empty()))
            .ok_or(ConfigError::MissingBaseUrl)?;
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        let (secret_key, secret_generated) = match source.secret_key {
            Some(key) => (key, false),
            None => (Uuid::new_v4().to_string(), true),
        };

        let auto_open = !source
            .auto_open
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("false"));

        let settings = Self {
            base_url,
            webhook_url: source.webhook_url,
            secret_key,
            secret_generated,
            event_type: source.event_type.as_deref().map(EventType::from),
            trigger_event_type: source.trigger_event_type.as_deref().map(EventType::from),
            auto_open,
            test_method: TestMethod::parse(source.test_method.as_deref()),
        };

        debug!(
            base_url = %settings.base_url,
            webhook_url = ?settings.webhook_url,
            auto_open = settings.auto_open,
            test_method = ?settings.test_method,
            "Resolved settings"
        );

        Ok(settings)
    }

    /// Location of the API's Swagger UI
    pub fn swagger_url(&self) -> String {
        format!("{}/swagger", self.base_url)
    }

    /// Secret with everything but the first four characters hidden.
    /// Secrets of four characters or fewer are hidden entirely.
    pub fn masked_secret(&self) -> String {
        if self.secret_key.chars().count() <= 4 {
            return "****".to_string();
        }
        let visible: String = self.secret_key.chars().take(4).collect();
        format!("{}****", visible)
    }
}

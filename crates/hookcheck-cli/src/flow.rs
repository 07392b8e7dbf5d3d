//! The integration sequence
//!
//! Each step reports to the console and returns the accepted body, if
//! any. A failed step never stops the next one.

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;
use hookcheck::{EventType, HookcheckClient, PaymentRequest, Settings, TestMethod, TriggerPayload};
use serde_json::Value;
use tracing::{info, warn};

use crate::browser;
use crate::prompt::Prompter;
use crate::report::{report_step, Step};

const WEBHOOK_SITE: &str = "https://webhook.site";

/// Drives one manual webhook test against the API
pub struct Integrator<P, W> {
    settings: Settings,
    client: HookcheckClient,
    prompter: P,
    output: W,
    open_url: fn(&str),
}

impl<P: Prompter, W: Write> Integrator<P, W> {
    pub fn new(settings: Settings, client: HookcheckClient, prompter: P, output: W) -> Self {
        Self {
            settings,
            client,
            prompter,
            output,
            open_url: browser::open,
        }
    }

    /// Replace the browser launcher
    #[cfg(test)]
    fn with_opener(mut self, open_url: fn(&str)) -> Self {
        self.open_url = open_url;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Print where the run is pointed and which secret it uses
    pub fn announce(&mut self) -> Result<()> {
        if let Some(url) = &self.settings.webhook_url {
            writeln!(self.output, "Using webhook URL from environment: {}", url)?;
        }
        writeln!(self.output, "\nUsing secret key: {}", self.settings.secret_key)?;
        Ok(())
    }

    /// Webhook URL from the environment, or ask for one from webhook.site
    pub fn ensure_webhook_url(&mut self) -> Result<String> {
        if let Some(url) = &self.settings.webhook_url {
            return Ok(url.clone());
        }

        (self.open_url)(WEBHOOK_SITE);
        writeln!(self.output, "\n1. A new tab should have opened with webhook.site")?;
        writeln!(self.output, "2. Copy your unique URL from webhook.site")?;

        self.output.flush()?;
        let url = self
            .prompter
            .webhook_url()
            .context("Failed to read webhook URL")?;
        writeln!(self.output, "Webhook URL set to: {}", url)?;

        self.settings.webhook_url = Some(url.clone());
        Ok(url)
    }

    pub fn open_swagger_ui(&mut self) -> Result<String> {
        let url = self.settings.swagger_url();
        (self.open_url)(&url);
        writeln!(self.output, "\nOpened Swagger UI at {}", url)?;
        Ok(url)
    }

    /// Explicit choice, then the environment default, then the menu
    fn choose_event_type(
        &mut self,
        explicit: Option<EventType>,
        default: Option<EventType>,
    ) -> Result<EventType> {
        let event_type = match explicit.or(default) {
            Some(event_type) => event_type,
            None => {
                writeln!(self.output, "\nAvailable event types:")?;
                for (i, event) in EventType::KNOWN.iter().enumerate() {
                    writeln!(self.output, "{}. {}", i + 1, event)?;
                }
                self.output.flush()?;
                self.prompter
                    .event_type()
                    .context("Failed to read event type choice")?
            }
        };

        if !event_type.is_known() {
            warn!(event_type = %event_type, "Unknown event type");
            writeln!(
                self.output,
                "{}",
                format!(
                    "Warning: {} is not in the list of known event types: {}",
                    event_type,
                    EventType::known_labels()
                )
                .yellow()
            )?;
        }

        Ok(event_type)
    }

    pub async fn register_webhook(&mut self, event_type: Option<EventType>) -> Result<Option<Value>> {
        let Some(callback_url) = self.settings.webhook_url.clone() else {
            writeln!(
                self.output,
                "{}",
                "No webhook URL set. Please set WEBHOOK_URL in your .env file or paste one from webhook.site first."
                    .red()
            )?;
            return Ok(None);
        };

        let default = self.settings.event_type.clone();
        let event_type = self.choose_event_type(event_type, default)?;
        writeln!(self.output, "\nRegistering webhook with event type: {}", event_type)?;
        info!(event_type = %event_type, callback_url = %callback_url, "Registering webhook");

        let result = self
            .client
            .register_webhook(&callback_url, &event_type, &self.settings.secret_key)
            .await;
        Ok(report_step(&mut self.output, Step::Register, result)?)
    }

    pub async fn test_ping(&mut self) -> Result<Option<Value>> {
        writeln!(self.output, "\nTesting webhook connection with ping...")?;
        let result = self.client.ping().await;
        Ok(report_step(&mut self.output, Step::Ping, result)?)
    }

    pub async fn create_payment(&mut self) -> Result<Option<Value>> {
        writeln!(self.output, "\nCreating a test payment...")?;
        let result = self.client.create_payment(&PaymentRequest::sample()).await;
        Ok(report_step(&mut self.output, Step::Payment, result)?)
    }

    pub async fn trigger_event(&mut self, event_type: Option<EventType>) -> Result<Option<Value>> {
        let default = self.settings.trigger_event_type.clone();
        let event_type = self.choose_event_type(event_type, default)?;
        writeln!(self.output, "\nTriggering event: {}", event_type)?;

        let result = self
            .client
            .trigger_event(&event_type, &TriggerPayload::sample())
            .await;
        Ok(report_step(&mut self.output, Step::Trigger, result)?)
    }

    /// Server-advertised event types, then the local catalogue
    pub async fn list_events(&mut self) -> Result<Option<Value>> {
        writeln!(self.output, "\nFetching event types from the API...")?;
        let result = self.client.list_events().await;
        let body = report_step(&mut self.output, Step::ListEvents, result)?;

        writeln!(self.output, "\n{}", "Known event types:".bold())?;
        for event in EventType::KNOWN.iter() {
            writeln!(self.output, "  {}", event.to_string().cyan())?;
        }
        Ok(body)
    }

    pub async fn unregister_webhook(&mut self, event_type: Option<EventType>) -> Result<Option<Value>> {
        let callback_url = self.ensure_webhook_url()?;
        let default = self.settings.event_type.clone();
        let event_type = self.choose_event_type(event_type, default)?;
        writeln!(self.output, "\nUnregistering webhook for event type: {}", event_type)?;

        let result = self
            .client
            .unregister_webhook(&callback_url, &event_type)
            .await;
        Ok(report_step(&mut self.output, Step::Unregister, result)?)
    }

    /// The full sequence: webhook URL, Swagger UI, register, ping, event
    pub async fn run(&mut self) -> Result<()> {
        self.announce()?;
        writeln!(self.output, "{}", "==== hookcheck: webhook integration ====".bold())?;
        writeln!(self.output, "Using API at: {}", self.settings.base_url)?;

        if self.settings.webhook_url.is_none() {
            self.ensure_webhook_url()?;
        }

        if self.settings.auto_open {
            self.open_swagger_ui()?;
        }

        self.register_webhook(None).await?;
        self.test_ping().await?;

        let method = match self.settings.test_method {
            TestMethod::Ask => {
                writeln!(self.output, "\nWould you like to:")?;
                writeln!(self.output, "1. Create a payment event")?;
                writeln!(self.output, "2. Trigger a specific event")?;
                self.output.flush()?;
                self.prompter
                    .test_method()
                    .context("Failed to read test method")?
            }
            method => method,
        };
        match method {
            TestMethod::Payment => self.create_payment().await?,
            _ => self.trigger_event(None).await?,
        };

        writeln!(
            self.output,
            "\n{}",
            "Integration test complete! Check webhook.site for all notifications.".green()
        )?;
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (P, W) {
        (self.prompter, self.output)
    }
}

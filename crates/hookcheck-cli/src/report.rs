//! Console reporting for API steps

use std::io::{self, Write};

use colored::Colorize;
use hookcheck::{accepted, ApiResponse, ClientError};
use serde_json::Value;
use tracing::warn;

/// An API call the integrator can make
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Register,
    Ping,
    Payment,
    Trigger,
    ListEvents,
    Unregister,
}

impl Step {
    fn accepted(self) -> &'static [u16] {
        match self {
            Step::Register => accepted::REGISTER,
            Step::Ping => accepted::PING,
            Step::Payment => accepted::PAYMENT,
            Step::Trigger => accepted::TRIGGER,
            Step::ListEvents => accepted::LIST_EVENTS,
            Step::Unregister => accepted::UNREGISTER,
        }
    }

    fn success(self) -> &'static str {
        match self {
            Step::Register => "Webhook registered successfully!",
            Step::Ping => "Ping successful!",
            Step::Payment => "Payment created successfully!",
            Step::Trigger => "Event triggered successfully!",
            Step::ListEvents => "Event types fetched successfully!",
            Step::Unregister => "Webhook unregistered successfully!",
        }
    }

    fn failure(self) -> &'static str {
        match self {
            Step::Register => "Failed to register webhook:",
            Step::Ping => "Ping failed:",
            Step::Payment => "Failed to create payment:",
            Step::Trigger => "Failed to trigger event:",
            Step::ListEvents => "Failed to fetch event types:",
            Step::Unregister => "Failed to unregister webhook:",
        }
    }

    fn activity(self) -> &'static str {
        match self {
            Step::Register => "registering webhook",
            Step::Ping => "pinging webhook",
            Step::Payment => "creating payment",
            Step::Trigger => "triggering event",
            Step::ListEvents => "fetching event types",
            Step::Unregister => "unregistering webhook",
        }
    }

    /// Whether success means a delivery should show up on webhook.site
    fn delivers(self) -> bool {
        matches!(self, Step::Ping | Step::Payment | Step::Trigger)
    }
}

/// Print the outcome of `step`; returns the body only when accepted
pub fn report_step<W: Write>(
    out: &mut W,
    step: Step,
    result: Result<ApiResponse, ClientError>,
) -> io::Result<Option<Value>> {
    let resp = match result {
        Ok(resp) => resp,
        Err(e) => {
            warn!(step = ?step, error = %e, "Request failed");
            writeln!(out, "{}", format!("Error {}: {}", step.activity(), e).red())?;
            return Ok(None);
        }
    };

    writeln!(out, "Response status code: {}", resp.status)?;

    if resp.is_accepted(step.accepted()) {
        writeln!(out, "{}", step.success().green())?;
        writeln!(out, "{}", pretty(&resp.body))?;
        if step.delivers() {
            writeln!(
                out,
                "\n{}",
                "Check webhook.site to see if you received the notification.".dimmed()
            )?;
        }
        Ok(resp.accepted(step.accepted()))
    } else {
        writeln!(out, "{}", step.failure().red())?;
        writeln!(out, "{}", pretty(&resp.body))?;
        Ok(None)
    }
}

fn pretty(body: &Value) -> String {
    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(step: Step, status: u16, body: Value) -> (Option<Value>, String) {
        let mut out = Vec::new();
        let value = report_step(&mut out, step, Ok(ApiResponse { status, body })).unwrap();
        (value, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_created_register_is_printed_and_returned() {
        let (value, out) = report(Step::Register, 201, json!({"id": "wh_1"}));

        assert_eq!(value, Some(json!({"id": "wh_1"})));
        assert!(out.contains("Response status code: 201"));
        assert!(out.contains("Webhook registered successfully!"));
        assert!(out.contains("\"id\": \"wh_1\""));
        assert!(!out.contains("Check webhook.site"));
    }

    #[test]
    fn test_ping_success_points_at_webhook_site() {
        let (value, out) = report(Step::Ping, 200, json!({"ok": true}));

        assert!(value.is_some());
        assert!(out.contains("Ping successful!"));
        assert!(out.contains("Check webhook.site to see if you received the notification."));
    }

    #[test]
    fn test_rejected_prints_error_body_and_returns_none() {
        let (value, out) = report(Step::Payment, 422, json!({"error": "amount too small"}));

        assert_eq!(value, None);
        assert!(out.contains("Response status code: 422"));
        assert!(out.contains("Failed to create payment:"));
        assert!(out.contains("\"error\": \"amount too small\""));
    }

    #[test]
    fn test_trigger_created_is_not_accepted() {
        let (value, out) = report(Step::Trigger, 201, json!({}));

        assert_eq!(value, None);
        assert!(out.contains("Failed to trigger event:"));
    }
}

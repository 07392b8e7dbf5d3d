//! EventType - Business event categories a webhook can subscribe to

use serde::{Serialize, Serializer};
use std::convert::Infallible;

/// Event type label sent to the API
///
/// Labels outside the known catalogue are carried through as `Other`
/// so the server gets to decide whether it accepts them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    PaymentReceived,
    PaymentProcessed,
    InvoiceProcessing,
    InvoiceCompleted,
    Other(String),
}

impl EventType {
    /// Known event types, in menu order
    pub const KNOWN: [EventType; 4] = [
        EventType::PaymentReceived,
        EventType::PaymentProcessed,
        EventType::InvoiceProcessing,
        EventType::InvoiceCompleted,
    ];

    /// Map a 1-based menu choice to a known event type
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::KNOWN.get(i).cloned())
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, EventType::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventType::PaymentReceived => "payment_received",
            EventType::PaymentProcessed => "payment_processed",
            EventType::InvoiceProcessing => "invoice_processing",
            EventType::InvoiceCompleted => "invoice_completed",
            EventType::Other(label) => label,
        }
    }

    /// Comma-separated list of the known labels
    pub fn known_labels() -> String {
        Self::KNOWN
            .iter()
            .map(EventType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            "payment_received" => EventType::PaymentReceived,
            "payment_processed" => EventType::PaymentProcessed,
            "invoice_processing" => EventType::InvoiceProcessing,
            "invoice_completed" => EventType::InvoiceCompleted,
            other => EventType::Other(other.to_string()),
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

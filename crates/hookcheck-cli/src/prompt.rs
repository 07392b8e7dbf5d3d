//! Interactive prompts
//!
//! Answer parsing is kept apart from the terminal so the integrator can
//! be driven by a scripted `Prompter` in tests.

use dialoguer::Input;
use hookcheck::{EventType, TestMethod};
use thiserror::Error;

pub const NOT_A_NUMBER: &str = "Please enter a number.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Input(#[from] dialoguer::Error),

    #[error("{0}")]
    Rejected(&'static str),
}

/// Source of answers for the integrator's questions
pub trait Prompter {
    /// The webhook.site URL; never empty
    fn webhook_url(&mut self) -> Result<String, PromptError>;

    /// A known event type picked from the numbered menu
    fn event_type(&mut self) -> Result<EventType, PromptError>;

    /// Payment or trigger, from the 1/2 menu
    fn test_method(&mut self) -> Result<TestMethod, PromptError>;
}

/// Map a menu answer to a known event type
pub fn parse_choice(answer: &str) -> Result<EventType, &'static str> {
    let choice: i64 = answer.trim().parse().map_err(|_| NOT_A_NUMBER)?;
    usize::try_from(choice)
        .ok()
        .and_then(EventType::from_choice)
        .ok_or(INVALID_CHOICE)
}

/// Payment on `1`, trigger on anything else
pub fn parse_test_method(answer: &str) -> TestMethod {
    if answer.trim() == "1" {
        TestMethod::Payment
    } else {
        TestMethod::Trigger
    }
}

/// Prompts on the controlling terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn webhook_url(&mut self) -> Result<String, PromptError> {
        let url: String = Input::new()
            .with_prompt("Paste your webhook.site URL here")
            .interact_text()?;
        Ok(url.trim().to_string())
    }

    fn event_type(&mut self) -> Result<EventType, PromptError> {
        let answer: String = Input::new()
            .with_prompt(format!(
                "Select an event type (1-{})",
                EventType::KNOWN.len()
            ))
            .validate_with(|input: &String| parse_choice(input).map(|_| ()))
            .interact_text()?;

        parse_choice(&answer).map_err(PromptError::Rejected)
    }

    fn test_method(&mut self) -> Result<TestMethod, PromptError> {
        let answer: String = Input::new()
            .with_prompt("Enter your choice (1-2)")
            .interact_text()?;
        Ok(parse_test_method(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_valid() {
        assert_eq!(parse_choice("1"), Ok(EventType::PaymentReceived));
        assert_eq!(parse_choice(" 3 "), Ok(EventType::InvoiceProcessing));
        assert_eq!(parse_choice("4"), Ok(EventType::InvoiceCompleted));
    }

    #[test]
    fn test_parse_choice_out_of_range() {
        assert_eq!(parse_choice("0"), Err(INVALID_CHOICE));
        assert_eq!(parse_choice("5"), Err(INVALID_CHOICE));
        assert_eq!(parse_choice("-2"), Err(INVALID_CHOICE));
    }

    #[test]
    fn test_parse_choice_not_a_number() {
        assert_eq!(parse_choice("abc"), Err(NOT_A_NUMBER));
        assert_eq!(parse_choice(""), Err(NOT_A_NUMBER));
        assert_eq!(parse_choice("2.5"), Err(NOT_A_NUMBER));
    }

    #[test]
    fn test_parse_test_method() {
        assert_eq!(parse_test_method("1"), TestMethod::Payment);
        assert_eq!(parse_test_method("2"), TestMethod::Trigger);
        assert_eq!(parse_test_method("whatever"), TestMethod::Trigger);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Contact form state: field values, blur validation and the submit
//! button's "Sending..." indicator.
//!
//! Delivery of the message is handled elsewhere; this type only reflects
//! what the visitor sees while it happens.

use std::time::{Duration, Instant};

/// Label shown on the submit button while a submission is in flight.
pub const SENDING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Email, Field::Message];

    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Phone)
    }

    fn slot(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Phone => 1,
            Field::Email => 2,
            Field::Message => 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldState {
    value: String,
    invalid: bool,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: [FieldState; 4],
    submit_label: String,
    sending_since: Option<Instant>,
    reset_after: Duration,
}

impl ContactForm {
    pub fn new(submit_label: impl Into<String>, reset_after: Duration) -> Self {
        Self {
            fields: Default::default(),
            submit_label: submit_label.into(),
            sending_since: None,
            reset_after,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        &self.fields[field.slot()].value
    }

    /// Updates a field as the visitor types. A field previously flagged
    /// invalid is cleared; it is checked again on the next blur.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        let state = &mut self.fields[field.slot()];
        state.value = value.into();
        state.invalid = false;
    }

    /// Validates a field when it loses focus.
    pub fn blur(&mut self, field: Field) {
        let state = &mut self.fields[field.slot()];
        state.invalid = field.is_required() && state.value.trim().is_empty();
    }

    pub fn aria_invalid(&self, field: Field) -> bool {
        self.fields[field.slot()].invalid
    }

    /// Runs blur validation on every field. Returns `true` when all pass.
    pub fn validate_all(&mut self) -> bool {
        for field in Field::ALL {
            self.blur(field);
        }
        self.fields.iter().all(|state| !state.invalid)
    }

    /// Starts the submission indicator. Ignored while already sending.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.sending_since.is_some() {
            return false;
        }
        self.sending_since = Some(now);
        true
    }

    /// Restores the button once the reset delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(since) = self.sending_since {
            if now.saturating_duration_since(since) >= self.reset_after {
                self.sending_since = None;
            }
        }
    }

    pub fn is_sending(&self) -> bool {
        self.sending_since.is_some()
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_sending()
    }

    pub fn submit_label(&self) -> &str {
        if self.is_sending() {
            SENDING_LABEL
        } else {
            &self.submit_label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new("Send Message", Duration::from_secs(3))
    }

    #[test]
    fn blank_required_field_is_invalid_on_blur() {
        let mut form = form();
        form.input(Field::Name, "   ");
        form.blur(Field::Name);
        assert!(form.aria_invalid(Field::Name));
    }

    #[test]
    fn optional_field_is_never_invalid() {
        let mut form = form();
        form.blur(Field::Email);
        assert!(!form.aria_invalid(Field::Email));
    }

    #[test]
    fn typing_clears_invalid_mark() {
        let mut form = form();
        form.blur(Field::Phone);
        assert!(form.aria_invalid(Field::Phone));

        form.input(Field::Phone, "760");
        assert!(!form.aria_invalid(Field::Phone));
        assert_eq!(form.value(Field::Phone), "760");
    }

    #[test]
    fn validate_all_checks_every_required_field() {
        let mut form = form();
        form.input(Field::Name, "Ada");
        assert!(!form.validate_all());
        assert!(form.aria_invalid(Field::Phone));

        form.input(Field::Phone, "555-0100");
        assert!(form.validate_all());
    }

    #[test]
    fn submit_shows_sending_until_reset_delay() {
        let mut form = form();
        let start = Instant::now();

        assert!(form.submit(start));
        assert_eq!(form.submit_label(), SENDING_LABEL);
        assert!(!form.submit_enabled());

        form.tick(start + Duration::from_millis(2_900));
        assert!(form.is_sending());

        form.tick(start + Duration::from_secs(3));
        assert_eq!(form.submit_label(), "Send Message");
        assert!(form.submit_enabled());
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let mut form = form();
        let start = Instant::now();
        form.submit(start);
        assert!(!form.submit(start + Duration::from_secs(1)));

        // The first submission's timer still governs the reset.
        form.tick(start + Duration::from_secs(3));
        assert!(!form.is_sending());
    }
}

//! Contact form model.
//!
//! Status cycle: `Idle -> Sending -> Success -> Idle`, or
//! `Sending -> Error -> Idle` when the transport fails. Every submit bumps a
//! generation counter; timer callbacks carry the `Ticket` they were started
//! with, and completions for an older generation are ignored.

use std::future::Future;
use std::pin::Pin;

use rand::Rng;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// How long the simulated transport takes to "send".
pub const SENDING_WINDOW_MS: u32 = 2000;
/// How long the success (or error) state stays visible before returning to idle.
pub const RESULT_WINDOW_MS: u32 = 3000;

pub const SUCCESS_NOTICE: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Subject => "Let's work together",
            Field::Message => "Tell me about your project or just say hello!",
        }
    }

    /// DOM id of the input element.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Subject => "contact-subject",
            Field::Message => "contact-message",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    pub fn button_label(self) -> &'static str {
        match self {
            FormStatus::Idle => "Send Message",
            FormStatus::Sending => "Sending...",
            FormStatus::Success => "Message Sent!",
            FormStatus::Error => "Try Again",
        }
    }

    pub fn accepts_submit(self) -> bool {
        self != FormStatus::Sending
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(FormError::MissingField(field));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(FormError::InvalidEmail),
        }
    }
}

/// Why a submit was refused before anything was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    AlreadySending,
    MissingField(Field),
    InvalidEmail,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::AlreadySending => write!(f, "a message is already being sent"),
            FormError::MissingField(field) => write!(f, "{} is required", field.label()),
            FormError::InvalidEmail => write!(f, "email address is not valid"),
        }
    }
}

impl std::error::Error for FormError {}

/// Failure reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Rejected(String),
    Unreachable(String),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Rejected(reason) => write!(f, "message rejected: {}", reason),
            SubmitError::Unreachable(reason) => write!(f, "contact service unreachable: {}", reason),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Payload handed to a transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Ulid,
    pub sent_at_ms: u64,
    #[serde(flatten)]
    pub fields: FormFields,
}

impl ContactMessage {
    pub fn new(fields: FormFields, sent_at_ms: u64, rng: &mut impl Rng) -> Self {
        Self {
            id: Ulid::from_parts(sent_at_ms, rng.random::<u128>()),
            sent_at_ms,
            fields,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// Delivers a contact message somewhere.
pub trait ContactTransport {
    fn send(&self, message: ContactMessage) -> SubmitFuture;
}

/// Identifies one submit; stale tickets are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: FormFields,
    status: FormStatus,
    generation: u64,
    last_error: Option<SubmitError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Validates the fields and moves to `Sending`.
    pub fn submit(
        &mut self,
        sent_at_ms: u64,
        rng: &mut impl Rng,
    ) -> Result<(Ticket, ContactMessage), FormError> {
        if !self.status.accepts_submit() {
            return Err(FormError::AlreadySending);
        }
        self.fields.validate()?;
        self.generation += 1;
        self.status = FormStatus::Sending;
        self.last_error = None;
        let message = ContactMessage::new(self.fields.clone(), sent_at_ms, rng);
        Ok((
            Ticket {
                generation: self.generation,
            },
            message,
        ))
    }

    /// Applies the transport outcome. Fields are cleared on success only.
    ///
    /// Returns `false` when the ticket is stale or the form isn't sending.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<(), SubmitError>) -> bool {
        if !self.is_current(ticket) || self.status != FormStatus::Sending {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.status = FormStatus::Success;
                self.fields = FormFields::default();
            }
            Err(error) => {
                self.status = FormStatus::Error;
                self.last_error = Some(error);
            }
        }
        true
    }

    /// Returns from `Success`/`Error` to `Idle` once the result window ends.
    pub fn reset(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket)
            || !matches!(self.status, FormStatus::Success | FormStatus::Error)
        {
            return false;
        }
        self.status = FormStatus::Idle;
        true
    }

    /// Invalidates outstanding tickets, e.g. when the view is torn down.
    pub fn abandon(&mut self) {
        self.generation += 1;
        if self.status == FormStatus::Sending {
            self.status = FormStatus::Idle;
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update(Field::Name, "Ada");
        form.update(Field::Email, "ada@example.com");
        form.update(Field::Subject, "Hello");
        form.update(Field::Message, "Let's build something.");
        form
    }

    #[test]
    fn success_clears_fields() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut form = filled();
        let (ticket, message) = form.submit(1_000, &mut rng).unwrap();
        assert_eq!(form.status(), FormStatus::Sending);
        assert_eq!(message.fields.name, "Ada");
        assert!(!form.fields().is_empty());

        assert!(form.complete(ticket, Ok(())));
        assert_eq!(form.status(), FormStatus::Success);
        assert!(form.fields().is_empty());

        assert!(form.reset(ticket));
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn error_keeps_fields_and_allows_retry() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut form = filled();
        let (ticket, _) = form.submit(0, &mut rng).unwrap();
        let failure = SubmitError::Unreachable("offline".into());
        assert!(form.complete(ticket, Err(failure.clone())));
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.last_error(), Some(&failure));
        assert_eq!(form.fields().email, "ada@example.com");

        assert!(form.submit(10, &mut rng).is_ok());
        assert_eq!(form.last_error(), None);
    }

    #[test]
    fn rejects_double_submit() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut form = filled();
        form.submit(0, &mut rng).unwrap();
        assert_eq!(form.submit(1, &mut rng).unwrap_err(), FormError::AlreadySending);
    }

    #[test]
    fn validates_required_fields() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut form = filled();
        form.update(Field::Subject, "   ");
        assert_eq!(
            form.submit(0, &mut rng).unwrap_err(),
            FormError::MissingField(Field::Subject)
        );

        form.update(Field::Subject, "Hi");
        form.update(Field::Email, "not-an-email");
        assert_eq!(form.submit(0, &mut rng).unwrap_err(), FormError::InvalidEmail);
        assert_eq!(form.status(), FormStatus::Idle);
    }

    #[test]
    fn stale_ticket_is_ignored_after_abandon() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut form = filled();
        let (ticket, _) = form.submit(0, &mut rng).unwrap();
        form.abandon();

        assert!(!form.complete(ticket, Ok(())));
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.fields().name, "Ada");
    }

    #[test]
    fn message_serializes_flat() {
        let mut rng = SmallRng::seed_from_u64(42);
        let message = ContactMessage::new(filled().fields().clone(), 1_700_000_000_000, &mut rng);
        assert_eq!(message.id.timestamp_ms(), 1_700_000_000_000);

        let json: serde_json::Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();
        assert_eq!(json["subject"], "Hello");
        assert_eq!(json["sent_at_ms"], 1_700_000_000_000u64);
        assert!(json["id"].is_string());
    }
}

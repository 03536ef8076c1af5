//! Client-side contact form: validation and a simulated delivery.
//!
//! Delivery goes through [`MessageDispatcher`]. The browser build plugs in a
//! timer-backed dispatcher that acknowledges after [`SUBMIT_DELAY`]; a real
//! backend would implement the same trait.

use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use thiserror::Error;

pub const SUBMIT_DELAY: Duration = Duration::from_millis(2_000);
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const DELIVERED_NOTICE: &str = "Thank you for your message! I'll get back to you soon.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<ContactMessage, FormError> {
        let all_present = [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|value| !value.is_empty());
        if !all_present {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// A validated submission, detached from the editable form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

impl SubmitPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => SUBMIT_LABEL,
            Self::Sending => SENDING_LABEL,
        }
    }

    pub fn disabled(self) -> bool {
        matches!(self, Self::Sending)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(FormError),
    Ready(ContactMessage),
    /// A delivery is already pending.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Edit(FormField, String),
    BeginSending,
    Delivered,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFormFields,
    pub phase: SubmitPhase,
}

impl ContactForm {
    pub fn prepare(&self) -> SubmitOutcome {
        if self.phase == SubmitPhase::Sending {
            return SubmitOutcome::Ignored;
        }
        match self.fields.validate() {
            Ok(message) => SubmitOutcome::Ready(message),
            Err(error) => SubmitOutcome::Rejected(error),
        }
    }

    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => self.fields.set(field, value),
            ContactAction::BeginSending => self.phase = SubmitPhase::Sending,
            ContactAction::Delivered => {
                self.fields = ContactFormFields::default();
                self.phase = SubmitPhase::Idle;
            }
        }
    }
}

/// Hands a validated message to whatever delivers it.
///
/// `on_delivered` runs once delivery completes. Dropping the returned
/// `Pending` value cancels a delivery that has not completed yet.
pub trait MessageDispatcher {
    type Pending;

    fn dispatch(&self, message: ContactMessage, on_delivered: Box<dyn FnOnce()>) -> Self::Pending;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn filled(email: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Edit(FormField::Name, "A".to_string()));
        form.apply(ContactAction::Edit(FormField::Email, email.to_string()));
        form.apply(ContactAction::Edit(FormField::Subject, "x".to_string()));
        form.apply(ContactAction::Edit(FormField::Message, "y".to_string()));
        form
    }

    /// Holds deliveries until the test flushes them.
    #[derive(Default)]
    struct ManualDispatcher {
        queued: RefCell<Vec<(ContactMessage, Box<dyn FnOnce()>)>>,
    }

    impl ManualDispatcher {
        fn flush(&self) {
            let queued: Vec<_> = self.queued.borrow_mut().drain(..).collect();
            for (_, on_delivered) in queued {
                on_delivered();
            }
        }
    }

    impl MessageDispatcher for ManualDispatcher {
        type Pending = ();

        fn dispatch(&self, message: ContactMessage, on_delivered: Box<dyn FnOnce()>) -> Self::Pending {
            self.queued.borrow_mut().push((message, on_delivered));
        }
    }

    #[test]
    fn missing_name_is_rejected_and_form_kept() {
        let mut form = filled("a@b.com");
        form.apply(ContactAction::Edit(FormField::Name, String::new()));

        assert_eq!(form.prepare(), SubmitOutcome::Rejected(FormError::MissingFields));
        assert_eq!(form.fields.email, "a@b.com");
        assert_eq!(form.phase, SubmitPhase::Idle);
    }

    #[test]
    fn edits_land_on_the_named_field() {
        let form = filled("a@b.com");
        assert_eq!(form.fields.get(FormField::Email), "a@b.com");
        assert_eq!(form.fields.get(FormField::Subject), "x");
        assert_eq!(form.fields.get(FormField::Message), "y");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = filled("not-an-email");
        assert_eq!(form.prepare(), SubmitOutcome::Rejected(FormError::InvalidEmail));
        assert_eq!(form.fields.subject, "x");
    }

    #[test]
    fn email_shape_requires_at_and_dot_without_whitespace() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn error_messages_match_notices() {
        assert_eq!(FormError::MissingFields.to_string(), "Please fill in all fields.");
        assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn successful_submission_disables_then_clears() {
        let form = Rc::new(RefCell::new(filled("a@b.co")));
        let dispatcher = ManualDispatcher::default();

        let message = match form.borrow().prepare() {
            SubmitOutcome::Ready(message) => message,
            other => panic!("expected ready submission, got {other:?}"),
        };
        form.borrow_mut().apply(ContactAction::BeginSending);
        assert!(form.borrow().phase.disabled());
        assert_eq!(form.borrow().phase.label(), SENDING_LABEL);

        let completion = Rc::clone(&form);
        dispatcher.dispatch(
            message,
            Box::new(move || completion.borrow_mut().apply(ContactAction::Delivered)),
        );
        assert_eq!(form.borrow().prepare(), SubmitOutcome::Ignored);

        dispatcher.flush();
        let form = form.borrow();
        assert_eq!(form.phase, SubmitPhase::Idle);
        assert_eq!(form.phase.label(), SUBMIT_LABEL);
        assert_eq!(form.fields, ContactFormFields::default());
    }

    #[test]
    fn delay_is_two_seconds() {
        assert_eq!(SUBMIT_DELAY.as_millis(), 2_000);
    }
}

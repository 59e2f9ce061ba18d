//! Contact form state and the submission seam.
//!
//! Submission goes through [`ContactSubmitter`]. The only implementation
//! today is [`SimulatedSubmitter`], which waits and reports success; a real
//! endpoint plugs in behind the same trait.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::notify::{NotificationCenter, NotificationLevel};
use super::timing;

/// Submit-button markup while a submission is in flight.
pub const LOADING_LABEL: &str = r#"<span class="loading"></span> Sending..."#;

/// Banner text after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("contact endpoint rejected the message: {0}")]
    Rejected(String),
    #[error("contact endpoint unreachable: {0}")]
    Transport(String),
}

pub trait ContactSubmitter {
    fn submit(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Stand-in for the real endpoint: waits `delay_ms`, then succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay_ms: u64,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let delay_ms = self.delay_ms;
        async move {
            tracing::debug!(email = %message.email, delay_ms, "simulating contact submission");
            timing::sleep_ms(delay_ms).await;
            Ok(())
        }
        .boxed_local()
    }
}

impl<T: ContactSubmitter + ?Sized> ContactSubmitter for Rc<T> {
    fn submit(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        (**self).submit(message)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitButton {
    #[default]
    Idle,
    Sending,
}

impl SubmitButton {
    pub fn disabled(self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Markup to render inside the button; `idle_label` is its original text.
    pub fn label<'a>(self, idle_label: &'a str) -> &'a str {
        match self {
            Self::Idle => idle_label,
            Self::Sending => LOADING_LABEL,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub draft: ContactMessage,
    pub button: SubmitButton,
}

impl ContactForm {
    /// Lock the form for submission and hand out the payload. Returns `None`
    /// while a submission is already running.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.button.disabled() {
            return None;
        }
        self.button = SubmitButton::Sending;
        Some(self.draft.clone())
    }

    /// Unlock the form and report the outcome; returns the id of the raised
    /// notification. Fields are cleared only on success so a failed attempt
    /// can be retried.
    pub fn complete(
        &mut self,
        outcome: Result<(), SubmitError>,
        notifications: &mut NotificationCenter,
        success_message: &str,
    ) -> Uuid {
        self.button = SubmitButton::Idle;
        match outcome {
            Ok(()) => {
                self.draft.clear();
                notifications.push(success_message, NotificationLevel::Success)
            }
            Err(err) => {
                tracing::warn!("contact submission failed: {err}");
                notifications.push(err.to_string(), NotificationLevel::Info)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            draft: ContactMessage {
                name: "Layla".into(),
                email: "layla@example.com".into(),
                subject: "Network audit".into(),
                message: "Please call me back.".into(),
            },
            button: SubmitButton::Idle,
        }
    }

    #[test]
    fn begin_disables_and_shows_loading() {
        let mut form = filled();
        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.email, "layla@example.com");
        assert!(form.button.disabled());
        assert_eq!(form.button.label("Send Message"), LOADING_LABEL);
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn success_resets_fields_and_notifies() {
        let mut form = filled();
        let mut center = NotificationCenter::default();
        form.begin_submit().unwrap();
        let id = form.complete(Ok(()), &mut center, SUCCESS_MESSAGE);
        assert!(center.contains(id));

        assert_eq!(form.draft, ContactMessage::default());
        assert!(!form.button.disabled());
        assert_eq!(form.button.label("Send Message"), "Send Message");
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].level, NotificationLevel::Success);
        assert_eq!(center.items()[0].message, SUCCESS_MESSAGE);
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        let mut center = NotificationCenter::default();
        form.begin_submit().unwrap();
        form.complete(
            Err(SubmitError::Transport("offline".into())),
            &mut center,
            SUCCESS_MESSAGE,
        );

        assert_eq!(form.draft.name, "Layla");
        assert!(!form.button.disabled());
        assert_eq!(center.items()[0].level, NotificationLevel::Info);
    }

    #[test]
    fn simulated_submitter_waits_then_succeeds() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let submitter = SimulatedSubmitter::new(25);
        let started = Instant::now();
        let outcome = rt.block_on(submitter.submit(ContactMessage::default()));
        assert!(outcome.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(25));
    }
}

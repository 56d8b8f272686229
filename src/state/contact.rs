use std::{str::FromStr, time::Duration};

use thiserror::Error;

/// Stand-in for a real submission round trip.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// The `name` attribute of the matching form control.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl FromStr for Field {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Shown once a submission completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: &'static str,
    pub description: &'static str,
}

impl Acknowledgment {
    pub const SENT: Self = Self {
        title: "Message sent!",
        description: "Thank you for reaching out. I'll get back to you soon.",
    };
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("a message is already being sent")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn button_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => "Send Message",
            SubmitPhase::Submitting => "Sending...",
        }
    }

    pub fn update(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    pub fn submit(&mut self) -> Result<(), ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        self.phase = SubmitPhase::Submitting;
        Ok(())
    }

    /// Completes an in-flight submission: back to idle with an empty draft.
    /// Yields the acknowledgment exactly once per submission.
    pub fn finish(&mut self) -> Option<Acknowledgment> {
        if !self.is_submitting() {
            return None;
        }
        self.phase = SubmitPhase::Idle;
        self.draft = ContactDraft::default();
        Some(Acknowledgment::SENT)
    }
}

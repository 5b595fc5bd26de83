//! Contact form validation and acknowledgement.
//!
//! The form never leaves the browser: a complete submission is acknowledged
//! and cleared, an incomplete one is rejected with a blocking message and left
//! untouched for the visitor to finish.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Message shown when any required field is blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Required form fields, in the order they are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Element id of the field's control.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingField(ContactField),
}

/// Raw field values as read from the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Reject the first empty field. Whitespace-only values count as filled.
    pub fn validate(&self) -> Result<(), ContactError> {
        match ContactField::ALL.into_iter().find(|f| self.field(*f).is_empty()) {
            Some(field) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    pub fn acknowledgement(&self) -> String {
        format!(
            "Thank you, {}! Your message has been sent. I'll get back to you soon.",
            self.name
        )
    }

    /// Validate and decide what the form should do next.
    pub fn submit(&self) -> SubmitOutcome {
        match self.validate() {
            Ok(()) => SubmitOutcome::Accepted { message: self.acknowledgement() },
            Err(e) => SubmitOutcome::Rejected { message: e.to_string() },
        }
    }
}

/// Result of a submit attempt: which message to alert and whether to reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { message: String },
    Rejected { message: String },
}

impl SubmitOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Accepted { message } | Self::Rejected { message } => message,
        }
    }

    /// Only an accepted submission clears the form.
    pub fn clears_form(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

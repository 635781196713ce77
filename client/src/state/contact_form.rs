//! Contact form state.
//!
//! DESIGN
//! ======
//! The form is plain data driven by `RwSignal<ContactForm>` in the contact
//! section. Submission is split in two so the network call stays outside:
//! `begin_submit` checks completeness and yields the payload, and
//! `finish_submit` folds the outcome back in. Each notice carries a sequence
//! number so a stale auto-dismiss timer cannot clear a newer notice.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use contact::NewContactMessage;

use crate::net::api::SubmitOutcome;

pub const INCOMPLETE: &str = "Please fill out all fields";
pub const SENT: &str = "Your message has been sent successfully.";
pub const SEND_FAILED: &str = "Failed to send message. Please try again.";

/// How long a notice stays visible.
pub const NOTICE_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline status message under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitting: bool,
    pub notice: Option<Notice>,
    next_seq: u64,
}

impl ContactForm {
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Payload to send, or `None` when a submission is already in flight or a
    /// field is blank. The blank case leaves an error notice and sends nothing.
    pub fn begin_submit(&mut self) -> Option<NewContactMessage> {
        if self.submitting {
            return None;
        }
        let payload = NewContactMessage {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        };
        if payload.validate().is_err() {
            self.show(NoticeKind::Error, INCOMPLETE.to_owned());
            return None;
        }
        self.submitting = true;
        self.notice = None;
        Some(payload)
    }

    /// Apply a submission outcome. Success clears the inputs; failures keep
    /// them so the user can retry. Returns the sequence of the new notice.
    pub fn finish_submit(&mut self, outcome: &SubmitOutcome) -> u64 {
        self.submitting = false;
        match outcome {
            SubmitOutcome::Success { .. } => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.show(NoticeKind::Success, SENT.to_owned())
            }
            SubmitOutcome::ValidationError { fields } if !fields.is_empty() => {
                let text = format!("Please check: {}", fields.join(", "));
                self.show(NoticeKind::Error, text)
            }
            SubmitOutcome::ValidationError { .. } | SubmitOutcome::ServerError => {
                self.show(NoticeKind::Error, SEND_FAILED.to_owned())
            }
        }
    }

    /// Clear the notice if it is still the one identified by `seq`.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    fn show(&mut self, kind: NoticeKind, text: String) -> u64 {
        self.next_seq += 1;
        self.notice = Some(Notice { kind, text, seq: self.next_seq });
        self.next_seq
    }
}

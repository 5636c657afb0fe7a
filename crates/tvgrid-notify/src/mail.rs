//! # Mail Interface
//!
//! The single capability the observers consume. Implementations decide how
//! (and whether) a message is delivered; the engine never inspects a result.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// An outgoing mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub content: String,
}

/// Abstract mail transport.
pub trait MailSender {
    /// Hand a message to the transport. Fire and forget.
    fn send_mail(&self, message: MailMessage);
}

/// In-memory transport that keeps every message it is given.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: RefCell<Vec<MailMessage>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages sent so far, oldest first.
    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.borrow().clone()
    }

    /// Messages addressed to `to`.
    pub fn sent_to(&self, to: &str) -> Vec<MailMessage> {
        self.sent
            .borrow()
            .iter()
            .filter(|m| m.to == to)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.sent.borrow_mut().clear();
    }
}

impl MailSender for RecordingMailer {
    fn send_mail(&self, message: MailMessage) {
        self.sent.borrow_mut().push(message);
    }
}

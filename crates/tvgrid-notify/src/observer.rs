//! # Creation Observers
//!
//! Handlers notified synchronously whenever the factory creates a program.
//! Both built-in observers are stateless apart from their mail transport and
//! addresses; they return nothing and never fail.

use std::rc::Rc;

use tvgrid_core::{Grid, Program, ReviewConfig};

use crate::mail::{MailMessage, MailSender};

/// Subject of the mail sent to presenters of a new program.
pub const OPPORTUNITY_SUBJECT: &str = "Oportunidad!";

/// Subject of the sponsor escalation mail.
pub const SPONSOR_SEARCH_SUBJECT: &str = "Urgente: conseguir sponsors";

/// Reacts to a newly created program.
pub trait CreationObserver {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Called once per created program, before the program is returned to
    /// the code that asked for it. `grid` is the grid the program is about
    /// to join.
    fn on_created(&self, program: &Program, grid: &Grid);
}

// ---------------------------------------------------------------------------
// NotifyPresenters
// ---------------------------------------------------------------------------

/// Mails every presenter of a new program, one message per mail address.
pub struct NotifyPresenters {
    mailer: Rc<dyn MailSender>,
    sender: String,
}

impl NotifyPresenters {
    pub fn new(mailer: Rc<dyn MailSender>, sender: impl Into<String>) -> Self {
        Self {
            mailer,
            sender: sender.into(),
        }
    }

    pub fn from_config(mailer: Rc<dyn MailSender>, config: &ReviewConfig) -> Self {
        Self::new(mailer, config.mail_sender.clone())
    }
}

impl CreationObserver for NotifyPresenters {
    fn name(&self) -> &'static str {
        "notify_presenters"
    }

    fn on_created(&self, program: &Program, _grid: &Grid) {
        for mail in program.presenter_mails() {
            tracing::debug!(program = %program.id(), to = mail, "sending opportunity mail");
            self.mailer.send_mail(MailMessage {
                from: self.sender.clone(),
                to: mail.to_string(),
                subject: OPPORTUNITY_SUBJECT.to_string(),
                content: format!(
                    "Fuiste seleccionado para conducir \"{}\"! Ponete en contacto con la gerencia.",
                    program.title
                ),
            });
        }
    }
}

// ---------------------------------------------------------------------------
// EscalateSponsorSearch
// ---------------------------------------------------------------------------

/// Asks for urgent sponsor acquisition when a new program is expensive.
pub struct EscalateSponsorSearch {
    mailer: Rc<dyn MailSender>,
    sender: String,
    address: String,
    threshold: u64,
}

impl EscalateSponsorSearch {
    pub fn new(
        mailer: Rc<dyn MailSender>,
        sender: impl Into<String>,
        address: impl Into<String>,
        threshold: u64,
    ) -> Self {
        Self {
            mailer,
            sender: sender.into(),
            address: address.into(),
            threshold,
        }
    }

    pub fn from_config(mailer: Rc<dyn MailSender>, config: &ReviewConfig) -> Self {
        Self::new(
            mailer,
            config.mail_sender.clone(),
            config.escalation_address.clone(),
            config.escalation_threshold,
        )
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }
}

impl CreationObserver for EscalateSponsorSearch {
    fn name(&self) -> &'static str {
        "escalate_sponsor_search"
    }

    fn on_created(&self, program: &Program, _grid: &Grid) {
        if program.budget <= self.threshold {
            return;
        }
        tracing::debug!(
            program = %program.id(),
            budget = program.budget,
            threshold = self.threshold,
            "escalating sponsor search"
        );
        self.mailer.send_mail(MailMessage {
            from: self.sender.clone(),
            to: self.address.clone(),
            subject: SPONSOR_SEARCH_SUBJECT.to_string(),
            content: format!(
                "Se necesitan sponsors urgentemente para \"{}\": el presupuesto es de ${}.",
                program.title, program.budget
            ),
        });
    }
}

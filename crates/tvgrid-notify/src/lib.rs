//! # tvgrid-notify — Program Creation and Notification
//!
//! Every program created while revising a grid goes through the
//! `ProgramFactory`. The factory owns a `NotificationRegistry` injected at
//! construction time and calls each registered `CreationObserver`
//! synchronously, in registration order, before handing the new program to
//! its caller. There is no process-wide factory and no global observer list.
//!
//! ## Observers
//!
//! - **NotifyPresenters** (`observer.rs`): mails every presenter of the new
//!   program about the opportunity.
//! - **EscalateSponsorSearch** (`observer.rs`): mails the escalation address
//!   when the new program's budget exceeds the configured threshold.
//!
//! ## Mail
//!
//! Observers only see the `MailSender` trait (`mail.rs`). Delivery, retries,
//! and failures belong to the transport and are invisible here.

pub mod factory;
pub mod mail;
pub mod observer;

pub use factory::{NotificationRegistry, ProgramFactory};
pub use mail::{MailMessage, MailSender, RecordingMailer};
pub use observer::{CreationObserver, EscalateSponsorSearch, NotifyPresenters};

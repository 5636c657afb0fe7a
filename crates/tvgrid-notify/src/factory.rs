//! # Program Factory
//!
//! The notifying creation path. `ProgramFactory::create` builds a program from
//! a draft and runs every registered observer before returning it, so no
//! caller can use a new program that an interested observer has not seen.

use std::rc::Rc;

use tvgrid_core::{Grid, ProgramDraft, ProgramHandle, ReviewConfig};

use crate::mail::MailSender;
use crate::observer::{CreationObserver, EscalateSponsorSearch, NotifyPresenters};

/// Ordered list of creation observers.
#[derive(Default)]
pub struct NotificationRegistry {
    observers: Vec<Box<dyn CreationObserver>>,
}

impl NotificationRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Presenter notification followed by sponsor escalation, both mailing
    /// through `mailer`.
    pub fn standard(mailer: Rc<dyn MailSender>, config: &ReviewConfig) -> Self {
        let mut registry = Self::new();
        registry.register(NotifyPresenters::from_config(mailer.clone(), config));
        registry.register(EscalateSponsorSearch::from_config(mailer, config));
        registry
    }

    /// Append an observer. Observers run in registration order.
    pub fn register(&mut self, observer: impl CreationObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Observer names in registration order.
    pub fn observer_names(&self) -> Vec<&'static str> {
        self.observers.iter().map(|o| o.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for NotificationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationRegistry")
            .field("observers", &self.observer_names())
            .finish()
    }
}

/// Creates programs and notifies the registry's observers.
#[derive(Debug, Default)]
pub struct ProgramFactory {
    registry: NotificationRegistry,
}

impl ProgramFactory {
    pub fn new(registry: NotificationRegistry) -> Self {
        Self { registry }
    }

    /// A factory whose creations notify nobody.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &NotificationRegistry {
        &self.registry
    }

    /// Build a program and run every observer on it, in order, before
    /// returning. The program is not added to `grid`; that is the caller's move.
    pub fn create(&self, draft: ProgramDraft, grid: &Grid) -> ProgramHandle {
        let program = draft.build();
        tracing::debug!(
            program = %program.id(),
            title = %program.title,
            observers = self.registry.len(),
            "program created"
        );
        for observer in &self.registry.observers {
            observer.on_created(&program, grid);
        }
        ProgramHandle::new(program)
    }
}

//! Hover permalink affordance.
//!
//! Entering a heading appends the affordance immediately but only marks it
//! visible after a delay, so quickly sweeping the pointer across headings
//! does not flicker. Every reveal is tied to a ticket; leaving a heading
//! cancels the outstanding ticket so a late timer cannot resurrect anything.

#[cfg(test)]
#[path = "permalink_test.rs"]
mod permalink_test;

use crate::config::PermalinkConfig;
use crate::gateway::DocumentGateway;

/// A pending reveal the host must schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    pub ticket: u64,
    pub delay_ms: u32,
}

pub struct PermalinkUi {
    config: PermalinkConfig,
    selector: String,
    next_ticket: u64,
    pending: Option<u64>,
}

impl PermalinkUi {
    #[must_use]
    pub fn new(config: &PermalinkConfig) -> Self {
        Self { selector: format!(".{}", config.class), config: config.clone(), next_ticket: 0, pending: None }
    }

    /// Pointer entered `heading`: attach the affordance and request a reveal.
    pub fn on_enter<D: DocumentGateway>(&mut self, doc: &mut D, heading: &D::Node) -> RevealTicket {
        doc.append_span(heading, &self.config.class, &self.config.label);
        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        RevealTicket { ticket: self.next_ticket, delay_ms: self.config.delay_ms }
    }

    /// The reveal delay for `ticket` elapsed. Returns whether anything was
    /// revealed.
    pub fn on_reveal<D: DocumentGateway>(&mut self, doc: &mut D, ticket: u64) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        doc.set_class_all(&self.selector, &self.config.appear_class, true);
        true
    }

    /// Pointer left a heading: drop every affordance and cancel the reveal.
    pub fn on_leave<D: DocumentGateway>(&mut self, doc: &mut D) {
        self.pending = None;
        doc.remove_all(&self.selector);
    }
}

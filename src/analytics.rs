//! Optional analytics collaborator.
//!
//! Interaction reporting goes through a trait so the sink can be swapped
//! out; the default sink writes structured events through `tracing`.

use tracing::info;

/// A reported interaction: event name plus a structured payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    /// Event name, e.g. `faq_interaction`.
    pub name: &'static str,
    /// Event category grouping.
    pub category: &'static str,
    /// Free-form label; the question text for FAQ events.
    pub label: String,
    /// Numeric payload; 1 for open, 0 for close.
    pub value: u64,
}

/// Build the event for an FAQ entry being opened or closed.
pub fn faq_interaction(question: &str, opened: bool) -> InteractionEvent {
    InteractionEvent {
        name: "faq_interaction",
        category: "FAQ",
        label: question.to_string(),
        value: if opened { 1 } else { 0 },
    }
}

/// Event-reporting collaborator. Implementations must be cheap; they run
/// inline in the event loop.
pub trait AnalyticsSink {
    /// Deliver one event.
    fn report(&mut self, event: &InteractionEvent);
}

/// Default sink: structured log lines via `tracing`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn report(&mut self, event: &InteractionEvent) {
        info!(
            name = event.name,
            category = event.category,
            label = %event.label,
            value = event.value,
            "analytics event"
        );
    }
}

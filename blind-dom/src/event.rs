use crate::document::{Document, NodeId};

/// Events delivered through [`Document::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Primary-button activation of an element.
    Click { target: NodeId },
}

/// Discriminant used when subscribing to events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
        }
    }

    pub fn target(&self) -> NodeId {
        match self {
            Event::Click { target } => *target,
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was acted on, keep bubbling.
    Handled,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled (acted on or consumed).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Something that reacts to events on a node.
///
/// Listeners get mutable access to the whole document while they run, so a
/// listener on one node may restyle or restructure others.
pub trait Listener {
    fn handle(&mut self, doc: &mut Document, event: &Event) -> EventResult;
}

impl<F> Listener for F
where
    F: FnMut(&mut Document, &Event) -> EventResult,
{
    fn handle(&mut self, doc: &mut Document, event: &Event) -> EventResult {
        self(doc, event)
    }
}

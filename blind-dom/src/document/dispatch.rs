use super::{Document, NodeId, Registration};
use crate::error::DomError;
use crate::event::{Event, EventKind, EventResult, Listener};

impl Document {
    /// Subscribe `listener` to events of `kind` reaching `id`.
    pub fn add_event_listener(
        &mut self,
        id: NodeId,
        kind: EventKind,
        listener: impl Listener + 'static,
    ) -> Result<(), DomError> {
        self.node_mut(id)?.listeners.push(Registration {
            kind,
            listener: Box::new(listener),
        });
        Ok(())
    }

    /// Deliver `event` to its target, then bubble it up through the target's
    /// ancestors until a listener consumes it.
    ///
    /// The propagation path is fixed before any listener runs.
    pub fn dispatch(&mut self, event: &Event) -> Result<EventResult, DomError> {
        let target = event.target();
        self.node(target)?;

        let path: Vec<NodeId> = std::iter::once(target)
            .chain(self.ancestors(target))
            .collect();
        log::trace!("[dispatch] {:?} path={:?}", event.kind(), path);

        let mut outcome = EventResult::Ignored;
        for id in path {
            let result = self.invoke(id, event);
            if result == EventResult::Consumed {
                log::debug!("[dispatch] {:?} consumed at {id}", event.kind());
                return Ok(EventResult::Consumed);
            }
            if result.is_handled() {
                outcome = EventResult::Handled;
            }
        }
        Ok(outcome)
    }

    /// Activate `id` as if clicked.
    pub fn click(&mut self, id: NodeId) -> Result<EventResult, DomError> {
        self.dispatch(&Event::Click { target: id })
    }

    fn invoke(&mut self, id: NodeId, event: &Event) -> EventResult {
        // Listeners run detached from the node so they can borrow the document.
        let mut registrations = match self.nodes.get_mut(&id) {
            Some(node) if !node.listeners.is_empty() => std::mem::take(&mut node.listeners),
            _ => return EventResult::Ignored,
        };

        let mut outcome = EventResult::Ignored;
        for registration in registrations
            .iter_mut()
            .filter(|r| r.kind == event.kind())
        {
            let result = registration.listener.handle(self, event);
            if result.is_handled() {
                outcome = result;
            }
            if result == EventResult::Consumed {
                break;
            }
        }

        match self.nodes.get_mut(&id) {
            Some(node) => {
                // Keep anything registered while the listeners ran.
                registrations.append(&mut node.listeners);
                node.listeners = registrations;
            }
            None => log::trace!(
                "[dispatch] {id} removed by its own listener, dropping {} listeners",
                registrations.len()
            ),
        }
        outcome
    }
}

use crate::host::{ClickHandler, Host};
use crate::options::BlindOptions;
use crate::state::BlindState;

/// Click handler that flips a content wrapper between closed and open.
///
/// Holds the wrapper handle and the current state; each click removes the
/// current state's marker and adds the other one, so exactly one marker is
/// present afterwards.
#[derive(Debug, Clone)]
pub struct Toggle<N> {
    content: N,
    state: BlindState,
    options: BlindOptions,
}

impl<N: Copy> Toggle<N> {
    pub fn new(content: N, options: BlindOptions) -> Self {
        Self {
            content,
            state: BlindState::Closed,
            options,
        }
    }

    /// Flip the state and update the wrapper's markers.
    pub fn toggle<H: Host<Node = N> + ?Sized>(&mut self, host: &mut H) -> BlindState {
        let next = self.state.toggled();
        host.remove_class(self.content, &self.state.class(&self.options));
        host.add_class(self.content, &next.class(&self.options));
        log::trace!("[blind] {:?} -> {:?}", self.state, next);
        self.state = next;
        next
    }
}

impl<H: Host + ?Sized> ClickHandler<H> for Toggle<H::Node> {
    fn on_click(&mut self, host: &mut H) {
        self.toggle(host);
    }
}

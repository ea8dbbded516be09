//! The capabilities a blind needs from the element tree it lives in.

use std::fmt::Debug;

use blind_dom::{Document, Event, EventKind, EventResult, Listener, NodeId, Value};

/// Reacts to clicks on a node of host `H`.
pub trait ClickHandler<H: Host + ?Sized> {
    /// Called once per click, with mutable access to the host.
    fn on_click(&mut self, host: &mut H);
}

/// An element tree that can host a blind.
///
/// Operations take nodes the caller has already validated (or just
/// created), so they do not report errors.
pub trait Host {
    /// Handle to a node. Equality is node identity.
    type Node: Copy + Eq + Debug + 'static;

    /// Untyped value as received from outside callers.
    type Value;

    /// The element a value refers to, if any. This is the only runtime
    /// type check; everything past it works on typed nodes.
    fn as_element(&self, value: &Self::Value) -> Option<Self::Node>;

    /// Create a detached element with the given tag.
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Add a marker class to `node`.
    fn add_class(&mut self, node: Self::Node, class: &str);

    /// Remove a marker class from `node`, if present.
    fn remove_class(&mut self, node: Self::Node, class: &str);

    /// Whether `node` carries `class`.
    fn has_class(&self, node: Self::Node, class: &str) -> bool;

    /// Current value of an attribute, `None` if unset.
    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    /// Replace the children of `node` with `text`.
    fn set_text(&mut self, node: Self::Node, text: &str);

    /// Append `child` to `parent`, moving it out of its current parent.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Children of `node` in order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Run `handler` each time `node` (or a descendant) is clicked.
    fn on_click(&mut self, node: Self::Node, handler: Box<dyn ClickHandler<Self>>);
}

/// Adapts a [`ClickHandler`] to the document's listener interface.
struct ClickListener(Box<dyn ClickHandler<Document>>);

impl Listener for ClickListener {
    fn handle(&mut self, doc: &mut Document, _event: &Event) -> EventResult {
        self.0.on_click(doc);
        EventResult::Handled
    }
}

impl Host for Document {
    type Node = NodeId;
    type Value = Value;

    fn as_element(&self, value: &Value) -> Option<NodeId> {
        Document::as_element(self, value)
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        Document::create_element(self, tag)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Err(err) = Document::add_class(self, node, class) {
            log::warn!("[blind] add_class({class}) on {node}: {err}");
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Err(err) = Document::remove_class(self, node, class) {
            log::warn!("[blind] remove_class({class}) on {node}: {err}");
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        Document::has_class(self, node, class)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        Document::attribute(self, node, name).map(str::to_string)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Err(err) = self.set_text_content(node, text) {
            log::warn!("[blind] set_text on {node}: {err}");
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Err(err) = Document::append_child(self, parent, child) {
            log::warn!("[blind] append_child: {err}");
        }
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        Document::children(self, node).to_vec()
    }

    fn on_click(&mut self, node: NodeId, handler: Box<dyn ClickHandler<Self>>) {
        if let Err(err) = self.add_event_listener(node, EventKind::Click, ClickListener(handler)) {
            log::warn!("[blind] on_click on {node}: {err}");
        }
    }
}

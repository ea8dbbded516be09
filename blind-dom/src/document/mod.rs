//! The document: an arena owning every node of an element tree.

mod dispatch;
mod html;
mod query;
mod tree;

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::element::{count_elements, ClassList, Content, Element};
use crate::error::DomError;
use crate::event::{EventKind, Listener};
use crate::value::Value;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a node. Ids are never reused, so a handle to a removed node
/// stays invalid instead of aliasing a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn generate() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) enum NodeData {
    Element {
        tag: String,
        classes: ClassList,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

pub(crate) struct Registration {
    pub(crate) kind: EventKind,
    pub(crate) listener: Box<dyn Listener>,
}

pub(crate) struct Node {
    pub(crate) data: NodeData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) listeners: Vec<Registration>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Node");
        match &self.data {
            NodeData::Element {
                tag,
                classes,
                attributes,
            } => s
                .field("tag", tag)
                .field("classes", &classes.to_string())
                .field("attributes", attributes),
            NodeData::Text(data) => s.field("text", data),
        };
        s.field("parent", &self.parent)
            .field("children", &self.children)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Owns all nodes of one tree, attached or not.
///
/// Nodes are addressed through [`NodeId`]s. Nothing is freed implicitly:
/// a detached subtree stays alive until [`Document::remove`] is called.
#[derive(Debug, Default)]
pub struct Document {
    pub(crate) nodes: HashMap<NodeId, Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn insert(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::generate();
        self.nodes.insert(id, Node::new(data));
        id
    }

    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.insert(NodeData::Element {
            tag: tag.into(),
            classes: ClassList::new(),
            attributes: Vec::new(),
        })
    }

    pub fn create_text(&mut self, data: impl Into<String>) -> NodeId {
        self.insert(NodeData::Text(data.into()))
    }

    /// Create nodes for a builder tree and return the (detached) root.
    pub fn mount(&mut self, element: Element) -> NodeId {
        log::trace!("[mount] {} elements under <{}>", count_elements(&element), element.tag);
        self.mount_element(element)
    }

    fn mount_element(&mut self, element: Element) -> NodeId {
        let id = self.insert(NodeData::Element {
            tag: element.tag,
            classes: element.classes,
            attributes: element.attributes,
        });

        let children = match element.content {
            Content::None => Vec::new(),
            Content::Text(text) if text.is_empty() => Vec::new(),
            Content::Text(text) => vec![self.create_text(text)],
            Content::Children(children) => children
                .into_iter()
                .map(|child| self.mount_element(child))
                .collect(),
        };

        for &child in &children {
            if let Some(node) = self.nodes.get_mut(&child) {
                node.parent = Some(id);
            }
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.children = children;
        }
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(&id).ok_or(DomError::NodeNotFound(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(&id).ok_or(DomError::NodeNotFound(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(
            self.nodes.get(&id).map(|n| &n.data),
            Some(NodeData::Element { .. })
        )
    }

    /// The node a value refers to, if it is a live element of this document.
    pub fn as_element(&self, value: &Value) -> Option<NodeId> {
        match value {
            Value::Node(id) if self.is_element(*id) => Some(*id),
            _ => {
                log::trace!("[as_element] rejected {} value", value.type_name());
                None
            }
        }
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(&id)?.data {
            NodeData::Element { tag, .. } => Some(tag),
            NodeData::Text(_) => None,
        }
    }

    // Classes
    pub fn class_list(&self, id: NodeId) -> Option<&ClassList> {
        match &self.nodes.get(&id)?.data {
            NodeData::Element { classes, .. } => Some(classes),
            NodeData::Text(_) => None,
        }
    }

    pub fn class_list_mut(&mut self, id: NodeId) -> Result<&mut ClassList, DomError> {
        match &mut self.node_mut(id)?.data {
            NodeData::Element { classes, .. } => Ok(classes),
            NodeData::Text(_) => Err(DomError::NotAnElement(id)),
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.class_list(id).is_some_and(|c| c.contains(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<bool, DomError> {
        self.class_list_mut(id)?.add(class)
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<bool, DomError> {
        self.class_list_mut(id)?.remove(class)
    }

    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> Result<bool, DomError> {
        self.class_list_mut(id)?.toggle(class)
    }

    // Attributes
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        let NodeData::Element { attributes, .. } = &self.nodes.get(&id)?.data else {
            return None;
        };
        let name = name.to_ascii_lowercase();
        attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    fn attributes_mut(&mut self, id: NodeId) -> Result<&mut Vec<(String, String)>, DomError> {
        match &mut self.node_mut(id)?.data {
            NodeData::Element { attributes, .. } => Ok(attributes),
            NodeData::Text(_) => Err(DomError::NotAnElement(id)),
        }
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        let attributes = self.attributes_mut(id)?;
        match attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => attributes.push((name, value)),
        }
        Ok(())
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<Option<String>, DomError> {
        let name = name.to_ascii_lowercase();
        let attributes = self.attributes_mut(id)?;
        let pos = attributes.iter().position(|(n, _)| *n == name);
        Ok(pos.map(|i| attributes.remove(i).1))
    }

    // Text
    /// Concatenated text of all descendant text nodes, in document order.
    /// For a text node this is its own data.
    pub fn text_content(&self, id: NodeId) -> Option<String> {
        let node = self.nodes.get(&id)?;
        if let NodeData::Text(data) = &node.data {
            return Some(data.clone());
        }
        let mut out = String::new();
        for child in self.descendants(id) {
            if let Some(NodeData::Text(data)) = self.nodes.get(&child).map(|n| &n.data) {
                out.push_str(data);
            }
        }
        Some(out)
    }

    /// Replace all children of `id` with a single text node. An empty
    /// `text` leaves the element without children.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        if let NodeData::Text(data) = &mut self.node_mut(id)?.data {
            *data = text.to_string();
            return Ok(());
        }

        let old = std::mem::take(&mut self.node_mut(id)?.children);
        for child in old {
            if let Some(node) = self.nodes.get_mut(&child) {
                node.parent = None;
            }
            self.remove(child)?;
        }

        if !text.is_empty() {
            let text = self.create_text(text);
            self.append_child(id, text)?;
        }
        Ok(())
    }
}

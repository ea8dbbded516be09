use super::{Document, NodeData, NodeId};
use crate::error::DomError;

impl Document {
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id)?.parent
    }

    /// Children of `id` in order. Empty for text nodes and unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.nodes.get(&id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).get(index).copied()
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&p| self.parent(p))
    }

    /// True if `ancestor` is `id` or one of its ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        ancestor == id || self.ancestors(id).any(|a| a == ancestor)
    }

    /// All descendants of `root` in document order, excluding `root`.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    /// Append `child` as the last child of `parent`, first detaching it
    /// from wherever it currently lives.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !matches!(self.node(parent)?.data, NodeData::Element { .. }) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        self.node(child)?;
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child)?;
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        log::trace!("[tree] appended {child} to {parent}");
        Ok(())
    }

    /// Unlink `id` from its parent. The node and its subtree stay alive.
    pub fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        let Some(parent) = self.node_mut(id)?.parent.take() else {
            return Ok(());
        };
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|&c| c != id);
        }
        Ok(())
    }

    /// Detach `id` and free it together with its whole subtree, including
    /// any registered listeners.
    pub fn remove(&mut self, id: NodeId) -> Result<(), DomError> {
        self.detach(id)?;
        let mut freed = self.descendants(id);
        freed.push(id);
        for node in &freed {
            self.nodes.remove(node);
        }
        log::trace!("[tree] freed {} nodes under {id}", freed.len());
        Ok(())
    }
}

use super::{Document, NodeId};

impl Document {
    /// First descendant of `root` (in document order) carrying `class`.
    pub fn query_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.has_class(id, class))
    }

    /// Every descendant of `root` carrying `class`, in document order.
    pub fn query_class_all(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }
}

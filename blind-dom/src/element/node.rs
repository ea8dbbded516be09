use super::{ClassList, Content};

/// Declarative description of an element subtree.
///
/// An `Element` is plain data. It becomes part of a document, with a
/// [`NodeId`](crate::NodeId) per node, once passed to
/// [`Document::mount`](crate::Document::mount).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub tag: String,

    // Markers
    pub classes: ClassList,
    pub attributes: Vec<(String, String)>,

    // Content
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: "div".into(),
            classes: ClassList::new(),
            attributes: Vec::new(),
            content: Content::None,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    pub fn p() -> Self {
        Self::new("p")
    }

    // Attributes
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.attr("title", title)
    }

    /// Set an attribute, replacing any previous value for the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    // Markers
    /// Add classes from a space-separated list, like the `class` attribute.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.extend(classes.split_whitespace());
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}

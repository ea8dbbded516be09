mod class_list;
mod content;
mod node;

pub use class_list::ClassList;
pub use content::Content;
pub use node::Element;

/// Count the elements in a builder tree, including `root`.
pub fn count_elements(root: &Element) -> usize {
    match &root.content {
        Content::Children(children) => 1 + children.iter().map(count_elements).sum::<usize>(),
        _ => 1,
    }
}

use std::fmt::Write;

use super::{Document, NodeData, NodeId};

fn escape_text(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

impl Document {
    /// Serialize `id` and its subtree as HTML-like markup, for debugging.
    pub fn outer_html(&self, id: NodeId) -> Option<String> {
        let mut out = String::new();
        self.write_html(id, &mut out)?;
        Some(out)
    }

    fn write_html(&self, id: NodeId, out: &mut String) -> Option<()> {
        let node = self.nodes.get(&id)?;
        match &node.data {
            NodeData::Text(data) => escape_text(data, out),
            NodeData::Element {
                tag,
                classes,
                attributes,
            } => {
                let _ = write!(out, "<{tag}");
                if !classes.is_empty() {
                    out.push_str(" class=\"");
                    escape_attr(&classes.to_string(), out);
                    out.push('"');
                }
                for (name, value) in attributes {
                    let _ = write!(out, " {name}=\"");
                    escape_attr(value, out);
                    out.push('"');
                }
                out.push('>');
                for &child in &node.children {
                    self.write_html(child, out)?;
                }
                let _ = write!(out, "</{tag}>");
            }
        }
        Some(())
    }
}

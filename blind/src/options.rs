//! Blind configuration.

use crate::error::BlindError;

fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_ascii_whitespace())
}

/// Per-blind configuration.
///
/// Marker classes follow BEM naming derived from `block`: the container
/// carries `block`, the title bar `block__title`, the content wrapper
/// `block__content` plus one of `block__content--closed` /
/// `block__content--open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlindOptions {
    /// BEM block name for the marker classes.
    pub block: String,

    /// Tag used for the three created nodes.
    pub tag: String,
}

impl Default for BlindOptions {
    fn default() -> Self {
        Self {
            block: "blind".into(),
            tag: "div".into(),
        }
    }
}

impl BlindOptions {
    /// Create options with the given block name.
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            ..Default::default()
        }
    }

    /// Set the tag for created nodes.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Check that `block` and `tag` are usable as class and tag names.
    pub fn validate(&self) -> Result<(), BlindError> {
        if !is_token(&self.block) {
            return Err(BlindError::InvalidOptions(format!("block {:?}", self.block)));
        }
        if !is_token(&self.tag) {
            return Err(BlindError::InvalidOptions(format!("tag {:?}", self.tag)));
        }
        Ok(())
    }

    pub fn container_class(&self) -> &str {
        &self.block
    }

    pub fn title_class(&self) -> String {
        format!("{}__title", self.block)
    }

    pub fn content_class(&self) -> String {
        format!("{}__content", self.block)
    }
}

use thiserror::Error;

/// Errors that can occur when building a blind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlindError {
    /// The value passed in is not an element.
    #[error("an element is required")]
    InvalidArgument,

    /// The options would produce malformed marker classes or tags.
    #[error("invalid blind options: {0}")]
    InvalidOptions(String),
}

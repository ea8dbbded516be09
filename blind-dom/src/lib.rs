pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod value;

pub use document::{Document, NodeId};
pub use element::{ClassList, Content, Element};
pub use error::DomError;
pub use event::{Event, EventKind, EventResult, Listener};
pub use value::Value;

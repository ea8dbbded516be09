//! Blind: a collapsible panel wrapping an existing element.
//!
//! [`construct`] takes an element, moves it into a new container with a
//! clickable title bar, and returns the container. Clicking the title bar
//! flips the content between the closed and open states.

mod error;
mod factory;
mod host;
mod options;
mod state;
mod toggle;

pub use error::BlindError;
pub use factory::{construct, construct_with, state};
pub use host::{ClickHandler, Host};
pub use options::BlindOptions;
pub use state::BlindState;
pub use toggle::Toggle;

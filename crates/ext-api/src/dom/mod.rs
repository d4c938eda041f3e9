//! In-memory page model shared between the viewer host and extensions.

mod document;
mod element;
mod node;
mod serialize;

pub use document::{Document, ElementView};
pub use element::Element;
pub use ego_tree::NodeId;

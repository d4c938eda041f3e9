//! Shared extension interfaces and page document model for the CompteQC
//! ledger viewer.

pub mod context;
pub mod descriptors;
pub mod dom;
pub mod error;
pub mod host;
pub mod registry;

pub use context::PageContext;
pub use descriptors::ExtensionDescriptor;
pub use dom::{Document, Element, ElementView, NodeId};
pub use error::ExtensionCatalogError;
pub use host::ViewerHost;
pub use registry::{ExtensionCatalog, ExtensionModule, RegisteredModule};

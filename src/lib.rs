//! Quebec visual theme for the CompteQC ledger viewer.
//!
//! The crate ships a single extension, [`ThemeQcExtension`], which injects
//! the Quebec stylesheet into the page `head` and a brand strip after the
//! page header. Hosts install it with [`register`] and drive it through the
//! lifecycle hooks of [`ViewerHost`].

pub mod brand;
pub mod theme;

pub use cqc_ext_api::{
    Document, Element, ElementView, ExtensionCatalog, ExtensionCatalogError, ExtensionDescriptor,
    ExtensionModule, NodeId, PageContext, RegisteredModule, ViewerHost,
};
pub use theme::{
    BRAND_ELEMENT_ID, STYLE_ELEMENT_ID, THEME_CSS, THEME_DESCRIPTOR, ThemeQcExtension,
};

/// Install the Quebec theme into an extension catalog.
pub fn register(catalog: &mut ExtensionCatalog) -> Result<(), ExtensionCatalogError> {
    catalog.register_module(ThemeQcExtension::new())
}

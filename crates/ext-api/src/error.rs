use thiserror::Error;

/// Errors that can occur when mutating the [`ExtensionCatalog`](crate::ExtensionCatalog).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtensionCatalogError {
    /// An extension attempted to register an identifier that already exists in the catalog.
    #[error("extension id '{id}' is already registered")]
    DuplicateId { id: &'static str },
}

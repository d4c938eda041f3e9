use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::descriptors::ExtensionDescriptor;
use crate::error::ExtensionCatalogError;

use super::{ExtensionModule, RegisteredModule};

/// Catalog of all extensions known to the viewer.
///
/// Entries keep their registration order, which is also the order the host
/// dispatches lifecycle hooks in.
#[derive(Clone)]
pub struct ExtensionCatalog {
    modules: IndexMap<&'static str, RegisteredModule>,
}

impl ExtensionCatalog {
    /// Create an empty catalog without any modules registered.
    pub fn new() -> Self {
        Self {
            modules: IndexMap::new(),
        }
    }

    /// Register a module implementation under its declared identifier.
    pub fn register_module<M>(&mut self, module: M) -> Result<(), ExtensionCatalogError>
    where
        M: ExtensionModule + 'static,
    {
        self.register_arc(Arc::new(module))
    }

    /// Register an already shared module implementation.
    pub fn register_arc(
        &mut self,
        module: Arc<dyn ExtensionModule>,
    ) -> Result<(), ExtensionCatalogError> {
        let descriptor = module.descriptor();
        if self.modules.contains_key(descriptor.id) {
            return Err(ExtensionCatalogError::DuplicateId { id: descriptor.id });
        }
        debug!(id = descriptor.id, name = descriptor.name, "registered extension");
        self.modules
            .insert(descriptor.id, RegisteredModule::new(descriptor, module));
        Ok(())
    }

    /// Lookup a registered module implementation by identifier.
    pub fn module_by_id(&self, id: &str) -> Option<Arc<dyn ExtensionModule>> {
        self.modules.get(id).map(|module| module.module())
    }

    /// Iterate over all registered modules in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &RegisteredModule> {
        self.modules.values()
    }

    /// Iterate over registered module descriptors.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static ExtensionDescriptor> + '_ {
        self.modules.values().map(|module| module.descriptor())
    }

    /// Remove the module registered under the provided identifier.
    pub fn remove_by_id(&mut self, id: &str) -> Option<RegisteredModule> {
        self.modules.shift_remove(id)
    }

    /// Return the number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` when no modules have been registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Returns `true` if a module has been registered under the identifier.
    pub fn contains_id(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }
}

impl Default for ExtensionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

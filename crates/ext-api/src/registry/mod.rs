mod catalog;
mod module;
mod registered_module;

pub use catalog::ExtensionCatalog;
pub use module::ExtensionModule;
pub use registered_module::RegisteredModule;

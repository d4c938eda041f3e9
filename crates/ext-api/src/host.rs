use tracing::debug;

use crate::context::PageContext;
use crate::dom::Document;
use crate::registry::ExtensionCatalog;

/// Drives registered extensions through the page lifecycle.
///
/// The host owns the page [`Document`] and the [`ExtensionCatalog`]. It keeps
/// a single document for its whole lifetime: in-app navigation re-renders the
/// page body but never tears down `head` or the chrome around it, so nodes an
/// extension injects there survive navigation.
pub struct ViewerHost {
    catalog: ExtensionCatalog,
    document: Document,
    route: String,
    initialized: bool,
}

impl ViewerHost {
    /// Create a host over a fresh document, showing the root route.
    #[must_use]
    pub fn new(catalog: ExtensionCatalog) -> Self {
        Self {
            catalog,
            document: Document::new(),
            route: String::from("/"),
            initialized: false,
        }
    }

    /// The page document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access to the page document, e.g. for the host's own chrome.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Route of the page currently shown.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The extension catalog the host dispatches to.
    #[must_use]
    pub fn catalog(&self) -> &ExtensionCatalog {
        &self.catalog
    }

    /// Dispatch `init` to every registered page module, in registration order.
    ///
    /// Runs at most once per host; later calls are no-ops. Modules whose
    /// descriptor declares no page module are skipped.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        debug!("initializing extension page modules");
        let Self {
            catalog,
            document,
            route,
            ..
        } = self;
        for module in catalog.modules() {
            if !module.descriptor().has_page_module {
                continue;
            }
            module.module().init(PageContext::new(document, route));
        }
    }

    /// Show `route` and dispatch `on_page_load` in registration order.
    pub fn navigate(&mut self, route: impl Into<String>) {
        self.route = route.into();
        debug!(route = %self.route, "page load");
        let Self {
            catalog,
            document,
            route,
            ..
        } = self;
        for module in catalog.modules() {
            if !module.descriptor().has_page_module {
                continue;
            }
            module.module().on_page_load(PageContext::new(document, route));
        }
    }
}

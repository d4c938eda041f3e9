use crate::context::PageContext;
use crate::descriptors::ExtensionDescriptor;

/// A pluggable viewer component driven by the page lifecycle.
///
/// Implementations hold whatever state they need behind `&self`; the host
/// keeps one shared instance per registration and dispatches both hooks from
/// its render loop. Hooks receive the live page through
/// [`PageContext`](crate::PageContext) and mutate it in place.
pub trait ExtensionModule: Send + Sync {
    /// Static descriptor advertising extension metadata.
    fn descriptor(&self) -> &'static ExtensionDescriptor;

    /// Identifier the extension is registered under.
    fn id(&self) -> &'static str {
        self.descriptor().id
    }

    /// Called once when the host loads the extension's page module.
    fn init(&self, context: PageContext<'_>);

    /// Called after every in-app page navigation.
    fn on_page_load(&self, context: PageContext<'_>);
}

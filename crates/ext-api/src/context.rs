use crate::dom::Document;

/// Shared inputs provided to extensions when a page lifecycle hook fires.
///
/// Wrapping the dispatch state in a context struct keeps the hook signatures
/// stable for extension authors when the host later exposes more of the page
/// environment.
pub struct PageContext<'a> {
    document: &'a mut Document,
    route: &'a str,
}

impl<'a> PageContext<'a> {
    /// Create a new context describing the page currently being shown.
    #[must_use]
    pub fn new(document: &'a mut Document, route: &'a str) -> Self {
        Self { document, route }
    }

    /// Exclusive access to the page document for the duration of the hook.
    pub fn document(&mut self) -> &mut Document {
        self.document
    }

    /// Route of the page being shown, e.g. `/balance-sheet`.
    #[must_use]
    pub fn route(&self) -> &'a str {
        self.route
    }
}

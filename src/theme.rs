use std::sync::atomic::{AtomicBool, Ordering};

use cqc_ext_api::{Document, Element, ExtensionDescriptor, ExtensionModule, PageContext};
use tracing::{debug, trace};

use crate::brand;

/// Reserved id of the injected stylesheet element.
pub const STYLE_ELEMENT_ID: &str = "cqc-theme-css";

/// Reserved id of the injected brand strip element.
pub const BRAND_ELEMENT_ID: &str = "cqc-brand-strip";

/// The Quebec stylesheet, embedded as an opaque asset.
pub const THEME_CSS: &str = include_str!("../assets/theme.css");

/// Descriptor the viewer registers the theme under.
pub static THEME_DESCRIPTOR: ExtensionDescriptor = ExtensionDescriptor {
    id: "theme-qc",
    name: "Quebec theme",
    report_title: None,
    has_page_module: true,
};

/// One-way injection flags scoped to an extension instance.
///
/// Each flag moves from `false` to `true` at most once, on the first call
/// that finds or creates its node, and is never reset. Hooks run on the
/// host's dispatch thread; the atomics only satisfy the `Send + Sync`
/// bound on [`ExtensionModule`], so relaxed ordering is enough.
#[derive(Debug, Default)]
struct InjectionState {
    style_injected: AtomicBool,
    brand_injected: AtomicBool,
}

/// Visual theming extension for the CompteQC viewer.
///
/// Applies the Quebec theme by injecting a stylesheet into `head` and a
/// brand strip right after the page header. Both injections are idempotent
/// and run from both lifecycle hooks, so a page whose header is not rendered
/// yet is picked up by a later page load.
#[derive(Debug, Default)]
pub struct ThemeQcExtension {
    state: InjectionState,
}

impl ThemeQcExtension {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the theme stylesheet into `head`, once.
    ///
    /// A stylesheet carrying the reserved id that is already in the document
    /// is adopted as-is, whatever its content.
    pub fn ensure_style_injected(&self, document: &mut Document) {
        if self.state.style_injected.load(Ordering::Relaxed) {
            return;
        }
        if document.element_by_id(STYLE_ELEMENT_ID).is_some() {
            trace!(id = STYLE_ELEMENT_ID, "stylesheet already present, adopting");
            self.state.style_injected.store(true, Ordering::Relaxed);
            return;
        }
        let head = document.head();
        document.append_child(
            head,
            Element::new("style").id(STYLE_ELEMENT_ID).text(THEME_CSS),
        );
        self.state.style_injected.store(true, Ordering::Relaxed);
        debug!(id = STYLE_ELEMENT_ID, "theme stylesheet injected");
    }

    /// Insert the brand strip as the immediate next sibling of the first
    /// `header` element, once.
    ///
    /// A page without a header is left untouched and the flag stays unset,
    /// so the next lifecycle call retries.
    pub fn ensure_brand_injected(&self, document: &mut Document) {
        if self.state.brand_injected.load(Ordering::Relaxed) {
            return;
        }
        if document.element_by_id(BRAND_ELEMENT_ID).is_some() {
            trace!(id = BRAND_ELEMENT_ID, "brand strip already present, adopting");
            self.state.brand_injected.store(true, Ordering::Relaxed);
            return;
        }
        let Some(header) = document.first_by_tag("header") else {
            trace!("brand strip deferred, page has no header");
            return;
        };
        document.insert_after(header, brand::strip(BRAND_ELEMENT_ID));
        self.state.brand_injected.store(true, Ordering::Relaxed);
        debug!(id = BRAND_ELEMENT_ID, "brand strip injected");
    }
}

impl ExtensionModule for ThemeQcExtension {
    fn descriptor(&self) -> &'static ExtensionDescriptor {
        &THEME_DESCRIPTOR
    }

    fn init(&self, mut context: PageContext<'_>) {
        self.ensure_style_injected(context.document());
        self.ensure_brand_injected(context.document());
    }

    fn on_page_load(&self, mut context: PageContext<'_>) {
        self.ensure_style_injected(context.document());
        self.ensure_brand_injected(context.document());
    }
}

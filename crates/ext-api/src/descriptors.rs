/// Static metadata describing an extension contributed to the viewer.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionDescriptor {
    /// Stable identifier used to route lifecycle dispatches to the extension.
    pub id: &'static str,
    /// Human readable name used in diagnostics.
    pub name: &'static str,
    /// Sidebar report label, for extensions that contribute a report page.
    pub report_title: Option<&'static str>,
    /// Whether the extension ships page code the host must dispatch to.
    pub has_page_module: bool,
}

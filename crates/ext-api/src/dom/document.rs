use ego_tree::{NodeId, NodeRef, Tree};

use super::element::Element;
use super::node::{DomNode, ElementData};
use super::serialize;

/// A mutable HTML page owned by the viewer and handed to extensions.
///
/// Every document starts from the fixed `<html><head></head><body></body></html>`
/// skeleton, so [`head`](Self::head) and [`body`](Self::body) are always valid
/// anchors. Extensions never parse markup; they describe new nodes with
/// [`Element`] and attach them here.
#[derive(Debug)]
pub struct Document {
    tree: Tree<DomNode>,
    head: NodeId,
    body: NodeId,
}

impl Document {
    /// Create an empty document skeleton.
    #[must_use]
    pub fn new() -> Self {
        let mut tree = Tree::new(DomNode::element("html"));
        let head = tree.root_mut().append(DomNode::element("head")).id();
        let body = tree.root_mut().append(DomNode::element("body")).id();
        Self { tree, head, body }
    }

    /// The `<html>` root element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.tree.root().id()
    }

    /// The `<head>` element.
    #[must_use]
    pub fn head(&self) -> NodeId {
        self.head
    }

    /// The `<body>` element.
    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Attach `element` as the last child of `parent`, returning its node id.
    pub fn append_child(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = element.build(&mut self.tree);
        self.tree
            .get_mut(parent)
            .expect("parent node belongs to this document")
            .append_id(id);
        id
    }

    /// Attach `element` as the immediate next sibling of `sibling`.
    pub fn insert_after(&mut self, sibling: NodeId, element: Element) -> NodeId {
        let id = element.build(&mut self.tree);
        self.tree
            .get_mut(sibling)
            .expect("sibling node belongs to this document")
            .insert_id_after(id);
        id
    }

    /// Append a text node under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.tree
            .get_mut(parent)
            .expect("parent node belongs to this document")
            .append(DomNode::Text(text.into()))
            .id()
    }

    /// Detach the subtree rooted at `node` from the document.
    ///
    /// Detached nodes no longer appear in the document-order queries
    /// ([`element_by_id`](Self::element_by_id), [`first_by_tag`](Self::first_by_tag),
    /// [`elements`](Self::elements)) or in [`to_html`](Self::to_html); their
    /// handles stay valid for [`get`](Self::get).
    pub fn remove(&mut self, node: NodeId) {
        if let Some(mut node) = self.tree.get_mut(node) {
            node.detach();
        }
    }

    /// First element in document order whose `id` attribute equals `id`.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements()
            .find(|element| element.id() == Some(id))
            .map(|element| element.node_id())
    }

    /// First element in document order with the given tag name
    /// (ASCII case-insensitive).
    #[must_use]
    pub fn first_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.elements()
            .find(|element| element.tag().eq_ignore_ascii_case(tag))
            .map(|element| element.node_id())
    }

    /// View the element behind `node`.
    ///
    /// Resolves any element handle issued by this document, attached or
    /// detached.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<ElementView<'_>> {
        self.tree.get(node).and_then(ElementView::wrap)
    }

    /// Iterate over every element in document order, starting at the root.
    pub fn elements(&self) -> impl Iterator<Item = ElementView<'_>> {
        self.tree.root().descendants().filter_map(ElementView::wrap)
    }

    /// Render the document to an HTML string.
    ///
    /// Serialization is deterministic: attribute order follows insertion
    /// order and the output contains no inferred whitespace.
    #[must_use]
    pub fn to_html(&self) -> String {
        serialize::serialize(&self.tree)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only cursor over an attached element node.
#[derive(Clone, Copy)]
pub struct ElementView<'a> {
    node: NodeRef<'a, DomNode>,
    data: &'a ElementData,
}

impl<'a> ElementView<'a> {
    pub(crate) fn wrap(node: NodeRef<'a, DomNode>) -> Option<Self> {
        match node.value() {
            DomNode::Element(data) => Some(Self { node, data }),
            DomNode::Text(_) => None,
        }
    }

    /// Arena id of the underlying node.
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        self.node.id()
    }

    /// Tag name as written at construction time.
    #[must_use]
    pub fn tag(&self) -> &'a str {
        &self.data.tag
    }

    /// The `id` attribute, if set.
    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.attr("id")
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.data.attrs.get(name).map(String::as_str)
    }

    /// Iterate over the whitespace-separated entries of the `class` attribute.
    pub fn classes(self) -> impl Iterator<Item = &'a str> {
        self.attr("class").unwrap_or_default().split_ascii_whitespace()
    }

    /// Whether the `class` attribute contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|entry| entry == class)
    }

    /// Concatenated text content of this element and its descendants.
    #[must_use]
    pub fn text(&self) -> String {
        let mut text = String::new();
        for node in self.node.descendants() {
            if let DomNode::Text(chunk) = node.value() {
                text.push_str(chunk);
            }
        }
        text
    }

    /// Parent element, if any.
    #[must_use]
    pub fn parent(&self) -> Option<ElementView<'a>> {
        self.node.parent().and_then(Self::wrap)
    }

    /// Child elements in order, skipping text nodes.
    pub fn children(self) -> impl Iterator<Item = ElementView<'a>> {
        self.node.children().filter_map(Self::wrap)
    }

    /// The next sibling that is an element, skipping text nodes.
    #[must_use]
    pub fn next_sibling_element(&self) -> Option<ElementView<'a>> {
        let mut next = self.node.next_sibling();
        while let Some(node) = next {
            if let Some(view) = Self::wrap(node) {
                return Some(view);
            }
            next = node.next_sibling();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_has_head_and_body_under_root() {
        let document = Document::new();
        let root = document.get(document.root()).expect("root element");
        let children: Vec<&str> = root.children().map(|child| child.tag()).collect();
        assert_eq!(children, vec!["head", "body"]);
    }

    #[test]
    fn element_by_id_finds_attached_elements() {
        let mut document = Document::new();
        let inserted = document.append_child(
            document.body(),
            Element::new("div").id("marker").class("a").class("b"),
        );
        assert_eq!(document.element_by_id("marker"), Some(inserted));
        assert_eq!(document.element_by_id("missing"), None);

        let view = document.get(inserted).expect("inserted element");
        assert!(view.has_class("a"));
        assert!(view.has_class("b"));
        assert!(!view.has_class("c"));
    }

    #[test]
    fn element_by_id_is_document_order_and_exact_match() {
        let mut document = Document::new();
        let first = document.append_child(document.body(), Element::new("div").id("dup"));
        document.append_child(document.body(), Element::new("span").id("dup"));
        document.append_child(document.body(), Element::new("p").id("Case"));

        assert_eq!(document.element_by_id("dup"), Some(first));
        assert_eq!(document.element_by_id("case"), None);
        assert!(document.element_by_id("Case").is_some());
    }

    #[test]
    fn first_by_tag_is_document_order_and_case_insensitive() {
        let mut document = Document::new();
        document.append_child(
            document.body(),
            Element::new("nav").child(Element::new("HEADER").id("inner")),
        );
        document.append_child(document.body(), Element::new("header").id("outer"));

        let first = document.first_by_tag("header").expect("a header");
        assert_eq!(document.get(first).and_then(|view| view.id()), Some("inner"));
    }

    #[test]
    fn insert_after_places_immediate_next_sibling() {
        let mut document = Document::new();
        let header = document.append_child(document.body(), Element::new("header"));
        document.append_child(document.body(), Element::new("article"));
        let strip = document.insert_after(header, Element::new("div").id("strip"));

        let header_view = document.get(header).expect("header");
        let next = header_view.next_sibling_element().expect("next sibling");
        assert_eq!(next.node_id(), strip);
        assert_eq!(next.id(), Some("strip"));
    }

    #[test]
    fn removed_subtrees_disappear_from_queries() {
        let mut document = Document::new();
        let wrapper = document.append_child(
            document.body(),
            Element::new("div").child(Element::new("span").id("inner")),
        );
        assert!(document.element_by_id("inner").is_some());

        document.remove(wrapper);
        assert!(document.element_by_id("inner").is_none());
        assert_eq!(document.elements().count(), 3);
    }

    #[test]
    fn detached_handles_still_resolve_through_get() {
        let mut document = Document::new();
        let banner = document.append_child(document.body(), Element::new("div").id("banner"));
        document.remove(banner);

        assert!(document.element_by_id("banner").is_none());
        assert!(document.get(banner).is_some());
    }

    #[test]
    fn text_concatenates_descendant_chunks() {
        let mut document = Document::new();
        let quote = document.append_child(
            document.body(),
            Element::new("p")
                .text("les ")
                .child(Element::new("em").text("affaires"))
                .text(" du jour"),
        );
        let view = document.get(quote).expect("paragraph");
        assert_eq!(view.text(), "les affaires du jour");
    }

    #[test]
    fn append_text_adds_a_text_node() {
        let mut document = Document::new();
        let title = document.append_child(document.head(), Element::new("title"));
        document.append_text(title, "CompteQC");
        assert_eq!(document.get(title).expect("title").text(), "CompteQC");
    }
}

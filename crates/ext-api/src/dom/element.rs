use ego_tree::{NodeId, Tree};
use indexmap::IndexMap;
use indexmap::map::Entry;

use super::node::{DomNode, ElementData};

/// A detached element under construction.
///
/// Elements are described with the builder methods below and only become part
/// of a document once handed to [`Document::append_child`](super::Document::append_child)
/// or [`Document::insert_after`](super::Document::insert_after).
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: IndexMap<String, String>,
    children: Vec<Child>,
}

#[derive(Debug, Clone)]
enum Child {
    Element(Element),
    Text(String),
}

impl Element {
    /// Create an element with the given tag and no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add a class, appending to any classes set so far.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        match self.attrs.entry("class".to_string()) {
            Entry::Occupied(mut entry) => {
                let classes = entry.get_mut();
                classes.push(' ');
                classes.push_str(&class);
            }
            Entry::Vacant(entry) => {
                entry.insert(class);
            }
        }
        self
    }

    /// Set an arbitrary attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Append an element child.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Materialize this element and its children into the arena, returning
    /// the id of the (still detached) subtree root.
    pub(crate) fn build(self, tree: &mut Tree<DomNode>) -> NodeId {
        let Element {
            tag,
            attrs,
            children,
        } = self;
        let id = tree.orphan(DomNode::Element(ElementData { tag, attrs })).id();
        for child in children {
            let child_id = match child {
                Child::Element(element) => element.build(tree),
                Child::Text(text) => tree.orphan(DomNode::Text(text)).id(),
            };
            tree.get_mut(id)
                .expect("freshly built node is in the arena")
                .append_id(child_id);
        }
        id
    }
}

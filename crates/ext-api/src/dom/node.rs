use indexmap::IndexMap;

/// A single node stored in the document arena.
#[derive(Debug, Clone)]
pub(crate) enum DomNode {
    Element(ElementData),
    Text(String),
}

/// Tag and attributes of an element node.
#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub(crate) tag: String,
    pub(crate) attrs: IndexMap<String, String>,
}

impl DomNode {
    pub(crate) fn element(tag: &str) -> Self {
        Self::Element(ElementData {
            tag: tag.to_string(),
            attrs: IndexMap::new(),
        })
    }
}

use ego_tree::iter::Edge;
use ego_tree::{NodeRef, Tree};

use super::node::{DomNode, ElementData};

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

pub(crate) fn serialize(tree: &Tree<DomNode>) -> String {
    let mut out = String::new();
    for edge in tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                DomNode::Element(data) => open_tag(&mut out, data),
                DomNode::Text(text) => {
                    if inside_raw_text(node) {
                        out.push_str(text);
                    } else {
                        escape_text(&mut out, text);
                    }
                }
            },
            Edge::Close(node) => {
                if let DomNode::Element(data) = node.value() {
                    if node.has_children() || !is_void(&data.tag) {
                        out.push_str("</");
                        out.push_str(&data.tag);
                        out.push('>');
                    }
                }
            }
        }
    }
    out
}

fn open_tag(out: &mut String, data: &ElementData) {
    out.push('<');
    out.push_str(&data.tag);
    for (name, value) in &data.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attr(out, value);
        out.push('"');
    }
    out.push('>');
}

// Stylesheet and script payloads pass through verbatim.
fn inside_raw_text(node: NodeRef<'_, DomNode>) -> bool {
    match node.parent().map(|parent| parent.value()) {
        Some(DomNode::Element(data)) => {
            data.tag.eq_ignore_ascii_case("style") || data.tag.eq_ignore_ascii_case("script")
        }
        _ => false,
    }
}

fn is_void(tag: &str) -> bool {
    VOID_TAGS.iter().any(|candidate| tag.eq_ignore_ascii_case(candidate))
}

fn escape_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::{Document, Element};

    #[test]
    fn renders_the_empty_skeleton() {
        let document = Document::new();
        assert_eq!(document.to_html(), "<html><head></head><body></body></html>");
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let mut document = Document::new();
        document.append_child(
            document.body(),
            Element::new("span")
                .attr("title", "a \"b\" & c")
                .text("1 < 2 & 3 > 2"),
        );
        assert_eq!(
            document.to_html(),
            "<html><head></head><body>\
             <span title=\"a &quot;b&quot; &amp; c\">1 &lt; 2 &amp; 3 &gt; 2</span>\
             </body></html>",
        );
    }

    #[test]
    fn style_payloads_are_not_escaped() {
        let mut document = Document::new();
        document.append_child(
            document.head(),
            Element::new("style")
                .id("s")
                .text("header > a { content: \"&\"; }"),
        );
        let html = document.to_html();
        assert!(html.contains("<style id=\"s\">header > a { content: \"&\"; }</style>"));
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut document = Document::new();
        document.append_child(document.head(), Element::new("link").attr("rel", "icon"));
        let html = document.to_html();
        assert!(html.contains("<link rel=\"icon\">"));
        assert!(!html.contains("</link>"));
    }
}

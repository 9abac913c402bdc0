//! HTML serialization and the deterministic tree dump used by tests.
//!
//! `to_html` follows the standard's fragment serialization algorithm (void
//! elements, raw-text elements, attribute/text escaping). `tree_dump` renders
//! the html5lib-style indented dump; it is not a public stable format and is
//! intended for golden comparisons.

use super::{Document, Namespace, NodeData, NodeId};
use std::fmt::Write;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Children of these HTML elements serialize as raw text, unescaped.
const RAW_TEXT_PARENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    for &child in doc.children(NodeId::DOCUMENT) {
        serialize_node(doc, child, &mut out);
    }
    out
}

fn serialize_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.data(id) {
        NodeData::Document => {}
        NodeData::Doctype { name, .. } => {
            out.push_str("<!DOCTYPE ");
            out.push_str(name);
            out.push('>');
        }
        NodeData::Comment { data } => {
            out.push_str("<!--");
            out.push_str(data);
            out.push_str("-->");
        }
        NodeData::Text { data } => {
            let raw = doc
                .parent(id)
                .and_then(|p| doc.elem(p))
                .is_some_and(|e| e.namespace == Namespace::Html && is_raw_text_parent(&e.local));
            if raw {
                out.push_str(data);
            } else {
                escape_into(data, false, out);
            }
        }
        NodeData::Element(elem) => {
            out.push('<');
            out.push_str(&elem.local);
            for attr in &elem.attrs {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                escape_into(&attr.value, true, out);
                out.push('"');
            }
            out.push('>');
            let void = elem.namespace == Namespace::Html && VOID_ELEMENTS.contains(&&*elem.local);
            if void {
                return;
            }
            for &child in doc.children(id) {
                serialize_node(doc, child, out);
            }
            out.push_str("</");
            out.push_str(&elem.local);
            out.push('>');
        }
    }
}

fn is_raw_text_parent(local: &str) -> bool {
    RAW_TEXT_PARENTS.contains(&local)
}

fn escape_into(text: &str, attr_mode: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\u{A0}' => out.push_str("&nbsp;"),
            '"' if attr_mode => out.push_str("&quot;"),
            '<' if !attr_mode => out.push_str("&lt;"),
            '>' if !attr_mode => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Indented tree dump, one node per `| `-prefixed line; attributes sorted by
/// name on their own lines.
pub fn tree_dump(doc: &Document) -> String {
    let mut out = String::new();
    for &child in doc.children(NodeId::DOCUMENT) {
        dump_node(doc, child, 0, &mut out);
    }
    out
}

fn dump_node(doc: &Document, id: NodeId, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match doc.data(id) {
        NodeData::Document => {}
        NodeData::Doctype {
            name,
            public_id,
            system_id,
        } => {
            if public_id.is_empty() && system_id.is_empty() {
                let _ = writeln!(out, "| {indent}<!DOCTYPE {name}>");
            } else {
                let _ = writeln!(
                    out,
                    "| {indent}<!DOCTYPE {name} \"{public_id}\" \"{system_id}\">"
                );
            }
        }
        NodeData::Comment { data } => {
            let _ = writeln!(out, "| {indent}<!-- {data} -->");
        }
        NodeData::Text { data } => {
            let _ = writeln!(out, "| {indent}\"{data}\"");
        }
        NodeData::Element(elem) => {
            let name = match elem.namespace {
                Namespace::Html => elem.local.clone(),
                Namespace::Svg => format!("svg {}", elem.local),
                Namespace::MathMl => format!("math {}", elem.local),
                // Element namespaces never come from the attribute-only set.
                Namespace::XLink | Namespace::Xml | Namespace::Xmlns => elem.local.clone(),
            };
            let _ = writeln!(out, "| {indent}<{name}>");
            let mut attrs: Vec<_> = elem.attrs.iter().collect();
            attrs.sort_by(|a, b| a.name.cmp(&b.name));
            for attr in attrs {
                let _ = writeln!(out, "| {indent}  {}=\"{}\"", attr.name, attr.value);
            }
            for &child in doc.children(id) {
                dump_node(doc, child, depth + 1, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Attribute;

    #[test]
    fn serializer_escapes_text_and_attributes() {
        let mut doc = Document::new(false);
        let div = doc.create_element(
            Namespace::Html,
            None,
            "div".to_string(),
            vec![Attribute {
                name: "title".to_string(),
                value: "a\"b<c".to_string(),
            }],
        );
        let text = doc.create_text("1 < 2 & 3\u{A0}".to_string());
        doc.append_child(NodeId::DOCUMENT, div);
        doc.append_child(div, text);
        assert_eq!(
            to_html(&doc),
            "<div title=\"a&quot;b<c\">1 &lt; 2 &amp; 3&nbsp;</div>"
        );
    }

    #[test]
    fn serializer_leaves_raw_text_and_void_elements_alone() {
        let mut doc = Document::new(false);
        let style = doc.create_element(Namespace::Html, None, "style".to_string(), Vec::new());
        let css = doc.create_text("a > b { }".to_string());
        let br = doc.create_element(Namespace::Html, None, "br".to_string(), Vec::new());
        doc.append_child(NodeId::DOCUMENT, style);
        doc.append_child(style, css);
        doc.append_child(NodeId::DOCUMENT, br);
        assert_eq!(to_html(&doc), "<style>a > b { }</style><br>");
    }

    #[test]
    fn tree_dump_sorts_attributes_and_indents() {
        let mut doc = Document::new(false);
        let div = doc.create_element(
            Namespace::Html,
            None,
            "div".to_string(),
            vec![
                Attribute {
                    name: "id".to_string(),
                    value: "x".to_string(),
                },
                Attribute {
                    name: "class".to_string(),
                    value: "y".to_string(),
                },
            ],
        );
        let text = doc.create_text("hi".to_string());
        doc.append_child(NodeId::DOCUMENT, div);
        doc.append_child(div, text);
        assert_eq!(
            tree_dump(&doc),
            "| <div>\n|   class=\"y\"\n|   id=\"x\"\n|   \"hi\"\n"
        );
    }
}

//! Universal invariants: every input terminates, produces a well-formed
//! tree, keeps text coalesced, and stays inside the declared namespace set.

use wren_html::dom::serialize::{to_html, tree_dump};
use wren_html::{Charset, Document, Namespace, NodeData, NodeId, ParseOptions, parse,
    parse_with_options};

const NASTY_INPUTS: &[&str] = &[
    "",
    "plain text only",
    "<",
    "</",
    "<!",
    "<!-",
    "<!--",
    "<!DOCTYPE",
    "<a><b><c><d><e>",
    "</a></b></c>",
    "<p><table><p><table><p>",
    "<b><i><u></b></i></u>",
    "<select><table><tr><td>",
    "<svg><math><mi><foo>",
    "<table><td>x<table><td>y",
    "&&&&&&&",
    "&#xFFFFFFFFFFFF;",
    "<div a=b c='d' e=\"f\" a=dup>",
    "<script><!--<script></script>",
    "\0\0<\0>&#0;",
    "<html><head></head><frameset>",
    "<template><template><td>",
    "<!DOCTYPE html><title>&amp</title>",
    "<li><li><ul><li></ul></li>",
    "<a href=x><a href=y>z",
];

fn all_nodes(doc: &Document) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack = vec![NodeId::DOCUMENT];
    while let Some(id) = stack.pop() {
        out.push(id);
        for &child in doc.children(id) {
            stack.push(child);
        }
    }
    out
}

fn assert_links_consistent(doc: &Document) {
    for id in all_nodes(doc) {
        let children = doc.children(id);
        for (i, &child) in children.iter().enumerate() {
            assert_eq!(doc.parent(child), Some(id), "parent link mismatch");
            let expect_prev = i.checked_sub(1).map(|j| children[j]);
            let expect_next = children.get(i + 1).copied();
            assert_eq!(doc.prev_sibling(child), expect_prev, "prev link mismatch");
            assert_eq!(doc.next_sibling(child), expect_next, "next link mismatch");
        }
    }
}

#[test]
fn every_input_terminates_with_a_well_formed_tree() {
    for input in NASTY_INPUTS {
        let doc = parse(input.as_bytes());
        assert_links_consistent(&doc);
    }
}

#[test]
fn no_two_adjacent_text_siblings_survive() {
    for input in NASTY_INPUTS {
        let doc = parse(input.as_bytes());
        for id in all_nodes(&doc) {
            let children = doc.children(id);
            for pair in children.windows(2) {
                let both_text = matches!(doc.data(pair[0]), NodeData::Text { .. })
                    && matches!(doc.data(pair[1]), NodeData::Text { .. });
                assert!(!both_text, "adjacent text nodes for input {input:?}");
            }
        }
    }
}

#[test]
fn element_namespaces_come_from_the_declared_set() {
    for input in NASTY_INPUTS {
        let doc = parse(input.as_bytes());
        for id in all_nodes(&doc) {
            if let Some(elem) = doc.elem(id) {
                assert!(matches!(
                    elem.namespace,
                    Namespace::Html | Namespace::MathMl | Namespace::Svg
                ));
            }
        }
    }
}

#[test]
fn document_children_have_at_most_one_doctype_and_one_element() {
    for input in NASTY_INPUTS {
        let doc = parse(input.as_bytes());
        let children = doc.children(NodeId::DOCUMENT);
        let doctypes = children
            .iter()
            .filter(|&&c| matches!(doc.data(c), NodeData::Doctype { .. }))
            .count();
        let elements = children.iter().filter(|&&c| doc.elem(c).is_some()).count();
        assert!(doctypes <= 1, "multiple doctypes for {input:?}");
        assert!(elements <= 1, "multiple document elements for {input:?}");
    }
}

#[test]
fn body_is_reachable_whenever_body_content_exists() {
    for input in ["<p>hi", "<body>x</body>", "x", "<b>y</b>", "<table><td>z"] {
        let doc = parse(input.as_bytes());
        let body = doc.body().expect("body pointer");
        // Walk up from body to the document root.
        let mut cursor = Some(body);
        let mut reached_root = false;
        while let Some(id) = cursor {
            if id == NodeId::DOCUMENT {
                reached_root = true;
                break;
            }
            cursor = doc.parent(id);
        }
        assert!(reached_root, "body detached from document for {input:?}");
    }
}

#[test]
fn close_body_keeps_the_body_element() {
    let doc = parse(b"<!DOCTYPE html><body><p>x</p></body>more");
    let body = doc.body().expect("body pointer");
    // Stray content after </body> reopens InBody and keeps appending.
    let has_more = doc.children(body).iter().any(|&c| {
        matches!(doc.data(c), NodeData::Text { data } if data == "more")
    });
    assert!(has_more);
}

#[test]
fn serialize_then_reparse_is_isomorphic_for_conformant_documents() {
    let inputs = [
        "<!DOCTYPE html><html><head><title>t</title></head><body><p>a<b>b</b></p></body></html>",
        "<!DOCTYPE html><body><ul><li>1</li><li>2</li></ul>",
        "<!DOCTYPE html><body><table><tbody><tr><td>x</td></tr></tbody></table>",
        "<!DOCTYPE html><body><pre>code</pre><p>t&amp;t</p>",
    ];
    for input in inputs {
        let first = parse(input.as_bytes());
        let serialized = to_html(&first);
        let second = parse(serialized.as_bytes());
        assert_eq!(
            tree_dump(&first),
            tree_dump(&second),
            "round trip diverged for {input:?} via {serialized:?}"
        );
    }
}

#[test]
fn newline_normalization_is_idempotent_at_the_token_level() {
    let raw = "a\r\nb\rc\n<d e=\"f\r\ng\">";
    let renormalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let (tokens_a, _) = wren_html::tokenize(raw.as_bytes(), ParseOptions::default());
    let (tokens_b, _) = wren_html::tokenize(renormalized.as_bytes(), ParseOptions::default());
    assert_eq!(tokens_a, tokens_b);
}

#[test]
fn windows_1252_charset_decodes_before_tokenization() {
    let doc = parse_with_options(
        b"<!DOCTYPE html><p>caf\xE9 \x80</p>",
        ParseOptions {
            charset: Charset::Windows1252,
            ..ParseOptions::default()
        },
    );
    let dump = tree_dump(&doc);
    assert!(dump.contains("café €"), "dump was {dump}");
}

#[test]
fn abort_flag_stops_the_parse_and_still_returns_a_document() {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    let flag = Arc::new(AtomicBool::new(true));
    let doc = parse_with_options(
        b"<!DOCTYPE html><p>never processed",
        ParseOptions {
            abort: Some(flag),
            ..ParseOptions::default()
        },
    );
    // Aborted before the first token: an empty but valid document.
    assert!(doc.children(NodeId::DOCUMENT).is_empty());
    assert_links_consistent(&doc);
}

#[test]
fn parse_error_offsets_point_into_the_input() {
    let input = b"<p>&amp</p>";
    let doc = parse(input);
    for error in doc.parse_errors() {
        assert!(error.offset <= input.len(), "offset out of range: {error}");
    }
}

#[test]
fn error_policy_bounds_stored_errors_but_counts_all() {
    let noisy = "\0".repeat(64);
    let doc = parse_with_options(
        noisy.as_bytes(),
        ParseOptions {
            error_policy: wren_html::ErrorPolicy {
                track: true,
                max_stored: 8,
            },
            ..ParseOptions::default()
        },
    );
    assert!(doc.parse_errors().len() <= 8);
    assert!(doc.parse_error_total() >= 64);
}

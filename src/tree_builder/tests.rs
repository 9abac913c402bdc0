use super::rules::synth_tag;
use super::{InsertionMode, TreeBuilder};
use crate::dom::{Namespace, NodeData, NodeId};
use crate::error::{ErrorPolicy, ErrorSink};

fn builder_with_stack(locals: &[&str]) -> TreeBuilder {
    let mut builder = TreeBuilder::new(false);
    for local in locals {
        let id = builder
            .doc
            .create_element(Namespace::Html, None, local.to_string(), Vec::new());
        if let Some(parent) = builder.open.current() {
            builder.doc.append_child(parent, id);
        } else {
            builder.doc.append_child(NodeId::DOCUMENT, id);
        }
        builder.open.push(id);
    }
    builder
}

fn sink() -> ErrorSink {
    ErrorSink::new(ErrorPolicy::default())
}

#[test]
fn reset_insertion_mode_walks_the_stack() {
    let mut builder = builder_with_stack(&["html", "body", "table", "tbody", "tr"]);
    builder.reset_insertion_mode();
    assert_eq!(builder.mode, InsertionMode::InRow);

    let mut builder = builder_with_stack(&["html", "body", "table", "tbody", "tr", "td"]);
    builder.reset_insertion_mode();
    assert_eq!(builder.mode, InsertionMode::InCell);

    let mut builder = builder_with_stack(&["html", "body"]);
    builder.reset_insertion_mode();
    assert_eq!(builder.mode, InsertionMode::InBody);

    let mut builder = builder_with_stack(&["html"]);
    builder.reset_insertion_mode();
    assert_eq!(builder.mode, InsertionMode::BeforeHead);
}

#[test]
fn reset_insertion_mode_select_inside_table_is_in_select_in_table() {
    let mut builder = builder_with_stack(&["html", "body", "table", "select"]);
    builder.reset_insertion_mode();
    assert_eq!(builder.mode, InsertionMode::InSelectInTable);

    let mut builder = builder_with_stack(&["html", "body", "select"]);
    builder.reset_insertion_mode();
    assert_eq!(builder.mode, InsertionMode::InSelect);
}

#[test]
fn generate_implied_end_tags_honors_the_exception() {
    let mut builder = builder_with_stack(&["html", "body", "p", "li", "option"]);
    builder.generate_implied_end_tags(Some("p"));
    assert!(builder.current_is_html("p"));

    let mut builder = builder_with_stack(&["html", "body", "div", "p"]);
    builder.generate_implied_end_tags(None);
    assert!(builder.current_is_html("div"));
}

#[test]
fn insert_character_coalesces_adjacent_text() {
    let mut builder = builder_with_stack(&["html", "body"]);
    builder.insert_character('h');
    builder.insert_character('i');
    let body = builder.open.current().unwrap();
    let children = builder.doc.children(body);
    assert_eq!(children.len(), 1);
    assert_eq!(
        builder.doc.data(children[0]),
        &NodeData::Text {
            data: "hi".to_string()
        }
    );
}

#[test]
fn insert_character_never_inserts_under_the_document() {
    let mut builder = TreeBuilder::new(false);
    builder.insert_character('x');
    assert!(builder.doc.children(NodeId::DOCUMENT).is_empty());
}

#[test]
fn foster_parenting_redirects_insertion_before_the_table() {
    let mut builder = builder_with_stack(&["html", "body", "table"]);
    let body = builder.open.get(1).unwrap();
    let table = builder.open.current().unwrap();

    builder.foster_parenting = true;
    let mut errors = sink();
    let p = builder.insert_html_element(&synth_tag("p"), &mut errors);
    builder.foster_parenting = false;

    assert_eq!(builder.doc.parent(p), Some(body));
    assert_eq!(builder.doc.next_sibling(p), Some(table));
}

#[test]
fn close_p_element_pops_through_the_p() {
    let mut builder = builder_with_stack(&["html", "body", "p", "b"]);
    let mut errors = sink();
    builder.close_p_element(&mut errors);
    assert!(builder.current_is_html("body"));
}

#[test]
fn formatting_list_noahs_ark_caps_duplicates() {
    let mut builder = builder_with_stack(&["html", "body"]);
    let mut ids = Vec::new();
    for _ in 0..4 {
        let id = builder
            .doc
            .create_element(Namespace::Html, None, "b".to_string(), Vec::new());
        ids.push(id);
        builder.formatting.push_element(id, synth_tag("b"));
    }
    // The earliest duplicate is evicted; the three newest survive.
    assert!(!builder.formatting.contains_id(ids[0]));
    for &id in &ids[1..] {
        assert!(builder.formatting.contains_id(id));
    }
}

#[test]
fn template_end_tag_without_open_template_is_ignored() {
    let mut builder = builder_with_stack(&["html", "body", "div"]);
    let mut errors = sink();
    builder.handle_template_end_tag(&mut errors);
    assert!(builder.current_is_html("div"));
    assert_eq!(errors.errors().len(), 1);
}

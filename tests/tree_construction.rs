//! Golden tree-construction cases: input HTML against the expected dump.

use wren_html::dom::serialize::tree_dump;
use wren_html::{ParseErrorCode, parse};

fn assert_tree(input: &str, expected_lines: &[&str]) {
    let doc = parse(input.as_bytes());
    let dump = tree_dump(&doc);
    let expected = format!("{}\n", expected_lines.join("\n"));
    assert_eq!(
        dump, expected,
        "tree mismatch for {input:?}\n-- got --\n{dump}\n-- want --\n{expected}"
    );
}

fn error_codes(input: &str) -> Vec<ParseErrorCode> {
    parse(input.as_bytes())
        .parse_errors()
        .iter()
        .map(|e| e.code)
        .collect()
}

#[test]
fn doctype_and_explicit_html() {
    let doc = parse(b"<!DOCTYPE html><html></html>");
    assert!(doc.parse_errors().is_empty());
    assert_tree(
        "<!DOCTYPE html><html></html>",
        &["| <!DOCTYPE html>", "| <html>", "|   <head>", "|   <body>"],
    );
}

#[test]
fn comment_before_root_element() {
    let doc = parse(b"<!-- hi --><html></html>");
    assert!(doc.parse_errors().is_empty());
    assert_tree(
        "<!-- hi --><html></html>",
        &[
            "| <!--  hi  -->",
            "| <html>",
            "|   <head>",
            "|   <body>",
        ],
    );
}

#[test]
fn tag_case_normalization_preserves_attribute_values() {
    let doc = parse(b"<DIV Class=\"X\">t</DIV>");
    assert!(doc.parse_errors().is_empty());
    assert_tree(
        "<DIV Class=\"X\">t</DIV>",
        &[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <div>",
            "|       class=\"X\"",
            "|       \"t\"",
        ],
    );
}

#[test]
fn implicit_head_and_body_with_one_eof_error() {
    assert_tree(
        "<p>hi",
        &[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <p>",
            "|       \"hi\"",
        ],
    );
    assert_eq!(error_codes("<p>hi"), vec![ParseErrorCode::UnexpectedEof]);
}

#[test]
fn named_reference_without_semicolon_in_paragraph() {
    assert_tree(
        "<p>&amp</p>",
        &[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <p>",
            "|       \"&\"",
        ],
    );
    assert_eq!(
        error_codes("<p>&amp</p>"),
        vec![ParseErrorCode::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn named_references_beyond_the_legacy_set_decode_without_errors() {
    let input = "<!DOCTYPE html><p>&frac34; &hearts; &there4; &CounterClockwiseContourIntegral;</p>";
    let doc = parse(input.as_bytes());
    assert!(doc.parse_errors().is_empty());
    assert_tree(
        input,
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <p>",
            "|       \"\u{BE} \u{2665} \u{2234} \u{2233}\"",
        ],
    );
}

#[test]
fn foster_parenting_moves_misplaced_paragraph_before_table() {
    assert_tree(
        "<table><p>x</table>",
        &[
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <p>",
            "|       \"x\"",
            "|     <table>",
        ],
    );
    let doc = parse(b"<table><p>x</table>");
    assert!(!doc.parse_errors().is_empty());
}

#[test]
fn adoption_agency_reopens_formatting_across_misnesting() {
    assert_tree(
        "<!DOCTYPE html><p>1<b>2<i>3</b>4</i>5",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <p>",
            "|       \"1\"",
            "|       <b>",
            "|         \"2\"",
            "|         <i>",
            "|           \"3\"",
            "|       <i>",
            "|         \"4\"",
            "|       \"5\"",
        ],
    );
}

#[test]
fn adoption_agency_with_a_furthest_block() {
    assert_tree(
        "<!DOCTYPE html><b><p>x</b>y",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <b>",
            "|     <p>",
            "|       <b>",
            "|         \"x\"",
            "|       \"y\"",
        ],
    );
}

#[test]
fn table_sections_and_cells_are_synthesized() {
    assert_tree(
        "<!DOCTYPE html><table><tr><td>1</td><td>2</td></tr></table>",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <table>",
            "|       <tbody>",
            "|         <tr>",
            "|           <td>",
            "|             \"1\"",
            "|           <td>",
            "|             \"2\"",
        ],
    );
}

#[test]
fn rawtext_style_keeps_markup_characters() {
    let input = "<!DOCTYPE html><style>a < b {}</style>";
    assert_tree(
        input,
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|     <style>",
            "|       \"a < b {}\"",
            "|   <body>",
        ],
    );
    assert!(parse(input.as_bytes()).parse_errors().is_empty());
}

#[test]
fn script_content_is_not_parsed_as_markup() {
    assert_tree(
        "<!DOCTYPE html><script>if (a < b) { x(); }</script>",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|     <script>",
            "|       \"if (a < b) { x(); }\"",
            "|   <body>",
        ],
    );
}

#[test]
fn textarea_swallows_the_leading_newline() {
    assert_tree(
        "<!DOCTYPE html><body><textarea>\nabc</textarea>",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <textarea>",
            "|       \"abc\"",
        ],
    );
}

#[test]
fn pre_swallows_the_leading_newline_but_keeps_the_rest() {
    assert_tree(
        "<!DOCTYPE html><pre>\n\nx</pre>",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <pre>",
            "|       \"\nx\"",
        ],
    );
}

#[test]
fn comment_after_body_lands_on_the_html_element() {
    assert_tree(
        "<!DOCTYPE html><body></body><!--c-->",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|   <!-- c -->",
        ],
    );
}

#[test]
fn svg_subtree_with_html_integration_point() {
    assert_tree(
        "<!DOCTYPE html><svg viewBox=\"0 0 1 1\"><foreignObject><p>h</p></foreignObject><circle/></svg>",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <svg svg>",
            "|       viewBox=\"0 0 1 1\"",
            "|       <svg foreignObject>",
            "|         <p>",
            "|           \"h\"",
            "|       <svg circle>",
        ],
    );
}

#[test]
fn mathml_text_integration_point_takes_html_characters() {
    assert_tree(
        "<!DOCTYPE html><math><mi>x</mi><annotation-xml encoding=\"text/html\"><p>q</p></annotation-xml></math>",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <math math>",
            "|       <math mi>",
            "|         \"x\"",
            "|       <math annotation-xml>",
            "|         encoding=\"text/html\"",
            "|         <p>",
            "|           \"q\"",
        ],
    );
}

#[test]
fn foreign_breakout_tag_returns_to_html_content() {
    assert_tree(
        "<!DOCTYPE html><svg><circle><p>back",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <svg svg>",
            "|       <svg circle>",
            "|     <p>",
            "|       \"back\"",
        ],
    );
}

#[test]
fn select_pops_an_open_option_for_the_next_one() {
    assert_tree(
        "<!DOCTYPE html><select><option>a<option>b</select>",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <select>",
            "|       <option>",
            "|         \"a\"",
            "|       <option>",
            "|         \"b\"",
        ],
    );
}

#[test]
fn frameset_document_has_no_body() {
    assert_tree(
        "<!DOCTYPE html><frameset><frame></frameset><noframes>x</noframes>",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <frameset>",
            "|     <frame>",
            "|   <noframes>",
            "|     \"x\"",
        ],
    );
}

#[test]
fn template_contents_stay_inside_the_template_element() {
    assert_tree(
        "<!DOCTYPE html><template><td>t</td></template>ok",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|     <template>",
            "|       <td>",
            "|         \"t\"",
            "|   <body>",
            "|     \"ok\"",
        ],
    );
}

#[test]
fn nested_lists_close_open_list_items() {
    assert_tree(
        "<!DOCTYPE html><ul><li>a<li>b</ul>",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <ul>",
            "|       <li>",
            "|         \"a\"",
            "|       <li>",
            "|         \"b\"",
        ],
    );
}

#[test]
fn heading_start_tag_closes_an_open_heading() {
    assert_tree(
        "<!DOCTYPE html><h1>a<h2>b",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <h1>",
            "|       \"a\"",
            "|     <h2>",
            "|       \"b\"",
        ],
    );
}

#[test]
fn body_attributes_merge_onto_the_existing_body() {
    assert_tree(
        "<!DOCTYPE html><body class=a><body class=b id=c>",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     class=\"a\"",
            "|     id=\"c\"",
        ],
    );
}

#[test]
fn second_doctype_is_ignored_with_an_error() {
    assert_tree(
        "<!DOCTYPE html><!DOCTYPE html><p>x",
        &[
            "| <!DOCTYPE html>",
            "| <html>",
            "|   <head>",
            "|   <body>",
            "|     <p>",
            "|       \"x\"",
        ],
    );
    assert!(
        error_codes("<!DOCTYPE html><!DOCTYPE html><p>x")
            .contains(&ParseErrorCode::UnexpectedDoctype)
    );
}

#[test]
fn quirks_mode_follows_the_doctype() {
    use wren_html::QuirksMode;
    assert_eq!(
        parse(b"<!DOCTYPE html>").quirks_mode(),
        QuirksMode::NoQuirks
    );
    assert_eq!(parse(b"<p>").quirks_mode(), QuirksMode::Quirks);
    assert_eq!(
        parse(b"<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.0 Transitional//EN\">").quirks_mode(),
        QuirksMode::Quirks
    );
    assert_eq!(
        parse(
            b"<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \
              \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">"
        )
        .quirks_mode(),
        QuirksMode::LimitedQuirks
    );
}

#[test]
fn head_and_body_pointers_are_set_once() {
    let doc = parse(b"<!DOCTYPE html><p>x");
    let head = doc.head().expect("head pointer");
    let body = doc.body().expect("body pointer");
    assert!(doc.is_html_element(head, "head"));
    assert!(doc.is_html_element(body, "body"));
    assert_eq!(doc.parent(head), doc.parent(body));
}

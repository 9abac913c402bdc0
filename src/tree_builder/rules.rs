//! Insertion-mode handlers: Initial through InBody, plus Text.
//!
//! Each handler is a closed match over the token with an explicit
//! anything-else arm. Handlers that delegate ("process the token using the
//! rules for the in-body insertion mode") call `process_in_mode` reentrantly
//! without changing the mode.

use super::stack::{Scope, is_special};
use super::{InsertionMode, Outcome, TreeBuilder};
use crate::dom::{Namespace, NodeId, QuirksMode};
use crate::error::{ErrorSink, ParseErrorCode};
use crate::token::{DoctypeToken, TagToken, Token};
use crate::tokenizer::{State, Tokenizer};

pub(super) fn is_ws_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{C}' | '\r' | ' ')
}

/// Start tags opening ordinary block containers in InBody.
const BLOCK_CONTAINERS: &[&str] = &[
    "address", "article", "aside", "blockquote", "center", "details", "dialog", "dir", "div",
    "dl", "fieldset", "figcaption", "figure", "footer", "header", "hgroup", "main", "menu",
    "nav", "ol", "p", "search", "section", "summary", "ul",
];

const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Formatting elements other than `a` and `nobr`, which have extra rules.
const SIMPLE_FORMATTING: &[&str] = &[
    "b", "big", "code", "em", "font", "i", "s", "small", "strike", "strong", "tt", "u",
];

/// Elements an open `<body>`/EOF may legitimately leave on the stack.
/// Anything else still open is unclosed content and is reported.
const ALLOWED_OPEN_AT_EOF: &[&str] = &["body", "html"];

pub(super) fn synth_tag(name: &str) -> TagToken {
    TagToken {
        name: name.to_string(),
        self_closing: false,
        attrs: Vec::new(),
    }
}

impl TreeBuilder {
    // --- Initial ---

    pub(super) fn mode_initial(&mut self, token: Token, errors: &mut ErrorSink) -> Outcome {
        match token {
            ref t if t.is_whitespace() => Outcome::Done,
            Token::Comment { data } => {
                self.insert_comment_on_document(data);
                Outcome::Done
            }
            Token::Doctype(doctype) => {
                let name_ok = doctype.name.as_deref() == Some("html");
                let system_ok = matches!(
                    doctype.system_id.as_deref(),
                    None | Some("about:legacy-compat")
                );
                if !name_ok || doctype.public_id.is_some() || !system_ok {
                    self.err(errors, ParseErrorCode::UnexpectedDoctype);
                }
                let node = self.doc.create_doctype(
                    doctype.name.clone().unwrap_or_default(),
                    doctype.public_id.clone().unwrap_or_default(),
                    doctype.system_id.clone().unwrap_or_default(),
                );
                self.doc.append_child(NodeId::DOCUMENT, node);
                let quirks = quirks_mode_for(&doctype);
                self.doc.set_quirks_mode(quirks);
                self.mode = InsertionMode::BeforeHtml;
                Outcome::Done
            }
            other => {
                // Doctype-less documents parse in quirks mode; the absence
                // itself is not recorded as a parse error.
                self.doc.set_quirks_mode(QuirksMode::Quirks);
                self.mode = InsertionMode::BeforeHtml;
                Outcome::Reprocess(other)
            }
        }
    }

    // --- BeforeHtml ---

    pub(super) fn mode_before_html(&mut self, token: Token, errors: &mut ErrorSink) -> Outcome {
        match token {
            Token::Doctype(_) => {
                self.err(errors, ParseErrorCode::UnexpectedDoctype);
                Outcome::Done
            }
            Token::Comment { data } => {
                self.insert_comment_on_document(data);
                Outcome::Done
            }
            ref t if t.is_whitespace() => Outcome::Done,
            Token::StartTag(tag) if tag.name == "html" => {
                let id = self.create_element_for_token(&tag, Namespace::Html);
                self.doc.append_child(NodeId::DOCUMENT, id);
                self.open.push(id);
                self.mode = InsertionMode::BeforeHead;
                Outcome::Done
            }
            Token::EndTag(tag)
                if !matches!(tag.name.as_str(), "head" | "body" | "html" | "br") =>
            {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            other => {
                let id = self
                    .doc
                    .create_element(Namespace::Html, None, "html".to_string(), Vec::new());
                self.doc.append_child(NodeId::DOCUMENT, id);
                self.open.push(id);
                self.mode = InsertionMode::BeforeHead;
                Outcome::Reprocess(other)
            }
        }
    }

    // --- BeforeHead ---

    pub(super) fn mode_before_head(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            ref t if t.is_whitespace() => Outcome::Done,
            Token::Comment { data } => {
                self.insert_comment(data, None);
                Outcome::Done
            }
            Token::Doctype(_) => {
                self.err(errors, ParseErrorCode::UnexpectedDoctype);
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "html" => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::StartTag(tag) if tag.name == "head" => {
                let id = self.insert_html_element(&tag, errors);
                self.record_head(id);
                self.mode = InsertionMode::InHead;
                Outcome::Done
            }
            Token::EndTag(tag)
                if !matches!(tag.name.as_str(), "head" | "body" | "html" | "br") =>
            {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            other => {
                let id = self.insert_html_element(&synth_tag("head"), errors);
                self.record_head(id);
                self.mode = InsertionMode::InHead;
                Outcome::Reprocess(other)
            }
        }
    }

    // --- InHead ---

    pub(super) fn mode_in_head(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::Character { scalar } if is_ws_char(scalar) => {
                self.insert_character(scalar);
                Outcome::Done
            }
            Token::Comment { data } => {
                self.insert_comment(data, None);
                Outcome::Done
            }
            Token::Doctype(_) => {
                self.err(errors, ParseErrorCode::UnexpectedDoctype);
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "html" => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::StartTag(tag)
                if matches!(tag.name.as_str(), "base" | "basefont" | "bgsound" | "link" | "meta") =>
            {
                // Encoding changes from <meta charset> are out of scope: the
                // caller's declared charset is authoritative.
                self.insert_void_html_element(&tag);
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "title" => {
                self.parse_generic_text(&tag, tokenizer, State::Rcdata, errors);
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "noscript" && self.scripting => {
                self.parse_generic_text(&tag, tokenizer, State::Rawtext, errors);
                Outcome::Done
            }
            Token::StartTag(tag) if matches!(tag.name.as_str(), "noframes" | "style") => {
                self.parse_generic_text(&tag, tokenizer, State::Rawtext, errors);
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "noscript" => {
                self.insert_html_element(&tag, errors);
                self.mode = InsertionMode::InHeadNoscript;
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "script" => {
                self.insert_html_element(&tag, errors);
                tokenizer.set_state(State::ScriptData);
                self.original_mode = self.mode;
                self.mode = InsertionMode::Text;
                Outcome::Done
            }
            Token::EndTag(tag) if tag.name == "head" => {
                self.open.pop();
                self.mode = InsertionMode::AfterHead;
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "template" => {
                self.insert_html_element(&tag, errors);
                self.formatting.push_marker();
                self.frameset_ok = false;
                self.mode = InsertionMode::InTemplate;
                self.template_modes.push(InsertionMode::InTemplate);
                Outcome::Done
            }
            Token::EndTag(tag) if tag.name == "template" => {
                self.handle_template_end_tag(errors);
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "head" => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                Outcome::Done
            }
            Token::EndTag(ref tag)
                if !matches!(tag.name.as_str(), "body" | "html" | "br") =>
            {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            other => {
                self.open.pop();
                self.mode = InsertionMode::AfterHead;
                Outcome::Reprocess(other)
            }
        }
    }

    pub(super) fn handle_template_end_tag(&mut self, errors: &mut ErrorSink) {
        let has_template = self
            .open
            .iter()
            .any(|id| self.doc.is_html_element(id, "template"));
        if !has_template {
            self.err(errors, ParseErrorCode::UnexpectedEndTag);
            return;
        }
        self.generate_all_implied_end_tags_thoroughly();
        if !self.current_is_html("template") {
            self.err(errors, ParseErrorCode::MisnestedTag);
        }
        self.open.pop_until_one_of(&self.doc, &["template"]);
        self.formatting.clear_to_last_marker();
        self.template_modes.pop();
        self.reset_insertion_mode();
    }

    // --- InHeadNoscript ---

    pub(super) fn mode_in_head_noscript(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::Doctype(_) => {
                self.err(errors, ParseErrorCode::UnexpectedDoctype);
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "html" => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::EndTag(tag) if tag.name == "noscript" => {
                self.open.pop();
                self.mode = InsertionMode::InHead;
                Outcome::Done
            }
            ref t if t.is_whitespace() => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::Comment { .. } => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "basefont" | "bgsound" | "link" | "meta" | "noframes" | "style"
                ) =>
            {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::StartTag(ref tag) if tag.name == "noscript" => {
                self.err(errors, ParseErrorCode::NestedNoscriptInHead);
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "head" => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                Outcome::Done
            }
            Token::EndTag(ref tag) if tag.name != "br" => {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            other => {
                self.err(errors, ParseErrorCode::UnexpectedCharacter);
                self.open.pop();
                self.mode = InsertionMode::InHead;
                Outcome::Reprocess(other)
            }
        }
    }

    // --- AfterHead ---

    pub(super) fn mode_after_head(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::Character { scalar } if is_ws_char(scalar) => {
                self.insert_character(scalar);
                Outcome::Done
            }
            Token::Comment { data } => {
                self.insert_comment(data, None);
                Outcome::Done
            }
            Token::Doctype(_) => {
                self.err(errors, ParseErrorCode::UnexpectedDoctype);
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "html" => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::StartTag(tag) if tag.name == "body" => {
                let id = self.insert_html_element(&tag, errors);
                self.record_body(id);
                self.frameset_ok = false;
                self.mode = InsertionMode::InBody;
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "frameset" => {
                self.insert_html_element(&tag, errors);
                self.mode = InsertionMode::InFrameset;
                Outcome::Done
            }
            Token::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes" | "script"
                        | "style" | "template" | "title"
                ) =>
            {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                let Some(head) = self.head else {
                    return Outcome::Done;
                };
                self.open.push(head);
                let outcome = self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors);
                self.open.remove(head);
                outcome
            }
            Token::EndTag(ref tag) if tag.name == "template" => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::StartTag(ref tag) if tag.name == "head" => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                Outcome::Done
            }
            Token::EndTag(ref tag)
                if !matches!(tag.name.as_str(), "body" | "html" | "br") =>
            {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            other => {
                let id = self.insert_html_element(&synth_tag("body"), errors);
                self.record_body(id);
                self.mode = InsertionMode::InBody;
                Outcome::Reprocess(other)
            }
        }
    }

    // --- InBody ---

    pub(super) fn mode_in_body(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::Character { scalar: '\0' } => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                Outcome::Done
            }
            Token::Character { scalar } => {
                self.reconstruct_active_formatting_elements(errors);
                self.insert_character(scalar);
                if !is_ws_char(scalar) {
                    self.frameset_ok = false;
                }
                Outcome::Done
            }
            Token::Comment { data } => {
                self.insert_comment(data, None);
                Outcome::Done
            }
            Token::Doctype(_) => {
                self.err(errors, ParseErrorCode::UnexpectedDoctype);
                Outcome::Done
            }
            Token::StartTag(tag) => self.in_body_start_tag(tag, tokenizer, errors),
            Token::EndTag(tag) => self.in_body_end_tag(tag, tokenizer, errors),
            Token::Eof => {
                if !self.template_modes.is_empty() {
                    return self.process_in_mode(InsertionMode::InTemplate, Token::Eof, tokenizer, errors);
                }
                let irregular = self.open.iter().any(|id| {
                    self.doc
                        .elem(id)
                        .is_some_and(|e| {
                            e.namespace != Namespace::Html
                                || !ALLOWED_OPEN_AT_EOF.contains(&e.local.as_str())
                        })
                });
                if irregular {
                    self.err(errors, ParseErrorCode::UnexpectedEof);
                }
                self.stop_parsing();
                Outcome::Done
            }
        }
    }

    fn in_body_start_tag(
        &mut self,
        tag: TagToken,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        // Matching on an owned copy keeps `tag` movable inside the arms.
        let tag_name = tag.name.clone();
        match tag_name.as_str() {
            "html" => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                let in_template = self
                    .open
                    .iter()
                    .any(|id| self.doc.is_html_element(id, "template"));
                if !in_template
                    && let Some(root) = self.open.first()
                {
                    self.merge_attributes(root, &tag);
                }
                Outcome::Done
            }
            "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes" | "script" | "style"
            | "template" | "title" => {
                self.process_in_mode(InsertionMode::InHead, Token::StartTag(tag), tokenizer, errors)
            }
            "body" => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                let second = self.open.get(1);
                let second_is_body = second
                    .is_some_and(|id| self.doc.is_html_element(id, "body"));
                let in_template = self
                    .open
                    .iter()
                    .any(|id| self.doc.is_html_element(id, "template"));
                if self.open.len() == 1 || !second_is_body || in_template {
                    return Outcome::Done;
                }
                self.frameset_ok = false;
                if let Some(body) = second {
                    self.merge_attributes(body, &tag);
                }
                Outcome::Done
            }
            "frameset" => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                let second_is_body = self
                    .open
                    .get(1)
                    .is_some_and(|id| self.doc.is_html_element(id, "body"));
                if self.open.len() == 1 || !second_is_body || !self.frameset_ok {
                    return Outcome::Done;
                }
                // Replace the body with the frameset.
                if let Some(body) = self.open.get(1) {
                    self.doc.detach(body);
                }
                self.open.truncate(1);
                self.insert_html_element(&tag, errors);
                self.mode = InsertionMode::InFrameset;
                Outcome::Done
            }
            name if BLOCK_CONTAINERS.contains(&name) => {
                if self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.close_p_element(errors);
                }
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
            name if HEADINGS.contains(&name) => {
                if self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.close_p_element(errors);
                }
                if self
                    .current_node()
                    .and_then(|id| self.doc.elem(id))
                    .is_some_and(|e| {
                        e.namespace == Namespace::Html && HEADINGS.contains(&e.local.as_str())
                    })
                {
                    self.err(errors, ParseErrorCode::UnexpectedStartTag);
                    self.open.pop();
                }
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
            "pre" | "listing" => {
                if self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.close_p_element(errors);
                }
                self.insert_html_element(&tag, errors);
                self.ignore_next_lf = true;
                self.frameset_ok = false;
                Outcome::Done
            }
            "form" => {
                let in_template = self
                    .open
                    .iter()
                    .any(|id| self.doc.is_html_element(id, "template"));
                if self.form.is_some() && !in_template {
                    self.err(errors, ParseErrorCode::UnexpectedStartTag);
                    return Outcome::Done;
                }
                if self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.close_p_element(errors);
                }
                let id = self.insert_html_element(&tag, errors);
                if !in_template {
                    self.form = Some(id);
                }
                Outcome::Done
            }
            "li" => {
                self.frameset_ok = false;
                self.close_open_list_items(&["li"], errors);
                if self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.close_p_element(errors);
                }
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
            "dd" | "dt" => {
                self.frameset_ok = false;
                self.close_open_list_items(&["dd", "dt"], errors);
                if self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.close_p_element(errors);
                }
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
            "plaintext" => {
                if self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.close_p_element(errors);
                }
                self.insert_html_element(&tag, errors);
                tokenizer.set_state(State::Plaintext);
                Outcome::Done
            }
            "button" => {
                if self.open.has_in_scope(&self.doc, Scope::Default, "button") {
                    self.err(errors, ParseErrorCode::UnexpectedStartTag);
                    self.generate_implied_end_tags(None);
                    self.open.pop_until_one_of(&self.doc, &["button"]);
                }
                self.reconstruct_active_formatting_elements(errors);
                self.insert_html_element(&tag, errors);
                self.frameset_ok = false;
                Outcome::Done
            }
            "a" => {
                if let Some((_, id, _)) = self.formatting.find_after_last_marker("a") {
                    self.err(errors, ParseErrorCode::MisnestedTag);
                    let _ = self.adoption_agency("a", errors);
                    self.formatting.remove_by_id(id);
                    self.open.remove(id);
                }
                self.reconstruct_active_formatting_elements(errors);
                let id = self.insert_html_element(&tag, errors);
                self.formatting.push_element(id, tag);
                Outcome::Done
            }
            name if SIMPLE_FORMATTING.contains(&name) => {
                self.reconstruct_active_formatting_elements(errors);
                let id = self.insert_html_element(&tag, errors);
                self.formatting.push_element(id, tag);
                Outcome::Done
            }
            "nobr" => {
                self.reconstruct_active_formatting_elements(errors);
                if self.open.has_in_scope(&self.doc, Scope::Default, "nobr") {
                    self.err(errors, ParseErrorCode::MisnestedTag);
                    let _ = self.adoption_agency("nobr", errors);
                    self.reconstruct_active_formatting_elements(errors);
                }
                let id = self.insert_html_element(&tag, errors);
                self.formatting.push_element(id, tag);
                Outcome::Done
            }
            "applet" | "marquee" | "object" => {
                self.reconstruct_active_formatting_elements(errors);
                self.insert_html_element(&tag, errors);
                self.formatting.push_marker();
                self.frameset_ok = false;
                Outcome::Done
            }
            "table" => {
                // Quirks mode is recorded on the document but does not vary
                // parsing here; the p element closes unconditionally.
                if self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.close_p_element(errors);
                }
                self.insert_html_element(&tag, errors);
                self.frameset_ok = false;
                self.mode = InsertionMode::InTable;
                Outcome::Done
            }
            "area" | "br" | "embed" | "img" | "keygen" | "wbr" => {
                self.reconstruct_active_formatting_elements(errors);
                self.insert_void_html_element(&tag);
                self.frameset_ok = false;
                Outcome::Done
            }
            "input" => {
                self.reconstruct_active_formatting_elements(errors);
                let hidden = tag
                    .attr("type")
                    .is_some_and(|v| v.eq_ignore_ascii_case("hidden"));
                self.insert_void_html_element(&tag);
                if !hidden {
                    self.frameset_ok = false;
                }
                Outcome::Done
            }
            "param" | "source" | "track" => {
                self.insert_void_html_element(&tag);
                Outcome::Done
            }
            "hr" => {
                if self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.close_p_element(errors);
                }
                self.insert_void_html_element(&tag);
                self.frameset_ok = false;
                Outcome::Done
            }
            "image" => {
                // Historical fixup: retokenize as img.
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                let mut tag = tag;
                tag.name = "img".to_string();
                Outcome::Reprocess(Token::StartTag(tag))
            }
            "textarea" => {
                self.insert_html_element(&tag, errors);
                self.ignore_next_lf = true;
                tokenizer.set_state(State::Rcdata);
                self.original_mode = self.mode;
                self.frameset_ok = false;
                self.mode = InsertionMode::Text;
                Outcome::Done
            }
            "xmp" => {
                if self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.close_p_element(errors);
                }
                self.reconstruct_active_formatting_elements(errors);
                self.frameset_ok = false;
                self.parse_generic_text(&tag, tokenizer, State::Rawtext, errors);
                Outcome::Done
            }
            "iframe" => {
                self.frameset_ok = false;
                self.parse_generic_text(&tag, tokenizer, State::Rawtext, errors);
                Outcome::Done
            }
            "noembed" => {
                self.parse_generic_text(&tag, tokenizer, State::Rawtext, errors);
                Outcome::Done
            }
            "noscript" if self.scripting => {
                self.parse_generic_text(&tag, tokenizer, State::Rawtext, errors);
                Outcome::Done
            }
            "select" => {
                self.reconstruct_active_formatting_elements(errors);
                self.insert_html_element(&tag, errors);
                self.frameset_ok = false;
                self.mode = match self.mode {
                    InsertionMode::InTable
                    | InsertionMode::InCaption
                    | InsertionMode::InTableBody
                    | InsertionMode::InRow
                    | InsertionMode::InCell => InsertionMode::InSelectInTable,
                    _ => InsertionMode::InSelect,
                };
                Outcome::Done
            }
            "optgroup" | "option" => {
                if self.current_is_html("option") {
                    self.open.pop();
                }
                self.reconstruct_active_formatting_elements(errors);
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
            "rb" | "rtc" => {
                if self.open.has_in_scope(&self.doc, Scope::Default, "ruby") {
                    self.generate_implied_end_tags(None);
                    if !self.current_is_html("ruby") {
                        self.err(errors, ParseErrorCode::MisnestedTag);
                    }
                }
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
            "rp" | "rt" => {
                if self.open.has_in_scope(&self.doc, Scope::Default, "ruby") {
                    self.generate_implied_end_tags(Some("rtc"));
                    if !(self.current_is_html("ruby") || self.current_is_html("rtc")) {
                        self.err(errors, ParseErrorCode::MisnestedTag);
                    }
                }
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
            "math" => {
                self.reconstruct_active_formatting_elements(errors);
                self.insert_foreign_for_token(tag, Namespace::MathMl);
                Outcome::Done
            }
            "svg" => {
                self.reconstruct_active_formatting_elements(errors);
                self.insert_foreign_for_token(tag, Namespace::Svg);
                Outcome::Done
            }
            "caption" | "col" | "colgroup" | "frame" | "head" | "tbody" | "td" | "tfoot"
            | "th" | "thead" | "tr" => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                Outcome::Done
            }
            _ => {
                self.reconstruct_active_formatting_elements(errors);
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
        }
    }

    /// The li/dd/dt stack walk shared by their start tags.
    fn close_open_list_items(&mut self, targets: &[&str], errors: &mut ErrorSink) {
        for id in self.open.iter().rev().collect::<Vec<_>>() {
            let Some(elem) = self.doc.elem(id) else {
                continue;
            };
            if elem.namespace == Namespace::Html && targets.contains(&elem.local.as_str()) {
                let name = elem.local.clone();
                self.generate_implied_end_tags(Some(&name));
                if !self.current_is_html(&name) {
                    self.err(errors, ParseErrorCode::MisnestedTag);
                }
                self.open.pop_until_one_of(&self.doc, &[name.as_str()]);
                return;
            }
            let blocking = is_special(&self.doc, id)
                && !(elem.namespace == Namespace::Html
                    && matches!(elem.local.as_str(), "address" | "div" | "p"));
            if blocking {
                return;
            }
        }
    }

    fn in_body_end_tag(
        &mut self,
        tag: TagToken,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        let tag_name = tag.name.clone();
        match tag_name.as_str() {
            "template" => {
                self.process_in_mode(InsertionMode::InHead, Token::EndTag(tag), tokenizer, errors)
            }
            "body" => {
                if !self.open.has_in_scope(&self.doc, Scope::Default, "body") {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.check_leftover_open_elements(errors);
                self.mode = InsertionMode::AfterBody;
                Outcome::Done
            }
            "html" => {
                if !self.open.has_in_scope(&self.doc, Scope::Default, "body") {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.check_leftover_open_elements(errors);
                self.mode = InsertionMode::AfterBody;
                Outcome::Reprocess(Token::EndTag(tag))
            }
            "address" | "article" | "aside" | "blockquote" | "button" | "center" | "details"
            | "dialog" | "dir" | "div" | "dl" | "fieldset" | "figcaption" | "figure" | "footer"
            | "header" | "hgroup" | "listing" | "main" | "menu" | "nav" | "ol" | "pre"
            | "search" | "section" | "summary" | "ul" => {
                let name = tag.name.as_str();
                if !self.open.has_in_scope(&self.doc, Scope::Default, name) {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.generate_implied_end_tags(None);
                if !self.current_is_html(name) {
                    self.err(errors, ParseErrorCode::MisnestedTag);
                }
                self.open.pop_until_one_of(&self.doc, &[name]);
                Outcome::Done
            }
            "form" => {
                self.handle_form_end_tag(errors);
                Outcome::Done
            }
            "p" => {
                if !self.open.has_in_scope(&self.doc, Scope::Button, "p") {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    self.insert_html_element(&synth_tag("p"), errors);
                }
                self.close_p_element(errors);
                Outcome::Done
            }
            "li" => {
                if !self.open.has_in_scope(&self.doc, Scope::ListItem, "li") {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.generate_implied_end_tags(Some("li"));
                if !self.current_is_html("li") {
                    self.err(errors, ParseErrorCode::MisnestedTag);
                }
                self.open.pop_until_one_of(&self.doc, &["li"]);
                Outcome::Done
            }
            "dd" | "dt" => {
                let name = tag.name.as_str();
                if !self.open.has_in_scope(&self.doc, Scope::Default, name) {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.generate_implied_end_tags(Some(name));
                if !self.current_is_html(name) {
                    self.err(errors, ParseErrorCode::MisnestedTag);
                }
                self.open.pop_until_one_of(&self.doc, &[name]);
                Outcome::Done
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                if !self
                    .open
                    .has_any_in_scope(&self.doc, Scope::Default, HEADINGS)
                {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.generate_implied_end_tags(None);
                if !self.current_is_html(tag.name.as_str()) {
                    self.err(errors, ParseErrorCode::MisnestedTag);
                }
                self.open.pop_until_one_of(&self.doc, HEADINGS);
                Outcome::Done
            }
            "a" | "b" | "big" | "code" | "em" | "font" | "i" | "nobr" | "s" | "small"
            | "strike" | "strong" | "tt" | "u" => {
                if self.adoption_agency(tag.name.as_str(), errors).is_none() {
                    self.any_other_end_tag(tag.name.as_str(), errors);
                }
                Outcome::Done
            }
            "applet" | "marquee" | "object" => {
                let name = tag.name.as_str();
                if !self.open.has_in_scope(&self.doc, Scope::Default, name) {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.generate_implied_end_tags(None);
                if !self.current_is_html(name) {
                    self.err(errors, ParseErrorCode::MisnestedTag);
                }
                self.open.pop_until_one_of(&self.doc, &[name]);
                self.formatting.clear_to_last_marker();
                Outcome::Done
            }
            "br" => {
                // Treated as a br start tag.
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                self.reconstruct_active_formatting_elements(errors);
                self.insert_void_html_element(&synth_tag("br"));
                self.frameset_ok = false;
                Outcome::Done
            }
            name => {
                self.any_other_end_tag(name, errors);
                Outcome::Done
            }
        }
    }

    fn handle_form_end_tag(&mut self, errors: &mut ErrorSink) {
        let in_template = self
            .open
            .iter()
            .any(|id| self.doc.is_html_element(id, "template"));
        if !in_template {
            let node = self.form.take();
            let Some(node) = node else {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                return;
            };
            if !self.open.has_node_in_scope(&self.doc, Scope::Default, node) {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                return;
            }
            self.generate_implied_end_tags(None);
            if self.current_node() != Some(node) {
                self.err(errors, ParseErrorCode::MisnestedTag);
            }
            // Removed from the stack wherever it is, not popped-until.
            self.open.remove(node);
        } else {
            if !self.open.has_in_scope(&self.doc, Scope::Default, "form") {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                return;
            }
            self.generate_implied_end_tags(None);
            if !self.current_is_html("form") {
                self.err(errors, ParseErrorCode::MisnestedTag);
            }
            self.open.pop_until_one_of(&self.doc, &["form"]);
        }
    }

    /// "Any other end tag" in InBody: walk the stack for a match, bounded by
    /// special elements.
    pub(super) fn any_other_end_tag(&mut self, name: &str, errors: &mut ErrorSink) {
        let mut index = self.open.len();
        while index > 0 {
            index -= 1;
            let Some(node) = self.open.get(index) else {
                break;
            };
            if self.doc.is_html_element(node, name) {
                self.generate_implied_end_tags(Some(name));
                if self.current_node() != Some(node) {
                    self.err(errors, ParseErrorCode::MisnestedTag);
                }
                self.open.pop_until_node(node);
                return;
            }
            if is_special(&self.doc, node) {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                return;
            }
        }
    }

    fn check_leftover_open_elements(&mut self, errors: &mut ErrorSink) {
        let irregular = self.open.iter().any(|id| {
            self.doc.elem(id).is_some_and(|e| {
                e.namespace != Namespace::Html || !ALLOWED_OPEN_AT_EOF.contains(&e.local.as_str())
            })
        });
        if irregular {
            self.err(errors, ParseErrorCode::UnexpectedEndTag);
        }
    }

    // --- Text ---

    pub(super) fn mode_text(&mut self, token: Token, errors: &mut ErrorSink) -> Outcome {
        match token {
            Token::Character { scalar } => {
                self.insert_character(scalar);
                Outcome::Done
            }
            Token::Eof => {
                self.err(errors, ParseErrorCode::UnexpectedEof);
                if let Some(current) = self.current_node()
                    && self.doc.is_html_element(current, "script")
                    && let Some(elem) = self.doc.elem_mut(current)
                {
                    elem.flags.already_started = true;
                }
                self.open.pop();
                self.mode = self.original_mode;
                Outcome::Reprocess(Token::Eof)
            }
            Token::EndTag(_) => {
                // No scripts execute, so </script> is plain element closure.
                self.open.pop();
                self.mode = self.original_mode;
                Outcome::Done
            }
            other => {
                debug_assert!(false, "unexpected token in Text mode: {other:?}");
                Outcome::Done
            }
        }
    }
}

/// Quirks-mode determination from the DOCTYPE token.
pub(super) fn quirks_mode_for(doctype: &DoctypeToken) -> QuirksMode {
    const FULL_QUIRKS_PREFIXES: &[&str] = &[
        "+//silmaril//dtd html pro v0r11 19970101//",
        "-//as//dtd html 3.0 aswedit + extensions//",
        "-//advasoft ltd//dtd html 3.0 aswedit + extensions//",
        "-//ietf//dtd html 2.0 level 1//",
        "-//ietf//dtd html 2.0 level 2//",
        "-//ietf//dtd html 2.0 strict level 1//",
        "-//ietf//dtd html 2.0 strict level 2//",
        "-//ietf//dtd html 2.0 strict//",
        "-//ietf//dtd html 2.0//",
        "-//ietf//dtd html 2.1e//",
        "-//ietf//dtd html 3.0//",
        "-//ietf//dtd html 3.2 final//",
        "-//ietf//dtd html 3.2//",
        "-//ietf//dtd html 3//",
        "-//ietf//dtd html level 0//",
        "-//ietf//dtd html level 1//",
        "-//ietf//dtd html level 2//",
        "-//ietf//dtd html level 3//",
        "-//ietf//dtd html strict level 0//",
        "-//ietf//dtd html strict level 1//",
        "-//ietf//dtd html strict level 2//",
        "-//ietf//dtd html strict level 3//",
        "-//ietf//dtd html strict//",
        "-//ietf//dtd html//",
        "-//metrius//dtd metrius presentational//",
        "-//microsoft//dtd internet explorer 2.0 html strict//",
        "-//microsoft//dtd internet explorer 2.0 html//",
        "-//microsoft//dtd internet explorer 2.0 tables//",
        "-//microsoft//dtd internet explorer 3.0 html strict//",
        "-//microsoft//dtd internet explorer 3.0 html//",
        "-//microsoft//dtd internet explorer 3.0 tables//",
        "-//netscape comm. corp.//dtd html//",
        "-//netscape comm. corp.//dtd strict html//",
        "-//o'reilly and associates//dtd html 2.0//",
        "-//o'reilly and associates//dtd html extended 1.0//",
        "-//o'reilly and associates//dtd html extended relaxed 1.0//",
        "-//sq//dtd html 2.0 hotmetal + extensions//",
        "-//softquad software//dtd hotmetal pro 6.0::19990601::extensions to html 4.0//",
        "-//softquad//dtd hotmetal pro 4.0::19971010::extensions to html 4.0//",
        "-//spyglass//dtd html 2.0 extended//",
        "-//sun microsystems corp.//dtd hotjava html//",
        "-//sun microsystems corp.//dtd hotjava strict html//",
        "-//w3c//dtd html 3 1995-03-24//",
        "-//w3c//dtd html 3.2 draft//",
        "-//w3c//dtd html 3.2 final//",
        "-//w3c//dtd html 3.2//",
        "-//w3c//dtd html 3.2s draft//",
        "-//w3c//dtd html 4.0 frameset//",
        "-//w3c//dtd html 4.0 transitional//",
        "-//w3c//dtd html experimental 19960712//",
        "-//w3c//dtd html experimental 970421//",
        "-//w3c//dtd w3 html//",
        "-//w3o//dtd w3 html 3.0//",
        "-//webtechs//dtd mozilla html 2.0//",
        "-//webtechs//dtd mozilla html//",
    ];
    const FULL_QUIRKS_EXACT: &[&str] = &[
        "-//w3o//dtd w3 html strict 3.0//en//",
        "-/w3c/dtd html 4.0 transitional/en",
        "html",
    ];
    const LIMITED_QUIRKS_PREFIXES: &[&str] = &[
        "-//w3c//dtd xhtml 1.0 frameset//",
        "-//w3c//dtd xhtml 1.0 transitional//",
    ];
    const SYSTEMLESS_QUIRKS_PREFIXES: &[&str] = &[
        "-//w3c//dtd html 4.01 frameset//",
        "-//w3c//dtd html 4.01 transitional//",
    ];

    if doctype.force_quirks || doctype.name.as_deref() != Some("html") {
        return QuirksMode::Quirks;
    }
    let public = doctype
        .public_id
        .as_deref()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let system = doctype
        .system_id
        .as_deref()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if FULL_QUIRKS_EXACT.contains(&public.as_str())
        || system == "http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd"
        || FULL_QUIRKS_PREFIXES.iter().any(|p| public.starts_with(p))
        || (doctype.system_id.is_none()
            && SYSTEMLESS_QUIRKS_PREFIXES.iter().any(|p| public.starts_with(p)))
    {
        return QuirksMode::Quirks;
    }
    if LIMITED_QUIRKS_PREFIXES.iter().any(|p| public.starts_with(p))
        || (doctype.system_id.is_some()
            && SYSTEMLESS_QUIRKS_PREFIXES.iter().any(|p| public.starts_with(p)))
    {
        return QuirksMode::LimitedQuirks;
    }
    QuirksMode::NoQuirks
}

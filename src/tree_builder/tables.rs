//! Insertion-mode handlers: the table-family sub-machine, select, template,
//! frameset, and the trailing after-modes.
//!
//! Foster parenting is enabled only around the InTable anything-else
//! delegation; everything else inserts at the current node.

use super::rules::{is_ws_char, synth_tag};
use super::stack::Scope;
use super::{InsertionMode, Outcome, TreeBuilder};
use crate::error::{ErrorSink, ParseErrorCode};
use crate::token::Token;
use crate::tokenizer::Tokenizer;

const TABLE_CONTEXT: &[&str] = &["table", "template", "html"];
const TBODY_CONTEXT: &[&str] = &["tbody", "tfoot", "thead", "template", "html"];
const ROW_CONTEXT: &[&str] = &["tr", "template", "html"];

impl TreeBuilder {
    // --- InTable ---

    pub(super) fn mode_in_table(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::Character { .. }
                if self
                    .current_node()
                    .and_then(|id| self.doc.elem(id))
                    .is_some_and(|e| {
                        matches!(
                            e.local.as_str(),
                            "table" | "tbody" | "tfoot" | "thead" | "tr"
                        )
                    }) =>
            {
                self.pending_table_text.clear();
                self.original_mode = self.mode;
                self.mode = InsertionMode::InTableText;
                Outcome::Reprocess(token)
            }
            Token::Comment { data } => {
                self.insert_comment(data, None);
                Outcome::Done
            }
            Token::Doctype(_) => {
                self.err(errors, ParseErrorCode::UnexpectedDoctype);
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "caption" => {
                self.open.clear_back_to(&self.doc, TABLE_CONTEXT);
                self.formatting.push_marker();
                self.insert_html_element(&tag, errors);
                self.mode = InsertionMode::InCaption;
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "colgroup" => {
                self.open.clear_back_to(&self.doc, TABLE_CONTEXT);
                self.insert_html_element(&tag, errors);
                self.mode = InsertionMode::InColumnGroup;
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "col" => {
                self.open.clear_back_to(&self.doc, TABLE_CONTEXT);
                self.insert_html_element(&synth_tag("colgroup"), errors);
                self.mode = InsertionMode::InColumnGroup;
                Outcome::Reprocess(token)
            }
            Token::StartTag(tag) if matches!(tag.name.as_str(), "tbody" | "tfoot" | "thead") => {
                self.open.clear_back_to(&self.doc, TABLE_CONTEXT);
                self.insert_html_element(&tag, errors);
                self.mode = InsertionMode::InTableBody;
                Outcome::Done
            }
            Token::StartTag(ref tag) if matches!(tag.name.as_str(), "td" | "th" | "tr") => {
                self.open.clear_back_to(&self.doc, TABLE_CONTEXT);
                self.insert_html_element(&synth_tag("tbody"), errors);
                self.mode = InsertionMode::InTableBody;
                Outcome::Reprocess(token)
            }
            Token::StartTag(ref tag) if tag.name == "table" => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                if !self.open.has_in_scope(&self.doc, Scope::Table, "table") {
                    return Outcome::Done;
                }
                self.open.pop_until_one_of(&self.doc, &["table"]);
                self.reset_insertion_mode();
                Outcome::Reprocess(token)
            }
            Token::EndTag(tag) if tag.name == "table" => {
                if !self.open.has_in_scope(&self.doc, Scope::Table, "table") {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.open.pop_until_one_of(&self.doc, &["table"]);
                self.reset_insertion_mode();
                Outcome::Done
            }
            Token::EndTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "body" | "caption" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot"
                        | "th" | "thead" | "tr"
                ) =>
            {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            Token::StartTag(ref tag) if matches!(tag.name.as_str(), "style" | "script" | "template") => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::EndTag(ref tag) if tag.name == "template" => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::StartTag(tag)
                if tag.name == "input"
                    && tag
                        .attr("type")
                        .is_some_and(|v| v.eq_ignore_ascii_case("hidden")) =>
            {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                self.insert_void_html_element(&tag);
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "form" => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                let in_template = self
                    .open
                    .iter()
                    .any(|id| self.doc.is_html_element(id, "template"));
                if in_template || self.form.is_some() {
                    return Outcome::Done;
                }
                let id = self.insert_html_element(&tag, errors);
                self.form = Some(id);
                self.open.pop();
                Outcome::Done
            }
            Token::Eof => self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors),
            other => {
                // Foster-parented fallback: table-misplaced content routes
                // through InBody with redirected insertion.
                self.err(errors, ParseErrorCode::UnexpectedCharacter);
                self.foster_parenting = true;
                let outcome = self.process_in_mode(InsertionMode::InBody, other, tokenizer, errors);
                self.foster_parenting = false;
                outcome
            }
        }
    }

    // --- InTableText ---

    pub(super) fn mode_in_table_text(
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
                self.pending_table_text.push(scalar);
                Outcome::Done
            }
            other => {
                let pending = std::mem::take(&mut self.pending_table_text);
                if pending.iter().any(|&c| !is_ws_char(c)) {
                    // Reprocess the pending run through InBody with foster
                    // parenting, as if the table had never seen it.
                    self.err(errors, ParseErrorCode::UnexpectedCharacter);
                    self.foster_parenting = true;
                    for scalar in pending {
                        let outcome = self.process_in_mode(
                            InsertionMode::InBody,
                            Token::Character { scalar },
                            tokenizer,
                            errors,
                        );
                        debug_assert!(matches!(outcome, Outcome::Done));
                    }
                    self.foster_parenting = false;
                } else {
                    for scalar in pending {
                        self.insert_character(scalar);
                    }
                }
                self.mode = self.original_mode;
                Outcome::Reprocess(other)
            }
        }
    }

    // --- InCaption ---

    pub(super) fn mode_in_caption(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::EndTag(ref tag) if tag.name == "caption" => {
                self.close_caption(errors);
                Outcome::Done
            }
            Token::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th" | "thead"
                        | "tr"
                ) =>
            {
                if self.close_caption(errors) {
                    Outcome::Reprocess(token)
                } else {
                    Outcome::Done
                }
            }
            Token::EndTag(ref tag) if tag.name == "table" => {
                if self.close_caption(errors) {
                    Outcome::Reprocess(token)
                } else {
                    Outcome::Done
                }
            }
            Token::EndTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "body" | "col" | "colgroup" | "html" | "tbody" | "td" | "tfoot" | "th"
                        | "thead" | "tr"
                ) =>
            {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            other => self.process_in_mode(InsertionMode::InBody, other, tokenizer, errors),
        }
    }

    fn close_caption(&mut self, errors: &mut ErrorSink) -> bool {
        if !self.open.has_in_scope(&self.doc, Scope::Table, "caption") {
            self.err(errors, ParseErrorCode::UnexpectedEndTag);
            return false;
        }
        self.generate_implied_end_tags(None);
        if !self.current_is_html("caption") {
            self.err(errors, ParseErrorCode::MisnestedTag);
        }
        self.open.pop_until_one_of(&self.doc, &["caption"]);
        self.formatting.clear_to_last_marker();
        self.mode = InsertionMode::InTable;
        true
    }

    // --- InColumnGroup ---

    pub(super) fn mode_in_column_group(
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
            Token::StartTag(tag) if tag.name == "col" => {
                self.insert_void_html_element(&tag);
                Outcome::Done
            }
            Token::EndTag(ref tag) if tag.name == "colgroup" => {
                if !self.current_is_html("colgroup") {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.open.pop();
                self.mode = InsertionMode::InTable;
                Outcome::Done
            }
            Token::EndTag(ref tag) if tag.name == "col" => {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "template" => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::EndTag(ref tag) if tag.name == "template" => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::Eof => self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors),
            other => {
                if !self.current_is_html("colgroup") {
                    self.err(errors, ParseErrorCode::UnexpectedCharacter);
                    return Outcome::Done;
                }
                self.open.pop();
                self.mode = InsertionMode::InTable;
                Outcome::Reprocess(other)
            }
        }
    }

    // --- InTableBody ---

    pub(super) fn mode_in_table_body(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::StartTag(tag) if tag.name == "tr" => {
                self.open.clear_back_to(&self.doc, TBODY_CONTEXT);
                self.insert_html_element(&tag, errors);
                self.mode = InsertionMode::InRow;
                Outcome::Done
            }
            Token::StartTag(ref tag) if matches!(tag.name.as_str(), "th" | "td") => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                self.open.clear_back_to(&self.doc, TBODY_CONTEXT);
                self.insert_html_element(&synth_tag("tr"), errors);
                self.mode = InsertionMode::InRow;
                Outcome::Reprocess(token)
            }
            Token::EndTag(tag) if matches!(tag.name.as_str(), "tbody" | "tfoot" | "thead") => {
                if !self.open.has_in_scope(&self.doc, Scope::Table, &tag.name) {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.open.clear_back_to(&self.doc, TBODY_CONTEXT);
                self.open.pop();
                self.mode = InsertionMode::InTable;
                Outcome::Done
            }
            Token::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead"
                ) =>
            {
                self.close_table_body_then_reprocess(token, errors)
            }
            Token::EndTag(ref tag) if tag.name == "table" => {
                self.close_table_body_then_reprocess(token, errors)
            }
            Token::EndTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th" | "tr"
                ) =>
            {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            other => self.process_in_mode(InsertionMode::InTable, other, tokenizer, errors),
        }
    }

    fn close_table_body_then_reprocess(
        &mut self,
        token: Token,
        errors: &mut ErrorSink,
    ) -> Outcome {
        let has_section = self
            .open
            .has_any_in_scope(&self.doc, Scope::Table, &["tbody", "thead", "tfoot"]);
        if !has_section {
            self.err(errors, ParseErrorCode::UnexpectedEndTag);
            return Outcome::Done;
        }
        self.open.clear_back_to(&self.doc, TBODY_CONTEXT);
        self.open.pop();
        self.mode = InsertionMode::InTable;
        Outcome::Reprocess(token)
    }

    // --- InRow ---

    pub(super) fn mode_in_row(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::StartTag(tag) if matches!(tag.name.as_str(), "th" | "td") => {
                self.open.clear_back_to(&self.doc, ROW_CONTEXT);
                self.insert_html_element(&tag, errors);
                self.mode = InsertionMode::InCell;
                self.formatting.push_marker();
                Outcome::Done
            }
            Token::EndTag(ref tag) if tag.name == "tr" => {
                if !self.open.has_in_scope(&self.doc, Scope::Table, "tr") {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.open.clear_back_to(&self.doc, ROW_CONTEXT);
                self.open.pop();
                self.mode = InsertionMode::InTableBody;
                Outcome::Done
            }
            Token::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "tfoot" | "thead" | "tr"
                ) =>
            {
                self.close_row_then_reprocess(token, errors)
            }
            Token::EndTag(ref tag) if tag.name == "table" => {
                self.close_row_then_reprocess(token, errors)
            }
            Token::EndTag(ref tag) if matches!(tag.name.as_str(), "tbody" | "tfoot" | "thead") => {
                if !self.open.has_in_scope(&self.doc, Scope::Table, &tag.name) {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                if !self.open.has_in_scope(&self.doc, Scope::Table, "tr") {
                    return Outcome::Done;
                }
                self.open.clear_back_to(&self.doc, ROW_CONTEXT);
                self.open.pop();
                self.mode = InsertionMode::InTableBody;
                Outcome::Reprocess(token)
            }
            Token::EndTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "body" | "caption" | "col" | "colgroup" | "html" | "td" | "th"
                ) =>
            {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            other => self.process_in_mode(InsertionMode::InTable, other, tokenizer, errors),
        }
    }

    fn close_row_then_reprocess(&mut self, token: Token, errors: &mut ErrorSink) -> Outcome {
        if !self.open.has_in_scope(&self.doc, Scope::Table, "tr") {
            self.err(errors, ParseErrorCode::UnexpectedEndTag);
            return Outcome::Done;
        }
        self.open.clear_back_to(&self.doc, ROW_CONTEXT);
        self.open.pop();
        self.mode = InsertionMode::InTableBody;
        Outcome::Reprocess(token)
    }

    // --- InCell ---

    pub(super) fn mode_in_cell(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::EndTag(tag) if matches!(tag.name.as_str(), "td" | "th") => {
                let name = tag.name.as_str();
                if !self.open.has_in_scope(&self.doc, Scope::Table, name) {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.generate_implied_end_tags(None);
                if !self.current_is_html(name) {
                    self.err(errors, ParseErrorCode::MisnestedTag);
                }
                self.open.pop_until_one_of(&self.doc, &[name]);
                self.formatting.clear_to_last_marker();
                self.mode = InsertionMode::InRow;
                Outcome::Done
            }
            Token::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "caption" | "col" | "colgroup" | "tbody" | "td" | "tfoot" | "th" | "thead"
                        | "tr"
                ) =>
            {
                if !self
                    .open
                    .has_any_in_scope(&self.doc, Scope::Table, &["td", "th"])
                {
                    self.err(errors, ParseErrorCode::UnexpectedStartTag);
                    return Outcome::Done;
                }
                self.close_cell(errors);
                Outcome::Reprocess(token)
            }
            Token::EndTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "body" | "caption" | "col" | "colgroup" | "html"
                ) =>
            {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            Token::EndTag(ref tag)
                if matches!(tag.name.as_str(), "table" | "tbody" | "tfoot" | "thead" | "tr") =>
            {
                if !self.open.has_in_scope(&self.doc, Scope::Table, &tag.name) {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.close_cell(errors);
                Outcome::Reprocess(token)
            }
            other => self.process_in_mode(InsertionMode::InBody, other, tokenizer, errors),
        }
    }

    fn close_cell(&mut self, errors: &mut ErrorSink) {
        self.generate_implied_end_tags(None);
        if !(self.current_is_html("td") || self.current_is_html("th")) {
            self.err(errors, ParseErrorCode::MisnestedTag);
        }
        self.open.pop_until_one_of(&self.doc, &["td", "th"]);
        self.formatting.clear_to_last_marker();
        self.mode = InsertionMode::InRow;
    }

    // --- InSelect ---

    pub(super) fn mode_in_select(
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
            Token::StartTag(tag) if tag.name == "option" => {
                if self.current_is_html("option") {
                    self.open.pop();
                }
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "optgroup" => {
                if self.current_is_html("option") {
                    self.open.pop();
                }
                if self.current_is_html("optgroup") {
                    self.open.pop();
                }
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "hr" => {
                if self.current_is_html("option") {
                    self.open.pop();
                }
                if self.current_is_html("optgroup") {
                    self.open.pop();
                }
                self.insert_void_html_element(&tag);
                Outcome::Done
            }
            Token::EndTag(ref tag) if tag.name == "optgroup" => {
                if self.current_is_html("option") {
                    let below_current = self.open.len().checked_sub(2).and_then(|i| self.open.get(i));
                    if below_current.is_some_and(|id| self.doc.is_html_element(id, "optgroup")) {
                        self.open.pop();
                    }
                }
                if self.current_is_html("optgroup") {
                    self.open.pop();
                } else {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                }
                Outcome::Done
            }
            Token::EndTag(ref tag) if tag.name == "option" => {
                if self.current_is_html("option") {
                    self.open.pop();
                } else {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                }
                Outcome::Done
            }
            Token::EndTag(ref tag) if tag.name == "select" => {
                if !self.open.has_in_scope(&self.doc, Scope::Select, "select") {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.open.pop_until_one_of(&self.doc, &["select"]);
                self.reset_insertion_mode();
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "select" => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                if self.open.has_in_scope(&self.doc, Scope::Select, "select") {
                    self.open.pop_until_one_of(&self.doc, &["select"]);
                    self.reset_insertion_mode();
                }
                Outcome::Done
            }
            Token::StartTag(ref tag) if matches!(tag.name.as_str(), "input" | "keygen" | "textarea") => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                if !self.open.has_in_scope(&self.doc, Scope::Select, "select") {
                    return Outcome::Done;
                }
                self.open.pop_until_one_of(&self.doc, &["select"]);
                self.reset_insertion_mode();
                Outcome::Reprocess(token)
            }
            Token::StartTag(ref tag) if matches!(tag.name.as_str(), "script" | "template") => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::EndTag(ref tag) if tag.name == "template" => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::Eof => self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors),
            _ => {
                self.err(errors, ParseErrorCode::UnexpectedCharacter);
                Outcome::Done
            }
        }
    }

    // --- InSelectInTable ---

    pub(super) fn mode_in_select_in_table(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        const TABLE_PARTS: &[&str] = &[
            "caption", "table", "tbody", "tfoot", "thead", "tr", "td", "th",
        ];
        match token {
            Token::StartTag(ref tag) if TABLE_PARTS.contains(&tag.name.as_str()) => {
                self.err(errors, ParseErrorCode::UnexpectedStartTag);
                self.open.pop_until_one_of(&self.doc, &["select"]);
                self.reset_insertion_mode();
                Outcome::Reprocess(token)
            }
            Token::EndTag(ref tag) if TABLE_PARTS.contains(&tag.name.as_str()) => {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                if !self.open.has_in_scope(&self.doc, Scope::Table, &tag.name) {
                    return Outcome::Done;
                }
                self.open.pop_until_one_of(&self.doc, &["select"]);
                self.reset_insertion_mode();
                Outcome::Reprocess(token)
            }
            other => self.process_in_mode(InsertionMode::InSelect, other, tokenizer, errors),
        }
    }

    // --- InTemplate ---

    pub(super) fn mode_in_template(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::Character { .. } | Token::Comment { .. } | Token::Doctype(_) => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::StartTag(ref tag)
                if matches!(
                    tag.name.as_str(),
                    "base" | "basefont" | "bgsound" | "link" | "meta" | "noframes" | "script"
                        | "style" | "template" | "title"
                ) =>
            {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::EndTag(ref tag) if tag.name == "template" => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::StartTag(ref tag)
                if matches!(tag.name.as_str(), "caption" | "colgroup" | "tbody" | "tfoot" | "thead") =>
            {
                self.switch_template_mode(InsertionMode::InTable);
                Outcome::Reprocess(token)
            }
            Token::StartTag(ref tag) if tag.name == "col" => {
                self.switch_template_mode(InsertionMode::InColumnGroup);
                Outcome::Reprocess(token)
            }
            Token::StartTag(ref tag) if tag.name == "tr" => {
                self.switch_template_mode(InsertionMode::InTableBody);
                Outcome::Reprocess(token)
            }
            Token::StartTag(ref tag) if matches!(tag.name.as_str(), "td" | "th") => {
                self.switch_template_mode(InsertionMode::InRow);
                Outcome::Reprocess(token)
            }
            Token::StartTag(_) => {
                self.switch_template_mode(InsertionMode::InBody);
                Outcome::Reprocess(token)
            }
            Token::EndTag(_) => {
                self.err(errors, ParseErrorCode::UnexpectedEndTag);
                Outcome::Done
            }
            Token::Eof => {
                let has_template = self
                    .open
                    .iter()
                    .any(|id| self.doc.is_html_element(id, "template"));
                if !has_template {
                    self.stop_parsing();
                    return Outcome::Done;
                }
                self.err(errors, ParseErrorCode::UnexpectedEof);
                self.open.pop_until_one_of(&self.doc, &["template"]);
                self.formatting.clear_to_last_marker();
                self.template_modes.pop();
                self.reset_insertion_mode();
                Outcome::Reprocess(Token::Eof)
            }
        }
    }

    fn switch_template_mode(&mut self, mode: InsertionMode) {
        self.template_modes.pop();
        self.template_modes.push(mode);
        self.mode = mode;
    }

    // --- AfterBody ---

    pub(super) fn mode_after_body(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            ref t if t.is_whitespace() => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::Comment { data } => {
                self.insert_comment_on_root(data);
                Outcome::Done
            }
            Token::Doctype(_) => {
                self.err(errors, ParseErrorCode::UnexpectedDoctype);
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "html" => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::EndTag(ref tag) if tag.name == "html" => {
                // Fragment parsing is out of scope, so this is unconditional.
                self.mode = InsertionMode::AfterAfterBody;
                Outcome::Done
            }
            Token::Eof => {
                self.stop_parsing();
                Outcome::Done
            }
            other => {
                self.err(errors, ParseErrorCode::UnexpectedCharacter);
                self.mode = InsertionMode::InBody;
                Outcome::Reprocess(other)
            }
        }
    }

    // --- InFrameset ---

    pub(super) fn mode_in_frameset(
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
            Token::StartTag(tag) if tag.name == "frameset" => {
                self.insert_html_element(&tag, errors);
                Outcome::Done
            }
            Token::EndTag(ref tag) if tag.name == "frameset" => {
                if self.open.len() == 1 {
                    self.err(errors, ParseErrorCode::UnexpectedEndTag);
                    return Outcome::Done;
                }
                self.open.pop();
                if !self.current_is_html("frameset") {
                    self.mode = InsertionMode::AfterFrameset;
                }
                Outcome::Done
            }
            Token::StartTag(tag) if tag.name == "frame" => {
                self.insert_void_html_element(&tag);
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "noframes" => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::Eof => {
                if self.open.len() != 1 {
                    self.err(errors, ParseErrorCode::UnexpectedEof);
                }
                self.stop_parsing();
                Outcome::Done
            }
            _ => {
                self.err(errors, ParseErrorCode::UnexpectedCharacter);
                Outcome::Done
            }
        }
    }

    // --- AfterFrameset ---

    pub(super) fn mode_after_frameset(
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
            Token::EndTag(ref tag) if tag.name == "html" => {
                self.mode = InsertionMode::AfterAfterFrameset;
                Outcome::Done
            }
            Token::StartTag(ref tag) if tag.name == "noframes" => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::Eof => {
                self.stop_parsing();
                Outcome::Done
            }
            _ => {
                self.err(errors, ParseErrorCode::UnexpectedCharacter);
                Outcome::Done
            }
        }
    }

    // --- AfterAfterBody ---

    pub(super) fn mode_after_after_body(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::Comment { data } => {
                self.insert_comment_on_document(data);
                Outcome::Done
            }
            Token::Doctype(_) => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            ref t if t.is_whitespace() => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::StartTag(ref tag) if tag.name == "html" => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::Eof => {
                self.stop_parsing();
                Outcome::Done
            }
            other => {
                self.err(errors, ParseErrorCode::UnexpectedCharacter);
                self.mode = InsertionMode::InBody;
                Outcome::Reprocess(other)
            }
        }
    }

    // --- AfterAfterFrameset ---

    pub(super) fn mode_after_after_frameset(
        &mut self,
        token: Token,
        tokenizer: &mut Tokenizer,
        errors: &mut ErrorSink,
    ) -> Outcome {
        match token {
            Token::Comment { data } => {
                self.insert_comment_on_document(data);
                Outcome::Done
            }
            Token::Doctype(_) => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            ref t if t.is_whitespace() => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::StartTag(ref tag) if tag.name == "html" => {
                self.process_in_mode(InsertionMode::InBody, token, tokenizer, errors)
            }
            Token::StartTag(ref tag) if tag.name == "noframes" => {
                self.process_in_mode(InsertionMode::InHead, token, tokenizer, errors)
            }
            Token::Eof => {
                self.stop_parsing();
                Outcome::Done
            }
            _ => {
                self.err(errors, ParseErrorCode::UnexpectedCharacter);
                Outcome::Done
            }
        }
    }
}

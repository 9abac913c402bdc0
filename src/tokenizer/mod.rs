//! Tokenizer: characters in, tokens out.
//!
//! An explicit state machine over the normalized input stream. Each state is
//! a dedicated handler; dispatch is a single match in `step`.
//!
//! Invariants:
//! - At most one tag, comment, or DOCTYPE token is in progress at a time.
//! - Tokens are emitted only where a state says so; emission order is input
//!   order. The name of the last emitted start tag is kept for the
//!   "appropriate end tag" test in the raw-text end-tag states.
//! - The tree builder may override the state between tokens (`set_state`);
//!   the drive loop guarantees the override lands before the next character
//!   is consumed, because `next_token` never steps past an available token.
//! - Malformed input never aborts the machine: every parse error is recorded
//!   and the state's recovery rule applies.

use crate::error::{ErrorSink, ParseErrorCode};
use crate::input::{CaseMode, InputStream};
use crate::token::{Attribute, DoctypeToken, TagToken, Token};
use std::collections::VecDeque;

mod charref;
mod raw;
mod states;
#[cfg(test)]
mod tests;

pub(crate) use states::State;

/// Tokenizer instrumentation counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TokenizerStats {
    pub(crate) steps: u64,
    pub(crate) state_transitions: u64,
    pub(crate) tokens_emitted: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TagKind {
    Start,
    End,
}

pub(crate) struct Tokenizer {
    input: InputStream,
    state: State,
    /// Set by Data/RCDATA/attribute-value states before entering the
    /// character-reference sub-machine; its terminating states restore it.
    return_state: State,
    /// Scratch for multi-character recognition: named references, raw-text
    /// end-tag names, `[CDATA[`, script double-escape probes.
    temp: String,
    char_ref_code: u32,

    tag_kind: TagKind,
    tag_name: String,
    tag_self_closing: bool,
    tag_attrs: Vec<Attribute>,
    attr_name: String,
    attr_value: String,
    attr_in_progress: bool,
    /// Current attribute duplicates an earlier one; its value chars are
    /// still accumulated but the attribute is discarded at commit.
    attr_dropped: bool,

    comment: String,
    doctype: DoctypeToken,

    last_start_tag: String,
    /// Whether `<![CDATA[` opens a real CDATA section. Mirrors "the adjusted
    /// current node is foreign"; the tree builder keeps it current.
    cdata_allowed: bool,

    queue: VecDeque<Token>,
    eof_emitted: bool,
    stats: TokenizerStats,
}

impl Tokenizer {
    pub(crate) fn new(input: InputStream) -> Self {
        Self {
            input,
            state: State::Data,
            return_state: State::Data,
            temp: String::new(),
            char_ref_code: 0,
            tag_kind: TagKind::Start,
            tag_name: String::new(),
            tag_self_closing: false,
            tag_attrs: Vec::new(),
            attr_name: String::new(),
            attr_value: String::new(),
            attr_in_progress: false,
            attr_dropped: false,
            comment: String::new(),
            doctype: DoctypeToken::default(),
            last_start_tag: String::new(),
            cdata_allowed: false,
            queue: VecDeque::new(),
            eof_emitted: false,
            stats: TokenizerStats::default(),
        }
    }

    /// Next token in stream order; `None` once EOF has been delivered.
    ///
    /// Steps the machine only until a token is available, so a sink-driven
    /// state override always applies before further input is consumed.
    pub(crate) fn next_token(&mut self, errors: &mut ErrorSink) -> Option<Token> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(token);
            }
            if self.eof_emitted {
                return None;
            }
            self.stats.steps += 1;
            self.step(errors);
        }
    }

    /// State override. The tree builder is the only caller: it switches the
    /// machine into RCDATA / RAWTEXT / script-data / PLAINTEXT at
    /// element-specific boundaries.
    pub(crate) fn set_state(&mut self, state: State) {
        self.transition(state);
    }

    /// Mirror of "the adjusted current node is not in the HTML namespace";
    /// consulted by the markup-declaration-open state for `<![CDATA[`.
    pub(crate) fn set_cdata_allowed(&mut self, allowed: bool) {
        self.cdata_allowed = allowed;
    }

    /// Byte offset of the cursor into the normalized input. The tree builder
    /// stamps its parse errors with this.
    pub(crate) fn pos(&self) -> usize {
        self.input.pos()
    }

    pub(crate) fn stats(&self) -> TokenizerStats {
        self.stats
    }

    fn transition(&mut self, next: State) {
        if self.state == next {
            return;
        }
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(
            target: "html.tokenizer",
            "state {:?} -> {:?} @{}",
            self.state,
            next,
            self.input.pos()
        );
        self.state = next;
        self.stats.state_transitions += 1;
    }

    fn err(&mut self, errors: &mut ErrorSink, code: ParseErrorCode) {
        errors.record(code, self.input.pos());
    }

    // --- emission ---

    fn emit(&mut self, token: Token) {
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "html.tokenizer", "emit {}", token.summary());
        self.stats.tokens_emitted += 1;
        self.queue.push_back(token);
    }

    fn emit_char(&mut self, scalar: char) {
        self.emit(Token::Character { scalar });
    }

    fn emit_eof(&mut self) {
        self.emit(Token::Eof);
        self.eof_emitted = true;
    }

    fn begin_tag(&mut self, kind: TagKind, first: Option<char>) {
        self.tag_kind = kind;
        self.tag_name.clear();
        if let Some(c) = first {
            self.tag_name.push(c);
        }
        self.tag_self_closing = false;
        self.tag_attrs.clear();
        self.attr_name.clear();
        self.attr_value.clear();
        self.attr_in_progress = false;
        self.attr_dropped = false;
    }

    fn begin_attribute(&mut self) {
        self.commit_attribute();
        self.attr_name.clear();
        self.attr_value.clear();
        self.attr_in_progress = true;
        self.attr_dropped = false;
    }

    /// Duplicate check on leaving the attribute-name state: the second
    /// occurrence is dropped, earlier attributes are retained.
    fn finish_attribute_name(&mut self, errors: &mut ErrorSink) {
        if self
            .tag_attrs
            .iter()
            .any(|attr| attr.name == self.attr_name)
        {
            self.err(errors, ParseErrorCode::DuplicateAttribute);
            self.attr_dropped = true;
        }
    }

    fn commit_attribute(&mut self) {
        if !self.attr_in_progress {
            return;
        }
        self.attr_in_progress = false;
        if self.attr_dropped {
            return;
        }
        self.tag_attrs.push(Attribute {
            name: std::mem::take(&mut self.attr_name),
            value: std::mem::take(&mut self.attr_value),
        });
    }

    fn emit_current_tag(&mut self, errors: &mut ErrorSink) {
        self.commit_attribute();
        let tag = TagToken {
            name: std::mem::take(&mut self.tag_name),
            self_closing: self.tag_self_closing,
            attrs: std::mem::take(&mut self.tag_attrs),
        };
        match self.tag_kind {
            TagKind::Start => {
                self.last_start_tag.clear();
                self.last_start_tag.push_str(&tag.name);
                self.emit(Token::StartTag(tag));
            }
            TagKind::End => {
                if !tag.attrs.is_empty() {
                    self.err(errors, ParseErrorCode::EndTagWithAttributes);
                }
                if tag.self_closing {
                    self.err(errors, ParseErrorCode::EndTagWithTrailingSolidus);
                }
                self.emit(Token::EndTag(TagToken {
                    name: tag.name,
                    self_closing: false,
                    attrs: Vec::new(),
                }));
            }
        }
    }

    /// End-tag token whose name equals the last emitted start tag name.
    fn is_appropriate_end_tag(&self) -> bool {
        self.tag_kind == TagKind::End
            && !self.last_start_tag.is_empty()
            && self.tag_name == self.last_start_tag
    }

    fn begin_comment(&mut self, data: &str) {
        self.comment.clear();
        self.comment.push_str(data);
    }

    fn emit_current_comment(&mut self) {
        let data = std::mem::take(&mut self.comment);
        self.emit(Token::Comment { data });
    }

    fn begin_doctype(&mut self) {
        self.doctype = DoctypeToken::default();
    }

    fn emit_current_doctype(&mut self) {
        let doctype = std::mem::take(&mut self.doctype);
        self.emit(Token::Doctype(doctype));
    }

    fn doctype_name_push(&mut self, c: char) {
        self.doctype.name.get_or_insert_with(String::new).push(c);
    }

    // --- dispatch ---

    fn step(&mut self, errors: &mut ErrorSink) {
        match self.state {
            State::Data => self.step_data(errors),
            State::Rcdata => self.step_rcdata(errors),
            State::Rawtext => self.step_rawtext(errors),
            State::ScriptData => self.step_script_data(errors),
            State::Plaintext => self.step_plaintext(errors),
            State::TagOpen => self.step_tag_open(errors),
            State::EndTagOpen => self.step_end_tag_open(errors),
            State::TagName => self.step_tag_name(errors),
            State::RcdataLessThanSign => self.step_rcdata_less_than_sign(),
            State::RcdataEndTagOpen => self.step_rcdata_end_tag_open(),
            State::RcdataEndTagName => self.step_raw_end_tag_name(errors, State::Rcdata),
            State::RawtextLessThanSign => self.step_rawtext_less_than_sign(),
            State::RawtextEndTagOpen => self.step_rawtext_end_tag_open(),
            State::RawtextEndTagName => self.step_raw_end_tag_name(errors, State::Rawtext),
            State::ScriptDataLessThanSign => self.step_script_data_less_than_sign(),
            State::ScriptDataEndTagOpen => self.step_script_data_end_tag_open(),
            State::ScriptDataEndTagName => self.step_raw_end_tag_name(errors, State::ScriptData),
            State::ScriptDataEscapeStart => self.step_script_data_escape_start(),
            State::ScriptDataEscapeStartDash => self.step_script_data_escape_start_dash(),
            State::ScriptDataEscaped => self.step_script_data_escaped(errors),
            State::ScriptDataEscapedDash => self.step_script_data_escaped_dash(errors),
            State::ScriptDataEscapedDashDash => self.step_script_data_escaped_dash_dash(errors),
            State::ScriptDataEscapedLessThanSign => self.step_script_data_escaped_less_than_sign(),
            State::ScriptDataEscapedEndTagOpen => self.step_script_data_escaped_end_tag_open(),
            State::ScriptDataEscapedEndTagName => {
                self.step_raw_end_tag_name(errors, State::ScriptDataEscaped)
            }
            State::ScriptDataDoubleEscapeStart => self.step_script_data_double_escape_start(),
            State::ScriptDataDoubleEscaped => self.step_script_data_double_escaped(errors),
            State::ScriptDataDoubleEscapedDash => self.step_script_data_double_escaped_dash(errors),
            State::ScriptDataDoubleEscapedDashDash => {
                self.step_script_data_double_escaped_dash_dash(errors)
            }
            State::ScriptDataDoubleEscapedLessThanSign => {
                self.step_script_data_double_escaped_less_than_sign()
            }
            State::ScriptDataDoubleEscapeEnd => self.step_script_data_double_escape_end(),
            State::BeforeAttributeName => self.step_before_attribute_name(errors),
            State::AttributeName => self.step_attribute_name(errors),
            State::AfterAttributeName => self.step_after_attribute_name(errors),
            State::BeforeAttributeValue => self.step_before_attribute_value(errors),
            State::AttributeValueDoubleQuoted => self.step_attribute_value_quoted(errors, '"'),
            State::AttributeValueSingleQuoted => self.step_attribute_value_quoted(errors, '\''),
            State::AttributeValueUnquoted => self.step_attribute_value_unquoted(errors),
            State::AfterAttributeValueQuoted => self.step_after_attribute_value_quoted(errors),
            State::SelfClosingStartTag => self.step_self_closing_start_tag(errors),
            State::BogusComment => self.step_bogus_comment(errors),
            State::MarkupDeclarationOpen => self.step_markup_declaration_open(errors),
            State::CommentStart => self.step_comment_start(errors),
            State::CommentStartDash => self.step_comment_start_dash(errors),
            State::Comment => self.step_comment(errors),
            State::CommentLessThanSign => self.step_comment_less_than_sign(),
            State::CommentLessThanSignBang => self.step_comment_less_than_sign_bang(),
            State::CommentLessThanSignBangDash => self.step_comment_less_than_sign_bang_dash(),
            State::CommentLessThanSignBangDashDash => {
                self.step_comment_less_than_sign_bang_dash_dash(errors)
            }
            State::CommentEndDash => self.step_comment_end_dash(errors),
            State::CommentEnd => self.step_comment_end(errors),
            State::CommentEndBang => self.step_comment_end_bang(errors),
            State::Doctype => self.step_doctype(errors),
            State::BeforeDoctypeName => self.step_before_doctype_name(errors),
            State::DoctypeName => self.step_doctype_name(errors),
            State::AfterDoctypeName => self.step_after_doctype_name(errors),
            State::AfterDoctypePublicKeyword => self.step_after_doctype_public_keyword(errors),
            State::BeforeDoctypePublicIdentifier => {
                self.step_before_doctype_public_identifier(errors)
            }
            State::DoctypePublicIdentifierDoubleQuoted => {
                self.step_doctype_public_identifier_quoted(errors, '"')
            }
            State::DoctypePublicIdentifierSingleQuoted => {
                self.step_doctype_public_identifier_quoted(errors, '\'')
            }
            State::AfterDoctypePublicIdentifier => {
                self.step_after_doctype_public_identifier(errors)
            }
            State::BetweenDoctypePublicAndSystemIdentifiers => {
                self.step_between_doctype_public_and_system_identifiers(errors)
            }
            State::AfterDoctypeSystemKeyword => self.step_after_doctype_system_keyword(errors),
            State::BeforeDoctypeSystemIdentifier => {
                self.step_before_doctype_system_identifier(errors)
            }
            State::DoctypeSystemIdentifierDoubleQuoted => {
                self.step_doctype_system_identifier_quoted(errors, '"')
            }
            State::DoctypeSystemIdentifierSingleQuoted => {
                self.step_doctype_system_identifier_quoted(errors, '\'')
            }
            State::AfterDoctypeSystemIdentifier => {
                self.step_after_doctype_system_identifier(errors)
            }
            State::BogusDoctype => self.step_bogus_doctype(errors),
            State::CdataSection => self.step_cdata_section(errors),
            State::CdataSectionBracket => self.step_cdata_section_bracket(),
            State::CdataSectionEnd => self.step_cdata_section_end(),
            State::CharacterReference => self.step_character_reference(),
            State::NamedCharacterReference => self.step_named_character_reference(errors),
            State::AmbiguousAmpersand => self.step_ambiguous_ampersand(errors),
            State::NumericCharacterReference => self.step_numeric_character_reference(),
            State::HexadecimalCharacterReferenceStart => {
                self.step_hexadecimal_character_reference_start(errors)
            }
            State::DecimalCharacterReferenceStart => {
                self.step_decimal_character_reference_start(errors)
            }
            State::HexadecimalCharacterReference => {
                self.step_hexadecimal_character_reference(errors)
            }
            State::DecimalCharacterReference => self.step_decimal_character_reference(errors),
            State::NumericCharacterReferenceEnd => self.step_numeric_character_reference_end(errors),
        }
    }

    // --- data and tag states ---

    fn step_data(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('&') => {
                self.return_state = State::Data;
                self.transition(State::CharacterReference);
            }
            Some('<') => self.transition(State::TagOpen),
            Some('\0') => {
                // Data emits the NULL itself; replacement is per-state and
                // does not apply here.
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\0');
            }
            Some(c) => {
                self.emit_char(c);
                self.emit_plain_run(&[b'<', b'&', 0]);
            }
            None => self.emit_eof(),
        }
    }

    /// Fast path: emit the maximal delimiter-free run following a plain
    /// character, so long text does not pay per-state dispatch.
    fn emit_plain_run(&mut self, delims: &[u8]) {
        if self.input.is_eof() {
            return;
        }
        let len = self
            .input
            .find_delimiter(delims)
            .unwrap_or(self.input.remaining().len());
        if len == 0 {
            return;
        }
        let run: Vec<char> = self.input.remaining()[..len].chars().collect();
        self.input.advance(len);
        for c in run {
            self.emit_char(c);
        }
    }

    fn step_plaintext(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
            }
            Some(c) => {
                self.emit_char(c);
                self.emit_plain_run(&[0]);
            }
            None => self.emit_eof(),
        }
    }

    fn step_tag_open(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('!') => self.transition(State::MarkupDeclarationOpen),
            Some('/') => self.transition(State::EndTagOpen),
            Some(c) if c.is_ascii_alphabetic() => {
                self.begin_tag(TagKind::Start, None);
                self.input.reconsume();
                self.transition(State::TagName);
            }
            Some('?') => {
                self.err(errors, ParseErrorCode::UnexpectedQuestionMarkInsteadOfTagName);
                self.begin_comment("");
                self.input.reconsume();
                self.transition(State::BogusComment);
            }
            Some(_) => {
                self.err(errors, ParseErrorCode::InvalidFirstCharacterOfTagName);
                self.emit_char('<');
                self.input.reconsume();
                self.transition(State::Data);
            }
            None => {
                self.err(errors, ParseErrorCode::EofBeforeTagName);
                self.emit_char('<');
                self.emit_eof();
            }
        }
    }

    fn step_end_tag_open(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.begin_tag(TagKind::End, None);
                self.input.reconsume();
                self.transition(State::TagName);
            }
            Some('>') => {
                self.err(errors, ParseErrorCode::MissingEndTagName);
                self.transition(State::Data);
            }
            Some(_) => {
                self.err(errors, ParseErrorCode::InvalidFirstCharacterOfTagName);
                self.begin_comment("");
                self.input.reconsume();
                self.transition(State::BogusComment);
            }
            None => {
                self.err(errors, ParseErrorCode::EofBeforeTagName);
                self.emit_char('<');
                self.emit_char('/');
                self.emit_eof();
            }
        }
    }

    fn step_tag_name(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => self.transition(State::BeforeAttributeName),
            Some('/') => self.transition(State::SelfClosingStartTag),
            Some('>') => {
                self.emit_current_tag(errors);
                self.transition(State::Data);
            }
            Some(c) if c.is_ascii_uppercase() => self.tag_name.push(c.to_ascii_lowercase()),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.tag_name.push('\u{FFFD}');
            }
            Some(c) => self.tag_name.push(c),
            None => {
                self.err(errors, ParseErrorCode::EofInTag);
                self.emit_eof();
            }
        }
    }

    // --- attribute states ---

    fn step_before_attribute_name(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {}
            Some('/') | Some('>') => {
                self.input.reconsume();
                self.transition(State::AfterAttributeName);
            }
            Some('=') => {
                self.err(errors, ParseErrorCode::UnexpectedEqualsSignBeforeAttributeName);
                self.begin_attribute();
                self.attr_name.push('=');
                self.transition(State::AttributeName);
            }
            Some(_) => {
                self.begin_attribute();
                self.input.reconsume();
                self.transition(State::AttributeName);
            }
            None => {
                self.transition(State::AfterAttributeName);
            }
        }
    }

    fn step_attribute_name(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {
                self.finish_attribute_name(errors);
                self.input.reconsume();
                self.transition(State::AfterAttributeName);
            }
            Some('/') | Some('>') => {
                self.finish_attribute_name(errors);
                self.input.reconsume();
                self.transition(State::AfterAttributeName);
            }
            Some('=') => {
                self.finish_attribute_name(errors);
                self.transition(State::BeforeAttributeValue);
            }
            Some(c) if c.is_ascii_uppercase() => self.attr_name.push(c.to_ascii_lowercase()),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.attr_name.push('\u{FFFD}');
            }
            Some(c @ ('"' | '\'' | '<')) => {
                self.err(errors, ParseErrorCode::UnexpectedCharacterInAttributeName);
                self.attr_name.push(c);
            }
            Some(c) => self.attr_name.push(c),
            None => {
                self.finish_attribute_name(errors);
                self.transition(State::AfterAttributeName);
            }
        }
    }

    fn step_after_attribute_name(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {}
            Some('/') => self.transition(State::SelfClosingStartTag),
            Some('=') => self.transition(State::BeforeAttributeValue),
            Some('>') => {
                self.emit_current_tag(errors);
                self.transition(State::Data);
            }
            Some(_) => {
                self.begin_attribute();
                self.input.reconsume();
                self.transition(State::AttributeName);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInTag);
                self.emit_eof();
            }
        }
    }

    fn step_before_attribute_value(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {}
            Some('"') => self.transition(State::AttributeValueDoubleQuoted),
            Some('\'') => self.transition(State::AttributeValueSingleQuoted),
            Some('>') => {
                self.err(errors, ParseErrorCode::MissingAttributeValue);
                self.emit_current_tag(errors);
                self.transition(State::Data);
            }
            Some(_) => {
                self.input.reconsume();
                self.transition(State::AttributeValueUnquoted);
            }
            None => {
                self.transition(State::AttributeValueUnquoted);
            }
        }
    }

    fn step_attribute_value_quoted(&mut self, errors: &mut ErrorSink, quote: char) {
        match self.input.consume() {
            Some(c) if c == quote => self.transition(State::AfterAttributeValueQuoted),
            Some('&') => {
                self.return_state = self.state;
                self.transition(State::CharacterReference);
            }
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.attr_value.push('\u{FFFD}');
            }
            Some(c) => self.attr_value.push(c),
            None => {
                self.err(errors, ParseErrorCode::EofInTag);
                self.emit_eof();
            }
        }
    }

    fn step_attribute_value_unquoted(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => self.transition(State::BeforeAttributeName),
            Some('&') => {
                self.return_state = State::AttributeValueUnquoted;
                self.transition(State::CharacterReference);
            }
            Some('>') => {
                self.emit_current_tag(errors);
                self.transition(State::Data);
            }
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.attr_value.push('\u{FFFD}');
            }
            Some(c @ ('"' | '\'' | '<' | '=' | '`')) => {
                self.err(
                    errors,
                    ParseErrorCode::UnexpectedCharacterInUnquotedAttributeValue,
                );
                self.attr_value.push(c);
            }
            Some(c) => self.attr_value.push(c),
            None => {
                self.err(errors, ParseErrorCode::EofInTag);
                self.emit_eof();
            }
        }
    }

    fn step_after_attribute_value_quoted(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => self.transition(State::BeforeAttributeName),
            Some('/') => self.transition(State::SelfClosingStartTag),
            Some('>') => {
                self.emit_current_tag(errors);
                self.transition(State::Data);
            }
            Some(_) => {
                self.err(errors, ParseErrorCode::MissingWhitespaceBetweenAttributes);
                self.input.reconsume();
                self.transition(State::BeforeAttributeName);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInTag);
                self.emit_eof();
            }
        }
    }

    fn step_self_closing_start_tag(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('>') => {
                self.tag_self_closing = true;
                self.emit_current_tag(errors);
                self.transition(State::Data);
            }
            Some(_) => {
                self.err(errors, ParseErrorCode::UnexpectedSolidusInTag);
                self.input.reconsume();
                self.transition(State::BeforeAttributeName);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInTag);
                self.emit_eof();
            }
        }
    }

    // --- comment states ---

    fn step_bogus_comment(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('>') => {
                self.emit_current_comment();
                self.transition(State::Data);
            }
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.comment.push('\u{FFFD}');
            }
            Some(c) => self.comment.push(c),
            None => {
                self.emit_current_comment();
                self.emit_eof();
            }
        }
    }

    fn step_markup_declaration_open(&mut self, errors: &mut ErrorSink) {
        if self.input.next_matches("--", CaseMode::Exact) {
            self.input.consume_n(2);
            self.begin_comment("");
            self.transition(State::CommentStart);
        } else if self.input.next_matches("doctype", CaseMode::AsciiInsensitive) {
            self.input.consume_n(7);
            self.transition(State::Doctype);
        } else if self.input.next_matches("[CDATA[", CaseMode::Exact) {
            self.input.consume_n(7);
            if self.cdata_allowed {
                self.transition(State::CdataSection);
            } else {
                self.err(errors, ParseErrorCode::CdataInHtmlContent);
                self.begin_comment("[CDATA[");
                self.transition(State::BogusComment);
            }
        } else {
            self.err(errors, ParseErrorCode::IncorrectlyOpenedComment);
            self.begin_comment("");
            self.transition(State::BogusComment);
        }
    }

    fn step_comment_start(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('-') => self.transition(State::CommentStartDash),
            Some('>') => {
                self.err(errors, ParseErrorCode::AbruptClosingOfEmptyComment);
                self.emit_current_comment();
                self.transition(State::Data);
            }
            Some(_) => {
                self.input.reconsume();
                self.transition(State::Comment);
            }
            None => {
                self.transition(State::Comment);
            }
        }
    }

    fn step_comment_start_dash(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('-') => self.transition(State::CommentEnd),
            Some('>') => {
                self.err(errors, ParseErrorCode::AbruptClosingOfEmptyComment);
                self.emit_current_comment();
                self.transition(State::Data);
            }
            Some(_) => {
                self.comment.push('-');
                self.input.reconsume();
                self.transition(State::Comment);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInComment);
                self.emit_current_comment();
                self.emit_eof();
            }
        }
    }

    fn step_comment(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('<') => {
                self.comment.push('<');
                self.transition(State::CommentLessThanSign);
            }
            Some('-') => self.transition(State::CommentEndDash),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.comment.push('\u{FFFD}');
            }
            Some(c) => self.comment.push(c),
            None => {
                self.err(errors, ParseErrorCode::EofInComment);
                self.emit_current_comment();
                self.emit_eof();
            }
        }
    }

    fn step_comment_less_than_sign(&mut self) {
        match self.input.consume() {
            Some('!') => {
                self.comment.push('!');
                self.transition(State::CommentLessThanSignBang);
            }
            Some('<') => self.comment.push('<'),
            Some(_) => {
                self.input.reconsume();
                self.transition(State::Comment);
            }
            None => {
                self.transition(State::Comment);
            }
        }
    }

    fn step_comment_less_than_sign_bang(&mut self) {
        match self.input.consume() {
            Some('-') => self.transition(State::CommentLessThanSignBangDash),
            Some(_) => {
                self.input.reconsume();
                self.transition(State::Comment);
            }
            None => {
                self.transition(State::Comment);
            }
        }
    }

    fn step_comment_less_than_sign_bang_dash(&mut self) {
        match self.input.consume() {
            Some('-') => self.transition(State::CommentLessThanSignBangDashDash),
            Some(_) => {
                self.input.reconsume();
                self.transition(State::CommentEndDash);
            }
            None => {
                self.transition(State::CommentEndDash);
            }
        }
    }

    fn step_comment_less_than_sign_bang_dash_dash(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('>') => {
                self.input.reconsume();
                self.transition(State::CommentEnd);
            }
            Some(_) => {
                self.err(errors, ParseErrorCode::NestedComment);
                self.input.reconsume();
                self.transition(State::CommentEnd);
            }
            None => {
                self.transition(State::CommentEnd);
            }
        }
    }

    fn step_comment_end_dash(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('-') => self.transition(State::CommentEnd),
            Some(_) => {
                self.comment.push('-');
                self.input.reconsume();
                self.transition(State::Comment);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInComment);
                self.emit_current_comment();
                self.emit_eof();
            }
        }
    }

    fn step_comment_end(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('>') => {
                self.emit_current_comment();
                self.transition(State::Data);
            }
            Some('!') => self.transition(State::CommentEndBang),
            Some('-') => self.comment.push('-'),
            Some(_) => {
                self.comment.push_str("--");
                self.input.reconsume();
                self.transition(State::Comment);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInComment);
                self.emit_current_comment();
                self.emit_eof();
            }
        }
    }

    fn step_comment_end_bang(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('-') => {
                self.comment.push_str("--!");
                self.transition(State::CommentEndDash);
            }
            Some('>') => {
                self.err(errors, ParseErrorCode::IncorrectlyClosedComment);
                self.emit_current_comment();
                self.transition(State::Data);
            }
            Some(_) => {
                self.comment.push_str("--!");
                self.input.reconsume();
                self.transition(State::Comment);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInComment);
                self.emit_current_comment();
                self.emit_eof();
            }
        }
    }

    // --- DOCTYPE states ---

    fn step_doctype(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => self.transition(State::BeforeDoctypeName),
            Some('>') => {
                self.input.reconsume();
                self.transition(State::BeforeDoctypeName);
            }
            Some(_) => {
                self.err(errors, ParseErrorCode::MissingWhitespaceBeforeDoctypeName);
                self.input.reconsume();
                self.transition(State::BeforeDoctypeName);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.begin_doctype();
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_before_doctype_name(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {}
            Some(c) if c.is_ascii_uppercase() => {
                self.begin_doctype();
                self.doctype_name_push(c.to_ascii_lowercase());
                self.transition(State::DoctypeName);
            }
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.begin_doctype();
                self.doctype_name_push('\u{FFFD}');
                self.transition(State::DoctypeName);
            }
            Some('>') => {
                self.err(errors, ParseErrorCode::MissingDoctypeName);
                self.begin_doctype();
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some(c) => {
                self.begin_doctype();
                self.doctype_name_push(c);
                self.transition(State::DoctypeName);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.begin_doctype();
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_doctype_name(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => self.transition(State::AfterDoctypeName),
            Some('>') => {
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some(c) if c.is_ascii_uppercase() => self.doctype_name_push(c.to_ascii_lowercase()),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.doctype_name_push('\u{FFFD}');
            }
            Some(c) => self.doctype_name_push(c),
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_after_doctype_name(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {}
            Some('>') => {
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some(_) => {
                self.input.reconsume();
                if self.input.next_matches("public", CaseMode::AsciiInsensitive) {
                    self.input.consume_n(6);
                    self.transition(State::AfterDoctypePublicKeyword);
                } else if self.input.next_matches("system", CaseMode::AsciiInsensitive) {
                    self.input.consume_n(6);
                    self.transition(State::AfterDoctypeSystemKeyword);
                } else {
                    self.err(errors, ParseErrorCode::InvalidCharacterSequenceAfterDoctypeName);
                    self.doctype.force_quirks = true;
                    self.transition(State::BogusDoctype);
                }
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_after_doctype_public_keyword(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {
                self.transition(State::BeforeDoctypePublicIdentifier)
            }
            Some('"') => {
                self.err(
                    errors,
                    ParseErrorCode::MissingWhitespaceAfterDoctypePublicKeyword,
                );
                self.doctype.public_id = Some(String::new());
                self.transition(State::DoctypePublicIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.err(
                    errors,
                    ParseErrorCode::MissingWhitespaceAfterDoctypePublicKeyword,
                );
                self.doctype.public_id = Some(String::new());
                self.transition(State::DoctypePublicIdentifierSingleQuoted);
            }
            Some('>') => {
                self.err(errors, ParseErrorCode::MissingDoctypePublicIdentifier);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some(_) => {
                self.err(
                    errors,
                    ParseErrorCode::MissingQuoteBeforeDoctypePublicIdentifier,
                );
                self.doctype.force_quirks = true;
                self.input.reconsume();
                self.transition(State::BogusDoctype);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_before_doctype_public_identifier(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {}
            Some('"') => {
                self.doctype.public_id = Some(String::new());
                self.transition(State::DoctypePublicIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.doctype.public_id = Some(String::new());
                self.transition(State::DoctypePublicIdentifierSingleQuoted);
            }
            Some('>') => {
                self.err(errors, ParseErrorCode::MissingDoctypePublicIdentifier);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some(_) => {
                self.err(
                    errors,
                    ParseErrorCode::MissingQuoteBeforeDoctypePublicIdentifier,
                );
                self.doctype.force_quirks = true;
                self.input.reconsume();
                self.transition(State::BogusDoctype);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_doctype_public_identifier_quoted(&mut self, errors: &mut ErrorSink, quote: char) {
        match self.input.consume() {
            Some(c) if c == quote => self.transition(State::AfterDoctypePublicIdentifier),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                if let Some(id) = self.doctype.public_id.as_mut() {
                    id.push('\u{FFFD}');
                }
            }
            Some('>') => {
                self.err(errors, ParseErrorCode::AbruptDoctypePublicIdentifier);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some(c) => {
                if let Some(id) = self.doctype.public_id.as_mut() {
                    id.push(c);
                }
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_after_doctype_public_identifier(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {
                self.transition(State::BetweenDoctypePublicAndSystemIdentifiers)
            }
            Some('>') => {
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some('"') => {
                self.err(
                    errors,
                    ParseErrorCode::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );
                self.doctype.system_id = Some(String::new());
                self.transition(State::DoctypeSystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.err(
                    errors,
                    ParseErrorCode::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );
                self.doctype.system_id = Some(String::new());
                self.transition(State::DoctypeSystemIdentifierSingleQuoted);
            }
            Some(_) => {
                self.err(
                    errors,
                    ParseErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier,
                );
                self.doctype.force_quirks = true;
                self.input.reconsume();
                self.transition(State::BogusDoctype);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_between_doctype_public_and_system_identifiers(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {}
            Some('>') => {
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some('"') => {
                self.doctype.system_id = Some(String::new());
                self.transition(State::DoctypeSystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.doctype.system_id = Some(String::new());
                self.transition(State::DoctypeSystemIdentifierSingleQuoted);
            }
            Some(_) => {
                self.err(
                    errors,
                    ParseErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier,
                );
                self.doctype.force_quirks = true;
                self.input.reconsume();
                self.transition(State::BogusDoctype);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_after_doctype_system_keyword(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {
                self.transition(State::BeforeDoctypeSystemIdentifier)
            }
            Some('"') => {
                self.err(
                    errors,
                    ParseErrorCode::MissingWhitespaceAfterDoctypeSystemKeyword,
                );
                self.doctype.system_id = Some(String::new());
                self.transition(State::DoctypeSystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.err(
                    errors,
                    ParseErrorCode::MissingWhitespaceAfterDoctypeSystemKeyword,
                );
                self.doctype.system_id = Some(String::new());
                self.transition(State::DoctypeSystemIdentifierSingleQuoted);
            }
            Some('>') => {
                self.err(errors, ParseErrorCode::MissingDoctypeSystemIdentifier);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some(_) => {
                self.err(
                    errors,
                    ParseErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier,
                );
                self.doctype.force_quirks = true;
                self.input.reconsume();
                self.transition(State::BogusDoctype);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_before_doctype_system_identifier(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {}
            Some('"') => {
                self.doctype.system_id = Some(String::new());
                self.transition(State::DoctypeSystemIdentifierDoubleQuoted);
            }
            Some('\'') => {
                self.doctype.system_id = Some(String::new());
                self.transition(State::DoctypeSystemIdentifierSingleQuoted);
            }
            Some('>') => {
                self.err(errors, ParseErrorCode::MissingDoctypeSystemIdentifier);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some(_) => {
                self.err(
                    errors,
                    ParseErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier,
                );
                self.doctype.force_quirks = true;
                self.input.reconsume();
                self.transition(State::BogusDoctype);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_doctype_system_identifier_quoted(&mut self, errors: &mut ErrorSink, quote: char) {
        match self.input.consume() {
            Some(c) if c == quote => self.transition(State::AfterDoctypeSystemIdentifier),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                if let Some(id) = self.doctype.system_id.as_mut() {
                    id.push('\u{FFFD}');
                }
            }
            Some('>') => {
                self.err(errors, ParseErrorCode::AbruptDoctypeSystemIdentifier);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some(c) => {
                if let Some(id) = self.doctype.system_id.as_mut() {
                    id.push(c);
                }
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_after_doctype_system_identifier(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) => {}
            Some('>') => {
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some(_) => {
                self.err(
                    errors,
                    ParseErrorCode::UnexpectedCharacterAfterDoctypeSystemIdentifier,
                );
                // No force-quirks here: the identifiers are already complete.
                self.input.reconsume();
                self.transition(State::BogusDoctype);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInDoctype);
                self.doctype.force_quirks = true;
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    fn step_bogus_doctype(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('>') => {
                self.emit_current_doctype();
                self.transition(State::Data);
            }
            Some('\0') => self.err(errors, ParseErrorCode::UnexpectedNullCharacter),
            Some(_) => {}
            None => {
                self.emit_current_doctype();
                self.emit_eof();
            }
        }
    }

    // --- CDATA states ---

    fn step_cdata_section(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(']') => self.transition(State::CdataSectionBracket),
            Some(c) => self.emit_char(c),
            None => {
                self.err(errors, ParseErrorCode::EofInCdata);
                self.emit_eof();
            }
        }
    }

    fn step_cdata_section_bracket(&mut self) {
        match self.input.consume() {
            Some(']') => self.transition(State::CdataSectionEnd),
            Some(_) => {
                self.emit_char(']');
                self.input.reconsume();
                self.transition(State::CdataSection);
            }
            None => {
                self.emit_char(']');
                self.transition(State::CdataSection);
            }
        }
    }

    fn step_cdata_section_end(&mut self) {
        match self.input.consume() {
            Some(']') => self.emit_char(']'),
            Some('>') => self.transition(State::Data),
            Some(_) => {
                self.emit_char(']');
                self.emit_char(']');
                self.input.reconsume();
                self.transition(State::CdataSection);
            }
            None => {
                self.emit_char(']');
                self.emit_char(']');
                self.transition(State::CdataSection);
            }
        }
    }
}

/// The standard's "ASCII whitespace" minus CR, which newline normalization
/// removed before tokenization.
pub(crate) fn is_html_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{C}' | ' ')
}

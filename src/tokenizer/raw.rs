//! RCDATA, RAWTEXT, script-data, and the script escape/double-escape state
//! families.
//!
//! The end-tag-name triads share one handler parameterized over the fallback
//! state: the only difference between RCDATA/RAWTEXT/script-data end-tag
//! recognition is where a failed match resumes.

use super::{State, TagKind, Tokenizer, is_html_whitespace};
use crate::error::{ErrorSink, ParseErrorCode};

impl Tokenizer {
    pub(super) fn step_rcdata(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('&') => {
                self.return_state = State::Rcdata;
                self.transition(State::CharacterReference);
            }
            Some('<') => self.transition(State::RcdataLessThanSign),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
            }
            Some(c) => {
                self.emit_char(c);
                self.emit_plain_run(&[b'<', b'&', 0]);
            }
            None => self.emit_eof(),
        }
    }

    pub(super) fn step_rawtext(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('<') => self.transition(State::RawtextLessThanSign),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
            }
            Some(c) => {
                self.emit_char(c);
                self.emit_plain_run(&[b'<', 0]);
            }
            None => self.emit_eof(),
        }
    }

    pub(super) fn step_script_data(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('<') => self.transition(State::ScriptDataLessThanSign),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
            }
            Some(c) => {
                self.emit_char(c);
                self.emit_plain_run(&[b'<', 0]);
            }
            None => self.emit_eof(),
        }
    }

    // --- RCDATA end-tag triad ---

    pub(super) fn step_rcdata_less_than_sign(&mut self) {
        match self.input.consume() {
            Some('/') => {
                self.temp.clear();
                self.transition(State::RcdataEndTagOpen);
            }
            Some(_) => {
                self.emit_char('<');
                self.input.reconsume();
                self.transition(State::Rcdata);
            }
            None => {
                self.emit_char('<');
                self.transition(State::Rcdata);
            }
        }
    }

    pub(super) fn step_rcdata_end_tag_open(&mut self) {
        match self.input.consume() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.begin_tag(TagKind::End, None);
                self.input.reconsume();
                self.transition(State::RcdataEndTagName);
            }
            Some(_) => {
                self.emit_char('<');
                self.emit_char('/');
                self.input.reconsume();
                self.transition(State::Rcdata);
            }
            None => {
                self.emit_char('<');
                self.emit_char('/');
                self.transition(State::Rcdata);
            }
        }
    }

    /// Shared end-tag-name handler for the RCDATA / RAWTEXT / script-data /
    /// script-data-escaped triads. `fallback` is the text state a failed
    /// "appropriate end tag" probe resumes in.
    pub(super) fn step_raw_end_tag_name(&mut self, errors: &mut ErrorSink, fallback: State) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) && self.is_appropriate_end_tag() => {
                self.transition(State::BeforeAttributeName);
            }
            Some('/') if self.is_appropriate_end_tag() => {
                self.transition(State::SelfClosingStartTag);
            }
            Some('>') if self.is_appropriate_end_tag() => {
                self.emit_current_tag(errors);
                self.transition(State::Data);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.tag_name.push(c.to_ascii_lowercase());
                self.temp.push(c);
            }
            Some(_) => {
                self.flush_raw_end_tag_probe();
                self.input.reconsume();
                self.transition(fallback);
            }
            None => {
                self.flush_raw_end_tag_probe();
                self.transition(fallback);
            }
        }
    }

    /// Failed end-tag probe: re-emit `</` plus the buffered name characters
    /// as text before resuming the surrounding text state.
    fn flush_raw_end_tag_probe(&mut self) {
        self.emit_char('<');
        self.emit_char('/');
        let buffered: Vec<char> = self.temp.chars().collect();
        for c in buffered {
            self.emit_char(c);
        }
    }

    // --- RAWTEXT end-tag triad ---

    pub(super) fn step_rawtext_less_than_sign(&mut self) {
        match self.input.consume() {
            Some('/') => {
                self.temp.clear();
                self.transition(State::RawtextEndTagOpen);
            }
            Some(_) => {
                self.emit_char('<');
                self.input.reconsume();
                self.transition(State::Rawtext);
            }
            None => {
                self.emit_char('<');
                self.transition(State::Rawtext);
            }
        }
    }

    pub(super) fn step_rawtext_end_tag_open(&mut self) {
        match self.input.consume() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.begin_tag(TagKind::End, None);
                self.input.reconsume();
                self.transition(State::RawtextEndTagName);
            }
            Some(_) => {
                self.emit_char('<');
                self.emit_char('/');
                self.input.reconsume();
                self.transition(State::Rawtext);
            }
            None => {
                self.emit_char('<');
                self.emit_char('/');
                self.transition(State::Rawtext);
            }
        }
    }

    // --- script data ---

    pub(super) fn step_script_data_less_than_sign(&mut self) {
        match self.input.consume() {
            Some('/') => {
                self.temp.clear();
                self.transition(State::ScriptDataEndTagOpen);
            }
            Some('!') => {
                self.emit_char('<');
                self.emit_char('!');
                self.transition(State::ScriptDataEscapeStart);
            }
            Some(_) => {
                self.emit_char('<');
                self.input.reconsume();
                self.transition(State::ScriptData);
            }
            None => {
                self.emit_char('<');
                self.transition(State::ScriptData);
            }
        }
    }

    pub(super) fn step_script_data_end_tag_open(&mut self) {
        match self.input.consume() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.begin_tag(TagKind::End, None);
                self.input.reconsume();
                self.transition(State::ScriptDataEndTagName);
            }
            Some(_) => {
                self.emit_char('<');
                self.emit_char('/');
                self.input.reconsume();
                self.transition(State::ScriptData);
            }
            None => {
                self.emit_char('<');
                self.emit_char('/');
                self.transition(State::ScriptData);
            }
        }
    }

    pub(super) fn step_script_data_escape_start(&mut self) {
        match self.input.consume() {
            Some('-') => {
                self.emit_char('-');
                self.transition(State::ScriptDataEscapeStartDash);
            }
            Some(_) => {
                self.input.reconsume();
                self.transition(State::ScriptData);
            }
            None => self.transition(State::ScriptData),
        }
    }

    pub(super) fn step_script_data_escape_start_dash(&mut self) {
        match self.input.consume() {
            Some('-') => {
                self.emit_char('-');
                self.transition(State::ScriptDataEscapedDashDash);
            }
            Some(_) => {
                self.input.reconsume();
                self.transition(State::ScriptData);
            }
            None => self.transition(State::ScriptData),
        }
    }

    pub(super) fn step_script_data_escaped(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('-') => {
                self.emit_char('-');
                self.transition(State::ScriptDataEscapedDash);
            }
            Some('<') => self.transition(State::ScriptDataEscapedLessThanSign),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
            }
            Some(c) => self.emit_char(c),
            None => {
                self.err(errors, ParseErrorCode::EofInScriptHtmlCommentLikeText);
                self.emit_eof();
            }
        }
    }

    pub(super) fn step_script_data_escaped_dash(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('-') => {
                self.emit_char('-');
                self.transition(State::ScriptDataEscapedDashDash);
            }
            Some('<') => self.transition(State::ScriptDataEscapedLessThanSign),
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
                self.transition(State::ScriptDataEscaped);
            }
            Some(c) => {
                self.emit_char(c);
                self.transition(State::ScriptDataEscaped);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInScriptHtmlCommentLikeText);
                self.emit_eof();
            }
        }
    }

    pub(super) fn step_script_data_escaped_dash_dash(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('-') => self.emit_char('-'),
            Some('<') => self.transition(State::ScriptDataEscapedLessThanSign),
            Some('>') => {
                self.emit_char('>');
                self.transition(State::ScriptData);
            }
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
                self.transition(State::ScriptDataEscaped);
            }
            Some(c) => {
                self.emit_char(c);
                self.transition(State::ScriptDataEscaped);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInScriptHtmlCommentLikeText);
                self.emit_eof();
            }
        }
    }

    pub(super) fn step_script_data_escaped_less_than_sign(&mut self) {
        match self.input.consume() {
            Some('/') => {
                self.temp.clear();
                self.transition(State::ScriptDataEscapedEndTagOpen);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.temp.clear();
                self.emit_char('<');
                self.input.reconsume();
                self.transition(State::ScriptDataDoubleEscapeStart);
            }
            Some(_) => {
                self.emit_char('<');
                self.input.reconsume();
                self.transition(State::ScriptDataEscaped);
            }
            None => {
                self.emit_char('<');
                self.transition(State::ScriptDataEscaped);
            }
        }
    }

    pub(super) fn step_script_data_escaped_end_tag_open(&mut self) {
        match self.input.consume() {
            Some(c) if c.is_ascii_alphabetic() => {
                self.begin_tag(TagKind::End, None);
                self.input.reconsume();
                self.transition(State::ScriptDataEscapedEndTagName);
            }
            Some(_) => {
                self.emit_char('<');
                self.emit_char('/');
                self.input.reconsume();
                self.transition(State::ScriptDataEscaped);
            }
            None => {
                self.emit_char('<');
                self.emit_char('/');
                self.transition(State::ScriptDataEscaped);
            }
        }
    }

    pub(super) fn step_script_data_double_escape_start(&mut self) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) || c == '/' || c == '>' => {
                if self.temp == "script" {
                    self.transition(State::ScriptDataDoubleEscaped);
                } else {
                    self.transition(State::ScriptDataEscaped);
                }
                self.emit_char(c);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.temp.push(c.to_ascii_lowercase());
                self.emit_char(c);
            }
            Some(_) => {
                self.input.reconsume();
                self.transition(State::ScriptDataEscaped);
            }
            None => self.transition(State::ScriptDataEscaped),
        }
    }

    pub(super) fn step_script_data_double_escaped(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('-') => {
                self.emit_char('-');
                self.transition(State::ScriptDataDoubleEscapedDash);
            }
            Some('<') => {
                self.emit_char('<');
                self.transition(State::ScriptDataDoubleEscapedLessThanSign);
            }
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
            }
            Some(c) => self.emit_char(c),
            None => {
                self.err(errors, ParseErrorCode::EofInScriptHtmlCommentLikeText);
                self.emit_eof();
            }
        }
    }

    pub(super) fn step_script_data_double_escaped_dash(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('-') => {
                self.emit_char('-');
                self.transition(State::ScriptDataDoubleEscapedDashDash);
            }
            Some('<') => {
                self.emit_char('<');
                self.transition(State::ScriptDataDoubleEscapedLessThanSign);
            }
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
                self.transition(State::ScriptDataDoubleEscaped);
            }
            Some(c) => {
                self.emit_char(c);
                self.transition(State::ScriptDataDoubleEscaped);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInScriptHtmlCommentLikeText);
                self.emit_eof();
            }
        }
    }

    pub(super) fn step_script_data_double_escaped_dash_dash(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some('-') => self.emit_char('-'),
            Some('<') => {
                self.emit_char('<');
                self.transition(State::ScriptDataDoubleEscapedLessThanSign);
            }
            Some('>') => {
                self.emit_char('>');
                self.transition(State::ScriptData);
            }
            Some('\0') => {
                self.err(errors, ParseErrorCode::UnexpectedNullCharacter);
                self.emit_char('\u{FFFD}');
                self.transition(State::ScriptDataDoubleEscaped);
            }
            Some(c) => {
                self.emit_char(c);
                self.transition(State::ScriptDataDoubleEscaped);
            }
            None => {
                self.err(errors, ParseErrorCode::EofInScriptHtmlCommentLikeText);
                self.emit_eof();
            }
        }
    }

    pub(super) fn step_script_data_double_escaped_less_than_sign(&mut self) {
        match self.input.consume() {
            Some('/') => {
                self.temp.clear();
                self.emit_char('/');
                self.transition(State::ScriptDataDoubleEscapeEnd);
            }
            Some(_) => {
                self.input.reconsume();
                self.transition(State::ScriptDataDoubleEscaped);
            }
            None => self.transition(State::ScriptDataDoubleEscaped),
        }
    }

    pub(super) fn step_script_data_double_escape_end(&mut self) {
        match self.input.consume() {
            Some(c) if is_html_whitespace(c) || c == '/' || c == '>' => {
                if self.temp == "script" {
                    self.transition(State::ScriptDataEscaped);
                } else {
                    self.transition(State::ScriptDataDoubleEscaped);
                }
                self.emit_char(c);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.temp.push(c.to_ascii_lowercase());
                self.emit_char(c);
            }
            Some(_) => {
                self.input.reconsume();
                self.transition(State::ScriptDataDoubleEscaped);
            }
            None => self.transition(State::ScriptDataDoubleEscaped),
        }
    }
}

//! Character-reference state family.
//!
//! Named references use longest-prefix matching over the static table in
//! `entities`, including the historical in-attribute exception: a match with
//! no trailing semicolon followed by `=` or an alphanumeric is rejected and
//! the raw characters flush into the attribute value unchanged.
//!
//! Numeric references accumulate a 32-bit code and apply the end-state
//! fixups: 0, surrogates, and out-of-range codes become U+FFFD; the
//! 0x80–0x9F range takes the Windows-1252 overrides; noncharacters and
//! controls are reported but preserved.

use super::{State, Tokenizer};
use crate::entities;
use crate::error::{ErrorSink, ParseErrorCode};
use crate::input::windows_1252_remap;

impl Tokenizer {
    fn charref_in_attribute(&self) -> bool {
        matches!(
            self.return_state,
            State::AttributeValueDoubleQuoted
                | State::AttributeValueSingleQuoted
                | State::AttributeValueUnquoted
        )
    }

    /// Flush code points consumed as a character reference: into the current
    /// attribute value in attribute context, as character tokens otherwise.
    fn flush_char_ref(&mut self) {
        if self.charref_in_attribute() {
            self.attr_value.push_str(&self.temp);
            self.temp.clear();
        } else {
            let buffered: Vec<char> = self.temp.chars().collect();
            self.temp.clear();
            for c in buffered {
                self.emit_char(c);
            }
        }
    }

    pub(super) fn step_character_reference(&mut self) {
        self.temp.clear();
        self.temp.push('&');
        match self.input.consume() {
            Some(c) if c.is_ascii_alphanumeric() => {
                self.input.reconsume();
                self.transition(State::NamedCharacterReference);
            }
            Some('#') => {
                self.temp.push('#');
                self.transition(State::NumericCharacterReference);
            }
            Some(_) => {
                self.flush_char_ref();
                self.input.reconsume();
                self.transition(self.return_state);
            }
            None => {
                self.flush_char_ref();
                self.transition(self.return_state);
            }
        }
    }

    pub(super) fn step_named_character_reference(&mut self, errors: &mut ErrorSink) {
        match entities::longest_match(self.input.remaining()) {
            Some(hit) => {
                let matched_len = hit.name.len();
                let after: Option<char> = self.input.remaining()[matched_len..].chars().next();
                let historical = !hit.ends_with_semicolon()
                    && self.charref_in_attribute()
                    && after.is_some_and(|c| c == '=' || c.is_ascii_alphanumeric());
                if historical {
                    // Flush the raw name; no error for this legacy form.
                    let name = hit.name;
                    self.temp.push_str(name);
                    self.input.advance(matched_len);
                    self.flush_char_ref();
                    self.transition(self.return_state);
                    return;
                }
                self.input.advance(matched_len);
                if !hit.ends_with_semicolon() {
                    self.err(errors, ParseErrorCode::MissingSemicolonAfterCharacterReference);
                }
                self.temp.clear();
                for c in hit.scalars() {
                    self.temp.push(c);
                }
                self.flush_char_ref();
                self.transition(self.return_state);
            }
            None => {
                self.flush_char_ref();
                self.transition(State::AmbiguousAmpersand);
            }
        }
    }

    pub(super) fn step_ambiguous_ampersand(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if c.is_ascii_alphanumeric() => {
                if self.charref_in_attribute() {
                    self.attr_value.push(c);
                } else {
                    self.emit_char(c);
                }
            }
            Some(';') => {
                self.err(errors, ParseErrorCode::UnknownNamedCharacterReference);
                self.input.reconsume();
                self.transition(self.return_state);
            }
            Some(_) => {
                self.input.reconsume();
                self.transition(self.return_state);
            }
            None => self.transition(self.return_state),
        }
    }

    pub(super) fn step_numeric_character_reference(&mut self) {
        self.char_ref_code = 0;
        match self.input.consume() {
            Some(c @ ('x' | 'X')) => {
                self.temp.push(c);
                self.transition(State::HexadecimalCharacterReferenceStart);
            }
            Some(_) => {
                self.input.reconsume();
                self.transition(State::DecimalCharacterReferenceStart);
            }
            None => self.transition(State::DecimalCharacterReferenceStart),
        }
    }

    pub(super) fn step_hexadecimal_character_reference_start(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if c.is_ascii_hexdigit() => {
                self.input.reconsume();
                self.transition(State::HexadecimalCharacterReference);
            }
            Some(_) => {
                self.err(
                    errors,
                    ParseErrorCode::AbsenceOfDigitsInNumericCharacterReference,
                );
                self.flush_char_ref();
                self.input.reconsume();
                self.transition(self.return_state);
            }
            None => {
                self.err(
                    errors,
                    ParseErrorCode::AbsenceOfDigitsInNumericCharacterReference,
                );
                self.flush_char_ref();
                self.transition(self.return_state);
            }
        }
    }

    pub(super) fn step_decimal_character_reference_start(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if c.is_ascii_digit() => {
                self.input.reconsume();
                self.transition(State::DecimalCharacterReference);
            }
            Some(_) => {
                self.err(
                    errors,
                    ParseErrorCode::AbsenceOfDigitsInNumericCharacterReference,
                );
                self.flush_char_ref();
                self.input.reconsume();
                self.transition(self.return_state);
            }
            None => {
                self.err(
                    errors,
                    ParseErrorCode::AbsenceOfDigitsInNumericCharacterReference,
                );
                self.flush_char_ref();
                self.transition(self.return_state);
            }
        }
    }

    pub(super) fn step_hexadecimal_character_reference(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if c.is_ascii_hexdigit() => {
                self.accumulate_char_ref(16, c.to_digit(16).unwrap_or(0));
            }
            Some(';') => self.transition(State::NumericCharacterReferenceEnd),
            Some(_) => {
                self.err(errors, ParseErrorCode::MissingSemicolonAfterCharacterReference);
                self.input.reconsume();
                self.transition(State::NumericCharacterReferenceEnd);
            }
            None => {
                self.err(errors, ParseErrorCode::MissingSemicolonAfterCharacterReference);
                self.transition(State::NumericCharacterReferenceEnd);
            }
        }
    }

    pub(super) fn step_decimal_character_reference(&mut self, errors: &mut ErrorSink) {
        match self.input.consume() {
            Some(c) if c.is_ascii_digit() => {
                self.accumulate_char_ref(10, c.to_digit(10).unwrap_or(0));
            }
            Some(';') => self.transition(State::NumericCharacterReferenceEnd),
            Some(_) => {
                self.err(errors, ParseErrorCode::MissingSemicolonAfterCharacterReference);
                self.input.reconsume();
                self.transition(State::NumericCharacterReferenceEnd);
            }
            None => {
                self.err(errors, ParseErrorCode::MissingSemicolonAfterCharacterReference);
                self.transition(State::NumericCharacterReferenceEnd);
            }
        }
    }

    /// Saturate just past the Unicode range; the end state folds anything
    /// above U+10FFFF to U+FFFD, so overflow past the cap is equivalent.
    fn accumulate_char_ref(&mut self, radix: u32, digit: u32) {
        const CAP: u32 = 0x11_0000;
        self.char_ref_code = self
            .char_ref_code
            .saturating_mul(radix)
            .saturating_add(digit)
            .min(CAP);
    }

    /// The "numeric character reference end state": no input is consumed;
    /// the accumulated code is fixed up and flushed.
    pub(super) fn step_numeric_character_reference_end(&mut self, errors: &mut ErrorSink) {
        let mut code = self.char_ref_code;
        if code == 0 {
            self.err(errors, ParseErrorCode::NullCharacterReference);
            code = 0xFFFD;
        } else if code > 0x10FFFF {
            self.err(errors, ParseErrorCode::CharacterReferenceOutsideUnicodeRange);
            code = 0xFFFD;
        } else if (0xD800..=0xDFFF).contains(&code) {
            self.err(errors, ParseErrorCode::SurrogateCharacterReference);
            code = 0xFFFD;
        } else if is_noncharacter(code) {
            self.err(errors, ParseErrorCode::NoncharacterCharacterReference);
        } else if code == 0x0D || is_non_whitespace_control(code) {
            self.err(errors, ParseErrorCode::ControlCharacterReference);
            if let Some(mapped) = windows_1252_remap(code) {
                code = mapped as u32;
            }
        }
        self.temp.clear();
        let scalar = char::from_u32(code).unwrap_or('\u{FFFD}');
        self.temp.push(scalar);
        self.flush_char_ref();
        self.transition(self.return_state);
    }
}

fn is_noncharacter(code: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&code) || (code & 0xFFFE) == 0xFFFE
}

fn is_non_whitespace_control(code: u32) -> bool {
    (code <= 0x1F && !matches!(code, 0x09 | 0x0A | 0x0C)) || (0x7F..=0x9F).contains(&code)
}

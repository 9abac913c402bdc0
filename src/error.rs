//! Parse errors for tokenization/tree construction.
//!
//! Two kinds of failure exist and must not be conflated:
//! - Parse errors: malformed input. Recorded with a byte offset; the machine
//!   continues under the documented recovery rule. Never fatal.
//! - Engine invariants: bugs/corruption. `debug_assert!` in development
//!   builds; release builds fall back to the "ignore" recovery. No input
//!   sequence triggers them.

use std::fmt;

/// Closed set of recoverable parse-error conditions.
///
/// Variants map 1:1 onto the standard's error names; `as_str` yields the
/// canonical kebab-case form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorCode {
    AbruptClosingOfEmptyComment,
    AbruptDoctypePublicIdentifier,
    AbruptDoctypeSystemIdentifier,
    AbsenceOfDigitsInNumericCharacterReference,
    CdataInHtmlContent,
    CharacterReferenceOutsideUnicodeRange,
    ControlCharacterReference,
    DuplicateAttribute,
    EndTagWithAttributes,
    EndTagWithTrailingSolidus,
    EofBeforeTagName,
    EofInCdata,
    EofInComment,
    EofInDoctype,
    EofInScriptHtmlCommentLikeText,
    EofInTag,
    IncorrectlyClosedComment,
    IncorrectlyOpenedComment,
    InvalidCharacterSequenceAfterDoctypeName,
    InvalidFirstCharacterOfTagName,
    MissingAttributeValue,
    MissingDoctypeName,
    MissingDoctypePublicIdentifier,
    MissingDoctypeSystemIdentifier,
    MissingEndTagName,
    MissingQuoteBeforeDoctypePublicIdentifier,
    MissingQuoteBeforeDoctypeSystemIdentifier,
    MissingSemicolonAfterCharacterReference,
    MissingWhitespaceAfterDoctypePublicKeyword,
    MissingWhitespaceAfterDoctypeSystemKeyword,
    MissingWhitespaceBeforeDoctypeName,
    MissingWhitespaceBetweenAttributes,
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    NestedComment,
    NoncharacterCharacterReference,
    NullCharacterReference,
    SurrogateCharacterReference,
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    UnexpectedCharacterInAttributeName,
    UnexpectedCharacterInUnquotedAttributeValue,
    UnexpectedEqualsSignBeforeAttributeName,
    UnexpectedNullCharacter,
    UnexpectedQuestionMarkInsteadOfTagName,
    UnexpectedSolidusInTag,
    UnknownNamedCharacterReference,
    // Tree-construction errors. The standard treats these as one generic
    // "parse error"; the split below preserves which recovery rule fired.
    UnexpectedDoctype,
    UnexpectedStartTag,
    UnexpectedEndTag,
    UnexpectedCharacter,
    UnexpectedEof,
    MisnestedTag,
    NestedNoscriptInHead,
    NonVoidHtmlElementStartTagWithTrailingSolidus,
}

impl ParseErrorCode {
    pub fn as_str(self) -> &'static str {
        use ParseErrorCode::*;
        match self {
            AbruptClosingOfEmptyComment => "abrupt-closing-of-empty-comment",
            AbruptDoctypePublicIdentifier => "abrupt-doctype-public-identifier",
            AbruptDoctypeSystemIdentifier => "abrupt-doctype-system-identifier",
            AbsenceOfDigitsInNumericCharacterReference => {
                "absence-of-digits-in-numeric-character-reference"
            }
            CdataInHtmlContent => "cdata-in-html-content",
            CharacterReferenceOutsideUnicodeRange => "character-reference-outside-unicode-range",
            ControlCharacterReference => "control-character-reference",
            DuplicateAttribute => "duplicate-attribute",
            EndTagWithAttributes => "end-tag-with-attributes",
            EndTagWithTrailingSolidus => "end-tag-with-trailing-solidus",
            EofBeforeTagName => "eof-before-tag-name",
            EofInCdata => "eof-in-cdata",
            EofInComment => "eof-in-comment",
            EofInDoctype => "eof-in-doctype",
            EofInScriptHtmlCommentLikeText => "eof-in-script-html-comment-like-text",
            EofInTag => "eof-in-tag",
            IncorrectlyClosedComment => "incorrectly-closed-comment",
            IncorrectlyOpenedComment => "incorrectly-opened-comment",
            InvalidCharacterSequenceAfterDoctypeName => {
                "invalid-character-sequence-after-doctype-name"
            }
            InvalidFirstCharacterOfTagName => "invalid-first-character-of-tag-name",
            MissingAttributeValue => "missing-attribute-value",
            MissingDoctypeName => "missing-doctype-name",
            MissingDoctypePublicIdentifier => "missing-doctype-public-identifier",
            MissingDoctypeSystemIdentifier => "missing-doctype-system-identifier",
            MissingEndTagName => "missing-end-tag-name",
            MissingQuoteBeforeDoctypePublicIdentifier => {
                "missing-quote-before-doctype-public-identifier"
            }
            MissingQuoteBeforeDoctypeSystemIdentifier => {
                "missing-quote-before-doctype-system-identifier"
            }
            MissingSemicolonAfterCharacterReference => {
                "missing-semicolon-after-character-reference"
            }
            MissingWhitespaceAfterDoctypePublicKeyword => {
                "missing-whitespace-after-doctype-public-keyword"
            }
            MissingWhitespaceAfterDoctypeSystemKeyword => {
                "missing-whitespace-after-doctype-system-keyword"
            }
            MissingWhitespaceBeforeDoctypeName => "missing-whitespace-before-doctype-name",
            MissingWhitespaceBetweenAttributes => "missing-whitespace-between-attributes",
            MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers => {
                "missing-whitespace-between-doctype-public-and-system-identifiers"
            }
            NestedComment => "nested-comment",
            NoncharacterCharacterReference => "noncharacter-character-reference",
            NullCharacterReference => "null-character-reference",
            SurrogateCharacterReference => "surrogate-character-reference",
            UnexpectedCharacterAfterDoctypeSystemIdentifier => {
                "unexpected-character-after-doctype-system-identifier"
            }
            UnexpectedCharacterInAttributeName => "unexpected-character-in-attribute-name",
            UnexpectedCharacterInUnquotedAttributeValue => {
                "unexpected-character-in-unquoted-attribute-value"
            }
            UnexpectedEqualsSignBeforeAttributeName => {
                "unexpected-equals-sign-before-attribute-name"
            }
            UnexpectedNullCharacter => "unexpected-null-character",
            UnexpectedQuestionMarkInsteadOfTagName => {
                "unexpected-question-mark-instead-of-tag-name"
            }
            UnexpectedSolidusInTag => "unexpected-solidus-in-tag",
            UnknownNamedCharacterReference => "unknown-named-character-reference",
            UnexpectedDoctype => "unexpected-doctype",
            UnexpectedStartTag => "unexpected-start-tag",
            UnexpectedEndTag => "unexpected-end-tag",
            UnexpectedCharacter => "unexpected-character",
            UnexpectedEof => "unexpected-eof",
            MisnestedTag => "misnested-tag",
            NestedNoscriptInHead => "nested-noscript-in-head",
            NonVoidHtmlElementStartTagWithTrailingSolidus => {
                "non-void-html-element-start-tag-with-trailing-solidus"
            }
        }
    }
}

impl fmt::Display for ParseErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded parse error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ParseErrorCode,
    /// Byte offset into the decoded, newline-normalized input.
    pub offset: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.code, self.offset)
    }
}

/// Error tracking policy.
#[derive(Clone, Copy, Debug)]
pub struct ErrorPolicy {
    /// Whether to store parse errors at all.
    pub track: bool,
    /// Maximum number of stored errors; later errors are counted but dropped.
    pub max_stored: usize,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            track: true,
            max_stored: 1024,
        }
    }
}

/// Bounded parse-error accumulator shared by the tokenizer and tree builder.
#[derive(Debug)]
pub(crate) struct ErrorSink {
    policy: ErrorPolicy,
    errors: Vec<ParseError>,
    total: u64,
}

impl ErrorSink {
    pub(crate) fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            errors: Vec::new(),
            total: 0,
        }
    }

    pub(crate) fn record(&mut self, code: ParseErrorCode, offset: usize) {
        self.total += 1;
        if self.policy.track && self.errors.len() < self.policy.max_stored {
            self.errors.push(ParseError { code, offset });
        }
        #[cfg(any(test, feature = "debug-stats"))]
        log::trace!(target: "html.parse_error", "{code} @{offset}");
    }

    /// Total count, including errors dropped by the storage bound.
    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    pub(crate) fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    #[cfg(test)]
    pub(crate) fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    #[cfg(test)]
    pub(crate) fn codes(&self) -> Vec<ParseErrorCode> {
        self.errors.iter().map(|e| e.code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_sink_respects_storage_bound() {
        let mut sink = ErrorSink::new(ErrorPolicy {
            track: true,
            max_stored: 2,
        });
        sink.record(ParseErrorCode::UnexpectedNullCharacter, 0);
        sink.record(ParseErrorCode::UnexpectedNullCharacter, 1);
        sink.record(ParseErrorCode::UnexpectedNullCharacter, 2);
        assert_eq!(sink.errors().len(), 2);
        assert_eq!(sink.total(), 3);
    }

    #[test]
    fn error_sink_counts_when_tracking_disabled() {
        let mut sink = ErrorSink::new(ErrorPolicy {
            track: false,
            max_stored: 16,
        });
        sink.record(ParseErrorCode::EofInTag, 5);
        assert!(sink.errors().is_empty());
        assert_eq!(sink.total(), 1);
    }

    #[test]
    fn error_codes_render_kebab_case() {
        assert_eq!(
            ParseErrorCode::MissingSemicolonAfterCharacterReference.as_str(),
            "missing-semicolon-after-character-reference"
        );
        assert_eq!(
            ParseError {
                code: ParseErrorCode::EofBeforeTagName,
                offset: 7
            }
            .to_string(),
            "eof-before-tag-name at byte 7"
        );
    }
}

use super::{State, Tokenizer};
use crate::error::{ErrorPolicy, ErrorSink, ParseErrorCode};
use crate::input::InputStream;
use crate::token::Token;

fn tokenize_str(input: &str) -> (Vec<Token>, Vec<ParseErrorCode>) {
    let mut errors = ErrorSink::new(ErrorPolicy::default());
    let mut tokenizer = Tokenizer::new(InputStream::new(input.to_string()));
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token(&mut errors) {
        tokens.push(token);
    }
    (tokens, errors.codes())
}

fn text_of(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Character { scalar } => Some(*scalar),
            _ => None,
        })
        .collect()
}

fn start_tags(tokens: &[Token]) -> Vec<&Token> {
    tokens
        .iter()
        .filter(|t| matches!(t, Token::StartTag(_)))
        .collect()
}

#[test]
fn tag_and_attribute_names_are_ascii_lowercased() {
    let (tokens, errors) = tokenize_str("<DIV Class=\"X\" ID=y>t</DIV>");
    assert!(errors.is_empty());
    let Token::StartTag(tag) = &tokens[0] else {
        panic!("expected start tag, got {tokens:?}");
    };
    assert_eq!(tag.name, "div");
    assert_eq!(tag.attrs.len(), 2);
    assert_eq!(tag.attrs[0].name, "class");
    assert_eq!(tag.attrs[0].value, "X");
    assert_eq!(tag.attrs[1].name, "id");
    assert_eq!(tag.attrs[1].value, "y");
    let Token::EndTag(end) = &tokens[2] else {
        panic!("expected end tag, got {tokens:?}");
    };
    assert_eq!(end.name, "div");
}

#[test]
fn duplicate_attribute_keeps_the_first_occurrence() {
    let (tokens, errors) = tokenize_str("<a href=1 href=2 id=x>");
    let Token::StartTag(tag) = &tokens[0] else {
        panic!("expected start tag");
    };
    assert_eq!(tag.attrs.len(), 2);
    assert_eq!(tag.attr("href"), Some("1"));
    assert_eq!(tag.attr("id"), Some("x"));
    assert_eq!(errors, vec![ParseErrorCode::DuplicateAttribute]);
}

#[test]
fn self_closing_flag_is_reported() {
    let (tokens, _) = tokenize_str("<br/><img />");
    for token in start_tags(&tokens) {
        let Token::StartTag(tag) = token else {
            unreachable!()
        };
        assert!(tag.self_closing, "{} should be self-closing", tag.name);
    }
}

#[test]
fn comment_variants_tokenize_per_recovery_rules() {
    let (tokens, errors) = tokenize_str("<!-- hi -->");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: " hi ".to_string()
        }
    );
    assert!(errors.is_empty());

    let (tokens, errors) = tokenize_str("<!-->");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: String::new()
        }
    );
    assert_eq!(errors, vec![ParseErrorCode::AbruptClosingOfEmptyComment]);

    let (tokens, errors) = tokenize_str("<!--a--!>");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: "a".to_string()
        }
    );
    assert_eq!(errors, vec![ParseErrorCode::IncorrectlyClosedComment]);

    let (tokens, errors) = tokenize_str("<!--a<!--b-->");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: "a<!--b".to_string()
        }
    );
    assert_eq!(errors, vec![ParseErrorCode::NestedComment]);
}

#[test]
fn bogus_markup_declaration_becomes_a_comment() {
    let (tokens, errors) = tokenize_str("<!ELEMENT br EMPTY>");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: "ELEMENT br EMPTY".to_string()
        }
    );
    assert_eq!(errors, vec![ParseErrorCode::IncorrectlyOpenedComment]);
}

#[test]
fn doctype_with_identifiers_is_parsed() {
    let (tokens, errors) = tokenize_str(
        "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">",
    );
    let Token::Doctype(d) = &tokens[0] else {
        panic!("expected doctype");
    };
    assert_eq!(d.name.as_deref(), Some("html"));
    assert_eq!(d.public_id.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
    assert_eq!(
        d.system_id.as_deref(),
        Some("http://www.w3.org/TR/html4/strict.dtd")
    );
    assert!(!d.force_quirks);
    assert!(errors.is_empty());
}

#[test]
fn doctype_eof_forces_quirks() {
    let (tokens, errors) = tokenize_str("<!DOCTYPE htm");
    let Token::Doctype(d) = &tokens[0] else {
        panic!("expected doctype");
    };
    assert!(d.force_quirks);
    assert_eq!(errors, vec![ParseErrorCode::EofInDoctype]);
}

#[test]
fn named_reference_with_semicolon_resolves() {
    let (tokens, errors) = tokenize_str("a&amp;b");
    assert_eq!(text_of(&tokens), "a&b");
    assert!(errors.is_empty());

    let (tokens, errors) = tokenize_str("x&notin;y");
    assert_eq!(text_of(&tokens), "x\u{2209}y");
    assert!(errors.is_empty());
}

#[test]
fn named_reference_without_semicolon_is_a_parse_error() {
    let (tokens, errors) = tokenize_str("<p>&amp</p>");
    assert_eq!(text_of(&tokens), "&");
    assert_eq!(
        errors,
        vec![ParseErrorCode::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn longest_prefix_beats_shorter_legacy_name() {
    // "&notit" resolves the legacy "not", then the rest flows as text.
    let (tokens, errors) = tokenize_str("&notit");
    assert_eq!(text_of(&tokens), "\u{AC}it");
    assert_eq!(
        errors,
        vec![ParseErrorCode::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn in_attribute_legacy_reference_before_equals_stays_literal() {
    let (tokens, errors) = tokenize_str("<a href=\"q?a=b&amp=c&lt;d\">");
    let Token::StartTag(tag) = &tokens[0] else {
        panic!("expected start tag");
    };
    // "&amp=" keeps its raw spelling (historical rule, no error);
    // "&lt;" decodes normally.
    assert_eq!(tag.attr("href"), Some("q?a=b&amp=c<d"));
    assert!(errors.is_empty());
}

#[test]
fn unknown_named_reference_flows_through_ambiguous_ampersand() {
    let (tokens, errors) = tokenize_str("&nosuch;");
    assert_eq!(text_of(&tokens), "&nosuch;");
    assert_eq!(errors, vec![ParseErrorCode::UnknownNamedCharacterReference]);

    let (tokens, errors) = tokenize_str("&nosuch ");
    assert_eq!(text_of(&tokens), "&nosuch ");
    assert!(errors.is_empty());
}

#[test]
fn numeric_references_apply_end_state_fixups() {
    let (tokens, errors) = tokenize_str("&#65;&#x42;");
    assert_eq!(text_of(&tokens), "AB");
    assert!(errors.is_empty());

    let (tokens, errors) = tokenize_str("&#0;");
    assert_eq!(text_of(&tokens), "\u{FFFD}");
    assert_eq!(errors, vec![ParseErrorCode::NullCharacterReference]);

    let (tokens, errors) = tokenize_str("&#x110000;");
    assert_eq!(text_of(&tokens), "\u{FFFD}");
    assert_eq!(
        errors,
        vec![ParseErrorCode::CharacterReferenceOutsideUnicodeRange]
    );

    let (tokens, errors) = tokenize_str("&#xD800;");
    assert_eq!(text_of(&tokens), "\u{FFFD}");
    assert_eq!(errors, vec![ParseErrorCode::SurrogateCharacterReference]);

    // Windows-1252 override range.
    let (tokens, errors) = tokenize_str("&#x80;");
    assert_eq!(text_of(&tokens), "\u{20AC}");
    assert_eq!(errors, vec![ParseErrorCode::ControlCharacterReference]);

    let (tokens, errors) = tokenize_str("&#x;");
    assert_eq!(text_of(&tokens), "&#x;");
    assert_eq!(
        errors,
        vec![ParseErrorCode::AbsenceOfDigitsInNumericCharacterReference]
    );
}

#[test]
fn null_in_data_is_preserved_with_an_error() {
    let (tokens, errors) = tokenize_str("a\0b");
    assert_eq!(text_of(&tokens), "a\0b");
    assert_eq!(errors, vec![ParseErrorCode::UnexpectedNullCharacter]);
}

#[test]
fn stray_less_than_recovers_as_text() {
    let (tokens, errors) = tokenize_str("1<2");
    assert_eq!(text_of(&tokens), "1<2");
    assert_eq!(errors, vec![ParseErrorCode::InvalidFirstCharacterOfTagName]);

    let (tokens, errors) = tokenize_str("a</>b");
    assert_eq!(text_of(&tokens), "ab");
    assert_eq!(errors, vec![ParseErrorCode::MissingEndTagName]);
}

#[test]
fn eof_inside_a_tag_discards_the_tag() {
    let (tokens, errors) = tokenize_str("<div class=");
    assert_eq!(tokens, vec![Token::Eof]);
    assert_eq!(errors, vec![ParseErrorCode::EofInTag]);
}

#[test]
fn rcdata_respects_the_appropriate_end_tag() {
    let mut errors = ErrorSink::new(ErrorPolicy::default());
    let mut tokenizer = Tokenizer::new(InputStream::new(
        "<title>a</tx>b</title>c".to_string(),
    ));
    let first = tokenizer.next_token(&mut errors).unwrap();
    assert!(matches!(first, Token::StartTag(ref t) if t.name == "title"));
    // The tree builder switches the tokenizer at the element boundary.
    tokenizer.set_state(State::Rcdata);
    let mut rest = Vec::new();
    while let Some(token) = tokenizer.next_token(&mut errors) {
        rest.push(token);
    }
    assert_eq!(text_of(&rest), "a</tx>bc");
    assert!(
        rest.iter()
            .any(|t| matches!(t, Token::EndTag(tag) if tag.name == "title"))
    );
}

#[test]
fn script_data_escapes_hide_a_nested_close_tag() {
    let mut errors = ErrorSink::new(ErrorPolicy::default());
    let input = "<script><!--<script>x</script>--></script>done";
    let mut tokenizer = Tokenizer::new(InputStream::new(input.to_string()));
    let first = tokenizer.next_token(&mut errors).unwrap();
    assert!(matches!(first, Token::StartTag(ref t) if t.name == "script"));
    tokenizer.set_state(State::ScriptData);
    let mut rest = Vec::new();
    while let Some(token) = tokenizer.next_token(&mut errors) {
        rest.push(token);
    }
    // The double-escaped inner </script> stays character data; the outer one
    // closes the element.
    assert_eq!(text_of(&rest), "<!--<script>x</script>-->done");
    let ends: Vec<_> = rest
        .iter()
        .filter(|t| matches!(t, Token::EndTag(tag) if tag.name == "script"))
        .collect();
    assert_eq!(ends.len(), 1);
}

#[test]
fn plaintext_consumes_everything_to_eof() {
    let mut errors = ErrorSink::new(ErrorPolicy::default());
    let mut tokenizer = Tokenizer::new(InputStream::new(
        "<plaintext></plaintext><b>".to_string(),
    ));
    let first = tokenizer.next_token(&mut errors).unwrap();
    assert!(matches!(first, Token::StartTag(ref t) if t.name == "plaintext"));
    tokenizer.set_state(State::Plaintext);
    let mut rest = Vec::new();
    while let Some(token) = tokenizer.next_token(&mut errors) {
        rest.push(token);
    }
    assert_eq!(text_of(&rest), "</plaintext><b>");
}

#[test]
fn cdata_in_html_content_becomes_a_bogus_comment() {
    let (tokens, errors) = tokenize_str("<![CDATA[x]]>");
    assert_eq!(
        tokens[0],
        Token::Comment {
            data: "[CDATA[x]]".to_string()
        }
    );
    assert_eq!(errors, vec![ParseErrorCode::CdataInHtmlContent]);
}

#[test]
fn cdata_section_emits_characters_when_allowed() {
    let mut errors = ErrorSink::new(ErrorPolicy::default());
    let mut tokenizer = Tokenizer::new(InputStream::new("<![CDATA[a]b]]>c".to_string()));
    tokenizer.set_cdata_allowed(true);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token(&mut errors) {
        tokens.push(token);
    }
    assert_eq!(text_of(&tokens), "a]bc");
    assert!(errors.codes().is_empty());
}

#[test]
fn end_tag_with_attributes_is_reported() {
    let (tokens, errors) = tokenize_str("</div id=x>");
    assert!(matches!(&tokens[0], Token::EndTag(tag) if tag.name == "div" && tag.attrs.is_empty()));
    assert_eq!(errors, vec![ParseErrorCode::EndTagWithAttributes]);
}

#[test]
fn character_reference_in_rcdata_text_decodes() {
    let mut errors = ErrorSink::new(ErrorPolicy::default());
    let mut tokenizer = Tokenizer::new(InputStream::new("<title>&amp;</title>".to_string()));
    let _ = tokenizer.next_token(&mut errors).unwrap();
    tokenizer.set_state(State::Rcdata);
    let mut rest = Vec::new();
    while let Some(token) = tokenizer.next_token(&mut errors) {
        rest.push(token);
    }
    assert_eq!(text_of(&rest), "&");
}

#[test]
fn newline_normalization_reaches_token_text() {
    let (tokens, _) = tokenize_str("a\r\nb\rc");
    assert_eq!(text_of(&tokens), "a\nb\nc");
}

//! Token model.
//!
//! The six-variant sum emitted by the tokenizer. Tag and attribute names are
//! already ASCII-lowercased by the tokenizer; DOM construction and end-tag
//! matching rely on direct equality.

/// HTML attribute. Duplicate names never survive tokenization (first wins,
/// `duplicate-attribute` recorded).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagToken {
    pub name: String,
    pub self_closing: bool,
    pub attrs: Vec<Attribute>,
}

impl TagToken {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoctypeToken {
    pub name: Option<String>,
    pub public_id: Option<String>,
    pub system_id: Option<String>,
    pub force_quirks: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Doctype(DoctypeToken),
    StartTag(TagToken),
    EndTag(TagToken),
    Comment { data: String },
    Character { scalar: char },
    Eof,
}

impl Token {
    pub fn is_whitespace(&self) -> bool {
        matches!(
            self,
            Token::Character {
                scalar: '\t' | '\n' | '\u{C}' | '\r' | ' '
            }
        )
    }

    /// Compact single-line rendering for test assertions and trace logs.
    #[cfg(any(test, feature = "debug-stats"))]
    pub fn summary(&self) -> String {
        match self {
            Token::Doctype(d) => format!(
                "DOCTYPE({}{}{}{})",
                d.name.as_deref().unwrap_or(""),
                d.public_id
                    .as_deref()
                    .map(|p| format!(" public={p:?}"))
                    .unwrap_or_default(),
                d.system_id
                    .as_deref()
                    .map(|s| format!(" system={s:?}"))
                    .unwrap_or_default(),
                if d.force_quirks { " quirks" } else { "" },
            ),
            Token::StartTag(t) => {
                let mut s = format!("<{}", t.name);
                for a in &t.attrs {
                    s.push_str(&format!(" {}={:?}", a.name, a.value));
                }
                if t.self_closing {
                    s.push('/');
                }
                s.push('>');
                s
            }
            Token::EndTag(t) => format!("</{}>", t.name),
            Token::Comment { data } => format!("<!--{data}-->"),
            Token::Character { scalar } => format!("char({scalar:?})"),
            Token::Eof => "EOF".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_classification_matches_html_space_set() {
        for scalar in ['\t', '\n', '\u{C}', '\r', ' '] {
            assert!(Token::Character { scalar }.is_whitespace());
        }
        assert!(!Token::Character { scalar: '\u{A0}' }.is_whitespace());
        assert!(!Token::Eof.is_whitespace());
    }

    #[test]
    fn tag_attr_lookup_is_exact_match() {
        let tag = TagToken {
            name: "input".to_string(),
            self_closing: false,
            attrs: vec![Attribute {
                name: "type".to_string(),
                value: "Hidden".to_string(),
            }],
        };
        assert_eq!(tag.attr("type"), Some("Hidden"));
        assert_eq!(tag.attr("TYPE"), None);
    }
}

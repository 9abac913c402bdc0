//! HTML parser: byte stream in, DOM tree out.
//!
//! The two-stage pipeline from the HTML Standard: a tokenizer state machine
//! feeding an insertion-mode tree builder over a shared synchronous call
//! stack. The tree builder may switch the tokenizer's state between tokens
//! (raw-text elements, plaintext), and the parser never aborts on malformed
//! input: parse errors accumulate on the returned [`Document`].
//!
//! ```
//! let doc = wren_html::parse(b"<!DOCTYPE html><p>hi</p>");
//! assert!(doc.parse_errors().is_empty());
//! assert!(doc.body().is_some());
//! ```

pub mod dom;
mod entities;
mod error;
mod input;
mod token;
mod tokenizer;
mod tree_builder;

pub use dom::{
    Document, ElementData, ElementFlags, Namespace, Node, NodeData, NodeId, ParserStats,
    QuirksMode,
};
pub use error::{ErrorPolicy, ParseError, ParseErrorCode};
pub use input::Charset;
pub use token::{Attribute, DoctypeToken, TagToken, Token};

use error::ErrorSink;
use input::InputStream;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokenizer::Tokenizer;
use tree_builder::TreeBuilder;

/// Parse options. The charset is the caller's declaration; no sniffing
/// happens here.
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// The scripting flag. Observed by the parser (noscript handling, the
    /// script element's bookkeeping); no scripts ever run.
    pub scripting: bool,
    pub charset: Charset,
    pub error_policy: ErrorPolicy,
    /// Cooperative cancellation, checked between tokens. On abort the
    /// partially built document is returned as-is.
    pub abort: Option<Arc<AtomicBool>>,
}

/// Parse a byte stream with default options (UTF-8, scripting off).
pub fn parse(input: &[u8]) -> Document {
    parse_with_options(input, ParseOptions::default())
}

/// Parse a byte stream into a [`Document`]. Always returns a document; a
/// conformant input leaves `Document::parse_errors` empty.
pub fn parse_with_options(input: &[u8], options: ParseOptions) -> Document {
    let decoded = input::decode(input, options.charset);
    let mut errors = ErrorSink::new(options.error_policy);
    let mut tokenizer = Tokenizer::new(InputStream::new(decoded));
    let mut builder = TreeBuilder::new(options.scripting);
    loop {
        if options
            .abort
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            break;
        }
        let Some(token) = tokenizer.next_token(&mut errors) else {
            break;
        };
        builder.process_token(token, &mut tokenizer, &mut errors);
        // Keep the tokenizer's CDATA gate in sync with the adjusted current
        // node before the next character is consumed.
        tokenizer.set_cdata_allowed(builder.adjusted_current_is_foreign());
    }
    builder.finish(errors, &tokenizer)
}

/// Run the tokenizer alone with a trivial sink that records tokens.
///
/// No tree builder is attached, so no state overrides happen: raw-text
/// elements tokenize as ordinary markup. Useful for tokenizer-level tests
/// and debugging.
pub fn tokenize(input: &[u8], options: ParseOptions) -> (Vec<Token>, Vec<ParseError>) {
    let decoded = input::decode(input, options.charset);
    let mut errors = ErrorSink::new(options.error_policy);
    let mut tokenizer = Tokenizer::new(InputStream::new(decoded));
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token(&mut errors) {
        tokens.push(token);
    }
    (tokens, errors.into_errors())
}

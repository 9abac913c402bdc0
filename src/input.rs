//! Decoded input stream for the tokenizer.
//!
//! Invariants:
//! - The buffer is fully normalized before the first consume: every CRLF
//!   collapsed to LF, every remaining CR replaced with LF. Normalization is
//!   idempotent.
//! - U+0000 is preserved here; the tokenizer replaces it per-state because the
//!   standard's null handling differs between states.
//! - The cursor is monotonic except for `reconsume`, which moves back by
//!   exactly one scalar and is legal only immediately after a consume.

use memchr::memchr;

/// Caller-declared input encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Charset {
    #[default]
    Utf8,
    Windows1252,
}

/// Case mode for `next_matches`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseMode {
    Exact,
    AsciiInsensitive,
}

/// Decode raw bytes to Unicode scalar values per the declared charset.
///
/// Undecodable byte sequences become U+FFFD. A UTF-8 BOM at offset 0 is
/// consumed silently regardless of charset.
pub(crate) fn decode(bytes: &[u8], charset: Charset) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match charset {
        Charset::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        Charset::Windows1252 => bytes
            .iter()
            .map(|&b| match b {
                0x80..=0x9F => windows_1252_remap(u32::from(b)).unwrap_or(char::from(b)),
                _ => char::from(b),
            })
            .collect(),
    }
}

/// Windows-1252 mapping for the 0x80–0x9F range.
///
/// Shared by the byte decoder and the numeric character reference end state
/// (the standard's override table is exactly this mapping). Bytes with no
/// assignment return `None` and pass through as C1 controls.
pub(crate) fn windows_1252_remap(code: u32) -> Option<char> {
    Some(match code {
        0x80 => '\u{20AC}',
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}',
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x8E => '\u{017D}',
        0x91 => '\u{2018}',
        0x92 => '\u{2019}',
        0x93 => '\u{201C}',
        0x94 => '\u{201D}',
        0x95 => '\u{2022}',
        0x96 => '\u{2013}',
        0x97 => '\u{2014}',
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}',
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9E => '\u{017E}',
        0x9F => '\u{0178}',
        _ => return None,
    })
}

/// Newline-normalized scalar stream with a single-step reconsume.
#[derive(Debug)]
pub(crate) struct InputStream {
    buffer: String,
    cursor: usize,
    /// Byte length of the scalar most recently consumed; 0 when reconsume is
    /// not legal (stream start, after reconsume, after EOF probe).
    last_len: usize,
}

impl InputStream {
    pub(crate) fn new(decoded: String) -> Self {
        Self {
            buffer: normalize_newlines(decoded),
            cursor: 0,
            last_len: 0,
        }
    }

    /// Byte offset of the next unconsumed scalar. Used to stamp parse errors.
    pub(crate) fn pos(&self) -> usize {
        self.cursor
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.cursor >= self.buffer.len()
    }

    /// Consume one scalar; `None` at end of stream.
    pub(crate) fn consume(&mut self) -> Option<char> {
        let ch = self.buffer[self.cursor..].chars().next()?;
        self.last_len = ch.len_utf8();
        self.cursor += self.last_len;
        Some(ch)
    }

    /// Move the cursor back by the scalar just consumed.
    ///
    /// Legal only immediately after `consume` returned a scalar; the guard
    /// degrades to a no-op in release builds.
    pub(crate) fn reconsume(&mut self) {
        debug_assert!(self.last_len > 0, "reconsume without a preceding consume");
        self.cursor -= self.last_len;
        self.last_len = 0;
        debug_assert!(self.buffer.is_char_boundary(self.cursor));
    }

    /// View of up to `n` scalars without advancing.
    pub(crate) fn peek_n(&self, n: usize) -> &str {
        let rest = &self.buffer[self.cursor..];
        match rest.char_indices().nth(n) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// Consume up to `n` scalars and return the consumed prefix.
    ///
    /// A multi-scalar consume cannot be reconsumed.
    pub(crate) fn consume_n(&mut self, n: usize) -> &str {
        let start = self.cursor;
        let len = self.peek_n(n).len();
        self.cursor += len;
        self.last_len = 0;
        &self.buffer[start..start + len]
    }

    /// Everything not yet consumed. Named-reference matching scans this.
    pub(crate) fn remaining(&self) -> &str {
        &self.buffer[self.cursor..]
    }

    /// Advance by `len` bytes of already-inspected `remaining()` content.
    pub(crate) fn advance(&mut self, len: usize) {
        debug_assert!(self.buffer.is_char_boundary(self.cursor + len));
        self.cursor += len;
        self.last_len = 0;
    }

    /// Lookahead match against the next scalars, without advancing.
    pub(crate) fn next_matches(&self, seq: &str, case: CaseMode) -> bool {
        let rest = &self.buffer[self.cursor..];
        match case {
            CaseMode::Exact => rest.as_bytes().starts_with(seq.as_bytes()),
            CaseMode::AsciiInsensitive => rest
                .as_bytes()
                .get(..seq.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(seq.as_bytes())),
        }
    }

    /// Byte offset of the next occurrence of any of up to three delimiter
    /// bytes, relative to the cursor. Fast path for text-run states.
    pub(crate) fn find_delimiter(&self, delims: &[u8]) -> Option<usize> {
        let rest = self.buffer[self.cursor..].as_bytes();
        match delims {
            [a] => memchr(*a, rest),
            [a, b] => memchr::memchr2(*a, *b, rest),
            [a, b, c] => memchr::memchr3(*a, *b, *c, rest),
            _ => unreachable!("at most three delimiter bytes are supported"),
        }
    }
}

fn normalize_newlines(raw: String) -> String {
    if memchr(b'\r', raw.as_bytes()).is_none() {
        return raw;
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newline_normalization_collapses_crlf_and_lone_cr() {
        let s = InputStream::new("a\r\nb\rc\nd\r\r\n".to_string());
        assert_eq!(s.remaining(), "a\nb\nc\nd\n\n");
    }

    #[test]
    fn newline_normalization_is_idempotent() {
        let once = normalize_newlines("x\r\ny\rz".to_string());
        let twice = normalize_newlines(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn reconsume_steps_back_one_scalar() {
        let mut s = InputStream::new("aπb".to_string());
        assert_eq!(s.consume(), Some('a'));
        assert_eq!(s.consume(), Some('π'));
        s.reconsume();
        assert_eq!(s.consume(), Some('π'));
        assert_eq!(s.consume(), Some('b'));
        assert_eq!(s.consume(), None);
        assert!(s.is_eof());
    }

    #[test]
    fn next_matches_case_modes() {
        let s = InputStream::new("DocType html".to_string());
        assert!(s.next_matches("DocType", CaseMode::Exact));
        assert!(!s.next_matches("DOCTYPE", CaseMode::Exact));
        assert!(s.next_matches("DOCTYPE", CaseMode::AsciiInsensitive));
        assert!(!s.next_matches("DOCTYPE html x", CaseMode::AsciiInsensitive));
    }

    #[test]
    fn consume_n_and_peek_n_stop_at_eof() {
        let mut s = InputStream::new("ab".to_string());
        assert_eq!(s.peek_n(5), "ab");
        assert_eq!(s.consume_n(5), "ab");
        assert!(s.is_eof());
    }

    #[test]
    fn decode_strips_bom_and_replaces_invalid_utf8() {
        assert_eq!(decode(b"\xEF\xBB\xBFhi", Charset::Utf8), "hi");
        assert_eq!(decode(b"a\xFFb", Charset::Utf8), "a\u{FFFD}b");
    }

    #[test]
    fn decode_windows_1252_remaps_c1_range() {
        assert_eq!(decode(b"\x80\x99", Charset::Windows1252), "\u{20AC}\u{2122}");
        assert_eq!(decode(b"\xE9", Charset::Windows1252), "é");
    }
}

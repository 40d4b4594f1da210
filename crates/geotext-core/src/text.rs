// crates/geotext-core/src/text.rs

//! Text folding and tokenization shared by the matcher and its builder.

use serde::{Deserialize, Serialize};

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use geotext_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).trim().to_lowercase()
}

/// Byte range of a match inside the original input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slice the original text with this span.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// A word of the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The word as it appears in the input.
    pub text: &'a str,
    /// The word after [`fold_key`].
    pub folded: String,
    pub span: Span,
}

/// Split `text` into maximal runs of alphanumeric characters.
///
/// Whitespace and punctuation only separate tokens, so `Guinea-Bissau`
/// yields `guinea`, `bissau` and `Côte d’Ivoire` yields `cote`, `d`, `ivoire`.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        match (ch.is_alphanumeric(), start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                tokens.push(make_token(text, s, idx));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(make_token(text, s, text.len()));
    }

    tokens
}

fn make_token(text: &str, start: usize, end: usize) -> Token<'_> {
    let word = &text[start..end];
    Token {
        text: word,
        folded: fold_key(word),
        span: Span::new(start, end),
    }
}

/// An acronym synonym (`US`, `U.S.`, `UAE`) only matches with exact case.
pub fn is_acronym(synonym: &str) -> bool {
    let letters: Vec<char> = synonym.chars().filter(|c| c.is_alphanumeric()).collect();
    !letters.is_empty()
        && letters.len() <= 4
        && letters.iter().all(|c| c.is_ascii_uppercase())
        && synonym.chars().all(|c| c.is_ascii_uppercase() || c == '.')
}

//! Word tokenization for WeirdText.
//!
//! A token is a maximal run of word characters (Unicode alphanumerics and
//! underscore, i.e. the `\w` class) addressed by character offsets into the
//! text it was extracted from. Offsets are in characters rather than bytes:
//! every substitution applied later is a permutation or a same-fingerprint
//! replacement of the word, so character offsets stay valid while byte
//! offsets would not survive a code-point swap.

/// One word-like occurrence in a text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Character offset of the first character (inclusive).
    pub start: usize,
    /// Character offset one past the last character (exclusive).
    pub end: usize,
    /// The original substring.
    pub value: String,
    /// Replacement assigned during encoding (the scrambled word) or
    /// decoding (the matched original word). `None` means the span is left
    /// untouched by substitution.
    pub resolved: Option<String>,
}

impl Token {
    /// Creates an unresolved token. `end` is derived from `start` and the
    /// character length of `value`.
    pub fn new(start: usize, value: impl Into<String>) -> Self {
        let value = value.into();
        let end = start + value.chars().count();
        Self {
            start,
            end,
            value,
            resolved: None,
        }
    }

    /// Character length of the token.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-length tokens (never produced by [`tokenize`]).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scans `text` left to right for maximal runs of word characters.
///
/// Pure function of its input: the same text always yields the same token
/// sequence, offsets included.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = None;
    let mut current = String::new();

    for (i, c) in text.chars().enumerate() {
        if is_word_char(c) {
            if start.is_none() {
                start = Some(i);
            }
            current.push(c);
        } else if let Some(s) = start.take() {
            tokens.push(Token::new(s, std::mem::take(&mut current)));
        }
    }

    if let Some(s) = start {
        tokens.push(Token::new(s, current));
    }

    tokens
}

/// Decides whether a word can be scrambled (and therefore matched back).
///
/// A word qualifies when it is longer than 3 characters and its interior
/// (everything but the first and last character) contains at least two
/// distinct characters. Words failing either test have no non-identity
/// interior permutation worth producing and are passed through unchanged.
///
/// Encoding and decoding apply the same predicate; round-trip correctness
/// depends on the two sides agreeing on which words were scrambled.
pub fn scramble_possible(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        return false;
    }

    let interior = &chars[1..chars.len() - 1];
    let first = interior[0];
    interior.iter().any(|&c| c != first)
}

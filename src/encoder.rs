//! Text encoding for WeirdText.
//!
//! This module orchestrates the encoding process:
//! 1. Tokenize the plain text
//! 2. Scramble the interior of every eligible word
//! 3. Substitute the scrambled words back into the text by offset
//! 4. Sort the original eligible words case-insensitively (the key list)
//! 5. Assemble the separator-delimited document
//!
//! Encoding never fails: ineligible words are simply left alone, and a text
//! with no eligible words yields a document with an empty key segment.

use rand::Rng;

use crate::text::scramble::scramble_word;
use crate::text::substitute::substitute_tokens;
use crate::text::token::{scramble_possible, tokenize};
use crate::SEPARATOR;

/// Result of encoding a text.
#[derive(Debug, Clone)]
pub struct EncodedText {
    /// The full encoded document - this is what gets transmitted.
    pub document: String,
    /// Number of words that were scrambled (for debugging/info).
    pub scrambled_word_count: usize,
}

/// Configuration for the encoder.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

/// Encodes `text` into a WeirdText document.
///
/// Uses the thread-local RNG; see [`encode_with_rng`] for deterministic
/// scrambling.
pub fn encode(text: &str) -> String {
    encode_with_config(text, &EncoderConfig::default()).document
}

/// Encodes a text with custom configuration.
pub fn encode_with_config(text: &str, config: &EncoderConfig) -> EncodedText {
    encode_with_rng(text, &mut rand::thread_rng(), config)
}

/// Encodes a text drawing scramble permutations from `rng`.
pub fn encode_with_rng<R: Rng>(text: &str, rng: &mut R, config: &EncoderConfig) -> EncodedText {
    let mut tokens = tokenize(text);
    let mut words = Vec::new();

    for token in &mut tokens {
        if !scramble_possible(&token.value) {
            continue;
        }

        token.resolved = Some(scramble_word(&token.value, rng));
        words.push(token.value.clone());
    }

    if config.verbose {
        eprintln!("Scrambled {} of {} words", words.len(), tokens.len());
    }

    // Case-insensitive ascending; stable sort keeps appearance order on ties
    words.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));

    let scrambled = substitute_tokens(text, &tokens);
    let document = format!(
        "{SEPARATOR}{scrambled}{SEPARATOR}{words}",
        words = words.join(" ")
    );

    EncodedText {
        document,
        scrambled_word_count: words.len(),
    }
}

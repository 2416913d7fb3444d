//! Text decoding for WeirdText.
//!
//! This module orchestrates the decoding process:
//! 1. Split the document into the scrambled text and the key-word list
//! 2. Tokenize both segments; keep only scrambleable occurrences
//! 3. Match key words to occurrences by recursive partition refinement
//! 4. Substitute the matched originals back into the scrambled text
//!
//! Decoding fails on structurally malformed documents and on documents
//! whose two segments disagree in word composition (tampering, truncation).
//! Residual ambiguity is NOT an error: groups that survive every
//! refinement stage are paired positionally and reported through
//! [`DecodedText::ambiguous_groups`].

use thiserror::Error;

use crate::matcher::resolve;
use crate::partition::PartitionKind;
use crate::text::substitute::substitute_tokens;
use crate::text::token::{scramble_possible, tokenize, Token};
use crate::SEPARATOR;

/// Errors that can occur during decoding.
#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("document does not start with the separator {SEPARATOR:?}")]
    MissingSeparator,

    #[error("expected exactly 2 document segments, found {0}")]
    SegmentCount(usize),

    #[error("key word '{0}' has no matching scrambled occurrence")]
    UnmatchedKeyWord(String),

    #[error("key group has {key} words but scrambled group has {encoded}")]
    GroupSizeMismatch { key: usize, encoded: usize },
}

/// Result of decoding a document.
#[derive(Debug, Clone)]
pub struct DecodedText {
    /// The reconstructed plain text.
    pub text: String,
    /// Number of word groups that could not be uniquely resolved and were
    /// paired positionally. Zero means the decode is exact.
    pub ambiguous_groups: usize,
}

/// Configuration for the decoder.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

/// Decodes a WeirdText document back into plain text.
pub fn decode(document: &str) -> Result<String, DecoderError> {
    decode_with_config(document, &DecoderConfig::default()).map(|decoded| decoded.text)
}

/// Decodes a document with custom configuration.
pub fn decode_with_config(
    document: &str,
    config: &DecoderConfig,
) -> Result<DecodedText, DecoderError> {
    let (encoded_text, key_words) = split_document(document)?;

    let key_tokens = tokenize(key_words);
    let encoded_tokens: Vec<Token> = tokenize(encoded_text)
        .into_iter()
        .filter(|token| scramble_possible(&token.value))
        .collect();

    if config.verbose {
        eprintln!(
            "Matching {} key words against {} scrambled occurrences",
            key_tokens.len(),
            encoded_tokens.len()
        );
    }

    let key_refs: Vec<&Token> = key_tokens.iter().collect();
    let encoded_refs: Vec<&Token> = encoded_tokens.iter().collect();

    let resolution = resolve(&key_refs, &encoded_refs, &PartitionKind::REFINEMENT_ORDER)?;

    if config.verbose && resolution.ambiguous_groups > 0 {
        eprintln!(
            "Warning: {} group(s) matched positionally, result may be inexact",
            resolution.ambiguous_groups
        );
    }

    Ok(DecodedText {
        text: substitute_tokens(encoded_text, &resolution.tokens),
        ambiguous_groups: resolution.ambiguous_groups,
    })
}

/// Splits a document into its scrambled-text and key-list segments.
///
/// The document must start with the separator and split into exactly two
/// non-empty segments; anything else is malformed.
fn split_document(document: &str) -> Result<(&str, &str), DecoderError> {
    if !document.starts_with(SEPARATOR) {
        return Err(DecoderError::MissingSeparator);
    }

    let segments: Vec<&str> = document
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.len() != 2 {
        return Err(DecoderError::SegmentCount(segments.len()));
    }

    Ok((segments[0], segments[1]))
}

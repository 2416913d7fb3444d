//! # WeirdText - reversible word scrambling
//!
//! WeirdText scrambles the interior letters of words while keeping their
//! first and last letters fixed, then ships the scrambled text together with
//! a sorted list of the original words (the "key"). Decoding reverses the
//! transform without any positional hints: the key list is alphabetical, the
//! scrambled occurrences are in appearance order, and the decoder has to
//! work out which original word belongs to which occurrence.
//!
//! ## Overview
//!
//! - Only "scrambleable" words are touched: longer than 3 characters, with
//!   at least two distinct interior characters. Everything else (short
//!   words, punctuation, whitespace) passes through unchanged.
//! - Scrambling is a random permutation of the interior that is guaranteed
//!   to differ from the original.
//! - Decoding matches key words to scrambled occurrences by partition
//!   refinement: words are grouped by shape (first/last letter and length),
//!   then by interior letter set, then by interior code-point sum, until
//!   every group pins down a unique correspondence.
//! - Matching is best-effort: two words with identical fingerprints can
//!   survive all refinement stages, in which case they are paired
//!   positionally and reported via [`DecodedText::ambiguous_groups`].
//!
//! ## Example Usage
//!
//! ```rust
//! use weirdtext::{decode, encode};
//!
//! let text = "This is a long looong test sentence,\nwith some big (biiiiig) words!";
//!
//! // Encode: scrambled text + sorted key list, separator-delimited
//! let document = encode(text);
//!
//! // Decode: reconstructs the original, word for word
//! let decoded = decode(&document).unwrap();
//! assert_eq!(decoded, text);
//! ```
//!
//! ## Modules
//!
//! - [`text`]: tokenization, eligibility, scrambling, substitution
//! - [`partition`]: the fixed set of word-grouping criteria
//! - [`matcher`]: recursive partition refinement
//! - [`encoder`]: plain text -> encoded document
//! - [`decoder`]: encoded document -> plain text
//!
//! [`DecodedText::ambiguous_groups`]: decoder::DecodedText

/// Separator between the scrambled text and the key-word list.
pub const SEPARATOR: &str = "\n-weird-\n";

pub mod decoder;
pub mod encoder;
pub mod matcher;
pub mod partition;
pub mod text;

// Re-export commonly used types at the crate root
pub use decoder::{decode, decode_with_config, DecodedText, DecoderConfig, DecoderError};
pub use encoder::{encode, encode_with_config, encode_with_rng, EncodedText, EncoderConfig};
pub use text::token::{scramble_possible, tokenize, Token};

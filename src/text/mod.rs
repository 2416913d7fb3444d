//! Text processing for WeirdText.
//!
//! This module provides:
//! - Word tokenization with character offsets
//! - The scramble-eligibility predicate
//! - Interior scrambling (random non-identity permutation)
//! - Offset-based substitution back into the source text

pub mod scramble;
pub mod substitute;
pub mod token;

pub use scramble::scramble_word;
pub use substitute::substitute_tokens;
pub use token::{scramble_possible, tokenize, Token};

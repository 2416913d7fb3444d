//! Offset-based substitution for WeirdText.

use crate::text::token::Token;

/// Replaces each resolved token's span in `text` with its resolved value.
///
/// Spans are addressed by the character offsets stored at tokenization time.
/// Every admissible replacement has the same character length as the span it
/// overwrites, so all offsets stay valid simultaneously and substitutions
/// can be applied in any order. Unresolved tokens are skipped, which is how
/// ineligible words and surrounding punctuation survive unchanged.
pub fn substitute_tokens(text: &str, tokens: &[Token]) -> String {
    let mut chars: Vec<char> = text.chars().collect();

    for token in tokens {
        let Some(resolved) = &token.resolved else {
            continue;
        };
        chars.splice(token.start..token.end, resolved.chars());
    }

    chars.into_iter().collect()
}

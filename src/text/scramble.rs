//! Interior scrambling for WeirdText.
//!
//! Scrambling keeps the first and last character of a word fixed and draws
//! uniform random permutations of the interior until one differs from the
//! original. Eligibility ([`scramble_possible`]) guarantees at least two
//! distinct interior characters, so a differing permutation always exists
//! and the rejection loop terminates.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::text::token::scramble_possible;

/// Scrambles the interior of `word`, leaving the first and last character
/// in place.
///
/// The returned word is never equal to the input. Ineligible words are
/// returned unchanged; callers are expected to filter with
/// [`scramble_possible`] first.
pub fn scramble_word<R: Rng>(word: &str, rng: &mut R) -> String {
    if !scramble_possible(word) {
        return word.to_string();
    }

    let chars: Vec<char> = word.chars().collect();
    let last = chars.len() - 1;
    let original: Vec<char> = chars[1..last].to_vec();
    let mut interior = original.clone();

    while interior == original {
        interior.shuffle(rng);
    }

    let mut scrambled = String::with_capacity(word.len());
    scrambled.push(chars[0]);
    scrambled.extend(&interior);
    scrambled.push(chars[last]);
    scrambled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(42)
    }

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_scramble_never_identity() {
        let mut rng = rng();

        for _ in 0..100 {
            let scrambled = scramble_word("sentence", &mut rng);
            assert_ne!(scrambled, "sentence");
        }
    }

    #[test]
    fn test_scramble_keeps_first_and_last() {
        let mut rng = rng();
        let scrambled = scramble_word("sentence", &mut rng);

        assert!(scrambled.starts_with('s'));
        assert!(scrambled.ends_with('e'));
    }

    #[test]
    fn test_scramble_is_permutation() {
        let mut rng = rng();
        let scrambled = scramble_word("combinatorial", &mut rng);

        assert_eq!(sorted_chars(&scrambled), sorted_chars("combinatorial"));
    }

    #[test]
    fn test_scramble_preserves_char_length() {
        let mut rng = rng();

        for word in ["long", "sentence", "niños", "führer"] {
            if !scramble_possible(word) {
                continue;
            }
            let scrambled = scramble_word(word, &mut rng);
            assert_eq!(scrambled.chars().count(), word.chars().count());
        }
    }

    #[test]
    fn test_scramble_two_interior_chars_swaps_them() {
        // "abcd" interior "bc" has exactly one non-identity permutation
        let mut rng = rng();
        assert_eq!(scramble_word("abcd", &mut rng), "acbd");
    }

    #[test]
    fn test_scramble_ineligible_passes_through() {
        let mut rng = rng();

        assert_eq!(scramble_word("big", &mut rng), "big");
        assert_eq!(scramble_word("biiiiig", &mut rng), "biiiiig");
    }

    #[test]
    fn test_scramble_preserves_eligibility() {
        let mut rng = rng();
        let scrambled = scramble_word("sentence", &mut rng);

        // same length, same letter multiset: the predicate must agree
        assert_eq!(scramble_possible(&scrambled), scramble_possible("sentence"));
    }
}

//! Word-grouping criteria for decode-time matching.
//!
//! A partition groups tokens by a key derived from the word's surface. The
//! criteria form a closed, ordered set: shape first (cheap and usually
//! discriminating), then interior letter set (collapses anagram interiors,
//! which is exactly what scrambling produces), then interior code-point sum
//! as a terminal tiebreak. The sum can in principle collide across distinct
//! letter multisets; that stage is treated as authoritative anyway, which is
//! a documented approximation rather than a uniqueness guarantee.

use std::collections::{BTreeSet, HashMap};

use crate::text::token::Token;

/// One of the fixed refinement criteria, applied in
/// [`PartitionKind::REFINEMENT_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionKind {
    /// First character, last character, and character length.
    Shape,
    /// Unordered set of interior characters.
    LetterSet,
    /// Sum of interior character code points. Terminal stage: its groups
    /// are always declared deterministic.
    CodeSum,
}

impl PartitionKind {
    /// The fixed order in which criteria refine ambiguous groups.
    pub const REFINEMENT_ORDER: [Self; 3] = [Self::Shape, Self::LetterSet, Self::CodeSum];

    /// Derives this criterion's grouping key for `word`.
    pub fn key(self, word: &str) -> PartitionKey {
        let chars: Vec<char> = word.chars().collect();
        let interior: &[char] = if chars.len() > 2 {
            &chars[1..chars.len() - 1]
        } else {
            &[]
        };

        match self {
            Self::Shape => PartitionKey::Shape(chars[0], chars[chars.len() - 1], chars.len()),
            Self::LetterSet => PartitionKey::LetterSet(interior.iter().copied().collect()),
            Self::CodeSum => PartitionKey::CodeSum(interior.iter().map(|&c| c as u32).sum()),
        }
    }

    /// Whether a group produced by this criterion needs no further
    /// refinement.
    pub fn is_deterministic(self, group: &[&Token]) -> bool {
        match self {
            Self::Shape | Self::LetterSet => group.len() == 1,
            Self::CodeSum => true,
        }
    }
}

/// A grouping of tokens under one [`PartitionKind`].
///
/// Every input token lands in exactly one group; within a group, tokens keep
/// their input order. The partition only holds references, it never touches
/// token state.
#[derive(Debug)]
pub struct Partition<'a> {
    groups: HashMap<PartitionKey, Vec<&'a Token>>,
}

impl<'a> Partition<'a> {
    /// Groups `tokens` by `kind`'s key function.
    pub fn build(kind: PartitionKind, tokens: &[&'a Token]) -> Self {
        let mut groups: HashMap<PartitionKey, Vec<&'a Token>> = HashMap::new();
        for &token in tokens {
            groups.entry(kind.key(&token.value)).or_default().push(token);
        }
        Self { groups }
    }

    /// Looks up the group sharing `key`, if any.
    pub fn get(&self, key: &PartitionKey) -> Option<&[&'a Token]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Iterates over `(key, group)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&PartitionKey, &[&'a Token])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when the partition holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A grouping key produced by one of the criteria.
///
/// Keys from different criteria never compare equal, so a single key type
/// can serve all refinement levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartitionKey {
    Shape(char, char, usize),
    LetterSet(BTreeSet<char>),
    CodeSum(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(0, *w)).collect()
    }

    fn refs(tokens: &[Token]) -> Vec<&Token> {
        tokens.iter().collect()
    }

    #[test]
    fn test_shape_key_ignores_interior_order() {
        let kind = PartitionKind::Shape;
        assert_eq!(kind.key("sentence"), kind.key("sneentce"));
        assert_ne!(kind.key("sentence"), kind.key("sentences"));
    }

    #[test]
    fn test_letter_set_key_is_anagram_invariant() {
        let kind = PartitionKind::LetterSet;
        assert_eq!(kind.key("looong"), kind.key("lonoog"));
        // repeated letters collapse: interiors "on" and "oon" share a set
        assert_eq!(kind.key("long"), kind.key("loong"));
    }

    #[test]
    fn test_code_sum_key() {
        // interior "bc" = 98 + 99
        assert_eq!(PartitionKind::CodeSum.key("abcd"), PartitionKey::CodeSum(197));
    }

    #[test]
    fn test_build_groups_every_token_once() {
        let tokens = tokens(&["word", "wrod", "test", "this"]);
        let partition = Partition::build(PartitionKind::Shape, &refs(&tokens));

        let total: usize = partition.iter().map(|(_, group)| group.len()).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_build_anagrams_share_shape_group() {
        let tokens = tokens(&["word", "wrod", "walked"]);
        let partition = Partition::build(PartitionKind::Shape, &refs(&tokens));

        let key = PartitionKind::Shape.key("word");
        let group = partition.get(&key).unwrap();
        assert_eq!(group.len(), 2);
        // insertion order preserved within the group
        assert_eq!(group[0].value, "word");
        assert_eq!(group[1].value, "wrod");
    }

    #[test]
    fn test_missing_key_lookup() {
        let tokens = tokens(&["word"]);
        let partition = Partition::build(PartitionKind::Shape, &refs(&tokens));

        assert!(partition.get(&PartitionKind::Shape.key("zebra")).is_none());
    }

    #[test]
    fn test_shape_and_letter_set_deterministic_on_singletons() {
        let tokens = tokens(&["word", "wrod"]);
        let all = refs(&tokens);
        let one = &all[..1];

        assert!(PartitionKind::Shape.is_deterministic(one));
        assert!(!PartitionKind::Shape.is_deterministic(&all));
        assert!(PartitionKind::LetterSet.is_deterministic(one));
        assert!(!PartitionKind::LetterSet.is_deterministic(&all));
    }

    #[test]
    fn test_code_sum_always_deterministic() {
        let tokens = tokens(&["word", "wrod", "drow"]);
        assert!(PartitionKind::CodeSum.is_deterministic(&refs(&tokens)));
    }

    #[test]
    fn test_keys_from_different_criteria_never_collide() {
        assert_ne!(
            PartitionKind::Shape.key("word"),
            PartitionKind::LetterSet.key("word")
        );
        assert_ne!(
            PartitionKind::LetterSet.key("word"),
            PartitionKind::CodeSum.key("word")
        );
    }
}

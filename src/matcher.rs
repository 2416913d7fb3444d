//! Recursive partition refinement.
//!
//! The matcher pairs key-list tokens (the sorted original words) with
//! scrambled occurrences. Both collections hold the same multiset of words
//! up to interior scrambling, so partitioning each side by the same derived
//! key yields groups that correspond one-to-one. Ambiguous groups are
//! re-partitioned by the next criterion; the terminal criterion accepts
//! whatever remains and pairs members positionally, counting such groups so
//! callers can surface the loss of certainty.

use crate::decoder::DecoderError;
use crate::partition::{Partition, PartitionKind};
use crate::text::token::Token;

/// Outcome of one refinement pass.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Scrambled-text tokens with their matched original word assigned to
    /// `resolved`.
    pub tokens: Vec<Token>,
    /// Number of groups that exhausted refinement with more than one member
    /// and were paired positionally as a best effort.
    pub ambiguous_groups: usize,
}

impl Resolution {
    fn merge(&mut self, other: Self) {
        self.tokens.extend(other.tokens);
        self.ambiguous_groups += other.ambiguous_groups;
    }
}

/// Matches `key_tokens` against `encoded_tokens` through `kinds`, applied in
/// order.
///
/// Each level partitions both sides with the same criterion and walks the
/// key-side groups: a group the criterion declares deterministic is paired
/// off, anything else recurses into the remaining criteria. A key-side group
/// with no encoded-side counterpart, or with a counterpart of a different
/// size, means the two segments of the document disagree in composition and
/// the whole decode fails.
pub fn resolve(
    key_tokens: &[&Token],
    encoded_tokens: &[&Token],
    kinds: &[PartitionKind],
) -> Result<Resolution, DecoderError> {
    // Unreachable in practice: the terminal criterion accepts every group.
    let Some((&kind, remaining)) = kinds.split_first() else {
        return Ok(Resolution::default());
    };

    let key_partition = Partition::build(kind, key_tokens);
    let encoded_partition = Partition::build(kind, encoded_tokens);

    let mut resolution = Resolution::default();

    for (key, key_group) in key_partition.iter() {
        let encoded_group = encoded_partition
            .get(key)
            .ok_or_else(|| DecoderError::UnmatchedKeyWord(key_group[0].value.clone()))?;

        if encoded_group.len() != key_group.len() {
            return Err(DecoderError::GroupSizeMismatch {
                key: key_group.len(),
                encoded: encoded_group.len(),
            });
        }

        if kind.is_deterministic(key_group) {
            resolution.merge(pair_group(key_group, encoded_group));
        } else {
            resolution.merge(resolve(key_group, encoded_group, remaining)?);
        }
    }

    Ok(resolution)
}

/// Pairs the members of a resolved group positionally.
fn pair_group(key_group: &[&Token], encoded_group: &[&Token]) -> Resolution {
    let mut resolution = Resolution::default();
    if key_group.len() > 1 {
        resolution.ambiguous_groups = 1;
    }

    for (key_token, encoded_token) in key_group.iter().zip(encoded_group) {
        let mut token = (*encoded_token).clone();
        token.resolved = Some(key_token.value.clone());
        resolution.tokens.push(token);
    }

    resolution
}

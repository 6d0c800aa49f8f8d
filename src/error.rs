//! Error types for the transaction merkle tree

/// Errors raised while reading digests supplied from outside the crate, or when
/// a tree is too large to be laid out in memory.
#[derive(Debug, PartialEq, Clone, thiserror::Error)]
pub enum MerkleError {
    /// The digest is not valid hex
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// The digest does not have the width of the tree's hash
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidDigestLength { expected: usize, actual: usize },
    /// The tree over `leaf_count` leaves needs more slots than a `usize` can count
    #[error("too many transactions for a merkle tree store: {leaf_count}")]
    CapacityOverflow { leaf_count: usize },
}

/// Parses a hex encoded digest of exactly `HASH_SIZE` bytes.
pub fn parse_digest<const HASH_SIZE: usize>(digest: &str) -> Result<[u8; HASH_SIZE], MerkleError> {
    let bytes = hex::decode(digest.trim())?;
    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| MerkleError::InvalidDigestLength {
            expected: HASH_SIZE,
            actual,
        })
}

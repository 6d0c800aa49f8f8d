//! Transaction merkle root
//!
//! This crate computes the merkle root a block header uses to commit to its ordered
//! list of transactions. Each transaction is represented by its witness hash and
//! the tree is built as a linear array:
//! - leaves are `H(0x00 || witness_hash)` and interior nodes `H(0x01 || left || right)`,
//!   so a leaf can never be passed off as an interior node
//! - the leaf row is padded with empty slots up to the next power of two
//! - a node without a right sibling is carried up unchanged
//! - an empty transaction list commits to the all-zero digest
//!
//! The hash function is pluggable through the [`Hasher`] trait. SHA3-256 and SHA-256
//! implementations are provided behind the `sha3` and `sha2` features.

mod error;
mod node;
mod tree;
mod witness;

pub use error::{parse_digest, MerkleError};
pub use node::{Branch, Hasher, Leaf, Node, INTERIOR_PREFIX, LEAF_PREFIX};
pub use tree::{merkle_root, next_power_of_two, tree_store_len, MerkleTreeStore};
pub use witness::WitnessHash;

/// Computes the SHA3-256 merkle root of `transactions`.
///
/// Returns 32 zero bytes for an empty list. See [`merkle_root`] for the error case.
#[cfg(feature = "sha3")]
pub fn compute_merkle_root<T: WitnessHash<32>>(
    transactions: &[T],
) -> Result<[u8; 32], MerkleError> {
    merkle_root::<32, sha3::Sha3_256, T>(transactions)
}

#[cfg(test)]
mod tests;

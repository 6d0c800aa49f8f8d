use std::fmt::Display;
use std::marker::PhantomData;

use super::{Hasher, LEAF_PREFIX};

/// A Leaf is a node built from one transaction's witness hash.
/// The leaves are the first row of the tree store, in transaction order.
pub struct Leaf<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> {
    witness_hash: [u8; HASH_SIZE],
    node_hash: [u8; HASH_SIZE],
    _phantom: PhantomData<H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Leaf<HASH_SIZE, H> {
    /// Creates a new [`Leaf`]. This function performs a hash of `LEAF_PREFIX || witness_hash`.
    pub fn new(witness_hash: &[u8; HASH_SIZE]) -> Self {
        let node_hash = H::hash(
            [[LEAF_PREFIX].as_slice(), witness_hash.as_slice()]
                .concat()
                .as_slice(),
        );
        Self {
            witness_hash: *witness_hash,
            node_hash,
            _phantom: PhantomData,
        }
    }

    /// Returns the hash of the node. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        self.node_hash
    }

    /// Returns the witness hash this leaf commits to.
    pub fn witness_hash(&self) -> [u8; HASH_SIZE] {
        self.witness_hash
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Clone for Leaf<HASH_SIZE, H> {
    fn clone(&self) -> Self {
        Self {
            witness_hash: self.witness_hash,
            node_hash: self.node_hash,
            _phantom: PhantomData,
        }
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> PartialEq for Leaf<HASH_SIZE, H> {
    fn eq(&self, other: &Self) -> bool {
        self.node_hash == other.node_hash && self.witness_hash == other.witness_hash
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Eq for Leaf<HASH_SIZE, H> {}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Display for Leaf<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Leaf {{ hash: {} }}", hex::encode(self.hash().as_slice()))
    }
}

#[cfg(all(test, feature = "sha2", feature = "sha3"))]
mod test {
    use hex_literal::hex;
    use sha2::Sha256;
    use sha3::Sha3_256;

    use crate::node::{Hasher, LEAF_PREFIX};

    #[test]
    fn test_leaf_node_hash() {
        assert_eq!(
            super::Leaf::<32, Sha3_256>::new(&[1; 32]).hash(),
            hex!("29f8f87d926a90ecc02e336bbadc2e512c7b155497a6ca8b86a574593d2ea58d")
        );
        assert_eq!(
            super::Leaf::<32, Sha256>::new(&[1; 32]).hash(),
            hex!("dcffe786ded16d283c663846ad0c4ff26558fccde36ca9d30b2ea19eade9fc0e")
        );
    }

    #[test]
    fn test_leaf_prefix_is_prepended() {
        let witness_hash = [7; 32];
        let mut prefixed = vec![LEAF_PREFIX];
        prefixed.extend_from_slice(&witness_hash);
        let mut appended = witness_hash.to_vec();
        appended.push(LEAF_PREFIX);

        let leaf = super::Leaf::<32, Sha3_256>::new(&witness_hash);
        assert_eq!(leaf.hash(), <Sha3_256 as Hasher<32>>::hash(&prefixed));
        assert_ne!(leaf.hash(), <Sha3_256 as Hasher<32>>::hash(&appended));
        assert_ne!(leaf.hash(), <Sha3_256 as Hasher<32>>::hash(&witness_hash));
    }

    #[test]
    fn test_leaf_witness_hash() {
        assert_eq!(
            super::Leaf::<32, Sha3_256>::new(&[3; 32]).witness_hash(),
            [3; 32]
        );
    }

    #[test]
    fn test_leaf_display() {
        assert_eq!(
            format!("{}", super::Leaf::<32, Sha3_256>::new(&[1; 32])),
            "Leaf { hash: 29f8f87d926a90ecc02e336bbadc2e512c7b155497a6ca8b86a574593d2ea58d }"
        );
    }
}

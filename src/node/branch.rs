use std::fmt::Display;
use std::marker::PhantomData;

use super::{Hasher, INTERIOR_PREFIX};

/// An interior node: the hash of two present children, left then right.
pub struct Branch<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> {
    node_hash: [u8; HASH_SIZE],
    _phantom: PhantomData<H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Branch<HASH_SIZE, H> {
    /// Creates a new [`Branch`]. This function performs a hash of
    /// `INTERIOR_PREFIX || left || right`, so the children order matters.
    pub fn new(left: &[u8; HASH_SIZE], right: &[u8; HASH_SIZE]) -> Self {
        let node_hash = H::hash(
            [[INTERIOR_PREFIX].as_slice(), left.as_slice(), right.as_slice()]
                .concat()
                .as_slice(),
        );
        Self {
            node_hash,
            _phantom: PhantomData,
        }
    }

    /// Returns the hash of the node. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        self.node_hash
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Clone for Branch<HASH_SIZE, H> {
    fn clone(&self) -> Self {
        Self {
            node_hash: self.node_hash,
            _phantom: PhantomData,
        }
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> PartialEq for Branch<HASH_SIZE, H> {
    fn eq(&self, other: &Self) -> bool {
        self.node_hash == other.node_hash
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Eq for Branch<HASH_SIZE, H> {}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Display for Branch<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Branch {{ hash: {} }}", hex::encode(self.hash().as_slice()))
    }
}

//! Source of the per-transaction digests the tree commits to.

/// Anything that can hand out the witness hash of a transaction.
///
/// The tree never looks inside a transaction: it only hashes what this
/// trait returns, in the order the transactions are given.
pub trait WitnessHash<const HASH_SIZE: usize> {
    fn witness_hash(&self) -> [u8; HASH_SIZE];
}

impl<const HASH_SIZE: usize> WitnessHash<HASH_SIZE> for [u8; HASH_SIZE] {
    fn witness_hash(&self) -> [u8; HASH_SIZE] {
        *self
    }
}

impl<const HASH_SIZE: usize, T: WitnessHash<HASH_SIZE> + ?Sized> WitnessHash<HASH_SIZE> for &T {
    fn witness_hash(&self) -> [u8; HASH_SIZE] {
        (**self).witness_hash()
    }
}

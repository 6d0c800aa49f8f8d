mod store;

pub use store::MerkleTreeStore;

use crate::{Hasher, MerkleError, WitnessHash};

/// Smallest power of two that is `>= n`, with `Some(0)` for `n == 0`.
///
/// Integer only, so exact powers of two map to themselves. `None` when that power
/// of two does not fit in a `usize`.
pub const fn next_power_of_two(n: usize) -> Option<usize> {
    if n == 0 {
        Some(0)
    } else {
        n.checked_next_power_of_two()
    }
}

/// Number of slots needed to store the tree of `leaf_count` leaves as a linear array.
///
/// `None` when `2 * capacity - 1` does not fit in a `usize`, that is from
/// `leaf_count > 2^(usize::BITS - 2)` on.
pub const fn tree_store_len(leaf_count: usize) -> Option<usize> {
    match next_power_of_two(leaf_count) {
        Some(0) => Some(0),
        Some(capacity) => match capacity.checked_mul(2) {
            Some(doubled) => Some(doubled - 1),
            None => None,
        },
        None => None,
    }
}

/// Computes the merkle root of `transactions`.
///
/// An empty list commits to the all-zero digest and no tree is built.
///
/// # Errors
/// [`MerkleError::CapacityOverflow`] when the tree over `transactions` cannot be
/// addressed with a `usize`. Only slices of zero-sized transaction types can be
/// that long.
pub fn merkle_root<const HASH_SIZE: usize, H, T>(
    transactions: &[T],
) -> Result<[u8; HASH_SIZE], MerkleError>
where
    H: Hasher<HASH_SIZE>,
    T: WitnessHash<HASH_SIZE>,
{
    if transactions.is_empty() {
        return Ok([0; HASH_SIZE]);
    }
    let store = MerkleTreeStore::<HASH_SIZE, H>::build(transactions)?;
    // the first leaf is always present so the last slot is too
    let root = store.root().unwrap_or([0; HASH_SIZE]);
    tracing::trace!(
        leaf_count = transactions.len(),
        root = %hex::encode(root),
        "computed merkle root"
    );
    Ok(root)
}

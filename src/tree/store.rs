//! Linear array encoding of the transaction merkle tree.

use std::fmt::{Debug, Display};

use crate::{Hasher, MerkleError, Node, WitnessHash};

use super::{next_power_of_two, tree_store_len};

/// A complete binary tree stored level by level in a single vector.
///
/// For four transactions the layout is:
///
/// ```text
///          root = h1234
///         /            \
///      h12              h34
///     /    \           /    \
///   h1      h2       h3      h4
///
/// [h1 h2 h3 h4 h12 h34 root]
/// ```
///
/// The leaf row is padded with [`Node::Empty`] up to the next power of two, so the
/// store always holds `2 * capacity - 1` slots and the root is the last one.
/// A store is never modified after [`MerkleTreeStore::build`].
pub struct MerkleTreeStore<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> {
    nodes: Vec<Node<HASH_SIZE, H>>,
    leaf_count: usize,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> MerkleTreeStore<HASH_SIZE, H> {
    /// Builds the whole tree over `transactions` in one pass.
    ///
    /// # Errors
    /// [`MerkleError::CapacityOverflow`] when `2 * capacity - 1` slots cannot be
    /// counted with a `usize`. Nothing is hashed in that case.
    pub fn build<T: WitnessHash<HASH_SIZE>>(transactions: &[T]) -> Result<Self, MerkleError> {
        let leaf_count = transactions.len();
        let (Some(capacity), Some(len)) =
            (next_power_of_two(leaf_count), tree_store_len(leaf_count))
        else {
            return Err(MerkleError::CapacityOverflow { leaf_count });
        };
        tracing::debug!(leaf_count, capacity, slots = len, "building merkle tree store");

        if len == 0 {
            return Ok(Self {
                nodes: Vec::new(),
                leaf_count,
            });
        }

        let mut nodes = Vec::with_capacity(len);
        nodes.extend(
            transactions
                .iter()
                .map(|tx| Node::new_leaf(&tx.witness_hash())),
        );
        nodes.resize_with(capacity, Node::default);

        // Each pair of slots writes its parent at the end of the vector. A level's
        // parents land right after it and become the next pairs to fold, until the
        // only unread slot left is the root.
        for i in (0..len - 1).step_by(2) {
            let parent = Node::parent(&nodes[i], &nodes[i + 1]);
            nodes.push(parent);
        }
        debug_assert_eq!(nodes.len(), len);

        Ok(Self { nodes, leaf_count })
    }

    /// Hash of the last slot, `None` when no transaction was given.
    pub fn root(&self) -> Option<[u8; HASH_SIZE]> {
        self.nodes.last().and_then(Node::hash)
    }

    /// Number of transactions the tree was built from.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Width of the padded leaf row.
    pub fn capacity(&self) -> usize {
        (self.nodes.len() + 1) / 2
    }

    /// Total number of slots, padding included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node<HASH_SIZE, H>> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[Node<HASH_SIZE, H>] {
        &self.nodes
    }

    /// Iterates over the rows of the tree, leaves first and root last.
    pub fn levels(&self) -> impl Iterator<Item = &[Node<HASH_SIZE, H>]> + '_ {
        let mut start = 0;
        let mut width = self.capacity();
        std::iter::from_fn(move || {
            if width == 0 {
                return None;
            }
            let level = &self.nodes[start..start + width];
            start += width;
            width /= 2;
            Some(level)
        })
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Debug for MerkleTreeStore<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerkleTreeStore")
            .field("leaf_count", &self.leaf_count)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Display for MerkleTreeStore<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (height, level) in self.levels().enumerate() {
            write!(f, "{height}:")?;
            for node in level {
                match node.hash() {
                    Some(hash) => write!(f, " {}", hex::encode(hash))?,
                    None => f.write_str(" -")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

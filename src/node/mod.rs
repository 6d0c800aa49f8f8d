mod branch;
mod leaf;

use std::fmt::Debug;
use std::fmt::Display;

pub use branch::Branch;
pub use leaf::Leaf;

/// Prepended to every leaf hash input.
pub const LEAF_PREFIX: u8 = 0x00;
/// Prepended to every interior hash input.
pub const INTERIOR_PREFIX: u8 = 0x01;

#[cfg(feature = "sha2")]
impl Hasher<32> for sha2::Sha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        use sha2::Digest;
        let mut hasher = sha2::Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

#[cfg(feature = "sha3")]
impl Hasher<32> for sha3::Sha3_256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        use sha3::Digest;
        let mut hasher = sha3::Sha3_256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Simple hash trait required to hash the nodes in the tree
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
pub trait Hasher<const HASH_SIZE: usize> {
    fn hash(data: &[u8]) -> [u8; HASH_SIZE];
}

/// One slot of the tree store.
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
/// * `H` - The hasher implementation used for this node
pub enum Node<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> {
    /// Padding, or a parent whose children are both padding
    Empty,
    /// A hashed transaction digest
    Leaf(Leaf<HASH_SIZE, H>),
    /// The hash of two present children
    Branch(Branch<HASH_SIZE, H>),
}

// Not derived: a derive would require `H: Clone` and `H: PartialEq`, which
// hasher types such as `Sha3_256` do not all provide.
impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Clone for Node<HASH_SIZE, H> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Leaf(leaf) => Self::Leaf(leaf.clone()),
            Self::Branch(branch) => Self::Branch(branch.clone()),
        }
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> PartialEq for Node<HASH_SIZE, H> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Leaf(a), Self::Leaf(b)) => a == b,
            (Self::Branch(a), Self::Branch(b)) => a == b,
            _ => false,
        }
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Eq for Node<HASH_SIZE, H> {}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Default for Node<HASH_SIZE, H> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Debug for Node<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Leaf(leaf) => write!(f, "Leaf {{ hash: {:?} }}", leaf.hash()),
            Self::Branch(branch) => write!(f, "Branch {{ hash: {:?} }}", branch.hash()),
        }
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Display for Node<HASH_SIZE, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Leaf(leaf) => write!(f, "{}", leaf),
            Self::Branch(branch) => write!(f, "{}", branch),
        }
    }
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>> Node<HASH_SIZE, H> {
    /// Creates a [`Node::Leaf`] from a transaction's witness hash. This function performs a hash.
    pub fn new_leaf(witness_hash: &[u8; HASH_SIZE]) -> Self {
        Self::Leaf(Leaf::new(witness_hash))
    }

    /// Folds two sibling slots into their parent slot.
    ///
    /// * no left child: the parent is empty too.
    /// * no right child: the left child is carried up as is, it is not re-hashed.
    /// * both present: the parent is a [`Branch`] over `left || right`.
    pub fn parent(left: &Self, right: &Self) -> Self {
        match (left.hash(), right.hash()) {
            (None, _) => Self::Empty,
            (Some(_), None) => left.clone(),
            (Some(left), Some(right)) => Self::Branch(Branch::new(&left, &right)),
        }
    }

    /// Returns the hash of the node, `None` for an empty slot. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> Option<[u8; HASH_SIZE]> {
        match self {
            Self::Empty => None,
            Self::Leaf(leaf) => Some(leaf.hash()),
            Self::Branch(branch) => Some(branch.hash()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

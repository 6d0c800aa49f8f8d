//! Tests for the merkle root over transaction digests

use hex_literal::hex;
use rand::{thread_rng, Rng};
use sha3::Sha3_256;

use crate::{
    compute_merkle_root, merkle_root, Branch, Leaf, MerkleTreeStore, WitnessHash, LEAF_PREFIX,
};

fn leaf(witness_hash: [u8; 32]) -> [u8; 32] {
    Leaf::<32, Sha3_256>::new(&witness_hash).hash()
}

fn interior(left: [u8; 32], right: [u8; 32]) -> [u8; 32] {
    Branch::<32, Sha3_256>::new(&left, &right).hash()
}

fn random_digests(count: usize) -> Vec<[u8; 32]> {
    let mut rng = thread_rng();
    (0..count).map(|_| rng.gen()).collect()
}

#[test]
fn test_empty_root_is_zero() {
    assert_eq!(compute_merkle_root::<[u8; 32]>(&[]).unwrap(), [0; 32]);
    assert_eq!(merkle_root::<32, Sha3_256, [u8; 32]>(&[]).unwrap(), [0; 32]);
}

#[test]
fn test_single_transaction_root_is_its_leaf() {
    let d1 = [1; 32];
    assert_eq!(compute_merkle_root(&[d1]).unwrap(), leaf(d1));
    assert_eq!(
        compute_merkle_root(&[d1]).unwrap(),
        hex!("29f8f87d926a90ecc02e336bbadc2e512c7b155497a6ca8b86a574593d2ea58d")
    );
}

#[test]
fn test_two_transactions() {
    let (d1, d2) = ([1; 32], [2; 32]);
    assert_eq!(
        compute_merkle_root(&[d1, d2]).unwrap(),
        interior(leaf(d1), leaf(d2))
    );
    assert_eq!(
        compute_merkle_root(&[d1, d2]).unwrap(),
        hex!("bb7eaf44188f6bd1394e085b8e3d03ffafd19f84554f1747e7ebbe4098cca851")
    );
}

#[test]
fn test_three_transactions_carry_the_odd_leaf() {
    let (d1, d2, d3) = ([1; 32], [2; 32], [3; 32]);
    let root = compute_merkle_root(&[d1, d2, d3]).unwrap();
    assert_eq!(root, interior(interior(leaf(d1), leaf(d2)), leaf(d3)));
    // hashing the odd leaf with itself would give another root
    assert_ne!(
        root,
        interior(interior(leaf(d1), leaf(d2)), interior(leaf(d3), leaf(d3)))
    );
    assert_eq!(
        root,
        hex!("b1e1bc6cb7a772829513c5fe2a7efaedf94a9c21be01be0729143b3a714c90ec")
    );
}

#[cfg(feature = "sha2")]
#[test]
fn test_sha256_roots() {
    use sha2::Sha256;

    let (d1, d2, d3) = ([1; 32], [2; 32], [3; 32]);
    assert_eq!(
        merkle_root::<32, Sha256, _>(&[d1, d2]).unwrap(),
        hex!("3a066e0f40c6a1981ebfa60d2411625d0517ae22c2fc8c7c1784ff8a75c78565")
    );
    assert_eq!(
        merkle_root::<32, Sha256, _>(&[d1, d2, d3]).unwrap(),
        hex!("df896896c799531f1fd1e556cea26a6989ab06853bcbfdd3e4f5097a611f658f")
    );
}

#[test]
fn test_root_matches_store() {
    for count in 1..40 {
        let digests = random_digests(count);
        let store = MerkleTreeStore::<32, Sha3_256>::build(&digests).unwrap();
        assert_eq!(store.root(), Some(compute_merkle_root(&digests).unwrap()));
    }
}

#[test]
fn test_deterministic() {
    let digests = random_digests(13);
    let first = compute_merkle_root(&digests).unwrap();
    let second = compute_merkle_root(&digests).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_order_sensitive() {
    let (a, b) = ([0xaa; 32], [0xbb; 32]);
    assert_ne!(
        compute_merkle_root(&[a, b]).unwrap(),
        compute_merkle_root(&[b, a]).unwrap()
    );
    assert_eq!(
        compute_merkle_root(&[[2; 32], [1; 32]]).unwrap(),
        hex!("c8d839da26d90083157d23b318c07910eabf615dd6880fc4ff0164fb76fea1b3")
    );
}

#[test]
fn test_any_digest_change_changes_root() {
    let mut rng = thread_rng();
    for count in [1, 2, 3, 5, 8, 11, 32] {
        let digests = random_digests(count);
        let root = compute_merkle_root(&digests).unwrap();
        for index in 0..count {
            let mut tampered = digests.clone();
            tampered[index][rng.gen_range(0..32usize)] ^= 0x01;
            assert_ne!(
                compute_merkle_root(&tampered).unwrap(),
                root,
                "count = {count}, index = {index}"
            );
        }
    }
}

#[test]
fn test_appending_a_transaction_changes_root() {
    let digests = random_digests(4);
    let root = compute_merkle_root(&digests).unwrap();
    let mut extended = digests.clone();
    extended.push(digests[3]);
    assert_ne!(compute_merkle_root(&extended).unwrap(), root);
}

#[test]
fn test_leaf_cannot_pose_as_interior_node() {
    // a leaf whose witness hash is a 32 byte value and an interior node built from
    // the same bytes are hashed under different tags
    let (left, right) = ([0x11; 32], [0x22; 32]);
    let branch = interior(left, right);
    let mut forged = [0u8; 64];
    forged[..32].copy_from_slice(&left);
    forged[32..].copy_from_slice(&right);
    let as_leaf = <Sha3_256 as crate::Hasher<32>>::hash(
        &[[LEAF_PREFIX].as_slice(), forged.as_slice()].concat(),
    );
    assert_ne!(branch, as_leaf);
}

#[test]
fn test_transactions_through_witness_hash() {
    struct Tx {
        payload: Vec<u8>,
    }
    impl WitnessHash<32> for Tx {
        fn witness_hash(&self) -> [u8; 32] {
            <Sha3_256 as crate::Hasher<32>>::hash(&self.payload)
        }
    }

    let txs: Vec<Tx> = (0..5u8)
        .map(|i| Tx {
            payload: vec![i; usize::from(i) + 1],
        })
        .collect();
    let digests: Vec<[u8; 32]> = txs.iter().map(|tx| tx.witness_hash()).collect();
    let expected = compute_merkle_root(&digests).unwrap();
    assert_eq!(compute_merkle_root(&txs).unwrap(), expected);

    let refs: Vec<&Tx> = txs.iter().collect();
    assert_eq!(compute_merkle_root(&refs).unwrap(), expected);
}

#[test]
fn test_large_tree() {
    let digests = random_digests(1025);
    let store = MerkleTreeStore::<32, Sha3_256>::build(&digests).unwrap();
    assert_eq!(store.capacity(), 2048);
    assert_eq!(store.len(), 4095);
    assert_eq!(store.levels().count(), 12);
    assert_eq!(store.root(), Some(compute_merkle_root(&digests).unwrap()));
}

//! Basic example of computing a transaction merkle root
//!
//! This example demonstrates:
//! - Computing the root of a list of witness hashes
//! - Using your own transaction type through `WitnessHash`
//! - Inspecting the tree store level by level

use sha3::{Digest, Sha3_256};
use txmerkle::{compute_merkle_root, MerkleError, MerkleTreeStore, WitnessHash};

struct Transaction {
    payload: Vec<u8>,
}

impl WitnessHash<32> for Transaction {
    fn witness_hash(&self) -> [u8; 32] {
        Sha3_256::digest(&self.payload).into()
    }
}

fn main() -> Result<(), MerkleError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // An empty block commits to the zero digest
    let empty: [[u8; 32]; 0] = [];
    println!("Empty root: {}", hex::encode(compute_merkle_root(&empty)?));

    // Three transactions: the third leaf has no sibling and is carried up
    let transactions = vec![
        Transaction {
            payload: b"alice pays bob".to_vec(),
        },
        Transaction {
            payload: b"bob pays carol".to_vec(),
        },
        Transaction {
            payload: b"carol pays dave".to_vec(),
        },
    ];
    let root = compute_merkle_root(&transactions)?;
    println!("Root hash: {}", hex::encode(root));

    let store = MerkleTreeStore::<32, Sha3_256>::build(&transactions)?;
    println!(
        "{} transactions, {} leaf slots, {} slots in total",
        store.leaf_count(),
        store.capacity(),
        store.len()
    );
    print!("{}", store);
    Ok(())
}

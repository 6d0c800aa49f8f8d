//! Example of implementing a custom hasher for the transaction merkle tree
//!
//! This example demonstrates:
//! - Creating a custom hasher implementation
//! - Computing roots with it and with the bundled hashers

use sha2::{Digest, Sha256};
use sha3::Sha3_256;
use txmerkle::{merkle_root, Hasher, MerkleError};

// Double SHA256, as some chains hash their block contents
struct DoubleSha256;

impl Hasher<32> for DoubleSha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        Sha256::digest(Sha256::digest(data)).into()
    }
}

fn main() -> Result<(), MerkleError> {
    let digests = [[1u8; 32], [2; 32], [3; 32]];

    let custom = merkle_root::<32, DoubleSha256, _>(&digests)?;
    println!("Root hash with double SHA256: {}", hex::encode(custom));

    let sha256 = merkle_root::<32, Sha256, _>(&digests)?;
    println!("Root hash with SHA256: {}", hex::encode(sha256));

    let sha3 = merkle_root::<32, Sha3_256, _>(&digests)?;
    println!("Root hash with SHA3-256: {}", hex::encode(sha3));

    // The roots differ because every node is hashed with a different function
    println!("\nThe leaf and interior prefixes are the same, only the hash function changes.");
    Ok(())
}

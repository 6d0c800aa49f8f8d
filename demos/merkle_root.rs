//! Prints the merkle root of the hex witness hashes given on the command line.
//!
//! ```text
//! cargo run --example merkle_root -- \
//!     0101010101010101010101010101010101010101010101010101010101010101 \
//!     0202020202020202020202020202020202020202020202020202020202020202
//! ```
//!
//! Set `RUST_LOG=txmerkle=trace` to see the tree being built.

use std::process::ExitCode;

use txmerkle::{compute_merkle_root, parse_digest, MerkleError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match root_of_args() {
        Ok(root) => {
            println!("{}", hex::encode(root));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn root_of_args() -> Result<[u8; 32], MerkleError> {
    let digests = std::env::args()
        .skip(1)
        .map(|arg| parse_digest(&arg))
        .collect::<Result<Vec<[u8; 32]>, _>>()?;
    compute_merkle_root(&digests)
}

use crate::Hasher;


#[cfg(feature = "sha3")]
mod tree;

/// 64-bit FNV-1a. Not a cryptographic hash, only used so the tree can be tested
/// without any hasher feature. It implements neither `Clone` nor `PartialEq`.
pub(crate) struct Fnv64;

impl Hasher<8> for Fnv64 {
    fn hash(data: &[u8]) -> [u8; 8] {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in data {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
        hash.to_be_bytes()
    }
}

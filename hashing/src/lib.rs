use ethereum_types::H256;
use sha2::{Digest as _, Sha256};

#[inline]
#[must_use]
pub fn hash_64(value: u64) -> H256 {
    H256::from_slice(&Sha256::digest(value.to_le_bytes()))
}

#[inline]
#[must_use]
pub fn hash_256_64(hash: H256, value: u64) -> H256 {
    let mut hasher = Sha256::new();
    hasher.update(hash.as_bytes());
    hasher.update(value.to_le_bytes());
    H256::from_slice(&hasher.finalize())
}

#[inline]
#[must_use]
pub fn hash_256_256(left: H256, right: H256) -> H256 {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    H256::from_slice(&hasher.finalize())
}

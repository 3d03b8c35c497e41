//! The namehash algorithm: canonical hashing of dot-separated domain names.
//!
//! A domain's node hash is built by folding its labels right to left from
//! the all-zero root, one keccak step per label. The fold is pure and never
//! suspends; normalization (lowercasing) is the caller's responsibility,
//! see [`crate::resolver::NameService`].

use sha3::{Digest, Keccak256};

use crate::types::Namehash;

/// Keccak-256 of `data`.
pub(crate) fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Hash a full domain name into its [`Namehash`].
///
/// The empty string denotes the root and hashes to [`Namehash::ZERO`].
/// For everything else the result chains through the parent hashes, so
/// `namehash("a.b.c")` equals `childhash(namehash("b.c"), "a")` at every
/// split point. Input bytes are hashed as-is, casing included.
#[must_use]
pub fn namehash(domain: &str) -> Namehash {
    if domain.is_empty() {
        return Namehash::ZERO;
    }
    domain.rsplit('.').fold(Namehash::ZERO, childhash)
}

/// Derive the hash of `label` directly under the node `parent`.
///
/// Exposed standalone so callers holding a cached parent hash (subdomain
/// delegation) can extend it by one leftmost label without re-hashing the
/// whole chain.
#[must_use]
pub fn childhash(parent: Namehash, label: &str) -> Namehash {
    let label_hash = keccak256(label.as_bytes());
    let mut hasher = Keccak256::new();
    hasher.update(parent.as_bytes());
    hasher.update(label_hash);
    Namehash::from_bytes(hasher.finalize().into())
}

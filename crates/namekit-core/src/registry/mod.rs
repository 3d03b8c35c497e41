//! Registry and resolver lookup abstraction.
//!
//! Defines the [`RegistryClient`] trait the resolution protocol calls
//! through, plus a test mock (`mock::MockRegistry`). Implementations own
//! transport, authentication, timeouts, and retries; the core treats every
//! call as a single suspending operation and never retries on its own.

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::error::ResolutionError;
use crate::types::{Address, Namehash};

/// Minimal capability trait over the registry and resolver contracts.
///
/// `Ok(None)` means the queried slot is unset; a transport failure maps to
/// [`ResolutionError::NamingServiceDown`] inside the implementation so the
/// protocol layer can surface it unchanged.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Owner account bound to the node, if any.
    async fn owner_of(&self, node: Namehash) -> Result<Option<Address>, ResolutionError>;

    /// Resolver contract bound to the node, if any.
    async fn resolver_of(&self, node: Namehash) -> Result<Option<Address>, ResolutionError>;

    /// Value stored under `key` for the node on the given resolver.
    async fn record_at(
        &self,
        resolver: Address,
        node: Namehash,
        key: &str,
    ) -> Result<Option<String>, ResolutionError>;

    /// Registry TTL for the node, in seconds. Zero when unset.
    async fn ttl_of(&self, node: Namehash) -> Result<u64, ResolutionError>;
}

//! The record resolution protocol.
//!
//! [`NameService`] turns a domain name and record key into a typed value by
//! orchestrating the registry lookups: normalize and hash the domain,
//! confirm ownership, locate the resolver, then fetch the record. Each
//! lookup maps absence to its own error kind, in a fixed order, so callers
//! can always tell an unregistered domain apart from a registered one that
//! is merely missing a record.

use tracing::debug;

use crate::checksum;
use crate::error::ResolutionError;
use crate::namehash::namehash;
use crate::records::{self, AddressEncoding};
use crate::registry::RegistryClient;
use crate::types::{Address, Namehash};

/// Top-level labels served by this naming service.
const SUPPORTED_TLDS: &[&str] = &["crypto"];

// ==============================================================================
// Name Service
// ==============================================================================

/// Record resolution over an injected [`RegistryClient`].
///
/// Holds no caches, locks, or cross-call state; independent lookups may
/// run concurrently. The three registry calls within one lookup are
/// strictly sequential, and timeouts/retries belong to the client.
pub struct NameService<C> {
    registry: C,
}

impl<C: RegistryClient> NameService<C> {
    pub fn new(registry: C) -> Self {
        Self { registry }
    }

    // ==========================================================================
    // Domain Validation and Hashing
    // ==========================================================================

    /// Whether `domain` is syntactically valid and under a supported
    /// top-level label. Case-insensitive.
    #[must_use]
    pub fn is_supported_domain(&self, domain: &str) -> bool {
        normalize_domain(domain).is_ok()
    }

    /// Normalize `domain` and compute its node hash.
    pub fn namehash(&self, domain: &str) -> Result<Namehash, ResolutionError> {
        let normalized = normalize_domain(domain)?;
        Ok(namehash(&normalized))
    }

    // ==========================================================================
    // Record Resolution
    // ==========================================================================

    /// Resolve the raw value stored under `key` for `domain`.
    ///
    /// Failure points, in order: domain syntax (`UnsupportedDomain`), no
    /// owner (`UnregisteredDomain`), no resolver (`UnspecifiedResolver`),
    /// no value (`RecordNotFound`). A domain without an owner never
    /// surfaces a resolver-stage error, and a registered domain with a
    /// resolver but no value always reports `RecordNotFound`. Registry
    /// failures surface as `NamingServiceDown` from whichever call hit
    /// them.
    pub async fn resolve_record(&self, domain: &str, key: &str) -> Result<String, ResolutionError> {
        let normalized = normalize_domain(domain)?;
        // Keys are opaque; non-empty is the only requirement.
        if key.is_empty() {
            return Err(ResolutionError::RecordNotFound {
                domain: normalized,
                key: String::new(),
            });
        }

        let node = namehash(&normalized);
        debug!(domain = %normalized, node = %node, key, "resolving record");

        self.require_owner(&normalized, node).await?;
        let resolver = self.require_resolver(&normalized, node).await?;

        match self.registry.record_at(resolver, node, key).await? {
            Some(value) if !value.is_empty() => {
                debug!(domain = %normalized, key, "record resolved");
                Ok(value)
            }
            _ => Err(ResolutionError::RecordNotFound {
                domain: normalized,
                key: key.to_string(),
            }),
        }
    }

    /// Resolve a record by raw key. The stored value is returned verbatim.
    pub async fn record(&self, domain: &str, key: &str) -> Result<String, ResolutionError> {
        self.resolve_record(domain, key).await
    }

    /// Resolve the address record for a coin ticker.
    ///
    /// Account-model coins are normalized to the mixed-case checksum form,
    /// surfacing `InvalidAddress`/`BadChecksum` for malformed stored
    /// values; coins with chain-native encodings are returned verbatim
    /// (see [`records::address_encoding`]).
    pub async fn address(&self, domain: &str, ticker: &str) -> Result<String, ResolutionError> {
        let key = records::address_key(ticker);
        let value = self.resolve_record(domain, &key).await?;
        match records::address_encoding(ticker) {
            AddressEncoding::Checksummed => checksum::to_checksum_address(&value),
            AddressEncoding::Native => Ok(value),
        }
    }

    /// Resolve the distributed-site content hash.
    pub async fn ipfs_hash(&self, domain: &str) -> Result<String, ResolutionError> {
        self.resolve_record(domain, records::IPFS_HASH_KEY).await
    }

    /// Resolve the legacy redirect target URL.
    pub async fn http_url(&self, domain: &str) -> Result<String, ResolutionError> {
        self.resolve_record(domain, records::HTTP_URL_KEY).await
    }

    /// Resolve the registrant contact email.
    pub async fn email(&self, domain: &str) -> Result<String, ResolutionError> {
        self.resolve_record(domain, records::EMAIL_KEY).await
    }

    // ==========================================================================
    // Registry Accessors
    // ==========================================================================

    /// Owner account of a registered domain.
    pub async fn owner(&self, domain: &str) -> Result<Address, ResolutionError> {
        let normalized = normalize_domain(domain)?;
        let node = namehash(&normalized);
        self.require_owner(&normalized, node).await
    }

    /// Resolver bound to a registered domain. An ownerless domain reports
    /// `UnregisteredDomain`, never a resolver-stage error.
    pub async fn resolver(&self, domain: &str) -> Result<Address, ResolutionError> {
        let normalized = normalize_domain(domain)?;
        let node = namehash(&normalized);
        self.require_owner(&normalized, node).await?;
        self.require_resolver(&normalized, node).await
    }

    /// Registry TTL for the domain's node. Not gated on registration.
    pub async fn ttl(&self, domain: &str) -> Result<u64, ResolutionError> {
        let node = self.namehash(domain)?;
        self.registry.ttl_of(node).await
    }

    // ==========================================================================
    // Lookup Steps
    // ==========================================================================

    /// The node must have a non-zero owner; `None` and the zero address
    /// both mean unregistered.
    async fn require_owner(
        &self,
        domain: &str,
        node: Namehash,
    ) -> Result<Address, ResolutionError> {
        match self.registry.owner_of(node).await? {
            Some(owner) if !owner.is_zero() => Ok(owner),
            _ => Err(ResolutionError::UnregisteredDomain(domain.to_string())),
        }
    }

    /// The node must have a non-zero resolver bound.
    async fn require_resolver(
        &self,
        domain: &str,
        node: Namehash,
    ) -> Result<Address, ResolutionError> {
        match self.registry.resolver_of(node).await? {
            Some(resolver) if !resolver.is_zero() => Ok(resolver),
            _ => Err(ResolutionError::UnspecifiedResolver(domain.to_string())),
        }
    }
}

// ==============================================================================
// Domain Normalization
// ==============================================================================

/// Lowercase `domain` and check its shape: non-empty, no empty labels
/// (no leading/trailing/double dots), and a recognized top-level label.
fn normalize_domain(domain: &str) -> Result<String, ResolutionError> {
    let normalized = domain.to_lowercase();
    if normalized.is_empty() || normalized.split('.').any(str::is_empty) {
        return Err(ResolutionError::UnsupportedDomain(domain.to_string()));
    }
    let tld = normalized.rsplit('.').next().unwrap_or_default();
    if !SUPPORTED_TLDS.contains(&tld) {
        return Err(ResolutionError::UnsupportedDomain(domain.to_string()));
    }
    Ok(normalized)
}

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ResolutionError;
use crate::types::{Address, Namehash};

use super::RegistryClient;

/// A mock registry backend for testing. Serves canned owners, resolvers,
/// records, and TTLs from `HashMap`s populated via the builder pattern,
/// and can simulate a full outage.
pub struct MockRegistry {
    owners: HashMap<Namehash, Address>,
    resolvers: HashMap<Namehash, Address>,
    records: HashMap<(Namehash, String), String>,
    ttls: HashMap<Namehash, u64>,
    outage: Option<String>,
}

impl MockRegistry {
    pub fn builder() -> MockRegistryBuilder {
        MockRegistryBuilder {
            owners: HashMap::new(),
            resolvers: HashMap::new(),
            records: HashMap::new(),
            ttls: HashMap::new(),
            outage: None,
        }
    }

    fn check_reachable(&self) -> Result<(), ResolutionError> {
        match &self.outage {
            Some(reason) => Err(ResolutionError::NamingServiceDown(reason.clone())),
            None => Ok(()),
        }
    }
}

pub struct MockRegistryBuilder {
    owners: HashMap<Namehash, Address>,
    resolvers: HashMap<Namehash, Address>,
    records: HashMap<(Namehash, String), String>,
    ttls: HashMap<Namehash, u64>,
    outage: Option<String>,
}

impl MockRegistryBuilder {
    pub fn with_owner(mut self, node: Namehash, owner: Address) -> Self {
        self.owners.insert(node, owner);
        self
    }

    pub fn with_resolver(mut self, node: Namehash, resolver: Address) -> Self {
        self.resolvers.insert(node, resolver);
        self
    }

    pub fn with_record(mut self, node: Namehash, key: &str, value: &str) -> Self {
        self.records.insert((node, key.to_string()), value.to_string());
        self
    }

    pub fn with_ttl(mut self, node: Namehash, ttl: u64) -> Self {
        self.ttls.insert(node, ttl);
        self
    }

    /// Make every call fail with `NamingServiceDown`.
    pub fn with_outage(mut self, reason: &str) -> Self {
        self.outage = Some(reason.to_string());
        self
    }

    pub fn build(self) -> MockRegistry {
        MockRegistry {
            owners: self.owners,
            resolvers: self.resolvers,
            records: self.records,
            ttls: self.ttls,
            outage: self.outage,
        }
    }
}

#[async_trait]
impl RegistryClient for MockRegistry {
    async fn owner_of(&self, node: Namehash) -> Result<Option<Address>, ResolutionError> {
        self.check_reachable()?;
        Ok(self.owners.get(&node).copied())
    }

    async fn resolver_of(&self, node: Namehash) -> Result<Option<Address>, ResolutionError> {
        self.check_reachable()?;
        Ok(self.resolvers.get(&node).copied())
    }

    async fn record_at(
        &self,
        resolver: Address,
        node: Namehash,
        key: &str,
    ) -> Result<Option<String>, ResolutionError> {
        self.check_reachable()?;
        // Records are only served through the resolver they are bound to,
        // mirroring how an on-chain resolver contract is addressed.
        if self.resolvers.get(&node) != Some(&resolver) {
            return Ok(None);
        }
        Ok(self.records.get(&(node, key.to_string())).cloned())
    }

    async fn ttl_of(&self, node: Namehash) -> Result<u64, ResolutionError> {
        self.check_reachable()?;
        Ok(self.ttls.get(&node).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;

    #[tokio::test]
    async fn serves_canned_data() {
        let node = node_from_byte(1);
        let owner = addr_from_byte(2);
        let resolver = addr_from_byte(3);
        let registry = MockRegistry::builder()
            .with_owner(node, owner)
            .with_resolver(node, resolver)
            .with_record(node, "ipfs.html.value", "QmXYZ")
            .with_ttl(node, 300)
            .build();

        assert_eq!(registry.owner_of(node).await.unwrap(), Some(owner));
        assert_eq!(registry.resolver_of(node).await.unwrap(), Some(resolver));
        assert_eq!(
            registry.record_at(resolver, node, "ipfs.html.value").await.unwrap(),
            Some("QmXYZ".to_string())
        );
        assert_eq!(registry.ttl_of(node).await.unwrap(), 300);
    }

    #[tokio::test]
    async fn unknown_node_is_absent_everywhere() {
        let registry = MockRegistry::builder().build();
        let node = node_from_byte(9);
        assert_eq!(registry.owner_of(node).await.unwrap(), None);
        assert_eq!(registry.resolver_of(node).await.unwrap(), None);
        assert_eq!(registry.ttl_of(node).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn records_require_the_bound_resolver() {
        let node = node_from_byte(1);
        let resolver = addr_from_byte(3);
        let registry = MockRegistry::builder()
            .with_resolver(node, resolver)
            .with_record(node, "ipfs.html.value", "QmXYZ")
            .build();

        let other = addr_from_byte(4);
        assert_eq!(
            registry.record_at(other, node, "ipfs.html.value").await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn outage_fails_every_call() {
        let registry = MockRegistry::builder().with_outage("connection refused").build();
        let node = node_from_byte(1);
        let err = registry.owner_of(node).await.unwrap_err();
        assert!(matches!(err, ResolutionError::NamingServiceDown(_)));
        let err = registry.ttl_of(node).await.unwrap_err();
        assert!(matches!(err, ResolutionError::NamingServiceDown(_)));
    }
}

/// The resolution error taxonomy. Every failure surfaces as a specific
/// kind so callers can branch on cause; nothing is retried or swallowed
/// inside the core.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("unsupported domain: {0}")]
    UnsupportedDomain(String),

    /// No owner is bound to the domain's node in the registry.
    #[error("domain is not registered: {0}")]
    UnregisteredDomain(String),

    /// The domain has an owner but no resolver bound.
    #[error("no resolver is set for domain: {0}")]
    UnspecifiedResolver(String),

    /// The resolver exists but holds no value under the requested key.
    /// Distinct from `UnregisteredDomain`: the registration is fine.
    #[error("no record {key} for domain {domain}")]
    RecordNotFound { domain: String, key: String },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("bad address checksum: {0}")]
    BadChecksum(String),

    /// The registry client failed or timed out.
    #[error("naming service is unreachable: {0}")]
    NamingServiceDown(String),
}

//! Record-key formation and the per-coin address encoding policy.
//!
//! Resolver records are flat key/value pairs; the conventions here map the
//! typed lookups (coin address, content hash, redirect URL, contact email)
//! onto their well-known keys.

// ==============================================================================
// Well-Known Record Keys
// ==============================================================================

/// Key holding the distributed-site content hash.
pub const IPFS_HASH_KEY: &str = "ipfs.html.value";

/// Key holding the legacy redirect target URL.
pub const HTTP_URL_KEY: &str = "ipfs.redirect_domain.value";

/// Key holding the registrant contact email.
pub const EMAIL_KEY: &str = "whois.email.value";

/// Form the record key for a coin address, e.g. `crypto.ETH.address`.
/// Tickers are case-insensitive and stored uppercase.
#[must_use]
pub fn address_key(ticker: &str) -> String {
    format!("crypto.{}.address", ticker.to_ascii_uppercase())
}

// ==============================================================================
// Address Encoding Policy
// ==============================================================================

/// How a coin's addresses are textually encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressEncoding {
    /// 20-byte hex addresses on account-model chains. Resolved values are
    /// normalized to the mixed-case checksum form before being returned.
    Checksummed,
    /// Chain-native encodings (base58, bech32, ...). Resolved values pass
    /// through untouched.
    Native,
}

/// Account-model tickers whose addresses carry the mixed-case checksum.
const CHECKSUMMED_TICKERS: &[&str] = &["ETH", "ETC", "POA"];

/// Encoding policy for a ticker (case-insensitive). Unknown tickers are
/// treated as native, so their stored values are never rewritten.
#[must_use]
pub fn address_encoding(ticker: &str) -> AddressEncoding {
    let upper = ticker.to_ascii_uppercase();
    if CHECKSUMMED_TICKERS.contains(&upper.as_str()) {
        AddressEncoding::Checksummed
    } else {
        AddressEncoding::Native
    }
}

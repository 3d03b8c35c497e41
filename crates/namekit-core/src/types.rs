//! Value types for Namekit's naming model.
//!
//! Contains the 32-byte node identifier (`Namehash`) and the 20-byte
//! account identifier (`Address`). Both are plain values with a canonical
//! `0x`-prefixed lowercase hex form, which is also their serde wire
//! representation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ResolutionError;

// ==============================================================================
// Namehash
// ==============================================================================

/// A 32-byte node identifier derived from a domain name.
///
/// The root of the name hierarchy is the all-zero hash ([`Namehash::ZERO`]);
/// every other node is produced by [`crate::namehash::childhash`] steps
/// below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Namehash([u8; 32]);

impl Namehash {
    /// The hash of the empty (root) domain.
    pub const ZERO: Namehash = Namehash([0u8; 32]);

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Canonical `0x`-prefixed lowercase hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse the canonical `0x`-prefixed 64-digit hex form.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix("0x")?;
        let mut bytes = [0u8; 32];
        if digits.len() != 64 || hex::decode_to_slice(digits, &mut bytes).is_err() {
            return None;
        }
        Some(Self(bytes))
    }
}

impl std::fmt::Display for Namehash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Namehash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Namehash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Namehash::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid namehash: {s}")))
    }
}

// ==============================================================================
// Address
// ==============================================================================

/// A 20-byte account address.
///
/// Parsing accepts 40 hex digits with or without a `0x` prefix and ignores
/// casing; checksum validation of mixed-case and `XE…` textual forms lives
/// in [`crate::checksum`]. The all-zero address means "unset" wherever the
/// registry returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Canonical `0x`-prefixed lowercase hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl std::str::FromStr for Address {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; 20];
        if digits.len() != 40 || hex::decode_to_slice(digits, &mut bytes).is_err() {
            return Err(ResolutionError::InvalidAddress(s.to_string()));
        }
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid address: {s}")))
    }
}

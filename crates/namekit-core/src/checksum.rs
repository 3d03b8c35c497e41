//! Account address validation and checksum algorithms.
//!
//! Covers the mixed-case hex checksum (the casing of the hex letters
//! encodes a keccak-derived error-detecting code) and IBAN-style `XE`
//! addresses (ISO 7064 mod-97 check digits over a base-36 body). All
//! functions are pure and total over their error domain.

use primitive_types::U256;

use crate::error::ResolutionError;
use crate::namehash::keccak256;
use crate::types::Address;

// ==============================================================================
// Mixed-Case Hex Checksum
// ==============================================================================

/// Validate `input` and return its canonical mixed-case checksummed form.
///
/// Accepted inputs:
/// - 40 hex digits, with or without a `0x` prefix. Uniformly-cased input
///   is checksummed unconditionally; mixed-case input already claims a
///   checksum and must match the computed one, else
///   [`ResolutionError::BadChecksum`].
/// - An `XE…` IBAN-style address, verified mod-97 and then decoded.
///
/// Anything else fails with [`ResolutionError::InvalidAddress`]. The
/// function is idempotent over its own output.
pub fn to_checksum_address(input: &str) -> Result<String, ResolutionError> {
    if let Some(digits) = hex_digits_of(input) {
        let checksummed = checksum_digits(digits);
        if has_mixed_case(digits) && digits != &checksummed[2..] {
            return Err(ResolutionError::BadChecksum(input.to_string()));
        }
        return Ok(checksummed);
    }
    if looks_like_iban(input) {
        let address = decode_iban(input)?;
        return Ok(checksum_of(&address));
    }
    Err(ResolutionError::InvalidAddress(input.to_string()))
}

/// Checksummed textual form of a raw 20-byte address.
#[must_use]
pub fn checksum_of(address: &Address) -> String {
    checksum_digits(&hex::encode(address.as_bytes()))
}

/// The 40 hex digits of `input`, if that is what it consists of.
fn hex_digits_of(input: &str) -> Option<&str> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    if digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(digits)
    } else {
        None
    }
}

fn has_mixed_case(digits: &str) -> bool {
    digits.bytes().any(|b| b.is_ascii_lowercase())
        && digits.bytes().any(|b| b.is_ascii_uppercase())
}

/// Core checksum pass over 40 hex digits (any casing).
///
/// Digit `i` is uppercased when nibble `i` of the keccak hash of the
/// lowercase digit string is 8 or more.
fn checksum_digits(digits: &str) -> String {
    let lower = digits.to_ascii_lowercase();
    let hash = keccak256(lower.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

// ==============================================================================
// IBAN-Style (`XE`) Addresses
// ==============================================================================

/// Syntactic shape: `XE`, two check digits, then a 30- or 31-character
/// base-36 body.
fn looks_like_iban(input: &str) -> bool {
    let bytes = input.as_bytes();
    (34..=35).contains(&bytes.len())
        && bytes.starts_with(b"XE")
        && bytes[2].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4..].iter().all(|b| b.is_ascii_alphanumeric())
}

/// Compute the two ISO 7064 mod-97 check digits for an `XE…` address.
///
/// The four-character prefix moves to the end with a `00` placeholder,
/// letters expand to their 10–35 codes, and the resulting decimal string
/// is reduced one digit at a time. Folding per digit keeps every
/// intermediate below 1000, so no wide-integer chunking is needed.
fn iban_checksum(address: &str) -> u8 {
    let upper = address.to_ascii_uppercase();
    let rearranged = format!("{}{}00", &upper[4..], &upper[..2]);
    let mut remainder: u32 = 0;
    for c in rearranged.chars() {
        match c.to_digit(10) {
            Some(d) => remainder = (remainder * 10 + d) % 97,
            None => {
                let code = c as u32 - 'A' as u32 + 10;
                remainder = (remainder * 10 + code / 10) % 97;
                remainder = (remainder * 10 + code % 10) % 97;
            }
        }
    }
    98 - remainder as u8
}

/// Verify the check digits of an `XE…` address and decode its base-36
/// body into a 20-byte address.
fn decode_iban(input: &str) -> Result<Address, ResolutionError> {
    let expected = format!("{:02}", iban_checksum(input));
    if expected != input[2..4] {
        return Err(ResolutionError::BadChecksum(input.to_string()));
    }

    // A 31-character body can encode slightly more than 160 bits, so the
    // accumulator is 256 bits wide and the excess is checked afterwards.
    let mut value = U256::zero();
    for c in input[4..].chars() {
        let digit = c
            .to_digit(36)
            .ok_or_else(|| ResolutionError::InvalidAddress(input.to_string()))?;
        value = value * U256::from(36u64) + U256::from(digit);
    }

    let mut buf = [0u8; 32];
    value.to_big_endian(&mut buf);
    if buf[..12].iter().any(|&b| b != 0) {
        return Err(ResolutionError::InvalidAddress(input.to_string()));
    }
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&buf[12..]);
    Ok(Address::from_bytes(bytes))
}

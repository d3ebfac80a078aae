//! Additive checksum over the Single body

use crate::error::{K5Error, Result};

/// Subtrahend the K5 documentation gives for the Single checksum
pub const CHECKSUM_BASE: u16 = 0x53AC;

/// Checksum of `bytes` with the documented base
pub fn checksum(bytes: &[u8]) -> u16 {
    checksum_with_base(bytes, CHECKSUM_BASE)
}

/// Sum of little-endian 16-bit words subtracted from `base`, both mod 0x10000
///
/// A trailing odd byte counts as a word with a zero high byte.
pub fn checksum_with_base(bytes: &[u8], base: u16) -> u16 {
    let sum = bytes.chunks(2).fold(0u16, |sum, word| {
        let low = word[0];
        let high = word.get(1).copied().unwrap_or(0);
        sum.wrapping_add(u16::from_le_bytes([low, high]))
    });
    base.wrapping_sub(sum)
}

/// Recompute the checksum over `body` and compare it with `stored`
pub fn verify(body: &[u8], stored: u16, base: u16) -> Result<()> {
    let computed = checksum_with_base(body, base);
    if computed != stored {
        return Err(K5Error::ChecksumMismatch { stored, computed });
    }
    Ok(())
}

//! Two-nybbles-per-byte MIDI transport encoding
//!
//! The K5 sends every data byte as two 7-bit-safe bytes, high nybble first.

use crate::error::{K5Error, Result};

/// Combine nybble pairs into bytes
pub fn unpack(nybbles: &[u8]) -> Result<Vec<u8>> {
    if nybbles.len() % 2 != 0 {
        return Err(K5Error::OddLengthNybbleData(nybbles.len()));
    }
    if let Some(offset) = nybbles.iter().position(|&n| n > 0x0F) {
        return Err(K5Error::InvalidNybble {
            offset,
            value: nybbles[offset],
        });
    }

    Ok(nybbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Split each byte into a high and low nybble
pub fn pack(bytes: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        output.push(byte >> 4);
        output.push(byte & 0x0F);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANNEX_NYBBLES: [u8; 16] = [
        0x04, 0x01, 0x04, 0x0e, 0x04, 0x0e, 0x04, 0x05, 0x05, 0x08, 0x02, 0x00, 0x02, 0x00, 0x03,
        0x0f,
    ];

    #[test]
    fn test_unpack_vector() {
        let bytes = unpack(&ANNEX_NYBBLES).unwrap();
        assert_eq!(bytes, b"ANNEX  ?");
    }

    #[test]
    fn test_pack_unpack() {
        assert_eq!(pack(b"ANNEX  ?"), ANNEX_NYBBLES);

        let all: Vec<u8> = (0..=u8::MAX).collect();
        let packed = pack(&all);
        assert!(packed.iter().all(|&n| n <= 0x0F));
        assert_eq!(unpack(&packed).unwrap(), all);
        assert_eq!(pack(&unpack(&packed).unwrap()), packed);
    }

    #[test]
    fn test_unpack_odd_length() {
        assert_eq!(
            unpack(&ANNEX_NYBBLES[..15]),
            Err(K5Error::OddLengthNybbleData(15))
        );
    }

    #[test]
    fn test_unpack_invalid_nybble() {
        assert_eq!(
            unpack(&[0x04, 0x41]),
            Err(K5Error::InvalidNybble {
                offset: 1,
                value: 0x41
            })
        );
    }

    #[test]
    fn test_empty() {
        assert!(unpack(&[]).unwrap().is_empty());
        assert!(pack(&[]).is_empty());
    }
}

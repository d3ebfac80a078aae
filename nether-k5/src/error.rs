//! Error types for K5 SysEx parsing and writing

/// Errors that can occur while decoding or encoding K5 patch data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum K5Error {
    /// Ran out of bytes while reading a field or block
    #[error("unexpected end of data at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A de-interleaved source block is shorter than one source
    #[error("source block too short: {actual} bytes, expected {expected}")]
    TruncatedSource { expected: usize, actual: usize },

    /// Nybble transport data must come in pairs
    #[error("odd number of nybbles: {0}")]
    OddLengthNybbleData(usize),

    /// A transport nybble had bits set above the low four
    #[error("invalid nybble 0x{value:02X} at offset {offset}")]
    InvalidNybble { offset: usize, value: u8 },

    /// Stored checksum does not match the recomputed one
    #[error("checksum mismatch: stored 0x{stored:04X}, computed 0x{computed:04X}")]
    ChecksumMismatch { stored: u16, computed: u16 },

    /// Header describes a message this codec does not decode
    #[error("unsupported dump kind: function 0x{function:02X}, sub status 0x{sub_status:02X}")]
    UnsupportedDumpKind { function: u8, sub_status: u8 },

    /// A packed enum field holds a value with no variant
    #[error("invalid {field} value: {value}")]
    InvalidEnumValue { field: &'static str, value: u8 },

    /// A parameter lies outside its documented range
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    ValueOutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    /// Patch name is not 8 printable ASCII characters
    #[error("invalid patch name: {0:?}")]
    InvalidName(String),

    /// Malformed SysEx framing
    #[error("invalid SysEx message: {0}")]
    InvalidSysEx(&'static str),

    /// Patch number or bank/slot name outside A-1..D-12
    #[error("invalid patch number: {0}")]
    InvalidPatchNumber(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, K5Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = K5Error::ChecksumMismatch {
            stored: 0x8344,
            computed: 0x7BB4,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: stored 0x8344, computed 0x7BB4"
        );

        let err = K5Error::TruncatedInput {
            offset: 490,
            needed: 2,
            available: 1,
        };
        assert!(err.to_string().contains("offset 490"));

        let err = K5Error::InvalidEnumValue {
            field: "LFO shape",
            value: 9,
        };
        assert_eq!(err.to_string(), "invalid LFO shape value: 9");
    }
}

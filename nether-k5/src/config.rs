//! Codec settings

use serde::{Deserialize, Serialize};

use crate::CHECKSUM_BASE;

/// Options for decoding and encoding Single bodies
///
/// Reads from a TOML table such as:
///
/// ```toml
/// checksum_base = 0x5A3C
/// verify_checksum = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Subtrahend of the checksum
    pub checksum_base: u16,
    /// Reject bodies whose stored checksum does not match
    pub verify_checksum: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            checksum_base: CHECKSUM_BASE,
            verify_checksum: true,
        }
    }
}

impl CodecConfig {
    /// Default settings without checksum verification
    pub fn unchecked() -> Self {
        Self {
            verify_checksum: false,
            ..Self::default()
        }
    }

    pub fn with_checksum_base(mut self, base: u16) -> Self {
        self.checksum_base = base;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = CodecConfig::default();
        assert_eq!(config.checksum_base, 0x53AC);
        assert!(config.verify_checksum);
        assert!(!CodecConfig::unchecked().verify_checksum);
    }

    #[test]
    fn test_from_toml() {
        let config: CodecConfig = toml::from_str("checksum_base = 0x5A3C\n").unwrap();
        assert_eq!(config.checksum_base, 0x5A3C);
        assert!(config.verify_checksum);

        let config: CodecConfig = toml::from_str("verify_checksum = false\n").unwrap();
        assert_eq!(config, CodecConfig::unchecked());

        let config: CodecConfig = toml::from_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_base() {
        assert!(toml::from_str::<CodecConfig>("checksum_base = 70000\n").is_err());
    }
}

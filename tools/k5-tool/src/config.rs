//! Codec settings from a TOML file and command-line overrides

use anyhow::{Context, Result};
use nether_k5::CodecConfig;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Load a `CodecConfig` from a TOML file
pub fn load(path: &Path) -> Result<CodecConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// File settings (or defaults), then flags on top
pub fn resolve(args: &GlobalArgs) -> Result<CodecConfig> {
    let mut config = match &args.config {
        Some(path) => load(path)?,
        None => CodecConfig::default(),
    };

    if let Some(base) = args.checksum_base {
        config.checksum_base = base;
    }
    if args.no_verify {
        config.verify_checksum = false;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(&GlobalArgs::default()).unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("k5.toml");
        std::fs::write(&path, "checksum_base = 0x5A3C\nverify_checksum = true\n").unwrap();

        let mut args = GlobalArgs {
            config: Some(path),
            ..Default::default()
        };
        let config = resolve(&args).unwrap();
        assert_eq!(config.checksum_base, 0x5A3C);
        assert!(config.verify_checksum);

        args.checksum_base = Some(0x1234);
        args.no_verify = true;
        let config = resolve(&args).unwrap();
        assert_eq!(config.checksum_base, 0x1234);
        assert!(!config.verify_checksum);
    }

    #[test]
    fn test_bad_file() {
        let dir = tempdir().unwrap();
        assert!(load(&dir.path().join("missing.toml")).is_err());

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "checksum_base = \"fast\"\n").unwrap();
        assert!(load(&path).is_err());
    }
}

//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "k5-tool")]
#[command(about = "Inspect and extract Kawai K5 Single patches from SysEx files")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Codec and logging options shared by every command
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// TOML file with codec settings (checksum_base, verify_checksum)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Checksum base in hex, e.g. 53AC or 0x5A3C
    #[arg(long, global = true, value_parser = parse_hex_u16)]
    pub checksum_base: Option<u16>,

    /// Decode patches whose stored checksum does not match
    #[arg(long, global = true)]
    pub no_verify: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// One line per message: patch, kind and Single name
    List {
        /// SysEx file (.syx)
        file: PathBuf,
    },

    /// Print every parameter of the Singles in a file
    Dump {
        /// SysEx file (.syx)
        file: PathBuf,

        /// Only this patch, e.g. A-1
        #[arg(long)]
        patch: Option<String>,
    },

    /// Re-encode one Single as a standalone one-block dump
    Extract {
        /// SysEx file (.syx)
        file: PathBuf,

        /// Patch to extract, e.g. B-7
        patch: String,

        /// MIDI channel of the new message (1-16)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=16))]
        channel: u8,

        /// Output file (defaults to <patch>.syx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify checksums and encode/decode stability of every Single
    Check {
        /// SysEx file (.syx)
        file: PathBuf,
    },
}

fn parse_hex_u16(value: &str) -> Result<u16, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value '{value}': {e}"))
}

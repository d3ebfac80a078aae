//! K5 Tool - inspect Kawai K5 SysEx files
//!
//! # Commands
//!
//! - `k5-tool list <file>` - One line per message
//! - `k5-tool dump <file> [--patch A-1]` - Every parameter of each Single
//! - `k5-tool extract <file> <patch>` - Re-encode one Single as its own message
//! - `k5-tool check <file>` - Checksums and encode/decode stability
//!
//! # Codec settings
//!
//! `--config k5.toml` reads:
//! ```toml
//! checksum_base = 0x53AC
//! verify_checksum = true
//! ```
//! `--checksum-base` and `--no-verify` override the file.

mod bank;
mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::resolve(&cli.global)?;

    match cli.command {
        Commands::List { file } => commands::list(&file, &config),
        Commands::Dump { file, patch } => commands::dump(&file, patch.as_deref(), &config),
        Commands::Extract {
            file,
            patch,
            channel,
            output,
        } => {
            commands::extract(&file, &patch, channel, output, &config)?;
            Ok(())
        }
        Commands::Check { file } => commands::check(&file, &config),
    }
}

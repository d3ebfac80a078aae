//! Command implementations

use anyhow::{Context, Result, bail};
use nether_k5::sysex::{self, MessageKind};
use nether_k5::{
    CodecConfig, K5Error, SINGLE_BODY_SIZE, Single, checksum_with_base, parse_single_with,
    write_single_with,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::bank::{self, Entry};

pub fn list(file: &Path, config: &CodecConfig) -> Result<()> {
    let data = bank::read_file(file)?;

    for entry in bank::decode(&data, config) {
        println!("{}", list_line(&entry));
    }

    Ok(())
}

fn list_line(entry: &Entry) -> String {
    let kind = match entry.header.classify() {
        MessageKind::SingleDump { .. } => "SINGLE".to_string(),
        MessageKind::MultiDump { .. } => "MULTI".to_string(),
        MessageKind::Ignored(function) => function.to_string(),
    };
    let name = entry
        .single
        .as_ref()
        .map(Single::display_name)
        .unwrap_or_default();

    format!("{:>3}  {:<5} {:<8} {}", entry.index, entry.patch_label(), kind, name)
}

pub fn dump(file: &Path, patch: Option<&str>, config: &CodecConfig) -> Result<()> {
    let data = bank::read_file(file)?;
    let wanted = patch.map(sysex::parse_patch_name).transpose()?;

    let mut found = false;
    for entry in bank::decode(&data, config) {
        let Some(single) = &entry.single else {
            continue;
        };
        if wanted.is_some() && entry.patch() != wanted {
            continue;
        }
        found = true;
        println!("== {} {} ==", entry.patch_label(), single.display_name());
        println!("{single:#?}");
    }

    if !found {
        match patch {
            Some(patch) => bail!("No Single {} in {}", patch, file.display()),
            None => warn!(file = %file.display(), "No Single dumps found"),
        }
    }

    Ok(())
}

pub fn extract(
    file: &Path,
    patch: &str,
    channel: u8,
    output: Option<PathBuf>,
    config: &CodecConfig,
) -> Result<PathBuf> {
    let data = bank::read_file(file)?;
    let number = sysex::parse_patch_name(patch)?;

    let Some(message) = bank::find_single(&data, number) else {
        bail!("No Single {} in {}", patch, file.display());
    };
    let body = sysex::single_payload(message)?;
    let single = parse_single_with(&body, config)
        .with_context(|| format!("Failed to decode Single {patch}"))?;

    let encoded = write_single_with(&single, config)?;
    let message = sysex::wrap_single(&encoded, channel - 1, number);

    let label = sysex::patch_name(number)?;
    let output = output.unwrap_or_else(|| PathBuf::from(format!("{label}.syx")));
    std::fs::write(&output, &message)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        patch = %label,
        name = single.display_name(),
        output = %output.display(),
        "Extracted Single"
    );
    Ok(output)
}

/// Checksum and stability result for one Single
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub index: usize,
    pub patch: u8,
    pub name: String,
    pub stored: u16,
    pub computed: u16,
    /// Decoding the re-encoded body gives the same Single
    pub stable: bool,
}

impl CheckReport {
    pub fn checksum_ok(&self) -> bool {
        self.stored == self.computed
    }
}

pub fn check(file: &Path, config: &CodecConfig) -> Result<()> {
    let data = bank::read_file(file)?;
    let reports = check_data(&data, config);

    let mut failures = 0;
    for report in &reports {
        let label = sysex::patch_name(report.patch).unwrap_or_else(|_| report.patch.to_string());
        let checksum = if report.checksum_ok() {
            "ok".to_string()
        } else {
            format!(
                "MISMATCH (stored {:04X}, computed {:04X})",
                report.stored, report.computed
            )
        };
        let stability = if report.stable { "stable" } else { "UNSTABLE" };
        println!(
            "{:>3}  {:<5} {:<8} checksum {}, round trip {}",
            report.index, label, report.name, checksum, stability
        );

        if !report.stable || (config.verify_checksum && !report.checksum_ok()) {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} Singles failed", failures, reports.len());
    }
    Ok(())
}

/// Decode, re-encode and re-decode every Single in `data`
pub fn check_data(data: &[u8], config: &CodecConfig) -> Vec<CheckReport> {
    sysex::split_messages(data)
        .into_iter()
        .enumerate()
        .filter_map(|(index, message)| match check_message(index, message, config) {
            Ok(report) => report,
            Err(err) => {
                warn!(index, %err, "Skipping malformed message");
                None
            }
        })
        .collect()
}

fn check_message(
    index: usize,
    message: &[u8],
    config: &CodecConfig,
) -> nether_k5::Result<Option<CheckReport>> {
    let body = match sysex::single_payload(message) {
        Ok(body) => body,
        Err(K5Error::UnsupportedDumpKind { .. }) => return Ok(None),
        Err(err) => return Err(err),
    };
    let unchecked = CodecConfig {
        verify_checksum: false,
        ..*config
    };
    let first = parse_single_with(&body, &unchecked)?;
    let computed = checksum_with_base(&body[..SINGLE_BODY_SIZE - 2], config.checksum_base);

    let second = parse_single_with(&write_single_with(&first, config)?, config)?;
    let third = parse_single_with(&write_single_with(&second, config)?, config)?;

    Ok(Some(CheckReport {
        index,
        patch: message[7],
        name: first.display_name().to_string(),
        stored: first.checksum,
        computed,
        stable: second == third,
    }))
}

//! Decoding every message of a SysEx file

use anyhow::{Context, Result};
use nether_k5::sysex::{self, MessageKind, SysExHeader};
use nether_k5::{CodecConfig, Single, parse_single_with};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

/// One well-formed message of a file
#[derive(Debug)]
pub struct Entry {
    /// Position of the message in the file
    pub index: usize,
    pub header: SysExHeader,
    /// Decoded patch, for Single dumps
    pub single: Option<Single>,
}

impl Entry {
    /// Patch number if the message is a dump
    pub fn patch(&self) -> Option<u8> {
        match self.header.classify() {
            MessageKind::SingleDump { patch } | MessageKind::MultiDump { patch } => Some(patch),
            MessageKind::Ignored(_) => None,
        }
    }

    /// Front-panel patch name, or `-` for non-dump messages
    pub fn patch_label(&self) -> String {
        self.patch()
            .and_then(|patch| sysex::patch_name(patch).ok())
            .unwrap_or_else(|| "-".to_string())
    }
}

pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read SysEx file: {}", path.display()))
}

/// Decode all messages in parallel, keeping file order
///
/// Malformed messages are logged and skipped.
pub fn decode(data: &[u8], config: &CodecConfig) -> Vec<Entry> {
    let messages = sysex::split_messages(data);
    debug!(count = messages.len(), "Split SysEx messages");

    messages
        .par_iter()
        .enumerate()
        .filter_map(|(index, message)| match decode_message(index, message, config) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(index, %err, "Skipping malformed message");
                None
            }
        })
        .collect()
}

fn decode_message(index: usize, message: &[u8], config: &CodecConfig) -> nether_k5::Result<Entry> {
    let header = SysExHeader::parse(message)?;
    let single = match header.classify() {
        MessageKind::SingleDump { .. } => {
            let body = sysex::single_payload(message)?;
            Some(parse_single_with(&body, config)?)
        }
        _ => None,
    };

    Ok(Entry {
        index,
        header,
        single,
    })
}

/// Raw message of a Single dump for `patch`
pub fn find_single(data: &[u8], patch: u8) -> Option<&[u8]> {
    sysex::split_messages(data).into_iter().find(|message| {
        SysExHeader::parse(message)
            .is_ok_and(|header| header.classify() == MessageKind::SingleDump { patch })
    })
}

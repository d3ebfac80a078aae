//! SysEx framing for K5 dumps
//!
//! A K5 message is `F0 40 <channel> <function> <group> 02 <sub status 1>
//! <sub status 2> <payload...> F7`. For a one-block Single dump the payload is
//! the 492-byte body sent as 984 nybbles.

use std::fmt;

use tracing::warn;

use crate::error::{K5Error, Result};
use crate::nybble::{pack, unpack};

/// Start of a SysEx message
pub const SYSEX_START: u8 = 0xF0;

/// End of a SysEx message
pub const SYSEX_END: u8 = 0xF7;

/// Kawai manufacturer ID
pub const MANUFACTURER_KAWAI: u8 = 0x40;

/// K5/K5m machine ID
pub const MACHINE_K5: u8 = 0x02;

/// Header bytes before the payload, including F0
pub const HEADER_SIZE: usize = 8;

/// Patches per bank
pub const PATCHES_PER_BANK: u8 = 12;

const BANK_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// SysEx function codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Function {
    ParameterSend = 0x10,
    OneBlockDataDump = 0x20,
    AllBlockDataDump = 0x21,
    ProgramSend = 0x30,
    WriteComplete = 0x40,
    WriteError = 0x41,
    WriteErrorProtect = 0x42,
    WriteErrorNoCard = 0x43,
    MachineIdAcknowledge = 0x61,
}

impl Function {
    pub fn from_u8(val: u8) -> Result<Self> {
        Ok(match val {
            0x10 => Self::ParameterSend,
            0x20 => Self::OneBlockDataDump,
            0x21 => Self::AllBlockDataDump,
            0x30 => Self::ProgramSend,
            0x40 => Self::WriteComplete,
            0x41 => Self::WriteError,
            0x42 => Self::WriteErrorProtect,
            0x43 => Self::WriteErrorNoCard,
            0x61 => Self::MachineIdAcknowledge,
            _ => {
                return Err(K5Error::InvalidEnumValue {
                    field: "function",
                    value: val,
                });
            }
        })
    }

    /// Name used in the K5 MIDI implementation chart
    pub fn name(self) -> &'static str {
        match self {
            Self::ParameterSend => "Parameter send",
            Self::OneBlockDataDump => "One block data dump",
            Self::AllBlockDataDump => "All block data dump",
            Self::ProgramSend => "Program send",
            Self::WriteComplete => "Write complete",
            Self::WriteError => "Write error",
            Self::WriteErrorProtect => "Write error (protect)",
            Self::WriteErrorNoCard => "Write error (no card)",
            Self::MachineIdAcknowledge => "Machine ID acknowledge",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sub status 1: what kind of patch a dump carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatchKind {
    Single = 0x00,
    Multi = 0x01,
}

impl PatchKind {
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0x00 => Some(Self::Single),
            0x01 => Some(Self::Multi),
            _ => None,
        }
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("SINGLE"),
            Self::Multi => f.write_str("MULTI"),
        }
    }
}

/// The 8-byte K5 SysEx header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysExHeader {
    /// MIDI channel, 0-based as transmitted
    pub channel: u8,
    pub function: Function,
    pub group: u8,
    /// Sub status 1 (patch kind)
    pub sub_status1: u8,
    /// Sub status 2 (patch number)
    pub sub_status2: u8,
}

impl SysExHeader {
    /// Validate framing and IDs of a complete message and read its header
    pub fn parse(message: &[u8]) -> Result<Self> {
        if message.len() < HEADER_SIZE + 1 {
            return Err(K5Error::InvalidSysEx("message shorter than header"));
        }
        if message[0] != SYSEX_START || message[message.len() - 1] != SYSEX_END {
            return Err(K5Error::InvalidSysEx("missing F0/F7 framing"));
        }
        if message[1] != MANUFACTURER_KAWAI {
            return Err(K5Error::InvalidSysEx("manufacturer is not Kawai"));
        }
        if message[5] != MACHINE_K5 {
            return Err(K5Error::InvalidSysEx("machine is not a K5"));
        }

        Ok(Self {
            channel: message[2],
            function: Function::from_u8(message[3])?,
            group: message[4],
            sub_status1: message[6],
            sub_status2: message[7],
        })
    }

    /// One-block Single dump header for `patch` on `channel` (0-based)
    pub fn single_dump(channel: u8, patch: u8) -> Self {
        Self {
            channel,
            function: Function::OneBlockDataDump,
            group: 0,
            sub_status1: PatchKind::Single as u8,
            sub_status2: patch,
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        [
            SYSEX_START,
            MANUFACTURER_KAWAI,
            self.channel,
            self.function as u8,
            self.group,
            MACHINE_K5,
            self.sub_status1,
            self.sub_status2,
        ]
    }

    pub fn patch_kind(&self) -> Option<PatchKind> {
        PatchKind::from_u8(self.sub_status1)
    }

    /// What a message with this header carries
    pub fn classify(&self) -> MessageKind {
        match (self.function, self.patch_kind()) {
            (Function::OneBlockDataDump, Some(PatchKind::Single)) => MessageKind::SingleDump {
                patch: self.sub_status2,
            },
            (Function::OneBlockDataDump, Some(PatchKind::Multi)) => MessageKind::MultiDump {
                patch: self.sub_status2,
            },
            (function, _) => MessageKind::Ignored(function),
        }
    }
}

/// Classification of one K5 message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    SingleDump { patch: u8 },
    MultiDump { patch: u8 },
    Ignored(Function),
}

/// Split a file's bytes into its F0..F7 messages, in order
///
/// Bytes between messages are skipped. An unterminated final message is dropped.
pub fn split_messages(data: &[u8]) -> Vec<&[u8]> {
    let mut messages = Vec::new();
    let mut rest = data;

    while let Some(start) = rest.iter().position(|&b| b == SYSEX_START) {
        rest = &rest[start..];
        match rest.iter().position(|&b| b == SYSEX_END) {
            Some(end) => {
                messages.push(&rest[..=end]);
                rest = &rest[end + 1..];
            }
            None => {
                warn!(bytes = rest.len(), "Dropping unterminated SysEx message");
                break;
            }
        }
    }

    messages
}

/// Nybble-unpacked payload of a one-block Single dump
pub fn single_payload(message: &[u8]) -> Result<Vec<u8>> {
    let header = SysExHeader::parse(message)?;
    match header.classify() {
        MessageKind::SingleDump { .. } => unpack(&message[HEADER_SIZE..message.len() - 1]),
        _ => Err(K5Error::UnsupportedDumpKind {
            function: header.function as u8,
            sub_status: header.sub_status1,
        }),
    }
}

/// Wrap an encoded Single body into a one-block dump message
pub fn wrap_single(body: &[u8], channel: u8, patch: u8) -> Vec<u8> {
    let payload = pack(body);
    let mut message = Vec::with_capacity(HEADER_SIZE + payload.len() + 1);
    message.extend_from_slice(&SysExHeader::single_dump(channel, patch).to_bytes());
    message.extend_from_slice(&payload);
    message.push(SYSEX_END);
    message
}

/// Front-panel name of a patch number: `A-1` to `D-12`
pub fn patch_name(patch: u8) -> Result<String> {
    let bank = BANK_LETTERS
        .get(usize::from(patch / PATCHES_PER_BANK))
        .ok_or_else(|| K5Error::InvalidPatchNumber(patch.to_string()))?;
    Ok(format!("{bank}-{}", patch % PATCHES_PER_BANK + 1))
}

/// Patch number of a front-panel name such as `b-7`
pub fn parse_patch_name(name: &str) -> Result<u8> {
    let invalid = || K5Error::InvalidPatchNumber(name.to_string());

    let (bank, slot) = name.trim().split_once('-').ok_or_else(invalid)?;
    let mut letters = bank.chars();
    let letter = letters.next().ok_or_else(invalid)?.to_ascii_uppercase();
    if letters.next().is_some() {
        return Err(invalid());
    }
    let bank = BANK_LETTERS
        .iter()
        .position(|&b| b == letter)
        .ok_or_else(invalid)? as u8;

    let slot: u8 = slot.parse().map_err(|_| invalid())?;
    if !(1..=PATCHES_PER_BANK).contains(&slot) {
        return Err(invalid());
    }

    Ok(bank * PATCHES_PER_BANK + slot - 1)
}

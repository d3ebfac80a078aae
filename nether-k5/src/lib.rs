//! Nether-K5: Kawai K5 Single patch parser and writer
//!
//! This crate decodes the "Single" patches found in Kawai K5/K5m System
//! Exclusive dumps into fully typed structures, and encodes them back into
//! bytes the synthesizer accepts.
//!
//! # Key Features
//!
//! - **Pure Rust**: No I/O in the codec, every operation works on byte slices
//! - **Complete Single support**: DFG, DHG (63 harmonics), DDF, DDA, KS, LFO and formant
//! - **Checksum**: Verification on decode, regeneration on encode
//! - **Transport**: Nybble unpacking/packing and SysEx framing for whole bank files
//!
//! # Format Overview
//!
//! A one-block Single dump is an 8-byte SysEx header followed by 984 nybbles and
//! `F7`. The nybbles unpack into a 492-byte body:
//! - Name, volume, balance and per-source controller settings (20 bytes)
//! - Source 1 and source 2, interleaved byte by byte (448 bytes)
//! - LFO (4 bytes), key scaling for both sources (6 bytes), formant (11 bytes)
//! - A pad byte and a little-endian checksum
//!
//! Most parameter bytes share space between a value and one or two flags; see
//! [`bits::PackedField`].
//!
//! # Usage
//!
//! ```ignore
//! use nether_k5::{parse_single, sysex};
//!
//! let data = std::fs::read("bank.syx").unwrap();
//! for message in sysex::split_messages(&data) {
//!     let body = sysex::single_payload(message).unwrap();
//!     let single = parse_single(&body).unwrap();
//!     println!("{} volume {}", single.display_name(), single.volume);
//! }
//! ```

pub mod bits;
pub mod checksum;
mod config;
mod error;
mod layout;
mod module;
pub mod nybble;
mod parser;
pub mod sysex;
#[cfg(test)]
mod test_data;
mod validate;
mod writer;

pub use checksum::{CHECKSUM_BASE, checksum, checksum_with_base};
pub use config::CodecConfig;
pub use error::{K5Error, Result};
pub use module::{
    AMP_ENVELOPE_SEGMENTS, Amplifier, AmplifierEnvelope, ENVELOPE_SEGMENTS, Envelope,
    EnvelopeLayout, EnvelopeSegment, Filter, FilterEnvelope, Formant, Harmonic, HarmonicEnvelope,
    HarmonicEnvelopeSettings, HarmonicModulation, HarmonicSelection, HarmonicSettings, KeyScaling,
    KeyTracking, Lfo, LfoShape, ModulationAssign, PicMode, PitchEnvelope, PitchSegment,
    SegmentOrder, Single, Source, SourceMode, SourceSettings,
};
pub use parser::{
    parse_envelope, parse_single, parse_single_unchecked, parse_single_with, parse_source,
};
pub use validate::{validate_single, validate_source};
pub use writer::{write_envelope, write_single, write_single_with, write_source};

// =============================================================================
// Constants
// =============================================================================

/// Characters in a patch name
pub const NAME_LENGTH: usize = 8;

/// Harmonics per source
pub const HARMONIC_COUNT: usize = 63;

/// Harmonic envelopes per source
pub const HARMONIC_ENVELOPE_COUNT: usize = 4;

/// Formant bands
pub const FORMANT_BANDS: usize = 11;

/// Bytes one source occupies in the interleaved source region
pub const SOURCE_BLOCK_SIZE: usize = 224;

/// Key scaling bytes per source, stored after the LFO
pub const KEY_SCALING_SIZE: usize = 3;

/// De-interleaved source block as read by [`parse_source`]
pub const SOURCE_SIZE: usize = SOURCE_BLOCK_SIZE + KEY_SCALING_SIZE;

/// Unpacked Single body, checksum included
pub const SINGLE_BODY_SIZE: usize = 492;

/// Nybbles carrying one Single body
pub const SINGLE_NYBBLE_COUNT: usize = 2 * SINGLE_BODY_SIZE;

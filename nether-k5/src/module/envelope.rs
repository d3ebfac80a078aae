//! Envelope structures and their byte layouts

use crate::bits::PackedField;
use crate::layout::{AMP_RATE, ENVELOPE_LEVEL};

/// Segments in DFG, DHG and DDF envelopes
pub const ENVELOPE_SEGMENTS: usize = 6;

/// Segments in the DDA (amplifier) envelope
pub const AMP_ENVELOPE_SEGMENTS: usize = 7;

/// One rate/level breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvelopeSegment {
    /// Rate (0-31 on the device, 0-99 plain byte, 0-63 when sharing a byte)
    pub rate: u8,
    /// Level (0-63)
    pub level: u8,
    /// Level jumps to maximum
    pub is_max: bool,
    /// Rate is under modulation (amplifier envelope only)
    pub is_mod: bool,
}

/// Fixed-length envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<const N: usize> {
    pub segments: [EnvelopeSegment; N],
}

impl<const N: usize> Default for Envelope<N> {
    fn default() -> Self {
        Self {
            segments: [EnvelopeSegment::default(); N],
        }
    }
}

/// DHG harmonic envelope
pub type HarmonicEnvelope = Envelope<ENVELOPE_SEGMENTS>;

/// DDF filter envelope
pub type FilterEnvelope = Envelope<ENVELOPE_SEGMENTS>;

/// DDA amplifier envelope (7 rates, 6 meaningful levels)
pub type AmplifierEnvelope = Envelope<AMP_ENVELOPE_SEGMENTS>;

/// Pitch envelope breakpoint, levels are signed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PitchSegment {
    pub rate: u8,
    pub level: i8,
}

/// DFG pitch envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PitchEnvelope {
    /// Loop flag, stored in bit 7 of the first rate byte
    pub looping: bool,
    pub segments: [PitchSegment; ENVELOPE_SEGMENTS],
}

/// Which half of an envelope block comes first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOrder {
    RatesFirst,
    LevelsFirst,
}

/// Byte layout of an N-segment envelope block
///
/// A `None` field is a plain byte. A rate field's flag maps to
/// [`EnvelopeSegment::is_mod`], a level field's flag to
/// [`EnvelopeSegment::is_max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeLayout {
    pub order: SegmentOrder,
    pub rate: Option<PackedField>,
    pub level: Option<PackedField>,
    /// Final level byte is unused: ignored on decode, written as zero
    pub reserved_last_level: bool,
}

impl EnvelopeLayout {
    /// Harmonic envelopes: levels first, bit 6 max
    pub const HARMONIC: Self = Self {
        order: SegmentOrder::LevelsFirst,
        rate: None,
        level: Some(ENVELOPE_LEVEL),
        reserved_last_level: false,
    };

    /// Filter envelope: rates first, bit 6 max
    pub const FILTER: Self = Self {
        order: SegmentOrder::RatesFirst,
        rate: None,
        level: Some(ENVELOPE_LEVEL),
        reserved_last_level: false,
    };

    /// Amplifier envelope: rates first with bit 6 mod, last level unused
    pub const AMPLIFIER: Self = Self {
        order: SegmentOrder::RatesFirst,
        rate: Some(AMP_RATE),
        level: Some(ENVELOPE_LEVEL),
        reserved_last_level: true,
    };

    /// Largest rate magnitude this layout can carry
    pub const fn max_rate(&self) -> u8 {
        match self.rate {
            Some(field) => field.mask,
            None => 99,
        }
    }
}

//! Byte offsets and shared-byte fields of the Single format
//!
//! Every byte that packs a magnitude next to a flag is described here once.

use crate::bits::{Bit, PackedField};

// =============================================================================
// Single body
// =============================================================================

pub(crate) const SOURCE_REGION_OFFSET: usize = 20;
pub(crate) const SOURCE_REGION_SIZE: usize = 2 * crate::SOURCE_BLOCK_SIZE;
pub(crate) const LFO_OFFSET: usize = SOURCE_REGION_OFFSET + SOURCE_REGION_SIZE;
pub(crate) const KEY_SCALING_OFFSET: usize = LFO_OFFSET + 4;
pub(crate) const FORMANT_OFFSET: usize = KEY_SCALING_OFFSET + 2 * crate::KEY_SCALING_SIZE;
pub(crate) const PAD_OFFSET: usize = FORMANT_OFFSET + crate::FORMANT_BANDS;
pub(crate) const CHECKSUM_OFFSET: usize = PAD_OFFSET + 1;

// =============================================================================
// Source block (de-interleaved)
// =============================================================================

pub(crate) const PITCH_ENVELOPE_OFFSET: usize = 9;
pub(crate) const HARMONIC_LEVELS_OFFSET: usize = 21;
pub(crate) const HARMONIC_SELECTORS_OFFSET: usize = 84;
pub(crate) const HARMONIC_SETTINGS_OFFSET: usize = 116;
pub(crate) const HARMONIC_ENVELOPES_OFFSET: usize = 132;
pub(crate) const FILTER_OFFSET: usize = 180;
pub(crate) const FILTER_ENVELOPE_OFFSET: usize = 191;
pub(crate) const AMPLIFIER_OFFSET: usize = 203;
pub(crate) const AMP_ENVELOPE_OFFSET: usize = 210;

/// Selector bytes for harmonics 1-62, two per byte
pub(crate) const PAIRED_SELECTOR_BYTES: usize = 31;

// =============================================================================
// Shared-byte fields
// =============================================================================

/// Bit 7: fixed key, bits 0-6: key
pub(crate) const KEY_TRACKING: PackedField = PackedField::new(Bit::B7, 0x7F, 0);

/// Bit 7: envelope loops, bits 0-6: rate of the first pitch segment
pub(crate) const PITCH_LOOP_RATE: PackedField = PackedField::new(Bit::B7, 0x7F, 0);

/// Low nybble of a harmonic selector: bit 3 mod on, bits 0-1 envelope
pub(crate) const HARMONIC_SELECT_LOW: PackedField = PackedField::new(Bit::B3, 0x03, 0);

/// High nybble of a harmonic selector: bit 7 mod on, bits 4-5 envelope
pub(crate) const HARMONIC_SELECT_HIGH: PackedField = PackedField::new(Bit::B7, 0x03, 4);

/// Undocumented high nybble of the harmonic 63 selector
pub(crate) const HARMONIC_OVERFLOW_SHIFT: u8 = 4;

/// Bit 7: harmonic envelope on, bits 0-4: effect
pub(crate) const HARMONIC_ENVELOPE_EFFECT: PackedField = PackedField::new(Bit::B7, 0x1F, 0);

/// Bit 7: harmonic modulation on, bits 0-1: selection
pub(crate) const HARMONIC_SELECTION: PackedField = PackedField::new(Bit::B7, 0x03, 0);

/// Odd, octave and all: bit 7 on, bits 4-5 envelope (0-based)
pub(crate) const HARMONIC_MOD_HIGH: PackedField = PackedField::new(Bit::B7, 0x03, 4);

/// Even and fifth: bit 3 on, bits 0-1 envelope (0-based)
pub(crate) const HARMONIC_MOD_LOW: PackedField = PackedField::new(Bit::B3, 0x03, 0);

/// Shadow flag in the first level byte of harmonic envelope 1
pub(crate) const SHADOW: Bit = Bit::B7;

/// Bit 6: max, bits 0-5: level
pub(crate) const ENVELOPE_LEVEL: PackedField = PackedField::new(Bit::B6, 0x3F, 0);

/// Bit 6: modulated, bits 0-5: amplifier envelope rate
pub(crate) const AMP_RATE: PackedField = PackedField::new(Bit::B6, 0x3F, 0);

/// Bit 7: filter on, bits 0-4: LFO depth
pub(crate) const FILTER_LFO: PackedField = PackedField::new(Bit::B7, 0x1F, 0);

/// Bit 6 of the filter LFO byte: filter modulation on
pub(crate) const FILTER_MODULATION: Bit = Bit::B6;

/// Bit 7: amplifier on, bits 0-6: LFO depth
pub(crate) const AMP_LFO: PackedField = PackedField::new(Bit::B7, 0x7F, 0);

/// Bit 7: portamento on, bits 0-5: speed
pub(crate) const PORTAMENTO: PackedField = PackedField::new(Bit::B7, 0x3F, 0);

/// Bit 2: full mode, bits 0-1: pic mode
pub(crate) const MODE: PackedField = PackedField::new(Bit::B2, 0x03, 0);

/// Bit 7: formant on, bits 0-6: level of band 0
pub(crate) const FORMANT_BAND: PackedField = PackedField::new(Bit::B7, 0x7F, 0);

/// Pedal assign in the high nybble, wheel assign in the low nybble
pub(crate) const ASSIGN_SHIFT: u8 = 4;

//! Source block decoding

use tracing::{trace, warn};

use super::envelope::{read_envelope, read_pitch_envelope};
use super::reader::ByteReader;
use crate::bits::{PackedField, has};
use crate::error::{K5Error, Result};
use crate::layout::{
    AMP_ENVELOPE_OFFSET, AMP_LFO, AMPLIFIER_OFFSET, FILTER_ENVELOPE_OFFSET, FILTER_LFO,
    FILTER_OFFSET, HARMONIC_ENVELOPES_OFFSET, HARMONIC_LEVELS_OFFSET, HARMONIC_SELECTORS_OFFSET,
    HARMONIC_SETTINGS_OFFSET, PITCH_ENVELOPE_OFFSET, FILTER_MODULATION, HARMONIC_ENVELOPE_EFFECT, HARMONIC_MOD_HIGH,
    HARMONIC_MOD_LOW, HARMONIC_OVERFLOW_SHIFT, HARMONIC_SELECT_HIGH, HARMONIC_SELECT_LOW,
    HARMONIC_SELECTION, KEY_TRACKING, PAIRED_SELECTOR_BYTES, SHADOW,
};
use crate::module::{
    Amplifier, EnvelopeLayout, Filter, FilterEnvelope, Harmonic, HarmonicEnvelope,
    HarmonicEnvelopeSettings, HarmonicModulation, HarmonicSelection, HarmonicSettings, KeyScaling,
    KeyTracking, Source,
};
use crate::{HARMONIC_COUNT, HARMONIC_ENVELOPE_COUNT, SOURCE_SIZE};

/// Decode one de-interleaved source block
///
/// `data` holds the 224 bytes taken from the source region followed by the
/// three key scaling bytes. Extra trailing bytes are ignored.
pub fn parse_source(data: &[u8]) -> Result<Source> {
    if data.len() < SOURCE_SIZE {
        return Err(K5Error::TruncatedSource {
            expected: SOURCE_SIZE,
            actual: data.len(),
        });
    }

    let mut reader = ByteReader::new(data);

    // DFG (9 bytes)
    let coarse = reader.read_i8()?;
    let fine = reader.read_i8()?;
    let (key, fixed) = KEY_TRACKING.decode(reader.read_u8()?);
    let key_tracking = if fixed {
        KeyTracking::Fixed(key)
    } else {
        KeyTracking::Track
    };
    let envelope_depth = reader.read_i8()?;
    let pressure_depth = reader.read_i8()?;
    let bender_depth = reader.read_i8()?;
    let velocity_envelope_depth = reader.read_i8()?;
    let lfo_depth = reader.read_u8()?;
    let pressure_lfo_depth = reader.read_i8()?;

    // DFG envelope (12 bytes)
    debug_assert_eq!(reader.position(), PITCH_ENVELOPE_OFFSET);
    let pitch_envelope = read_pitch_envelope(&mut reader)?;

    // DHG levels, then selectors
    debug_assert_eq!(reader.position(), HARMONIC_LEVELS_OFFSET);
    let (harmonics, harmonic_overflow) = read_harmonics(&mut reader)?;

    // DHG settings (16 bytes, plus the shadow flag borrowed from the next block)
    debug_assert_eq!(reader.position(), HARMONIC_SETTINGS_OFFSET);
    let harmonic_settings = read_harmonic_settings(&mut reader)?;

    // Harmonic envelopes (4 x 12 bytes)
    debug_assert_eq!(reader.position(), HARMONIC_ENVELOPES_OFFSET);
    let mut harmonic_envelopes = [HarmonicEnvelope::default(); HARMONIC_ENVELOPE_COUNT];
    for envelope in &mut harmonic_envelopes {
        *envelope = read_envelope(&mut reader, &EnvelopeLayout::HARMONIC)?;
    }

    // DDF (11 bytes) and its envelope
    debug_assert_eq!(reader.position(), FILTER_OFFSET);
    let filter = read_filter(&mut reader)?;
    debug_assert_eq!(reader.position(), FILTER_ENVELOPE_OFFSET);
    let filter_envelope: FilterEnvelope = read_envelope(&mut reader, &EnvelopeLayout::FILTER)?;

    // DDA (7 bytes) and its envelope
    debug_assert_eq!(reader.position(), AMPLIFIER_OFFSET);
    let mut amplifier = read_amplifier(&mut reader)?;
    debug_assert_eq!(reader.position(), AMP_ENVELOPE_OFFSET);
    amplifier.envelope = read_envelope(&mut reader, &EnvelopeLayout::AMPLIFIER)?;

    // KS (3 bytes, carried in from the common area)
    let key_scaling = KeyScaling {
        right: reader.read_i8()?,
        left: reader.read_i8()?,
        breakpoint: reader.read_u8()?,
    };

    trace!(position = reader.position(), "Decoded source block");

    Ok(Source {
        coarse,
        fine,
        key_tracking,
        envelope_depth,
        pressure_depth,
        bender_depth,
        velocity_envelope_depth,
        lfo_depth,
        pressure_lfo_depth,
        pitch_envelope,
        harmonics,
        harmonic_overflow,
        harmonic_settings,
        harmonic_envelopes,
        filter,
        filter_envelope,
        amplifier,
        key_scaling,
    })
}

/// Harmonic levels and their packed modulation/envelope selectors
fn read_harmonics(reader: &mut ByteReader) -> Result<([Harmonic; HARMONIC_COUNT], u8)> {
    let mut harmonics = [Harmonic::default(); HARMONIC_COUNT];

    let levels = reader.read_array::<HARMONIC_COUNT>()?;
    for (harmonic, level) in harmonics.iter_mut().zip(levels) {
        harmonic.level = level;
    }

    // Harmonics 1-62, two per byte, odd harmonic in the low nybble
    debug_assert_eq!(reader.position(), HARMONIC_SELECTORS_OFFSET);
    let selectors = reader.read_array::<PAIRED_SELECTOR_BYTES>()?;
    for (pair, byte) in harmonics.chunks_exact_mut(2).zip(selectors) {
        (pair[0].envelope, pair[0].is_modulation_active) = HARMONIC_SELECT_LOW.decode(byte);
        (pair[1].envelope, pair[1].is_modulation_active) = HARMONIC_SELECT_HIGH.decode(byte);
    }

    // Harmonic 63 uses the low nybble only; the high nybble has a second,
    // conflicting description in the parameter map
    let byte = reader.read_u8()?;
    let last = &mut harmonics[HARMONIC_COUNT - 1];
    (last.envelope, last.is_modulation_active) = HARMONIC_SELECT_LOW.decode(byte);
    let overflow = byte >> HARMONIC_OVERFLOW_SHIFT;
    if overflow != 0 {
        warn!(
            overflow,
            "Harmonic 63 selector has data in its undocumented high nybble, keeping it verbatim"
        );
    }

    Ok((harmonics, overflow))
}

fn read_harmonic_settings(reader: &mut ByteReader) -> Result<HarmonicSettings> {
    let velocity_depth = reader.read_i8()?;
    let pressure_depth = reader.read_i8()?;
    let key_scaling_depth = reader.read_i8()?;
    let lfo_depth = reader.read_u8()?;

    let mut envelope_settings = [HarmonicEnvelopeSettings::default(); HARMONIC_ENVELOPE_COUNT];
    for settings in &mut envelope_settings {
        let (effect, is_active) = HARMONIC_ENVELOPE_EFFECT.decode(reader.read_u8()?);
        *settings = HarmonicEnvelopeSettings { is_active, effect };
    }

    let (selection, is_modulation_active) = HARMONIC_SELECTION.decode(reader.read_u8()?);
    let range_from = reader.read_u8()?;
    let range_to = reader.read_u8()?;

    // Envelope numbers are stored 0-based
    let modulation = |field: PackedField, byte: u8| {
        let (envelope, is_on) = field.decode(byte);
        HarmonicModulation {
            is_on,
            envelope: envelope + 1,
        }
    };
    let odd_even = reader.read_u8()?;
    let octave_fifth = reader.read_u8()?;
    let all = reader.read_u8()?;

    let angle = reader.read_u8()?;
    let number = reader.read_u8()?;

    // The shadow flag lives in the first level byte of harmonic envelope 1
    let is_shadow_on = has(reader.read_u8()?, SHADOW);
    reader.rewind()?;

    Ok(HarmonicSettings {
        velocity_depth,
        pressure_depth,
        key_scaling_depth,
        lfo_depth,
        envelope_settings,
        is_modulation_active,
        selection: HarmonicSelection::from_u8(selection),
        range_from,
        range_to,
        odd: modulation(HARMONIC_MOD_HIGH, odd_even),
        even: modulation(HARMONIC_MOD_LOW, odd_even),
        octave: modulation(HARMONIC_MOD_HIGH, octave_fifth),
        fifth: modulation(HARMONIC_MOD_LOW, octave_fifth),
        all: modulation(HARMONIC_MOD_HIGH, all),
        angle,
        number,
        is_shadow_on,
    })
}

fn read_filter(reader: &mut ByteReader) -> Result<Filter> {
    let cutoff = reader.read_u8()?;
    let cutoff_modulation = reader.read_u8()?;
    let slope = reader.read_u8()?;
    let slope_modulation = reader.read_u8()?;
    let flat_level = reader.read_u8()?;
    let velocity_depth = reader.read_i8()?;
    let pressure_depth = reader.read_i8()?;
    let key_scaling_depth = reader.read_i8()?;
    let envelope_depth = reader.read_i8()?;
    let velocity_envelope_depth = reader.read_i8()?;

    let byte = reader.read_u8()?;
    let (lfo_depth, is_active) = FILTER_LFO.decode(byte);

    Ok(Filter {
        is_active,
        is_modulation_active: has(byte, FILTER_MODULATION),
        cutoff,
        cutoff_modulation,
        slope,
        slope_modulation,
        flat_level,
        velocity_depth,
        pressure_depth,
        key_scaling_depth,
        envelope_depth,
        velocity_envelope_depth,
        lfo_depth,
    })
}

/// DDA parameters; the envelope is read separately
fn read_amplifier(reader: &mut ByteReader) -> Result<Amplifier> {
    let attack_velocity_depth = reader.read_i8()?;
    let pressure_depth = reader.read_i8()?;
    let key_scaling_depth = reader.read_i8()?;
    let (lfo_depth, is_active) = AMP_LFO.decode(reader.read_u8()?);

    Ok(Amplifier {
        is_active,
        attack_velocity_depth,
        pressure_depth,
        key_scaling_depth,
        lfo_depth,
        attack_velocity_rate: reader.read_i8()?,
        release_velocity_rate: reader.read_i8()?,
        key_scaling_rate: reader.read_i8()?,
        envelope: Default::default(),
    })
}

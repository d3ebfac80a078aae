//! Source block encoding

use super::envelope::{write_envelope, write_pitch_envelope};
use crate::bits::{assign, set};
use crate::layout::{
    AMP_LFO, FILTER_LFO, FILTER_MODULATION, HARMONIC_ENVELOPE_EFFECT, HARMONIC_ENVELOPES_OFFSET,
    HARMONIC_MOD_HIGH, HARMONIC_MOD_LOW, HARMONIC_OVERFLOW_SHIFT, HARMONIC_SELECT_HIGH,
    HARMONIC_SELECT_LOW, HARMONIC_SELECTION, KEY_TRACKING, SHADOW,
};
use crate::module::{
    Amplifier, EnvelopeLayout, Filter, Harmonic, HarmonicModulation, HarmonicSettings,
    KeyTracking, Source,
};
use crate::{HARMONIC_COUNT, SOURCE_SIZE};

/// Encode one source as its de-interleaved block (224 bytes + 3 key scaling bytes)
pub fn write_source(source: &Source) -> Vec<u8> {
    let mut output = Vec::with_capacity(SOURCE_SIZE);

    // DFG
    output.push(source.coarse as u8);
    output.push(source.fine as u8);
    output.push(match source.key_tracking {
        KeyTracking::Track => 0,
        KeyTracking::Fixed(key) => KEY_TRACKING.encode(key, true),
    });
    output.push(source.envelope_depth as u8);
    output.push(source.pressure_depth as u8);
    output.push(source.bender_depth as u8);
    output.push(source.velocity_envelope_depth as u8);
    output.push(source.lfo_depth);
    output.push(source.pressure_lfo_depth as u8);

    write_pitch_envelope(&mut output, &source.pitch_envelope);

    // DHG
    write_harmonics(&mut output, &source.harmonics, source.harmonic_overflow);
    write_harmonic_settings(&mut output, &source.harmonic_settings);

    debug_assert_eq!(output.len(), HARMONIC_ENVELOPES_OFFSET);
    for envelope in &source.harmonic_envelopes {
        write_envelope(&mut output, envelope, &EnvelopeLayout::HARMONIC);
    }
    if source.harmonic_settings.is_shadow_on {
        output[HARMONIC_ENVELOPES_OFFSET] = set(output[HARMONIC_ENVELOPES_OFFSET], SHADOW);
    }

    // DDF
    write_filter(&mut output, &source.filter);
    write_envelope(&mut output, &source.filter_envelope, &EnvelopeLayout::FILTER);

    // DDA
    write_amplifier(&mut output, &source.amplifier);
    write_envelope(
        &mut output,
        &source.amplifier.envelope,
        &EnvelopeLayout::AMPLIFIER,
    );

    // KS
    output.push(source.key_scaling.right as u8);
    output.push(source.key_scaling.left as u8);
    output.push(source.key_scaling.breakpoint);

    debug_assert_eq!(output.len(), SOURCE_SIZE);
    output
}

fn write_harmonics(output: &mut Vec<u8>, harmonics: &[Harmonic; HARMONIC_COUNT], overflow: u8) {
    output.extend(harmonics.iter().map(|harmonic| harmonic.level));

    // Harmonics 1-62, two per byte
    let pairs = harmonics.chunks_exact(2);
    let last = pairs.remainder()[0];
    for pair in pairs {
        output.push(
            HARMONIC_SELECT_LOW.encode(pair[0].envelope, pair[0].is_modulation_active)
                | HARMONIC_SELECT_HIGH.encode(pair[1].envelope, pair[1].is_modulation_active),
        );
    }

    // Harmonic 63 in the low nybble, the preserved overflow nybble above it
    output.push(
        HARMONIC_SELECT_LOW.encode(last.envelope, last.is_modulation_active)
            | ((overflow & 0x0F) << HARMONIC_OVERFLOW_SHIFT),
    );
}

fn write_harmonic_settings(output: &mut Vec<u8>, settings: &HarmonicSettings) {
    output.push(settings.velocity_depth as u8);
    output.push(settings.pressure_depth as u8);
    output.push(settings.key_scaling_depth as u8);
    output.push(settings.lfo_depth);

    for envelope in &settings.envelope_settings {
        output.push(HARMONIC_ENVELOPE_EFFECT.encode(envelope.effect, envelope.is_active));
    }

    output.push(HARMONIC_SELECTION.encode(settings.selection as u8, settings.is_modulation_active));
    output.push(settings.range_from);
    output.push(settings.range_to);

    // Envelope numbers go back to 0-based
    let high = |m: &HarmonicModulation| HARMONIC_MOD_HIGH.encode(m.envelope.wrapping_sub(1), m.is_on);
    let low = |m: &HarmonicModulation| HARMONIC_MOD_LOW.encode(m.envelope.wrapping_sub(1), m.is_on);
    output.push(high(&settings.odd) | low(&settings.even));
    output.push(high(&settings.octave) | low(&settings.fifth));
    output.push(high(&settings.all));

    output.push(settings.angle);
    output.push(settings.number);
}

fn write_filter(output: &mut Vec<u8>, filter: &Filter) {
    output.push(filter.cutoff);
    output.push(filter.cutoff_modulation);
    output.push(filter.slope);
    output.push(filter.slope_modulation);
    output.push(filter.flat_level);
    output.push(filter.velocity_depth as u8);
    output.push(filter.pressure_depth as u8);
    output.push(filter.key_scaling_depth as u8);
    output.push(filter.envelope_depth as u8);
    output.push(filter.velocity_envelope_depth as u8);
    output.push(assign(
        FILTER_LFO.encode(filter.lfo_depth, filter.is_active),
        FILTER_MODULATION,
        filter.is_modulation_active,
    ));
}

fn write_amplifier(output: &mut Vec<u8>, amplifier: &Amplifier) {
    output.push(amplifier.attack_velocity_depth as u8);
    output.push(amplifier.pressure_depth as u8);
    output.push(amplifier.key_scaling_depth as u8);
    output.push(AMP_LFO.encode(amplifier.lfo_depth, amplifier.is_active));
    output.push(amplifier.attack_velocity_rate as u8);
    output.push(amplifier.release_velocity_rate as u8);
    output.push(amplifier.key_scaling_rate as u8);
}

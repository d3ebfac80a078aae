//! Parameter range checks applied before encoding

use crate::error::{K5Error, Result};
use crate::module::{
    Envelope, EnvelopeLayout, KeyTracking, PitchEnvelope, Single, Source, is_name_byte,
};
use crate::NAME_LENGTH;

fn check(field: &'static str, value: impl Into<i32>, min: i32, max: i32) -> Result<()> {
    let value = value.into();
    if !(min..=max).contains(&value) {
        return Err(K5Error::ValueOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Check every parameter of `single` against its documented range
pub fn validate_single(single: &Single) -> Result<()> {
    if single.name.len() != NAME_LENGTH || !single.name.bytes().all(is_name_byte) {
        return Err(K5Error::InvalidName(single.name.clone()));
    }

    check("volume", single.volume, 0, 63)?;
    check("balance", single.balance, -31, 31)?;

    for settings in &single.source_settings {
        check("delay", settings.delay, 0, 31)?;
        check("pedal depth", settings.pedal_depth, -31, 31)?;
        check("wheel depth", settings.wheel_depth, -31, 31)?;
    }

    check("portamento speed", single.portamento_speed, 0, 63)?;

    for source in &single.sources {
        validate_source(source)?;
    }

    check("LFO speed", single.lfo.speed, 0, 99)?;
    check("LFO delay", single.lfo.delay, 0, 31)?;
    check("LFO trend", single.lfo.trend, 0, 31)?;

    for &level in &single.formant.levels {
        check("formant level", level, 0, 99)?;
    }

    Ok(())
}

/// Check every parameter of one source against its documented range
pub fn validate_source(source: &Source) -> Result<()> {
    // DFG
    check("coarse", source.coarse, -48, 48)?;
    check("fine", source.fine, -31, 31)?;
    if let KeyTracking::Fixed(key) = source.key_tracking {
        check("fixed key", key, 0, 127)?;
    }
    check("DFG envelope depth", source.envelope_depth, -24, 24)?;
    check("DFG pressure depth", source.pressure_depth, -31, 31)?;
    check("bender depth", source.bender_depth, -24, 24)?;
    check("DFG velocity envelope depth", source.velocity_envelope_depth, -31, 31)?;
    check("DFG LFO depth", source.lfo_depth, 0, 31)?;
    check("pressure LFO depth", source.pressure_lfo_depth, -31, 31)?;
    validate_pitch_envelope(&source.pitch_envelope)?;

    // DHG
    for harmonic in &source.harmonics {
        check("harmonic level", harmonic.level, 0, 99)?;
        check("harmonic envelope", harmonic.envelope, 0, 3)?;
    }
    check("harmonic overflow", source.harmonic_overflow, 0, 0x0F)?;

    let settings = &source.harmonic_settings;
    check("DHG velocity depth", settings.velocity_depth, -31, 31)?;
    check("DHG pressure depth", settings.pressure_depth, -31, 31)?;
    check("DHG key scaling depth", settings.key_scaling_depth, -31, 31)?;
    check("DHG LFO depth", settings.lfo_depth, 0, 31)?;
    for envelope in &settings.envelope_settings {
        check("harmonic envelope effect", envelope.effect, 0, 31)?;
    }
    check("harmonic range from", settings.range_from, 1, 63)?;
    check("harmonic range to", settings.range_to, 1, 63)?;
    for modulation in [
        &settings.odd,
        &settings.even,
        &settings.octave,
        &settings.fifth,
        &settings.all,
    ] {
        check("harmonic modulation envelope", modulation.envelope, 1, 4)?;
    }
    check("harmonic angle", settings.angle, 0, 2)?;
    check("harmonic number", settings.number, 1, 63)?;
    for envelope in &source.harmonic_envelopes {
        validate_envelope(envelope, &EnvelopeLayout::HARMONIC)?;
    }

    // DDF
    let filter = &source.filter;
    check("cutoff", filter.cutoff, 0, 99)?;
    check("cutoff modulation", filter.cutoff_modulation, 0, 31)?;
    check("slope", filter.slope, 0, 99)?;
    check("slope modulation", filter.slope_modulation, 0, 31)?;
    check("flat level", filter.flat_level, 0, 99)?;
    for depth in [
        filter.velocity_depth,
        filter.pressure_depth,
        filter.key_scaling_depth,
        filter.envelope_depth,
        filter.velocity_envelope_depth,
    ] {
        check("DDF depth", depth, -31, 31)?;
    }
    check("DDF LFO depth", filter.lfo_depth, 0, 31)?;
    validate_envelope(&source.filter_envelope, &EnvelopeLayout::FILTER)?;

    // DDA
    let amplifier = &source.amplifier;
    for depth in [
        amplifier.attack_velocity_depth,
        amplifier.pressure_depth,
        amplifier.key_scaling_depth,
    ] {
        check("DDA depth", depth, -31, 31)?;
    }
    check("DDA LFO depth", amplifier.lfo_depth, 0, 31)?;
    for rate in [
        amplifier.attack_velocity_rate,
        amplifier.release_velocity_rate,
        amplifier.key_scaling_rate,
    ] {
        check("DDA velocity rate", rate, -15, 15)?;
    }
    validate_envelope(&amplifier.envelope, &EnvelopeLayout::AMPLIFIER)?;

    // KS
    check("KS right", source.key_scaling.right, -31, 31)?;
    check("KS left", source.key_scaling.left, -31, 31)?;
    check("KS breakpoint", source.key_scaling.breakpoint, 0, 127)?;

    Ok(())
}

fn validate_pitch_envelope(envelope: &PitchEnvelope) -> Result<()> {
    for segment in &envelope.segments {
        check("pitch envelope rate", segment.rate, 0, 99)?;
        check("pitch envelope level", segment.level, -63, 63)?;
    }
    Ok(())
}

/// The reserved final level of the amplifier envelope is not checked; it is
/// always written as zero
fn validate_envelope<const N: usize>(envelope: &Envelope<N>, layout: &EnvelopeLayout) -> Result<()> {
    let max_rate = i32::from(layout.max_rate());
    for (i, segment) in envelope.segments.iter().enumerate() {
        check("envelope rate", segment.rate, 0, max_rate)?;
        if layout.reserved_last_level && i == N - 1 {
            continue;
        }
        check("envelope level", segment.level, 0, 63)?;
    }
    Ok(())
}

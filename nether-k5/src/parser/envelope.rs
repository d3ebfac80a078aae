//! Envelope decoding

use super::reader::ByteReader;
use crate::error::Result;
use crate::layout::PITCH_LOOP_RATE;
use crate::module::{
    ENVELOPE_SEGMENTS, Envelope, EnvelopeLayout, EnvelopeSegment, PitchEnvelope, PitchSegment,
    SegmentOrder,
};

/// Read the rate and level halves of an envelope block, in layout order
fn read_halves<const N: usize>(
    reader: &mut ByteReader,
    order: SegmentOrder,
) -> Result<([u8; N], [u8; N])> {
    let first = reader.read_array::<N>()?;
    let second = reader.read_array::<N>()?;
    Ok(match order {
        SegmentOrder::RatesFirst => (first, second),
        SegmentOrder::LevelsFirst => (second, first),
    })
}

/// Decode an N-segment envelope at the reader's position
pub(crate) fn read_envelope<const N: usize>(
    reader: &mut ByteReader,
    layout: &EnvelopeLayout,
) -> Result<Envelope<N>> {
    let (rates, levels) = read_halves::<N>(reader, layout.order)?;

    let mut envelope = Envelope::<N>::default();
    for (i, segment) in envelope.segments.iter_mut().enumerate() {
        let (rate, is_mod) = match layout.rate {
            Some(field) => field.decode(rates[i]),
            None => (rates[i], false),
        };
        *segment = EnvelopeSegment {
            rate,
            is_mod,
            ..EnvelopeSegment::default()
        };

        if layout.reserved_last_level && i == N - 1 {
            continue;
        }
        let (level, is_max) = match layout.level {
            Some(field) => field.decode(levels[i]),
            None => (levels[i], false),
        };
        segment.level = level;
        segment.is_max = is_max;
    }

    Ok(envelope)
}

/// Decode the DFG pitch envelope: rates (loop flag on the first), then signed levels
pub(crate) fn read_pitch_envelope(reader: &mut ByteReader) -> Result<PitchEnvelope> {
    let (rates, levels) = read_halves::<ENVELOPE_SEGMENTS>(reader, SegmentOrder::RatesFirst)?;

    let (first_rate, looping) = PITCH_LOOP_RATE.decode(rates[0]);
    let mut envelope = PitchEnvelope {
        looping,
        ..PitchEnvelope::default()
    };
    for (i, segment) in envelope.segments.iter_mut().enumerate() {
        *segment = PitchSegment {
            rate: if i == 0 { first_rate } else { rates[i] },
            level: levels[i] as i8,
        };
    }

    Ok(envelope)
}

/// Decode an envelope from a standalone byte slice
pub fn parse_envelope<const N: usize>(data: &[u8], layout: &EnvelopeLayout) -> Result<Envelope<N>> {
    read_envelope(&mut ByteReader::new(data), layout)
}

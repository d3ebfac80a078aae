//! Envelope encoding

use crate::layout::PITCH_LOOP_RATE;
use crate::module::{Envelope, EnvelopeLayout, PitchEnvelope, SegmentOrder};

/// Encode an N-segment envelope in layout order
pub fn write_envelope<const N: usize>(
    output: &mut Vec<u8>,
    envelope: &Envelope<N>,
    layout: &EnvelopeLayout,
) {
    let rates = envelope.segments.map(|segment| match layout.rate {
        Some(field) => field.encode(segment.rate, segment.is_mod),
        None => segment.rate,
    });

    let mut levels = envelope.segments.map(|segment| match layout.level {
        Some(field) => field.encode(segment.level, segment.is_max),
        None => segment.level,
    });
    if layout.reserved_last_level {
        levels[N - 1] = 0;
    }

    match layout.order {
        SegmentOrder::RatesFirst => {
            output.extend_from_slice(&rates);
            output.extend_from_slice(&levels);
        }
        SegmentOrder::LevelsFirst => {
            output.extend_from_slice(&levels);
            output.extend_from_slice(&rates);
        }
    }
}

/// Encode the DFG pitch envelope, loop flag on the first rate
pub(crate) fn write_pitch_envelope(output: &mut Vec<u8>, envelope: &PitchEnvelope) {
    for (i, segment) in envelope.segments.iter().enumerate() {
        if i == 0 {
            output.push(PITCH_LOOP_RATE.encode(segment.rate, envelope.looping));
        } else {
            output.push(segment.rate);
        }
    }
    for segment in &envelope.segments {
        output.push(segment.level as u8);
    }
}

//! Single body writer
//!
//! Produces the 492-byte body the parser reads: common parameters, the two
//! sources interleaved byte by byte, LFO, key scaling, formant, pad and
//! checksum. Wrapping into a SysEx message lives in [`crate::sysex`].

use tracing::debug;

use crate::checksum::checksum_with_base;
use crate::config::CodecConfig;
use crate::error::Result;
use crate::layout::{
    ASSIGN_SHIFT, CHECKSUM_OFFSET, FORMANT_BAND, LFO_OFFSET, MODE, PAD_OFFSET, PORTAMENTO,
    SOURCE_REGION_OFFSET,
};
use crate::module::{Single, SourceMode};
use crate::validate::validate_single;
use crate::{KEY_SCALING_SIZE, NAME_LENGTH, SINGLE_BODY_SIZE, SOURCE_BLOCK_SIZE};

mod envelope;
mod source;
#[cfg(test)]
mod tests;

pub use envelope::write_envelope;
pub use source::write_source;

/// Encode a Single with the documented checksum base
///
/// Fails if any parameter is outside its range.
pub fn write_single(single: &Single) -> Result<Vec<u8>> {
    write_single_with(single, &CodecConfig::default())
}

/// Encode a Single with explicit codec settings
pub fn write_single_with(single: &Single, config: &CodecConfig) -> Result<Vec<u8>> {
    validate_single(single)?;

    let mut output = encode_body(single);
    let sum = checksum_with_base(&output, config.checksum_base);
    output.extend_from_slice(&sum.to_le_bytes());

    debug!(name = single.display_name(), checksum = sum, "Wrote Single");
    Ok(output)
}

/// Checksum the encoded parameters of `single` would carry
pub(crate) fn body_checksum(single: &Single, base: u16) -> u16 {
    checksum_with_base(&encode_body(single), base)
}

/// Everything before the checksum (490 bytes)
fn encode_body(single: &Single) -> Vec<u8> {
    let mut output = Vec::with_capacity(SINGLE_BODY_SIZE);

    // Name (8 bytes, space padded)
    let mut name = [b' '; NAME_LENGTH];
    for (slot, byte) in name.iter_mut().zip(single.name.bytes()) {
        *slot = byte;
    }
    output.extend_from_slice(&name);

    // Volume, balance
    output.push(single.volume);
    output.push(single.balance as u8);

    // Source settings, interleaved S1/S2
    let [s1, s2] = &single.source_settings;
    output.extend_from_slice(&[s1.delay, s2.delay]);
    output.extend_from_slice(&[s1.pedal_depth as u8, s2.pedal_depth as u8]);
    output.extend_from_slice(&[s1.wheel_depth as u8, s2.wheel_depth as u8]);
    for settings in [s1, s2] {
        output.push(((settings.pedal_assign as u8) << ASSIGN_SHIFT) | settings.wheel_assign as u8);
    }

    // Portamento, mode
    output.push(PORTAMENTO.encode(single.portamento_speed, single.portamento));
    output.push(MODE.encode(single.pic_mode as u8, single.mode == SourceMode::Full));

    // Sources, interleaved
    debug_assert_eq!(output.len(), SOURCE_REGION_OFFSET);
    let blocks = [
        write_source(&single.sources[0]),
        write_source(&single.sources[1]),
    ];
    assert_eq!(
        blocks[0].len(),
        blocks[1].len(),
        "source encodings must be the same length to interleave"
    );
    for (a, b) in blocks[0][..SOURCE_BLOCK_SIZE]
        .iter()
        .zip(&blocks[1][..SOURCE_BLOCK_SIZE])
    {
        output.push(*a);
        output.push(*b);
    }

    // LFO
    debug_assert_eq!(output.len(), LFO_OFFSET);
    output.push(single.lfo.shape as u8);
    output.push(single.lfo.speed);
    output.push(single.lfo.delay);
    output.push(single.lfo.trend);

    // Key scaling, the tail of each source block, interleaved
    for i in SOURCE_BLOCK_SIZE..SOURCE_BLOCK_SIZE + KEY_SCALING_SIZE {
        output.push(blocks[0][i]);
        output.push(blocks[1][i]);
    }

    // Formant, active flag on band 0
    for (i, &level) in single.formant.levels.iter().enumerate() {
        output.push(FORMANT_BAND.encode(level, i == 0 && single.formant.is_active));
    }

    // Pad
    debug_assert_eq!(output.len(), PAD_OFFSET);
    output.push(0);

    debug_assert_eq!(output.len(), CHECKSUM_OFFSET);
    output
}

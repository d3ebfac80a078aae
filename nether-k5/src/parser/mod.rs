//! Single body parser

use tracing::debug;

use crate::checksum::verify;
use crate::config::CodecConfig;
use crate::error::{K5Error, Result};
use crate::layout::{
    ASSIGN_SHIFT, CHECKSUM_OFFSET, FORMANT_BAND, KEY_SCALING_OFFSET, LFO_OFFSET, MODE, PAD_OFFSET,
    PORTAMENTO, SOURCE_REGION_OFFSET, SOURCE_REGION_SIZE,
};
use crate::module::{
    Formant, Lfo, LfoShape, ModulationAssign, PicMode, Single, SourceMode, SourceSettings,
};
use crate::{FORMANT_BANDS, KEY_SCALING_SIZE, NAME_LENGTH, SINGLE_BODY_SIZE, SOURCE_BLOCK_SIZE};

mod envelope;
pub(crate) mod reader;
mod source;

use reader::ByteReader;

pub use envelope::parse_envelope;
pub use source::parse_source;

/// Parse a Single body and verify its checksum against the documented base
///
/// # Arguments
/// * `data` - Header-stripped, nybble-unpacked body (492 bytes)
pub fn parse_single(data: &[u8]) -> Result<Single> {
    parse_single_with(data, &CodecConfig::default())
}

/// Parse a Single body without looking at the checksum
pub fn parse_single_unchecked(data: &[u8]) -> Result<Single> {
    parse_single_with(data, &CodecConfig::unchecked())
}

/// Parse a Single body with explicit codec settings
pub fn parse_single_with(data: &[u8], config: &CodecConfig) -> Result<Single> {
    if data.len() < SINGLE_BODY_SIZE {
        return Err(K5Error::TruncatedInput {
            offset: 0,
            needed: SINGLE_BODY_SIZE,
            available: data.len(),
        });
    }

    let mut reader = ByteReader::new(data);

    // Name (8 bytes)
    let name = String::from_utf8_lossy(reader.read_bytes(NAME_LENGTH)?).into_owned();

    // Volume, balance
    let volume = reader.read_u8()?;
    let balance = reader.read_i8()?;

    // Source settings, interleaved S1/S2: delay, pedal depth, wheel depth, assign
    let delays = reader.read_array::<2>()?;
    let pedal_depths = reader.read_array::<2>()?;
    let wheel_depths = reader.read_array::<2>()?;
    let assigns = reader.read_array::<2>()?;
    let mut source_settings = [SourceSettings::default(); 2];
    for (i, settings) in source_settings.iter_mut().enumerate() {
        *settings = SourceSettings {
            delay: delays[i],
            pedal_depth: pedal_depths[i] as i8,
            wheel_depth: wheel_depths[i] as i8,
            pedal_assign: ModulationAssign::from_u8(assigns[i] >> ASSIGN_SHIFT)?,
            wheel_assign: ModulationAssign::from_u8(assigns[i] & 0x0F)?,
        };
    }

    // Portamento (1 byte)
    let (portamento_speed, portamento) = PORTAMENTO.decode(reader.read_u8()?);

    // Mode and pic mode (1 byte)
    let (pic_mode, full) = MODE.decode(reader.read_u8()?);
    let mode = if full {
        SourceMode::Full
    } else {
        SourceMode::Twin
    };

    // Sources (448 bytes, even offsets S1, odd offsets S2)
    debug_assert_eq!(reader.position(), SOURCE_REGION_OFFSET);
    let region = reader.read_bytes(SOURCE_REGION_SIZE)?;
    let mut blocks = [
        Vec::with_capacity(crate::SOURCE_SIZE),
        Vec::with_capacity(crate::SOURCE_SIZE),
    ];
    for pair in region.chunks_exact(2) {
        blocks[0].push(pair[0]);
        blocks[1].push(pair[1]);
    }
    debug_assert_eq!(blocks[0].len(), SOURCE_BLOCK_SIZE);

    // LFO (4 bytes)
    debug_assert_eq!(reader.position(), LFO_OFFSET);
    let lfo = Lfo {
        shape: LfoShape::from_u8(reader.read_u8()?)?,
        speed: reader.read_u8()?,
        delay: reader.read_u8()?,
        trend: reader.read_u8()?,
    };

    // Key scaling, interleaved S1/S2: right, left, breakpoint
    debug_assert_eq!(reader.position(), KEY_SCALING_OFFSET);
    let key_scaling = reader.read_array::<{ 2 * KEY_SCALING_SIZE }>()?;
    for pair in key_scaling.chunks_exact(2) {
        blocks[0].push(pair[0]);
        blocks[1].push(pair[1]);
    }

    // Formant (11 bytes), active flag on band 0
    let bands = reader.read_array::<FORMANT_BANDS>()?;
    let mut formant = Formant::default();
    for (i, (level, band)) in formant.levels.iter_mut().zip(bands).enumerate() {
        let (value, on) = FORMANT_BAND.decode(band);
        *level = value;
        if i == 0 {
            formant.is_active = on;
        }
    }

    // Pad (1 byte), then checksum (2 bytes)
    debug_assert_eq!(reader.position(), PAD_OFFSET);
    reader.read_u8()?;
    let checksum = reader.read_u16_le()?;

    if config.verify_checksum {
        verify(&data[..CHECKSUM_OFFSET], checksum, config.checksum_base)?;
    }

    let sources = [parse_source(&blocks[0])?, parse_source(&blocks[1])?];

    debug!(name = name.trim_end(), checksum, "Parsed Single");

    Ok(Single {
        name,
        volume,
        balance,
        source_settings,
        portamento,
        portamento_speed,
        mode,
        pic_mode: PicMode::from_u8(pic_mode),
        sources,
        lfo,
        formant,
        checksum,
    })
}

//! K5 Single data structures

mod envelope;
mod source;

pub use envelope::{
    AMP_ENVELOPE_SEGMENTS, AmplifierEnvelope, ENVELOPE_SEGMENTS, Envelope, EnvelopeLayout,
    EnvelopeSegment, FilterEnvelope, HarmonicEnvelope, PitchEnvelope, PitchSegment, SegmentOrder,
};
pub use source::{
    Amplifier, Filter, Harmonic, HarmonicEnvelopeSettings, HarmonicModulation, HarmonicSelection,
    HarmonicSettings, KeyScaling, KeyTracking, ModulationAssign, Source, SourceSettings,
};

use crate::error::{K5Error, Result};
use crate::{FORMANT_BANDS, NAME_LENGTH};

/// How the two sources are voiced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Two sources per voice
    #[default]
    Twin,
    /// One source per voice, doubling polyphony
    Full,
}

/// Which sources are shown on the front-panel picture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PicMode {
    Source1 = 0,
    Source2 = 1,
    #[default]
    Both = 2,
}

impl PicMode {
    /// Two-bit selector; 3 falls back to `Both` like the device does
    pub fn from_u8(val: u8) -> Self {
        match val {
            0 => Self::Source1,
            1 => Self::Source2,
            _ => Self::Both,
        }
    }
}

/// LFO waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LfoShape {
    #[default]
    Triangle = 1,
    InverseTriangle = 2,
    Square = 3,
    InverseSquare = 4,
    Sawtooth = 5,
    InvertedSawtooth = 6,
}

impl LfoShape {
    pub fn from_u8(val: u8) -> Result<Self> {
        match val {
            1 => Ok(Self::Triangle),
            2 => Ok(Self::InverseTriangle),
            3 => Ok(Self::Square),
            4 => Ok(Self::InverseSquare),
            5 => Ok(Self::Sawtooth),
            6 => Ok(Self::InvertedSawtooth),
            _ => Err(K5Error::InvalidEnumValue {
                field: "LFO shape",
                value: val,
            }),
        }
    }
}

/// Vibrato LFO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lfo {
    pub shape: LfoShape,
    /// Speed (0-99)
    pub speed: u8,
    /// Delay (0-31)
    pub delay: u8,
    /// Trend (0-31)
    pub trend: u8,
}

/// DFT digital formant filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Formant {
    pub is_active: bool,
    /// Band levels C-1 to C9 (0-99)
    pub levels: [u8; FORMANT_BANDS],
}

/// One complete K5 patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Single {
    /// Patch name (8 printable ASCII characters)
    pub name: String,
    /// Volume (0-63)
    pub volume: u8,
    /// Balance between the sources (-31..=31)
    pub balance: i8,
    pub source_settings: [SourceSettings; 2],
    pub portamento: bool,
    /// Portamento speed (0-63)
    pub portamento_speed: u8,
    pub mode: SourceMode,
    pub pic_mode: PicMode,
    pub sources: [Source; 2],
    pub lfo: Lfo,
    pub formant: Formant,
    /// Checksum as stored in the dump
    pub checksum: u16,
}

impl Default for Single {
    fn default() -> Self {
        let mut single = Self {
            name: "NEW SND ".to_string(),
            volume: 63,
            balance: 0,
            source_settings: [SourceSettings::default(); 2],
            portamento: false,
            portamento_speed: 0,
            mode: SourceMode::Twin,
            pic_mode: PicMode::Both,
            sources: [Source::default(), Source::default()],
            lfo: Lfo::default(),
            formant: Formant::default(),
            checksum: 0,
        };
        single.update_checksum();
        single
    }
}

impl Single {
    /// Recompute `checksum` from the current parameters with the default base
    pub fn update_checksum(&mut self) {
        self.checksum = crate::writer::body_checksum(self, crate::CHECKSUM_BASE);
    }

    /// Name with trailing padding removed
    pub fn display_name(&self) -> &str {
        self.name.trim_end()
    }

    /// Set the name, padding with spaces to 8 characters
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        if name.len() > NAME_LENGTH || !name.bytes().all(is_name_byte) {
            return Err(K5Error::InvalidName(name.to_string()));
        }
        self.name = format!("{name:<width$}", width = NAME_LENGTH);
        Ok(())
    }
}

/// Printable ASCII, the character set of the K5 display
pub(crate) fn is_name_byte(byte: u8) -> bool {
    (0x20..=0x7E).contains(&byte)
}

//! Source (DFG/DHG/DDF/DDA/KS) structures and enums

use super::envelope::{AmplifierEnvelope, FilterEnvelope, HarmonicEnvelope, PitchEnvelope};
use crate::error::{K5Error, Result};
use crate::{HARMONIC_COUNT, HARMONIC_ENVELOPE_COUNT};

/// DFG key tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyTracking {
    /// Pitch follows the keyboard
    #[default]
    Track,
    /// Pitch fixed to a key (0-127)
    Fixed(u8),
}

/// One DHG harmonic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Harmonic {
    /// Level (0-99)
    pub level: u8,
    /// Modulation on for this harmonic
    pub is_modulation_active: bool,
    /// Harmonic envelope selector (0-3)
    pub envelope: u8,
}

/// Which harmonics the DHG modulation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum HarmonicSelection {
    Live = 0,
    Die = 1,
    #[default]
    All = 2,
}

impl HarmonicSelection {
    /// Two-bit selector; 3 falls back to `All` like the device does
    pub fn from_u8(val: u8) -> Self {
        match val {
            0 => Self::Live,
            1 => Self::Die,
            _ => Self::All,
        }
    }
}

/// Per-envelope DHG settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HarmonicEnvelopeSettings {
    pub is_active: bool,
    /// Effect amount (0-31)
    pub effect: u8,
}

/// Harmonic group modulation toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonicModulation {
    pub is_on: bool,
    /// Harmonic envelope (1-4)
    pub envelope: u8,
}

impl Default for HarmonicModulation {
    fn default() -> Self {
        Self {
            is_on: false,
            envelope: 1,
        }
    }
}

/// DHG settings shared by all harmonics of a source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonicSettings {
    /// Velocity depth (-31..=31)
    pub velocity_depth: i8,
    /// Pressure depth (-31..=31)
    pub pressure_depth: i8,
    /// Key scaling depth (-31..=31)
    pub key_scaling_depth: i8,
    /// LFO depth (0-31)
    pub lfo_depth: u8,
    pub envelope_settings: [HarmonicEnvelopeSettings; HARMONIC_ENVELOPE_COUNT],
    pub is_modulation_active: bool,
    pub selection: HarmonicSelection,
    /// First harmonic of the modulated range (1-63)
    pub range_from: u8,
    /// Last harmonic of the modulated range (1-63)
    pub range_to: u8,
    pub odd: HarmonicModulation,
    pub even: HarmonicModulation,
    pub octave: HarmonicModulation,
    pub fifth: HarmonicModulation,
    pub all: HarmonicModulation,
    /// Angle (0 = -, 1 = 0, 2 = +)
    pub angle: u8,
    /// Harmonic number (1-63)
    pub number: u8,
    pub is_shadow_on: bool,
}

impl Default for HarmonicSettings {
    fn default() -> Self {
        Self {
            velocity_depth: 0,
            pressure_depth: 0,
            key_scaling_depth: 0,
            lfo_depth: 0,
            envelope_settings: [HarmonicEnvelopeSettings::default(); HARMONIC_ENVELOPE_COUNT],
            is_modulation_active: false,
            selection: HarmonicSelection::All,
            range_from: 1,
            range_to: HARMONIC_COUNT as u8,
            odd: HarmonicModulation::default(),
            even: HarmonicModulation::default(),
            octave: HarmonicModulation::default(),
            fifth: HarmonicModulation::default(),
            all: HarmonicModulation::default(),
            angle: 1,
            number: 1,
            is_shadow_on: false,
        }
    }
}

/// DDF filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Filter {
    pub is_active: bool,
    pub is_modulation_active: bool,
    /// Cutoff (0-99)
    pub cutoff: u8,
    /// Cutoff modulation (0-31)
    pub cutoff_modulation: u8,
    /// Slope (0-99)
    pub slope: u8,
    /// Slope modulation (0-31)
    pub slope_modulation: u8,
    /// Flat level (0-99)
    pub flat_level: u8,
    pub velocity_depth: i8,
    pub pressure_depth: i8,
    pub key_scaling_depth: i8,
    pub envelope_depth: i8,
    pub velocity_envelope_depth: i8,
    /// LFO depth (0-31)
    pub lfo_depth: u8,
}

/// DDA amplifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Amplifier {
    pub is_active: bool,
    pub attack_velocity_depth: i8,
    pub pressure_depth: i8,
    pub key_scaling_depth: i8,
    /// LFO depth (0-31)
    pub lfo_depth: u8,
    /// Attack velocity rate (-15..=15)
    pub attack_velocity_rate: i8,
    /// Release velocity rate (-15..=15)
    pub release_velocity_rate: i8,
    /// Key scaling rate (-15..=15)
    pub key_scaling_rate: i8,
    pub envelope: AmplifierEnvelope,
}

/// KS curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyScaling {
    /// Right depth (-31..=31)
    pub right: i8,
    /// Left depth (-31..=31)
    pub left: i8,
    /// Breakpoint key (0-127)
    pub breakpoint: u8,
}

impl Default for KeyScaling {
    fn default() -> Self {
        Self {
            right: 0,
            left: 0,
            breakpoint: 60,
        }
    }
}

/// One of the two sound sources of a Single
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Coarse tune (-48..=48)
    pub coarse: i8,
    /// Fine tune (-31..=31)
    pub fine: i8,
    pub key_tracking: KeyTracking,
    /// Pitch envelope depth (-24..=24)
    pub envelope_depth: i8,
    /// Pressure depth (-31..=31)
    pub pressure_depth: i8,
    /// Bender depth (-24..=24)
    pub bender_depth: i8,
    /// Velocity envelope depth (-31..=31)
    pub velocity_envelope_depth: i8,
    /// Vibrato LFO depth (0-31)
    pub lfo_depth: u8,
    /// Pressure LFO depth (-31..=31)
    pub pressure_lfo_depth: i8,
    pub pitch_envelope: PitchEnvelope,
    pub harmonics: [Harmonic; HARMONIC_COUNT],
    /// High nybble of the harmonic 63 selector byte, kept verbatim
    pub harmonic_overflow: u8,
    pub harmonic_settings: HarmonicSettings,
    pub harmonic_envelopes: [HarmonicEnvelope; HARMONIC_ENVELOPE_COUNT],
    pub filter: Filter,
    pub filter_envelope: FilterEnvelope,
    pub amplifier: Amplifier,
    pub key_scaling: KeyScaling,
}

impl Default for Source {
    fn default() -> Self {
        let mut harmonics = [Harmonic::default(); HARMONIC_COUNT];
        harmonics[0].level = 99;

        Self {
            coarse: 0,
            fine: 0,
            key_tracking: KeyTracking::Track,
            envelope_depth: 0,
            pressure_depth: 0,
            bender_depth: 0,
            velocity_envelope_depth: 0,
            lfo_depth: 0,
            pressure_lfo_depth: 0,
            pitch_envelope: PitchEnvelope::default(),
            harmonics,
            harmonic_overflow: 0,
            harmonic_settings: HarmonicSettings::default(),
            harmonic_envelopes: [HarmonicEnvelope::default(); HARMONIC_ENVELOPE_COUNT],
            filter: Filter {
                cutoff: 99,
                ..Default::default()
            },
            filter_envelope: FilterEnvelope::default(),
            amplifier: Amplifier::default(),
            key_scaling: KeyScaling::default(),
        }
    }
}

/// Pedal or wheel modulation destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ModulationAssign {
    #[default]
    DfgLfo = 0,
    Dhg = 1,
    Cutoff = 2,
    Slope = 3,
    Off = 4,
}

impl ModulationAssign {
    pub fn from_u8(val: u8) -> Result<Self> {
        match val {
            0 => Ok(Self::DfgLfo),
            1 => Ok(Self::Dhg),
            2 => Ok(Self::Cutoff),
            3 => Ok(Self::Slope),
            4 => Ok(Self::Off),
            _ => Err(K5Error::InvalidEnumValue {
                field: "modulation assign",
                value: val,
            }),
        }
    }
}

/// Per-source controller settings kept in the common part of a Single
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceSettings {
    /// Delay (0-31)
    pub delay: u8,
    /// Pedal depth (-31..=31)
    pub pedal_depth: i8,
    /// Wheel depth (-31..=31)
    pub wheel_depth: i8,
    pub pedal_assign: ModulationAssign,
    pub wheel_assign: ModulationAssign,
}

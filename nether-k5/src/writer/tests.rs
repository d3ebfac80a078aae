//! Tests for the writer module

#[cfg(test)]
mod tests {
    use crate::checksum::{checksum, checksum_with_base};
    use crate::config::CodecConfig;
    use crate::error::K5Error;
    use crate::module::{
        AmplifierEnvelope, EnvelopeLayout, EnvelopeSegment, FilterEnvelope, HarmonicSelection,
        KeyTracking, LfoShape, ModulationAssign, PicMode, Single, Source, SourceMode,
    };
    use crate::parser::{parse_envelope, parse_single, parse_single_with, parse_source};
    use crate::test_data::{LOWSTRS1, LOWSTRS1_CHECKSUM_BASE};
    use crate::writer::{write_envelope, write_single, write_single_with, write_source};
    use crate::{SINGLE_BODY_SIZE, SOURCE_SIZE};

    /// A Single with most parameters away from their defaults
    fn busy_single() -> Single {
        let mut single = Single::default();
        single.set_name("BUSY").unwrap();
        single.volume = 40;
        single.balance = -31;
        single.source_settings[0].delay = 31;
        single.source_settings[0].pedal_depth = -31;
        single.source_settings[1].wheel_depth = 17;
        single.source_settings[0].pedal_assign = ModulationAssign::Slope;
        single.source_settings[1].wheel_assign = ModulationAssign::Off;
        single.portamento = true;
        single.portamento_speed = 63;
        single.mode = SourceMode::Full;
        single.pic_mode = PicMode::Source2;
        single.lfo.shape = LfoShape::InvertedSawtooth;
        single.lfo.speed = 99;
        single.lfo.trend = 31;
        single.formant.is_active = true;
        single.formant.levels = [99, 0, 1, 2, 3, 4, 5, 6, 7, 8, 99];

        for (i, source) in single.sources.iter_mut().enumerate() {
            let bias = i as u8;
            source.coarse = -48 + i as i8;
            source.fine = 31;
            source.key_tracking = KeyTracking::Fixed(127 - bias);
            source.envelope_depth = -24;
            source.bender_depth = 24;
            source.lfo_depth = 31;
            source.pressure_lfo_depth = -31;
            source.pitch_envelope.looping = true;
            source.pitch_envelope.segments[0].rate = 99;
            source.pitch_envelope.segments[3].level = -63;

            for (n, harmonic) in source.harmonics.iter_mut().enumerate() {
                harmonic.level = (n as u8 * 3 + bias) % 100;
                harmonic.is_modulation_active = n % 3 == 0;
                harmonic.envelope = (n % 4) as u8;
            }
            source.harmonic_overflow = 0x0A;

            let settings = &mut source.harmonic_settings;
            settings.velocity_depth = -31;
            settings.lfo_depth = 31;
            settings.envelope_settings[2].is_active = true;
            settings.envelope_settings[2].effect = 31;
            settings.is_modulation_active = true;
            settings.selection = HarmonicSelection::Die;
            settings.range_from = 5;
            settings.range_to = 60;
            settings.odd.is_on = true;
            settings.odd.envelope = 4;
            settings.even.envelope = 3;
            settings.fifth.is_on = true;
            settings.fifth.envelope = 2;
            settings.all.is_on = true;
            settings.all.envelope = 4;
            settings.angle = 2;
            settings.number = 63;
            settings.is_shadow_on = i == 0;

            for (e, envelope) in source.harmonic_envelopes.iter_mut().enumerate() {
                for (s, segment) in envelope.segments.iter_mut().enumerate() {
                    *segment = EnvelopeSegment {
                        rate: (e * 10 + s) as u8,
                        level: 63 - s as u8,
                        is_max: s == e,
                        is_mod: false,
                    };
                }
            }

            source.filter.is_active = true;
            source.filter.is_modulation_active = i == 1;
            source.filter.slope = 99;
            source.filter.envelope_depth = -31;
            source.filter.lfo_depth = 31;
            source.filter_envelope.segments[5].is_max = true;
            source.filter_envelope.segments[5].level = 63;

            source.amplifier.is_active = i == 0;
            source.amplifier.lfo_depth = 31;
            source.amplifier.release_velocity_rate = -15;
            source.amplifier.key_scaling_rate = 15;
            source.amplifier.envelope.segments[0].is_mod = true;
            source.amplifier.envelope.segments[6].rate = 63;
            source.amplifier.envelope.segments[6].is_mod = true;
            source.amplifier.envelope.segments[5].is_max = true;

            source.key_scaling.right = -31;
            source.key_scaling.left = 31;
            source.key_scaling.breakpoint = 127;
        }

        single.update_checksum();
        single
    }

    #[test]
    fn test_write_size_and_trailer() {
        let body = write_single(&Single::default()).unwrap();
        assert_eq!(body.len(), SINGLE_BODY_SIZE);
        assert_eq!(body[489], 0);

        let sum = checksum(&body[..490]);
        assert_eq!(&body[490..], &sum.to_le_bytes());
    }

    #[test]
    fn test_round_trip_busy_single() {
        let single = busy_single();
        let body = write_single(&single).unwrap();
        assert_eq!(parse_single(&body).unwrap(), single);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let single = busy_single();
        let first = write_single(&single).unwrap();
        let second = write_single(&parse_single(&first).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sources_interleaved() {
        let single = busy_single();
        let body = write_single(&single).unwrap();
        let s1 = write_source(&single.sources[0]);
        let s2 = write_source(&single.sources[1]);
        assert_eq!(s1.len(), SOURCE_SIZE);
        assert_eq!(s2.len(), SOURCE_SIZE);

        for i in 0..224 {
            assert_eq!(body[20 + 2 * i], s1[i]);
            assert_eq!(body[21 + 2 * i], s2[i]);
        }
        // Key scaling follows the LFO
        assert_eq!(body[472..478], [s1[224], s2[224], s1[225], s2[225], s1[226], s2[226]]);
    }

    #[test]
    fn test_packed_common_bytes() {
        let body = write_single(&busy_single()).unwrap();
        // Pedal Slope (3) high, wheel DfgLfo (0) low; then DfgLfo/Off
        assert_eq!(body[16], 0x30);
        assert_eq!(body[17], 0x04);
        assert_eq!(body[18], 0x80 | 63);
        assert_eq!(body[19], 0x04 | 0x01);
        assert_eq!(body[478], 0x80 | 99);
        assert_eq!(body[488], 99);
    }

    #[test]
    fn test_source_round_trip() {
        let single = busy_single();
        for source in &single.sources {
            assert_eq!(&parse_source(&write_source(source)).unwrap(), source);
        }
    }

    #[test]
    fn test_shadow_shares_first_harmonic_level() {
        let mut source = Source::default();
        source.harmonic_envelopes[0].segments[0].level = 31;
        source.harmonic_envelopes[0].segments[0].is_max = true;
        source.harmonic_settings.is_shadow_on = true;

        let block = write_source(&source);
        assert_eq!(block[132], 0x80 | 0x40 | 31);

        let decoded = parse_source(&block).unwrap();
        assert!(decoded.harmonic_settings.is_shadow_on);
        assert_eq!(decoded.harmonic_envelopes[0].segments[0].level, 31);
        assert!(decoded.harmonic_envelopes[0].segments[0].is_max);
    }

    #[test]
    fn test_harmonic_selectors() {
        let mut source = Source::default();
        source.harmonics[0].envelope = 2;
        source.harmonics[1].envelope = 3;
        source.harmonics[1].is_modulation_active = true;
        source.harmonics[62].envelope = 1;
        source.harmonics[62].is_modulation_active = true;
        source.harmonic_overflow = 0x0F;

        let block = write_source(&source);
        assert_eq!(block[84], 0x80 | 0x30 | 0x02);
        assert_eq!(block[115], 0xF0 | 0x08 | 0x01);

        let decoded = parse_source(&block).unwrap();
        assert_eq!(decoded.harmonics[62].envelope, 1);
        assert!(decoded.harmonics[62].is_modulation_active);
        assert_eq!(decoded.harmonic_overflow, 0x0F);
    }

    #[test]
    fn test_amplifier_envelope_last_level_zero() {
        let mut envelope = AmplifierEnvelope::default();
        for segment in &mut envelope.segments {
            segment.level = 63;
            segment.is_max = true;
        }

        let mut bytes = Vec::new();
        write_envelope(&mut bytes, &envelope, &EnvelopeLayout::AMPLIFIER);
        assert_eq!(bytes.len(), 14);
        assert_eq!(bytes[13], 0);
        assert!(bytes[7..13].iter().all(|&b| b == 0x7F));

        let decoded: AmplifierEnvelope = parse_envelope(&bytes, &EnvelopeLayout::AMPLIFIER).unwrap();
        let mut again = Vec::new();
        write_envelope(&mut again, &decoded, &EnvelopeLayout::AMPLIFIER);
        assert_eq!(again[13], 0);
        assert_eq!(decoded.segments[6].level, 0);
    }

    #[test]
    fn test_envelope_orders() {
        let mut envelope = FilterEnvelope::default();
        envelope.segments[0] = EnvelopeSegment {
            rate: 7,
            level: 20,
            is_max: true,
            is_mod: false,
        };

        let mut rates_first = Vec::new();
        write_envelope(&mut rates_first, &envelope, &EnvelopeLayout::FILTER);
        assert_eq!(rates_first[0], 7);
        assert_eq!(rates_first[6], 0x40 | 20);

        let mut levels_first = Vec::new();
        write_envelope(&mut levels_first, &envelope, &EnvelopeLayout::HARMONIC);
        assert_eq!(levels_first[0], 0x40 | 20);
        assert_eq!(levels_first[6], 7);
    }

    #[test]
    fn test_pitch_loop_flag() {
        let mut source = Source::default();
        source.pitch_envelope.looping = true;
        source.pitch_envelope.segments[0].rate = 31;
        source.pitch_envelope.segments[4].level = -31;

        let block = write_source(&source);
        assert_eq!(block[9], 0x80 | 31);
        assert_eq!(block[19], 0xE1);
        assert_eq!(parse_source(&block).unwrap(), source);
    }

    #[test]
    fn test_write_rejects_out_of_range() {
        let mut single = Single::default();
        single.sources[0].harmonics[10].level = 100;
        assert_eq!(
            write_single(&single),
            Err(K5Error::ValueOutOfRange {
                field: "harmonic level",
                value: 100,
                min: 0,
                max: 99
            })
        );

        let mut single = Single::default();
        single.name = "TOO LONG NAME".to_string();
        assert!(matches!(
            write_single(&single),
            Err(K5Error::InvalidName(_))
        ));
    }

    #[test]
    fn test_custom_checksum_base() {
        let config = CodecConfig::default().with_checksum_base(LOWSTRS1_CHECKSUM_BASE);
        let body = write_single_with(&Single::default(), &config).unwrap();
        let expected = checksum_with_base(&body[..490], LOWSTRS1_CHECKSUM_BASE);
        assert_eq!(&body[490..], &expected.to_le_bytes());
        assert!(parse_single_with(&body, &config).is_ok());
        assert!(parse_single(&body).is_err());
    }

    #[test]
    fn test_reference_dump_idempotent() {
        let config = CodecConfig::default().with_checksum_base(LOWSTRS1_CHECKSUM_BASE);
        let first = parse_single_with(&LOWSTRS1, &config).unwrap();

        let body = write_single_with(&first, &config).unwrap();
        let second = parse_single_with(&body, &config).unwrap();

        // Only the checksum may move: the dump stores a key byte without its
        // fixed flag, which re-encodes as zero
        let mut expected = first.clone();
        expected.checksum = second.checksum;
        assert_eq!(second, expected);

        // The key byte of each source is the only parameter byte that changes
        let changed: Vec<usize> = (0..490).filter(|&i| body[i] != LOWSTRS1[i]).collect();
        assert_eq!(changed, [24, 25]);
        assert_eq!(body[24..26], [0, 0]);

        let third = parse_single_with(&write_single_with(&second, &config).unwrap(), &config);
        assert_eq!(third.unwrap(), second);
    }
}

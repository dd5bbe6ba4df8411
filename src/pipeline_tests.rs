//! End-to-end pipeline tests
//!
//! Bits through formatter to file and back, and noise bursts through
//! placement to correlation.

use super::*;
use crate::config::{BurstConfig, ComplexGain, NoiseConfig, StreamConfig};
use crate::io::{read_levels_file, read_waveform_file};
use crate::sequence::generate_bits;
use rustfft::num_complex::Complex32;

fn reference_bits() -> BitSequence {
    generate_bits(10, 20, &[1; 8], &[0; 8]).unwrap()
}

fn reference_waveform() -> Waveform {
    let pulse = Rectangular::new(100).unwrap();
    WaveformFormatter::new(0.5, 400)
        .format_bits(&reference_bits(), &pulse)
        .unwrap()
}

fn small_noise_config() -> ExperimentConfig {
    ExperimentConfig {
        noise: NoiseConfig {
            seed: 45,
            samples_per_symbol: 10,
            pulse: PulseConfig::Rectangular { width: 10 },
            bursts: vec![
                BurstConfig { length: 200, level: 0.5, leading_gap: 0 },
                BurstConfig { length: 100, level: 0.05, leading_gap: 50 },
            ],
        },
        ..ExperimentConfig::default()
    }
}

// =============================================================================
// PART 1: Formatting Scenario Tests
// =============================================================================

#[cfg(test)]
mod scenario_tests {
    use super::*;

    /// 36 framed bits at T=400 with a 100-tap rectangle
    #[test]
    fn test_reference_scenario_length() {
        let wave = reference_waveform();
        assert_eq!(wave.len(), 36 * 400 + 100 - 1);
        assert_eq!(wave.len(), 14499);
    }

    /// Start marker is all ones, so each of its 8 symbols is a +0.5 plateau
    /// 100 samples wide followed by 300 zeros
    #[test]
    fn test_start_marker_region() {
        let wave = reference_waveform();
        for (i, s) in wave.samples()[..3200].iter().enumerate() {
            let expected = if i % 400 < 100 { 0.5 } else { 0.0 };
            assert_eq!(s.re, expected, "sample {}", i);
            assert_eq!(s.im, 0.0, "sample {}", i);
        }
    }

    /// Stop marker is all zeros, so its plateaus sit at -0.5
    #[test]
    fn test_stop_marker_region() {
        let wave = reference_waveform();
        let start = 28 * 400;
        for (i, s) in wave.samples()[start..36 * 400].iter().enumerate() {
            let expected = if i % 400 < 100 { -0.5 } else { 0.0 };
            assert_eq!(s.re, expected, "sample {}", start + i);
        }
    }

    /// Convolution tail past the last symbol period holds only zeros
    #[test]
    fn test_convolution_tail_is_silent() {
        let wave = reference_waveform();
        let tail = &wave.samples()[36 * 400..];
        assert_eq!(tail.len(), 99);
        assert!(tail.iter().all(|s| s.norm() == 0.0));
    }

    #[test]
    fn test_random_region_follows_bits() {
        let bits = reference_bits();
        let wave = reference_waveform();
        for (k, &bit) in bits.as_slice().iter().enumerate() {
            let expected = if bit == 1 { 0.5 } else { -0.5 };
            assert_eq!(wave.samples()[k * 400].re, expected, "symbol {}", k);
            assert_eq!(wave.samples()[k * 400 + 99].re, expected, "symbol {}", k);
            assert_eq!(wave.samples()[k * 400 + 100].re, 0.0, "symbol {}", k);
        }
    }

    #[test]
    fn test_pipeline_determinism() {
        assert_eq!(reference_waveform(), reference_waveform());
    }

    /// A single unit tap leaves the bare impulse train
    #[test]
    fn test_upsampling_sparsity() {
        let bits = reference_bits();
        let wave = WaveformFormatter::new(0.5, 400)
            .format_bits(&bits, &PulseKernel::from_real(&[1.0]))
            .unwrap();

        assert_eq!(wave.len(), bits.len() * 400);
        let nonzero: Vec<usize> = wave
            .samples()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.norm() != 0.0)
            .map(|(i, _)| i)
            .collect();
        let expected: Vec<usize> = (0..bits.len()).map(|i| i * 400).collect();
        assert_eq!(nonzero, expected);
    }

    #[test]
    fn test_raised_cosine_pipeline() {
        let pulse = RaisedCosine::new(4, 8, 0.35).unwrap();
        let wave = WaveformFormatter::new(0.5, 8)
            .format_bits(&reference_bits(), &pulse)
            .unwrap();

        assert_eq!(wave.len(), 36 * 8 + pulse.filter_len() - 1);
        assert!(wave.samples().iter().all(|s| s.re.is_finite()));

        // Unit center tap with zero crossings at multiples of T: symbol
        // centers carry exactly the scaled level
        let center = 4 * 8;
        let first_symbol = wave.samples()[center].re;
        assert!((first_symbol - 0.5).abs() < 1e-5, "{}", first_symbol);
    }
}

// =============================================================================
// PART 2: Experiment Runner Tests
// =============================================================================

#[cfg(test)]
mod runner_tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_data_experiment_writes_streams() {
        let dir = tempdir().unwrap();
        let config = ExperimentConfig::default();
        let reports = run_data_experiment(&config, dir.path()).unwrap();

        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.bits, 36);
            assert_eq!(report.samples, 14499);

            let size = std::fs::metadata(&report.send_path).unwrap().len();
            assert_eq!(size, 8 * 14499);
            assert!(report.data_path.exists());
        }
        assert_eq!(reports[0].send_path, dir.path().join("send_1.bin"));
        assert_eq!(reports[1].data_path, dir.path().join("data_2.txt"));
    }

    #[test]
    fn test_data_files_read_back() {
        let dir = tempdir().unwrap();
        run_data_experiment(&ExperimentConfig::default(), dir.path()).unwrap();

        let levels = read_levels_file(dir.path().join("data_1.txt")).unwrap();
        assert_eq!(levels, reference_bits().levels());

        let wave = read_waveform_file(dir.path().join("send_1.bin"), None).unwrap();
        assert_eq!(wave, reference_waveform());
    }

    #[test]
    fn test_streams_use_own_seed_and_gain() {
        let dir = tempdir().unwrap();
        let mut config = ExperimentConfig::default();
        config.data.precoding[1] = ComplexGain { re: 0.0, im: 1.0 };
        run_data_experiment(&config, dir.path()).unwrap();

        let second = read_waveform_file(dir.path().join("send_2.bin"), None).unwrap();
        let bits = generate_bits(11, 20, &[1; 8], &[0; 8]).unwrap();
        let expected = WaveformFormatter::new(0.5, 400)
            .with_precoding(Complex32::new(0.0, 1.0))
            .format_bits(&bits, &Rectangular::new(100).unwrap())
            .unwrap();
        assert_eq!(second, expected);
        assert!(second.samples().iter().all(|s| s.re == 0.0));
    }

    #[test]
    fn test_noise_experiment_files() {
        let dir = tempdir().unwrap();
        let reports = run_noise_experiment(&small_noise_config(), dir.path()).unwrap();

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].samples, 200 * 10 + 9);
        assert_eq!(reports[0].transmit_samples, reports[0].samples);
        assert_eq!(reports[1].samples, 100 * 10 + 9);
        assert_eq!(reports[1].transmit_samples, 50 + reports[1].samples);

        let transmit = read_waveform_file(&reports[1].transmit_path, None).unwrap();
        assert!(transmit.samples()[..50].iter().all(|s| s.norm() == 0.0));
        let size = std::fs::metadata(&reports[1].path).unwrap().len();
        assert_eq!(size, 8 * reports[1].samples as u64);
    }

    /// Second burst continues the stream of the first
    #[test]
    fn test_noise_bursts_share_one_stream() {
        let dir = tempdir().unwrap();
        run_noise_experiment(&small_noise_config(), dir.path()).unwrap();

        let mut generator = NoiseBurstGenerator::from_seed(45);
        generator.generate_burst(200, 0.5).unwrap();
        let low = generator.generate_burst(100, 0.05).unwrap();

        let shaped = read_waveform_file(dir.path().join("noise_2.bin"), None).unwrap();
        for (k, &level) in low.iter().enumerate() {
            assert_eq!(shaped.samples()[k * 10].re, level, "symbol {}", k);
        }
    }

    #[test]
    fn test_invalid_stream_index_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut config = ExperimentConfig::default();
        config.data.streams.push(StreamConfig { mimo_index: 3, seed: 12 });

        let result = run_data_experiment(&config, dir.path());
        assert!(matches!(
            result,
            Err(WaveformError::InvalidStreamIndex { index: 3, streams: 2 })
        ));
        assert!(!dir.path().join("send_1.bin").exists());
    }

    #[test]
    fn test_invalid_later_burst_writes_nothing() {
        let dir = tempdir().unwrap();
        let mut config = small_noise_config();
        config.noise.bursts[1].length = -1;
        assert!(matches!(
            run_noise_experiment(&config, dir.path()),
            Err(WaveformError::InvalidLength(-1))
        ));
        assert!(!dir.path().join("noise_1.bin").exists());
        assert!(!dir.path().join("noise_1_transmit.bin").exists());

        config.noise.bursts[1].length = 100;
        config.noise.bursts[1].level = 0.0;
        assert!(matches!(
            run_noise_experiment(&config, dir.path()),
            Err(WaveformError::InvalidAmplitude(_))
        ));
        assert!(!dir.path().join("noise_1.bin").exists());
    }

    #[test]
    fn test_negative_burst_length() {
        let dir = tempdir().unwrap();
        let mut config = small_noise_config();
        config.noise.bursts[0].length = -1;
        assert!(matches!(
            run_noise_experiment(&config, dir.path()),
            Err(WaveformError::InvalidLength(-1))
        ));
        assert!(!dir.path().join("noise_1.bin").exists());
    }
}

// =============================================================================
// PART 3: Correlation Tests
// =============================================================================

#[cfg(test)]
mod correlation_tests {
    use super::*;
    use tempfile::tempdir;

    /// Transmit file correlated against its own reference peaks at the gap
    #[test]
    fn test_placed_burst_found_at_gap() {
        let dir = tempdir().unwrap();
        let reports = run_noise_experiment(&small_noise_config(), dir.path()).unwrap();

        let reference = read_waveform_file(&reports[1].path, None).unwrap();
        let transmit = read_waveform_file(&reports[1].transmit_path, None).unwrap();

        let corr = cross_correlate(transmit.samples(), reference.samples()).unwrap();
        let peak = find_peak(&corr, reference.len()).unwrap();

        assert_eq!(peak.lag, 50);
        // Zero-lag energy of the shaped burst
        let energy: f32 = reference.samples().iter().map(|s| s.norm_sqr()).sum();
        assert!((peak.magnitude - energy).abs() < 1e-3 * energy);
    }

    /// High-level burst in a two-burst timeline is found at the origin
    #[test]
    fn test_high_burst_found_in_combined_timeline() {
        let mut generator = NoiseBurstGenerator::from_seed(45);
        let pulse = Rectangular::new(10).unwrap();
        let high = sequence::shape_burst(&generator.generate_burst(300, 0.5).unwrap(), 10, &pulse)
            .unwrap();
        let low = sequence::shape_burst(&generator.generate_burst(150, 0.05).unwrap(), 10, &pulse)
            .unwrap();

        let timeline = sequence::place_bursts(&[
            sequence::Placement { leading_gap: 0, waveform: &high },
            sequence::Placement { leading_gap: 120, waveform: &low },
        ]);
        assert_eq!(timeline.len(), high.len() + 120 + low.len());

        let corr = cross_correlate(timeline.samples(), high.samples()).unwrap();
        let peak = find_peak(&corr, high.len()).unwrap();
        assert_eq!(peak.lag, 0);
        assert!(mean_power(high.samples()) > 50.0 * mean_power(low.samples()));
    }
}

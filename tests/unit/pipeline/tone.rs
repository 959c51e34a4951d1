//! Tests for the brightness/contrast curve, luma weights and channel stores

#[cfg(test)]
mod tests {
    use retrodither::pipeline::tone::{LUMA_WEIGHTS, ToneParameters, luma, to_channel};

    // Tests zero contrast gives a slope of exactly one
    // Verified by changing 259 to 258 in the numerator
    #[test]
    fn test_neutral_contrast_factor_is_identity() {
        let factor = ToneParameters::NEUTRAL.contrast_factor();
        assert!((factor - 1.0).abs() < f64::EPSILON, "got {factor}");
    }

    // Tests the neutral lookup table maps every value to itself
    #[test]
    fn test_neutral_lookup_table_is_identity() {
        let table = ToneParameters::NEUTRAL.lookup_table();
        for (value, mapped) in table.iter().enumerate() {
            assert_eq!(usize::from(*mapped), value);
        }
    }

    // Tests contrast 100 stretches around the 128 pivot and clamps
    #[test]
    fn test_positive_contrast_stretches() {
        let tone = ToneParameters::new(0.0, 100.0);
        let factor = tone.contrast_factor();
        assert!((factor - 91_945.0 / 40_545.0).abs() < 1e-12);

        let low = tone.adjust(100);
        assert!(low > 64.0 && low < 65.0, "got {low}");
        assert!((tone.adjust(128) - 128.0).abs() < f64::EPSILON);
        assert!((tone.adjust(200) - 255.0).abs() < f64::EPSILON);
        assert!(tone.adjust(10).abs() < f64::EPSILON);
    }

    // Tests negative contrast flattens values toward the pivot
    #[test]
    fn test_negative_contrast_flattens() {
        let tone = ToneParameters::new(0.0, -100.0);
        let table = tone.lookup_table();
        assert!(table[0] > 0);
        assert!(table[255] < 255);
        assert!(table[0] < table[255]);
    }

    // Tests brightness is added before the curve with no intermediate clamp
    // Verified by clamping the shifted value before applying contrast
    #[test]
    fn test_brightness_shift() {
        let tone = ToneParameters::new(50.0, 0.0);
        assert!((tone.adjust(10) - 60.0).abs() < f64::EPSILON);
        assert!((tone.adjust(250) - 255.0).abs() < f64::EPSILON);

        // 250 + 100 = 350 before contrast pulls it back down
        let flattened = ToneParameters::new(100.0, -100.0);
        let expected = flattened.contrast_factor() * (350.0 - 128.0) + 128.0;
        assert!((flattened.adjust(250) - expected.min(255.0)).abs() < 1e-9);
    }

    // Tests the singular contrast value degrades to clamped channels without panicking
    #[test]
    fn test_singular_contrast_does_not_panic() {
        let tone = ToneParameters::new(0.0, 259.0);
        assert!(tone.contrast_factor().is_infinite());

        let table = tone.lookup_table();
        assert_eq!(table[0], 0);
        assert_eq!(table[127], 0);
        // inf * 0 is NaN, which stores as 0
        assert_eq!(table[128], 0);
        assert_eq!(table[129], 255);
        assert_eq!(table[255], 255);
    }

    // Tests luma weights sum to one and apply to the right channels
    #[test]
    fn test_luma_weights() {
        let sum: f64 = LUMA_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);

        assert!((luma(255, 0, 0) - 0.299 * 255.0).abs() < 1e-9);
        assert!((luma(0, 255, 0) - 0.587 * 255.0).abs() < 1e-9);
        assert!((luma(0, 0, 255) - 0.114 * 255.0).abs() < 1e-9);
        assert_eq!(to_channel(luma(255, 255, 255)), 255);
        assert_eq!(to_channel(luma(0, 0, 0)), 0);
    }

    // Tests channel stores clamp, round half to even and map NaN to zero
    // Verified by replacing round_ties_even with round
    #[test]
    fn test_to_channel() {
        assert_eq!(to_channel(-3.0), 0);
        assert_eq!(to_channel(300.0), 255);
        assert_eq!(to_channel(f64::INFINITY), 255);
        assert_eq!(to_channel(f64::NEG_INFINITY), 0);
        assert_eq!(to_channel(f64::NAN), 0);
        assert_eq!(to_channel(127.5), 128);
        assert_eq!(to_channel(128.5), 128);
        assert_eq!(to_channel(64.4), 64);
    }
}

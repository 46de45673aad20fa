//! Tests for scales and tick placement.

use super::*;

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}

mod scale_tests {
    use super::*;

    #[test]
    fn linear_maps_domain_to_range() {
        let scale = Scale::new(ScaleKind::Linear, (0.0, 48.0), (50.0, 350.0), "x").unwrap();
        assert!((scale.map(0.0) - 50.0).abs() < 1e-9);
        assert!((scale.map(24.0) - 200.0).abs() < 1e-9);
        assert!((scale.map(48.0) - 350.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_range_for_y_axis() {
        let scale = Scale::new(ScaleKind::Linear, (25.0, 50.0), (130.0, 10.0), "y").unwrap();
        assert!((scale.map(25.0) - 130.0).abs() < 1e-9);
        assert!((scale.map(50.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn log_scale_maps_decades_evenly() {
        let scale = Scale::new(ScaleKind::Log10, (1.0, 1e5), (0.0, 500.0), "x").unwrap();
        assert!((scale.map(10.0) - 100.0).abs() < 1e-9);
        assert!((scale.map(1000.0) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn contains_tolerates_edge_noise() {
        let scale = Scale::new(ScaleKind::Linear, (0.0, 2.0), (0.0, 100.0), "x").unwrap();
        assert!(scale.contains(2.000_000_000_1));
        assert!(scale.contains(0.0));
        assert!(!scale.contains(2.1));
        assert!(!scale.contains(-0.1));
    }

    #[test]
    fn rejects_empty_domain() {
        let err = Scale::new(ScaleKind::Linear, (5.0, 5.0), (0.0, 1.0), "x").unwrap_err();
        assert!(matches!(err, FigureError::InvalidLimits { ref axis, .. } if axis == "x"));
    }

    #[test]
    fn rejects_reversed_and_non_finite_domains() {
        assert!(Scale::new(ScaleKind::Linear, (2.0, 1.0), (0.0, 1.0), "y").is_err());
        assert!(Scale::new(ScaleKind::Linear, (0.0, f64::NAN), (0.0, 1.0), "y").is_err());
        assert!(Scale::new(ScaleKind::Linear, (f64::NEG_INFINITY, 0.0), (0.0, 1.0), "y").is_err());
    }

    #[test]
    fn log_scale_rejects_non_positive_domain() {
        assert!(Scale::new(ScaleKind::Log10, (0.0, 10.0), (0.0, 1.0), "x").is_err());
        assert!(Scale::new(ScaleKind::Linear, (0.0, 10.0), (0.0, 1.0), "x").is_ok());
    }
}

mod ticks_tests {
    use super::*;

    #[test]
    fn step_ticks_include_stop() {
        let scale = Scale::new(ScaleKind::Linear, (0.0, 48.0), (0.0, 1.0), "x").unwrap();
        let ticks = Ticks::Step {
            start: 0.0,
            stop: 48.0,
            step: 6.0,
        }
        .resolve(&scale, 5);
        assert_close(&ticks, &[0.0, 6.0, 12.0, 18.0, 24.0, 30.0, 36.0, 42.0, 48.0]);
    }

    #[test]
    fn step_ticks_outside_domain_are_dropped() {
        let scale = Scale::new(ScaleKind::Linear, (0.0, 10.0), (0.0, 1.0), "x").unwrap();
        let ticks = Ticks::Step {
            start: -5.0,
            stop: 15.0,
            step: 5.0,
        }
        .resolve(&scale, 5);
        assert_close(&ticks, &[0.0, 5.0, 10.0]);
    }

    #[test]
    fn hidden_ticks_are_empty() {
        let scale = Scale::new(ScaleKind::Linear, (0.0, 10.0), (0.0, 1.0), "y").unwrap();
        assert!(Ticks::Hidden.resolve(&scale, 5).is_empty());
    }

    #[test]
    fn auto_ticks_on_log_scale_are_decades() {
        let scale = Scale::new(ScaleKind::Log10, (1.0, 1e5), (0.0, 1.0), "x").unwrap();
        let ticks = Ticks::Auto.resolve(&scale, 5);
        assert_close(&ticks, &[1.0, 10.0, 100.0, 1e3, 1e4, 1e5]);
    }
}

mod nice_ticks_tests {
    use super::*;

    #[test]
    fn quarter_steps_for_short_time_axis() {
        assert_close(
            &nice_ticks(0.0, 2.0, 9),
            &[0.0, 0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0],
        );
    }

    #[test]
    fn half_steps_for_normalized_amplitude() {
        assert_close(&nice_ticks(-1.1, 1.1, 6), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn large_values() {
        assert_close(
            &nice_ticks(0.0, 5000.0, 6),
            &[0.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0],
        );
    }

    #[test]
    fn tiny_values() {
        let ticks = nice_ticks(0.0, 0.0003, 6);
        assert_close(&ticks, &[0.0, 0.00005, 0.0001, 0.00015, 0.0002, 0.00025, 0.0003]);
    }

    #[test]
    fn count_respects_bins() {
        for bins in 1..10 {
            let ticks = nice_ticks(-3.7, 12.9, bins);
            assert!(ticks.len() <= bins + 1, "{bins}: {ticks:?}");
            assert!(!ticks.is_empty());
        }
    }

    #[test]
    fn degenerate_span_is_empty() {
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
    }

    #[test]
    fn decade_ticks_partial_range() {
        assert_close(&decade_ticks(3.0, 2000.0), &[10.0, 100.0, 1000.0]);
        assert!(decade_ticks(0.0, 10.0).is_empty());
    }
}

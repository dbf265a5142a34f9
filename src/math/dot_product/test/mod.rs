//! Tests for dot product implementations.

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::math::dot_product::*;
    use crate::random::{UniformSource, VectorSource};
    use crate::utils::clock::{Clock, MonotonicClock};
    use std::cell::Cell;
    use std::time::Duration;

    /// Clock that advances by a fixed step on every reading.
    struct StepClock {
        now: Cell<Duration>,
        step: Duration,
    }

    impl StepClock {
        fn new(step: Duration) -> Self {
            Self {
                now: Cell::new(Duration::ZERO),
                step,
            }
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> Duration {
            let t = self.now.get();
            self.now.set(t + self.step);
            t
        }
    }

    #[test]
    fn test_known_value() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        // 1*4 + 2*5 + 3*6 = 4 + 10 + 18 = 32
        assert_eq!(dot_product_vectorized(&a, &b).unwrap(), 32.0);
        assert_eq!(dot_product_scalar_loop(&a, &b).unwrap(), 32.0);
    }

    #[test]
    fn test_empty() {
        let a: [f64; 0] = [];
        let b: [f64; 0] = [];
        assert_eq!(dot_product_vectorized(&a, &b).unwrap(), 0.0);
        assert_eq!(dot_product_scalar_loop(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let pairs: Vec<(Vec<f64>, Vec<f64>)> = vec![
            (vec![1.0], vec![]),
            (vec![], vec![1.0]),
            (vec![1.0, 2.0, 3.0], vec![1.0, 2.0]),
            (vec![0.5; 17], vec![0.5; 16]),
        ];

        for variant in available_variants() {
            for (a, b) in &pairs {
                match (variant.function)(a, b) {
                    Err(Error::ShapeMismatch { left, right }) => {
                        assert_eq!(left, a.len());
                        assert_eq!(right, b.len());
                    }
                    other => panic!(
                        "variant {} should reject {} vs {} elements, got {:?}",
                        variant.name,
                        a.len(),
                        b.len(),
                        other
                    ),
                }
            }
        }
    }

    #[test]
    fn test_small_inputs_bit_identical() {
        let mut source = UniformSource::seeded(11);
        for n in 0..=2 {
            for _ in 0..100 {
                let (a, b) = source.generate(n);
                let v = dot_product_vectorized(&a, &b).unwrap();
                let s = dot_product_scalar_loop(&a, &b).unwrap();
                assert_eq!(v.to_bits(), s.to_bits(), "n = {}", n);
            }
        }
    }

    #[test]
    fn test_equivalence_within_tolerance() {
        let mut source = UniformSource::seeded(3);
        for n in [3, 5, 8, 31, 64, 1000, 65_537, 1_000_000] {
            let (a, b) = source.generate(n);
            let v = dot_product_vectorized(&a, &b).unwrap();
            let s = dot_product_scalar_loop(&a, &b).unwrap();
            assert!(
                (v - s).abs() <= equivalence_tolerance(&a, &b),
                "n = {}: vectorized {} vs scalar {}",
                n,
                v,
                s
            );
        }
    }

    #[test]
    fn test_tolerance_is_linear_in_length() {
        // Exact sum is 1e6; a result 1e-4 away must not count as equivalent
        let a = vec![1.0; 1_000_000];
        let b = vec![1.0; 1_000_000];
        let tolerance = equivalence_tolerance(&a, &b);
        assert!((tolerance - 1e-6).abs() < 1e-12, "tolerance = {}", tolerance);

        let scalar = dot_product_scalar_loop(&a, &b).unwrap();
        assert_eq!(scalar, 1_000_000.0);
        assert!((scalar + 1e-4 - scalar).abs() > tolerance);

        let small = equivalence_tolerance(&a[..1000], &b[..1000]);
        assert!((tolerance / small - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_equivalence_with_mixed_signs() {
        // Cancellation-heavy input, not drawn from [0, 1)
        let a: Vec<f64> = (0..1001).map(|i| if i % 2 == 0 { 1e8 } else { -1e8 }).collect();
        let b: Vec<f64> = (0..1001).map(|i| 1.0 + i as f64 * 1e-3).collect();
        assert!(verify_inputs(&a, &b).is_ok());
    }

    #[test]
    fn test_scalar_loop_deterministic() {
        let (a, b) = UniformSource::seeded(99).generate(10_000);
        let first = dot_product_scalar_loop(&a, &b).unwrap();
        let second = dot_product_scalar_loop(&a, &b).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_scalar_loop_is_left_to_right() {
        // 1e16 + 1 rounds back to 1e16 at every step, so order is observable
        let a = [1e16, 1.0, 1.0, -1e16];
        let b = [1.0; 4];
        assert_eq!(dot_product_scalar_loop(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_batch_uses_lane_tail() {
        let a: Vec<f64> = (1..=LANES as u32 + 3).map(f64::from).collect();
        let b = vec![1.0; a.len()];
        let n = a.len() as f64;
        assert_eq!(batch_dot_product(&a, &b), n * (n + 1.0) / 2.0);
    }

    #[test]
    fn test_scale_scenarios_plausible() {
        let mut source = UniformSource::seeded(2024);
        for n in [100_000, 1_000_000] {
            let (a, b) = source.generate(n);
            for variant in available_variants() {
                let result = (variant.function)(&a, &b).unwrap();
                assert!(
                    (0.0..=n as f64).contains(&result),
                    "{} returned {} for n = {}",
                    variant.name,
                    result,
                    n
                );
            }
        }
    }

    #[test]
    fn test_timed_uses_clock_readings() {
        let clock = StepClock::new(Duration::from_micros(1500));
        let m = timed(&clock, dot_product_scalar_loop, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.result, 32.0);
        assert_eq!(m.elapsed, Duration::from_micros(1500));
        assert!((m.elapsed_ms() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_timed_non_negative_and_finite() {
        let clock = MonotonicClock::new();
        let (a, b) = UniformSource::seeded(5).generate(4096);
        for variant in available_variants() {
            let m = timed(&clock, variant.function, &a, &b).unwrap();
            assert!(m.elapsed_ms() >= 0.0);
            assert!(m.elapsed_ms().is_finite());
        }
    }

    #[test]
    fn test_timed_empty_input() {
        let clock = MonotonicClock::new();
        for variant in available_variants() {
            let m = timed(&clock, variant.function, &[], &[]).unwrap();
            assert_eq!(m.result, 0.0);
        }
    }

    #[test]
    fn test_timed_propagates_shape_mismatch() {
        let clock = MonotonicClock::new();
        let err = timed(&clock, dot_product_vectorized, &[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn test_reference_variant_registered() {
        let variants = available_variants();
        assert_eq!(variants.len(), 2);
        assert!(variants.iter().any(|v| v.name == REFERENCE_VARIANT));
        assert!(variants.iter().any(|v| v.name == "vectorized"));
    }
}

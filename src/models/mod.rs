pub mod bs;
pub mod volatility;

/// Utility functions shared by the pricing and estimation code
pub mod utils {
    use std::f64::consts::SQRT_2;

    /// Standard normal cumulative distribution function.
    ///
    /// Evaluated as `0.5 * erfc(-x / sqrt(2))`. Going through the
    /// complementary error function keeps full relative precision in the
    /// lower tail, where `1 + erf(x)` would cancel.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / SQRT_2)
    }

    /// Evenly spaced grid over `[start, end]` with `n` points (both ends included).
    pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            end
                        } else {
                            start + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }

    /// Ensure a named value is finite and strictly positive.
    pub(crate) fn require_positive(name: &str, value: f64) -> crate::PricingResult<()> {
        if !value.is_finite() || value <= 0.0 {
            return Err(crate::PricingError::invalid_input(format!(
                "{} must be a positive finite number, got: {}",
                name, value
            )));
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn norm_cdf_reference_values() {
            // Reference values from high-precision tables
            let cases = [
                (0.0, 0.5),
                (1.0, 0.841_344_746_068_542_9),
                (-1.0, 0.158_655_253_931_457_05),
                (1.96, 0.975_002_104_851_779_6),
                (-3.0, 0.001_349_898_031_630_094_6),
                (-8.0, 6.220_960_574_271_784e-16),
            ];
            for (x, expected) in cases {
                let got = norm_cdf(x);
                let rel = ((got - expected) / expected).abs();
                assert!(rel < 1e-10, "Phi({}) = {}, expected {}", x, got, expected);
            }
        }

        #[test]
        fn norm_cdf_symmetry() {
            for i in -100..=100 {
                let x = i as f64 * 0.1;
                assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 1e-15);
            }
        }

        #[test]
        fn linspace_endpoints() {
            let grid = linspace(70.0, 130.0, 50);
            assert_eq!(grid.len(), 50);
            assert_eq!(grid[0], 70.0);
            assert_eq!(grid[49], 130.0);
            assert!(grid.windows(2).all(|w| w[1] > w[0]));

            assert!(linspace(1.0, 2.0, 0).is_empty());
            assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        }
    }
}

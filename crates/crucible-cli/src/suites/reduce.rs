//! Reduction kernels: sum, max-magnitude, normalization

use crucible_core::{assert_equal_f64, assert_finite, assert_true, declare_test, TestDriver};

/// Sum of all elements
pub fn sum(xs: &[f64]) -> f64 {
    xs.iter().sum()
}

/// Largest absolute value; zero for an empty slice
pub fn max_abs(xs: &[f64]) -> f64 {
    xs.iter().fold(0.0, |acc, x| acc.max(x.abs()))
}

/// Scale every element so the largest magnitude becomes 1
///
/// An all-zero input comes back unchanged.
pub fn normalize(xs: &[f64]) -> Vec<f64> {
    let scale = max_abs(xs);
    if scale == 0.0 {
        return xs.to_vec();
    }
    xs.iter().map(|x| x / scale).collect()
}

pub fn register(driver: &TestDriver) {
    declare_test!(driver, "ReduceSum", |t| {
        let xs = [0.25, 0.5, 0.25, 1.0];
        let total = sum(&xs);
        assert_finite!(t, total);
        assert_equal_f64!(t, total, 2.0, 1.0e-12);
    });

    // Sweeps every element of the result, so a bad scale factor reports all
    // of its victims in one pass instead of stopping at the first.
    declare_test!(driver, "NormalizeAllElements", |t| {
        t.set_forge_ahead(true);
        let xs = [1.0, -2.0, 4.0];
        let expected = [0.25, -0.5, 1.0];
        let out = normalize(&xs);
        for (got, want) in out.iter().zip(expected.iter()) {
            assert_finite!(t, *got);
            assert_equal_f64!(t, *got, *want, 1.0e-12);
        }
    });

    declare_test!(driver, "ReduceLargeInput", |t| {
        let xs: Vec<f64> = (0..10_000).map(|i| (i % 7) as f64 * 0.5).collect();
        let total = sum(&xs);
        assert_finite!(t, total);
        assert_true!(t, total > 0.0);
        assert_true!(t, t.elapsed_ms() >= 0.0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_empty_is_zero() {
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_max_abs_looks_at_magnitude() {
        assert_eq!(max_abs(&[1.0, -5.0, 3.0]), 5.0);
    }

    #[test]
    fn test_normalize_caps_magnitude_at_one() {
        let out = normalize(&[2.0, -8.0]);
        assert_eq!(out, vec![0.25, -1.0]);
    }

    #[test]
    fn test_normalize_all_zero_passthrough() {
        assert_eq!(normalize(&[0.0, 0.0]), vec![0.0, 0.0]);
    }
}

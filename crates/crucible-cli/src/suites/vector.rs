//! Vector kernels: scaled add and dot product

use crucible_core::{
    assert_equal_f32, assert_equal_f64, assert_equal_int, assert_finite, declare_test, TestDriver,
};

/// `alpha * x[i] + y[i]` over matching slices
pub fn saxpy(alpha: f32, x: &[f32], y: &[f32]) -> Vec<f32> {
    x.iter().zip(y).map(|(xi, yi)| alpha * xi + yi).collect()
}

/// Dot product accumulated in double precision
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}

pub fn register(driver: &TestDriver) {
    declare_test!(driver, "SaxpyBasic", |t| {
        let x = [1.0_f32, 2.0, 3.0, 4.0];
        let y = [0.5_f32, 0.5, 0.5, 0.5];
        let out = saxpy(2.0, &x, &y);
        assert_equal_int!(t, out.len() as i64, 4);
        assert_equal_f32!(t, out[0], 2.5, 1.0e-6);
        assert_equal_f32!(t, out[1], 4.5, 1.0e-6);
        assert_equal_f32!(t, out[3], 8.5, 1.0e-6);
    });

    declare_test!(driver, "SaxpyZeroAlpha", |t| {
        let x = [3.0_f32; 8];
        let y: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let out = saxpy(0.0, &x, &y);
        assert_equal_int!(t, out.len() as i64, y.len() as i64);
        for (got, want) in out.iter().zip(y.iter()) {
            assert_equal_f32!(t, *got, *want, 0.0);
        }
    });

    declare_test!(driver, "DotProduct", |t| {
        let x = [1.0, 2.0, 3.0];
        let y = [4.0, 5.0, 6.0];
        let result = dot(&x, &y);
        assert_finite!(t, result);
        assert_equal_f64!(t, result, 32.0, 1.0e-12);
        assert_equal_f64!(t, dot(&x, &[0.0; 3]), 0.0, 0.0);
    });
}

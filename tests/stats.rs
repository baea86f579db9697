use cardio_sentinel::math::stats::{linear_slope, mean};

#[test]
fn mean_basic() {
    assert_eq!(mean(&[]), 0.0);
    assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
}

#[test]
fn slope_of_line() {
    let s = linear_slope(&[70.0, 75.0, 80.0, 85.0, 90.0, 95.0]).unwrap();
    assert!((s - 5.0).abs() < 1e-12);
}

#[test]
fn slope_flat_is_zero() {
    let s = linear_slope(&[70.0, 70.0, 70.0, 70.0]).unwrap();
    assert_eq!(s, 0.0);
}

#[test]
fn slope_noisy_matches_least_squares() {
    // x = 0..4, y = [1, 3, 2, 5]; slope = 1.1
    let s = linear_slope(&[1.0, 3.0, 2.0, 5.0]).unwrap();
    assert!((s - 1.1).abs() < 1e-12);
}

#[test]
fn slope_needs_two_points() {
    assert!(linear_slope(&[]).is_none());
    assert!(linear_slope(&[42.0]).is_none());
    assert!(linear_slope(&[1.0, 3.0]).is_some());
}

#[test]
fn slope_nan_input_is_none() {
    assert!(linear_slope(&[1.0, f64::NAN, 3.0]).is_none());
}

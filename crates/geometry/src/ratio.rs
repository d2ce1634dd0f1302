//! Aspect-ratio helpers.
//!
//! Ratios computed from float rects carry representation noise, so two
//! rects are compared in two stages: both ratios are first rounded to
//! [`RATIO_DECIMAL_PLACES`], then compared with an inclusive absolute
//! slack of [`RATIO_TOLERANCE`]. The comparison runs on the rounded
//! integers so a difference of exactly the tolerance is accepted.

use crate::rect::Rect;

/// Decimal places kept when comparing aspect ratios.
pub const RATIO_DECIMAL_PLACES: u32 = 3;

/// Maximum absolute difference between two "equal" aspect ratios.
pub const RATIO_TOLERANCE: f64 = 0.01;

/// Aspect ratio of a rect (`width / height`).
pub fn ratio(rect: &Rect) -> f64 {
    rect.ratio()
}

/// Round `value` to `decimal_places` digits.
///
/// Scales by `10^decimal_places`, rounds to the nearest integer with ties
/// going away from zero, and scales back. `truncate(0.005, 2)` is `0.01`.
pub fn truncate(value: f64, decimal_places: u32) -> f64 {
    let shift = 10f64.powi(decimal_places as i32);
    (value * shift).round() / shift
}

/// Check whether two rects have the same aspect ratio, within tolerance.
pub fn same_aspect_ratio(r1: &Rect, r2: &Rect) -> bool {
    ratios_match(ratio(r1), ratio(r2))
}

/// Compare two raw ratios using the same rules as [`same_aspect_ratio`].
pub fn ratios_match(a: f64, b: f64) -> bool {
    let shift = 10f64.powi(RATIO_DECIMAL_PLACES as i32);
    let a = (a * shift).round() as i64;
    let b = (b * shift).round() as i64;
    let slack = (RATIO_TOLERANCE * shift).round() as i64;
    (a - b).abs() <= slack
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_truncate_rounds_down() {
        assert_eq!(truncate(1.23456, 2), 1.23);
    }

    #[test]
    fn test_truncate_rounds_half_away_from_zero() {
        assert_eq!(truncate(0.005, 2), 0.01);
        assert_eq!(truncate(-0.005, 2), -0.01);
        assert_eq!(truncate(0.125, 2), 0.13);
    }

    #[test]
    fn test_truncate_zero_places() {
        assert_eq!(truncate(2.5, 0), 3.0);
        assert_eq!(truncate(2.49, 0), 2.0);
    }

    #[test]
    fn test_ratio() {
        assert!((ratio(&Rect::from_size(1920.0, 1080.0)) - 16.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_same_ratio_within_tolerance() {
        let a = Rect::from_size(1500.0, 1000.0); // 1.500
        let b = Rect::from_size(1509.0, 1000.0); // 1.509
        assert!(same_aspect_ratio(&a, &b));
    }

    #[test]
    fn test_different_ratio_outside_tolerance() {
        let a = Rect::from_size(150.0, 100.0); // 1.50
        let b = Rect::from_size(152.0, 100.0); // 1.52
        assert!(!same_aspect_ratio(&a, &b));
    }

    #[test]
    fn test_ratio_exactly_at_tolerance_matches() {
        let a = Rect::from_size(1500.0, 1000.0); // 1.500
        let b = Rect::from_size(1510.0, 1000.0); // 1.510
        assert!(same_aspect_ratio(&a, &b));

        let a = Rect::from_size(1000.0, 1000.0); // 1.000
        let b = Rect::from_size(1010.0, 1000.0); // 1.010
        assert!(same_aspect_ratio(&a, &b));
        assert!(ratios_match(1.0, 1.01));
    }

    #[test]
    fn test_ratio_just_past_tolerance_does_not_match() {
        assert!(!ratios_match(1.0, 1.011));
        assert!(!same_aspect_ratio(
            &Rect::from_size(1000.0, 1000.0),
            &Rect::from_size(1011.0, 1000.0)
        ));
    }

    #[test]
    fn test_same_ratio_ignores_position_and_scale() {
        let a = Rect::new(0.0, 0.0, 160.0, 90.0);
        let b = Rect::new(37.0, 12.0, 37.0 + 1280.0, 12.0 + 720.0);
        assert!(same_aspect_ratio(&a, &b));
    }

    #[test]
    fn test_square_vs_double_wide() {
        let a = Rect::from_size(100.0, 100.0);
        let b = Rect::from_size(200.0, 100.0);
        assert!(!same_aspect_ratio(&a, &b));
    }

    proptest! {
        #[test]
        fn prop_same_ratio_is_symmetric(
            w1 in 1.0f64..4000.0, h1 in 1.0f64..4000.0,
            w2 in 1.0f64..4000.0, h2 in 1.0f64..4000.0,
        ) {
            let a = Rect::from_size(w1, h1);
            let b = Rect::from_size(w2, h2);
            prop_assert_eq!(same_aspect_ratio(&a, &b), same_aspect_ratio(&b, &a));
        }

        #[test]
        fn prop_scaled_rect_keeps_ratio(
            w in 1.0f64..4000.0, h in 1.0f64..4000.0, k in 0.01f64..10.0,
        ) {
            let a = Rect::from_size(w, h);
            let b = Rect::from_size(w * k, h * k);
            prop_assert!(same_aspect_ratio(&a, &b));
        }

        #[test]
        fn prop_truncate_stays_close(v in -1000.0f64..1000.0, places in 0u32..6) {
            let t = truncate(v, places);
            prop_assert!((t - v).abs() <= 0.5 / 10f64.powi(places as i32) + 1e-9);
        }
    }
}

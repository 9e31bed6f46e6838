//! Capacity usage of a cold room.

/// Share of `total` taken by `used`, in percent.
///
/// A non-positive or non-finite total yields `0.0` rather than NaN or infinity.
/// Over-full rooms are not clamped.
pub fn capacity_ratio(used: f64, total: f64) -> f64 {
    if !total.is_finite() || total <= 0.0 || !used.is_finite() {
        return 0.0;
    }
    used / total * 100.0
}

/// Capacity usage formatted with one decimal, e.g. `"64.0"`.
///
/// Halves round away from zero, so 0.25 shows as `"0.3"`.
///
/// ```
/// use coldroom_rust::transformations::capacity_percentage;
///
/// assert_eq!(capacity_percentage(3200.0, 5000.0), "64.0");
/// assert_eq!(capacity_percentage(10.0, 0.0), "0.0");
/// ```
pub fn capacity_percentage(used: f64, total: f64) -> String {
    let ratio = capacity_ratio(used, total);
    format!("{:.1}", (ratio * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seeded_room_values() {
        assert_eq!(capacity_percentage(3200.0, 5000.0), "64.0");
        assert_eq!(capacity_percentage(4000.0, 8000.0), "50.0");
    }

    #[test]
    fn test_empty_and_full() {
        assert_eq!(capacity_percentage(0.0, 5000.0), "0.0");
        assert_eq!(capacity_percentage(5000.0, 5000.0), "100.0");
    }

    #[test]
    fn test_halves_round_up() {
        assert_eq!(capacity_percentage(1.0, 400.0), "0.3");
        assert_eq!(capacity_percentage(5.0, 400.0), "1.3");
        assert_eq!(capacity_percentage(3.0, 400.0), "0.8");
        assert_eq!(capacity_percentage(6500.0, 8000.0), "81.3");
    }

    #[test]
    fn test_zero_total_is_guarded() {
        assert_eq!(capacity_ratio(0.0, 0.0), 0.0);
        assert_eq!(capacity_percentage(100.0, 0.0), "0.0");
        assert_eq!(capacity_percentage(100.0, -5.0), "0.0");
        assert_eq!(capacity_percentage(100.0, f64::NAN), "0.0");
    }

    #[test]
    fn test_over_capacity_is_not_clamped() {
        assert_eq!(capacity_percentage(6000.0, 5000.0), "120.0");
    }

    proptest! {
        #[test]
        fn prop_within_capacity_stays_in_range(total in 1.0f64..1.0e7, frac in 0.0f64..=1.0) {
            let used = total * frac;
            let pct = capacity_ratio(used, total);
            prop_assert!(pct >= 0.0);
            prop_assert!(pct <= 100.0 + 1e-9);
        }

        #[test]
        fn prop_formatted_has_one_decimal(used in 0.0f64..1.0e6, total in 1.0f64..1.0e6) {
            let s = capacity_percentage(used, total);
            let decimals = s.split('.').nth(1).map(str::len);
            prop_assert_eq!(decimals, Some(1));
        }
    }
}

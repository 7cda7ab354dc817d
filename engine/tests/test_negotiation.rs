//! Wage negotiation tests
//!
//! Verifies the Nash bargaining split and its bounds: the settled wage
//! never falls below the worker's reservation wage and never exceeds the
//! employer's cost of continued search.

use labor_market_core_rs::negotiate_wage;
use proptest::prelude::*;

#[test]
fn test_standard_split() {
    // fallback = 1500 * (1 + 0.1 * 2) = 1800
    // surplus  = 800, worker takes 40%: 1000 + 320 = 1320
    let wage = negotiate_wage(1000.0, 1500.0, 2, 0.4);
    assert!((wage - 1320.0).abs() < 1e-9);
}

#[test]
fn test_fresh_posting_split() {
    // fallback = offered, surplus = 500, worker takes 40%: 1200
    let wage = negotiate_wage(1000.0, 1500.0, 0, 0.4);
    assert!((wage - 1200.0).abs() < 1e-9);
}

#[test]
fn test_worker_with_no_power_gets_reservation() {
    let wage = negotiate_wage(1000.0, 1500.0, 3, 0.0);
    assert!((wage - 1000.0).abs() < 1e-9);
}

#[test]
fn test_worker_with_full_power_gets_fallback() {
    let wage = negotiate_wage(1000.0, 1500.0, 3, 1.0);
    assert!((wage - 1950.0).abs() < 1e-9);
}

#[test]
fn test_reservation_above_fallback_floors_at_reservation() {
    let wage = negotiate_wage(2500.0, 1500.0, 2, 0.4);
    assert!((wage - 2500.0).abs() < 1e-9);
}

#[test]
fn test_longer_posting_favors_the_worker() {
    let mut previous = 0.0;
    for duration in 0..10 {
        let wage = negotiate_wage(1000.0, 1500.0, duration, 0.4);
        assert!(wage > previous);
        previous = wage;
    }
}

proptest! {
    #[test]
    fn prop_wage_bounded_by_fallbacks(
        reservation in 0.0..5000.0f64,
        offered in 1.0..5000.0f64,
        duration in 0usize..20,
        power in 0.0..1.0f64,
    ) {
        let fallback = offered + offered * 0.1 * duration as f64;
        let wage = negotiate_wage(reservation, offered, duration, power);

        prop_assert!(wage >= reservation - 1e-9);
        prop_assert!(wage <= fallback.max(reservation) + 1e-9);
        prop_assert!(wage.is_finite());
    }

    #[test]
    fn prop_more_power_never_lowers_wage(
        reservation in 0.0..3000.0f64,
        offered in 1.0..3000.0f64,
        duration in 0usize..10,
        low in 0.0..0.5f64,
        delta in 0.0..0.5f64,
    ) {
        let weak = negotiate_wage(reservation, offered, duration, low);
        let strong = negotiate_wage(reservation, offered, duration, low + delta);
        prop_assert!(strong >= weak - 1e-9);
    }
}

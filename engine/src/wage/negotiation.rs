//! Nash wage negotiation
//!
//! Once a match is made, the final wage is settled by splitting the match
//! surplus between worker and employer according to a fixed bargaining
//! power. The worker's fallback is their reservation wage; the employer's
//! fallback is the offered wage inflated by the cost of keeping the
//! vacancy open longer.

/// Per-cycle cost of continued search, as a fraction of the offered wage.
const SEARCH_COST_RATE: f64 = 0.1;

/// Settle the wage for a match via Nash bargaining
///
/// The employer's fallback is `wage_offered × (1 + 0.1 × posting_duration)`:
/// the longer the vacancy has already been open, the more the employer
/// would pay to avoid reposting. If that fallback exceeds the worker's
/// reservation wage there is a positive surplus and the worker captures
/// `bargaining_power` of it on top of their reservation wage; otherwise
/// the posted offer stands.
///
/// The result is always clamped into [reservation, employer fallback].
/// Non-finite inputs settle at the posted offer.
///
/// # Example
/// ```
/// use labor_market_core_rs::wage::negotiate_wage;
///
/// // fallback = 1500 + 1500 * 0.1 * 2 = 1800
/// // surplus  = 1800 - 1000 = 800
/// // wage     = 1000 + 0.4 * 800 = 1320
/// let wage = negotiate_wage(1000.0, 1500.0, 2, 0.4);
/// assert!((wage - 1320.0).abs() < 1e-9);
/// ```
pub fn negotiate_wage(
    reservation_wage: f64,
    wage_offered: f64,
    posting_duration: usize,
    bargaining_power: f64,
) -> f64 {
    let employer_fallback =
        wage_offered + wage_offered * SEARCH_COST_RATE * posting_duration as f64;

    let negotiated = if employer_fallback > reservation_wage {
        let surplus = employer_fallback - reservation_wage;
        reservation_wage + bargaining_power * surplus
    } else {
        wage_offered
    };

    if !negotiated.is_finite() {
        return wage_offered;
    }

    negotiated.min(employer_fallback).max(reservation_wage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surplus_split_by_bargaining_power() {
        let wage = negotiate_wage(1000.0, 1500.0, 2, 0.4);
        assert!((wage - 1320.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_power_settles_at_reservation() {
        let wage = negotiate_wage(1000.0, 1500.0, 0, 0.0);
        assert!((wage - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_power_settles_at_employer_fallback() {
        let wage = negotiate_wage(1000.0, 1500.0, 0, 1.0);
        assert!((wage - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_surplus_keeps_posted_offer() {
        // fallback = 1500, reservation above it: no surplus to split
        let wage = negotiate_wage(2000.0, 1500.0, 0, 0.4);
        // clamped up to the reservation floor
        assert!((wage - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_duration_raises_employer_fallback() {
        let fresh = negotiate_wage(1000.0, 1500.0, 0, 0.4);
        let stale = negotiate_wage(1000.0, 1500.0, 5, 0.4);
        assert!(stale > fresh);
    }

    #[test]
    fn test_result_bounded_by_fallbacks() {
        let reservation = 900.0;
        let offered = 1200.0;
        let duration = 4;
        let fallback = offered + offered * 0.1 * duration as f64;

        let wage = negotiate_wage(reservation, offered, duration, 0.7);
        assert!(wage >= reservation);
        assert!(wage <= fallback);
    }
}

//! Wage curve: baseline wage formation
//!
//! The wage curve is the empirical wages-fall-with-unemployment relation
//! used as the market's baseline wage-setting rule. `market_wage` is a
//! pure function of the curve parameters, the current unemployment rate,
//! and a deterministic sector premium.

use crate::models::MacroPhase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hard floor: the curve never prices a sector below half the base wage.
const WAGE_FLOOR_FRACTION: f64 = 0.5;

/// Bounds and steps for the per-cycle parameter drift.
const PRODUCTIVITY_MIN: f64 = 0.8;
const PRODUCTIVITY_MAX: f64 = 1.2;
const PRODUCTIVITY_STEP: f64 = 0.01;
const EFFICIENCY_MIN: f64 = 0.4;
const EFFICIENCY_MAX: f64 = 0.8;
const EFFICIENCY_UP_STEP: f64 = 0.02;
const EFFICIENCY_DOWN_STEP: f64 = 0.01;
const HIGH_UNEMPLOYMENT: f64 = 0.15;
const LOW_UNEMPLOYMENT: f64 = 0.05;

/// Slowly-adapting wage formation parameters
///
/// Owned by the cycle orchestrator and mutated only through
/// [`WageCurveParams::drift`], which runs as the last step of every cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageCurveParams {
    /// Economy-wide baseline wage
    pub base_wage: f64,

    /// Wage response to unemployment (negative: wages fall as
    /// unemployment rises)
    pub unemployment_elasticity: f64,

    /// Productivity multiplier, drifts within [0.8, 1.2] by macro phase
    pub productivity_factor: f64,

    /// Inflation adjustment applied multiplicatively as (1 + adjustment)
    pub inflation_adjustment: f64,

    /// Share of otherwise-viable applications that convert to hires;
    /// drifts with unemployment
    pub matching_efficiency: f64,

    /// Probability discount representing real-world matching cost
    pub search_frictions: f64,
}

impl Default for WageCurveParams {
    fn default() -> Self {
        Self {
            base_wage: 2500.0,
            unemployment_elasticity: -0.1,
            productivity_factor: 1.0,
            inflation_adjustment: 0.02,
            matching_efficiency: 0.6,
            search_frictions: 0.15,
        }
    }
}

impl WageCurveParams {
    /// Drift parameters at the end of a cycle
    ///
    /// Productivity nudges toward 1.2 in expansions and toward 0.8 in
    /// recessions and depressions. Matching efficiency improves toward
    /// 0.8 when unemployment is high (a deep applicant pool) and decays
    /// toward 0.4 when unemployment is very low (hiring bottlenecks).
    pub(crate) fn drift(&mut self, phase: MacroPhase, unemployment_rate: f64) {
        match phase {
            MacroPhase::Expansion => {
                self.productivity_factor =
                    (self.productivity_factor + PRODUCTIVITY_STEP).min(PRODUCTIVITY_MAX);
            }
            MacroPhase::Recession | MacroPhase::Depression => {
                self.productivity_factor =
                    (self.productivity_factor - PRODUCTIVITY_STEP).max(PRODUCTIVITY_MIN);
            }
            MacroPhase::Other => {}
        }

        if unemployment_rate > HIGH_UNEMPLOYMENT {
            self.matching_efficiency =
                (self.matching_efficiency + EFFICIENCY_UP_STEP).min(EFFICIENCY_MAX);
        } else if unemployment_rate < LOW_UNEMPLOYMENT {
            self.matching_efficiency =
                (self.matching_efficiency - EFFICIENCY_DOWN_STEP).max(EFFICIENCY_MIN);
        }
    }
}

/// Deterministic sector wage premiums
///
/// Skill-intensive sectors price above the curve, low-skill sectors below;
/// unknown sectors get 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPremiums {
    premiums: BTreeMap<String, f64>,
}

impl Default for SectorPremiums {
    fn default() -> Self {
        let mut premiums = BTreeMap::new();
        premiums.insert("technology".to_string(), 1.2);
        premiums.insert("services".to_string(), 0.9);
        Self { premiums }
    }
}

impl SectorPremiums {
    /// Build from an explicit sector → premium mapping
    pub fn new(premiums: BTreeMap<String, f64>) -> Self {
        Self { premiums }
    }

    /// Premium multiplier for a sector (1.0 if unlisted)
    pub fn premium(&self, sector: &str) -> f64 {
        self.premiums.get(sector).copied().unwrap_or(1.0)
    }

    /// Set or override one sector's premium
    pub fn set(&mut self, sector: String, premium: f64) {
        self.premiums.insert(sector, premium);
    }
}

/// Compute a sector's baseline market wage
///
/// ```text
/// wage = base × (1 + u × elasticity) × productivity × (1 + inflation) × premium
/// ```
/// floored at 50% of the base wage. Pure function, no failure mode.
///
/// # Example
/// ```
/// use labor_market_core_rs::wage::{market_wage, WageCurveParams};
///
/// let mut params = WageCurveParams::default();
/// params.base_wage = 2000.0;
/// params.unemployment_elasticity = 0.0;
/// params.inflation_adjustment = 0.0;
///
/// let wage = market_wage(&params, 0.1, 1.0);
/// assert!((wage - 2000.0).abs() < 1e-9);
/// ```
pub fn market_wage(params: &WageCurveParams, unemployment_rate: f64, sector_premium: f64) -> f64 {
    let wage = params.base_wage
        * (1.0 + unemployment_rate * params.unemployment_elasticity)
        * params.productivity_factor
        * (1.0 + params.inflation_adjustment)
        * sector_premium;

    wage.max(params.base_wage * WAGE_FLOOR_FRACTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wage_falls_with_unemployment() {
        let params = WageCurveParams::default();

        let tight = market_wage(&params, 0.03, 1.0);
        let slack = market_wage(&params, 0.20, 1.0);

        assert!(slack < tight);
    }

    #[test]
    fn test_wage_floor_at_half_base() {
        let mut params = WageCurveParams::default();
        params.unemployment_elasticity = -2.0;

        let wage = market_wage(&params, 0.9, 1.0);
        assert_eq!(wage, params.base_wage * 0.5);
    }

    #[test]
    fn test_sector_premiums() {
        let premiums = SectorPremiums::default();

        assert_eq!(premiums.premium("technology"), 1.2);
        assert_eq!(premiums.premium("services"), 0.9);
        assert_eq!(premiums.premium("agriculture"), 1.0);
    }

    #[test]
    fn test_premium_scales_wage() {
        let params = WageCurveParams::default();

        let base = market_wage(&params, 0.1, 1.0);
        let tech = market_wage(&params, 0.1, 1.2);

        assert!((tech - base * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_drift_expansion_raises_productivity_to_bound() {
        let mut params = WageCurveParams::default();
        params.productivity_factor = 1.19;

        params.drift(MacroPhase::Expansion, 0.1);
        assert!((params.productivity_factor - 1.2).abs() < 1e-9);

        params.drift(MacroPhase::Expansion, 0.1);
        assert!(params.productivity_factor <= 1.2);
    }

    #[test]
    fn test_drift_recession_lowers_productivity_to_bound() {
        let mut params = WageCurveParams::default();
        params.productivity_factor = 0.81;

        params.drift(MacroPhase::Recession, 0.1);
        assert!((params.productivity_factor - 0.8).abs() < 1e-9);

        params.drift(MacroPhase::Depression, 0.1);
        assert!(params.productivity_factor >= 0.8);
    }

    #[test]
    fn test_drift_efficiency_with_unemployment() {
        let mut params = WageCurveParams::default();
        params.matching_efficiency = 0.6;

        params.drift(MacroPhase::Other, 0.2);
        assert!((params.matching_efficiency - 0.62).abs() < 1e-9);

        params.drift(MacroPhase::Other, 0.02);
        assert!((params.matching_efficiency - 0.61).abs() < 1e-9);

        // mid-band unemployment leaves efficiency unchanged
        params.drift(MacroPhase::Other, 0.10);
        assert!((params.matching_efficiency - 0.61).abs() < 1e-9);
    }
}

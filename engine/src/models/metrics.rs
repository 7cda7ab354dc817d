//! Headline labor market metrics
//!
//! Metrics are recomputed in full from current state at the top of every
//! cycle, never drifted incrementally, so a metrics snapshot is always
//! consistent with the registry and the board it was taken from.

use crate::models::state::LaborMarketState;
use crate::wage::WageCurveParams;
use serde::{Deserialize, Serialize};

/// Headline statistics for one cycle
///
/// Degenerate states resolve to defined values instead of dividing by
/// zero: an empty registry reports 0% unemployment, and a market with no
/// employed workers reports the curve's base wage as the average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketMetrics {
    /// Unemployed workers / total workers, in [0, 1]
    pub unemployment_rate: f64,

    /// Mean settled wage among employed workers
    pub average_wage: f64,

    /// Vacancies currently on the board
    pub total_vacancies: usize,

    /// Relative change of the average wage vs. the previous cycle
    pub wage_growth: f64,

    /// matching_efficiency × (1 − search_frictions)
    pub match_rate: f64,
}

impl MarketMetrics {
    /// Recompute all metrics from current state
    ///
    /// `previous_average_wage` is last cycle's average (0.0 before the
    /// first cycle); wage growth reports 0.0 when there is no baseline.
    pub fn compute(
        state: &LaborMarketState,
        curve: &WageCurveParams,
        previous_average_wage: f64,
    ) -> Self {
        let total_workers = state.workers().len();
        let mut unemployed = 0usize;
        let mut employed = 0usize;
        let mut wage_sum = 0.0;

        for worker in state.workers().iter_in_order() {
            match worker.employment() {
                Some(employment) => {
                    employed += 1;
                    wage_sum += employment.wage;
                }
                None => unemployed += 1,
            }
        }

        let unemployment_rate = if total_workers == 0 {
            0.0
        } else {
            unemployed as f64 / total_workers as f64
        };

        let average_wage = if employed == 0 {
            curve.base_wage
        } else {
            wage_sum / employed as f64
        };

        let wage_growth = if previous_average_wage > 0.0 {
            (average_wage - previous_average_wage) / previous_average_wage
        } else {
            0.0
        };

        Self {
            unemployment_rate,
            average_wage,
            total_vacancies: state.board().len(),
            wage_growth,
            match_rate: curve.matching_efficiency * (1.0 - curve.search_frictions),
        }
    }
}

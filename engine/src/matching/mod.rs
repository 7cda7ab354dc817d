//! Matching engine
//!
//! One matching pass per cycle. For each unemployed worker, in
//! registration order:
//! 1. Advance unemployment duration and recompute search intensity.
//! 2. Draw search participation (Bernoulli at the intensity).
//! 3. Score every open vacancy; keep suitable ones (score above the
//!    threshold and offered wage at or above the reservation wage).
//! 4. Apply to the top-scored vacancies, best first, up to the
//!    application cap; each application converts to a hire with
//!    probability score × (1 − frictions) × efficiency.
//! 5. On a successful draw, negotiate the wage and execute the hire
//!    against the employer directory. A declined or unresolvable hire is
//!    logged and leaves the vacancy open for the next applicant.
//!
//! Awards are first-come-first-served within the cycle: once a vacancy is
//! matched it stops accepting applications, so one vacancy never hires two
//! workers.

use crate::models::{EmployerDirectory, EventLog, LaborMarketState, MarketEvent};
use crate::rng::RngManager;
use crate::wage::{negotiate_wage, WageCurveParams};
use serde::{Deserialize, Serialize};

/// Tunable matching-pass parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingParams {
    /// Minimum match score for a worker to bother applying
    pub suitability_threshold: f64,

    /// Applications a worker may file per cycle
    pub max_applications: usize,

    /// Match-score penalty per cycle a vacancy has been open
    pub friction_penalty_per_cycle: f64,

    /// Search intensity never decays below this fraction
    pub fatigue_floor: f64,

    /// Per-cycle intensity decay from personal unemployment
    pub fatigue_decay: f64,

    /// Post-hire reservation wage as a fraction of the settled wage
    pub reservation_discount: f64,

    /// Worker's share of the match surplus in wage negotiation
    pub bargaining_power: f64,
}

impl Default for MatchingParams {
    fn default() -> Self {
        Self {
            suitability_threshold: 0.3,
            max_applications: 3,
            friction_penalty_per_cycle: 0.05,
            fatigue_floor: 0.3,
            fatigue_decay: 0.01,
            reservation_discount: 0.9,
            bargaining_power: 0.4,
        }
    }
}

/// Outcome of executing a hire against the employer directory
#[derive(Debug, Clone, PartialEq)]
pub enum HireOutcome {
    /// Hire executed at the negotiated wage
    Hired { wage: f64 },
    /// Employer could not be resolved in the directory
    EmployerMissing,
    /// Employer was resolved but declined the hire
    EmployerRejected,
}

/// Execute a negotiated hire against the employer directory
pub fn attempt_hire(
    employers: &mut dyn EmployerDirectory,
    employer_id: &str,
    worker_id: &str,
    wage: f64,
) -> HireOutcome {
    if employers.capital_of(employer_id).is_none() {
        return HireOutcome::EmployerMissing;
    }
    if employers.hire(employer_id, worker_id, wage) {
        HireOutcome::Hired { wage }
    } else {
        HireOutcome::EmployerRejected
    }
}

/// Counters produced by one matching pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MatchingStats {
    pub matches_made: usize,
    pub applications_processed: usize,
    pub failed_hires: usize,
}

/// Run the matching pass for one cycle
///
/// Mutates workers (durations, intensities, hires) and the board
/// (applications, matched sweeps); matched vacancies are off the board
/// when this returns.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_matching_pass(
    state: &mut LaborMarketState,
    employers: &mut dyn EmployerDirectory,
    curve: &WageCurveParams,
    matching: &MatchingParams,
    unemployment_rate: f64,
    rng: &mut RngManager,
    cycle: usize,
    events: &mut EventLog,
) -> MatchingStats {
    let mut stats = MatchingStats::default();
    let unemployed = state.unemployed_worker_ids();

    // STEP 1: duration and intensity updates for every unemployed worker,
    // before any participation draw.
    for worker_id in &unemployed {
        if let Some(worker) = state.workers_mut().get_mut(worker_id) {
            worker.advance_unemployment();
            worker.update_search_intensity(
                unemployment_rate,
                matching.fatigue_floor,
                matching.fatigue_decay,
            );
        }
    }

    // STEP 2: each worker searches, scores, applies, and possibly matches.
    for worker_id in &unemployed {
        let (skills, reservation_wage, search_intensity) = match state.workers().get(worker_id) {
            Some(worker) => (
                worker.skills().clone(),
                worker.reservation_wage(),
                worker.search_intensity(),
            ),
            None => continue,
        };

        if !rng.bernoulli(search_intensity) {
            continue;
        }

        // Score open vacancies. Stable sort keeps posting order on ties.
        let mut scored: Vec<(usize, f64)> = state
            .board()
            .vacancies()
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_vacant())
            .map(|(idx, v)| {
                (
                    idx,
                    v.match_probability(&skills, matching.friction_penalty_per_cycle),
                )
            })
            .filter(|(idx, score)| {
                *score > matching.suitability_threshold
                    && state.board().vacancies()[*idx].wage_offered() >= reservation_wage
            })
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(matching.max_applications);

        for (vacancy_idx, score) in scored {
            // Matched vacancies stay on the board until the end-of-pass
            // sweep; skip any that were awarded since scoring.
            let vacancy = &state.board().vacancies()[vacancy_idx];
            if !vacancy.is_vacant() {
                continue;
            }
            let vacancy_id = vacancy.id().to_string();
            let employer_id = vacancy.employer_id().to_string();
            let wage_offered = vacancy.wage_offered();
            let posting_duration = vacancy.posting_duration();

            state.board_mut().vacancies_mut()[vacancy_idx].record_application();
            stats.applications_processed += 1;
            events.log(MarketEvent::Application {
                cycle,
                worker_id: worker_id.clone(),
                vacancy_id: vacancy_id.clone(),
                match_probability: score,
            });

            let hire_probability =
                score * (1.0 - curve.search_frictions) * curve.matching_efficiency;
            if !rng.bernoulli(hire_probability) {
                continue;
            }

            let wage = negotiate_wage(
                reservation_wage,
                wage_offered,
                posting_duration,
                matching.bargaining_power,
            );

            match attempt_hire(employers, &employer_id, worker_id, wage) {
                HireOutcome::Hired { wage } => {
                    if let Some(worker) = state.workers_mut().get_mut(worker_id) {
                        worker.hire(employer_id.clone(), wage, matching.reservation_discount);
                    }
                    state.board_mut().vacancies_mut()[vacancy_idx].mark_matched();
                    stats.matches_made += 1;
                    events.log(MarketEvent::Hired {
                        cycle,
                        worker_id: worker_id.clone(),
                        vacancy_id,
                        employer_id,
                        wage,
                    });
                    break;
                }
                HireOutcome::EmployerMissing => {
                    stats.failed_hires += 1;
                    events.log(MarketEvent::HireFailed {
                        cycle,
                        worker_id: worker_id.clone(),
                        vacancy_id,
                        employer_id,
                        reason: "employer not found".to_string(),
                    });
                }
                HireOutcome::EmployerRejected => {
                    stats.failed_hires += 1;
                    events.log(MarketEvent::HireFailed {
                        cycle,
                        worker_id: worker_id.clone(),
                        vacancy_id,
                        employer_id,
                        reason: "employer rejected hire".to_string(),
                    });
                }
            }
        }
    }

    // STEP 3: matched vacancies leave the board within the cycle.
    state.board_mut().sweep_matched();

    stats
}

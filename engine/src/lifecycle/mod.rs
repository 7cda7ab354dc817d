//! Vacancy lifecycle: posting and aging
//!
//! The posting pass runs once per cycle over the employer directory.
//! Employers with enough capital may post one vacancy each, with a
//! posting probability that rises in tight markets and for well-funded
//! employers. The aging pass advances every open vacancy's posting
//! duration and sweeps the ones that hit their lifetime bound.

use crate::models::{EmployerDirectory, EmployerRecord, EventLog, MarketEvent, VacancyBoard};
use crate::rng::RngManager;
use crate::wage::{market_wage, SectorPremiums, WageCurveParams};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Requirement level used when a caller posts without naming any skills.
const DEFAULT_REQUIREMENT_LEVEL: f64 = 0.5;

/// Tunable posting-pass parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingParams {
    /// Employers below this capital never post
    pub min_viability_capital: f64,

    /// Capital above which the posted wage carries the employer premium
    pub premium_capital_threshold: f64,

    /// Capital above which posting probability is boosted
    pub boost_capital_threshold: f64,

    /// Per-cycle posting probability in a slack market
    pub base_posting_probability: f64,

    /// Per-cycle posting probability when unemployment is below the cutoff
    pub tight_market_posting_probability: f64,

    /// Unemployment rate below which the market counts as tight
    pub tight_market_unemployment_cutoff: f64,

    /// Posting probability multiplier for well-funded employers
    pub boost_factor: f64,

    /// Posted-wage multiplier for employers above the premium threshold
    pub employer_wage_premium: f64,

    /// Smallest lifetime bound drawn for a new vacancy
    pub min_posting_duration: usize,

    /// Largest lifetime bound drawn for a new vacancy (inclusive)
    pub max_posting_duration: usize,

    /// Requirement range for the employer's own sector
    pub primary_requirement_min: f64,
    pub primary_requirement_max: f64,

    /// Requirement range for the drawn complementary sector
    pub complement_requirement_min: f64,
    pub complement_requirement_max: f64,
}

impl Default for PostingParams {
    fn default() -> Self {
        Self {
            min_viability_capital: 50_000.0,
            premium_capital_threshold: 100_000.0,
            boost_capital_threshold: 200_000.0,
            base_posting_probability: 0.15,
            tight_market_posting_probability: 0.3,
            tight_market_unemployment_cutoff: 0.08,
            boost_factor: 1.5,
            employer_wage_premium: 1.1,
            min_posting_duration: 8,
            max_posting_duration: 15,
            primary_requirement_min: 0.4,
            primary_requirement_max: 0.8,
            complement_requirement_min: 0.2,
            complement_requirement_max: 0.5,
        }
    }
}

/// Post one vacancy for an employer; returns the vacancy ID
///
/// The posted wage is the curve wage for the sector, multiplied by the
/// employer premium when the employer's capital clears the premium
/// threshold. The lifetime bound is drawn uniformly from the configured
/// duration range. Callers log the VacancyPosted event.
#[allow(clippy::too_many_arguments)]
pub(crate) fn post_vacancy(
    board: &mut VacancyBoard,
    employer: &EmployerRecord,
    sector: &str,
    skill_requirements: Option<BTreeMap<String, f64>>,
    curve: &WageCurveParams,
    premiums: &SectorPremiums,
    posting: &PostingParams,
    unemployment_rate: f64,
    rng: &mut RngManager,
) -> String {
    // An empty map counts as "none supplied": fall back to the generic
    // sector requirement.
    let requirements = skill_requirements
        .filter(|reqs| !reqs.is_empty())
        .unwrap_or_else(|| {
            let mut reqs = BTreeMap::new();
            reqs.insert(sector.to_string(), DEFAULT_REQUIREMENT_LEVEL);
            reqs
        });

    let mut wage = market_wage(curve, unemployment_rate, premiums.premium(sector));
    if employer.capital > posting.premium_capital_threshold {
        wage *= posting.employer_wage_premium;
    }

    let max_duration = rng.range(
        posting.min_posting_duration as i64,
        posting.max_posting_duration as i64 + 1,
    ) as usize;

    board.post(
        employer.id.clone(),
        sector.to_string(),
        wage,
        requirements,
        max_duration,
    )
}

/// Run the posting pass for one cycle; returns vacancies posted
///
/// Skill requirements are synthesized per posting: the employer's own
/// sector at a high drawn level, plus one other sector from the market's
/// sector list at a lower drawn level.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_posting_pass(
    board: &mut VacancyBoard,
    employers: &dyn EmployerDirectory,
    sectors: &[String],
    curve: &WageCurveParams,
    premiums: &SectorPremiums,
    posting: &PostingParams,
    unemployment_rate: f64,
    rng: &mut RngManager,
    cycle: usize,
    events: &mut EventLog,
) -> usize {
    let mut posted = 0;

    for employer in employers.employers() {
        if employer.capital < posting.min_viability_capital {
            continue;
        }

        let mut probability = if unemployment_rate < posting.tight_market_unemployment_cutoff {
            posting.tight_market_posting_probability
        } else {
            posting.base_posting_probability
        };
        if employer.capital > posting.boost_capital_threshold {
            probability *= posting.boost_factor;
        }

        if !rng.bernoulli(probability) {
            continue;
        }

        let mut requirements = BTreeMap::new();
        requirements.insert(
            employer.sector.clone(),
            rng.uniform(
                posting.primary_requirement_min,
                posting.primary_requirement_max,
            ),
        );

        let others: Vec<&String> = sectors.iter().filter(|s| **s != employer.sector).collect();
        if !others.is_empty() {
            let idx = rng.range(0, others.len() as i64) as usize;
            requirements.insert(
                others[idx].clone(),
                rng.uniform(
                    posting.complement_requirement_min,
                    posting.complement_requirement_max,
                ),
            );
        }

        let vacancy_id = post_vacancy(
            board,
            &employer,
            &employer.sector,
            Some(requirements),
            curve,
            premiums,
            posting,
            unemployment_rate,
            rng,
        );

        let wage_offered = board
            .get(&vacancy_id)
            .map(|v| v.wage_offered())
            .unwrap_or(0.0);
        events.log(MarketEvent::VacancyPosted {
            cycle,
            vacancy_id,
            employer_id: employer.id.clone(),
            sector: employer.sector.clone(),
            wage_offered,
        });
        posted += 1;
    }

    posted
}

/// Age all open vacancies by one cycle; returns how many expired
///
/// Expired vacancies leave the board immediately and are logged.
pub(crate) fn age_vacancies(board: &mut VacancyBoard, cycle: usize, events: &mut EventLog) -> usize {
    for vacancy in board.vacancies_mut() {
        if vacancy.is_vacant() {
            vacancy.age();
        }
    }

    let expired = board.sweep_expired();
    for vacancy in &expired {
        events.log(MarketEvent::VacancyExpired {
            cycle,
            vacancy_id: vacancy.id().to_string(),
            employer_id: vacancy.employer_id().to_string(),
        });
    }
    expired.len()
}

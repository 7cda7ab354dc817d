//! Cycle orchestrator
//!
//! Owns the full market state, the employer directory handle, all tunable
//! parameters, and the single RNG; drives the fixed per-cycle step order:
//!
//! 1. Metrics snapshot (from current state, before any mutation)
//! 2. Vacancy posting pass
//! 3. Matching pass
//! 4. Vacancy aging pass
//! 5. Job destruction pass
//! 6. Wage-curve parameter drift
//!
//! The step order is part of the engine's contract: every pass reads the
//! unemployment rate measured at the top of the cycle, and a fixed seed
//! replays the whole run identically.

use crate::destruction::{run_destruction_pass, DestructionRates};
use crate::lifecycle::{age_vacancies, post_vacancy, run_posting_pass, PostingParams};
use crate::matching::{run_matching_pass, MatchingParams};
use crate::models::{
    EmployerDirectory, EventLog, Employment, LaborMarketState, MacroPhase, MarketEvent,
    MarketMetrics, WorkerProfile,
};
use crate::rng::RngManager;
use crate::wage::{SectorPremiums, WageCurveParams};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Bootstrap ranges for workers whose seed omits a field.
const SKILL_SYNTH_MIN: f64 = 0.2;
const SKILL_SYNTH_MAX: f64 = 0.8;
const RESERVATION_FRACTION_MIN: f64 = 0.7;
const RESERVATION_FRACTION_MAX: f64 = 0.9;
const INTENSITY_SEED_MIN: f64 = 0.6;
const INTENSITY_SEED_MAX: f64 = 1.0;

/// Errors surfaced by the market engine
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown employer: {0}")]
    UnknownEmployer(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Seed record for one worker at bootstrap
///
/// Omitted fields are synthesized from the orchestrator's RNG: skills are
/// drawn per sector, the reservation wage is drawn as a fraction of the
/// curve's base wage, and every worker draws an initial search intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerSeed {
    /// Unique worker identifier
    pub id: String,

    /// Explicit skill levels, or None to synthesize across sectors
    pub skills: Option<BTreeMap<String, f64>>,

    /// Explicit reservation wage, or None to draw one
    pub reservation_wage: Option<f64>,

    /// Preferred sectors in order
    pub preferred_sectors: Vec<String>,

    /// Pre-existing job, for seeding an already-employed market
    pub employment: Option<Employment>,
}

impl WorkerSeed {
    /// An unemployed seed with everything left to synthesis
    pub fn unemployed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            skills: None,
            reservation_wage: None,
            preferred_sectors: Vec::new(),
            employment: None,
        }
    }
}

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// RNG seed: same seed + same config + same phases = same run
    pub rng_seed: u64,

    /// Sectors the market trades in
    pub sectors: Vec<String>,

    /// Worker population, fixed for the lifetime of the engine
    pub workers: Vec<WorkerSeed>,

    /// Wage curve parameters (drift under the engine's control)
    pub wage_curve: WageCurveParams,

    /// Deterministic sector wage premiums
    pub sector_premiums: SectorPremiums,

    /// Matching pass parameters
    pub matching: MatchingParams,

    /// Posting pass parameters
    pub posting: PostingParams,

    /// Destruction rates per macro phase
    pub destruction: DestructionRates,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            rng_seed: 42,
            sectors: vec![
                "technology".to_string(),
                "services".to_string(),
                "manufacturing".to_string(),
            ],
            workers: Vec::new(),
            wage_curve: WageCurveParams::default(),
            sector_premiums: SectorPremiums::default(),
            matching: MatchingParams::default(),
            posting: PostingParams::default(),
            destruction: DestructionRates::default(),
        }
    }
}

/// Validate a market configuration before building the engine
pub fn validate_config(config: &MarketConfig) -> Result<(), MarketError> {
    if config.workers.is_empty() {
        return Err(MarketError::InvalidConfig(
            "worker population must be non-empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for seed in &config.workers {
        if !seen.insert(seed.id.as_str()) {
            return Err(MarketError::InvalidConfig(format!(
                "duplicate worker ID: {}",
                seed.id
            )));
        }
    }

    if config.sectors.is_empty() {
        return Err(MarketError::InvalidConfig(
            "sector list must be non-empty".to_string(),
        ));
    }

    if config.matching.max_applications == 0 {
        return Err(MarketError::InvalidConfig(
            "max_applications must be at least 1".to_string(),
        ));
    }

    if !(0.0..=1.0).contains(&config.matching.bargaining_power) {
        return Err(MarketError::InvalidConfig(format!(
            "bargaining_power must be in [0, 1], got {}",
            config.matching.bargaining_power
        )));
    }

    if config.posting.min_posting_duration == 0 {
        return Err(MarketError::InvalidConfig(
            "min_posting_duration must be at least 1".to_string(),
        ));
    }

    if config.posting.min_posting_duration > config.posting.max_posting_duration {
        return Err(MarketError::InvalidConfig(format!(
            "posting duration range is inverted: {} > {}",
            config.posting.min_posting_duration, config.posting.max_posting_duration
        )));
    }

    if config.wage_curve.base_wage <= 0.0 {
        return Err(MarketError::InvalidConfig(format!(
            "base_wage must be positive, got {}",
            config.wage_curve.base_wage
        )));
    }

    Ok(())
}

/// Summary of one executed cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    /// Cycle number (1-based)
    pub cycle: usize,

    /// Hires executed this cycle
    pub matches_made: usize,

    /// Applications filed this cycle
    pub applications_processed: usize,

    /// Hire attempts the employer directory declined or could not resolve
    pub failed_hires: usize,

    /// Vacancies posted by the posting pass
    pub vacancies_posted: usize,

    /// Vacancies that aged out this cycle
    pub vacancies_expired: usize,

    /// Jobs destroyed by the layoff process
    pub jobs_destroyed: usize,

    /// Metrics snapshot taken at the top of the cycle
    pub metrics: MarketMetrics,
}

/// The labor market engine
///
/// # Example
/// ```
/// use labor_market_core_rs::{
///     InMemoryEmployers, MacroPhase, MarketConfig, Orchestrator, WorkerSeed,
/// };
///
/// let mut config = MarketConfig::default();
/// config.workers = (0..10)
///     .map(|i| WorkerSeed::unemployed(format!("W_{:03}", i)))
///     .collect();
///
/// let employers = Box::new(InMemoryEmployers::new(Vec::new()));
/// let mut market = Orchestrator::new(config, employers).unwrap();
///
/// let result = market.run_cycle(MacroPhase::Other);
/// assert_eq!(result.cycle, 1);
/// assert_eq!(result.metrics.unemployment_rate, 1.0);
/// ```
pub struct Orchestrator {
    state: LaborMarketState,
    employers: Box<dyn EmployerDirectory>,
    wage_curve: WageCurveParams,
    sector_premiums: SectorPremiums,
    matching: MatchingParams,
    posting: PostingParams,
    destruction: DestructionRates,
    sectors: Vec<String>,
    rng: RngManager,
    event_log: EventLog,
    current_cycle: usize,
    last_metrics: Option<MarketMetrics>,
    metrics_history: Vec<MarketMetrics>,
}

impl Orchestrator {
    /// Build the engine from a validated configuration
    ///
    /// Bootstraps the worker registry, synthesizing any fields the seeds
    /// leave out. Synthesis draws from the engine's RNG in seed order, so
    /// the bootstrap itself is replayable.
    pub fn new(
        config: MarketConfig,
        employers: Box<dyn EmployerDirectory>,
    ) -> Result<Self, MarketError> {
        validate_config(&config)?;

        let mut rng = RngManager::new(config.rng_seed);
        let mut state = LaborMarketState::new();

        for seed in config.workers {
            // An empty skill map counts as "none supplied": synthesize.
            let skills = match seed.skills.filter(|s| !s.is_empty()) {
                Some(skills) => skills,
                None => config
                    .sectors
                    .iter()
                    .map(|s| (s.clone(), rng.uniform(SKILL_SYNTH_MIN, SKILL_SYNTH_MAX)))
                    .collect(),
            };
            let reservation_wage = match seed.reservation_wage {
                Some(wage) => wage,
                None => {
                    config.wage_curve.base_wage
                        * rng.uniform(RESERVATION_FRACTION_MIN, RESERVATION_FRACTION_MAX)
                }
            };
            let search_intensity = rng.uniform(INTENSITY_SEED_MIN, INTENSITY_SEED_MAX);

            state.workers_mut().insert(WorkerProfile::new(
                seed.id,
                skills,
                reservation_wage,
                search_intensity,
                seed.preferred_sectors,
                seed.employment,
            ));
        }

        Ok(Self {
            state,
            employers,
            wage_curve: config.wage_curve,
            sector_premiums: config.sector_premiums,
            matching: config.matching,
            posting: config.posting,
            destruction: config.destruction,
            sectors: config.sectors,
            rng,
            event_log: EventLog::new(),
            current_cycle: 0,
            last_metrics: None,
            metrics_history: Vec::new(),
        })
    }

    /// Execute one full market cycle under the given macro phase
    pub fn run_cycle(&mut self, phase: MacroPhase) -> CycleResult {
        self.current_cycle += 1;
        let cycle = self.current_cycle;

        // STEP 1: metrics snapshot before any mutation; every later pass
        // reads this cycle's unemployment rate.
        let previous_average_wage = self
            .last_metrics
            .as_ref()
            .map(|m| m.average_wage)
            .unwrap_or(0.0);
        let metrics = MarketMetrics::compute(&self.state, &self.wage_curve, previous_average_wage);
        let unemployment_rate = metrics.unemployment_rate;

        // STEP 2: employers post new vacancies.
        let vacancies_posted = run_posting_pass(
            self.state.board_mut(),
            self.employers.as_ref(),
            &self.sectors,
            &self.wage_curve,
            &self.sector_premiums,
            &self.posting,
            unemployment_rate,
            &mut self.rng,
            cycle,
            &mut self.event_log,
        );

        // STEP 3: unemployed workers search, apply, and match.
        let matching_stats = run_matching_pass(
            &mut self.state,
            self.employers.as_mut(),
            &self.wage_curve,
            &self.matching,
            unemployment_rate,
            &mut self.rng,
            cycle,
            &mut self.event_log,
        );

        // STEP 4: surviving vacancies age; stale ones expire.
        let vacancies_expired = age_vacancies(self.state.board_mut(), cycle, &mut self.event_log);

        // STEP 5: exogenous layoffs by macro phase.
        let jobs_destroyed = run_destruction_pass(
            &mut self.state,
            self.employers.as_mut(),
            &self.destruction,
            phase,
            cycle,
            &mut self.event_log,
        );

        // STEP 6: wage-curve parameters drift for the next cycle.
        self.wage_curve.drift(phase, unemployment_rate);

        self.last_metrics = Some(metrics.clone());
        self.metrics_history.push(metrics.clone());

        CycleResult {
            cycle,
            matches_made: matching_stats.matches_made,
            applications_processed: matching_stats.applications_processed,
            failed_hires: matching_stats.failed_hires,
            vacancies_posted,
            vacancies_expired,
            jobs_destroyed,
            metrics,
        }
    }

    /// Post a vacancy on behalf of an employer, outside the posting pass
    ///
    /// Resolves the employer through the directory; a `skill_requirements`
    /// of `None` (or an empty map) gets a generic requirement in the
    /// posting sector.
    pub fn post_vacancy(
        &mut self,
        employer_id: &str,
        sector: &str,
        skill_requirements: Option<BTreeMap<String, f64>>,
    ) -> Result<String, MarketError> {
        let employer = self
            .employers
            .employers()
            .into_iter()
            .find(|e| e.id == employer_id)
            .ok_or_else(|| MarketError::UnknownEmployer(employer_id.to_string()))?;

        let unemployment_rate = self
            .last_metrics
            .as_ref()
            .map(|m| m.unemployment_rate)
            .unwrap_or_else(|| {
                MarketMetrics::compute(&self.state, &self.wage_curve, 0.0).unemployment_rate
            });

        let vacancy_id = post_vacancy(
            self.state.board_mut(),
            &employer,
            sector,
            skill_requirements,
            &self.wage_curve,
            &self.sector_premiums,
            &self.posting,
            unemployment_rate,
            &mut self.rng,
        );

        let wage_offered = self
            .state
            .board()
            .get(&vacancy_id)
            .map(|v| v.wage_offered())
            .unwrap_or(0.0);
        self.event_log.log(MarketEvent::VacancyPosted {
            cycle: self.current_cycle,
            vacancy_id: vacancy_id.clone(),
            employer_id: employer_id.to_string(),
            sector: sector.to_string(),
            wage_offered,
        });

        Ok(vacancy_id)
    }

    /// Plain-text market report for the current state
    pub fn market_report(&self) -> String {
        let metrics = MarketMetrics::compute(
            &self.state,
            &self.wage_curve,
            self.last_metrics
                .as_ref()
                .map(|m| m.average_wage)
                .unwrap_or(0.0),
        );

        let mut report = String::new();
        report.push_str("=== LABOR MARKET REPORT ===\n");
        report.push_str(&format!("Cycle: {}\n", self.current_cycle));
        report.push_str(&format!(
            "Unemployment rate: {:.1}%\n",
            metrics.unemployment_rate * 100.0
        ));
        report.push_str(&format!("Average wage: {:.2}\n", metrics.average_wage));
        report.push_str(&format!("Open vacancies: {}\n", metrics.total_vacancies));
        report.push_str(&format!(
            "Wage growth: {:.2}%\n",
            metrics.wage_growth * 100.0
        ));
        report.push_str(&format!("Match rate: {:.3}\n", metrics.match_rate));
        report.push_str(&format!(
            "Matching efficiency: {:.3}\n",
            self.wage_curve.matching_efficiency
        ));
        report.push_str(&format!(
            "Productivity factor: {:.3}\n",
            self.wage_curve.productivity_factor
        ));
        report.push_str(&format!("Events logged: {}\n", self.event_log.len()));
        report
    }

    /// Current market state (workers and board)
    pub fn state(&self) -> &LaborMarketState {
        &self.state
    }

    /// The full event log for this run
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Metrics snapshots, one per executed cycle
    pub fn metrics_history(&self) -> &[MarketMetrics] {
        &self.metrics_history
    }

    /// Cycles executed so far
    pub fn current_cycle(&self) -> usize {
        self.current_cycle
    }

    /// Current wage-curve parameters (including drift to date)
    pub fn wage_curve(&self) -> &WageCurveParams {
        &self.wage_curve
    }

    /// The employer directory handle
    pub fn employers(&self) -> &dyn EmployerDirectory {
        self.employers.as_ref()
    }
}

//! Worker model
//!
//! Represents a worker searching for (or holding) a job.
//! Each worker has:
//! - A skill mapping (sector → level in [0, 1])
//! - A reservation wage (minimum acceptable wage, falls after a hire)
//! - A search intensity recomputed every cycle while unemployed
//!
//! Worker identities are created once at bootstrap and never destroyed;
//! the total worker count is constant across cycles.
//!
//! Skill maps are `BTreeMap` rather than `HashMap`: match scores sum over
//! the map, and a sorted order keeps floating-point accumulation identical
//! across independent runs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Search effort baseline; effort rises with unemployment from here.
const SEARCH_BASE: f64 = 0.8;

/// How strongly economy-wide unemployment raises search effort.
const SEARCH_UNEMPLOYMENT_RESPONSE: f64 = 0.2;

/// A worker's current job: which employer, at what negotiated wage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employment {
    /// Employer holding this worker's job
    pub employer_id: String,

    /// Wage settled at hiring (bargained, not the posted offer)
    pub wage: f64,
}

/// A worker profile in the labor market
///
/// # Example
/// ```
/// use labor_market_core_rs::WorkerProfile;
/// use std::collections::BTreeMap;
///
/// let mut skills = BTreeMap::new();
/// skills.insert("technology".to_string(), 0.7);
///
/// let worker = WorkerProfile::new(
///     "W_001".to_string(),
///     skills,
///     1800.0,
///     0.8,
///     vec!["technology".to_string()],
///     None,
/// );
/// assert!(worker.is_unemployed());
/// assert_eq!(worker.unemployment_duration(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    /// Unique worker identifier (e.g., "W_001")
    worker_id: String,

    /// Skill levels by sector, each clamped to [0, 1] at construction
    skills: BTreeMap<String, f64>,

    /// Minimum wage this worker accepts (>= 0)
    reservation_wage: f64,

    /// Probability of actively searching this cycle, in [0, 1]
    ///
    /// Seeded at bootstrap, then recomputed every cycle while unemployed
    /// from market conditions and unemployment fatigue.
    search_intensity: f64,

    /// Consecutive cycles unemployed; resets to 0 on hire (and on layoff)
    unemployment_duration: usize,

    /// Sectors the worker prefers, in order (carried from the worker source)
    preferred_sectors: Vec<String>,

    /// Current job, if any. `None` = unemployed.
    employment: Option<Employment>,
}

impl WorkerProfile {
    /// Create a new worker profile
    ///
    /// Defaults and bounds are applied here, once, rather than at read
    /// sites: skill levels are clamped to [0, 1], the reservation wage is
    /// floored at 0, and search intensity is clamped to [0, 1].
    ///
    /// # Panics
    /// Panics if `skills` is empty. The bootstrap synthesizes a skill
    /// mapping before construction when the worker source supplies none
    /// (or an empty map), so this is an internal invariant.
    pub fn new(
        worker_id: String,
        skills: BTreeMap<String, f64>,
        reservation_wage: f64,
        search_intensity: f64,
        preferred_sectors: Vec<String>,
        employment: Option<Employment>,
    ) -> Self {
        assert!(!skills.is_empty(), "worker skills must be non-empty");

        let skills = skills
            .into_iter()
            .map(|(sector, level)| (sector, level.clamp(0.0, 1.0)))
            .collect();

        Self {
            worker_id,
            skills,
            reservation_wage: reservation_wage.max(0.0),
            search_intensity: search_intensity.clamp(0.0, 1.0),
            unemployment_duration: 0,
            preferred_sectors,
            employment,
        }
    }

    /// Unique worker identifier
    pub fn id(&self) -> &str {
        &self.worker_id
    }

    /// Skill levels by sector
    pub fn skills(&self) -> &BTreeMap<String, f64> {
        &self.skills
    }

    /// Minimum wage this worker accepts
    pub fn reservation_wage(&self) -> f64 {
        self.reservation_wage
    }

    /// Probability of actively searching this cycle
    pub fn search_intensity(&self) -> f64 {
        self.search_intensity
    }

    /// Consecutive cycles unemployed
    pub fn unemployment_duration(&self) -> usize {
        self.unemployment_duration
    }

    /// Preferred sectors in order
    pub fn preferred_sectors(&self) -> &[String] {
        &self.preferred_sectors
    }

    /// Current job, if any
    pub fn employment(&self) -> Option<&Employment> {
        self.employment.as_ref()
    }

    /// True if the worker currently holds no job
    pub fn is_unemployed(&self) -> bool {
        self.employment.is_none()
    }

    /// Advance one cycle of unemployment (duration += 1)
    ///
    /// Called by the matching pass, once per cycle, for every unemployed
    /// worker, before the participation draw.
    pub(crate) fn advance_unemployment(&mut self) {
        self.unemployment_duration += 1;
    }

    /// Recompute search intensity from market conditions
    ///
    /// Effort rises with economy-wide unemployment (workers search harder
    /// in worse markets) and decays with long personal unemployment down
    /// to a fatigue floor:
    ///
    /// `intensity = clamp((0.8 + 0.2·u) · max(floor, 1 − decay·duration), 0, 1)`
    pub(crate) fn update_search_intensity(
        &mut self,
        unemployment_rate: f64,
        fatigue_floor: f64,
        fatigue_decay: f64,
    ) {
        let responsiveness = SEARCH_BASE + SEARCH_UNEMPLOYMENT_RESPONSE * unemployment_rate;
        let fatigue = (1.0 - fatigue_decay * self.unemployment_duration as f64).max(fatigue_floor);
        self.search_intensity = (responsiveness * fatigue).clamp(0.0, 1.0);
    }

    /// Record a successful hire
    ///
    /// Flips the worker to employed, resets unemployment duration, and
    /// recalibrates the reservation wage to a fraction of the settled wage
    /// (the worker's learned bargaining position).
    pub(crate) fn hire(&mut self, employer_id: String, wage: f64, reservation_discount: f64) {
        self.employment = Some(Employment { employer_id, wage });
        self.unemployment_duration = 0;
        self.reservation_wage = (wage * reservation_discount).max(0.0);
    }

    /// Record an exogenous layoff
    ///
    /// Removes the employer link and resets unemployment duration to 0.
    pub(crate) fn lay_off(&mut self) {
        self.employment = None;
        self.unemployment_duration = 0;
    }
}

/// Registry exclusively owning all worker profiles
///
/// Iteration always follows registration order so that, for a fixed seed,
/// matching and destruction produce identical results across runs.
#[derive(Debug, Clone, Default)]
pub struct WorkerRegistry {
    workers: HashMap<String, WorkerProfile>,
    registration_order: Vec<String>,
}

impl WorkerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a worker
    ///
    /// # Panics
    /// Panics if the worker ID is already registered.
    pub(crate) fn insert(&mut self, worker: WorkerProfile) {
        let id = worker.id().to_string();
        assert!(
            !self.workers.contains_key(&id),
            "Worker ID {} already registered",
            id
        );
        self.registration_order.push(id.clone());
        self.workers.insert(id, worker);
    }

    /// Get a worker by ID
    pub fn get(&self, id: &str) -> Option<&WorkerProfile> {
        self.workers.get(id)
    }

    /// Get a mutable worker by ID
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut WorkerProfile> {
        self.workers.get_mut(id)
    }

    /// Worker IDs in registration order
    pub fn ids_in_order(&self) -> &[String] {
        &self.registration_order
    }

    /// Iterate workers in registration order
    pub fn iter_in_order(&self) -> impl Iterator<Item = &WorkerProfile> {
        self.registration_order
            .iter()
            .filter_map(|id| self.workers.get(id))
    }

    /// Number of registered workers
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// True if no workers are registered
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(id: &str) -> WorkerProfile {
        let mut skills = BTreeMap::new();
        skills.insert("general".to_string(), 0.5);
        WorkerProfile::new(id.to_string(), skills, 1000.0, 0.8, Vec::new(), None)
    }

    #[test]
    fn test_new_worker_is_unemployed() {
        let w = worker("W_001");
        assert!(w.is_unemployed());
        assert_eq!(w.unemployment_duration(), 0);
        assert_eq!(w.reservation_wage(), 1000.0);
    }

    #[test]
    fn test_skills_clamped_at_construction() {
        let mut skills = BTreeMap::new();
        skills.insert("a".to_string(), 1.7);
        skills.insert("b".to_string(), -0.3);
        let w = WorkerProfile::new("W".to_string(), skills, -50.0, 2.0, Vec::new(), None);

        assert_eq!(w.skills()["a"], 1.0);
        assert_eq!(w.skills()["b"], 0.0);
        assert_eq!(w.reservation_wage(), 0.0);
        assert_eq!(w.search_intensity(), 1.0);
    }

    #[test]
    #[should_panic(expected = "worker skills must be non-empty")]
    fn test_empty_skills_rejected() {
        WorkerProfile::new("W".to_string(), BTreeMap::new(), 1000.0, 0.8, Vec::new(), None);
    }

    #[test]
    fn test_hire_resets_duration_and_recalibrates_reservation() {
        let mut w = worker("W_001");
        w.advance_unemployment();
        w.advance_unemployment();
        assert_eq!(w.unemployment_duration(), 2);

        w.hire("EMP_A".to_string(), 1400.0, 0.9);

        assert!(!w.is_unemployed());
        assert_eq!(w.unemployment_duration(), 0);
        assert_eq!(w.employment().unwrap().employer_id, "EMP_A");
        assert_eq!(w.employment().unwrap().wage, 1400.0);
        assert!((w.reservation_wage() - 1260.0).abs() < 1e-9);
    }

    #[test]
    fn test_lay_off_resets_duration() {
        let mut w = worker("W_001");
        w.hire("EMP_A".to_string(), 1400.0, 0.9);
        w.lay_off();

        assert!(w.is_unemployed());
        assert_eq!(w.unemployment_duration(), 0);
    }

    #[test]
    fn test_search_intensity_rises_with_unemployment() {
        let mut low = worker("W_001");
        let mut high = worker("W_002");

        low.update_search_intensity(0.05, 0.3, 0.01);
        high.update_search_intensity(0.5, 0.3, 0.01);

        assert!(high.search_intensity() > low.search_intensity());
    }

    #[test]
    fn test_search_intensity_fatigue_floor() {
        let mut w = worker("W_001");
        for _ in 0..200 {
            w.advance_unemployment();
        }
        w.update_search_intensity(0.1, 0.3, 0.01);

        // fatigue bottoms out at the floor: (0.8 + 0.02) * 0.3
        assert!((w.search_intensity() - 0.82 * 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_registry_registration_order() {
        let mut registry = WorkerRegistry::new();
        registry.insert(worker("W_003"));
        registry.insert(worker("W_001"));
        registry.insert(worker("W_002"));

        let ids: Vec<&str> = registry.ids_in_order().iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, vec!["W_003", "W_001", "W_002"]);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_registry_duplicate_rejected() {
        let mut registry = WorkerRegistry::new();
        registry.insert(worker("W_001"));
        registry.insert(worker("W_001"));
    }
}

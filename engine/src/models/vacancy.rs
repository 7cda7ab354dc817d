//! Vacancy model and vacancy board
//!
//! A vacancy is an open job posting with wage and skill terms, owned by one
//! employer, with a bounded lifetime drawn per-vacancy.
//!
//! # Critical Invariants
//!
//! 1. **One-directional lifecycle**: Vacant → Matched or Vacant → Expired,
//!    never back.
//! 2. **Bounded age**: `posting_duration <= max_posting_duration` while
//!    Vacant; reaching the bound flips the vacancy to Expired.
//! 3. **Single award**: a vacancy is matched to at most one worker; matched
//!    vacancies leave the board within the same cycle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Guard against degenerate requirement levels when scoring a match.
const MIN_REQUIRED_LEVEL: f64 = 0.1;

/// Lifecycle state of a vacancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VacancyStatus {
    /// Open and accepting applications
    Vacant,
    /// Awarded to a worker; removed from the board at end of matching
    Matched,
    /// Aged out without a hire; removed from the board during aging
    Expired,
}

/// An open job posting
///
/// Created only by the vacancy lifecycle manager; removed from the board
/// when Matched or Expired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    /// Unique vacancy identifier (e.g., "vac_000001")
    id: String,

    /// Employer that posted this vacancy
    employer_id: String,

    /// Sector the job belongs to
    sector: String,

    /// Posted wage (pre-negotiation)
    wage_offered: f64,

    /// Required skill levels by sector, each clamped to [0, 1]
    skill_requirements: BTreeMap<String, f64>,

    /// Cycles this vacancy has been on the board
    posting_duration: usize,

    /// Lifetime bound, drawn per-vacancy to avoid synchronized expirations
    max_posting_duration: usize,

    /// Applications filed against this vacancy
    applications_received: usize,

    /// Lifecycle state
    status: VacancyStatus,
}

impl Vacancy {
    /// Create a new vacant posting
    ///
    /// # Panics
    /// Panics if `skill_requirements` is empty or `max_posting_duration`
    /// is 0. The lifecycle manager injects a generic requirement before
    /// construction when the caller supplies none.
    pub(crate) fn new(
        id: String,
        employer_id: String,
        sector: String,
        wage_offered: f64,
        skill_requirements: BTreeMap<String, f64>,
        max_posting_duration: usize,
    ) -> Self {
        assert!(
            !skill_requirements.is_empty(),
            "skill_requirements must be non-empty"
        );
        assert!(max_posting_duration > 0, "max_posting_duration must be > 0");

        let skill_requirements = skill_requirements
            .into_iter()
            .map(|(sector, level)| (sector, level.clamp(0.0, 1.0)))
            .collect();

        Self {
            id,
            employer_id,
            sector,
            wage_offered,
            skill_requirements,
            posting_duration: 0,
            max_posting_duration,
            applications_received: 0,
            status: VacancyStatus::Vacant,
        }
    }

    /// Unique vacancy identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Employer that posted this vacancy
    pub fn employer_id(&self) -> &str {
        &self.employer_id
    }

    /// Sector the job belongs to
    pub fn sector(&self) -> &str {
        &self.sector
    }

    /// Posted wage
    pub fn wage_offered(&self) -> f64 {
        self.wage_offered
    }

    /// Required skill levels by sector
    pub fn skill_requirements(&self) -> &BTreeMap<String, f64> {
        &self.skill_requirements
    }

    /// Cycles this vacancy has been on the board
    pub fn posting_duration(&self) -> usize {
        self.posting_duration
    }

    /// Per-vacancy lifetime bound
    pub fn max_posting_duration(&self) -> usize {
        self.max_posting_duration
    }

    /// Applications filed against this vacancy
    pub fn applications_received(&self) -> usize {
        self.applications_received
    }

    /// Lifecycle state
    pub fn status(&self) -> VacancyStatus {
        self.status
    }

    /// True if open and accepting applications
    pub fn is_vacant(&self) -> bool {
        self.status == VacancyStatus::Vacant
    }

    /// Score how well a worker's skills fit this vacancy
    ///
    /// Weighted average over required skills of `min(1, worker/required)`,
    /// minus a friction penalty linear in how long the posting has been
    /// open, clamped to [0, 1]. Required levels are floored at 0.1 so a
    /// degenerate requirement cannot blow up the ratio.
    pub fn match_probability(
        &self,
        worker_skills: &BTreeMap<String, f64>,
        friction_penalty_per_cycle: f64,
    ) -> f64 {
        let mut total_match = 0.0;
        let mut total_weight = 0.0;

        for (skill, required) in &self.skill_requirements {
            let level = worker_skills.get(skill).copied().unwrap_or(0.0);
            total_match += (level / required.max(MIN_REQUIRED_LEVEL)).min(1.0);
            total_weight += 1.0;
        }

        let base = total_match / total_weight;
        let friction_penalty = friction_penalty_per_cycle * self.posting_duration as f64;
        (base - friction_penalty).clamp(0.0, 1.0)
    }

    /// Record one application filed against this vacancy
    pub(crate) fn record_application(&mut self) {
        self.applications_received += 1;
    }

    /// Award this vacancy to a worker
    ///
    /// # Panics
    /// Panics if the vacancy is not Vacant: lifecycle transitions are
    /// one-directional and a vacancy is matched at most once.
    pub(crate) fn mark_matched(&mut self) {
        assert_eq!(
            self.status,
            VacancyStatus::Vacant,
            "only a Vacant vacancy can be matched"
        );
        self.status = VacancyStatus::Matched;
    }

    /// Age this vacancy by one cycle; expires it at the lifetime bound
    ///
    /// Only meaningful for Vacant vacancies; the aging pass skips others.
    pub(crate) fn age(&mut self) {
        debug_assert_eq!(self.status, VacancyStatus::Vacant);
        self.posting_duration += 1;
        if self.posting_duration >= self.max_posting_duration {
            self.status = VacancyStatus::Expired;
        }
    }
}

/// Board exclusively owning all active vacancies
///
/// Vacancies are kept in posting order (stable iteration for a fixed
/// seed). IDs come from a sequential counter so runs replay identically.
#[derive(Debug, Clone, Default)]
pub struct VacancyBoard {
    vacancies: Vec<Vacancy>,
    next_vacancy_id: usize,
}

impl VacancyBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a new vacancy; returns its ID
    pub(crate) fn post(
        &mut self,
        employer_id: String,
        sector: String,
        wage_offered: f64,
        skill_requirements: BTreeMap<String, f64>,
        max_posting_duration: usize,
    ) -> String {
        self.next_vacancy_id += 1;
        let id = format!("vac_{:06}", self.next_vacancy_id);
        self.vacancies.push(Vacancy::new(
            id.clone(),
            employer_id,
            sector,
            wage_offered,
            skill_requirements,
            max_posting_duration,
        ));
        id
    }

    /// All vacancies on the board, in posting order
    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    /// Mutable access for the orchestrator's passes
    pub(crate) fn vacancies_mut(&mut self) -> &mut [Vacancy] {
        &mut self.vacancies
    }

    /// Get a vacancy by ID
    pub fn get(&self, id: &str) -> Option<&Vacancy> {
        self.vacancies.iter().find(|v| v.id() == id)
    }

    /// Number of vacancies on the board
    pub fn len(&self) -> usize {
        self.vacancies.len()
    }

    /// True if the board holds no vacancies
    pub fn is_empty(&self) -> bool {
        self.vacancies.is_empty()
    }

    /// Number of vacancies still open
    pub fn vacant_count(&self) -> usize {
        self.vacancies.iter().filter(|v| v.is_vacant()).count()
    }

    /// Remove matched vacancies from the board; returns how many
    pub(crate) fn sweep_matched(&mut self) -> usize {
        let before = self.vacancies.len();
        self.vacancies.retain(|v| v.status() != VacancyStatus::Matched);
        before - self.vacancies.len()
    }

    /// Remove expired vacancies from the board, returning them for logging
    pub(crate) fn sweep_expired(&mut self) -> Vec<Vacancy> {
        let mut expired = Vec::new();
        self.vacancies.retain(|v| {
            if v.status() == VacancyStatus::Expired {
                expired.push(v.clone());
                false
            } else {
                true
            }
        });
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirements(sector: &str, level: f64) -> BTreeMap<String, f64> {
        let mut reqs = BTreeMap::new();
        reqs.insert(sector.to_string(), level);
        reqs
    }

    fn skills(sector: &str, level: f64) -> BTreeMap<String, f64> {
        requirements(sector, level)
    }

    #[test]
    fn test_new_vacancy_is_vacant() {
        let v = Vacancy::new(
            "vac_000001".to_string(),
            "EMP_A".to_string(),
            "general".to_string(),
            2000.0,
            requirements("general", 0.5),
            10,
        );

        assert!(v.is_vacant());
        assert_eq!(v.posting_duration(), 0);
        assert_eq!(v.applications_received(), 0);
    }

    #[test]
    #[should_panic(expected = "skill_requirements must be non-empty")]
    fn test_empty_requirements_rejected() {
        Vacancy::new(
            "vac_000001".to_string(),
            "EMP_A".to_string(),
            "general".to_string(),
            2000.0,
            BTreeMap::new(),
            10,
        );
    }

    #[test]
    fn test_match_probability_full_skill() {
        let v = Vacancy::new(
            "vac_000001".to_string(),
            "EMP_A".to_string(),
            "general".to_string(),
            2000.0,
            requirements("general", 0.5),
            10,
        );

        assert_eq!(v.match_probability(&skills("general", 0.9), 0.05), 1.0);
    }

    #[test]
    fn test_match_probability_partial_skill() {
        let v = Vacancy::new(
            "vac_000001".to_string(),
            "EMP_A".to_string(),
            "general".to_string(),
            2000.0,
            requirements("general", 0.8),
            10,
        );

        let p = v.match_probability(&skills("general", 0.4), 0.05);
        assert!((p - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_match_probability_missing_skill_is_zero() {
        let v = Vacancy::new(
            "vac_000001".to_string(),
            "EMP_A".to_string(),
            "technology".to_string(),
            2000.0,
            requirements("technology", 0.6),
            10,
        );

        assert_eq!(v.match_probability(&skills("services", 0.9), 0.05), 0.0);
    }

    #[test]
    fn test_friction_penalty_grows_with_posting_duration() {
        let mut v = Vacancy::new(
            "vac_000001".to_string(),
            "EMP_A".to_string(),
            "general".to_string(),
            2000.0,
            requirements("general", 0.5),
            10,
        );

        let fresh = v.match_probability(&skills("general", 0.9), 0.05);
        v.age();
        v.age();
        let stale = v.match_probability(&skills("general", 0.9), 0.05);

        assert!((fresh - 1.0).abs() < 1e-9);
        assert!((stale - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_aging_to_bound_expires() {
        let mut v = Vacancy::new(
            "vac_000001".to_string(),
            "EMP_A".to_string(),
            "general".to_string(),
            2000.0,
            requirements("general", 0.5),
            3,
        );

        v.age();
        v.age();
        assert!(v.is_vacant());
        assert!(v.posting_duration() <= v.max_posting_duration());

        v.age();
        assert_eq!(v.status(), VacancyStatus::Expired);
    }

    #[test]
    #[should_panic(expected = "only a Vacant vacancy can be matched")]
    fn test_matched_twice_rejected() {
        let mut v = Vacancy::new(
            "vac_000001".to_string(),
            "EMP_A".to_string(),
            "general".to_string(),
            2000.0,
            requirements("general", 0.5),
            10,
        );

        v.mark_matched();
        v.mark_matched();
    }

    #[test]
    fn test_board_sequential_ids_and_order() {
        let mut board = VacancyBoard::new();
        let a = board.post(
            "EMP_A".to_string(),
            "general".to_string(),
            2000.0,
            requirements("general", 0.5),
            10,
        );
        let b = board.post(
            "EMP_B".to_string(),
            "general".to_string(),
            2100.0,
            requirements("general", 0.5),
            10,
        );

        assert_eq!(a, "vac_000001");
        assert_eq!(b, "vac_000002");
        assert_eq!(board.vacancies()[0].id(), "vac_000001");
        assert_eq!(board.vacancies()[1].id(), "vac_000002");
    }

    #[test]
    fn test_board_sweep_matched() {
        let mut board = VacancyBoard::new();
        board.post(
            "EMP_A".to_string(),
            "general".to_string(),
            2000.0,
            requirements("general", 0.5),
            10,
        );
        board.post(
            "EMP_B".to_string(),
            "general".to_string(),
            2100.0,
            requirements("general", 0.5),
            10,
        );

        board.vacancies_mut()[0].mark_matched();
        let removed = board.sweep_matched();

        assert_eq!(removed, 1);
        assert_eq!(board.len(), 1);
        assert_eq!(board.vacancies()[0].employer_id(), "EMP_B");
    }

    #[test]
    fn test_board_sweep_expired() {
        let mut board = VacancyBoard::new();
        board.post(
            "EMP_A".to_string(),
            "general".to_string(),
            2000.0,
            requirements("general", 0.5),
            1,
        );

        board.vacancies_mut()[0].age();
        let expired = board.sweep_expired();

        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id(), "vac_000001");
        assert!(board.is_empty());
    }
}

//! Event logging for market replay and auditing.
//!
//! This module defines the MarketEvent enum which captures all significant
//! state changes during a simulation run. Events enable:
//! - Debugging (understand what happened and when)
//! - Auditing (verify matching and layoff decisions)
//! - Analysis (extract flows the headline metrics aggregate away)
//!
//! Failed hire attempts are logged here rather than swallowed deep in the
//! matching loop; one bad employer reference never aborts a cycle, but it
//! always leaves a trace.

/// Market event capturing a state change.
///
/// All events include a cycle number for temporal ordering.
/// Events are logged in the order they occur within a cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketEvent {
    /// A new vacancy was posted to the board
    VacancyPosted {
        cycle: usize,
        vacancy_id: String,
        employer_id: String,
        sector: String,
        wage_offered: f64,
    },

    /// A worker applied to a vacancy
    Application {
        cycle: usize,
        worker_id: String,
        vacancy_id: String,
        match_probability: f64,
    },

    /// A worker was hired, vacancy matched
    Hired {
        cycle: usize,
        worker_id: String,
        vacancy_id: String,
        employer_id: String,
        wage: f64,
    },

    /// A hire attempt failed; the vacancy remains Vacant
    HireFailed {
        cycle: usize,
        worker_id: String,
        vacancy_id: String,
        employer_id: String,
        reason: String,
    },

    /// A vacancy aged out without a hire
    VacancyExpired {
        cycle: usize,
        vacancy_id: String,
        employer_id: String,
    },

    /// A job was destroyed by the exogenous layoff process
    JobDestroyed {
        cycle: usize,
        worker_id: String,
        employer_id: String,
    },
}

impl MarketEvent {
    /// Get the cycle number when this event occurred
    pub fn cycle(&self) -> usize {
        match self {
            MarketEvent::VacancyPosted { cycle, .. } => *cycle,
            MarketEvent::Application { cycle, .. } => *cycle,
            MarketEvent::Hired { cycle, .. } => *cycle,
            MarketEvent::HireFailed { cycle, .. } => *cycle,
            MarketEvent::VacancyExpired { cycle, .. } => *cycle,
            MarketEvent::JobDestroyed { cycle, .. } => *cycle,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            MarketEvent::VacancyPosted { .. } => "VacancyPosted",
            MarketEvent::Application { .. } => "Application",
            MarketEvent::Hired { .. } => "Hired",
            MarketEvent::HireFailed { .. } => "HireFailed",
            MarketEvent::VacancyExpired { .. } => "VacancyExpired",
            MarketEvent::JobDestroyed { .. } => "JobDestroyed",
        }
    }

    /// Get worker ID if event relates to a specific worker
    pub fn worker_id(&self) -> Option<&str> {
        match self {
            MarketEvent::Application { worker_id, .. } => Some(worker_id),
            MarketEvent::Hired { worker_id, .. } => Some(worker_id),
            MarketEvent::HireFailed { worker_id, .. } => Some(worker_id),
            MarketEvent::JobDestroyed { worker_id, .. } => Some(worker_id),
            _ => None,
        }
    }

    /// Get vacancy ID if event relates to a specific vacancy
    pub fn vacancy_id(&self) -> Option<&str> {
        match self {
            MarketEvent::VacancyPosted { vacancy_id, .. } => Some(vacancy_id),
            MarketEvent::Application { vacancy_id, .. } => Some(vacancy_id),
            MarketEvent::Hired { vacancy_id, .. } => Some(vacancy_id),
            MarketEvent::HireFailed { vacancy_id, .. } => Some(vacancy_id),
            MarketEvent::VacancyExpired { vacancy_id, .. } => Some(vacancy_id),
            _ => None,
        }
    }
}

/// Event log for storing and querying market events.
///
/// This is a simple wrapper around Vec<MarketEvent> with convenience methods.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<MarketEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: MarketEvent) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[MarketEvent] {
        &self.events
    }

    /// Get events for a specific cycle
    pub fn events_at_cycle(&self, cycle: usize) -> Vec<&MarketEvent> {
        self.events.iter().filter(|e| e.cycle() == cycle).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&MarketEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific worker
    pub fn events_for_worker(&self, worker_id: &str) -> Vec<&MarketEvent> {
        self.events
            .iter()
            .filter(|e| e.worker_id() == Some(worker_id))
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

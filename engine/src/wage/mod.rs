//! Wage formation: the market wage curve and Nash negotiation

pub mod curve;
pub mod negotiation;

pub use curve::{market_wage, SectorPremiums, WageCurveParams};
pub use negotiation::negotiate_wage;

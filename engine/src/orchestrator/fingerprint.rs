//! Run fingerprinting
//!
//! A fingerprint is a SHA-256 digest over the canonical JSON form of a
//! run's metrics history. Two runs with the same configuration, seed, and
//! phase sequence must produce the same fingerprint; this is the cheap
//! cross-process check that determinism holds.

use crate::models::MarketMetrics;
use crate::orchestrator::engine::MarketError;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Canonicalize a JSON value: objects get sorted keys, recursively.
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), canonicalize(v)))
                .collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Compute the SHA-256 fingerprint of a metrics history
///
/// # Example
/// ```
/// use labor_market_core_rs::orchestrator::metrics_fingerprint;
///
/// let fingerprint = metrics_fingerprint(&[]).unwrap();
/// assert_eq!(fingerprint.len(), 64);
/// ```
pub fn metrics_fingerprint(history: &[MarketMetrics]) -> Result<String, MarketError> {
    let value =
        serde_json::to_value(history).map_err(|e| MarketError::Serialization(e.to_string()))?;
    let canonical = canonicalize(&value);
    let serialized = serde_json::to_string(&canonical)
        .map_err(|e| MarketError::Serialization(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(serialized.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InfectionStatus {
    Infected,
    Inconclusive,
    NotInfected,
}

/// Side input to the evaluator, derived from the elapsed days between
/// symptom onset and the index surgery (< 21 days = acute).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientContext {
    pub is_acute_infection: bool,
}

/// The engine's sole product. `probability` is always derived from
/// `score`; the presentation layer treats the whole value as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnosis {
    pub score: f64,
    /// 0–100, rendered on the gauge.
    pub probability: f64,
    pub status: InfectionStatus,
    /// Human-readable criteria that fired, in rule order.
    pub reasoning: Vec<String>,
}

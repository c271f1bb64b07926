use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Pathogen classification selected by the operator once culture and
/// susceptibility results are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PathogenClass {
    Mrsa,
    Mssa,
    /// Vancomycin-intermediate S. aureus.
    Visa,
    GramNegative,
    #[default]
    CultureNegative,
}

/// Antibiotic regimen card shown on the treatment page. Populated from
/// the static advisor tables; the citation is pre-authored text, not a
/// live retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentPlan {
    pub pathogen: PathogenClass,
    pub resistance: String,
    pub iv_drug: String,
    pub iv_dosage: String,
    pub iv_duration: String,
    pub oral_drug: String,
    pub oral_dosage: String,
    pub oral_duration: String,
    pub citation: String,
    pub confidence: f64,
}

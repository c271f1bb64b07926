use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::labs::LabPanel;

/// Findings each considered diagnostic of infection on their own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MajorCriteria {
    pub sinus_tract: bool,
    pub two_positive_cultures: bool,
}

/// Presenting symptoms. Collected for the record; only `sinus_tract`
/// participates in scoring (via the major-criterion check).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptoms {
    pub fever: bool,
    pub sinus_tract: bool,
    pub erythema: bool,
    pub pain: bool,
    pub swelling: bool,
    pub drainage: bool,
    pub purulence: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CultureStatus {
    Negative,
    Positive,
}

/// A single periprosthetic tissue or fluid culture sample.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CultureSample {
    pub sample_number: u32,
    pub status: CultureStatus,
    /// Organism identified on a positive culture. Empty for negatives.
    pub bacteria_name: String,
}

impl CultureSample {
    /// Build a sample. An organism name may only accompany a positive
    /// culture; a positive sample with no name yet is a valid in-progress
    /// entry and simply does not count toward the consensus rule.
    pub fn new(
        sample_number: u32,
        status: CultureStatus,
        bacteria_name: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let bacteria_name = bacteria_name.into();
        if status == CultureStatus::Negative && !bacteria_name.trim().is_empty() {
            return Err(CoreError::UnexpectedOrganismName(sample_number));
        }
        Ok(Self {
            sample_number,
            status,
            bacteria_name,
        })
    }

    /// Positive with an identified organism.
    pub fn is_confirmed_positive(&self) -> bool {
        self.status == CultureStatus::Positive && !self.bacteria_name.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlphaDefensinResult {
    Positive,
    Negative,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LeukocyteEsteraseResult {
    Negative,
    OnePlus,
    TwoPlus,
    ThreePlus,
}

/// Synovial fluid aspiration panel. Optional — aspiration is not always
/// performed before the assessment is scored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SynovialFluid {
    /// Leukocyte count, cells/µL.
    pub wbc_count: f64,
    /// Polymorphonuclear percentage, 0–100.
    pub pmn_percent: f64,
    pub alpha_defensin: AlphaDefensinResult,
    pub leukocyte_esterase: LeukocyteEsteraseResult,
}

/// The full clinical-findings record edited over a session. Every edit
/// replaces the record wholesale and triggers a fresh evaluation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalFindings {
    pub major: MajorCriteria,
    pub symptoms: Symptoms,
    pub culture_samples: Vec<CultureSample>,
    pub synovial_fluid: Option<SynovialFluid>,
    pub lab_panels: Vec<LabPanel>,
}

impl ClinicalFindings {
    /// Record seeded with the standard blood and fluid panels.
    pub fn with_default_panels() -> Self {
        Self {
            lab_panels: vec![LabPanel::blood_tests(), LabPanel::fluid_analysis()],
            ..Self::default()
        }
    }

    /// Check the structural invariants: unique sample numbers, organism
    /// names only on positive cultures. Callers reject edits that fail
    /// here; the evaluator itself assumes a valid record.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = Vec::with_capacity(self.culture_samples.len());
        for sample in &self.culture_samples {
            if seen.contains(&sample.sample_number) {
                return Err(CoreError::DuplicateSampleNumber(sample.sample_number));
            }
            seen.push(sample.sample_number);

            if sample.status == CultureStatus::Negative
                && !sample.bacteria_name.trim().is_empty()
            {
                return Err(CoreError::UnexpectedOrganismName(sample.sample_number));
            }
        }
        Ok(())
    }
}

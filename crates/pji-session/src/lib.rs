//! pji-session
//!
//! The in-memory patient record for one assessment session. The session
//! owns the findings and context, and every mutation goes through an
//! edit-validate-replace cycle followed by a synchronous re-evaluation
//! of the diagnosis. There is no global state and no persistence; the
//! session lives as long as the operator keeps it open.

use jiff::civil::Date;
use tracing::debug;

use pji_core::error::CoreError;
use pji_core::models::{
    ClinicalFindings, Diagnosis, LabTrendPoint, PathogenClass, PatientContext,
    PatientDemographics, TreatmentPlan,
};

/// Symptom onset within this many days of the index surgery classifies
/// the infection as acute.
const ACUTE_WINDOW_DAYS: i32 = 21;

/// Acute/chronic classification from the elapsed days between symptom
/// onset and the index surgery.
pub fn classify_onset(symptom_date: Date, surgery_date: Date) -> bool {
    let span = surgery_date - symptom_date;
    span.get_days().abs() < ACUTE_WINDOW_DAYS
}

pub struct PatientSession {
    demographics: PatientDemographics,
    context: PatientContext,
    findings: ClinicalFindings,
    lab_trends: Vec<LabTrendPoint>,
    diagnosis: Diagnosis,
    treatment: TreatmentPlan,
}

impl PatientSession {
    pub fn new() -> Self {
        let findings = ClinicalFindings::with_default_panels();
        let context = PatientContext::default();
        let diagnosis = pji_engine::evaluate(&findings, &context);
        Self {
            demographics: PatientDemographics::new(),
            context,
            findings,
            lab_trends: Vec::new(),
            diagnosis,
            treatment: pji_treatment::plan_for(PathogenClass::default()),
        }
    }

    pub fn demographics(&self) -> &PatientDemographics {
        &self.demographics
    }

    pub fn context(&self) -> &PatientContext {
        &self.context
    }

    pub fn findings(&self) -> &ClinicalFindings {
        &self.findings
    }

    pub fn lab_trends(&self) -> &[LabTrendPoint] {
        &self.lab_trends
    }

    pub fn diagnosis(&self) -> &Diagnosis {
        &self.diagnosis
    }

    pub fn treatment(&self) -> &TreatmentPlan {
        &self.treatment
    }

    /// Apply an edit to the demographics. BMI and the acute/chronic flag
    /// are re-derived, then the diagnosis is recomputed.
    pub fn update_demographics(&mut self, edit: impl FnOnce(&mut PatientDemographics)) {
        let mut next = self.demographics.clone();
        edit(&mut next);
        next.bmi = next.computed_bmi();
        if let (Some(symptom), Some(surgery)) = (next.symptom_date, next.surgery_date) {
            self.context.is_acute_infection = classify_onset(symptom, surgery);
        }
        self.demographics = next;
        self.reevaluate();
    }

    /// Apply an edit to the findings record. The edit runs on a copy;
    /// if the result violates a structural invariant the session is left
    /// untouched and the error is returned.
    pub fn update_findings(
        &mut self,
        edit: impl FnOnce(&mut ClinicalFindings),
    ) -> Result<(), CoreError> {
        let mut next = self.findings.clone();
        edit(&mut next);
        next.validate()?;
        self.findings = next;
        self.reevaluate();
        Ok(())
    }

    /// Select the pathogen class and swap in its canned regimen.
    pub fn set_pathogen(&mut self, pathogen: PathogenClass) {
        self.treatment = pji_treatment::plan_for(pathogen);
    }

    /// Record a point in the serial lab series, replacing any existing
    /// point with the same day label.
    pub fn record_lab_trend(&mut self, point: LabTrendPoint) {
        match self.lab_trends.iter_mut().find(|p| p.day == point.day) {
            Some(existing) => *existing = point,
            None => self.lab_trends.push(point),
        }
    }

    fn reevaluate(&mut self) {
        self.diagnosis = pji_engine::evaluate(&self.findings, &self.context);
        debug!(
            score = self.diagnosis.score,
            status = ?self.diagnosis.status,
            "diagnosis re-evaluated"
        );
    }
}

impl Default for PatientSession {
    fn default() -> Self {
        Self::new()
    }
}

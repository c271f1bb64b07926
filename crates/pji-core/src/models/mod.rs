pub mod demographics;
pub mod diagnosis;
pub mod findings;
pub mod labs;
pub mod treatment;

pub use demographics::{Comorbidities, ImplantNature, ImplantType, PatientDemographics};
pub use diagnosis::{Diagnosis, InfectionStatus, PatientContext};
pub use findings::{
    AlphaDefensinResult, ClinicalFindings, CultureSample, CultureStatus,
    LeukocyteEsteraseResult, MajorCriteria, Symptoms, SynovialFluid,
};
pub use labs::{AbnormalFlag, LabPanel, LabRow, LabTrendPoint};
pub use treatment::{PathogenClass, TreatmentPlan};

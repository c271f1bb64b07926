use pji_core::error::CoreError;
use pji_core::models::{ClinicalFindings, CultureSample, CultureStatus, PatientDemographics};

#[test]
fn negative_sample_rejects_organism_name() {
    let err = CultureSample::new(1, CultureStatus::Negative, "Staph aureus").unwrap_err();
    assert!(matches!(err, CoreError::UnexpectedOrganismName(1)));
}

#[test]
fn positive_sample_without_name_is_a_valid_in_progress_entry() {
    let sample = CultureSample::new(1, CultureStatus::Positive, "").unwrap();
    assert!(!sample.is_confirmed_positive());
}

#[test]
fn duplicate_sample_numbers_fail_validation() {
    let findings = ClinicalFindings {
        culture_samples: vec![
            CultureSample::new(1, CultureStatus::Positive, "Staph aureus").unwrap(),
            CultureSample::new(1, CultureStatus::Positive, "E. coli").unwrap(),
        ],
        ..ClinicalFindings::default()
    };
    let err = findings.validate().unwrap_err();
    assert!(matches!(err, CoreError::DuplicateSampleNumber(1)));
}

#[test]
fn distinct_sample_numbers_validate() {
    let findings = ClinicalFindings {
        culture_samples: vec![
            CultureSample::new(1, CultureStatus::Positive, "Staph aureus").unwrap(),
            CultureSample::new(2, CultureStatus::Negative, "").unwrap(),
        ],
        ..ClinicalFindings::default()
    };
    assert!(findings.validate().is_ok());
}

#[test]
fn default_panels_include_serology_rows() {
    let findings = ClinicalFindings::with_default_panels();
    let names: Vec<_> = findings
        .lab_panels
        .iter()
        .flat_map(|p| &p.rows)
        .map(|r| r.name.as_str())
        .collect();
    assert!(names.contains(&"CRP"));
    assert!(names.contains(&"ESR"));
}

#[test]
fn bmi_rounds_to_one_decimal() {
    let mut demographics = PatientDemographics::new();
    demographics.height = 175.0;
    demographics.weight = 80.0;
    assert_eq!(demographics.computed_bmi(), 26.1);
}

#[test]
fn bmi_is_zero_without_height() {
    let mut demographics = PatientDemographics::new();
    demographics.weight = 80.0;
    assert_eq!(demographics.computed_bmi(), 0.0);
}

use jiff::civil::date;

use pji_core::models::{
    AlphaDefensinResult, CultureSample, CultureStatus, InfectionStatus, LabTrendPoint,
    LeukocyteEsteraseResult, PathogenClass, SynovialFluid,
};
use pji_session::{classify_onset, PatientSession};

fn quiet_fluid() -> SynovialFluid {
    SynovialFluid {
        wbc_count: 0.0,
        pmn_percent: 0.0,
        alpha_defensin: AlphaDefensinResult::Negative,
        leukocyte_esterase: LeukocyteEsteraseResult::Negative,
    }
}

#[test]
fn fresh_session_starts_at_the_probability_floor() {
    let session = PatientSession::new();
    assert_eq!(session.diagnosis().score, 0.0);
    assert_eq!(session.diagnosis().probability, 5.0);
    assert_eq!(session.diagnosis().status, InfectionStatus::NotInfected);
}

#[test]
fn onset_within_three_weeks_is_acute() {
    assert!(classify_onset(date(2025, 3, 1), date(2025, 3, 10)));
    assert!(classify_onset(date(2025, 3, 10), date(2025, 3, 1)));
    assert!(!classify_onset(date(2025, 1, 1), date(2025, 3, 1)));
}

#[test]
fn editing_findings_recomputes_the_diagnosis() {
    let mut session = PatientSession::new();
    session
        .update_findings(|f| f.symptoms.sinus_tract = true)
        .unwrap();
    assert_eq!(session.diagnosis().status, InfectionStatus::Infected);
    assert_eq!(session.diagnosis().probability, 100.0);
}

#[test]
fn invalid_edit_is_rejected_and_leaves_the_session_untouched() {
    let mut session = PatientSession::new();
    let before = session.diagnosis().clone();

    let result = session.update_findings(|f| {
        f.culture_samples = vec![
            CultureSample {
                sample_number: 1,
                status: CultureStatus::Positive,
                bacteria_name: "Staph aureus".to_string(),
            },
            CultureSample {
                sample_number: 1,
                status: CultureStatus::Positive,
                bacteria_name: "E. coli".to_string(),
            },
        ];
    });

    assert!(result.is_err());
    assert!(session.findings().culture_samples.is_empty());
    assert_eq!(session.diagnosis(), &before);
}

#[test]
fn date_edits_flip_the_acute_flag_and_reevaluate() {
    let mut session = PatientSession::new();

    // Chronic by default: a WBC of 9000 fires against the 3000 cutoff.
    session
        .update_findings(|f| {
            f.synovial_fluid = Some(SynovialFluid {
                wbc_count: 9000.0,
                ..quiet_fluid()
            })
        })
        .unwrap();
    assert_eq!(session.diagnosis().score, 3.0);

    // Onset ten days after surgery reclassifies as acute; the same WBC
    // no longer clears the 10000 cutoff.
    session.update_demographics(|d| {
        d.surgery_date = Some(date(2025, 3, 1));
        d.symptom_date = Some(date(2025, 3, 11));
    });
    assert!(session.context().is_acute_infection);
    assert_eq!(session.diagnosis().score, 0.0);
}

#[test]
fn demographic_edits_derive_bmi() {
    let mut session = PatientSession::new();
    session.update_demographics(|d| {
        d.height = 175.0;
        d.weight = 80.0;
    });
    assert_eq!(session.demographics().bmi, 26.1);
}

#[test]
fn pathogen_selection_swaps_the_regimen() {
    let mut session = PatientSession::new();
    assert_eq!(session.treatment().iv_drug, "Vancomycin + Cefepime");

    session.set_pathogen(PathogenClass::Mrsa);
    assert_eq!(session.treatment().iv_drug, "Daptomycin");
}

#[test]
fn lab_trend_points_replace_by_day_label() {
    let mut session = PatientSession::new();
    session.record_lab_trend(LabTrendPoint {
        day: "Day 1".to_string(),
        wbc: Some(12.1),
        neu: Some(82.0),
        esr: Some(45.0),
        crp: Some(145.0),
    });
    session.record_lab_trend(LabTrendPoint {
        day: "Day 1".to_string(),
        wbc: Some(9.8),
        neu: None,
        esr: None,
        crp: Some(85.0),
    });

    assert_eq!(session.lab_trends().len(), 1);
    assert_eq!(session.lab_trends()[0].wbc, Some(9.8));
}

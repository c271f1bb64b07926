use pji_core::models::PathogenClass;
use pji_treatment::plan_for;

#[test]
fn mrsa_gets_daptomycin_with_rifampin_combination() {
    let plan = plan_for(PathogenClass::Mrsa);
    assert_eq!(plan.iv_drug, "Daptomycin");
    assert!(plan.oral_drug.contains("Rifampin"));
    assert!(plan.citation.contains("biofilm"));
}

#[test]
fn mssa_gets_cefazolin() {
    let plan = plan_for(PathogenClass::Mssa);
    assert_eq!(plan.iv_drug, "Cefazolin");
    assert!(plan.oral_drug.contains("Levofloxacin"));
}

#[test]
fn unidentified_pathogens_get_broad_spectrum_coverage() {
    for pathogen in [
        PathogenClass::CultureNegative,
        PathogenClass::Visa,
        PathogenClass::GramNegative,
    ] {
        let plan = plan_for(pathogen);
        assert_eq!(plan.iv_drug, "Vancomycin + Cefepime");
        assert_eq!(plan.pathogen, pathogen);
    }
}

#[test]
fn lookup_is_deterministic() {
    assert_eq!(
        plan_for(PathogenClass::Mrsa).citation,
        plan_for(PathogenClass::Mrsa).citation
    );
}

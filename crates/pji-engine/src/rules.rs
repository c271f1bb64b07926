//! Minor-criteria rule table.
//!
//! The clinical weights and thresholds here are an evolving rule set, so
//! they live in one data table rather than hard-coded branches: each rule
//! is an identifier, a weight, and a predicate that returns the reasoning
//! line when it fires. Reordering or reweighting is a table edit.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pji_core::models::{
    AlphaDefensinResult, ClinicalFindings, LeukocyteEsteraseResult, PatientContext,
};

use crate::labs::parse_number;

/// CRP above this value (mg/L) counts as elevated serology.
const CRP_ELEVATED: f64 = 10.0;
/// ESR above this value (mm/h) counts as elevated serology.
const ESR_ELEVATED: f64 = 30.0;

const SYNOVIAL_WBC_ACUTE: f64 = 10000.0;
const SYNOVIAL_WBC_CHRONIC: f64 = 3000.0;
const PMN_ACUTE: f64 = 90.0;
const PMN_CHRONIC: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RuleId {
    SerologyElevated,
    SynovialWbc,
    SynovialPmn,
    AlphaDefensin,
    LeukocyteEsterase,
}

/// One minor criterion. `fire` returns the reasoning line when the rule
/// matches, `None` when it does not match or its data is absent.
pub struct MinorRule {
    pub id: RuleId,
    pub weight: f64,
    pub fire: fn(&ClinicalFindings, &PatientContext) -> Option<String>,
}

/// The canonical minor-criteria table. Evaluation order is the table
/// order and the reasoning list preserves it.
pub const MINOR_RULES: &[MinorRule] = &[
    MinorRule {
        id: RuleId::SerologyElevated,
        weight: 2.0,
        fire: serology_elevated,
    },
    MinorRule {
        id: RuleId::SynovialWbc,
        weight: 3.0,
        fire: synovial_wbc,
    },
    MinorRule {
        id: RuleId::SynovialPmn,
        weight: 2.0,
        fire: synovial_pmn,
    },
    MinorRule {
        id: RuleId::AlphaDefensin,
        weight: 3.0,
        fire: alpha_defensin,
    },
    MinorRule {
        id: RuleId::LeukocyteEsterase,
        weight: 3.0,
        fire: leukocyte_esterase,
    },
];

fn serology_elevated(findings: &ClinicalFindings, _context: &PatientContext) -> Option<String> {
    let elevated = findings
        .lab_panels
        .iter()
        .flat_map(|panel| &panel.rows)
        .any(|row| {
            let name = row.name.to_lowercase();
            let Some(value) = parse_number(&row.result) else {
                return false;
            };
            (name.contains("crp") && value > CRP_ELEVATED)
                || (name.contains("esr") && value > ESR_ELEVATED)
        });
    elevated.then(|| "Elevated CRP (>10 mg/L)".to_string())
}

fn synovial_wbc(findings: &ClinicalFindings, context: &PatientContext) -> Option<String> {
    let fluid = findings.synovial_fluid.as_ref()?;
    let threshold = if context.is_acute_infection {
        SYNOVIAL_WBC_ACUTE
    } else {
        SYNOVIAL_WBC_CHRONIC
    };
    (fluid.wbc_count > threshold).then(|| format!("Synovial WBC > {threshold}"))
}

fn synovial_pmn(findings: &ClinicalFindings, context: &PatientContext) -> Option<String> {
    let fluid = findings.synovial_fluid.as_ref()?;
    let threshold = if context.is_acute_infection {
        PMN_ACUTE
    } else {
        PMN_CHRONIC
    };
    (fluid.pmn_percent > threshold).then(|| format!("PMN% > {threshold}%"))
}

fn alpha_defensin(findings: &ClinicalFindings, _context: &PatientContext) -> Option<String> {
    let fluid = findings.synovial_fluid.as_ref()?;
    (fluid.alpha_defensin == AlphaDefensinResult::Positive)
        .then(|| "Alpha-defensin positive".to_string())
}

fn leukocyte_esterase(findings: &ClinicalFindings, _context: &PatientContext) -> Option<String> {
    let fluid = findings.synovial_fluid.as_ref()?;
    matches!(
        fluid.leukocyte_esterase,
        LeukocyteEsteraseResult::TwoPlus | LeukocyteEsteraseResult::ThreePlus
    )
    .then(|| "Leukocyte esterase ++".to_string())
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A single laboratory test row as entered by the operator. `result` and
/// `normal_range` are free text; numeric interpretation happens in the
/// engine and degrades to "no signal" when the text does not parse.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabRow {
    pub id: Uuid,
    pub name: String,
    pub result: String,
    pub normal_range: String,
    pub unit: String,
}

impl LabRow {
    pub fn new(
        name: impl Into<String>,
        normal_range: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            result: String::new(),
            normal_range: normal_range.into(),
            unit: unit.into(),
        }
    }
}

/// A named group of lab rows (blood tests, fluid analysis).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabPanel {
    pub name: String,
    pub rows: Vec<LabRow>,
}

impl LabPanel {
    /// The standard serology panel drawn at intake.
    pub fn blood_tests() -> Self {
        Self {
            name: "Blood Tests".to_string(),
            rows: vec![
                LabRow::new("WBC", "4.0 - 10.0", "G/L"),
                LabRow::new("Neutrophils", "43 - 76", "%"),
                LabRow::new("ESR", "< 20", "mm/h"),
                LabRow::new("CRP", "0 - 5", "mg/l"),
            ],
        }
    }

    /// Joint-fluid chemistry panel.
    pub fn fluid_analysis() -> Self {
        Self {
            name: "Fluid Analysis".to_string(),
            rows: vec![
                LabRow::new("Cell count", "", "cells/µL"),
                LabRow::new("Glucose", "", "mmol/l"),
                LabRow::new("CRP (fluid)", "", "mg/l"),
            ],
        }
    }
}

/// Display flag for a lab result relative to its normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AbnormalFlag {
    Low,
    High,
}

/// One point in the serial pre/post-op lab series shown on the analytics
/// page. Missing draws are `None`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabTrendPoint {
    pub day: String,
    pub wbc: Option<f64>,
    pub neu: Option<f64>,
    pub esr: Option<f64>,
    pub crp: Option<f64>,
}

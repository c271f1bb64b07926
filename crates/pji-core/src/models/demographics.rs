use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImplantType {
    /// Total hip arthroplasty.
    Tha,
    /// Total knee arthroplasty.
    Tka,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImplantNature {
    Primary,
    Revision,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Comorbidities {
    pub diabetes: bool,
    pub smoking: bool,
    pub immunosuppression: bool,
    pub prior_infection: bool,
    pub malnutrition: bool,
    pub liver_disease: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientDemographics {
    pub id: Uuid,
    pub name: String,
    pub mrn: String,
    pub dob: Option<jiff::civil::Date>,
    pub gender: String,
    /// Centimeters.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    /// Derived from height and weight, one decimal place.
    pub bmi: f64,
    pub surgery_date: Option<jiff::civil::Date>,
    pub symptom_date: Option<jiff::civil::Date>,
    pub implant_type: ImplantType,
    pub fixation_type: String,
    pub implant_nature: ImplantNature,
    pub comorbidities: Comorbidities,
    pub medical_history: String,
}

impl PatientDemographics {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            mrn: String::new(),
            dob: None,
            gender: String::new(),
            height: 0.0,
            weight: 0.0,
            bmi: 0.0,
            surgery_date: None,
            symptom_date: None,
            implant_type: ImplantType::Tha,
            fixation_type: String::new(),
            implant_nature: ImplantNature::Primary,
            comorbidities: Comorbidities::default(),
            medical_history: String::new(),
        }
    }

    /// BMI from height in cm and weight in kg, rounded to one decimal.
    /// Zero when height is not yet entered.
    pub fn computed_bmi(&self) -> f64 {
        if self.height <= 0.0 || self.weight <= 0.0 {
            return 0.0;
        }
        let meters = self.height / 100.0;
        let bmi = self.weight / (meters * meters);
        (bmi * 10.0).round() / 10.0
    }
}

impl Default for PatientDemographics {
    fn default() -> Self {
        Self::new()
    }
}

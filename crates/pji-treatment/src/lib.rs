//! pji-treatment
//!
//! Canned antibiotic regimen advisor. Pure data — each pathogen class
//! maps to a fixed IV/oral regimen with pre-authored guideline text.
//! There is no inference here; the "citation" is static content.

use pji_core::models::{PathogenClass, TreatmentPlan};

/// Fixed confidence figure carried for display next to the regimen card.
const ADVISOR_CONFIDENCE: f64 = 87.0;

/// Look up the regimen for a pathogen class. Total: unclassified or
/// culture-negative pathogens get the broad-spectrum fallback.
pub fn plan_for(pathogen: PathogenClass) -> TreatmentPlan {
    match pathogen {
        PathogenClass::Mrsa => TreatmentPlan {
            pathogen,
            resistance: "Methicillin-resistant".to_string(),
            iv_drug: "Daptomycin".to_string(),
            iv_dosage: "6-8 mg/kg IV".to_string(),
            iv_duration: "2-4 weeks".to_string(),
            oral_drug: "Rifampin + Ciprofloxacin".to_string(),
            oral_dosage: "450 mg BID + 750 mg BID".to_string(),
            oral_duration: "3-6 months".to_string(),
            citation: "For MRSA PJI with vancomycin MIC > 1.5 mcg/mL, daptomycin is \
                       recommended as the primary IV agent to avoid treatment failure. \
                       Rifampin combination is essential for biofilm penetration on \
                       retained hardware."
                .to_string(),
            confidence: ADVISOR_CONFIDENCE,
        },
        PathogenClass::Mssa => TreatmentPlan {
            pathogen,
            resistance: "Methicillin-susceptible".to_string(),
            iv_drug: "Cefazolin".to_string(),
            iv_dosage: "2 g IV q8h".to_string(),
            iv_duration: "2 weeks".to_string(),
            oral_drug: "Rifampin + Levofloxacin".to_string(),
            oral_dosage: "450 mg BID + 750 mg daily".to_string(),
            oral_duration: "3-6 months".to_string(),
            citation: "For MSSA PJI, cefazolin or nafcillin is the gold standard. \
                       Rifampin is added for its activity against biofilm."
                .to_string(),
            confidence: ADVISOR_CONFIDENCE,
        },
        // Broad-spectrum coverage until an organism is identified.
        PathogenClass::Visa | PathogenClass::GramNegative | PathogenClass::CultureNegative => {
            TreatmentPlan {
                pathogen,
                resistance: "Unknown".to_string(),
                iv_drug: "Vancomycin + Cefepime".to_string(),
                iv_dosage: "Broad-spectrum protocol".to_string(),
                iv_duration: "4-6 weeks".to_string(),
                oral_drug: "Await susceptibility results".to_string(),
                oral_dosage: String::new(),
                oral_duration: String::new(),
                citation: "For culture-negative PJI, broad coverage of MRSA and \
                           gram-negative organisms is required until an organism is \
                           identified."
                    .to_string(),
                confidence: ADVISOR_CONFIDENCE,
            }
        }
    }
}

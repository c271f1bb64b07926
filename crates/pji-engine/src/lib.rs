//! pji-engine
//!
//! The diagnostic scoring engine: a deterministic rule evaluator mapping a
//! clinical-findings record plus patient context to a diagnosis. Pure
//! functions only — no I/O, no state between calls. Every edit to the
//! findings record triggers a full re-evaluation from scratch.

pub mod labs;
pub mod rules;

use pji_core::models::{ClinicalFindings, Diagnosis, InfectionStatus, PatientContext};

/// Score at which the classification flips to Infected.
const INFECTED_SCORE: f64 = 6.0;
/// Score at which the classification becomes Inconclusive.
const INCONCLUSIVE_SCORE: f64 = 4.0;

/// Evaluate a findings record. Total over well-typed input: an empty
/// record scores zero and comes back Not Infected at the probability
/// floor, never an error.
pub fn evaluate(findings: &ClinicalFindings, context: &PatientContext) -> Diagnosis {
    // Major criteria override everything else.
    if findings.symptoms.sinus_tract || findings.major.two_positive_cultures {
        return Diagnosis {
            score: 99.0,
            probability: 100.0,
            status: InfectionStatus::Infected,
            reasoning: vec!["Major criterion: sinus tract or two positive cultures".to_string()],
        };
    }

    // Two or more positive cultures with identified organisms are
    // likewise diagnostic on their own.
    let positives: Vec<_> = findings
        .culture_samples
        .iter()
        .filter(|s| s.is_confirmed_positive())
        .collect();
    if positives.len() >= 2 {
        let mut organisms: Vec<&str> = Vec::new();
        for sample in &positives {
            let name = sample.bacteria_name.as_str();
            if !organisms.contains(&name) {
                organisms.push(name);
            }
        }
        return Diagnosis {
            score: 99.0,
            probability: 95.0,
            status: InfectionStatus::Infected,
            reasoning: vec![
                format!("Major criterion: {} positive culture samples", positives.len()),
                format!("Organisms: {}", organisms.join(", ")),
            ],
        };
    }

    // Minor criteria accumulate in table order; rules whose data is
    // missing or unparseable contribute nothing.
    let mut score = 0.0;
    let mut reasoning = Vec::new();
    for rule in rules::MINOR_RULES {
        if let Some(message) = (rule.fire)(findings, context) {
            score += rule.weight;
            reasoning.push(message);
        }
    }

    let status = if score >= INFECTED_SCORE {
        InfectionStatus::Infected
    } else if score >= INCONCLUSIVE_SCORE {
        InfectionStatus::Inconclusive
    } else {
        InfectionStatus::NotInfected
    };

    // The emitted probability always follows the score formula; the
    // bucket classification above does not feed into it.
    let probability = (score / 10.0 * 100.0).clamp(5.0, 99.0);

    Diagnosis {
        score,
        probability,
        status,
        reasoning,
    }
}

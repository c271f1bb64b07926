//! pji-core
//!
//! Pure domain types for the PJI assessment tool: patient demographics,
//! clinical findings, lab panels, diagnosis, and treatment plan. No I/O —
//! this is the shared vocabulary of the system.

pub mod error;
pub mod models;

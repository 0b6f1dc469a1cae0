//! vigie-core
//!
//! Pure domain types for the preventive-care engine: the intake profile and
//! its lenient normalisation, derived metrics, risk flags and recommendation
//! records. No I/O. This is the shared vocabulary of the Vigie system.

pub mod error;
pub mod lenient;
pub mod models;

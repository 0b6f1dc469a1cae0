#![allow(dead_code)]

use jiff::civil::{Date, date};
use serde_json::Value;
use vigie_core::models::intake::IntakeProfile;
use vigie_core::models::recommendation::Recommendation;

/// Fixed evaluation date so quit-date arithmetic is reproducible.
pub fn as_of() -> Date {
    date(2026, 1, 15)
}

pub fn profile(json: Value) -> IntakeProfile {
    IntakeProfile::from_value(json).expect("test intake should be an object")
}

pub fn find<'a>(recs: &'a [Recommendation], id: &str) -> Option<&'a Recommendation> {
    recs.iter().find(|r| r.id == id)
}

pub fn ids(recs: &[Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.id.as_str()).collect()
}

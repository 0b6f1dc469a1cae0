use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One actionable screening or prevention suggestion.
///
/// Built once by a rule and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    /// Stable identifier, identical across runs for the same rule outcome.
    pub id: String,
    pub name: String,
    pub category: Category,
    pub interval: String,
    pub age_start: i32,
    pub age_end: i32,
    pub priority: Priority,
    pub evidence_level: String,
    pub source: String,
    pub reasoning: String,
    pub note: Option<String>,
}

impl Recommendation {
    /// A record is only publishable with a name, an interval and a source.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.interval.trim().is_empty()
            && !self.source.trim().is_empty()
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority >= Priority::HIGH
    }
}

/// Urgency rank from 1 (lowest) to 5 (most urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Priority(u8);

impl Priority {
    pub const ROUTINE: Priority = Priority(3);
    pub const HIGH: Priority = Priority(4);
    pub const URGENT: Priority = Priority(5);

    /// Clamp into the 1..=5 range.
    pub fn new(value: u8) -> Self {
        Priority(value.clamp(1, 5))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Priority {
    fn from(value: u8) -> Self {
        Priority::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Cancer,
    Cardiovascular,
    Metabolic,
    BoneHealth,
    Dental,
    Vaccination,
    EyeHealth,
    Genetics,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cancer => "cancer",
            Category::Cardiovascular => "cardiovascular",
            Category::Metabolic => "metabolic",
            Category::BoneHealth => "bone_health",
            Category::Dental => "dental",
            Category::Vaccination => "vaccination",
            Category::EyeHealth => "eye_health",
            Category::Genetics => "genetics",
        }
    }
}

use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use super::{LIFELONG, join_labels};
use crate::{Rule, RuleInput};

/// Risk count from which screening becomes yearly.
const ANNUAL_RISK_COUNT: u8 = 3;

/// Type 2 diabetes screening driven by the diabetes risk count.
pub struct DiabetesScreening;

impl Rule for DiabetesScreening {
    fn id(&self) -> &str {
        "diabetes-screening"
    }

    fn name(&self) -> &str {
        "Type 2 diabetes screening (fasting glucose and/or HbA1c)"
    }

    fn category(&self) -> Category {
        Category::Metabolic
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let flags = input.flags;
        let count = flags.diabetes_risk_count;
        if count == 0 {
            return None;
        }

        let high = count >= ANNUAL_RISK_COUNT;

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: if high { "Annual" } else { "Every 3 years" }.to_string(),
            age_start: 40,
            age_end: LIFELONG,
            priority: if high {
                Priority::HIGH
            } else {
                Priority::ROUTINE
            },
            evidence_level: "Recommendation (HAS)".to_string(),
            source: "HAS – Type 2 diabetes screening".to_string(),
            reasoning: format!(
                "{count} risk factor(s) identified: {}.",
                join_labels(flags.diabetes_risk_factors.iter().map(|f| f.label()))
            ),
            note: high.then(|| "High risk of diabetes".to_string()),
        })
    }
}

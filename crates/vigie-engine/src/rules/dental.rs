use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use super::LIFELONG;
use crate::{Rule, RuleInput};

pub struct DentalCheckup;

impl Rule for DentalCheckup {
    fn id(&self) -> &str {
        "dental-checkup"
    }

    fn name(&self) -> &str {
        "Dental examination and scaling"
    }

    fn category(&self) -> Category {
        Category::Dental
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        if input.profile.age < 3 {
            return None;
        }

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "Annual (every 6 months with gum or tooth disease)".to_string(),
            age_start: 3,
            age_end: LIFELONG,
            priority: Priority::ROUTINE,
            evidence_level: "Recommendation (UFSBD/HAS)".to_string(),
            source: "UFSBD – Oral health prevention".to_string(),
            reasoning: "Regular dental examination prevents caries and periodontal disease."
                .to_string(),
            note: input
                .metrics
                .is_active_smoker()
                .then(|| "Tobacco increases the risk of periodontal disease".to_string()),
        })
    }
}

use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use super::LIFELONG;
use crate::{Rule, RuleInput};

/// Bone densitometry for menopausal women, earlier after an early menopause.
pub struct OsteoporosisScreening;

impl Rule for OsteoporosisScreening {
    fn id(&self) -> &str {
        "osteoporosis-screening"
    }

    fn name(&self) -> &str {
        "Osteoporosis screening (bone densitometry)"
    }

    fn category(&self) -> Category {
        Category::BoneHealth
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let profile = input.profile;
        if !profile.is_female() || (profile.menopause_age <= 0 && profile.age < 65) {
            return None;
        }

        let early = input.metrics.early_menopause;

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: if early {
                "To be discussed from menopause".to_string()
            } else {
                "From age 65 or earlier with risk factors".to_string()
            },
            age_start: if early { profile.menopause_age } else { 65 },
            age_end: LIFELONG,
            priority: if early {
                Priority::HIGH
            } else {
                Priority::ROUTINE
            },
            evidence_level: "Recommendation (HAS)".to_string(),
            source: "HAS – Osteoporosis prevention".to_string(),
            reasoning: if early {
                "Early menopause reported. Increased risk of osteoporosis.".to_string()
            } else {
                "Systematic screening for postmenopausal women after 65.".to_string()
            },
            note: early.then(|| "Early menopause: osteoporosis risk".to_string()),
        })
    }
}

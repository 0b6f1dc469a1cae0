use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use crate::{Rule, RuleInput};

/// Cytology up to 30, HPV testing from 30 to 65.
pub struct CervicalScreening;

impl Rule for CervicalScreening {
    fn id(&self) -> &str {
        "cervical-screening"
    }

    fn name(&self) -> &str {
        "Cervical cancer screening"
    }

    fn category(&self) -> Category {
        Category::Cancer
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let profile = input.profile;
        if !profile.is_female() || !(25..=65).contains(&profile.age) {
            return None;
        }

        let cytology = profile.age <= 30;

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: if cytology {
                "Every 3 years (cytology)".to_string()
            } else {
                "Every 5 years (HPV test)".to_string()
            },
            age_start: 25,
            age_end: 65,
            priority: Priority::HIGH,
            evidence_level: "Strong recommendation (HAS)".to_string(),
            source: "HAS – Organised cervical cancer screening".to_string(),
            reasoning: if cytology {
                "Cervical cytology every 3 years after two normal smears one year apart."
                    .to_string()
            } else {
                "HPV testing every 5 years from 30 to 65.".to_string()
            },
            note: None,
        })
    }
}

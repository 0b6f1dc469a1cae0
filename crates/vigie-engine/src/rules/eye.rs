use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use super::LIFELONG;
use crate::{Rule, RuleInput};

pub struct EyeExam;

impl Rule for EyeExam {
    fn id(&self) -> &str {
        "eye-exam"
    }

    fn name(&self) -> &str {
        "Ophthalmologic examination"
    }

    fn category(&self) -> Category {
        Category::EyeHealth
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let profile = input.profile;
        if profile.age < 40 && !profile.diabetes {
            return None;
        }

        let interval = if profile.diabetes {
            "Annual (fundus examination)"
        } else if profile.age >= 60 {
            "Every 2 years"
        } else {
            "Every 5 years"
        };

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: interval.to_string(),
            age_start: 40,
            age_end: LIFELONG,
            priority: if profile.diabetes {
                Priority::HIGH
            } else {
                Priority::ROUTINE
            },
            evidence_level: "Recommendation (SFO)".to_string(),
            source: "Société Française d'Ophtalmologie".to_string(),
            reasoning: if profile.diabetes {
                "Diabetes reported. Yearly fundus examination to detect diabetic retinopathy."
                    .to_string()
            } else {
                "Screening for glaucoma, macular degeneration and other eye conditions."
                    .to_string()
            },
            note: profile
                .diabetes
                .then(|| "Diabetes: yearly fundus examination essential".to_string()),
        })
    }
}

use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use crate::{Rule, RuleInput};

/// Shared-decision PSA screening; starts five years earlier with family history.
pub struct ProstateScreening;

impl Rule for ProstateScreening {
    fn id(&self) -> &str {
        "prostate-screening"
    }

    fn name(&self) -> &str {
        "Prostate cancer screening (PSA and digital rectal exam)"
    }

    fn category(&self) -> Category {
        Category::Cancer
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let profile = input.profile;
        let family = input.metrics.family_cancer.prostate >= 1;
        let start = if family { 45 } else { 50 };
        if !profile.is_male() || !(start..=70).contains(&profile.age) {
            return None;
        }

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "Every 2–4 years – shared decision with your physician".to_string(),
            age_start: start,
            age_end: 70,
            priority: if family {
                Priority::HIGH
            } else {
                Priority::ROUTINE
            },
            evidence_level: "Individual recommendation (HAS)".to_string(),
            source: "HAS – Prostate cancer screening".to_string(),
            reasoning: if family {
                "Family history of prostate cancer. Screening to be discussed from age 45."
                    .to_string()
            } else {
                "Individualised screening. Discuss benefits and risks with your physician."
                    .to_string()
            },
            note: Some(if family {
                "Familial risk: start from age 45".to_string()
            } else {
                "Shared patient–physician decision".to_string()
            }),
        })
    }
}

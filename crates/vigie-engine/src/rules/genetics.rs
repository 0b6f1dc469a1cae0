//! Genetic-counseling referrals driven by hereditary alerts.

use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use super::LIFELONG;
use crate::{Rule, RuleInput};

pub struct BreastOvarianCounseling;

impl Rule for BreastOvarianCounseling {
    fn id(&self) -> &str {
        "genetic-counseling-breast-ovarian"
    }

    fn name(&self) -> &str {
        "Oncogenetics consultation (hereditary breast/ovarian risk)"
    }

    fn category(&self) -> Category {
        Category::Genetics
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        if input.profile.age < 18 {
            return None;
        }
        let criterion = input.flags.breast_ovarian_alert?;

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "Once, then follow-up set by the geneticist".to_string(),
            age_start: 18,
            age_end: LIFELONG,
            priority: Priority::URGENT,
            evidence_level: "Hereditary risk criteria (INCa)".to_string(),
            source: "INCa – Referral criteria for hereditary breast and ovarian cancer"
                .to_string(),
            reasoning: format!(
                "Family pattern suggesting a hereditary predisposition: {}.",
                criterion.describe()
            ),
            note: Some("BRCA1/BRCA2 testing may be offered after consultation".to_string()),
        })
    }
}

pub struct ColorectalCounseling;

impl Rule for ColorectalCounseling {
    fn id(&self) -> &str {
        "genetic-counseling-colorectal"
    }

    fn name(&self) -> &str {
        "Oncogenetics consultation (hereditary colorectal risk)"
    }

    fn category(&self) -> Category {
        Category::Genetics
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        if input.profile.age < 18 {
            return None;
        }
        let criterion = input.flags.colorectal_alert?;

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "Once, then follow-up set by the geneticist".to_string(),
            age_start: 18,
            age_end: LIFELONG,
            priority: Priority::URGENT,
            evidence_level: "Hereditary risk criteria (INCa/SNFGE)".to_string(),
            source: "INCa – Referral criteria for Lynch syndrome and familial colorectal cancer"
                .to_string(),
            reasoning: format!(
                "Family pattern suggesting a hereditary predisposition: {}.",
                criterion.describe()
            ),
            note: Some("Screening for Lynch syndrome may be offered".to_string()),
        })
    }
}

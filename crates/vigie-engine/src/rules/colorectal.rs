use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use crate::{Rule, RuleInput};

/// Colonoscopy from 45 when colorectal cancer runs in the family.
pub struct ColorectalHighRisk;

impl Rule for ColorectalHighRisk {
    fn id(&self) -> &str {
        "colorectal-high-risk"
    }

    fn name(&self) -> &str {
        "Surveillance colonoscopy (familial risk)"
    }

    fn category(&self) -> Category {
        Category::Cancer
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let age = input.profile.age;
        let relatives = input.metrics.family_cancer.colorectal;
        if relatives == 0 || !(45..=75).contains(&age) {
            return None;
        }

        let mut reasoning = format!(
            "Family history of colorectal cancer ({relatives} relative(s)). \
             Colonoscopy is preferred over the FIT test."
        );
        if let Some(criterion) = input.flags.colorectal_alert {
            reasoning.push_str(&format!(" Hereditary pattern: {}.", criterion.describe()));
        }

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "Every 5 years or as advised by the gastroenterologist".to_string(),
            age_start: 45,
            age_end: 75,
            priority: Priority::URGENT,
            evidence_level: "Familial risk (HAS/SNFGE)".to_string(),
            source: "HAS/SNFGE – Surveillance of people at increased risk".to_string(),
            reasoning,
            note: Some("Family history: colonoscopy recommended from age 45".to_string()),
        })
    }
}

/// Organised FIT screening from 50 to 74 without familial risk.
pub struct ColorectalStandard;

impl Rule for ColorectalStandard {
    fn id(&self) -> &str {
        "colorectal-standard"
    }

    fn name(&self) -> &str {
        "Colorectal cancer screening (FIT test)"
    }

    fn category(&self) -> Category {
        Category::Cancer
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        if input.metrics.family_cancer.colorectal > 0 || !(50..=74).contains(&input.profile.age) {
            return None;
        }

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "Every 2 years".to_string(),
            age_start: 50,
            age_end: 74,
            priority: Priority::HIGH,
            evidence_level: "Strong recommendation (HAS)".to_string(),
            source: "HAS – Organised colorectal cancer screening".to_string(),
            reasoning: "Faecal immunochemical test (FIT) every 2 years; \
                        a positive result leads to a diagnostic colonoscopy."
                .to_string(),
            note: None,
        })
    }
}

use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use super::join_labels;
use crate::{Rule, RuleInput};

/// Years of hormonal contraception from which breast risk is considered raised.
const LONG_CONTRACEPTION_YEARS: i32 = 10;

/// Organised screening for women aged 50–74.
pub struct MammographyStandard;

impl Rule for MammographyStandard {
    fn id(&self) -> &str {
        "mammography-standard"
    }

    fn name(&self) -> &str {
        "Screening mammography"
    }

    fn category(&self) -> Category {
        Category::Cancer
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let profile = input.profile;
        if !profile.is_female() || !(50..=74).contains(&profile.age) {
            return None;
        }

        let breast_family = input.metrics.family_cancer.breast >= 1;

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "Every 2 years".to_string(),
            age_start: 50,
            age_end: 74,
            priority: if breast_family {
                Priority::URGENT
            } else {
                Priority::HIGH
            },
            evidence_level: "Strong recommendation (HAS)".to_string(),
            source: "HAS – Organised breast cancer screening programme".to_string(),
            reasoning: "National organised screening for all women aged 50 to 74.".to_string(),
            note: breast_family.then(|| {
                "Family history of breast cancer detected: reinforced surveillance recommended"
                    .to_string()
            }),
        })
    }
}

/// Annual surveillance from 40 when breast or ovarian cancer runs in the family.
pub struct MammographyHighRisk;

impl Rule for MammographyHighRisk {
    fn id(&self) -> &str {
        "mammography-high-risk"
    }

    fn name(&self) -> &str {
        "Reinforced breast cancer surveillance (high risk)"
    }

    fn category(&self) -> Category {
        Category::Cancer
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let profile = input.profile;
        let family = &input.metrics.family_cancer;
        if !profile.is_female() || profile.age < 40 || (family.breast == 0 && family.ovarian == 0)
        {
            return None;
        }

        let mut reasoning = format!(
            "Family history of breast or ovarian cancer ({} breast, {} ovarian). \
             Consider an oncogenetics consultation.",
            family.breast, family.ovarian
        );
        if let Some(criterion) = input.flags.breast_ovarian_alert {
            reasoning.push_str(&format!(" Hereditary pattern: {}.", criterion.describe()));
        }

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "Annual – to be discussed with an oncologist or geneticist".to_string(),
            age_start: 40,
            age_end: 75,
            priority: Priority::URGENT,
            evidence_level: "Familial risk (INCa/HAS)".to_string(),
            source: "INCa – Surveillance of people at high risk of breast cancer".to_string(),
            reasoning,
            note: Some("High priority: specialist consultation recommended".to_string()),
        })
    }
}

/// Individual discussion before 50 when moderate risk factors are present.
pub struct MammographyModerateRisk;

impl Rule for MammographyModerateRisk {
    fn id(&self) -> &str {
        "mammography-moderate-risk"
    }

    fn name(&self) -> &str {
        "Mammography before 50 (risk factors)"
    }

    fn category(&self) -> Category {
        Category::Cancer
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let profile = input.profile;
        if !profile.is_female() || !(45..50).contains(&profile.age) {
            return None;
        }

        let factors: Vec<&str> = [
            ("nulliparity", profile.pregnancies == 0),
            (
                "prolonged hormonal contraception",
                profile.hormonal_contraception_years >= LONG_CONTRACEPTION_YEARS,
            ),
            ("hormone replacement therapy", profile.hormonal_treatment),
        ]
        .into_iter()
        .filter_map(|(label, present)| present.then_some(label))
        .collect();

        if factors.is_empty() {
            return None;
        }

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "To be discussed with your physician".to_string(),
            age_start: 45,
            age_end: 50,
            priority: Priority::ROUTINE,
            evidence_level: "Individual recommendation (HAS)".to_string(),
            source: "HAS – Moderate breast cancer risk factors".to_string(),
            reasoning: format!("Risk factors identified: {}.", join_labels(factors)),
            note: None,
        })
    }
}

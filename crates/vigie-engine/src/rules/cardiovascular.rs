use vigie_core::models::recommendation::{Category, Priority, Recommendation};
use vigie_core::models::risk::CvTier;

use super::{LIFELONG, join_labels};
use crate::{Rule, RuleInput};

/// Factor count from which the lipid profile moves to a yearly check.
const LIPID_ANNUAL_FACTOR_COUNT: u8 = 3;

fn factor_labels(input: &RuleInput<'_>) -> String {
    join_labels(input.metrics.cv_risk_factors.iter().map(|f| f.label()))
}

/// Blood pressure measurement for every adult; tightened with any CV factor.
pub struct BloodPressure;

impl Rule for BloodPressure {
    fn id(&self) -> &str {
        "blood-pressure"
    }

    fn name(&self) -> &str {
        "Blood pressure measurement"
    }

    fn category(&self) -> Category {
        Category::Cardiovascular
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        if input.profile.age < 18 {
            return None;
        }

        let count = input.metrics.cv_risk_factor_count;
        let tier = input.flags.cv_tier;
        let at_risk = count >= 1;

        let priority = match tier {
            CvTier::VeryHigh => Priority::URGENT,
            _ if at_risk => Priority::HIGH,
            _ => Priority::ROUTINE,
        };

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: if at_risk {
                "At every consultation (at least yearly)".to_string()
            } else {
                "At least every 3 years".to_string()
            },
            age_start: 18,
            age_end: LIFELONG,
            priority,
            evidence_level: "Strong recommendation (HAS)".to_string(),
            source: "HAS – Cardiovascular prevention".to_string(),
            reasoning: if at_risk {
                format!(
                    "{count} cardiovascular risk factor(s) identified: {}. \
                     Regular monitoring recommended.",
                    factor_labels(input)
                )
            } else {
                "Routine measurement for all adults.".to_string()
            },
            note: at_risk.then(|| format!("Cardiovascular risk tier: {}", tier.as_str())),
        })
    }
}

/// Lipid profile from 40, or earlier with dyslipidemia, heart disease or diabetes.
pub struct LipidProfile;

impl Rule for LipidProfile {
    fn id(&self) -> &str {
        "lipid-profile"
    }

    fn name(&self) -> &str {
        "Lipid profile (total cholesterol, LDL, HDL, triglycerides)"
    }

    fn category(&self) -> Category {
        Category::Cardiovascular
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let profile = input.profile;
        let metrics = input.metrics;
        if profile.age < 40 && !profile.cholesterol && !profile.heart_disease && !profile.diabetes
        {
            return None;
        }

        let count = metrics.cv_risk_factor_count;
        let tier = input.flags.cv_tier;

        let interval = if count >= LIPID_ANNUAL_FACTOR_COUNT {
            "Annual"
        } else if profile.cholesterol {
            "Annual to every 3 years depending on treatment"
        } else {
            "Every 5 years"
        };

        let elevated = profile.cholesterol
            || profile.heart_disease
            || metrics.family_cardiovascular
            || tier >= CvTier::High;
        let priority = match tier {
            CvTier::VeryHigh => Priority::URGENT,
            _ if elevated => Priority::HIGH,
            _ => Priority::ROUTINE,
        };

        let reasoning = if count >= LIPID_ANNUAL_FACTOR_COUNT {
            format!(
                "{count} cardiovascular risk factors ({}): closer lipid monitoring recommended.",
                factor_labels(input)
            )
        } else if metrics.family_cardiovascular {
            "Family history of cardiovascular disease. Lipid profile recommended.".to_string()
        } else {
            "Dyslipidemia screening for adults.".to_string()
        };

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: interval.to_string(),
            age_start: 40,
            age_end: LIFELONG,
            priority,
            evidence_level: "Recommendation (HAS)".to_string(),
            source: "HAS – Cardiovascular prevention".to_string(),
            reasoning,
            note: (tier == CvTier::VeryHigh).then(|| {
                "Very high cardiovascular risk: manage as secondary prevention".to_string()
            }),
        })
    }
}

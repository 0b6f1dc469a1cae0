use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use super::LIFELONG;
use crate::{Rule, RuleInput};

const SENIOR_AGE: i32 = 65;

/// Diphtheria–tetanus–polio boosters for adults.
pub struct DtpBooster;

impl Rule for DtpBooster {
    fn id(&self) -> &str {
        "vaccination-dtp"
    }

    fn name(&self) -> &str {
        "Diphtheria–tetanus–polio booster (dTP)"
    }

    fn category(&self) -> Category {
        Category::Vaccination
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let age = input.profile.age;
        if age < 25 {
            return None;
        }

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: if age >= SENIOR_AGE {
                "Every 10 years".to_string()
            } else {
                "At 25, 45 and 65, then every 10 years".to_string()
            },
            age_start: 25,
            age_end: LIFELONG,
            priority: Priority::ROUTINE,
            evidence_level: "Vaccination schedule (Ministry of Health)".to_string(),
            source: "French vaccination schedule".to_string(),
            reasoning: "Regular boosters maintain immunity.".to_string(),
            note: None,
        })
    }
}

/// Seasonal influenza vaccine from 65, or earlier with risk conditions.
pub struct FluVaccine;

impl Rule for FluVaccine {
    fn id(&self) -> &str {
        "flu-vaccine"
    }

    fn name(&self) -> &str {
        "Influenza vaccination"
    }

    fn category(&self) -> Category {
        Category::Vaccination
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let profile = input.profile;
        let senior = profile.age >= SENIOR_AGE;
        let at_risk =
            profile.diabetes || profile.heart_disease || input.metrics.is_active_smoker();
        if !senior && !at_risk {
            return None;
        }

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "Annual (autumn)".to_string(),
            age_start: if senior { SENIOR_AGE } else { 18 },
            age_end: LIFELONG,
            priority: if senior {
                Priority::HIGH
            } else {
                Priority::ROUTINE
            },
            evidence_level: "Recommendation (HAS)".to_string(),
            source: "HAS – Influenza vaccination".to_string(),
            reasoning: if senior {
                "Recommended for everyone aged 65 and over.".to_string()
            } else {
                "Recommended because of risk factors.".to_string()
            },
            note: None,
        })
    }
}

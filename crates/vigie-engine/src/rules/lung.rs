use vigie_core::models::intake::SmokingStatus;
use vigie_core::models::recommendation::{Category, Priority, Recommendation};

use super::join_labels;
use crate::metrics::{LUNG_SCREENING_MAX_AGE, LUNG_SCREENING_MIN_AGE};
use crate::{Rule, RuleInput};

/// Low-dose CT for heavy current or recent former smokers.
pub struct LungScreening;

impl Rule for LungScreening {
    fn id(&self) -> &str {
        "lung-screening"
    }

    fn name(&self) -> &str {
        "Lung cancer screening (low-dose CT)"
    }

    fn category(&self) -> Category {
        Category::Cancer
    }

    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation> {
        let metrics = input.metrics;
        if !metrics.lung_screening_eligible {
            return None;
        }

        let synergy = input.flags.lung_familial_synergy;

        let mut reasoning = format!(
            "Significant tobacco exposure ({:.1} pack-years). A low-dose chest CT may be indicated.",
            metrics.pack_years
        );
        if synergy {
            reasoning.push_str(" Lung cancer in the family further increases risk.");
        }
        if !input.profile.occupational_exposure.is_empty() {
            reasoning.push_str(&format!(
                " Reported occupational exposure: {}.",
                join_labels(input.profile.occupational_exposure.iter().map(String::as_str))
            ));
        }

        let note = match metrics.smoking_status {
            SmokingStatus::Former => "Stay smoke-free: eligibility ends 15 years after quitting",
            _ => "Smoking cessation support strongly recommended",
        };

        Some(Recommendation {
            id: self.id().to_string(),
            name: self.name().to_string(),
            category: self.category(),
            interval: "Annual – to be discussed with a pulmonologist".to_string(),
            age_start: LUNG_SCREENING_MIN_AGE,
            age_end: LUNG_SCREENING_MAX_AGE,
            priority: if synergy {
                Priority::URGENT
            } else {
                Priority::HIGH
            },
            evidence_level: "Recommendation for heavy smokers (HAS)".to_string(),
            source: "HAS – Screening of smokers at high risk of lung cancer".to_string(),
            reasoning,
            note: Some(note.to_string()),
        })
    }
}

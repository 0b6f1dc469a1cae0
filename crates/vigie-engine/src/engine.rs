use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use vigie_core::models::intake::IntakeProfile;
use vigie_core::models::metrics::DerivedMetrics;
use vigie_core::models::recommendation::Recommendation;
use vigie_core::models::risk::RiskFlags;

use crate::family::{CancerSiteClassifier, KeywordClassifier};
use crate::{Rule, RuleInput, all_rules, classifier, evaluate_rules, metrics, prioritize};

/// Full output of one evaluation: the intermediate metrics and flags
/// alongside the final ordered recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub metrics: DerivedMetrics,
    pub flags: RiskFlags,
    pub recommendations: Vec<Recommendation>,
}

/// Metric derivation → risk classification → rule evaluation → prioritization.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent callers.
pub struct Engine {
    classifier: Box<dyn CancerSiteClassifier>,
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Keyword family-history classifier and the full rule catalog.
    pub fn new() -> Self {
        Self {
            classifier: Box::new(KeywordClassifier::default()),
            rules: all_rules(),
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn CancerSiteClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_rules(mut self, rules: Vec<Box<dyn Rule>>) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Evaluate a profile as of the given civil date.
    ///
    /// `as_of` is only used to turn a free-text quit date into years since
    /// quitting; the engine never reads the clock itself.
    pub fn assess(&self, profile: &IntakeProfile, as_of: Date) -> Assessment {
        let metrics = metrics::derive_metrics_with(profile, as_of, self.classifier.as_ref());
        let flags = classifier::classify(profile, &metrics);

        let input = RuleInput {
            profile,
            metrics: &metrics,
            flags: &flags,
        };
        let fired = evaluate_rules(&self.rules, &input);
        let fired_count = fired.len();
        let recommendations = prioritize(fired);

        tracing::info!(
            rules = self.rules.len(),
            fired = fired_count,
            emitted = recommendations.len(),
            high_priority = recommendations.iter().filter(|r| r.is_high_priority()).count(),
            cv_tier = flags.cv_tier.as_str(),
            hereditary_alert = flags.has_hereditary_alert(),
            "assessment complete"
        );

        Assessment {
            metrics,
            flags,
            recommendations,
        }
    }

    pub fn recommend(&self, profile: &IntakeProfile, as_of: Date) -> Vec<Recommendation> {
        self.assess(profile, as_of).recommendations
    }
}

/// Assess with the default engine.
pub fn assess(profile: &IntakeProfile, as_of: Date) -> Assessment {
    Engine::new().assess(profile, as_of)
}

/// Recommendations from the default engine.
pub fn recommend(profile: &IntakeProfile, as_of: Date) -> Vec<Recommendation> {
    Engine::new().recommend(profile, as_of)
}

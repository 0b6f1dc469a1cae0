//! vigie-engine
//!
//! The preventive-care decision core. Pure and synchronous: derives metrics
//! from an intake profile, classifies risk, runs the rule catalog and returns
//! a validated, prioritized list of recommendations.
//!
//! Public API:
//! - `derive_metrics()`: intake → scalar/categorical metrics
//! - `classify()`: metrics → hereditary alerts, CV tier, diabetes risk
//! - `all_rules()` / `evaluate_rules()`: the ordered rule catalog
//! - `prioritize()`: drop incomplete records, stable sort by priority
//! - `Engine` / `assess()` / `recommend()`: the whole pipeline

pub mod classifier;
pub mod engine;
pub mod family;
pub mod metrics;
pub mod prioritize;
pub mod rules;

use vigie_core::models::intake::IntakeProfile;
use vigie_core::models::metrics::DerivedMetrics;
use vigie_core::models::recommendation::{Category, Recommendation};
use vigie_core::models::risk::RiskFlags;

pub use crate::classifier::classify;
pub use crate::engine::{Assessment, Engine, assess, recommend};
pub use crate::family::{CancerSiteClassifier, KeywordClassifier};
pub use crate::metrics::{derive_metrics, derive_metrics_with};
pub use crate::prioritize::prioritize;

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub profile: &'a IntakeProfile,
    pub metrics: &'a DerivedMetrics,
    pub flags: &'a RiskFlags,
}

/// One clinical rule: a guard over the input plus a record factory.
///
/// Rules are independent of each other. A rule emits at most one record and
/// that record always carries the rule's `id`.
pub trait Rule: Send + Sync {
    /// Unique identifier, also used as the emitted record's id
    /// (e.g. "mammography-standard").
    fn id(&self) -> &str;

    /// Human-readable name, also used as the emitted record's name.
    fn name(&self) -> &str;

    fn category(&self) -> Category;

    /// `None` when the guard does not hold for this input.
    fn evaluate(&self, input: &RuleInput<'_>) -> Option<Recommendation>;
}

/// The full catalog in emission order. Ties in priority keep this order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(rules::breast::MammographyStandard),
        Box::new(rules::breast::MammographyHighRisk),
        Box::new(rules::breast::MammographyModerateRisk),
        Box::new(rules::genetics::BreastOvarianCounseling),
        Box::new(rules::cervical::CervicalScreening),
        Box::new(rules::colorectal::ColorectalHighRisk),
        Box::new(rules::colorectal::ColorectalStandard),
        Box::new(rules::genetics::ColorectalCounseling),
        Box::new(rules::lung::LungScreening),
        Box::new(rules::prostate::ProstateScreening),
        Box::new(rules::cardiovascular::BloodPressure),
        Box::new(rules::cardiovascular::LipidProfile),
        Box::new(rules::metabolic::DiabetesScreening),
        Box::new(rules::bone::OsteoporosisScreening),
        Box::new(rules::dental::DentalCheckup),
        Box::new(rules::vaccination::DtpBooster),
        Box::new(rules::vaccination::FluVaccine),
        Box::new(rules::eye::EyeExam),
    ]
}

/// Look up a rule by ID.
pub fn get_rule(id: &str) -> Option<Box<dyn Rule>> {
    all_rules().into_iter().find(|r| r.id() == id)
}

/// Run every rule in catalog order and collect what fires.
pub fn evaluate_rules(rules: &[Box<dyn Rule>], input: &RuleInput<'_>) -> Vec<Recommendation> {
    rules
        .iter()
        .filter_map(|rule| {
            let record = rule.evaluate(input)?;
            tracing::debug!(
                rule = rule.id(),
                category = rule.category().as_str(),
                priority = record.priority.get(),
                "rule fired"
            );
            Some(record)
        })
        .collect()
}

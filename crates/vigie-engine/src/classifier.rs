//! Risk classification: maps derived metrics to discrete bands and alerts.

use vigie_core::models::intake::IntakeProfile;
use vigie_core::models::metrics::DerivedMetrics;
use vigie_core::models::risk::{
    BreastOvarianCriterion, ColorectalCriterion, CvTier, DiabetesRiskFactor, RiskFlags,
};

/// Pack-years from which a family history of lung cancer compounds risk.
pub const LUNG_SYNERGY_PACK_YEARS: f64 = 10.0;

/// Classify a profile. Evaluated in a fixed precedence order: hereditary
/// breast/ovarian, hereditary colorectal, lung-familial synergy, CV tier,
/// diabetes risk.
pub fn classify(profile: &IntakeProfile, metrics: &DerivedMetrics) -> RiskFlags {
    let diabetes_risk_factors = diabetes_risk_factors(profile, metrics);

    RiskFlags {
        breast_ovarian_alert: breast_ovarian_alert(metrics),
        colorectal_alert: colorectal_alert(metrics),
        lung_familial_synergy: metrics.family_cancer.lung >= 1
            && metrics.pack_years >= LUNG_SYNERGY_PACK_YEARS,
        cv_tier: CvTier::from_factor_count(metrics.cv_risk_factor_count),
        diabetes_risk_count: diabetes_risk_factors.len() as u8,
        diabetes_risk_factors,
    }
}

/// First matching criterion wins; at most one alert for this family of cancers.
pub fn breast_ovarian_alert(metrics: &DerivedMetrics) -> Option<BreastOvarianCriterion> {
    let family = &metrics.family_cancer;
    if family.breast >= 2 {
        Some(BreastOvarianCriterion::MultipleBreastCases)
    } else if family.breast >= 1 && family.ovarian >= 1 {
        Some(BreastOvarianCriterion::BreastAndOvarian)
    } else if family.breast >= 1 && family.early_onset {
        Some(BreastOvarianCriterion::EarlyOnsetBreast)
    } else {
        None
    }
}

pub fn colorectal_alert(metrics: &DerivedMetrics) -> Option<ColorectalCriterion> {
    let family = &metrics.family_cancer;
    if family.colorectal >= 2 {
        Some(ColorectalCriterion::MultipleColorectalCases)
    } else if family.colorectal >= 1 && family.early_onset {
        Some(ColorectalCriterion::EarlyOnsetColorectal)
    } else {
        None
    }
}

pub fn diabetes_risk_factors(
    profile: &IntakeProfile,
    metrics: &DerivedMetrics,
) -> Vec<DiabetesRiskFactor> {
    [
        (DiabetesRiskFactor::AgeOver45, profile.age >= 45),
        (
            DiabetesRiskFactor::Overweight,
            metrics.bmi.is_some_and(|bmi| bmi >= 25.0),
        ),
        (DiabetesRiskFactor::Hypertension, profile.hypertension),
        (DiabetesRiskFactor::Dyslipidemia, profile.cholesterol),
        (DiabetesRiskFactor::FamilyHistory, metrics.family_diabetes),
        (
            DiabetesRiskFactor::PriorPregnancy,
            profile.is_female() && profile.pregnancies > 0,
        ),
    ]
    .into_iter()
    .filter_map(|(factor, present)| present.then_some(factor))
    .collect()
}

//! Metric derivation: pure functions from an intake profile to
//! [`DerivedMetrics`].
//!
//! Missing inputs degrade to zero or "unknown"; nothing here can fail.

use jiff::civil::Date;
use vigie_core::models::intake::{ActivityLevel, IntakeProfile, SmokingStatus};
use vigie_core::models::metrics::{BmiCategory, CvRiskFactor, DerivedMetrics};

use crate::family::{CancerSiteClassifier, KeywordClassifier, tally_family_cancers};

/// Cigarettes in one pack.
const CIGARETTES_PER_PACK: f64 = 20.0;

pub const LUNG_SCREENING_MIN_AGE: i32 = 50;
pub const LUNG_SCREENING_MAX_AGE: i32 = 80;
pub const LUNG_SCREENING_MIN_PACK_YEARS: f64 = 20.0;
/// Former smokers stay eligible while fewer than this many years have passed.
pub const LUNG_SCREENING_QUIT_WINDOW: i32 = 15;
/// Former smoking counts as a cardiovascular factor from this exposure on.
pub const FORMER_SMOKER_CV_PACK_YEARS: f64 = 10.0;

/// Round to one decimal, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Cumulative tobacco exposure: (cigarettes/day × years) / 20, one decimal.
/// Zero when either factor is zero or negative.
pub fn pack_years(cigarettes_per_day: i32, years: i32) -> f64 {
    if cigarettes_per_day <= 0 || years <= 0 {
        return 0.0;
    }
    round1(f64::from(cigarettes_per_day) * f64::from(years) / CIGARETTES_PER_PACK)
}

/// Pack-years for a profile: the supplied figure when present, otherwise
/// computed from daily consumption and duration.
pub fn effective_pack_years(profile: &IntakeProfile) -> f64 {
    if profile.smoking_pack_years > 0.0 {
        round1(profile.smoking_pack_years)
    } else {
        pack_years(profile.cigarettes_per_day, profile.smoking_years)
    }
}

/// Body-mass index from weight (kg) and height (cm), one decimal.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(round1(weight_kg / (height_m * height_m)))
}

/// BMI for a profile: the supplied value when present, otherwise computed.
pub fn effective_bmi(profile: &IntakeProfile) -> Option<f64> {
    if profile.bmi > 0.0 {
        Some(profile.bmi)
    } else {
        bmi(profile.weight, profile.height)
    }
}

/// Reconcile the explicit status with the `smoker` checkbox. An explicit
/// status wins; otherwise a ticked box means an active smoker.
pub fn smoking_status(profile: &IntakeProfile) -> SmokingStatus {
    match profile.smoking_status {
        SmokingStatus::Unknown if profile.smoker => SmokingStatus::Current,
        status => status,
    }
}

/// Calendar year in a free-text quit date.
///
/// ISO dates are parsed as dates; otherwise the first standalone four-digit
/// number between 1900 and 2100 is taken, which covers "06/2012",
/// "mars 2012" and "2012".
pub fn quit_year(text: &str) -> Option<i16> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = trimmed.parse::<Date>() {
        return Some(date.year());
    }

    trimmed
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| run.len() == 4)
        .filter_map(|run| run.parse::<i16>().ok())
        .find(|year| (1900..=2100).contains(year))
}

/// Whole calendar years between the quit date and `as_of`.
///
/// Calendar-year subtraction only: a quit date of December 2011 evaluated in
/// January 2026 gives 15 even though fewer than 15 full years have passed.
pub fn years_since_quit(text: &str, as_of: Date) -> Option<i32> {
    quit_year(text).map(|year| i32::from(as_of.year()) - i32::from(year))
}

/// NLST-style lung screening eligibility.
pub fn lung_screening_eligible(
    age: i32,
    pack_years: f64,
    status: SmokingStatus,
    years_since_quit: Option<i32>,
) -> bool {
    let in_age_range = (LUNG_SCREENING_MIN_AGE..=LUNG_SCREENING_MAX_AGE).contains(&age);
    let exposed = pack_years >= LUNG_SCREENING_MIN_PACK_YEARS;
    let recent = match status {
        SmokingStatus::Current => true,
        SmokingStatus::Former => {
            years_since_quit.is_some_and(|years| years < LUNG_SCREENING_QUIT_WINDOW)
        }
        SmokingStatus::Never | SmokingStatus::Unknown => false,
    };
    in_age_range && exposed && recent
}

/// Cardiovascular checklist items present for this profile, in checklist order.
pub fn cv_risk_factors(
    profile: &IntakeProfile,
    pack_years: f64,
    status: SmokingStatus,
    bmi_category: Option<BmiCategory>,
) -> Vec<CvRiskFactor> {
    let smoking = match status {
        SmokingStatus::Current => true,
        SmokingStatus::Former => pack_years >= FORMER_SMOKER_CV_PACK_YEARS,
        SmokingStatus::Never | SmokingStatus::Unknown => false,
    };

    [
        (CvRiskFactor::Hypertension, profile.hypertension),
        (CvRiskFactor::Dyslipidemia, profile.cholesterol),
        (CvRiskFactor::Diabetes, profile.diabetes),
        (CvRiskFactor::HeartDisease, profile.heart_disease),
        (CvRiskFactor::Smoking, smoking),
        (
            CvRiskFactor::Obesity,
            bmi_category.is_some_and(BmiCategory::is_obese),
        ),
        (
            CvRiskFactor::Sedentary,
            profile.physical_activity == ActivityLevel::Sedentary,
        ),
    ]
    .into_iter()
    .filter_map(|(factor, present)| present.then_some(factor))
    .collect()
}

/// Derive all metrics with the default keyword classifier.
pub fn derive_metrics(profile: &IntakeProfile, as_of: Date) -> DerivedMetrics {
    derive_metrics_with(profile, as_of, &KeywordClassifier::default())
}

/// Derive all metrics using a caller-supplied family-history classifier.
pub fn derive_metrics_with(
    profile: &IntakeProfile,
    as_of: Date,
    classifier: &dyn CancerSiteClassifier,
) -> DerivedMetrics {
    let pack_years = effective_pack_years(profile);
    let smoking_status = smoking_status(profile);
    let years_since_quit = years_since_quit(&profile.smoking_quit_date, as_of);
    let bmi = effective_bmi(profile);
    let bmi_category = bmi.map(BmiCategory::from_bmi);
    let cv_risk_factors = cv_risk_factors(profile, pack_years, smoking_status, bmi_category);
    let family = &profile.family_history;

    DerivedMetrics {
        pack_years,
        smoking_status,
        years_since_quit,
        bmi,
        bmi_category,
        cv_risk_factor_count: cv_risk_factors.len() as u8,
        cv_risk_factors,
        family_cancer: tally_family_cancers(family, classifier),
        family_cardiovascular: family.maternal.heart_disease || family.paternal.heart_disease,
        family_diabetes: family.maternal.diabetes || family.paternal.diabetes,
        early_menopause: profile.menopause_age > 0 && profile.menopause_age < 45,
        lung_screening_eligible: lung_screening_eligible(
            profile.age,
            pack_years,
            smoking_status,
            years_since_quit,
        ),
    }
}

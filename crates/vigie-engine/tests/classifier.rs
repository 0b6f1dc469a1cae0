mod common;

use common::{as_of, profile};
use serde_json::json;
use vigie_core::models::intake::FamilyHistory;
use vigie_core::models::metrics::CancerSite;
use vigie_core::models::risk::{
    BreastOvarianCriterion, ColorectalCriterion, CvTier, DiabetesRiskFactor,
};
use vigie_engine::family::{
    CancerSiteClassifier, KeywordClassifier, parse_onset_age, tally_family_cancers,
};
use vigie_engine::{classify, derive_metrics, derive_metrics_with};

fn flags_for(json: serde_json::Value) -> vigie_core::models::risk::RiskFlags {
    let profile = profile(json);
    let metrics = derive_metrics(&profile, as_of());
    classify(&profile, &metrics)
}

#[test]
fn keyword_classifier_matches_english_and_french() {
    let classifier = KeywordClassifier::default();
    assert_eq!(classifier.classify("Cancer du SEIN"), vec![CancerSite::Breast]);
    assert_eq!(classifier.classify("breast cancer"), vec![CancerSite::Breast]);
    assert_eq!(classifier.classify("Ovaire"), vec![CancerSite::Ovarian]);
    assert_eq!(classifier.classify("cancer du côlon"), vec![CancerSite::Colorectal]);
    assert_eq!(classifier.classify("Poumon (père)"), vec![CancerSite::Lung]);
    assert_eq!(classifier.classify("prostate"), vec![CancerSite::Prostate]);
    assert!(classifier.classify("mélanome").is_empty());
}

#[test]
fn one_entry_can_mention_several_sites() {
    let classifier = KeywordClassifier::default();
    assert_eq!(
        classifier.classify("sein puis ovaire"),
        vec![CancerSite::Breast, CancerSite::Ovarian]
    );
}

#[test]
fn onset_age_needs_two_digits_and_a_unit() {
    assert_eq!(parse_onset_age("Sein (mère, 45 ans)"), Some(45));
    assert_eq!(parse_onset_age("breast at 38 years"), Some(38));
    assert_eq!(parse_onset_age("colon 42yo"), Some(42));
    assert_eq!(parse_onset_age("diagnosed in 1998"), None);
    assert_eq!(parse_onset_age("45"), None);
    assert_eq!(parse_onset_age("sein"), None);
}

#[test]
fn first_onset_age_is_used() {
    assert_eq!(parse_onset_age("mère 62 ans, sœur 41 ans"), Some(62));
}

#[test]
fn elapsed_time_is_not_an_onset_age() {
    assert_eq!(parse_onset_age("Sein, diagnostiquée il y a 10 ans"), None);
    assert_eq!(parse_onset_age("breast cancer 12 years ago"), None);
    assert_eq!(
        parse_onset_age("Sein, mère, diagnostiquée il y a 10 ans à 72 ans"),
        Some(72)
    );
    assert_eq!(parse_onset_age("colon, 20 years ago, at 44 years"), Some(44));
}

#[test]
fn late_diagnosis_reported_with_elapsed_time_does_not_alert() {
    let profile = profile(json!({
        "age": 55,
        "sex": "female",
        "familyHistory": {
            "maternal": { "cancer": ["Sein, mère, diagnostiquée il y a 10 ans à 72 ans"] }
        }
    }));
    let metrics = derive_metrics(&profile, as_of());
    assert!(!metrics.family_cancer.early_onset);
    assert_eq!(classify(&profile, &metrics).breast_ovarian_alert, None);
}

#[test]
fn tallies_sum_both_lineages() {
    let history: FamilyHistory = serde_json::from_value(json!({
        "maternal": { "cancer": ["Sein", "Côlon 47 ans"] },
        "paternal": { "cancer": ["breast", "poumon"] }
    }))
    .unwrap();

    let tally = tally_family_cancers(&history, &KeywordClassifier::default());
    assert_eq!(tally.breast, 2);
    assert_eq!(tally.colorectal, 1);
    assert_eq!(tally.lung, 1);
    assert_eq!(tally.ovarian, 0);
    assert!(tally.early_onset);
}

struct StructuredClassifier;

impl CancerSiteClassifier for StructuredClassifier {
    fn classify(&self, entry: &str) -> Vec<CancerSite> {
        match entry {
            "BRCA" => vec![CancerSite::Breast, CancerSite::Ovarian],
            _ => Vec::new(),
        }
    }

    fn onset_age(&self, _entry: &str) -> Option<u32> {
        None
    }
}

#[test]
fn classifier_is_pluggable() {
    let profile = profile(json!({
        "familyHistory": { "maternal": { "cancer": ["BRCA"] } }
    }));
    let metrics = derive_metrics_with(&profile, as_of(), &StructuredClassifier);
    assert_eq!(metrics.family_cancer.breast, 1);
    assert_eq!(metrics.family_cancer.ovarian, 1);

    let flags = classify(&profile, &metrics);
    assert_eq!(
        flags.breast_ovarian_alert,
        Some(BreastOvarianCriterion::BreastAndOvarian)
    );
}

#[test]
fn two_breast_entries_across_lineages_raise_the_alert() {
    let flags = flags_for(json!({
        "familyHistory": {
            "maternal": { "cancer": ["Sein"] },
            "paternal": { "cancer": ["Sein"] }
        }
    }));
    assert_eq!(
        flags.breast_ovarian_alert,
        Some(BreastOvarianCriterion::MultipleBreastCases)
    );
}

#[test]
fn single_breast_entry_without_early_onset_does_not_alert() {
    let flags = flags_for(json!({
        "familyHistory": { "maternal": { "cancer": ["Sein (mère, 62 ans)"] } }
    }));
    assert_eq!(flags.breast_ovarian_alert, None);
}

#[test]
fn single_breast_entry_with_early_onset_alerts() {
    let flags = flags_for(json!({
        "familyHistory": { "maternal": { "cancer": ["Sein (mère, 45 ans)"] } }
    }));
    assert_eq!(
        flags.breast_ovarian_alert,
        Some(BreastOvarianCriterion::EarlyOnsetBreast)
    );
}

#[test]
fn first_matching_breast_criterion_wins() {
    let flags = flags_for(json!({
        "familyHistory": {
            "maternal": { "cancer": ["Sein 40 ans", "Ovaire"] },
            "paternal": { "cancer": ["Sein"] }
        }
    }));
    assert_eq!(
        flags.breast_ovarian_alert,
        Some(BreastOvarianCriterion::MultipleBreastCases)
    );
}

#[test]
fn colorectal_alert_criteria() {
    let multiple = flags_for(json!({
        "familyHistory": {
            "maternal": { "cancer": ["colorectal"] },
            "paternal": { "cancer": ["côlon"] }
        }
    }));
    assert_eq!(
        multiple.colorectal_alert,
        Some(ColorectalCriterion::MultipleColorectalCases)
    );

    let early = flags_for(json!({
        "familyHistory": { "paternal": { "cancer": ["côlon 44 ans"] } }
    }));
    assert_eq!(
        early.colorectal_alert,
        Some(ColorectalCriterion::EarlyOnsetColorectal)
    );

    let late = flags_for(json!({
        "familyHistory": { "paternal": { "cancer": ["côlon 71 ans"] } }
    }));
    assert_eq!(late.colorectal_alert, None);
}

#[test]
fn lung_synergy_needs_family_history_and_ten_pack_years() {
    let synergy = flags_for(json!({
        "smokingPackYears": 10,
        "familyHistory": { "paternal": { "cancer": ["poumon"] } }
    }));
    assert!(synergy.lung_familial_synergy);

    let light = flags_for(json!({
        "smokingPackYears": 9,
        "familyHistory": { "paternal": { "cancer": ["poumon"] } }
    }));
    assert!(!light.lung_familial_synergy);

    let no_family = flags_for(json!({ "smokingPackYears": 30 }));
    assert!(!no_family.lung_familial_synergy);
}

#[test]
fn cv_tier_follows_factor_count() {
    assert_eq!(CvTier::from_factor_count(0), CvTier::Standard);
    assert_eq!(CvTier::from_factor_count(1), CvTier::Standard);
    assert_eq!(CvTier::from_factor_count(2), CvTier::Moderate);
    assert_eq!(CvTier::from_factor_count(3), CvTier::High);
    assert_eq!(CvTier::from_factor_count(4), CvTier::VeryHigh);
    assert_eq!(CvTier::from_factor_count(7), CvTier::VeryHigh);

    let flags = flags_for(json!({
        "hypertension": true,
        "cholesterol": true,
        "smoker": true,
        "physicalActivity": "sédentaire"
    }));
    assert_eq!(flags.cv_tier, CvTier::VeryHigh);
}

#[test]
fn diabetes_risk_count_lists_each_factor() {
    let flags = flags_for(json!({
        "age": 50,
        "sex": "female",
        "bmi": 27,
        "hypertension": true,
        "cholesterol": true,
        "pregnancies": 2,
        "familyHistory": { "maternal": { "diabetes": true } }
    }));
    assert_eq!(flags.diabetes_risk_count, 6);
    assert_eq!(
        flags.diabetes_risk_factors,
        vec![
            DiabetesRiskFactor::AgeOver45,
            DiabetesRiskFactor::Overweight,
            DiabetesRiskFactor::Hypertension,
            DiabetesRiskFactor::Dyslipidemia,
            DiabetesRiskFactor::FamilyHistory,
            DiabetesRiskFactor::PriorPregnancy,
        ]
    );
}

#[test]
fn pregnancies_count_only_for_women() {
    let flags = flags_for(json!({ "sex": "male", "pregnancies": 2 }));
    assert_eq!(flags.diabetes_risk_count, 0);
}

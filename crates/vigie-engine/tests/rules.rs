mod common;

use common::{as_of, profile};
use serde_json::{Value, json};
use vigie_core::models::recommendation::{Category, Priority, Recommendation};
use vigie_engine::{Rule, RuleInput, all_rules, classify, derive_metrics, get_rule};

fn run(id: &str, intake: Value) -> Option<Recommendation> {
    let rule = get_rule(id).unwrap_or_else(|| panic!("rule {id} should exist"));
    let profile = profile(intake);
    let metrics = derive_metrics(&profile, as_of());
    let flags = classify(&profile, &metrics);
    rule.evaluate(&RuleInput {
        profile: &profile,
        metrics: &metrics,
        flags: &flags,
    })
}

#[test]
fn test_all_rules_count() {
    assert_eq!(all_rules().len(), 18);
}

#[test]
fn test_rule_ids_unique() {
    let rules = all_rules();
    let mut ids: Vec<&str> = rules.iter().map(|r| r.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), rules.len());
}

#[test]
fn test_get_rule() {
    let rule = get_rule("lung-screening").expect("lung-screening should exist");
    assert_eq!(rule.category(), Category::Cancer);
    assert!(get_rule("nonexistent").is_none());
}

#[test]
fn emitted_records_carry_the_rule_identity() {
    let intake = json!({
        "age": 66,
        "sex": "female",
        "menopauseAge": 50,
        "diabetes": true
    });
    for rule in all_rules() {
        if let Some(record) = run(rule.id(), intake.clone()) {
            assert_eq!(record.id, rule.id());
            assert_eq!(record.name, rule.name());
            assert_eq!(record.category, rule.category());
            assert!(record.is_complete(), "{} incomplete", rule.id());
        }
    }
}

#[test]
fn mammography_standard_window() {
    assert!(run("mammography-standard", json!({ "sex": "female", "age": 49 })).is_none());
    assert!(run("mammography-standard", json!({ "sex": "female", "age": 75 })).is_none());
    assert!(run("mammography-standard", json!({ "sex": "male", "age": 60 })).is_none());

    let record = run("mammography-standard", json!({ "sex": "female", "age": 50 })).unwrap();
    assert_eq!(record.priority, Priority::HIGH);
    assert_eq!(record.note, None);
}

#[test]
fn mammography_standard_is_urgent_with_breast_family_history() {
    let record = run(
        "mammography-standard",
        json!({
            "sex": "female",
            "age": 60,
            "familyHistory": { "paternal": { "cancer": ["sein"] } }
        }),
    )
    .unwrap();
    assert_eq!(record.priority, Priority::URGENT);
    assert!(record.note.is_some());
}

#[test]
fn mammography_high_risk_needs_family_history_from_40() {
    let family = json!({ "maternal": { "cancer": ["ovaire"] } });
    assert!(
        run(
            "mammography-high-risk",
            json!({ "sex": "female", "age": 39, "familyHistory": family })
        )
        .is_none()
    );
    assert!(run("mammography-high-risk", json!({ "sex": "female", "age": 45 })).is_none());

    let record = run(
        "mammography-high-risk",
        json!({ "sex": "female", "age": 40, "familyHistory": family }),
    )
    .unwrap();
    assert_eq!(record.priority, Priority::URGENT);
    assert_eq!((record.age_start, record.age_end), (40, 75));
}

#[test]
fn mammography_moderate_risk_lists_factors() {
    let record = run(
        "mammography-moderate-risk",
        json!({
            "sex": "female",
            "age": 46,
            "pregnancies": 2,
            "hormonalContraceptionYears": 12,
            "hormonalTreatment": true
        }),
    )
    .unwrap();
    assert_eq!(record.priority, Priority::ROUTINE);
    assert!(record.reasoning.contains("prolonged hormonal contraception"));
    assert!(record.reasoning.contains("hormone replacement therapy"));
    assert!(!record.reasoning.contains("nulliparity"));

    assert!(
        run(
            "mammography-moderate-risk",
            json!({ "sex": "female", "age": 46, "pregnancies": 1 })
        )
        .is_none()
    );
    assert!(run("mammography-moderate-risk", json!({ "sex": "female", "age": 50 })).is_none());
}

#[test]
fn cervical_switches_to_hpv_after_30() {
    let young = run("cervical-screening", json!({ "sex": "female", "age": 30 })).unwrap();
    assert!(young.interval.contains("cytology"));

    let older = run("cervical-screening", json!({ "sex": "female", "age": 31 })).unwrap();
    assert!(older.interval.contains("HPV"));

    assert!(run("cervical-screening", json!({ "sex": "female", "age": 24 })).is_none());
    assert!(run("cervical-screening", json!({ "sex": "female", "age": 66 })).is_none());
}

#[test]
fn colorectal_standard_and_high_risk_are_exclusive() {
    let family = json!({ "paternal": { "cancer": ["côlon"] } });

    assert!(run("colorectal-standard", json!({ "age": 55, "familyHistory": family })).is_none());
    let high = run("colorectal-high-risk", json!({ "age": 55, "familyHistory": family })).unwrap();
    assert_eq!(high.priority, Priority::URGENT);

    assert!(run("colorectal-high-risk", json!({ "age": 55 })).is_none());
    let standard = run("colorectal-standard", json!({ "age": 55 })).unwrap();
    assert_eq!(standard.priority, Priority::HIGH);
}

#[test]
fn colorectal_high_risk_starts_at_45() {
    let family = json!({ "paternal": { "cancer": ["colorectal"] } });
    assert!(run("colorectal-high-risk", json!({ "age": 44, "familyHistory": family })).is_none());
    assert!(run("colorectal-high-risk", json!({ "age": 45, "familyHistory": family })).is_some());
    assert!(run("colorectal-high-risk", json!({ "age": 76, "familyHistory": family })).is_none());
}

#[test]
fn genetic_counseling_follows_hereditary_alerts() {
    let breast = run(
        "genetic-counseling-breast-ovarian",
        json!({
            "age": 30,
            "familyHistory": { "maternal": { "cancer": ["sein 42 ans"] } }
        }),
    )
    .unwrap();
    assert_eq!(breast.category, Category::Genetics);
    assert_eq!(breast.priority, Priority::URGENT);

    assert!(
        run(
            "genetic-counseling-breast-ovarian",
            json!({ "age": 30, "familyHistory": { "maternal": { "cancer": ["sein"] } } })
        )
        .is_none()
    );

    let colorectal = run(
        "genetic-counseling-colorectal",
        json!({
            "age": 30,
            "familyHistory": {
                "maternal": { "cancer": ["colon"] },
                "paternal": { "cancer": ["rectum"] }
            }
        }),
    )
    .unwrap();
    assert!(colorectal.reasoning.contains("two or more"));
}

#[test]
fn lung_screening_priority_rises_with_familial_synergy() {
    let smoker = json!({ "age": 60, "smoker": true, "smokingPackYears": 30 });
    let record = run("lung-screening", smoker).unwrap();
    assert_eq!(record.priority, Priority::HIGH);

    let record = run(
        "lung-screening",
        json!({
            "age": 60,
            "smoker": true,
            "smokingPackYears": 30,
            "familyHistory": { "paternal": { "cancer": ["poumon"] } },
            "occupationalExposure": ["amiante"]
        }),
    )
    .unwrap();
    assert_eq!(record.priority, Priority::URGENT);
    assert!(record.reasoning.contains("amiante"));
}

#[test]
fn lung_screening_skips_ineligible_smokers() {
    assert!(
        run(
            "lung-screening",
            json!({ "age": 60, "smoker": true, "smokingPackYears": 10 })
        )
        .is_none()
    );
    assert!(
        run(
            "lung-screening",
            json!({ "age": 45, "smoker": true, "smokingPackYears": 30 })
        )
        .is_none()
    );
}

#[test]
fn prostate_starts_earlier_with_family_history() {
    assert!(run("prostate-screening", json!({ "sex": "male", "age": 47 })).is_none());

    let record = run(
        "prostate-screening",
        json!({
            "sex": "male",
            "age": 47,
            "familyHistory": { "paternal": { "cancer": ["prostate"] } }
        }),
    )
    .unwrap();
    assert_eq!(record.age_start, 45);
    assert_eq!(record.priority, Priority::HIGH);

    assert!(run("prostate-screening", json!({ "sex": "female", "age": 55 })).is_none());
    assert!(run("prostate-screening", json!({ "sex": "male", "age": 71 })).is_none());
}

#[test]
fn blood_pressure_priority_tracks_cv_tier() {
    let routine = run("blood-pressure", json!({ "age": 30 })).unwrap();
    assert_eq!(routine.priority, Priority::ROUTINE);
    assert_eq!(routine.note, None);

    let one_factor = run("blood-pressure", json!({ "age": 30, "hypertension": true })).unwrap();
    assert_eq!(one_factor.priority, Priority::HIGH);

    let very_high = run(
        "blood-pressure",
        json!({
            "age": 30,
            "hypertension": true,
            "cholesterol": true,
            "diabetes": true,
            "smoker": true
        }),
    )
    .unwrap();
    assert_eq!(very_high.priority, Priority::URGENT);
    assert!(very_high.note.unwrap().contains("very-high"));

    assert!(run("blood-pressure", json!({ "age": 17 })).is_none());
}

#[test]
fn lipid_profile_interval_branches() {
    let plain = run("lipid-profile", json!({ "age": 45 })).unwrap();
    assert_eq!(plain.interval, "Every 5 years");
    assert_eq!(plain.priority, Priority::ROUTINE);

    let treated = run("lipid-profile", json!({ "age": 45, "cholesterol": true })).unwrap();
    assert!(treated.interval.starts_with("Annual to every 3 years"));
    assert_eq!(treated.priority, Priority::HIGH);

    let crowded = run(
        "lipid-profile",
        json!({ "age": 45, "cholesterol": true, "hypertension": true, "smoker": true }),
    )
    .unwrap();
    assert_eq!(crowded.interval, "Annual");

    assert!(run("lipid-profile", json!({ "age": 35 })).is_none());
    assert!(run("lipid-profile", json!({ "age": 35, "diabetes": true })).is_some());
}

#[test]
fn diabetes_screening_interval_follows_risk_count() {
    assert!(run("diabetes-screening", json!({ "age": 30 })).is_none());

    let low = run("diabetes-screening", json!({ "age": 50 })).unwrap();
    assert_eq!(low.interval, "Every 3 years");
    assert_eq!(low.priority, Priority::ROUTINE);

    let high = run(
        "diabetes-screening",
        json!({ "age": 50, "hypertension": true, "bmi": 28 }),
    )
    .unwrap();
    assert_eq!(high.interval, "Annual");
    assert_eq!(high.priority, Priority::HIGH);
}

#[test]
fn osteoporosis_gating() {
    assert!(run("osteoporosis-screening", json!({ "sex": "female", "age": 55 })).is_none());
    assert!(run("osteoporosis-screening", json!({ "sex": "male", "age": 70 })).is_none());

    let senior = run("osteoporosis-screening", json!({ "sex": "female", "age": 66 })).unwrap();
    assert_eq!(senior.priority, Priority::ROUTINE);

    let early = run(
        "osteoporosis-screening",
        json!({ "sex": "female", "age": 48, "menopauseAge": 42 }),
    )
    .unwrap();
    assert_eq!(early.priority, Priority::HIGH);
    assert_eq!(early.age_start, 42);
}

#[test]
fn dental_notes_active_smokers() {
    assert!(run("dental-checkup", json!({ "age": 2 })).is_none());
    assert_eq!(run("dental-checkup", json!({ "age": 30 })).unwrap().note, None);
    assert!(
        run("dental-checkup", json!({ "age": 30, "smoker": true }))
            .unwrap()
            .note
            .is_some()
    );
}

#[test]
fn vaccination_gating() {
    assert!(run("vaccination-dtp", json!({ "age": 24 })).is_none());
    assert_eq!(
        run("vaccination-dtp", json!({ "age": 70 })).unwrap().interval,
        "Every 10 years"
    );

    assert!(run("flu-vaccine", json!({ "age": 40 })).is_none());
    let senior = run("flu-vaccine", json!({ "age": 65 })).unwrap();
    assert_eq!(senior.priority, Priority::HIGH);
    let at_risk = run("flu-vaccine", json!({ "age": 40, "heartDisease": true })).unwrap();
    assert_eq!(at_risk.priority, Priority::ROUTINE);
}

#[test]
fn eye_exam_for_diabetics_at_any_age() {
    let record = run("eye-exam", json!({ "age": 30, "diabetes": true })).unwrap();
    assert_eq!(record.priority, Priority::HIGH);
    assert!(record.interval.starts_with("Annual"));

    assert!(run("eye-exam", json!({ "age": 39 })).is_none());
    assert_eq!(
        run("eye-exam", json!({ "age": 60 })).unwrap().interval,
        "Every 2 years"
    );
}

#[test]
fn unknown_sex_skips_sex_specific_rules() {
    for id in [
        "mammography-standard",
        "mammography-high-risk",
        "cervical-screening",
        "prostate-screening",
        "osteoporosis-screening",
    ] {
        assert!(run(id, json!({ "age": 60 })).is_none(), "{id} fired");
    }
}

#[test]
fn negative_age_is_accepted_and_fires_nothing_age_gated() {
    for rule in all_rules() {
        assert!(
            run(rule.id(), json!({ "age": -5 })).is_none(),
            "{} fired",
            rule.id()
        );
    }
}

#[test]
fn ages_above_120_are_evaluated_without_range_checks() {
    for id in ["dental-checkup", "vaccination-dtp", "flu-vaccine", "blood-pressure"] {
        let record = run(id, json!({ "age": 150 }));
        assert!(record.is_some(), "{id} did not fire at 150");
    }

    let dtp = run("vaccination-dtp", json!({ "age": 150 })).unwrap();
    assert_eq!(dtp.interval, "Every 10 years");
    let flu = run("flu-vaccine", json!({ "age": 150 })).unwrap();
    assert_eq!(flu.priority, Priority::HIGH);
}

//! Display-ready view of one evaluation, handed to the summary template.
//!
//! All formatting decisions (units, "not reported", yes/no) happen here so
//! the template only lays out lines.

use serde::Serialize;
use vigie_core::models::intake::{
    ActivityLevel, ContraceptionUse, IntakeProfile, Sex, SmokingStatus,
};
use vigie_core::models::metrics::{CancerSite, DerivedMetrics};
use vigie_core::models::risk::RiskFlags;

const NOT_REPORTED: &str = "not reported";

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub age: String,
    pub sex: &'static str,
    pub height: String,
    pub weight: String,
    pub bmi: String,
    pub bmi_category: String,

    pub smoking_status: &'static str,
    pub pack_years: String,
    pub quit_date: String,
    pub years_since_quit: String,
    pub alcohol: String,
    pub physical_activity: &'static str,

    pub hypertension: &'static str,
    pub cholesterol: &'static str,
    pub heart_disease: &'static str,
    pub cv_factors: Vec<&'static str>,
    pub cv_tier: &'static str,

    pub diabetes: &'static str,
    pub diabetes_risk_factors: Vec<&'static str>,

    pub maternal_cancer: Vec<String>,
    pub paternal_cancer: Vec<String>,
    pub family_tally: Vec<SiteCount>,
    pub family_early_onset: &'static str,
    pub family_cardiovascular: &'static str,
    pub family_diabetes: &'static str,

    /// Only filled for women.
    pub reproductive: Option<ReproductiveView>,

    pub screenings: Vec<ScreeningLine>,
    pub occupational_exposure: Vec<String>,
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteCount {
    pub site: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReproductiveView {
    pub pregnancies: i32,
    pub menopause_age: String,
    pub early_menopause: &'static str,
    pub hormonal_treatment: &'static str,
    pub contraception: &'static str,
    pub contraception_years: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningLine {
    pub name: String,
    pub date: String,
}

impl SummaryView {
    pub fn new(profile: &IntakeProfile, metrics: &DerivedMetrics, flags: &RiskFlags) -> Self {
        let family = &profile.family_history;

        SummaryView {
            age: positive_or_unknown(profile.age, ""),
            sex: match profile.sex {
                Sex::Female => "female",
                Sex::Male => "male",
                Sex::Unknown => NOT_REPORTED,
            },
            height: measure_or_unknown(profile.height, " cm"),
            weight: measure_or_unknown(profile.weight, " kg"),
            bmi: metrics
                .bmi
                .map_or_else(|| NOT_REPORTED.to_string(), |bmi| format!("{bmi:.1}")),
            bmi_category: metrics
                .bmi_category
                .map_or_else(|| NOT_REPORTED.to_string(), |c| c.as_str().to_string()),

            smoking_status: match metrics.smoking_status {
                SmokingStatus::Current => "current smoker",
                SmokingStatus::Former => "former smoker",
                SmokingStatus::Never => "never smoked",
                SmokingStatus::Unknown => NOT_REPORTED,
            },
            pack_years: format!("{:.1}", metrics.pack_years),
            quit_date: text_or_unknown(&profile.smoking_quit_date),
            years_since_quit: metrics
                .years_since_quit
                .map_or_else(|| NOT_REPORTED.to_string(), |y| y.to_string()),
            alcohol: text_or_unknown(&profile.alcohol),
            physical_activity: match profile.physical_activity {
                ActivityLevel::Sedentary => "sedentary",
                ActivityLevel::Light => "light",
                ActivityLevel::Moderate => "moderate",
                ActivityLevel::High => "high",
                ActivityLevel::Unknown => NOT_REPORTED,
            },

            hypertension: yes_no(profile.hypertension),
            cholesterol: yes_no(profile.cholesterol),
            heart_disease: yes_no(profile.heart_disease),
            cv_factors: metrics.cv_risk_factors.iter().map(|f| f.label()).collect(),
            cv_tier: flags.cv_tier.as_str(),

            diabetes: yes_no(profile.diabetes),
            diabetes_risk_factors: flags
                .diabetes_risk_factors
                .iter()
                .map(|f| f.label())
                .collect(),

            maternal_cancer: family.maternal.cancer.clone(),
            paternal_cancer: family.paternal.cancer.clone(),
            family_tally: CancerSite::ALL
                .iter()
                .map(|&site| SiteCount {
                    site: site.label(),
                    count: metrics.family_cancer.count(site),
                })
                .filter(|line| line.count > 0)
                .collect(),
            family_early_onset: yes_no(metrics.family_cancer.early_onset),
            family_cardiovascular: yes_no(metrics.family_cardiovascular),
            family_diabetes: yes_no(metrics.family_diabetes),

            reproductive: profile.is_female().then(|| ReproductiveView {
                pregnancies: profile.pregnancies.max(0),
                menopause_age: positive_or_unknown(profile.menopause_age, ""),
                early_menopause: yes_no(metrics.early_menopause),
                hormonal_treatment: yes_no(profile.hormonal_treatment),
                contraception: match profile.hormonal_contraception {
                    ContraceptionUse::Never => "never",
                    ContraceptionUse::Past => "past",
                    ContraceptionUse::Current => "current",
                    ContraceptionUse::Unknown => NOT_REPORTED,
                },
                contraception_years: positive_or_unknown(
                    profile.hormonal_contraception_years,
                    " years",
                ),
            }),

            screenings: profile
                .screenings
                .iter()
                .map(|(name, record)| ScreeningLine {
                    name: name.clone(),
                    date: text_or_unknown(&record.date),
                })
                .collect(),
            occupational_exposure: profile.occupational_exposure.clone(),
            indicators: key_indicators(metrics, flags),
        }
    }
}

/// Bullet lines for the closing "key risk indicators" section.
fn key_indicators(metrics: &DerivedMetrics, flags: &RiskFlags) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(criterion) = flags.breast_ovarian_alert {
        lines.push(format!(
            "Hereditary breast/ovarian risk: {}",
            criterion.describe()
        ));
    }
    if let Some(criterion) = flags.colorectal_alert {
        lines.push(format!("Hereditary colorectal risk: {}", criterion.describe()));
    }
    if metrics.lung_screening_eligible {
        lines.push(format!(
            "Eligible for low-dose CT lung screening ({:.1} pack-years)",
            metrics.pack_years
        ));
    }
    if metrics.is_obese() {
        if let (Some(bmi), Some(band)) = (metrics.bmi, metrics.bmi_category) {
            lines.push(format!("Obesity (BMI {bmi:.1}, {})", band.as_str()));
        }
    }
    if flags.lung_familial_synergy {
        lines.push("Lung cancer in the family combined with tobacco exposure".to_string());
    }
    if metrics.cv_risk_factor_count >= 2 {
        lines.push(format!(
            "Cardiovascular risk tier {} ({} factors)",
            flags.cv_tier.as_str(),
            metrics.cv_risk_factor_count
        ));
    }
    if flags.diabetes_risk_count >= 3 {
        lines.push(format!(
            "High type 2 diabetes risk ({} factors)",
            flags.diabetes_risk_count
        ));
    }
    if metrics.early_menopause {
        lines.push("Early menopause".to_string());
    }

    lines
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn positive_or_unknown(value: i32, unit: &str) -> String {
    if value > 0 {
        format!("{value}{unit}")
    } else {
        NOT_REPORTED.to_string()
    }
}

fn measure_or_unknown(value: f64, unit: &str) -> String {
    if value > 0.0 {
        format!("{value}{unit}")
    } else {
        NOT_REPORTED.to_string()
    }
}

fn text_or_unknown(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_REPORTED.to_string()
    } else {
        value.to_string()
    }
}

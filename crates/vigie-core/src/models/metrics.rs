use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::intake::SmokingStatus;

/// Scalar and categorical metrics derived from an intake profile.
///
/// A pure function of the profile and the evaluation date; recomputed on
/// every call and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivedMetrics {
    /// Cumulative tobacco exposure, one decimal.
    pub pack_years: f64,
    /// Effective smoking status after reconciling `smokingStatus` and `smoker`.
    pub smoking_status: SmokingStatus,
    /// Whole calendar years since the reported quit date, if one was parsed.
    pub years_since_quit: Option<i32>,
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub cv_risk_factors: Vec<CvRiskFactor>,
    pub cv_risk_factor_count: u8,
    pub family_cancer: FamilyCancerTally,
    pub family_cardiovascular: bool,
    pub family_diabetes: bool,
    pub early_menopause: bool,
    pub lung_screening_eligible: bool,
}

impl DerivedMetrics {
    pub fn is_active_smoker(&self) -> bool {
        self.smoking_status == SmokingStatus::Current
    }

    pub fn is_obese(&self) -> bool {
        self.bmi_category.is_some_and(BmiCategory::is_obese)
    }

    pub fn has_cv_factor(&self, factor: CvRiskFactor) -> bool {
        self.cv_risk_factors.contains(&factor)
    }
}

/// Body-mass bands, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BmiCategory {
    #[serde(rename = "severe-underweight")]
    SevereUnderweight,
    #[serde(rename = "underweight")]
    Underweight,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "overweight")]
    Overweight,
    #[serde(rename = "obese-class-1")]
    ObeseClass1,
    #[serde(rename = "obese-class-2")]
    ObeseClass2,
    #[serde(rename = "obese-class-3")]
    ObeseClass3,
}

impl BmiCategory {
    /// Band for a BMI value. Each band's lower bound is inclusive:
    /// 25.0 is overweight, 30.0 is obese class 1.
    pub fn from_bmi(bmi: f64) -> Self {
        match bmi {
            b if b < 16.5 => BmiCategory::SevereUnderweight,
            b if b < 18.5 => BmiCategory::Underweight,
            b if b < 25.0 => BmiCategory::Normal,
            b if b < 30.0 => BmiCategory::Overweight,
            b if b < 35.0 => BmiCategory::ObeseClass1,
            b if b < 40.0 => BmiCategory::ObeseClass2,
            _ => BmiCategory::ObeseClass3,
        }
    }

    pub fn is_obese(self) -> bool {
        self >= BmiCategory::ObeseClass1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BmiCategory::SevereUnderweight => "severe-underweight",
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::ObeseClass1 => "obese-class-1",
            BmiCategory::ObeseClass2 => "obese-class-2",
            BmiCategory::ObeseClass3 => "obese-class-3",
        }
    }
}

/// Items of the cardiovascular risk-factor checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CvRiskFactor {
    Hypertension,
    Dyslipidemia,
    Diabetes,
    HeartDisease,
    /// Active smoking, or former smoking with at least 10 pack-years.
    Smoking,
    Obesity,
    Sedentary,
}

impl CvRiskFactor {
    pub fn label(self) -> &'static str {
        match self {
            CvRiskFactor::Hypertension => "hypertension",
            CvRiskFactor::Dyslipidemia => "dyslipidemia",
            CvRiskFactor::Diabetes => "diabetes",
            CvRiskFactor::HeartDisease => "known heart disease",
            CvRiskFactor::Smoking => "smoking",
            CvRiskFactor::Obesity => "obesity",
            CvRiskFactor::Sedentary => "sedentary lifestyle",
        }
    }
}

/// Cancer sites tracked in family history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CancerSite {
    Breast,
    Ovarian,
    Colorectal,
    Lung,
    Prostate,
}

impl CancerSite {
    pub const ALL: [CancerSite; 5] = [
        CancerSite::Breast,
        CancerSite::Ovarian,
        CancerSite::Colorectal,
        CancerSite::Lung,
        CancerSite::Prostate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CancerSite::Breast => "breast",
            CancerSite::Ovarian => "ovarian",
            CancerSite::Colorectal => "colorectal",
            CancerSite::Lung => "lung",
            CancerSite::Prostate => "prostate",
        }
    }
}

/// Family cancer entries per site, summed over both lineages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FamilyCancerTally {
    pub breast: u32,
    pub ovarian: u32,
    pub colorectal: u32,
    pub lung: u32,
    pub prostate: u32,
    /// Any parsed diagnosis age below 50.
    pub early_onset: bool,
}

impl FamilyCancerTally {
    pub fn count(&self, site: CancerSite) -> u32 {
        match site {
            CancerSite::Breast => self.breast,
            CancerSite::Ovarian => self.ovarian,
            CancerSite::Colorectal => self.colorectal,
            CancerSite::Lung => self.lung,
            CancerSite::Prostate => self.prostate,
        }
    }

    pub fn increment(&mut self, site: CancerSite) {
        let slot = match site {
            CancerSite::Breast => &mut self.breast,
            CancerSite::Ovarian => &mut self.ovarian,
            CancerSite::Colorectal => &mut self.colorectal,
            CancerSite::Lung => &mut self.lung,
            CancerSite::Prostate => &mut self.prostate,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        CancerSite::ALL.iter().map(|&site| self.count(site)).sum()
    }
}

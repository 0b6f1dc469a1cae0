use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Discrete risk bands and eligibility flags derived from the metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFlags {
    /// Hereditary breast/ovarian pattern; the first matching criterion wins.
    pub breast_ovarian_alert: Option<BreastOvarianCriterion>,
    /// Hereditary colorectal pattern; the first matching criterion wins.
    pub colorectal_alert: Option<ColorectalCriterion>,
    /// Lung cancer in the family combined with ≥ 10 pack-years.
    pub lung_familial_synergy: bool,
    pub cv_tier: CvTier,
    pub diabetes_risk_factors: Vec<DiabetesRiskFactor>,
    pub diabetes_risk_count: u8,
}

impl RiskFlags {
    pub fn has_hereditary_alert(&self) -> bool {
        self.breast_ovarian_alert.is_some() || self.colorectal_alert.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BreastOvarianCriterion {
    /// Two or more breast cancer entries.
    MultipleBreastCases,
    /// At least one breast and one ovarian cancer entry.
    BreastAndOvarian,
    /// A breast cancer entry with an onset before 50.
    EarlyOnsetBreast,
}

impl BreastOvarianCriterion {
    pub fn describe(self) -> &'static str {
        match self {
            BreastOvarianCriterion::MultipleBreastCases => {
                "two or more relatives with breast cancer"
            }
            BreastOvarianCriterion::BreastAndOvarian => {
                "breast and ovarian cancer in the family"
            }
            BreastOvarianCriterion::EarlyOnsetBreast => "breast cancer diagnosed before 50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ColorectalCriterion {
    /// Two or more colorectal cancer entries.
    MultipleColorectalCases,
    /// A colorectal cancer entry with an onset before 50.
    EarlyOnsetColorectal,
}

impl ColorectalCriterion {
    pub fn describe(self) -> &'static str {
        match self {
            ColorectalCriterion::MultipleColorectalCases => {
                "two or more relatives with colorectal cancer"
            }
            ColorectalCriterion::EarlyOnsetColorectal => "colorectal cancer diagnosed before 50",
        }
    }
}

/// Cardiovascular tier from the risk-factor count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CvTier {
    #[default]
    Standard,
    Moderate,
    High,
    /// Four or more factors; managed like secondary prevention.
    VeryHigh,
}

impl CvTier {
    pub fn from_factor_count(count: u8) -> Self {
        match count {
            0 | 1 => CvTier::Standard,
            2 => CvTier::Moderate,
            3 => CvTier::High,
            _ => CvTier::VeryHigh,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CvTier::Standard => "standard",
            CvTier::Moderate => "moderate",
            CvTier::High => "high",
            CvTier::VeryHigh => "very-high",
        }
    }
}

/// Items counted towards type 2 diabetes risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiabetesRiskFactor {
    AgeOver45,
    Overweight,
    Hypertension,
    Dyslipidemia,
    FamilyHistory,
    /// Any previous pregnancy, as a proxy for possible gestational diabetes.
    PriorPregnancy,
}

impl DiabetesRiskFactor {
    pub fn label(self) -> &'static str {
        match self {
            DiabetesRiskFactor::AgeOver45 => "age ≥ 45",
            DiabetesRiskFactor::Overweight => "overweight or obesity",
            DiabetesRiskFactor::Hypertension => "hypertension",
            DiabetesRiskFactor::Dyslipidemia => "dyslipidemia",
            DiabetesRiskFactor::FamilyHistory => "family history of diabetes",
            DiabetesRiskFactor::PriorPregnancy => "previous pregnancy",
        }
    }
}

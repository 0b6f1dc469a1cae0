use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::CoreError;
use crate::lenient;

/// The raw health/lifestyle questionnaire for one person.
///
/// Every field is optional on the wire. Missing, null or malformed values
/// fall back to the defaults below (zero, `false`, empty, or the "unknown"
/// variant) rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct IntakeProfile {
    // Demographics
    #[serde(deserialize_with = "lenient::int")]
    pub age: i32,
    #[serde(deserialize_with = "lenient::keyword")]
    pub sex: Sex,
    /// Body weight in kilograms.
    #[serde(deserialize_with = "lenient::float")]
    pub weight: f64,
    /// Height in centimetres.
    #[serde(deserialize_with = "lenient::float")]
    pub height: f64,
    /// Pre-computed body-mass index. Zero means "compute from weight/height".
    #[serde(deserialize_with = "lenient::float")]
    pub bmi: f64,

    // Tobacco
    #[serde(deserialize_with = "lenient::flag")]
    pub smoker: bool,
    #[serde(deserialize_with = "lenient::keyword")]
    pub smoking_status: SmokingStatus,
    #[serde(deserialize_with = "lenient::float")]
    pub smoking_pack_years: f64,
    #[serde(deserialize_with = "lenient::int")]
    pub smoking_years: i32,
    #[serde(deserialize_with = "lenient::int")]
    pub cigarettes_per_day: i32,
    /// Free-text quit date, e.g. "2012", "2012-06-01" or "mars 2012".
    #[serde(deserialize_with = "lenient::text")]
    pub smoking_quit_date: String,

    // Lifestyle
    #[serde(deserialize_with = "lenient::keyword")]
    pub physical_activity: ActivityLevel,
    #[serde(deserialize_with = "lenient::text")]
    pub alcohol: String,

    // Personal history
    #[serde(deserialize_with = "lenient::flag")]
    pub hypertension: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub cholesterol: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub diabetes: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub heart_disease: bool,

    #[serde(deserialize_with = "lenient::or_default")]
    pub family_history: FamilyHistory,

    // Reproductive health
    #[serde(deserialize_with = "lenient::int")]
    pub pregnancies: i32,
    /// Age at menopause; zero when not menopausal or not reported.
    #[serde(deserialize_with = "lenient::int")]
    pub menopause_age: i32,
    #[serde(deserialize_with = "lenient::flag")]
    pub hormonal_treatment: bool,
    #[serde(deserialize_with = "lenient::keyword")]
    pub hormonal_contraception: ContraceptionUse,
    #[serde(deserialize_with = "lenient::int")]
    pub hormonal_contraception_years: i32,

    #[serde(deserialize_with = "lenient::screenings")]
    pub screenings: BTreeMap<String, ScreeningRecord>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub occupational_exposure: Vec<String>,
}

impl IntakeProfile {
    /// Normalise a raw JSON payload into a profile.
    ///
    /// Only the container shape is checked: the payload must be a JSON
    /// object. Field-level problems are defaulted, never reported.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        if !value.is_object() {
            return Err(CoreError::InvalidIntake(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parse and normalise a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }

    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Family history split by lineage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FamilyHistory {
    #[serde(deserialize_with = "lenient::or_default")]
    pub maternal: LineageHistory,
    #[serde(deserialize_with = "lenient::or_default")]
    pub paternal: LineageHistory,
}

impl FamilyHistory {
    /// Cancer entries from both lineages, maternal first.
    pub fn cancer_entries(&self) -> impl Iterator<Item = &str> {
        self.maternal
            .cancer
            .iter()
            .chain(&self.paternal.cancer)
            .map(String::as_str)
    }
}

/// One side of the family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct LineageHistory {
    /// Free-text cancer entries, e.g. "Sein (mère, 45 ans)".
    #[serde(deserialize_with = "lenient::string_list")]
    pub cancer: Vec<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub heart_disease: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub diabetes: bool,
}

/// A screening the person reports having had.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningRecord {
    /// Free-text date of the last screening.
    #[serde(default)]
    pub date: String,
}

fn normalize_keyword(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['_', ' '], "-")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Female,
    Male,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl From<&str> for Sex {
    fn from(raw: &str) -> Self {
        match normalize_keyword(raw).as_str() {
            "female" | "f" | "woman" | "femme" | "féminin" | "feminin" => Sex::Female,
            "male" | "m" | "man" | "homme" | "h" | "masculin" => Sex::Male,
            _ => Sex::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SmokingStatus {
    Current,
    Former,
    Never,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl From<&str> for SmokingStatus {
    fn from(raw: &str) -> Self {
        match normalize_keyword(raw).as_str() {
            "current" | "active" | "smoker" | "yes" | "fumeur" | "fumeuse" | "actif" | "oui" => {
                SmokingStatus::Current
            }
            "former" | "ex" | "ex-smoker" | "quit" | "past" | "ancien" | "ex-fumeur"
            | "ex-fumeuse" | "sevré" | "sevre" => SmokingStatus::Former,
            "never" | "no" | "non" | "jamais" | "non-smoker" | "non-fumeur" | "non-fumeuse" => {
                SmokingStatus::Never
            }
            _ => SmokingStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    High,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl From<&str> for ActivityLevel {
    fn from(raw: &str) -> Self {
        match normalize_keyword(raw).as_str() {
            "sedentary" | "sédentaire" | "sedentaire" | "none" | "aucune" => {
                ActivityLevel::Sedentary
            }
            "light" | "low" | "faible" | "légère" | "legere" | "occasionnelle" => {
                ActivityLevel::Light
            }
            "moderate" | "modérée" | "moderee" | "modéré" | "modere" | "regular" | "régulière" => {
                ActivityLevel::Moderate
            }
            "high" | "intense" | "active" | "élevée" | "elevee" | "sportif" | "sportive" => {
                ActivityLevel::High
            }
            _ => ActivityLevel::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContraceptionUse {
    Never,
    Past,
    Current,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl From<&str> for ContraceptionUse {
    fn from(raw: &str) -> Self {
        match normalize_keyword(raw).as_str() {
            "never" | "no" | "jamais" | "non" => ContraceptionUse::Never,
            "past" | "former" | "previous" | "passé" | "passe" | "ancienne" | "arrêtée"
            | "arretee" => ContraceptionUse::Past,
            "current" | "yes" | "ongoing" | "actuelle" | "en-cours" | "oui" => {
                ContraceptionUse::Current
            }
            _ => ContraceptionUse::Unknown,
        }
    }
}

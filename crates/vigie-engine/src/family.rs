//! Family-history parsing.
//!
//! Cancer entries arrive as free text ("Sein (mère, 45 ans)", "colon cancer
//! - father"). Site detection sits behind [`CancerSiteClassifier`] so a
//! structured intake can replace keyword matching without touching the rules.

use vigie_core::models::intake::FamilyHistory;
use vigie_core::models::metrics::{CancerSite, FamilyCancerTally};

/// Onset ages strictly below this set the early-onset flag.
pub const EARLY_ONSET_AGE: u32 = 50;

/// Maps one free-text family-history entry to the cancer sites it mentions.
pub trait CancerSiteClassifier: Send + Sync {
    /// Sites mentioned by `entry`, without duplicates.
    fn classify(&self, entry: &str) -> Vec<CancerSite>;

    /// Diagnosis age mentioned by `entry`, if any.
    fn onset_age(&self, entry: &str) -> Option<u32> {
        parse_onset_age(entry)
    }
}

/// Case-insensitive substring matching against a fixed keyword table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier {
    table: &'static [(CancerSite, &'static [&'static str])],
}

/// English and French spellings, lower-case.
const KEYWORDS: &[(CancerSite, &[&str])] = &[
    (
        CancerSite::Breast,
        &["breast", "sein", "mammaire", "mammary"],
    ),
    (CancerSite::Ovarian, &["ovarian", "ovary", "ovaire", "ovarien"]),
    (
        CancerSite::Colorectal,
        &[
            "colorectal",
            "colon",
            "côlon",
            "rectum",
            "rectal",
            "intestin",
            "bowel",
        ],
    ),
    (
        CancerSite::Lung,
        &["lung", "poumon", "pulmonaire", "bronch"],
    ),
    (CancerSite::Prostate, &["prostate", "prostatique"]),
];

impl KeywordClassifier {
    pub const fn new(table: &'static [(CancerSite, &'static [&'static str])]) -> Self {
        Self { table }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(KEYWORDS)
    }
}

impl CancerSiteClassifier for KeywordClassifier {
    fn classify(&self, entry: &str) -> Vec<CancerSite> {
        let lowered = entry.to_lowercase();
        self.table
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(site, _)| *site)
            .collect()
    }
}

/// Tally cancer sites across both lineages and detect early onset.
pub fn tally_family_cancers(
    history: &FamilyHistory,
    classifier: &dyn CancerSiteClassifier,
) -> FamilyCancerTally {
    let mut tally = FamilyCancerTally::default();

    for entry in history.cancer_entries() {
        for site in classifier.classify(entry) {
            tally.increment(site);
        }
        if classifier
            .onset_age(entry)
            .is_some_and(|age| age < EARLY_ONSET_AGE)
        {
            tally.early_onset = true;
        }
    }

    tally
}

/// Age units accepted after a two-digit number.
const AGE_UNITS: &[&str] = &["ans", "an", "years", "year", "yrs", "yr", "yo", "y"];

/// Words that turn the preceding "NN years" into elapsed time.
const AGO_SUFFIXES: &[&str] = &["ago"];

/// Word sequence that turns the following "NN ans" into elapsed time.
const AGO_PREFIX: &[&str] = &["il", "y", "a"];

/// Split into runs of digits and runs of letters, dropping everything else.
/// "45ans" yields `["45", "ans"]`.
fn tokens(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut digits = false;

    for c in text.chars() {
        let is_digit = c.is_ascii_digit();
        if !is_digit && !c.is_alphabetic() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() && is_digit != digits {
            out.push(std::mem::take(&mut current));
        }
        digits = is_digit;
        current.push(c);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Extract a diagnosis age written as a two-digit number followed by an age
/// unit, e.g. "45 ans", "45ans", "38 years", "42 yo".
///
/// Numbers with more or fewer than two digits are ignored, so years such as
/// "1998" never read as an age. Elapsed time ("il y a 10 ans", "10 years
/// ago") is not an age. The first age mentioned is the one returned.
pub fn parse_onset_age(entry: &str) -> Option<u32> {
    let tokens = tokens(&entry.to_lowercase());

    tokens.iter().enumerate().find_map(|(i, token)| {
        if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let unit = tokens.get(i + 1)?;
        if !AGE_UNITS.contains(&unit.as_str()) {
            return None;
        }
        let elapsed_before = i >= AGO_PREFIX.len()
            && tokens[i - AGO_PREFIX.len()..i]
                .iter()
                .map(String::as_str)
                .eq(AGO_PREFIX.iter().copied());
        let elapsed_after = tokens
            .get(i + 2)
            .is_some_and(|next| AGO_SUFFIXES.contains(&next.as_str()));
        if elapsed_before || elapsed_after {
            return None;
        }
        token.parse().ok()
    })
}

//! The clinical rule catalog, one module per topic.

pub mod bone;
pub mod breast;
pub mod cardiovascular;
pub mod cervical;
pub mod colorectal;
pub mod dental;
pub mod eye;
pub mod genetics;
pub mod lung;
pub mod metabolic;
pub mod prostate;
pub mod vaccination;

/// Upper bound used for lifelong recommendations.
pub(crate) const LIFELONG: i32 = 120;

/// Join labels as "a, b, c".
pub(crate) fn join_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> String {
    labels.into_iter().collect::<Vec<_>>().join(", ")
}

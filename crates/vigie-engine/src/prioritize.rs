use vigie_core::models::recommendation::Recommendation;

/// Validate and order rule output.
///
/// Records without a name, interval or source are dropped. The rest are
/// sorted by descending priority; `sort_by` is stable, so records of equal
/// priority keep the order in which the catalog emitted them.
pub fn prioritize(records: Vec<Recommendation>) -> Vec<Recommendation> {
    let mut validated: Vec<Recommendation> = records
        .into_iter()
        .filter(|record| {
            let complete = record.is_complete();
            if !complete {
                tracing::warn!(id = %record.id, "dropping incomplete recommendation");
            }
            complete
        })
        .collect();

    validated.sort_by(|a, b| b.priority.cmp(&a.priority));
    validated
}

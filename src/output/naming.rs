//! Artifact file names.

use chrono::NaiveDate;

/// Default name of the generated artifact.
pub const DEFAULT_FILENAME: &str = "messages.csv";

const DATE_FORMAT: &str = "%m-%d-%Y";

/// Name of the single artifact, optionally prefixed with `MM-DD-YYYY-`.
pub fn artifact_name(base: &str, date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("{}-{}", date.format(DATE_FORMAT), base),
        None => base.to_string(),
    }
}

/// Name of the `index`th (1-based) part of a split artifact.
///
/// `messages.csv` becomes `messages-part-1.csv`.
pub fn part_name(artifact: &str, index: usize) -> String {
    match artifact.rsplit_once('.') {
        Some((stem, ext)) => format!("{}-part-{}.{}", stem, index, ext),
        None => format!("{}-part-{}", artifact, index),
    }
}

//! The event value type.

use chrono::NaiveDate;
use serde::Serialize;

/// A single public holiday or observance. Immutable once built.
///
/// `bunting` keeps the source documents' string-typed boolean: the
/// literal `"true"` marks a day that gets decorative treatment;
/// anything else (including `"TRUE"`) does not. Missing flags default
/// to `"false"` at parse time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub title: String,
    pub date: NaiveDate,
    pub notes: String,
    pub bunting: String,
}

// standard library
use std::fmt;

// crate modules
use crate::f;

// external crates
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// PTRAC file header information
///
/// For example, take the following header:
///
/// ```text
/// -1
/// mcnp6 6 01/01/15 01/01/15 12:00:00
/// Simple slab problem
/// ```
///
/// This would parse to the [Header] as:
///
/// ```json
/// Header {
///     code: "mcnp6",
///     version: 6,
///     load_date: 2015-01-01,
///     run_date: 2015-01-01T12:00:00,
///     title: "Simple slab problem",
/// }
/// ```
///
/// The leading `-1` line is optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    /// Name of the code, e.g. "mcnp6"
    pub code: String,
    /// Code version
    pub version: u32,
    /// Load date of the code
    pub load_date: NaiveDate,
    /// Date and time of the run
    pub run_date: NaiveDateTime,
    /// Problem title from the input deck
    pub title: String,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = "Header\n".to_string();
        s += &f!("  Code      {} (v{})\n", self.code, self.version);
        s += &f!("  Load date {}\n", self.load_date);
        s += &f!("  Run date  {}\n", self.run_date);
        s += &f!("  Title     {}", self.title);
        write!(f, "{s}")
    }
}

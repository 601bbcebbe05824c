// crate modules
use crate::error::FormatError;
use crate::f;

// external crates
use chrono::{NaiveDate, NaiveDateTime};

// nom parser combinators
use nom::bytes::complete::take_till1;
use nom::character::complete::{self, space1};
use nom::sequence::preceded;
use nom::IResult;

/// Number of whitespace separated values on the metadata line
pub(crate) const METADATA_TOKENS: usize = 5;

#[derive(Debug, PartialEq)]
pub(crate) struct Metadata<'a> {
    /// Name of the code, e.g. "mcnp6"
    pub code: &'a str,
    /// Code version number
    pub version: u32,
    /// Load date of the code, mm/dd/yy
    pub load_date: &'a str,
    /// Date of the run, mm/dd/yy
    pub run_date: &'a str,
    /// Time of the run, hh:mm:ss
    pub run_time: &'a str,
}

/// Checks for the bare `-1` line that may open the file
pub(crate) fn is_sentinel(i: &str) -> bool {
    i.trim() == "-1"
}

/// Parse the metadata line into its five components
pub(crate) fn metadata(i: &str) -> IResult<&str, Metadata<'_>> {
    let (i, code) = token(i.trim_start())?;
    let (i, version) = preceded(space1, complete::u32)(i)?;
    let (i, load_date) = preceded(space1, token)(i)?;
    let (i, run_date) = preceded(space1, token)(i)?;
    let (i, run_time) = preceded(space1, token)(i)?;

    Ok((
        i,
        Metadata {
            code,
            version,
            load_date,
            run_date,
            run_time,
        },
    ))
}

/// Date in the `mm/dd/yy` form
pub(crate) fn date(s: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(s, "%m/%d/%y").map_err(|_| FormatError::InvalidDate(s.to_string()))
}

/// Date and time in the `mm/dd/yy` and `hh:mm:ss` forms
pub(crate) fn date_time(date: &str, time: &str) -> Result<NaiveDateTime, FormatError> {
    let s = f!("{date} {time}");
    NaiveDateTime::parse_from_str(&s, "%m/%d/%y %H:%M:%S").map_err(|_| FormatError::InvalidDate(s))
}

/// Any run of non-whitespace characters
fn token(i: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(i)
}

//! Positional field codes used by the event format block
//!
//! Every record in the event stream is a flat list of values. The event
//! format block declares, per record category, which field code occupies
//! each position. Codes are 1-based and shared across the file:
//!
//! | Code  | Category | Field                                   |
//! | ----- | -------- | --------------------------------------- |
//! | 1     | summary  | NPS, source particle count              |
//! | 2     | summary  | *first event type (lookahead)*          |
//! | 3     | summary  | NCL, problem number of the cell         |
//! | 4     | summary  | NSF, problem number of the surface      |
//! | 5     | summary  | JPTAL, basic tally information          |
//! | 6     | summary  | TAL, tally score accumulation           |
//! | 7     | event    | *next event type (lookahead)*           |
//! | 8     | event    | NODE, number of nodes from the source   |
//! | 9     | event    | NSR, source type                        |
//! | 10    | event    | NXS, cross section table block          |
//! | 11    | event    | NTYN, reaction type                     |
//! | 12    | event    | NSF, surface number                     |
//! | 13    | event    | ANGSRF, angle with surface normal (deg) |
//! | 14    | event    | NTER, termination type                  |
//! | 15    | event    | NBRANCH, branch number                  |
//! | 16    | event    | IPT, particle type                      |
//! | 17    | event    | NCL, problem number of the cell         |
//! | 18    | event    | MAT, material number                    |
//! | 19    | event    | NCP, collisions per track               |
//! | 20-22 | event    | XXX, YYY, ZZZ position                  |
//! | 23-25 | event    | UUU, VVV, WWW direction cosines         |
//! | 26    | event    | ERG, energy                             |
//! | 27    | event    | WGT, weight                             |
//! | 28    | event    | TME, time                               |
//!
//! The lookahead codes are consumed by the decoder to find the type of the
//! next record, so they map to no field.

// crate modules
use crate::error::FormatError;

// external crates
use serde::Serialize;

/// Field code marking the type of the first event in a summary record
pub const FIRST_EVENT_CODE: i64 = 2;

/// Event type marking the end of a history
pub const END_OF_HISTORY: i64 = 9000;

/// Number of codes reserved for the history summary record
const SUMMARY_OFFSET: i64 = 6;

/// Summary record table, index = code - 1
const SUMMARY_TABLE: [Option<SummaryField>; 6] = [
    Some(SummaryField::Nps),
    None,
    Some(SummaryField::Cell),
    Some(SummaryField::Surface),
    Some(SummaryField::Jptal),
    Some(SummaryField::Tal),
];

/// Event record table, index = code - 7
const EVENT_TABLE: [Option<EventField>; 22] = [
    None,
    Some(EventField::Node),
    Some(EventField::SourceType),
    Some(EventField::CrossSection),
    Some(EventField::Reaction),
    Some(EventField::Surface),
    Some(EventField::Angle),
    Some(EventField::Termination),
    Some(EventField::Branch),
    Some(EventField::Particle),
    Some(EventField::Cell),
    Some(EventField::Material),
    Some(EventField::Collisions),
    Some(EventField::X),
    Some(EventField::Y),
    Some(EventField::Z),
    Some(EventField::U),
    Some(EventField::V),
    Some(EventField::W),
    Some(EventField::Energy),
    Some(EventField::Weight),
    Some(EventField::Time),
];

/// Fields of the history summary record
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SummaryField {
    /// Source particle count
    Nps,
    /// Problem number of the cell
    Cell,
    /// Problem number of the surface
    Surface,
    /// Basic tally information
    Jptal,
    /// Tally score accumulation
    Tal,
}

impl SummaryField {
    /// Look up a summary field code
    ///
    /// Returns `None` for codes that are valid but carry no field, and an
    /// error for anything outside of the summary codes.
    ///
    /// ```rust
    /// # use ntrack_ptrac::SummaryField;
    /// assert_eq!(SummaryField::from_code(1).unwrap(), Some(SummaryField::Nps));
    /// assert_eq!(SummaryField::from_code(2).unwrap(), None);
    /// assert!(SummaryField::from_code(7).is_err());
    /// ```
    pub fn from_code(code: i64) -> Result<Option<Self>, FormatError> {
        match code {
            1..=SUMMARY_OFFSET => Ok(SUMMARY_TABLE[(code - 1) as usize]),
            _ => Err(FormatError::UnknownFieldCode(code)),
        }
    }
}

/// Fields of an event record
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum EventField {
    /// Number of nodes in the track from the source
    Node,
    /// Source type
    SourceType,
    /// Block of descriptors for the cross section table
    CrossSection,
    /// Reaction type of the collision
    Reaction,
    /// Surface number
    Surface,
    /// Angle with the surface normal in degrees
    Angle,
    /// Termination type
    Termination,
    /// Branch number of the history
    Branch,
    /// Particle type
    Particle,
    /// Problem number of the cell
    Cell,
    /// Material number of the cell
    Material,
    /// Number of collisions per track
    Collisions,
    X,
    Y,
    Z,
    U,
    V,
    W,
    /// Particle energy
    Energy,
    /// Particle weight
    Weight,
    /// Time at the particle position
    Time,
}

impl EventField {
    /// Look up an event field code
    ///
    /// Event codes follow the six summary codes, so code 7 is the first entry
    /// of the event table.
    ///
    /// ```rust
    /// # use ntrack_ptrac::EventField;
    /// assert_eq!(EventField::from_code(20).unwrap(), Some(EventField::X));
    /// assert_eq!(EventField::from_code(7).unwrap(), None);
    /// assert!(EventField::from_code(3).is_err());
    /// ```
    pub fn from_code(code: i64) -> Result<Option<Self>, FormatError> {
        let index = code - SUMMARY_OFFSET - 1;
        match usize::try_from(index) {
            Ok(i) if i < EVENT_TABLE.len() => Ok(EVENT_TABLE[i]),
            _ => Err(FormatError::UnknownFieldCode(code)),
        }
    }
}

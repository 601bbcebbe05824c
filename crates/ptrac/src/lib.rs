//! Module for decoding MCNP PTRAC files
//!
//! The PTRAC file is a sequential record of every simulated particle history,
//! written as plain text when the PTRAC card is used with `file=asc`.
//!
//! - [PtracReader] - Line-by-line reader for the whole file
//! - [History] - All events of one source particle
//!
//! The layout of the event records is not fixed. It is declared at the top of
//! the file by the format blocks, which depend on the options given on the
//! PTRAC card:
//!
//! | Data block      | Description                                         |
//! | --------------- | --------------------------------------------------- |
//! | [Header]        | code, version, dates and problem title              |
//! | [InputFormat]   | keywords requested on the PTRAC card                |
//! | [EventFormat]   | field codes written for every record category       |
//! | [History]       | summary line followed by its [Event] records        |
//!
//! Every value in a record is identified only by its position. The
//! [EventFormat] maps positions to field codes, and the field codes map to
//! named fields via [SummaryField] and [EventField].
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use ntrack_ptrac::{read_ptrac, EventKind};
//! // Read every history in the file
//! let histories = read_ptrac("/path/to/ptrac").unwrap();
//!
//! // Count the collisions of the first history
//! let collisions = histories[0]
//!     .events
//!     .iter()
//!     .filter(|e| e.kind() == EventKind::Collision)
//!     .count();
//! ```
//!
//! For large files the histories should be streamed instead, see
//! [PtracReader::events].

mod core;
mod error;
mod parsers;
mod reader;

// Alias for the format! macro
pub(crate) use std::format as f;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, FormatError, LifecycleError, Result};

#[doc(inline)]
pub use reader::{read_ptrac, read_ptrac_target, Histories, PtracReader};

#[doc(inline)]
pub use crate::core::*;

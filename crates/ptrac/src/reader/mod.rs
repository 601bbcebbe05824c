//! Reader for PTRAC files
//!
//! A PTRAC file describes its own layout. The first few blocks declare which
//! values are written for every record that follows, so the reader works in
//! two stages:
//!
//! - [PtracReader::parse] reads the header, input format and event format
//!   blocks, in that order
//! - [PtracReader::events] then decodes the remaining lines lazily, one
//!   [History] at a time
//!
//! The file is read line-by-line using a buffered input stream so that only a
//! single line and the current history are held in memory.
//!
//! ```rust, no_run
//! # use ntrack_ptrac::PtracReader;
//! // Reads the header and format blocks straight away
//! let mut reader = PtracReader::from_file("path/to/ptrac").unwrap();
//! println!("{}", reader.header().unwrap());
//!
//! // Histories are only decoded as they are requested
//! for history in reader.events().unwrap() {
//!     let history = history.unwrap();
//!     println!("{} events", history.events.len());
//! }
//! ```

mod header;
mod history;
mod input;
mod schema;

// re-exports for clean API + documentation
#[doc(inline)]
pub use history::Histories;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

// crate modules
use crate::core::{EventFormat, Header, History, InputFormat};
use crate::error::{Error, FormatError, LifecycleError, Result};

// external crates
use log::{debug, info};
use nom::IResult;

/// Read all histories in a PTRAC file
///
/// Returns a result containing every [History] in the file at `path`, in the
/// order they were written.
///
/// - `path` - Path to the PTRAC file, can be [&str], [String], [Path], etc...
///
/// Example
/// ```rust, no_run
/// # use ntrack_ptrac::{History, read_ptrac};
/// let histories: Vec<History> = read_ptrac("path/to/ptrac").unwrap();
/// ```
pub fn read_ptrac<P: AsRef<Path>>(path: P) -> Result<Vec<History>> {
    let mut reader = PtracReader::from_file(path)?;
    reader.events()?.collect::<Result<Vec<History>>>()
}

/// Read only the history of a specific source particle
///
/// Decoding stops as soon as the history is found.
///
/// - `path` - Path to the PTRAC file, can be [&str], [String], [Path], etc...
/// - `nps` - Source particle number of interest
///
/// Example
/// ```rust, no_run
/// # use ntrack_ptrac::{History, read_ptrac_target};
/// let history: History = read_ptrac_target("path/to/ptrac", 42).unwrap();
/// ```
pub fn read_ptrac_target<P: AsRef<Path>>(path: P, nps: u64) -> Result<History> {
    let mut reader = PtracReader::from_file(path)?;
    for history in reader.events()? {
        let history = history?;
        if history.nps == Some(nps) {
            return Ok(history);
        }
    }
    Err(Error::HistoryNotFound(nps))
}

/// Where the reader is in the file
#[derive(Debug, Copy, Clone, PartialEq)]
enum State {
    /// Nothing read yet
    Fresh,
    /// Header and format blocks read, positioned on the event stream
    Parsed,
    /// Event stream fully consumed
    Exhausted,
    /// A stage failed and the position in the file is unknown
    Failed,
}

/// Sequential PTRAC reader over any buffered line source
///
/// Usually created with [PtracReader::from_file] or [PtracReader::open], both
/// of which read the header and format blocks immediately and fail fast on
/// anything malformed.
///
/// [PtracReader::new] only wraps the source, for when the blocks should be
/// parsed later with [PtracReader::parse].
///
/// ```rust
/// # use ntrack_ptrac::PtracReader;
/// let text = "\
/// mcnp6 6 01/01/15 01/01/15 12:00:00
/// Example problem
/// 13 0 0 0 0 0 0 0 0 0 0 0 0 0
/// 2 0 0 0 0 0 0 0 0 0 0 0 0
/// 1 2
/// ";
///
/// let mut reader = PtracReader::open(text.as_bytes()).unwrap();
/// assert_eq!(reader.header().unwrap().code, "mcnp6");
///
/// // The event stream of this file is empty
/// assert_eq!(reader.events().unwrap().count(), 0);
/// ```
#[derive(Debug)]
pub struct PtracReader<R> {
    /// Line source shared by every stage
    source: LineSource<R>,
    /// Lifecycle of the reader
    state: State,
    /// File metadata and title
    header: Option<Header>,
    /// Options requested on the PTRAC card
    input_format: Option<InputFormat>,
    /// Schema applied to every record of the event stream
    event_format: Option<EventFormat>,
    /// Number of histories decoded so far
    histories_read: usize,
}

// ! ------------------------------------------------------------------------
// !                                Public API
// ! ------------------------------------------------------------------------

impl PtracReader<BufReader<File>> {
    /// Open and parse the header and format blocks of a PTRAC file
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {}", path.as_ref().display());
        let file = File::open(path)?;
        Self::open(BufReader::new(file))
    }
}

impl<R: BufRead> PtracReader<R> {
    /// Wrap a line source without reading anything
    pub fn new(source: R) -> Self {
        Self {
            source: LineSource::new(source),
            state: State::Fresh,
            header: None,
            input_format: None,
            event_format: None,
            histories_read: 0,
        }
    }

    /// Wrap a line source and parse the header and format blocks
    pub fn open(source: R) -> Result<Self> {
        let mut reader = Self::new(source);
        reader.parse()?;
        Ok(reader)
    }

    /// Parse the header, input format and event format blocks
    ///
    /// May only be called once, before any events are read. If any block is
    /// malformed the reader can not be used any further.
    pub fn parse(&mut self) -> Result<()> {
        match self.state {
            State::Fresh => {}
            State::Failed => return Err(LifecycleError::Failed.into()),
            State::Parsed | State::Exhausted => return Err(LifecycleError::AlreadyParsed.into()),
        }

        match self.parse_blocks() {
            Ok(()) => {
                self.state = State::Parsed;
                Ok(())
            }
            Err(e) => {
                self.state = State::Failed;
                Err(e)
            }
        }
    }

    /// Lazily decode the remaining histories
    ///
    /// The stream is one-pass. Histories that have been yielded are not read
    /// again, and once the stream reaches its end the reader is exhausted.
    pub fn events(&mut self) -> Result<Histories<'_, R>> {
        match self.state {
            State::Parsed => Ok(Histories::new(self)),
            State::Fresh => Err(LifecycleError::NotParsed.into()),
            State::Exhausted => Err(LifecycleError::StreamExhausted.into()),
            State::Failed => Err(LifecycleError::Failed.into()),
        }
    }

    /// Decode the next history
    ///
    /// Returns `Ok(None)` once the end of the event stream is reached.
    pub fn next_history(&mut self) -> Result<Option<History>> {
        match self.state {
            State::Parsed => {}
            State::Fresh => return Err(LifecycleError::NotParsed.into()),
            State::Exhausted => return Ok(None),
            State::Failed => return Err(LifecycleError::Failed.into()),
        }

        let Some(format) = self.event_format.as_ref() else {
            return Err(LifecycleError::NotParsed.into());
        };

        match self.source.read_history(format) {
            Ok(Some(history)) => {
                self.histories_read += 1;
                Ok(Some(history))
            }
            Ok(None) => {
                debug!("Event stream complete, {} histories", self.histories_read);
                self.state = State::Exhausted;
                Ok(None)
            }
            Err(e) => {
                self.state = State::Failed;
                Err(e)
            }
        }
    }

    /// Header data, available once parsed
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Input format data, available once parsed
    pub fn input_format(&self) -> Option<&InputFormat> {
        self.input_format.as_ref()
    }

    /// Event format data, available once parsed
    pub fn event_format(&self) -> Option<&EventFormat> {
        self.event_format.as_ref()
    }

    /// Number of histories decoded so far
    pub fn histories_read(&self) -> usize {
        self.histories_read
    }

    // The three schema blocks are always in this order
    fn parse_blocks(&mut self) -> Result<()> {
        let header = self.source.parse_header()?;
        let input_format = self.source.parse_input_format()?;
        let event_format = self.source.parse_event_format()?;

        self.header = Some(header);
        self.input_format = Some(input_format);
        self.event_format = Some(event_format);
        Ok(())
    }
}

// ! ------------------------------------------------------------------------
// !                               Internal API
// ! ------------------------------------------------------------------------

/// Sequential lines of the file, caching the most recent
#[derive(Debug)]
pub(crate) struct LineSource<R> {
    lines: Lines<R>,
    cached_line: String,
    line_number: usize,
}

impl<R: BufRead> LineSource<R> {
    fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            cached_line: String::new(),
            line_number: 0,
        }
    }

    // Advances to the next line, saving it to the cache and returning a ref
    pub(crate) fn next_line(&mut self) -> Result<&str> {
        self.try_next_line()?
            .ok_or(Error::Format(FormatError::UnexpectedEndOfStream))
    }

    // Same as next_line(), but the end of the file is not an error
    pub(crate) fn try_next_line(&mut self) -> Result<Option<&str>> {
        match self.lines.next() {
            Some(line) => {
                self.cached_line = line?;
                self.line_number += 1;
                Ok(Some(self.cached_line.as_str()))
            }
            None => Ok(None),
        }
    }

    // Keep appending values from the following lines until there are enough
    pub(crate) fn extend_until(
        &mut self,
        values: &mut Vec<i64>,
        required: usize,
        parser: fn(&str) -> IResult<&str, Vec<i64>>,
    ) -> Result<()> {
        while values.len() < required {
            let (_, more) = parser(self.next_line()?)?;
            values.extend(more);
        }
        Ok(())
    }
}

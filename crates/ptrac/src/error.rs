//! Result and Error types for the ptrac module

/// Type alias for `Result<T, ptrac::Error>`
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for `ntrack-ptrac`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Malformed or truncated file content
    #[error("malformed ptrac content: {0}")]
    Format(#[from] FormatError),

    /// Reader stages called out of order
    #[error("reader used out of order: {0}")]
    Lifecycle(#[from] LifecycleError),

    /// No history in the file matched the requested source particle
    #[error("history for nps {0} not found")]
    HistoryNotFound(u64),
}

/// Problems with the content of a PTRAC file
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FormatError {
    /// A line holds fewer whitespace separated values than required
    #[error("too few tokens (expected at least {expected}, found {found})")]
    TooFewTokens { expected: usize, found: usize },

    /// Number of values does not match the declared schema
    #[error("unexpected number of values (expected {expected}, found {found})")]
    UnexpectedLength { expected: usize, found: usize },

    /// Ran out of lines part way through a block
    #[error("unexpected end of stream")]
    UnexpectedEndOfStream,

    /// Event type outside of the known source/bank/surface/collision/termination ranges
    #[error("unrecognised event category for type {0}")]
    UnrecognisedEventCategory(i64),

    /// The summary field codes do not declare the first event type
    #[error("sentinel field code not found in schema")]
    SentinelNotFound,

    /// Field code outside of the table for its record category
    #[error("unknown field code {0}")]
    UnknownFieldCode(i64),

    /// A count declared in the schema block is below zero
    #[error("negative count {0} in format block")]
    NegativeCount(i64),

    /// Counts declared in the schema block are too large to add up
    #[error("declared counts overflow in format block")]
    CountOverflow,

    /// Date or time token in the header could not be parsed
    #[error("failed to parse date from \"{0}\"")]
    InvalidDate(String),

    /// Generic error type for nom parser results
    #[error("parser failed: {0}")]
    ParseError(String),
}

/// Schema stages and the event stream must be used in file order
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LifecycleError {
    /// Schema blocks can only be parsed once
    #[error("header and format blocks have already been parsed")]
    AlreadyParsed,

    /// Events requested before the schema blocks were parsed
    #[error("header and format blocks have not been parsed")]
    NotParsed,

    /// Event stream was read to the end and can not be restarted
    #[error("event stream has already been consumed")]
    StreamExhausted,

    /// An earlier stage failed, the position in the file is unknown
    #[error("reader failed during an earlier stage")]
    Failed,
}

// this should really implement nom::error::ParseError<&str> for FormatError
impl From<nom::Err<nom::error::Error<&str>>> for FormatError {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Self::ParseError(format!("{err:?}"))
    }
}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Self::Format(err.into())
    }
}

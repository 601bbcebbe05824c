// standard library
use std::collections::BTreeMap;
use std::fmt;

// crate modules
use crate::f;

// external crates
use serde::Serialize;

/// Keywords of the PTRAC input card, in the order they appear in the file
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Keyword {
    Buffer,
    Cell,
    Event,
    File,
    Filter,
    Max,
    Menp,
    Nps,
    Surface,
    Tally,
    Type,
    Value,
    Write,
}

impl Keyword {
    /// Every keyword in file order
    pub const ALL: [Keyword; 13] = [
        Keyword::Buffer,
        Keyword::Cell,
        Keyword::Event,
        Keyword::File,
        Keyword::Filter,
        Keyword::Max,
        Keyword::Menp,
        Keyword::Nps,
        Keyword::Surface,
        Keyword::Tally,
        Keyword::Type,
        Keyword::Value,
        Keyword::Write,
    ];

    /// Name as written on the PTRAC card
    pub fn name(&self) -> &'static str {
        match self {
            Self::Buffer => "buffer",
            Self::Cell => "cell",
            Self::Event => "event",
            Self::File => "file",
            Self::Filter => "filter",
            Self::Max => "max",
            Self::Menp => "menp",
            Self::Nps => "nps",
            Self::Surface => "surface",
            Self::Tally => "tally",
            Self::Type => "type",
            Self::Value => "value",
            Self::Write => "write",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options requested on the PTRAC input card
///
/// Kept for provenance only. Nothing in the event stream depends on these
/// values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputFormat {
    /// Number of keywords declared at the start of the block
    pub n_keywords: i64,
    /// Values given for each keyword
    pub keywords: BTreeMap<Keyword, Vec<i64>>,
}

impl InputFormat {
    /// Values for a keyword, empty if none were given
    ///
    /// ```rust
    /// # use ntrack_ptrac::{InputFormat, Keyword};
    /// let mut input = InputFormat::default();
    /// input.keywords.insert(Keyword::Event, vec![4, 5]);
    ///
    /// assert_eq!(input.get(Keyword::Event), &[4, 5]);
    /// assert!(input.get(Keyword::Tally).is_empty());
    /// ```
    pub fn get(&self, keyword: Keyword) -> &[i64] {
        self.keywords
            .get(&keyword)
            .map(|v| v.as_slice())
            .unwrap_or_default()
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = f!("InputFormat ({} keywords)", self.n_keywords);
        for (keyword, values) in &self.keywords {
            s += &f!("\n  {:<8} {:?}", keyword.name(), values);
        }
        write!(f, "{s}")
    }
}

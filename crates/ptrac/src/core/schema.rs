// standard library
use std::fmt;

// crate modules
use crate::core::field::FIRST_EVENT_CODE;
use crate::error::FormatError;
use crate::f;

// external crates
use serde::Serialize;

/// Record categories declared in the event format block
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// History summary line
    Summary,
    Source,
    Bank,
    Surface,
    Collision,
    Termination,
}

/// Event format block, the schema for every record that follows
///
/// The block starts with a line of counts:
///
/// ```text
/// n_nps  src_a src_b  bnk_a bnk_b  sur_a sur_b  col_a col_b  ter_a ter_b  ipt  bytes
/// ```
///
/// Each event category has two counts, one for the integer line and one for
/// the real line of the record, and the category total is their sum. The
/// field codes for every category follow as one flat list, which is sliced
/// in order into the `id_*` arrays.
///
/// The length of every `id_*` array always matches its count.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventFormat {
    /// Number of values on a history summary line
    pub n_nps: usize,
    /// Number of values in a source event
    pub n_src_ev: usize,
    /// Number of values in a bank event
    pub n_bnk_ev: usize,
    /// Number of values in a surface event
    pub n_sur_ev: usize,
    /// Number of values in a collision event
    pub n_col_ev: usize,
    /// Number of values in a termination event
    pub n_ter_ev: usize,
    /// Particle type for single particle transport
    pub ipt_single_transport: Option<i64>,
    /// Output byte size hint
    pub output_byte_size: Option<i64>,
    /// Field codes of the history summary line
    pub id_nps: Vec<i64>,
    /// Field codes of a source event
    pub id_src_ev: Vec<i64>,
    /// Field codes of a bank event
    pub id_bnk_ev: Vec<i64>,
    /// Field codes of a surface event
    pub id_sur_ev: Vec<i64>,
    /// Field codes of a collision event
    pub id_col_ev: Vec<i64>,
    /// Field codes of a termination event
    pub id_ter_ev: Vec<i64>,
}

impl EventFormat {
    /// Field codes declared for a record category
    pub fn ids(&self, category: Category) -> &[i64] {
        match category {
            Category::Summary => &self.id_nps,
            Category::Source => &self.id_src_ev,
            Category::Bank => &self.id_bnk_ev,
            Category::Surface => &self.id_sur_ev,
            Category::Collision => &self.id_col_ev,
            Category::Termination => &self.id_ter_ev,
        }
    }

    /// Number of values declared for a record category
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Summary => self.n_nps,
            Category::Source => self.n_src_ev,
            Category::Bank => self.n_bnk_ev,
            Category::Surface => self.n_sur_ev,
            Category::Collision => self.n_col_ev,
            Category::Termination => self.n_ter_ev,
        }
    }

    /// Total number of field codes in the block
    ///
    /// Fails if the counts are too large to add up.
    ///
    /// ```rust
    /// # use ntrack_ptrac::{EventFormat, FormatError};
    /// let mut format = EventFormat::default();
    /// format.n_nps = 2;
    /// format.n_col_ev = 10;
    /// assert_eq!(format.total(), Ok(12));
    ///
    /// format.n_ter_ev = usize::MAX;
    /// assert_eq!(format.total(), Err(FormatError::CountOverflow));
    /// ```
    pub fn total(&self) -> Result<usize, FormatError> {
        [
            self.n_src_ev,
            self.n_bnk_ev,
            self.n_sur_ev,
            self.n_col_ev,
            self.n_ter_ev,
        ]
        .into_iter()
        .try_fold(self.n_nps, usize::checked_add)
        .ok_or(FormatError::CountOverflow)
    }

    /// Position of the first event type on a summary line
    ///
    /// ```rust
    /// # use ntrack_ptrac::EventFormat;
    /// let mut format = EventFormat::default();
    /// format.id_nps = vec![1, 2];
    /// assert_eq!(format.first_event_index().unwrap(), 1);
    /// ```
    pub fn first_event_index(&self) -> Result<usize, FormatError> {
        self.id_nps
            .iter()
            .position(|&code| code == FIRST_EVENT_CODE)
            .ok_or(FormatError::SentinelNotFound)
    }
}

impl fmt::Display for EventFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let optional = |v: Option<i64>| v.map_or("none".to_string(), |v| f!("{v}"));

        let mut s = "EventFormat\n".to_string();
        s += &f!("  ipt single  {}\n", optional(self.ipt_single_transport));
        s += &f!("  byte size   {}\n", optional(self.output_byte_size));
        s += &f!("  nps      {:>3} {:?}\n", self.n_nps, self.id_nps);
        s += &f!("  source   {:>3} {:?}\n", self.n_src_ev, self.id_src_ev);
        s += &f!("  bank     {:>3} {:?}\n", self.n_bnk_ev, self.id_bnk_ev);
        s += &f!("  surface  {:>3} {:?}\n", self.n_sur_ev, self.id_sur_ev);
        s += &f!("  collide  {:>3} {:?}\n", self.n_col_ev, self.id_col_ev);
        s += &f!("  terminal {:>3} {:?}", self.n_ter_ev, self.id_ter_ev);
        write!(f, "{s}")
    }
}

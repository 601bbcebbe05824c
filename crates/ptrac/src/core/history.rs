// standard library
use std::fmt;

// crate modules
use crate::core::event::Event;
use crate::core::field::SummaryField;
use crate::f;

// external crates
use serde::Serialize;

/// All recorded events for one source particle
///
/// The summary values come from the history line that opens each block in
/// the event stream. As with [Event], anything the file does not declare is
/// left as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct History {
    /// Source particle count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nps: Option<u64>,
    /// Problem number of the cell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<i64>,
    /// Problem number of the surface
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<i64>,
    /// Basic tally information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jptal: Option<i64>,
    /// Tally score accumulation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tal: Option<i64>,
    /// Events in the order they were recorded
    pub events: Vec<Event>,
}

impl History {
    /// Set a summary field from its raw value
    ///
    /// Negative particle counts are not meaningful and leave `nps` unset.
    pub fn set(&mut self, field: SummaryField, value: i64) {
        match field {
            SummaryField::Nps => self.nps = u64::try_from(value).ok(),
            SummaryField::Cell => self.cell = Some(value),
            SummaryField::Surface => self.surface = Some(value),
            SummaryField::Jptal => self.jptal = Some(value),
            SummaryField::Tal => self.tal = Some(value),
        }
    }

    /// Positions of every event that recorded one
    ///
    /// Useful for plotting the particle track.
    pub fn track(&self) -> Vec<[f64; 3]> {
        self.events.iter().filter_map(Event::position).collect()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = "History".to_string();
        if let Some(nps) = self.nps {
            s += &f!(" {nps}");
        }
        for (name, value) in [
            ("Cell", self.cell),
            ("Surface", self.surface),
            ("Jptal", self.jptal),
            ("Tal", self.tal),
        ] {
            if let Some(value) = value {
                s += &f!("\n  {name:<14}{value}");
            }
        }
        s += &f!("\n  Events        {}", self.events.len());
        for event in &self.events {
            s += &f!("\n{event}");
        }
        write!(f, "{s}")
    }
}

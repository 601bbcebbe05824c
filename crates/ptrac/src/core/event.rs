// standard library
use std::fmt;

// crate modules
use crate::core::field::EventField;
use crate::core::schema::Category;
use crate::error::FormatError;
use crate::f;

// external crates
use serde::Serialize;

/// Classification of an event from its numeric type
///
/// | Type       | Event                             |
/// | ---------- | --------------------------------- |
/// | 1000       | source                            |
/// | ±(2000+L)  | bank, L is the bank type          |
/// | 3000       | surface crossing                  |
/// | 4000       | collision                         |
/// | 5000       | termination                       |
///
/// The category is the type divided by 1000 with truncation. Only bank
/// events may be negative, the sign giving the direction of the bank.
///
/// ```rust
/// # use ntrack_ptrac::{BankDirection, EventKind};
/// assert_eq!(EventKind::try_from(4000).unwrap(), EventKind::Collision);
/// assert_eq!(
///     EventKind::try_from(-2005).unwrap(),
///     EventKind::Bank { code: 5, direction: BankDirection::Backward }
/// );
/// assert!(EventKind::try_from(6000).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Source,
    Bank { code: u32, direction: BankDirection },
    Surface,
    Collision,
    Termination,
}

/// Sign of a bank event type
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum BankDirection {
    Forward,
    Backward,
}

impl EventKind {
    /// Record category used to look up the field codes
    pub fn category(&self) -> Category {
        match self {
            Self::Source => Category::Source,
            Self::Bank { .. } => Category::Bank,
            Self::Surface => Category::Surface,
            Self::Collision => Category::Collision,
            Self::Termination => Category::Termination,
        }
    }
}

impl TryFrom<i64> for EventKind {
    type Error = FormatError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let magnitude = value.unsigned_abs();
        match (value.signum(), magnitude / 1000) {
            (1, 1) => Ok(Self::Source),
            (1, 2) => Ok(Self::Bank {
                code: (magnitude - 2000) as u32,
                direction: BankDirection::Forward,
            }),
            (-1, 2) => Ok(Self::Bank {
                code: (magnitude - 2000) as u32,
                direction: BankDirection::Backward,
            }),
            (1, 3) => Ok(Self::Surface),
            (1, 4) => Ok(Self::Collision),
            (1, 5) => Ok(Self::Termination),
            _ => Err(FormatError::UnrecognisedEventCategory(value)),
        }
    }
}

/// A single transport event within a [History](crate::History)
///
/// Only the fields declared for the event category in the
/// [EventFormat](crate::EventFormat) are ever set. Anything not written to
/// the file is `None`, never a default value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Raw event type as written in the file
    #[serde(rename = "type")]
    pub event_type: i64,
    /// Classified event type
    kind: EventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_section: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<i64>,
    /// Angle with the surface normal (degrees)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<i64>,
    /// Particle type (1=neutron, 2=photon, 0=others)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particle: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<i64>,
    /// Number of collisions per track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collisions: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

impl Event {
    /// New event with every field unset
    pub fn new(event_type: i64) -> Result<Self, FormatError> {
        Ok(Self {
            event_type,
            kind: EventKind::try_from(event_type)?,
            node: None,
            source_type: None,
            cross_section: None,
            reaction: None,
            surface: None,
            angle: None,
            termination: None,
            branch: None,
            particle: None,
            cell: None,
            material: None,
            collisions: None,
            x: None,
            y: None,
            z: None,
            u: None,
            v: None,
            w: None,
            energy: None,
            weight: None,
            time: None,
        })
    }

    /// Classified event type
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Set a field from its raw value
    ///
    /// All event values are read as reals, integer fields are truncated.
    pub fn set(&mut self, field: EventField, value: f64) {
        let integer = Some(value as i64);
        match field {
            EventField::Node => self.node = integer,
            EventField::SourceType => self.source_type = integer,
            EventField::CrossSection => self.cross_section = integer,
            EventField::Reaction => self.reaction = integer,
            EventField::Surface => self.surface = integer,
            EventField::Angle => self.angle = Some(value),
            EventField::Termination => self.termination = integer,
            EventField::Branch => self.branch = integer,
            EventField::Particle => self.particle = integer,
            EventField::Cell => self.cell = integer,
            EventField::Material => self.material = integer,
            EventField::Collisions => self.collisions = integer,
            EventField::X => self.x = Some(value),
            EventField::Y => self.y = Some(value),
            EventField::Z => self.z = Some(value),
            EventField::U => self.u = Some(value),
            EventField::V => self.v = Some(value),
            EventField::W => self.w = Some(value),
            EventField::Energy => self.energy = Some(value),
            EventField::Weight => self.weight = Some(value),
            EventField::Time => self.time = Some(value),
        }
    }

    /// Position, if all three coordinates were recorded
    pub fn position(&self) -> Option<[f64; 3]> {
        Some([self.x?, self.y?, self.z?])
    }

    /// Direction cosines, if all three were recorded
    pub fn direction(&self) -> Option<[f64; 3]> {
        Some([self.u?, self.v?, self.w?])
    }

    /// Every populated field paired with its value, in table order
    fn populated(&self) -> Vec<(&'static str, String)> {
        let int = |name: &'static str, v: Option<i64>| v.map(|v| (name, f!("{v}")));
        let real = |name: &'static str, v: Option<f64>| v.map(|v| (name, f!("{v:.5e}")));

        [
            int("Node", self.node),
            int("Source type", self.source_type),
            int("Cross section", self.cross_section),
            int("Reaction", self.reaction),
            int("Surface", self.surface),
            real("Angle", self.angle),
            int("Termination", self.termination),
            int("Branch", self.branch),
            int("Particle", self.particle),
            int("Cell", self.cell),
            int("Material", self.material),
            int("Collisions", self.collisions),
            real("X", self.x),
            real("Y", self.y),
            real("Z", self.z),
            real("U", self.u),
            real("V", self.v),
            real("W", self.w),
            real("Energy", self.energy),
            real("Weight", self.weight),
            real("Time", self.time),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = f!("Event {} ({:?})", self.event_type, self.kind.category());
        for (name, value) in self.populated() {
            s += &f!("\n  {name:<14}{value}");
        }
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_types() {
        assert_eq!(EventKind::try_from(1000), Ok(EventKind::Source));
        assert_eq!(EventKind::try_from(3000), Ok(EventKind::Surface));
        assert_eq!(EventKind::try_from(5000), Ok(EventKind::Termination));
        assert_eq!(
            EventKind::try_from(2012),
            Ok(EventKind::Bank {
                code: 12,
                direction: BankDirection::Forward
            })
        );
    }

    #[test]
    fn reject_unknown_types() {
        for value in [0, 999, -1000, -4000, 6000, 9000] {
            assert_eq!(
                EventKind::try_from(value),
                Err(FormatError::UnrecognisedEventCategory(value))
            );
        }
    }

    #[test]
    fn integer_fields_truncate() {
        let mut event = Event::new(4000).unwrap();
        event.set(EventField::Cell, 12.0);
        event.set(EventField::Energy, 14.1);
        assert_eq!(event.cell, Some(12));
        assert_eq!(event.energy, Some(14.1));
        assert_eq!(event.material, None);
    }

    #[test]
    fn whole_and_real_fields() {
        let mut event = Event::new(3000).unwrap();
        for code in 8..=28 {
            let field = EventField::from_code(code).unwrap().unwrap();
            event.set(field, 2.75);
        }

        // codes 8-19 are whole numbers, except the surface angle
        for value in [
            event.node,
            event.source_type,
            event.cross_section,
            event.reaction,
            event.surface,
            event.termination,
            event.branch,
            event.particle,
            event.cell,
            event.material,
            event.collisions,
        ] {
            assert_eq!(value, Some(2));
        }

        for value in [
            event.angle,
            event.x,
            event.y,
            event.z,
            event.u,
            event.v,
            event.w,
            event.energy,
            event.weight,
            event.time,
        ] {
            assert_eq!(value, Some(2.75));
        }
    }

    #[test]
    fn partial_vectors() {
        let mut event = Event::new(1000).unwrap();
        event.set(EventField::X, 1.0);
        event.set(EventField::Y, 2.0);
        assert_eq!(event.position(), None);

        event.set(EventField::Z, 3.0);
        assert_eq!(event.position(), Some([1.0, 2.0, 3.0]));
        assert_eq!(event.direction(), None);
    }
}

use crate::time::TimeRange;
use num::{Integer, One};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One submitted row of availability: a person's name, a single free
/// time slot, and the optional event label and note they attached.
///
/// Slots are assumed well formed (`start < end`, same day); the intake
/// layer rejects anything else before a record is built.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AvailabilityRecord<N>
where
    N: Integer + One + Copy,
{
    pub person: String,
    pub slot: TimeRange<N>,
    #[cfg_attr(feature = "serde", serde(rename = "preferredEvent"))]
    pub event: Option<String>,
    pub note: Option<String>,
}

impl<N> AvailabilityRecord<N>
where
    N: Integer + One + Copy,
{
    pub fn new(person: &str, slot: TimeRange<N>) -> AvailabilityRecord<N> {
        AvailabilityRecord {
            person: person.to_string(),
            slot,
            event: None,
            note: None,
        }
    }

    /// Builder-style convenience for attaching an event label.
    pub fn with_event(mut self, event: &str) -> AvailabilityRecord<N> {
        self.event = Some(event.to_string());
        self
    }

    pub fn with_note(mut self, note: &str) -> AvailabilityRecord<N> {
        self.note = Some(note.to_string());
        self
    }
}

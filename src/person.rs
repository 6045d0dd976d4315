use crate::record::AvailabilityRecord;
use crate::time::TimeRange;
use num::{Integer, One};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One person's side of the day: every slot they declared free, plus
/// the event labels they supplied (kept per occurrence, not deduplicated).
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug)]
pub struct PersonAvailability<N>
where
    N: Integer + One + Copy,
{
    pub name: String,
    pub slots: Vec<TimeRange<N>>,
    pub events: Vec<String>,
}

impl<N> PersonAvailability<N>
where
    N: Integer + One + Copy,
{
    pub fn new(name: &str, slots: Vec<TimeRange<N>>) -> PersonAvailability<N> {
        PersonAvailability {
            name: name.to_string(),
            slots,
            events: vec![],
        }
    }

    /// A person is free during a step only if at least one of their
    /// slots fully contains it.
    ///
    /// # Examples
    /// ```
    /// use freizeit_libs::person::PersonAvailability;
    /// use freizeit_libs::time::TimeRange;
    ///
    /// let alice = PersonAvailability::new(
    ///     "Alice",
    ///     vec![TimeRange::new(540, 600), TimeRange::new(660, 720)],
    /// );
    ///
    /// assert!(alice.is_free_during(&TimeRange::new(540, 570)));
    /// assert!(alice.is_free_during(&TimeRange::new(690, 720)));
    /// // The gap between her slots
    /// assert!(!alice.is_free_during(&TimeRange::new(600, 630)));
    /// // Straddles the end of a slot
    /// assert!(!alice.is_free_during(&TimeRange::new(590, 620)));
    /// ```
    pub fn is_free_during(&self, step: &TimeRange<N>) -> bool {
        self.slots.iter().any(|slot| slot.covers(step))
    }
}

/// Groups a flat record list by person, preserving the order in which
/// each person is first encountered. Repeated event labels from the
/// same person are kept as separate entries.
pub fn group_by_person<N>(records: &[AvailabilityRecord<N>]) -> Vec<PersonAvailability<N>>
where
    N: Integer + One + Copy,
{
    let mut people: Vec<PersonAvailability<N>> = vec![];

    for record in records {
        let index = match people.iter().position(|p| p.name == record.person) {
            Some(index) => index,
            None => {
                people.push(PersonAvailability::new(&record.person, vec![]));
                people.len() - 1
            }
        };

        people[index].slots.push(record.slot);

        if let Some(event) = &record.event {
            let label = event.trim();
            if !label.is_empty() {
                people[index].events.push(label.to_string());
            }
        }
    }

    people
}

use crate::input::{check_date, parse_slot, ValidationError};
use crate::record::AvailabilityRecord;
use itertools::Itertools;
use std::collections::BTreeMap;

/// In-memory record store, one bucket of records per date.
///
/// Keys are `YYYY-MM-DD` strings, so the `BTreeMap` order is already
/// chronological. Nothing here persists; this is the snapshot source
/// the suggestion engine consumes.
#[derive(Debug, Default)]
pub struct DayStore {
    days: BTreeMap<String, Vec<AvailabilityRecord<u16>>>,
}

impl DayStore {
    pub fn new() -> DayStore {
        DayStore {
            days: BTreeMap::new(),
        }
    }

    /// Validates a whole submission, then appends one record per slot.
    /// Nothing is stored when any slot fails, so a bad row cannot
    /// leave a half-written person behind.
    pub fn insert(
        &mut self,
        date: &str,
        person: &str,
        slots: &[(&str, &str)],
        event: Option<&str>,
        note: Option<&str>,
    ) -> Result<(), ValidationError> {
        check_date(date)?;

        let person = person.trim();
        if person.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if slots.is_empty() {
            return Err(ValidationError::NoSlots);
        }

        let parsed = slots
            .iter()
            .map(|&(start, end)| parse_slot(start, end))
            .collect::<Result<Vec<_>, _>>()?;

        let event = event.map(str::trim).filter(|e| !e.is_empty());
        let note = note.map(str::trim).filter(|n| !n.is_empty());

        let day = self.days.entry(date.to_string()).or_insert_with(Vec::new);

        for slot in parsed {
            let mut record = AvailabilityRecord::new(person, slot);
            record.event = event.map(str::to_string);
            record.note = note.map(str::to_string);
            day.push(record);
        }

        Ok(())
    }

    /// Snapshot of one date's records, sorted by person then by start
    /// time. Unknown dates yield an empty list.
    pub fn records_for_date(&self, date: &str) -> Vec<AvailabilityRecord<u16>> {
        self.days
            .get(date)
            .map(|records| {
                records
                    .iter()
                    .cloned()
                    .sorted_by(|a, b| {
                        a.person
                            .cmp(&b.person)
                            .then(a.slot.start().cmp(&b.slot.start()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every date with at least one record, ascending.
    pub fn distinct_dates(&self) -> Vec<String> {
        self.days.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeRange;

    #[test]
    fn records_come_back_sorted() {
        let mut store = DayStore::new();
        store
            .insert(
                "2024-06-01",
                "Bob",
                &[("11:00", "12:00"), ("09:00", "10:00")],
                Some("Trivia"),
                None,
            )
            .unwrap();
        store
            .insert("2024-06-01", "Alice", &[("10:00", "11:00")], None, None)
            .unwrap();

        let records = store.records_for_date("2024-06-01");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].person, "Alice");
        assert_eq!(records[1].person, "Bob");
        assert_eq!(records[1].slot, TimeRange::new(540, 600));
        assert_eq!(records[2].slot, TimeRange::new(660, 720));
        assert_eq!(records[1].event.as_deref(), Some("Trivia"));
    }

    #[test]
    fn bad_slot_rejects_the_whole_submission() {
        let mut store = DayStore::new();

        let result = store.insert(
            "2024-06-01",
            "Alice",
            &[("09:00", "10:00"), ("12:00", "11:00")],
            None,
            None,
        );

        assert_eq!(
            result,
            Err(ValidationError::InvertedSlot {
                start: 720,
                end: 660
            })
        );
        assert!(store.records_for_date("2024-06-01").is_empty());
    }

    #[test]
    fn dates_are_distinct_and_ascending() {
        let mut store = DayStore::new();
        store
            .insert("2024-06-02", "Alice", &[("09:00", "10:00")], None, None)
            .unwrap();
        store
            .insert("2024-06-01", "Alice", &[("09:00", "10:00")], None, None)
            .unwrap();
        store
            .insert("2024-06-01", "Bob", &[("09:00", "10:00")], None, None)
            .unwrap();

        assert_eq!(store.distinct_dates(), vec!["2024-06-01", "2024-06-02"]);
    }

    #[test]
    fn submissions_are_validated() {
        let mut store = DayStore::new();

        assert_eq!(
            store.insert("June 1st", "Alice", &[("09:00", "10:00")], None, None),
            Err(ValidationError::BadDateFormat {
                found: "June 1st".to_string()
            })
        );
        assert_eq!(
            store.insert("2024-06-01", "   ", &[("09:00", "10:00")], None, None),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            store.insert("2024-06-01", "Alice", &[], None, None),
            Err(ValidationError::NoSlots)
        );
    }
}

use crate::coverage::coverage_counts;
use crate::person::group_by_person;
use crate::record::AvailabilityRecord;
use crate::time::{StepGrid, TimeRange};
use crate::vote::VoteTally;
use core::fmt::{Debug, Display};
use log::{debug, trace};
use num::{Integer, One};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default step width, in minutes of the day.
pub const DEFAULT_STEP_MINUTES: u16 = 30;

/// Knobs for the suggestion run. Passed in explicitly so callers on
/// independent inputs never share state.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug)]
pub struct SuggestConfig<N>
where
    N: Integer + One + Copy,
{
    pub step_width: N,
}

impl<N> SuggestConfig<N>
where
    N: Integer + One + Copy,
{
    pub fn new(step_width: N) -> SuggestConfig<N> {
        SuggestConfig { step_width }
    }
}

impl Default for SuggestConfig<u16> {
    fn default() -> Self {
        SuggestConfig::new(DEFAULT_STEP_MINUTES)
    }
}

/// The recommended window for one day: when, how many of the group can
/// make it, and what they want to do there.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Suggestion<N>
where
    N: Integer + One + Copy,
{
    pub window: TimeRange<N>,
    pub coverage: usize,
    #[cfg_attr(feature = "serde", serde(rename = "totalPeople"))]
    pub total_people: usize,
    pub event: String,
}

/// Merges maximal runs of consecutive steps at `target` coverage into
/// blocks and returns the longest one. When two blocks tie on
/// duration, the earlier one in scan order wins.
pub fn best_block<N>(grid: &[N], counts: &[usize], width: N, target: usize) -> Option<TimeRange<N>>
where
    N: Integer + One + Copy,
{
    let mut best: Option<TimeRange<N>> = None;
    let mut i = 0;

    while i < grid.len() {
        if counts[i] == target {
            let block_start = grid[i];
            while i + 1 < grid.len() && counts[i + 1] == target {
                i += 1;
            }
            let block = TimeRange::new(block_start, grid[i] + width);

            match best {
                Some(b) if block.duration() <= b.duration() => {}
                _ => best = Some(block),
            }
        }
        i += 1;
    }

    best
}

/// Recommends the single window where the most people are
/// simultaneously free, together with the majority event label.
///
/// The whole computation is a pure function of `records`: the day is
/// discretized into `config.step_width`-wide steps anchored at the
/// earliest boundary in the input, each step counts the people whose
/// slot fully covers it, and the longest run of steps at maximum
/// coverage becomes the window.
///
/// Returns `None` for every degenerate input: no records, a day span
/// that collapses to nothing, or no step fully covered by anyone.
///
/// # Examples
/// ```
/// use freizeit_libs::record::AvailabilityRecord;
/// use freizeit_libs::suggest::{suggest, SuggestConfig};
/// use freizeit_libs::time::TimeRange;
///
/// // 09:00-12:00, 10:00-11:00 and 10:30-11:30, as minutes of the day
/// let records = vec![
///     AvailabilityRecord::new("Alice", TimeRange::new(540u16, 720)).with_event("Picnic"),
///     AvailabilityRecord::new("Bob", TimeRange::new(600, 660)).with_event("Picnic"),
///     AvailabilityRecord::new("Carol", TimeRange::new(630, 690)).with_event("Hiking"),
/// ];
///
/// let suggestion = suggest(&records, &SuggestConfig::default()).unwrap();
///
/// // All three overlap only on 10:30-11:00
/// assert_eq!(suggestion.window, TimeRange::new(630, 660));
/// assert_eq!(suggestion.coverage, 3);
/// assert_eq!(suggestion.total_people, 3);
/// assert_eq!(suggestion.event, "Picnic");
/// ```
pub fn suggest<N>(
    records: &[AvailabilityRecord<N>],
    config: &SuggestConfig<N>,
) -> Option<Suggestion<N>>
where
    N: Integer + One + Copy + Display + Debug,
{
    if records.is_empty() {
        return None;
    }

    let people = group_by_person(records);

    let grid = people
        .iter()
        .flat_map(|p| p.slots.iter())
        .step_grid(config.step_width);

    if grid.is_empty() {
        debug!("day span too short for a single step");
        return None;
    }

    let counts = coverage_counts(&grid, config.step_width, &people);
    trace!("coverage per step: {:?}", counts);

    let max_coverage = counts.iter().copied().max().unwrap_or(0);
    if max_coverage == 0 {
        debug!("no step fully covered by anyone");
        return None;
    }

    let window = best_block(&grid, &counts, config.step_width, max_coverage)?;
    debug!(
        "best window [{}, {}) covers {} of {}",
        window.start(),
        window.end(),
        max_coverage,
        people.len()
    );

    let mut tally = VoteTally::new();
    tally.extend(records.iter().filter_map(|r| r.event.as_deref()));

    Some(Suggestion {
        window,
        coverage: max_coverage,
        total_people: people.len(),
        event: tally.winner_label(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_block_wins() {
        let grid: Vec<u16> = vec![540, 570, 600, 630, 660];
        let counts = vec![2, 0, 2, 2, 0];

        assert_eq!(
            best_block(&grid, &counts, 30, 2),
            Some(TimeRange::new(600, 660))
        );
    }

    #[test]
    fn duration_tie_keeps_first_block() {
        let grid: Vec<u16> = vec![540, 570, 600, 630];
        let counts = vec![2, 0, 2, 0];

        assert_eq!(
            best_block(&grid, &counts, 30, 2),
            Some(TimeRange::new(540, 570))
        );
    }

    #[test]
    fn no_matching_step_is_none() {
        let grid: Vec<u16> = vec![540, 570];
        let counts = vec![1, 1];

        assert_eq!(best_block(&grid, &counts, 30, 2), None);
    }

    #[test]
    fn empty_records_suggest_nothing() {
        let records: Vec<AvailabilityRecord<u16>> = vec![];
        assert_eq!(suggest(&records, &SuggestConfig::default()), None);
    }

    #[test]
    fn slot_shorter_than_a_step_suggests_nothing() {
        // 09:00-09:20 cannot hold a single 30-minute step
        let records = vec![AvailabilityRecord::new(
            "Alice",
            TimeRange::new(540u16, 560),
        )];

        assert_eq!(suggest(&records, &SuggestConfig::default()), None);
    }

    #[test]
    fn missing_labels_fall_back_to_sentinel() {
        let records = vec![AvailabilityRecord::new(
            "Alice",
            TimeRange::new(540u16, 720),
        )];

        let suggestion = suggest(&records, &SuggestConfig::default()).unwrap();

        assert_eq!(suggestion.event, "No clear winner");
        assert_eq!(suggestion.coverage, 1);
    }

    #[test]
    fn window_aligns_to_anchored_grid() {
        // Earliest boundary is 09:10; the grid is anchored there, not
        // at the calendar half-hour
        let records = vec![
            AvailabilityRecord::new("Alice", TimeRange::new(550u16, 700)),
            AvailabilityRecord::new("Bob", TimeRange::new(580, 670)),
        ];

        let suggestion = suggest(&records, &SuggestConfig::default()).unwrap();

        assert_eq!(suggestion.window, TimeRange::new(580, 670));
        assert_eq!(suggestion.coverage, 2);
        assert_eq!((suggestion.window.start() - 550) % 30, 0);
        assert_eq!(suggestion.window.duration() % 30, 0);
    }
}

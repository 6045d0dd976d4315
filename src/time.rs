use num::{Integer, One};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Half-open [start, end) time range
/// <N>: Any integer type
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct TimeRange<N>(pub N, pub N)
where
    N: Integer + One + Copy;

impl<N> TimeRange<N>
where
    N: Integer + One + Copy,
{
    /// Construct a new Time Range
    /// Range is half-open on [start, end)
    /// # Examples
    /// ```
    /// use freizeit_libs::time::TimeRange;
    ///
    /// let test = TimeRange::new(540, 720);
    ///
    /// assert_eq!(test.0, 540);
    /// assert_eq!(test.1, 720);
    /// ```
    pub fn new(start: N, end: N) -> TimeRange<N> {
        TimeRange(start, end)
    }

    /// Convenience function for readability
    /// Returns the start of the TimeRange
    pub fn start(self) -> N {
        self.0
    }

    /// Convenience function for readability
    /// Returns the end of the TimeRange
    pub fn end(self) -> N {
        self.1
    }

    /// Length of this range
    pub fn duration(self) -> N {
        self.1 - self.0
    }

    /// Whether this range fully contains `step`.
    /// Partial overlap does not count.
    ///
    /// # Examples
    /// ```
    /// use freizeit_libs::time::TimeRange;
    ///
    /// let slot = TimeRange::new(540, 720);
    ///
    /// assert!(slot.covers(&TimeRange::new(540, 570)));
    /// assert!(slot.covers(&TimeRange::new(690, 720)));
    /// assert!(!slot.covers(&TimeRange::new(700, 730)));
    /// assert!(!slot.covers(&TimeRange::new(510, 540)));
    /// ```
    pub fn covers(&self, step: &TimeRange<N>) -> bool {
        self.start() <= step.start() && self.end() >= step.end()
    }
}

pub trait StepGrid<N>
where
    N: Integer + Copy,
{
    fn step_grid(self, width: N) -> Vec<N>;
}

impl<'a, T, N> StepGrid<N> for T
where
    T: Iterator<Item = &'a TimeRange<N>>,
    N: 'a + Integer + One + Copy,
{
    /// Discretizes the span of self into fixed-width step starts.
    /// The grid is anchored at the earliest boundary present in self,
    /// not at midnight, and stops while a whole step still fits.
    ///
    /// An empty iterator, or one whose boundaries collapse to a
    /// zero-length span, yields an empty grid.
    ///
    /// # Examples
    /// ```
    /// use freizeit_libs::time::{StepGrid, TimeRange};
    ///
    /// let slots = vec![TimeRange::new(540, 720), TimeRange::new(600, 660)];
    ///
    /// assert_eq!(
    ///     slots.iter().step_grid(30),
    ///     vec![540, 570, 600, 630, 660, 690]
    /// );
    ///
    /// // 100-wide steps: only one whole step fits in [540, 720)
    /// assert_eq!(slots.iter().step_grid(100), vec![540]);
    ///
    /// let empty: Vec<TimeRange<u16>> = vec![];
    /// assert!(empty.iter().step_grid(30).is_empty());
    /// ```
    fn step_grid(self, width: N) -> Vec<N> {
        let mut bounds: Option<(N, N)> = None;

        for time in self {
            bounds = match bounds {
                None => Some((time.start(), time.end())),
                Some((lo, hi)) => Some((lo.min(time.start()), hi.max(time.end()))),
            };
        }

        let (day_start, day_end) = match bounds {
            Some(b) => b,
            None => return vec![],
        };

        if day_start >= day_end {
            return vec![];
        }

        let mut grid = vec![];
        let mut current = day_start;

        while current + width <= day_end {
            grid.push(current);
            current = current + width;
        }

        grid
    }
}

use crate::person::PersonAvailability;
use crate::time::TimeRange;
use num::{Integer, One};

/// Counts, for each step start in `grid`, how many distinct people
/// have a slot fully covering the step `[t, t + width)`.
///
/// Cost is steps x people x slots-per-person, which is fine for a
/// single day of human-scale input.
///
/// # Examples
/// ```
/// use freizeit_libs::coverage::coverage_counts;
/// use freizeit_libs::person::PersonAvailability;
/// use freizeit_libs::time::TimeRange;
///
/// let people = vec![
///     PersonAvailability::new("Alice", vec![TimeRange::new(540, 720)]),
///     PersonAvailability::new("Bob", vec![TimeRange::new(600, 660)]),
/// ];
///
/// assert_eq!(
///     coverage_counts(&[540, 570, 600, 630, 660, 690], 30, &people),
///     vec![1, 1, 2, 2, 1, 1]
/// );
/// ```
pub fn coverage_counts<N>(grid: &[N], width: N, people: &[PersonAvailability<N>]) -> Vec<usize>
where
    N: Integer + One + Copy,
{
    grid.iter()
        .map(|&t| {
            let step = TimeRange::new(t, t + width);
            people.iter().filter(|p| p.is_free_during(&step)).count()
        })
        .collect()
}

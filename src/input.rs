use crate::time::TimeRange;
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Time must be in HH:MM format, got {found:?}")]
    BadTimeFormat { found: String },
    #[error("Date must be in YYYY-MM-DD format, got {found:?}")]
    BadDateFormat { found: String },
    #[error("End time must be after start time ({start} >= {end})")]
    InvertedSlot { start: u16, end: u16 },
    #[error("Name is required")]
    EmptyName,
    #[error("Add at least one free time range")]
    NoSlots,
}

/// Parses a strict 24-hour `HH:MM` into minutes of the day.
///
/// # Examples
/// ```
/// use freizeit_libs::input::parse_hhmm;
///
/// assert_eq!(parse_hhmm("09:05"), Ok(545));
/// assert_eq!(parse_hhmm("00:00"), Ok(0));
/// assert_eq!(parse_hhmm("23:59"), Ok(1439));
///
/// assert!(parse_hhmm("9:05").is_err());
/// assert!(parse_hhmm("24:00").is_err());
/// assert!(parse_hhmm("09:60").is_err());
/// assert!(parse_hhmm("0905").is_err());
/// ```
pub fn parse_hhmm(text: &str) -> Result<u16, ValidationError> {
    let bad = || ValidationError::BadTimeFormat {
        found: text.to_string(),
    };

    let (hours, minutes) = text.split_once(':').ok_or_else(bad)?;

    if hours.len() != 2 || minutes.len() != 2 {
        return Err(bad());
    }

    // `str::parse` tolerates a leading `+`, which HH:MM does not
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }

    let hours: u16 = hours.parse().map_err(|_| bad())?;
    let minutes: u16 = minutes.parse().map_err(|_| bad())?;

    if hours > 23 || minutes > 59 {
        return Err(bad());
    }

    Ok(hours * 60 + minutes)
}

/// Renders minutes of the day back to zero-padded `HH:MM`.
///
/// # Examples
/// ```
/// use freizeit_libs::input::format_hhmm;
///
/// assert_eq!(format_hhmm(545), "09:05");
/// assert_eq!(format_hhmm(0), "00:00");
/// ```
pub fn format_hhmm(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parses one submitted `(start, end)` pair and rejects inverted or
/// zero-length slots.
pub fn parse_slot(start: &str, end: &str) -> Result<TimeRange<u16>, ValidationError> {
    let start = parse_hhmm(start)?;
    let end = parse_hhmm(end)?;

    if end <= start {
        return Err(ValidationError::InvertedSlot { start, end });
    }

    Ok(TimeRange::new(start, end))
}

/// Shape check for `YYYY-MM-DD` date keys. Month and day get a range
/// check; full calendar validation stays out of scope.
pub fn check_date(date: &str) -> Result<(), ValidationError> {
    let bad = || ValidationError::BadDateFormat {
        found: date.to_string(),
    };

    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(bad());
    }

    let digits = |range: core::ops::Range<usize>| -> Result<u16, ValidationError> {
        let part = &date[range];
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        part.parse().map_err(|_| bad())
    };

    digits(0..4)?;
    let month = digits(5..7)?;
    let day = digits(8..10)?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(bad());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_must_run_forward() {
        assert_eq!(
            parse_slot("12:00", "09:00"),
            Err(ValidationError::InvertedSlot {
                start: 720,
                end: 540
            })
        );
        assert_eq!(
            parse_slot("09:00", "09:00"),
            Err(ValidationError::InvertedSlot {
                start: 540,
                end: 540
            })
        );
        assert_eq!(parse_slot("09:00", "12:00"), Ok(TimeRange::new(540, 720)));
    }

    #[test]
    fn hhmm_round_trips() {
        for text in ["00:00", "09:05", "12:30", "23:59"] {
            assert_eq!(format_hhmm(parse_hhmm(text).unwrap()), text);
        }
    }

    #[test]
    fn date_shape() {
        assert_eq!(check_date("2024-06-01"), Ok(()));
        assert!(check_date("2024-6-1").is_err());
        assert!(check_date("2024-13-01").is_err());
        assert!(check_date("2024-00-10").is_err());
        assert!(check_date("yesterday").is_err());
    }
}

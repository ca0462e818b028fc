//! Date formatting for synthesized tags.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A timestamp rendered as its calendar date in a given time zone.
///
/// The display format is `YYYY-MM-DD`, zero padded.
pub struct LocalDate<'a> {
    pub timestamp: Timestamp,
    pub time_zone: &'a TimeZone,
}

impl<'a> LocalDate<'a> {
    /// Converts store epoch seconds. Returns `None` when the value lies
    /// outside the range representable by [`Timestamp`].
    pub fn from_epoch(seconds: f64, time_zone: &'a TimeZone) -> Option<Self> {
        let timestamp = Timestamp::from_second(seconds.floor() as i64).ok()?;
        Some(Self {
            timestamp,
            time_zone,
        })
    }
}

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.time_zone.clone())
                .strftime("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_calendar_date() {
        let utc = TimeZone::UTC;
        let date = LocalDate::from_epoch(1_709_294_400.0, &utc).unwrap();
        assert_eq!(date.to_string(), "2024-03-01");
    }

    #[test]
    fn test_uses_time_zone_for_day_boundary() {
        // 2024-03-01 23:30 UTC is already March 2nd east of Greenwich
        let tokyo = TimeZone::fixed(jiff::tz::offset(9));
        let date = LocalDate::from_epoch(1_709_335_800.0, &tokyo).unwrap();
        assert_eq!(date.to_string(), "2024-03-02");
    }

    #[test]
    fn test_out_of_range_is_none() {
        assert!(LocalDate::from_epoch(1e300, &TimeZone::UTC).is_none());
    }
}

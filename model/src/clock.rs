use chrono::{DateTime, Datelike, Local, TimeZone};

/// The clock card's fields, split so the time and the AM/PM period can be styled independently.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ClockFace {
    pub year: i32,
    pub day: u32,
    /// Abbreviated month name, e.g. `Mar`.
    pub month: String,
    /// 12-hour `h:mm`, e.g. `2:05`.
    pub time: String,
    /// `AM` or `PM`.
    pub period: String,
}

impl ClockFace {
    /// Reads the host's wall clock in its local timezone.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(when: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            year: when.year(),
            day: when.day(),
            month: when.format("%b").to_string(),
            time: when.format("%-I:%M").to_string(),
            period: when.format("%p").to_string(),
        }
    }
}

impl std::fmt::Display for ClockFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.day, self.month, self.year, self.time, self.period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_clock_face_fields() {
        let when = Utc.with_ymd_and_hms(2025, 3, 13, 14, 5, 0).unwrap();
        let face = ClockFace::from_datetime(&when);

        assert_eq!(face.year, 2025);
        assert_eq!(face.day, 13);
        assert_eq!(face.month, "Mar");
        assert_eq!(face.time, "2:05");
        assert_eq!(face.period, "PM");
        assert_eq!(face.to_string(), "13 Mar 2025 2:05 PM");
    }

    #[test]
    fn test_midnight_and_noon() {
        let midnight = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        let face = ClockFace::from_datetime(&midnight);
        assert_eq!((face.time.as_str(), face.period.as_str()), ("12:00", "AM"));

        let noon = Utc.with_ymd_and_hms(2024, 12, 31, 12, 30, 0).unwrap();
        let face = ClockFace::from_datetime(&noon);
        assert_eq!((face.time.as_str(), face.period.as_str()), ("12:30", "PM"));
    }

    #[test]
    fn test_minute_boundary() {
        let before = Utc.with_ymd_and_hms(2025, 3, 13, 9, 41, 58).unwrap();

        let face = ClockFace::from_datetime(&(before + Duration::seconds(1)));
        assert_eq!(face.time, "9:41");

        let face = ClockFace::from_datetime(&(before + Duration::seconds(2)));
        assert_eq!(face.time, "9:42");
        assert_eq!(face.period, "AM");
    }

    #[test]
    fn test_day_rollover_updates_date() {
        let before = Utc.with_ymd_and_hms(2025, 2, 28, 23, 59, 59).unwrap();
        let face = ClockFace::from_datetime(&(before + Duration::seconds(1)));

        assert_eq!((face.year, face.day, face.month.as_str()), (2025, 1, "Mar"));
        assert_eq!(face.time, "12:00");
        assert_eq!(face.period, "AM");
    }
}

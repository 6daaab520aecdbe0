use std::fmt;
use std::str::FromStr;

/// Time of day on a 12-hour dial.
///
/// Invariant: `hours < 12`, `minutes < 60`, `seconds < 60`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TimeSample {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeSample {
    /// Returns `None` if any field is out of range for a 12-hour dial.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours < 12 && minutes < 60 && seconds < 60 {
            Some(Self { hours, minutes, seconds })
        } else {
            None
        }
    }

    /// Accepts a 24-hour `hours` value and folds it onto the dial.
    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        if minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some(Self { hours: (hours % 12) as u8, minutes: minutes as u8, seconds: seconds as u8 })
    }

    #[inline]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    #[inline]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    #[inline]
    pub const fn seconds(self) -> u8 {
        self.seconds
    }

    /// Seconds elapsed since 12:00:00 on the dial.
    #[inline]
    pub const fn seconds_of_dial(self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }

    /// The sample one second later, wrapping 11:59:59 to 0:00:00.
    pub const fn next_second(self) -> Self {
        let t = (self.seconds_of_dial() + 1) % (12 * 3600);
        Self {
            hours: (t / 3600) as u8,
            minutes: ((t / 60) % 60) as u8,
            seconds: (t % 60) as u8,
        }
    }
}

impl fmt::Display for TimeSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Error returned when parsing `H:MM:SS` / `H:MM` text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseTimeError(pub String);

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time '{}': expected H:MM[:SS]", self.0)
    }
}

impl std::error::Error for ParseTimeError {}

impl FromStr for TimeSample {
    type Err = ParseTimeError;

    /// Parses `H:MM[:SS]`; hours may be given on a 24-hour clock.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let mut parts = s.trim().split(':').map(|p| p.parse::<u32>().map_err(|_| err()));

        let h = parts.next().ok_or_else(err)??;
        let m = parts.next().ok_or_else(err)??;
        let sec = parts.next().transpose()?.unwrap_or(0);
        if parts.next().is_some() || h >= 24 {
            return Err(err());
        }
        Self::from_hms(h, m, sec).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(TimeSample::new(12, 0, 0).is_none());
        assert!(TimeSample::new(0, 60, 0).is_none());
        assert!(TimeSample::new(0, 0, 60).is_none());
        assert!(TimeSample::new(11, 59, 59).is_some());
    }

    #[test]
    fn from_hms_folds_afternoon_hours() {
        let t = TimeSample::from_hms(15, 4, 5).unwrap();
        assert_eq!((t.hours(), t.minutes(), t.seconds()), (3, 4, 5));
    }

    #[test]
    fn next_second_carries_into_minutes_and_hours() {
        let t = TimeSample::new(2, 59, 59).unwrap().next_second();
        assert_eq!(t, TimeSample::new(3, 0, 0).unwrap());

        let wrap = TimeSample::new(11, 59, 59).unwrap().next_second();
        assert_eq!(wrap, TimeSample::new(0, 0, 0).unwrap());
    }

    #[test]
    fn parse_accepts_optional_seconds() {
        assert_eq!("3:00:00".parse::<TimeSample>().unwrap(), TimeSample::new(3, 0, 0).unwrap());
        assert_eq!("21:15".parse::<TimeSample>().unwrap(), TimeSample::new(9, 15, 0).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<TimeSample>().is_err());
        assert!("3".parse::<TimeSample>().is_err());
        assert!("24:00".parse::<TimeSample>().is_err());
        assert!("1:2:3:4".parse::<TimeSample>().is_err());
        assert!("a:00".parse::<TimeSample>().is_err());
    }

    #[test]
    fn display_pads_minutes_and_seconds() {
        assert_eq!(TimeSample::new(3, 4, 5).unwrap().to_string(), "3:04:05");
    }
}

//! Course offering and meeting-slot models
//!
//! Meeting times are stored as minutes since midnight rather than "HH:MM"
//! strings. Lexical comparison of time strings only works while every value
//! is zero-padded 24-hour ("9:00" sorts after "10:00"), so the parse
//! happens once at the ingestion boundary and the rest of the code compares
//! integers.

use std::fmt;
use std::str::FromStr;

/// Teaching day (the institute schedules classes Monday through Friday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
}

impl Weekday {
    /// Day name as used in schedules
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            _ => Err(format!("Unknown weekday: '{s}'")),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A time of day stored as minutes since midnight
///
/// Parses `"HH:MM"` in 24-hour notation; a missing leading zero on the hour
/// is accepted and normalized. Displays zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from an hour/minute pair
    ///
    /// # Errors
    ///
    /// Returns an error when the pair is not a valid 24-hour time.
    pub fn new(hour: u16, minute: u16) -> Result<Self, String> {
        if hour >= 24 || minute >= 60 {
            return Err(format!("Invalid time: {hour}:{minute:02}"));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Minutes since midnight
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid time: '{s}' (expected HH:MM)"))?;
        let hour: u16 = hour
            .trim()
            .parse()
            .map_err(|_| format!("Invalid hour in '{s}'"))?;
        let minute: u16 = minute
            .trim()
            .parse()
            .map_err(|_| format!("Invalid minute in '{s}'"))?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// A weekly meeting: one day, one half-open time interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeetingSlot {
    /// Day of the week
    pub day: Weekday,
    /// Start of the meeting (inclusive)
    pub start: ClockTime,
    /// End of the meeting (exclusive)
    pub end: ClockTime,
}

impl MeetingSlot {
    /// Build a slot, rejecting empty or inverted intervals
    ///
    /// # Errors
    ///
    /// Returns an error when `end <= start`.
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Result<Self, String> {
        if end <= start {
            return Err(format!("Meeting ends at or before it starts: {start}-{end}"));
        }
        Ok(Self { day, start, end })
    }

    /// Whether two slots collide
    ///
    /// Half-open semantics: back-to-back meetings where one ends exactly
    /// when the other starts do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for MeetingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}-{}", self.day, self.start, self.end)
    }
}

/// A course offered in a term's catalog, immutable within a session
#[derive(Debug, Clone, PartialEq)]
pub struct CourseOffering {
    /// Catalog identifier, unique per term
    pub id: String,

    /// Course code (e.g., "CSE101")
    pub code: String,

    /// Full course name
    pub name: String,

    /// Credit hours (positive)
    pub credits: u32,

    /// Instructor name
    pub instructor: String,

    /// Weekly meeting slot
    pub schedule: MeetingSlot,
}

impl CourseOffering {
    /// Create a new course offering
    #[must_use]
    pub const fn new(
        id: String,
        code: String,
        name: String,
        credits: u32,
        instructor: String,
        schedule: MeetingSlot,
    ) -> Self {
        Self {
            id,
            code,
            name,
            credits,
            instructor,
            schedule,
        }
    }
}

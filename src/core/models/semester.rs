//! Semester model and ordering
//!
//! The institute runs two terms per academic year: Monsoon (August start)
//! followed by Winter of the next calendar year (January start). Within one
//! calendar year the Winter term therefore precedes the Monsoon term, so
//! `Monsoon 2021 < Winter 2022 < Monsoon 2022`. Trend charts and term
//! dropdowns both depend on this order, which is why the comparator is
//! explicit here instead of relying on label string order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Academic season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Monsoon term (August to November)
    Monsoon,
    /// Winter term (January to April)
    Winter,
}

impl Season {
    /// Rank within a calendar year: Winter (spring) before Monsoon (autumn)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Winter => 0,
            Self::Monsoon => 1,
        }
    }

    /// Season name as used in semester labels
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monsoon => "Monsoon",
            Self::Winter => "Winter",
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monsoon" => Ok(Self::Monsoon),
            "winter" => Ok(Self::Winter),
            _ => Err(format!("Unknown season: '{s}'")),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A semester identified by season and calendar year
///
/// Parsed from the display label (`"Monsoon 2024"`) or the course-catalog
/// term slug (`"monsoon-2024"`). Ordering is `(year, season rank)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Semester {
    /// Calendar year (e.g., 2024)
    pub year: u16,
    /// Season within the year
    pub season: Season,
}

impl Semester {
    /// Create a new semester
    #[must_use]
    pub const fn new(season: Season, year: u16) -> Self {
        Self { year, season }
    }

    /// Parse a course-catalog term slug (e.g., `"monsoon-2024"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the slug is not `<season>-<year>`.
    pub fn from_term_slug(slug: &str) -> Result<Self, String> {
        let (season, year) = slug
            .split_once('-')
            .ok_or_else(|| format!("Invalid term slug: '{slug}'"))?;
        let season: Season = season.parse()?;
        let year: u16 = year
            .parse()
            .map_err(|_| format!("Invalid year in term slug: '{slug}'"))?;
        Ok(Self { year, season })
    }

    /// Term slug used by the course-catalog endpoint (e.g., `"monsoon-2024"`)
    #[must_use]
    pub fn term_slug(&self) -> String {
        format!("{}-{}", self.season.as_str().to_ascii_lowercase(), self.year)
    }
}

impl Ord for Semester {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.season.rank()).cmp(&(other.year, other.season.rank()))
    }
}

impl PartialOrd for Semester {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(season), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("Invalid semester label: '{s}'"));
        };
        let season: Season = season.parse()?;
        let year: u16 = year
            .parse()
            .map_err(|_| format!("Invalid year in semester label: '{s}'"))?;
        Ok(Self { year, season })
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_label() {
        let semester: Semester = "Monsoon 2021".parse().expect("label parses");
        assert_eq!(semester, Semester::new(Season::Monsoon, 2021));
    }

    #[test]
    fn rejects_garbage_labels() {
        assert!("Monsoon".parse::<Semester>().is_err());
        assert!("Summer 2021".parse::<Semester>().is_err());
        assert!("Monsoon twentytwo".parse::<Semester>().is_err());
        assert!("Monsoon 2021 extra".parse::<Semester>().is_err());
    }

    #[test]
    fn round_trips_term_slug() {
        let semester = Semester::from_term_slug("winter-2025").expect("slug parses");
        assert_eq!(semester, Semester::new(Season::Winter, 2025));
        assert_eq!(semester.term_slug(), "winter-2025");
    }

    #[test]
    fn orders_by_academic_progression() {
        // Monsoon 2021 opens the 2021-22 academic year; Winter 2022 closes
        // it; Monsoon 2022 opens the next one.
        let mut semesters = vec![
            Semester::new(Season::Winter, 2022),
            Semester::new(Season::Monsoon, 2021),
            Semester::new(Season::Monsoon, 2022),
        ];
        semesters.sort();
        assert_eq!(
            semesters,
            vec![
                Semester::new(Season::Monsoon, 2021),
                Semester::new(Season::Winter, 2022),
                Semester::new(Season::Monsoon, 2022),
            ]
        );
    }

    #[test]
    fn winter_precedes_monsoon_within_a_calendar_year() {
        assert!(Semester::new(Season::Winter, 2024) < Semester::new(Season::Monsoon, 2024));
    }

    #[test]
    fn displays_label() {
        let semester = Semester::new(Season::Monsoon, 2024);
        assert_eq!(semester.to_string(), "Monsoon 2024");
    }
}

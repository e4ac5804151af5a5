//! Academic performance aggregation
//!
//! Computes credit-weighted GPA values and the semester-by-semester
//! SGPA/CGPA trend from a flat list of grade records. Every function here
//! is pure and total: empty input yields a zero/empty result, never an
//! error. Accumulation runs at full `f64` precision; rounding to the two
//! decimals shown on screen happens only at presentation boundaries
//! ([`round_gpa`], the CSV export, and the report renderers).

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::core::models::{CourseType, GradeRecord, Semester, StudentProfile};

/// Largest CGPA difference still treated as display noise
///
/// Half of the last displayed decimal: a recorded and a computed CGPA that
/// round to the same two-decimal value are not a discrepancy.
pub const CGPA_TOLERANCE: f64 = 0.005;

/// Credit-weighted mean of grade points over the given records
///
/// `Σ(grade_points · credits) / Σ(credits)`, NOT a plain average of grade
/// points. Holds for any subset of records, so the same function serves the
/// all-semesters view, a single semester, or a Core/Elective split.
/// Returns `0.0` for an empty slice or zero total credits.
#[must_use]
pub fn semester_gpa(records: &[GradeRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total_credits: u32 = records.iter().map(|r| r.credits).sum();
    if total_credits == 0 {
        return 0.0;
    }
    let weighted_points: f64 = records.iter().map(GradeRecord::weighted_points).sum();
    weighted_points / f64::from(total_credits)
}

/// One point of the SGPA/CGPA trend series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    /// Semester this point describes
    pub semester: Semester,
    /// GPA over this semester alone
    pub sgpa: f64,
    /// Cumulative GPA over this and all earlier semesters
    pub cgpa: f64,
}

/// Semester-by-semester SGPA/CGPA series in academic order
///
/// Groups records by semester, walks semesters through the [`Semester`]
/// comparator, and accumulates running credit and point totals so the CGPA
/// at step k covers semesters 1..=k. One point per semester; the series is
/// recomputed fresh from the records on every call.
#[must_use]
pub fn cumulative_trend(records: &[GradeRecord]) -> Vec<TrendPoint> {
    let mut by_semester: BTreeMap<Semester, Vec<&GradeRecord>> = BTreeMap::new();
    for record in records {
        by_semester.entry(record.semester).or_default().push(record);
    }

    let mut cumulative_credits: u32 = 0;
    let mut cumulative_points: f64 = 0.0;
    let mut trend = Vec::with_capacity(by_semester.len());

    for (semester, semester_records) in by_semester {
        let semester_credits: u32 = semester_records.iter().map(|r| r.credits).sum();
        let semester_points: f64 = semester_records
            .iter()
            .map(|r| r.weighted_points())
            .sum();

        cumulative_credits += semester_credits;
        cumulative_points += semester_points;

        let sgpa = if semester_credits == 0 {
            0.0
        } else {
            semester_points / f64::from(semester_credits)
        };
        let cgpa = if cumulative_credits == 0 {
            0.0
        } else {
            cumulative_points / f64::from(cumulative_credits)
        };

        trend.push(TrendPoint {
            semester,
            sgpa,
            cgpa,
        });
    }

    trend
}

/// CGPA across all semesters: the trend evaluated at the final semester
#[must_use]
pub fn overall_cgpa(records: &[GradeRecord]) -> f64 {
    cumulative_trend(records).last().map_or(0.0, |p| p.cgpa)
}

/// Records belonging to one semester
#[must_use]
pub fn filter_semester(records: &[GradeRecord], semester: Semester) -> Vec<GradeRecord> {
    records
        .iter()
        .filter(|r| r.semester == semester)
        .cloned()
        .collect()
}

/// Records of one course type (the Core/Elective split on the grades page)
#[must_use]
pub fn filter_course_type(records: &[GradeRecord], course_type: CourseType) -> Vec<GradeRecord> {
    records
        .iter()
        .filter(|r| r.course_type == course_type)
        .cloned()
        .collect()
}

/// Distinct semesters present in the records, in academic order
///
/// Drives the semester dropdown.
#[must_use]
pub fn semesters(records: &[GradeRecord]) -> Vec<Semester> {
    let unique: std::collections::BTreeSet<Semester> =
        records.iter().map(|r| r.semester).collect();
    unique.into_iter().collect()
}

/// Round a GPA value to the two decimals shown on screen
///
/// Presentation-boundary helper; never feed the result back into
/// accumulation.
#[must_use]
pub fn round_gpa(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A recorded-vs-computed CGPA mismatch worth surfacing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CgpaDiscrepancy {
    /// CGPA from the student profile (institutional record)
    pub recorded: f64,
    /// CGPA computed from the grade records
    pub computed: f64,
}

impl CgpaDiscrepancy {
    /// Absolute difference between the two values
    #[must_use]
    pub fn delta(&self) -> f64 {
        (self.recorded - self.computed).abs()
    }
}

/// Compare the profile's CGPA with the one computed from grade records
///
/// The profile value is the institutional record and stays the displayed
/// number; the computed value is a derived display metric. The two can
/// legitimately diverge (non-grade adjustments), so a difference beyond
/// [`CGPA_TOLERANCE`] is reported rather than reconciled.
#[must_use]
pub fn cgpa_discrepancy(
    profile: &StudentProfile,
    records: &[GradeRecord],
) -> Option<CgpaDiscrepancy> {
    let computed = overall_cgpa(records);
    ((profile.cgpa - computed).abs() > CGPA_TOLERANCE).then_some(CgpaDiscrepancy {
        recorded: profile.cgpa,
        computed,
    })
}

/// Aggregate academic figures for summaries and reports
#[derive(Debug, Clone)]
pub struct AcademicSummary {
    /// CGPA computed across all records
    pub overall_cgpa: f64,
    /// Total credits across all records
    pub total_credits: u32,
    /// Credit-weighted GPA over core courses
    pub core_gpa: f64,
    /// Credit-weighted GPA over electives
    pub elective_gpa: f64,
    /// Full SGPA/CGPA trend series
    pub trend: Vec<TrendPoint>,
}

impl AcademicSummary {
    /// Compute the summary from a full set of grade records
    #[must_use]
    pub fn from_records(records: &[GradeRecord]) -> Self {
        let trend = cumulative_trend(records);
        Self {
            overall_cgpa: trend.last().map_or(0.0, |p| p.cgpa),
            total_credits: records.iter().map(|r| r.credits).sum(),
            core_gpa: semester_gpa(&filter_course_type(records, CourseType::Core)),
            elective_gpa: semester_gpa(&filter_course_type(records, CourseType::Elective)),
            trend,
        }
    }
}

/// Render the trend series as CSV (`semester,sgpa,cgpa`)
///
/// Values are rounded to two decimals here, at the presentation boundary.
#[must_use]
pub fn trend_to_csv(trend: &[TrendPoint]) -> String {
    let mut csv = String::from("semester,sgpa,cgpa\n");
    for point in trend {
        let _ = writeln!(csv, "{},{:.2},{:.2}", point.semester, point.sgpa, point.cgpa);
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{LetterGrade, Season};

    fn record(credits: u32, grade_points: f64, semester: &str) -> GradeRecord {
        GradeRecord::new(
            format!("CSE{credits}{grade_points}"),
            "Test Course".to_string(),
            CourseType::Core,
            credits,
            LetterGrade::A,
            grade_points,
            semester.parse().expect("semester label"),
        )
    }

    #[test]
    fn empty_input_yields_zero() {
        assert!(semester_gpa(&[]).abs() < f64::EPSILON);
        assert!(cumulative_trend(&[]).is_empty());
        assert!(overall_cgpa(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_total_credits_yields_zero() {
        // Not producible through ingestion, but the guard must hold.
        let records = vec![record(0, 8.0, "Monsoon 2021"), record(0, 9.0, "Monsoon 2021")];
        assert!(semester_gpa(&records).abs() < f64::EPSILON);
    }

    #[test]
    fn weighs_by_credits() {
        // (4*10 + 3*7) / 7 = 61/7
        let records = vec![record(4, 10.0, "Monsoon 2021"), record(3, 7.0, "Monsoon 2021")];
        let gpa = semester_gpa(&records);
        assert!((gpa - 61.0 / 7.0).abs() < 1e-9);
        assert!((round_gpa(gpa) - 8.71).abs() < 1e-9);
    }

    #[test]
    fn gpa_stays_on_the_ten_point_scale() {
        let records = vec![
            record(4, 10.0, "Monsoon 2021"),
            record(2, 0.0, "Monsoon 2021"),
            record(3, 6.5, "Winter 2022"),
        ];
        let gpa = semester_gpa(&records);
        assert!((0.0..=10.0).contains(&gpa));
    }

    #[test]
    fn duplicating_records_leaves_gpa_unchanged() {
        let records = vec![
            record(4, 9.0, "Monsoon 2021"),
            record(3, 7.5, "Monsoon 2021"),
            record(2, 6.0, "Winter 2022"),
        ];
        let mut doubled = records.clone();
        doubled.extend(records.clone());
        assert!((semester_gpa(&records) - semester_gpa(&doubled)).abs() < 1e-12);
    }

    #[test]
    fn trend_is_ordered_by_semester() {
        let records = vec![
            record(4, 8.0, "Winter 2022"),
            record(4, 9.0, "Monsoon 2021"),
            record(4, 7.0, "Monsoon 2022"),
        ];
        let trend = cumulative_trend(&records);
        let labels: Vec<String> = trend.iter().map(|p| p.semester.to_string()).collect();
        assert_eq!(labels, vec!["Monsoon 2021", "Winter 2022", "Monsoon 2022"]);
        assert!(trend.windows(2).all(|w| w[0].semester < w[1].semester));
    }

    #[test]
    fn cgpa_accumulates_across_semesters() {
        let records = vec![
            record(4, 10.0, "Monsoon 2021"),
            record(4, 8.0, "Winter 2022"),
        ];
        let trend = cumulative_trend(&records);
        assert_eq!(trend.len(), 2);
        assert!((trend[0].sgpa - 10.0).abs() < 1e-9);
        assert!((trend[0].cgpa - 10.0).abs() < 1e-9);
        assert!((trend[1].sgpa - 8.0).abs() < 1e-9);
        // (4*10 + 4*8) / 8 = 9.0
        assert!((trend[1].cgpa - 9.0).abs() < 1e-9);
        assert!((overall_cgpa(&records) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn internal_precision_is_not_pre_rounded() {
        // 61/7 = 8.714285...; a pre-rounded accumulator would drift.
        let records = vec![record(4, 10.0, "Monsoon 2021"), record(3, 7.0, "Monsoon 2021")];
        let trend = cumulative_trend(&records);
        assert!((trend[0].cgpa - 61.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn filters_feed_the_same_mean() {
        let mut elective = record(3, 9.5, "Monsoon 2021");
        elective.course_type = CourseType::Elective;
        let records = vec![record(4, 8.0, "Monsoon 2021"), elective];

        let core = filter_course_type(&records, CourseType::Core);
        assert_eq!(core.len(), 1);
        assert!((semester_gpa(&core) - 8.0).abs() < 1e-9);

        let electives = filter_course_type(&records, CourseType::Elective);
        assert!((semester_gpa(&electives) - 9.5).abs() < 1e-9);

        let monsoon = filter_semester(&records, Semester::new(Season::Monsoon, 2021));
        assert_eq!(monsoon.len(), 2);
    }

    #[test]
    fn semesters_are_unique_and_sorted() {
        let records = vec![
            record(4, 8.0, "Monsoon 2022"),
            record(4, 8.0, "Monsoon 2021"),
            record(3, 7.0, "Monsoon 2021"),
        ];
        assert_eq!(
            semesters(&records),
            vec![
                Semester::new(Season::Monsoon, 2021),
                Semester::new(Season::Monsoon, 2022),
            ]
        );
    }

    #[test]
    fn discrepancy_reported_beyond_tolerance() {
        let records = vec![record(4, 10.0, "Monsoon 2021"), record(3, 7.0, "Monsoon 2021")];
        let mut profile = sample_profile();

        // Computed CGPA is 8.7142...; a recorded 8.71 is display noise.
        profile.cgpa = 8.71;
        assert!(cgpa_discrepancy(&profile, &records).is_none());

        // A recorded 9.00 is a real mismatch.
        profile.cgpa = 9.0;
        let discrepancy = cgpa_discrepancy(&profile, &records).expect("discrepancy");
        assert!((discrepancy.recorded - 9.0).abs() < f64::EPSILON);
        assert!(discrepancy.delta() > CGPA_TOLERANCE);
    }

    #[test]
    fn summary_aggregates_all_views() {
        let mut elective = record(3, 9.0, "Winter 2022");
        elective.course_type = CourseType::Elective;
        let records = vec![record(4, 8.0, "Monsoon 2021"), elective];

        let summary = AcademicSummary::from_records(&records);
        assert_eq!(summary.total_credits, 7);
        assert_eq!(summary.trend.len(), 2);
        assert!((summary.core_gpa - 8.0).abs() < 1e-9);
        assert!((summary.elective_gpa - 9.0).abs() < 1e-9);
        // (4*8 + 3*9) / 7
        assert!((summary.overall_cgpa - 59.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn csv_rounds_at_the_boundary() {
        let records = vec![record(4, 10.0, "Monsoon 2021"), record(3, 7.0, "Monsoon 2021")];
        let csv = trend_to_csv(&cumulative_trend(&records));
        assert_eq!(csv, "semester,sgpa,cgpa\nMonsoon 2021,8.71,8.71\n");
    }

    fn sample_profile() -> StudentProfile {
        StudentProfile {
            id: "s-1".to_string(),
            name: "Asha Verma".to_string(),
            email: "asha@example.edu".to_string(),
            role: crate::core::models::Role::Student,
            roll_number: "2021101".to_string(),
            program: "B.Tech CSE".to_string(),
            cgpa: 0.0,
            credits_completed: 0,
            is_active: true,
        }
    }
}

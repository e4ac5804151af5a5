//! Integration tests for the academic performance aggregator

use std::fs;

use campus_analytics::core::academics::{
    cumulative_trend, filter_course_type, filter_semester, overall_cgpa, round_gpa, semester_gpa,
    semesters, AcademicSummary,
};
use campus_analytics::core::ingest::parse_grades;
use campus_analytics::core::models::{
    CourseType, GradeRecord, LetterGrade, Season, Semester,
};

fn sample_records() -> Vec<GradeRecord> {
    let json = fs::read_to_string("samples/grades.json").expect("sample grades readable");
    parse_grades(&json).expect("sample grades parse")
}

fn record(credits: u32, grade_points: f64, semester: &str) -> GradeRecord {
    GradeRecord::new(
        "CSE000".to_string(),
        "Constructed Course".to_string(),
        CourseType::Core,
        credits,
        LetterGrade::A,
        grade_points,
        semester.parse().expect("semester label"),
    )
}

#[test]
fn sample_trend_is_in_academic_order_with_expected_values() {
    let records = sample_records();
    let trend = cumulative_trend(&records);

    let labels: Vec<String> = trend.iter().map(|p| p.semester.to_string()).collect();
    assert_eq!(labels, vec!["Monsoon 2023", "Winter 2024", "Monsoon 2024"]);

    // Monsoon 2023: (4*9 + 4*8 + 2*10) / 10 = 8.8
    assert!((trend[0].sgpa - 8.8).abs() < 1e-9);
    // Winter 2024: (4*7 + 4*8 + 2*6) / 10 = 7.2; cumulative 160/20 = 8.0
    assert!((trend[1].sgpa - 7.2).abs() < 1e-9);
    assert!((trend[1].cgpa - 8.0).abs() < 1e-9);
    // Monsoon 2024 cumulative: 264/32 = 8.25
    assert!((trend[2].cgpa - 8.25).abs() < 1e-9);
    assert!((overall_cgpa(&records) - 8.25).abs() < 1e-9);
}

#[test]
fn sample_semester_and_type_filters_agree_with_the_weighted_mean() {
    let records = sample_records();

    let monsoon_2024 = filter_semester(&records, Semester::new(Season::Monsoon, 2024));
    assert_eq!(monsoon_2024.len(), 3);
    assert!((semester_gpa(&monsoon_2024) - 104.0 / 12.0).abs() < 1e-9);

    let electives = filter_course_type(&records, CourseType::Elective);
    assert_eq!(electives.len(), 3);
    // (2*10 + 2*6 + 4*9) / 8 = 8.5
    assert!((semester_gpa(&electives) - 8.5).abs() < 1e-9);

    assert_eq!(
        semesters(&records),
        vec![
            Semester::new(Season::Monsoon, 2023),
            Semester::new(Season::Winter, 2024),
            Semester::new(Season::Monsoon, 2024),
        ]
    );
}

#[test]
fn gpa_is_bounded_and_total_on_empty_input() {
    assert!(semester_gpa(&[]).abs() < f64::EPSILON);
    assert!(cumulative_trend(&[]).is_empty());

    let records = sample_records();
    let gpa = semester_gpa(&records);
    assert!((0.0..=10.0).contains(&gpa));
}

#[test]
fn duplicating_every_record_leaves_the_mean_unchanged() {
    let records = sample_records();
    let mut doubled = records.clone();
    doubled.extend(records.clone());
    assert!((semester_gpa(&records) - semester_gpa(&doubled)).abs() < 1e-12);
}

#[test]
fn credit_weighting_matches_the_worked_example() {
    // (4*10 + 3*7) / 7 = 61/7 ≈ 8.71
    let records = vec![
        record(4, 10.0, "Monsoon 2021"),
        record(3, 7.0, "Monsoon 2021"),
    ];
    let gpa = semester_gpa(&records);
    assert!((gpa - 61.0 / 7.0).abs() < 1e-9);
    assert!((round_gpa(gpa) - 8.71).abs() < 1e-9);
}

#[test]
fn summary_matches_the_trend_tail() {
    let records = sample_records();
    let summary = AcademicSummary::from_records(&records);
    assert_eq!(summary.total_credits, 32);
    assert!((summary.overall_cgpa - summary.trend.last().unwrap().cgpa).abs() < 1e-12);
}

//! Transcript report generation
//!
//! Renders a student's academic record (GPA summary, SGPA/CGPA trend,
//! per-semester grade tables) as a printable report in Markdown or HTML.
//! This is the presentation boundary: GPA values are rounded to two
//! decimals here and nowhere earlier.

pub mod formats;

use std::error::Error;
use std::path::Path;

use crate::core::academics::AcademicSummary;
use crate::core::models::{GradeRecord, Semester, StudentProfile};

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a transcript render needs, so the format
/// implementations share a single source of truth.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Profile of the student, when available (the CLI may run offline)
    pub student: Option<&'a StudentProfile>,
    /// Aggregated academic figures
    pub summary: &'a AcademicSummary,
    /// All grade records backing the summary
    pub records: &'a [GradeRecord],
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        student: Option<&'a StudentProfile>,
        summary: &'a AcademicSummary,
        records: &'a [GradeRecord],
    ) -> Self {
        Self {
            student,
            summary,
            records,
        }
    }

    /// The CGPA the report headlines
    ///
    /// The institutional record when a profile is present, otherwise the
    /// value computed from the grade records.
    #[must_use]
    pub fn displayed_cgpa(&self) -> f64 {
        self.student
            .map_or(self.summary.overall_cgpa, |s| s.cgpa)
    }

    /// Records grouped by semester, in academic order
    #[must_use]
    pub fn semester_sections(&self) -> Vec<(Semester, Vec<&'a GradeRecord>)> {
        let mut sections: Vec<(Semester, Vec<&'a GradeRecord>)> = Vec::new();
        for point in &self.summary.trend {
            let records = self
                .records
                .iter()
                .filter(|r| r.semester == point.semester)
                .collect();
            sections.push((point.semester, records));
        }
        sections
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file writing fails.
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

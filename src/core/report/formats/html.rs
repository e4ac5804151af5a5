//! HTML report generator
//!
//! Generates a self-contained HTML transcript with embedded CSS, rendered
//! through an askama template. The output is print-friendly; the portal's
//! "Print" action is the main consumer.

use std::error::Error;
use std::fs;
use std::path::Path;

use askama::Template;

use crate::core::report::{ReportContext, ReportGenerator};

/// Row of the SGPA/CGPA trend table
struct TrendRow {
    semester: String,
    sgpa: String,
    cgpa: String,
}

/// Row of a per-semester grade table
struct GradeRow {
    course: String,
    course_type: String,
    credits: u32,
    grade: String,
    points: String,
}

/// One semester's block of the transcript
struct SemesterSection {
    title: String,
    rows: Vec<GradeRow>,
}

/// Template context, flattened to display-ready strings
#[derive(Template)]
#[template(path = "transcript.html")]
struct TranscriptTemplate {
    has_student: bool,
    student_name: String,
    roll_number: String,
    program: String,
    cgpa: String,
    computed_cgpa: String,
    core_gpa: String,
    elective_gpa: String,
    total_credits: u32,
    trend: Vec<TrendRow>,
    sections: Vec<SemesterSection>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn template(ctx: &ReportContext) -> TranscriptTemplate {
        let trend = ctx
            .summary
            .trend
            .iter()
            .map(|point| TrendRow {
                semester: point.semester.to_string(),
                sgpa: format!("{:.2}", point.sgpa),
                cgpa: format!("{:.2}", point.cgpa),
            })
            .collect();

        let sections = ctx
            .semester_sections()
            .into_iter()
            .map(|(semester, records)| SemesterSection {
                title: semester.to_string(),
                rows: records
                    .into_iter()
                    .map(|record| GradeRow {
                        course: format!("{} ({})", record.course_name, record.course_code),
                        course_type: record.course_type.to_string(),
                        credits: record.credits,
                        grade: record.grade.to_string(),
                        points: format!("{:.2}", record.grade_points),
                    })
                    .collect(),
            })
            .collect();

        TranscriptTemplate {
            has_student: ctx.student.is_some(),
            student_name: ctx.student.map_or_else(String::new, |s| s.name.clone()),
            roll_number: ctx
                .student
                .map_or_else(String::new, |s| s.roll_number.clone()),
            program: ctx.student.map_or_else(String::new, |s| s.program.clone()),
            cgpa: format!("{:.2}", ctx.displayed_cgpa()),
            computed_cgpa: format!("{:.2}", ctx.summary.overall_cgpa),
            core_gpa: format!("{:.2}", ctx.summary.core_gpa),
            elective_gpa: format!("{:.2}", ctx.summary.elective_gpa),
            total_credits: ctx.summary.total_credits,
            trend,
            sections,
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::template(ctx).render()?)
    }
}

//! Markdown report generator
//!
//! Generates transcript reports in Markdown. These render well in GitHub,
//! GitLab, and VS Code, and print acceptably from any Markdown viewer.

use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::core::report::{ReportContext, ReportGenerator};

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_report(ctx: &ReportContext) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "# Academic Transcript\n");

        if let Some(student) = ctx.student {
            let _ = writeln!(out, "**Student:** {} ({})  ", student.name, student.roll_number);
            let _ = writeln!(out, "**Program:** {}  ", student.program);
        }
        let _ = writeln!(out, "**CGPA:** {:.2}\n", ctx.displayed_cgpa());

        let _ = writeln!(out, "## GPA Summary\n");
        let _ = writeln!(out, "| Metric | Value |");
        let _ = writeln!(out, "|---|---|");
        let _ = writeln!(out, "| CGPA (computed) | {:.2} |", ctx.summary.overall_cgpa);
        let _ = writeln!(out, "| Core GPA | {:.2} |", ctx.summary.core_gpa);
        let _ = writeln!(out, "| Elective GPA | {:.2} |", ctx.summary.elective_gpa);
        let _ = writeln!(out, "| Total credits | {} |", ctx.summary.total_credits);
        out.push('\n');

        let _ = writeln!(out, "## SGPA / CGPA Trend\n");
        let _ = writeln!(out, "| Semester | SGPA | CGPA |");
        let _ = writeln!(out, "|---|---|---|");
        for point in &ctx.summary.trend {
            let _ = writeln!(
                out,
                "| {} | {:.2} | {:.2} |",
                point.semester, point.sgpa, point.cgpa
            );
        }
        out.push('\n');

        for (semester, records) in ctx.semester_sections() {
            let _ = writeln!(out, "## {semester}\n");
            let _ = writeln!(out, "| Course | Type | Credits | Grade | Grade Points |");
            let _ = writeln!(out, "|---|---|---|---|---|");
            for record in records {
                let _ = writeln!(
                    out,
                    "| {} ({}) | {} | {} | {} | {:.2} |",
                    record.course_name,
                    record.course_code,
                    record.course_type,
                    record.credits,
                    record.grade,
                    record.grade_points
                );
            }
            out.push('\n');
        }

        out
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_report(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::academics::AcademicSummary;
    use crate::core::models::{CourseType, GradeRecord, LetterGrade, Season, Semester};

    fn records() -> Vec<GradeRecord> {
        vec![
            GradeRecord::new(
                "CSE101".to_string(),
                "Introduction to Programming".to_string(),
                CourseType::Core,
                4,
                LetterGrade::APlus,
                10.0,
                Semester::new(Season::Monsoon, 2021),
            ),
            GradeRecord::new(
                "MTH100".to_string(),
                "Linear Algebra".to_string(),
                CourseType::Core,
                3,
                LetterGrade::B,
                7.0,
                Semester::new(Season::Monsoon, 2021),
            ),
        ]
    }

    #[test]
    fn renders_rounded_values_and_sections() {
        let records = records();
        let summary = AcademicSummary::from_records(&records);
        let ctx = ReportContext::new(None, &summary, &records);

        let report = MarkdownReporter::new().render(&ctx).expect("renders");
        assert!(report.contains("# Academic Transcript"));
        // 61/7 rounds to 8.71 only at this boundary.
        assert!(report.contains("| Monsoon 2021 | 8.71 | 8.71 |"));
        assert!(report.contains("## Monsoon 2021"));
        assert!(report.contains("| Introduction to Programming (CSE101) | Core | 4 | A+ | 10.00 |"));
    }

    #[test]
    fn headlines_the_profile_cgpa_when_present() {
        let records = records();
        let summary = AcademicSummary::from_records(&records);
        let student = crate::core::models::StudentProfile {
            id: "s-1".to_string(),
            name: "Asha Verma".to_string(),
            email: "asha@example.edu".to_string(),
            role: crate::core::models::Role::Student,
            roll_number: "2021101".to_string(),
            program: "B.Tech CSE".to_string(),
            cgpa: 8.8,
            credits_completed: 7,
            is_active: true,
        };
        let ctx = ReportContext::new(Some(&student), &summary, &records);

        let report = MarkdownReporter::new().render(&ctx).expect("renders");
        assert!(report.contains("**Student:** Asha Verma (2021101)"));
        assert!(report.contains("**CGPA:** 8.80"));
    }
}

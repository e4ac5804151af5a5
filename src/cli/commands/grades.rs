//! Grades command handler
//!
//! Loads an exported grades JSON file, prints the GPA summary and
//! SGPA/CGPA trend, and optionally writes a transcript report or a trend
//! CSV.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use logger::{error, info, warn};

use campus_analytics::config::Config;
use campus_analytics::core::academics::{
    cgpa_discrepancy, filter_semester, semester_gpa, trend_to_csv, AcademicSummary,
};
use campus_analytics::core::ingest::parse_grades;
use campus_analytics::core::models::{GradeRecord, Semester, StudentProfile};
use campus_analytics::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};

/// Run the grades command.
///
/// # Arguments
/// * `input_file` - Path to the grades JSON export
/// * `semester` - Optional semester label to focus the GPA figure on
/// * `profile` - Optional student profile JSON for CGPA comparison
/// * `report` - Optional report format (md, html)
/// * `output` - Optional report output path
/// * `csv` - Optional trend CSV output path
/// * `config` - Configuration containing the default reports directory
pub fn run(
    input_file: &Path,
    semester: Option<&str>,
    profile: Option<&Path>,
    report: Option<&str>,
    output: Option<&Path>,
    csv: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = execute(input_file, semester, profile, report, output, csv, config) {
        error!("Grades analysis failed for {}: {err}", input_file.display());
        eprintln!("{err}");
    }
}

fn execute(
    input_file: &Path,
    semester: Option<&str>,
    profile: Option<&Path>,
    report: Option<&str>,
    output: Option<&Path>,
    csv: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let records = load_records(input_file)?;
    info!(
        "Loaded {} grade records from {}",
        records.len(),
        input_file.display()
    );

    let student = profile.map(load_profile).transpose()?;
    let summary = AcademicSummary::from_records(&records);

    print_summary(&records, &summary, semester, student.as_ref())?;

    if let Some(student) = &student {
        if let Some(discrepancy) = cgpa_discrepancy(student, &records) {
            // The institutional value stays the displayed record; the
            // computed value is a derived metric. Just surface the drift.
            warn!(
                "Profile CGPA {:.2} differs from computed CGPA {:.2}",
                discrepancy.recorded, discrepancy.computed
            );
        }
    }

    if let Some(csv_path) = csv {
        fs::write(csv_path, trend_to_csv(&summary.trend))
            .map_err(|e| format!("✗ Failed to write {}: {e}", csv_path.display()))?;
        println!("✓ Trend CSV written: {}", csv_path.display());
    }

    if let Some(format_str) = report {
        let report_path = generate_report(
            input_file,
            output,
            format_str,
            student.as_ref(),
            &summary,
            &records,
            config,
        )?;
        println!("✓ Report generated: {}", report_path.display());
    }

    Ok(())
}

fn load_records(input_file: &Path) -> Result<Vec<GradeRecord>, String> {
    let json = fs::read_to_string(input_file)
        .map_err(|e| format!("✗ Failed to read {}: {e}", input_file.display()))?;
    parse_grades(&json).map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))
}

fn load_profile(path: &Path) -> Result<StudentProfile, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("✗ Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&json).map_err(|e| format!("✗ Failed to load {}: {e}", path.display()))
}

fn print_summary(
    records: &[GradeRecord],
    summary: &AcademicSummary,
    semester: Option<&str>,
    student: Option<&StudentProfile>,
) -> Result<(), String> {
    println!("\n=== GPA Summary ===\n");

    let displayed_cgpa = student.map_or(summary.overall_cgpa, |s| s.cgpa);
    println!("CGPA:          {displayed_cgpa:.2}");

    if let Some(label) = semester {
        let semester = Semester::from_str(label)?;
        let slice = filter_semester(records, semester);
        println!("SGPA ({semester}): {:.2}", semester_gpa(&slice));
    } else {
        println!("Overall GPA:   {:.2}", semester_gpa(records));
    }
    println!("Core GPA:      {:.2}", summary.core_gpa);
    println!("Elective GPA:  {:.2}", summary.elective_gpa);
    println!("Total credits: {}", summary.total_credits);

    if !summary.trend.is_empty() {
        println!("\n=== SGPA / CGPA Trend ===\n");
        for point in &summary.trend {
            println!(
                "{:<14} SGPA {:>5.2}   CGPA {:>5.2}",
                point.semester.to_string(),
                point.sgpa,
                point.cgpa
            );
        }
    }

    Ok(())
}

fn generate_report(
    input_file: &Path,
    output: Option<&Path>,
    format_str: &str,
    student: Option<&StudentProfile>,
    summary: &AcademicSummary,
    records: &[GradeRecord],
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let reports_dir = PathBuf::from(&config.paths.reports_dir);
            fs::create_dir_all(&reports_dir).map_err(|e| {
                format!(
                    "✗ Failed to create reports directory {}: {e}",
                    reports_dir.display()
                )
            })?;
            let stem = input_file
                .file_stem()
                .map_or_else(|| "transcript".to_string(), |s| s.to_string_lossy().to_string());
            reports_dir.join(format!("{stem}.{}", format.extension()))
        }
    };

    let ctx = ReportContext::new(student, summary, records);
    let generator: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };

    generator
        .generate(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    info!("Report written to {}", output_path.display());
    Ok(output_path)
}

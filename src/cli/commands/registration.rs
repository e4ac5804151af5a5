//! Registration command handler
//!
//! Loads a term's course catalog from JSON and replays a course selection
//! through the registration validator, printing every accept/reject
//! decision the portal would show.

use std::fs;
use std::path::Path;

use logger::{error, info};

use campus_analytics::core::ingest::parse_courses;
use campus_analytics::core::models::CourseOffering;
use campus_analytics::core::registration::{RegistrationSet, MAX_CREDITS};

/// Run the registration command.
///
/// # Arguments
/// * `input_file` - Path to the course catalog JSON export
/// * `select` - Course ids (or codes) to register, in order
/// * `term` - Optional term slug; when present the submission payload is
///   printed for the finalize step
pub fn run(input_file: &Path, select: &[String], term: Option<&str>) {
    if let Err(err) = execute(input_file, select, term) {
        error!(
            "Registration validation failed for {}: {err}",
            input_file.display()
        );
        eprintln!("{err}");
    }
}

fn execute(input_file: &Path, select: &[String], term: Option<&str>) -> Result<(), String> {
    let json = fs::read_to_string(input_file)
        .map_err(|e| format!("✗ Failed to read {}: {e}", input_file.display()))?;
    let catalog = parse_courses(&json)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;
    info!(
        "Loaded {} catalog courses from {}",
        catalog.len(),
        input_file.display()
    );

    let mut set = RegistrationSet::new();
    for wanted in select {
        let Some(course) = find_course(&catalog, wanted) else {
            println!("✗ {wanted}: not in the catalog");
            continue;
        };

        match set.try_register(course) {
            Ok(next) => {
                set = next;
                println!(
                    "✓ {} - {} ({} credits, {})",
                    course.code, course.name, course.credits, course.schedule
                );
            }
            Err(reason) => {
                println!("✗ {} - {}: {reason} [{}]", course.code, course.name, reason.code());
            }
        }
    }

    println!(
        "\nCredit load: {} / {MAX_CREDITS} across {} course(s)",
        set.credit_load(),
        set.len()
    );
    for course in set.courses() {
        println!("  {} · {}", course.code, course.schedule);
    }

    if let Some(term) = term {
        if set.is_empty() {
            println!("\nNothing to finalize for {term}.");
        } else {
            let payload = set.to_payload(term);
            let json = serde_json::to_string_pretty(&payload)
                .map_err(|e| format!("✗ Failed to serialize payload: {e}"))?;
            println!("\nFinalize-registration payload for {term}:\n{json}");
        }
    }

    Ok(())
}

fn find_course<'a>(catalog: &'a [CourseOffering], wanted: &str) -> Option<&'a CourseOffering> {
    catalog
        .iter()
        .find(|c| c.id == wanted || c.code == wanted)
}

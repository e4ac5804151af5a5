//! CLI argument definitions for `CampusAnalytics`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use campus_analytics::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `token`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Analyze exported grade records.
    ///
    /// Loads a JSON export of grade records, prints the GPA summary and
    /// SGPA/CGPA trend, and optionally writes a transcript report.
    Grades {
        /// Path to the grades JSON file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Restrict the GPA figure to one semester (e.g., "Monsoon 2024")
        #[arg(long, value_name = "LABEL")]
        semester: Option<String>,

        /// Compare against a student profile JSON and warn on CGPA drift
        #[arg(long, value_name = "FILE")]
        profile: Option<PathBuf>,

        /// Generate a transcript report in the specified format (md, html)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (defaults to config `reports_dir` plus the
        /// input file name)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the SGPA/CGPA trend as CSV to the given path
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },
    /// Validate a course selection against a term catalog.
    ///
    /// Loads a JSON export of the term's course catalog and replays the
    /// given course ids through the registration validator, printing each
    /// accept/reject decision and the resulting schedule.
    Registration {
        /// Path to the course catalog JSON file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Course ids (or codes) to register, in order
        #[arg(short, long, value_name = "ID", num_args = 1..)]
        select: Vec<String>,

        /// Term slug for the printed submission payload (e.g.,
        /// "monsoon-2024")
        #[arg(long, value_name = "TERM")]
        term: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "campusanalytics",
    about = "CampusAnalytics command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override config API token
    #[arg(long = "api-token", value_name = "TOKEN")]
    pub api_token: Option<String>,

    /// Override config reports output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration; `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            base_url: self.api_url.clone(),
            token: self.api_token.clone(),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

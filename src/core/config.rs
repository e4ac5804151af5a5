//! Configuration module for `CampusAnalytics`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Portal API configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the portal backend
    #[serde(default)]
    pub base_url: String,
    /// Bearer token used by the surrounding transport
    #[serde(default)]
    pub token: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for generated report files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Portal API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override API base URL
    pub base_url: Option<String>,
    /// Override API token
    pub token: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$CAMPUS_ANALYTICS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/campusanalytics`
    /// - macOS: `~/Library/Application Support/campusanalytics`
    /// - Windows: `%APPDATA%\campusanalytics`
    #[must_use]
    pub fn get_campusanalytics_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campusanalytics")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading so that newly added configuration fields pick up
    /// their default values while existing user settings survive an
    /// upgrade. Only fields empty in the current config and non-empty in
    /// defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.api.base_url.is_empty() && !defaults.api.base_url.is_empty() {
            self.api.base_url.clone_from(&defaults.api.base_url);
            changed = true;
        }
        if self.api.token.is_empty() && !defaults.api.token.is_empty() {
            self.api.token.clone_from(&defaults.api.token);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Command-line arguments override configuration file values for the
    /// current run without touching the persistent file. Only non-`None`
    /// values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(base_url) = &overrides.base_url {
            self.api.base_url.clone_from(base_url);
        }
        if let Some(token) = &overrides.token {
            self.api.token.clone_from(token);
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside the directory returned by [`get_campusanalytics_dir`].
    ///
    /// [`get_campusanalytics_dir`]: Self::get_campusanalytics_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_campusanalytics_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CAMPUS_ANALYTICS` in a string to the actual config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$CAMPUS_ANALYTICS") {
            let dir = Self::get_campusanalytics_dir();
            value.replace("$CAMPUS_ANALYTICS", dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands `$CAMPUS_ANALYTICS`
    /// variables in the values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.api.base_url = Self::expand_variables(&config.api.base_url);
        config.api.token = Self::expand_variables(&config.api.token);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds.
    ///
    /// # Panics
    ///
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled into
    /// the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - Config file exists: loads it, merges missing fields from defaults,
    ///   saves the updated config.
    /// - First run: creates the config directory and saves the defaults.
    ///
    /// Falls back to defaults if anything goes wrong while loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes to TOML and writes to the platform-specific config file,
    /// creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, directory creation, or the write
    /// fails.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `base_url`, `token`,
    /// `reports_dir`.
    ///
    /// # Returns
    ///
    /// - `Some(String)`: the configuration value as a string
    /// - `None`: if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "base_url" | "base-url" => Some(self.api.base_url.clone()),
            "token" => Some(self.api.token.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g., a non-boolean for `verbose`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "base_url" | "base-url" => self.api.base_url = value.to_string(),
            "token" => self.api.token = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "base_url" | "base-url" => self.api.base_url.clone_from(&defaults.api.base_url),
            "token" => self.api.token.clone_from(&defaults.api.token),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file; the next [`load()`](Config::load)
    /// recreates it from defaults. Destructive; the CLI asks for
    /// confirmation first.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[api]")?;
        writeln!(f, "  base_url = \"{}\"", self.api.base_url)?;
        writeln!(f, "  token = \"{}\"", self.api.token)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}

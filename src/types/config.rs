//! Configuration structures for the fleet operations core
//!
//! This module contains the core configuration structure and validation logic
//! used to control session timeout behavior, document-alerting windows, the
//! auto-sync quiescence delay, and the fixture-generation CLI.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Session timeout constants
pub mod session {
    /// Idle minutes before the session is expired
    pub const DEFAULT_TIMEOUT_MINUTES: u64 = 30;

    /// Minutes before expiry at which the idle warning is raised
    pub const DEFAULT_WARNING_LEAD_MINUTES: u64 = 5;
}

/// Auto-sync constants
pub mod sync {
    /// Quiescence delay between a change notification and the
    /// reconciliation pass it schedules
    pub const DEFAULT_QUIESCENCE_MS: u64 = 1000;
}

/// Document alerting constants
pub mod alerts {
    /// Days before expiry within which a document is flagged for renewal
    pub const DEFAULT_RENEWAL_WINDOW_DAYS: i64 = 30;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fleet-ops-core",
    version = "0.1.0",
    about = "Fleet operations core - batch vehicle document expiry scanner",
    long_about = "Scans vehicle document records for expired and soon-to-expire documents \
and reports actionable alerts.

EXAMPLES:
    # Scan a documents file with default settings
    fleet-ops-core --documents documents.json

    # Generate a fixture fleet to scan
    fleet-ops-core --generate 50 --output documents.json

    # Override the renewal window
    fleet-ops-core --documents documents.json --renewal-window-days 45

    # Generate a configuration template
    fleet-ops-core --print-config > my-config.json

    # Validate configuration without scanning
    fleet-ops-core --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Path to a JSON file of document records to scan
    #[arg(long, help = "Document records file to scan (JSON array)")]
    pub documents: Option<String>,

    /// Generate a fixture fleet with the given vehicle count instead of scanning
    #[arg(
        long,
        help = "Generate fixture documents for N vehicles",
        long_help = "Generates a fixture fleet with N vehicles and writes the document \
records to --output (or stdout). Useful for demos and testing."
    )]
    pub generate: Option<usize>,

    /// Output file path for alerts or generated fixtures
    #[arg(short, long, help = "Output file path (stdout if omitted)")]
    pub output: Option<String>,

    /// Output format: json or json_lines
    #[arg(long, help = "Output format: json or json_lines")]
    pub format: Option<String>,

    /// Days before expiry within which a document is flagged for renewal
    #[arg(long, help = "Renewal window in days (default: 30)")]
    pub renewal_window_days: Option<i64>,

    /// Random seed for fixture generation
    #[arg(long, help = "Random seed for reproducible fixture generation")]
    pub seed: Option<u64>,

    /// Print the default configuration as JSON and exit
    #[arg(long, help = "Print default configuration as JSON and exit")]
    pub print_config: bool,

    /// Validate configuration without scanning
    #[arg(long, help = "Validate configuration and exit without scanning")]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose (INFO) logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,
}

/// Core configuration for the fleet operations runtime and CLI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    /// Idle minutes before the session expires
    pub session_timeout_minutes: u64,
    /// Minutes before expiry at which the idle warning fires
    pub session_warning_lead_minutes: u64,
    /// Days before expiry within which a document is flagged for renewal
    pub renewal_window_days: i64,
    /// Quiescence delay (milliseconds) before a scheduled reconciliation pass
    pub sync_quiescence_ms: u64,
    /// Vehicles per generated fixture fleet
    pub fixture_vehicle_count: usize,
    /// Fraction of generated documents that are already expired (0.0-1.0)
    pub fixture_expired_ratio: f64,
    /// Fraction of generated documents expiring within the renewal window (0.0-1.0)
    pub fixture_due_ratio: f64,
    /// Fraction of generated documents with no expiration date (0.0-1.0)
    pub fixture_missing_expiry_ratio: f64,
    /// Output format for alerts and fixtures
    pub output_format: OutputFormat,
    /// Random seed for fixture generation
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),

    /// Invalid CLI argument value
    #[error("Invalid value for {field}: {message}")]
    InvalidArgument {
        /// Name of the offending CLI argument
        field: String,
        /// Parser error message
        message: String,
    },
}

/// Validation errors for the core configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Session timeout is invalid
    #[error("Session timeout must be greater than 0 minutes, got {0}")]
    InvalidSessionTimeout(u64),

    /// Warning lead does not fit inside the session timeout
    #[error("Warning lead ({lead} min) must be shorter than the session timeout ({timeout} min)")]
    InvalidWarningLead {
        /// Configured warning lead in minutes
        lead: u64,
        /// Configured session timeout in minutes
        timeout: u64,
    },

    /// Renewal window is invalid
    #[error("Renewal window must be zero or more days, got {0}")]
    InvalidRenewalWindow(i64),

    /// Quiescence delay is invalid
    #[error("Sync quiescence delay must be greater than 0 ms, got {0}")]
    InvalidQuiescence(u64),

    /// Fixture ratio is out of range
    #[error("Invalid ratio for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidRatio {
        /// Name of the field with the invalid ratio
        field: String,
        /// The invalid ratio value
        value: f64,
    },

    /// Fixture ratios exceed 1.0 combined
    #[error("Fixture ratios must sum to at most 1.0, got {sum}")]
    InvalidRatioSum {
        /// The actual sum of fixture ratios
        sum: f64,
    },
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            session_timeout_minutes: session::DEFAULT_TIMEOUT_MINUTES,
            session_warning_lead_minutes: session::DEFAULT_WARNING_LEAD_MINUTES,
            renewal_window_days: alerts::DEFAULT_RENEWAL_WINDOW_DAYS,
            sync_quiescence_ms: sync::DEFAULT_QUIESCENCE_MS,
            fixture_vehicle_count: 25,
            fixture_expired_ratio: 0.1,
            fixture_due_ratio: 0.2,
            fixture_missing_expiry_ratio: 0.15,
            output_format: OutputFormat::default(),
            seed: None,
        }
    }
}

impl CoreConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        config.apply_cli_overrides(args)?;

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string())),
            None => Err(ConfigError::UnsupportedFormat("<none>".to_string())),
        }
    }

    fn apply_cli_overrides(&mut self, args: CliArgs) -> Result<(), ConfigError> {
        if let Some(window) = args.renewal_window_days {
            self.renewal_window_days = window;
        }
        if let Some(count) = args.generate {
            self.fixture_vehicle_count = count;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(format) = args.format {
            self.output_format = OutputFormat::from_str(&format).map_err(|message| {
                ConfigError::InvalidArgument { field: "format".to_string(), message }
            })?;
        }
        Ok(())
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.session_timeout_minutes == 0 {
            return Err(ConfigValidationError::InvalidSessionTimeout(self.session_timeout_minutes));
        }

        if self.session_warning_lead_minutes >= self.session_timeout_minutes {
            return Err(ConfigValidationError::InvalidWarningLead {
                lead: self.session_warning_lead_minutes,
                timeout: self.session_timeout_minutes,
            });
        }

        if self.renewal_window_days < 0 {
            return Err(ConfigValidationError::InvalidRenewalWindow(self.renewal_window_days));
        }

        if self.sync_quiescence_ms == 0 {
            return Err(ConfigValidationError::InvalidQuiescence(self.sync_quiescence_ms));
        }

        for (field, value) in [
            ("fixture_expired_ratio", self.fixture_expired_ratio),
            ("fixture_due_ratio", self.fixture_due_ratio),
            ("fixture_missing_expiry_ratio", self.fixture_missing_expiry_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::InvalidRatio {
                    field: field.to_string(),
                    value,
                });
            }
        }

        let sum =
            self.fixture_expired_ratio + self.fixture_due_ratio + self.fixture_missing_expiry_ratio;
        if sum > 1.0 {
            return Err(ConfigValidationError::InvalidRatioSum { sum });
        }

        Ok(())
    }

    /// Full idle-session timeout as a duration
    pub fn session_timeout(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_timeout_minutes as i64)
    }

    /// Warning lead before expiry as a duration
    pub fn session_warning_lead(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.session_warning_lead_minutes as i64)
    }

    /// Auto-sync quiescence delay as a duration
    pub fn sync_quiescence(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.sync_quiescence_ms as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.session_timeout_minutes, 30);
        assert_eq!(config.session_warning_lead_minutes, 5);
        assert_eq!(config.renewal_window_days, 30);
        assert_eq!(config.sync_quiescence_ms, 1000);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = CoreConfig { session_timeout_minutes: 0, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidSessionTimeout(0))
        ));
    }

    #[test]
    fn warning_lead_must_fit_inside_timeout() {
        let config = CoreConfig {
            session_timeout_minutes: 5,
            session_warning_lead_minutes: 5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidWarningLead { lead: 5, timeout: 5 })
        ));
    }

    #[test]
    fn ratio_sum_over_one_is_rejected() {
        let config = CoreConfig {
            fixture_expired_ratio: 0.5,
            fixture_due_ratio: 0.4,
            fixture_missing_expiry_ratio: 0.2,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidRatioSum { .. })));
    }

    #[test]
    fn durations_reflect_minutes_and_millis() {
        let config = CoreConfig::default();
        assert_eq!(config.session_timeout(), chrono::Duration::minutes(30));
        assert_eq!(config.session_warning_lead(), chrono::Duration::minutes(5));
        assert_eq!(config.sync_quiescence(), chrono::Duration::milliseconds(1000));
    }
}

//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! that CLI values override configuration file defaults.

use clap::Parser;
use fleet_ops_core::types::config::{CliArgs, CoreConfig};
use fleet_ops_core::types::OutputFormat;

/// Test parsing of the renewal window argument
#[test]
fn test_renewal_window_argument_parsing() {
    // Test default value
    let args = vec!["test"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.renewal_window_days, None);

    // Test explicit value
    let args = vec!["test", "--renewal-window-days", "45"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.renewal_window_days, Some(45));
}

/// Test parsing of scan and generate modes
#[test]
fn test_mode_argument_parsing() {
    let args = vec!["test", "--documents", "docs.json"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.documents.as_deref(), Some("docs.json"));
    assert_eq!(cli_args.generate, None);

    let args = vec!["test", "--generate", "50", "--output", "fixtures.json"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.generate, Some(50));
    assert_eq!(cli_args.output.as_deref(), Some("fixtures.json"));
}

/// Test parsing of logging and special flags
#[test]
fn test_flag_parsing() {
    let args = vec!["test", "--verbose", "--dry-run"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert!(cli_args.verbose);
    assert!(cli_args.dry_run);
    assert!(!cli_args.debug);
    assert!(!cli_args.print_config);

    let args = vec!["test", "--debug", "--print-config"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert!(cli_args.debug);
    assert!(cli_args.print_config);
}

/// CLI overrides take precedence over defaults
#[test]
fn test_cli_overrides_defaults() {
    let args = vec![
        "test",
        "--renewal-window-days",
        "60",
        "--generate",
        "10",
        "--seed",
        "42",
        "--format",
        "json_lines",
    ];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    let config = CoreConfig::from_cli_args(cli_args).unwrap();

    assert_eq!(config.renewal_window_days, 60);
    assert_eq!(config.fixture_vehicle_count, 10);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.output_format, OutputFormat::JsonLines);
    assert!(config.validate().is_ok());
}

/// An unknown output format is rejected with a configuration error
#[test]
fn test_invalid_format_is_rejected() {
    let args = vec!["test", "--format", "xml"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert!(CoreConfig::from_cli_args(cli_args).is_err());
}

/// Defaults survive when no overrides are given
#[test]
fn test_defaults_without_overrides() {
    let args = vec!["test"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    let config = CoreConfig::from_cli_args(cli_args).unwrap();

    assert_eq!(config, CoreConfig::default());
}

/// The default configuration serializes to JSON for --print-config
#[test]
fn test_print_config_roundtrip() {
    let config = CoreConfig::default();
    let json = config.print_json().unwrap();
    let parsed: CoreConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

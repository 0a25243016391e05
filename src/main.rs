// Fleet Operations Core - Batch Alert Scanner
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/fleet-ops-core --documents documents.json
// ```
//
// Or generate a fixture fleet to scan:
//
// ```console
// $ ./target/release/fleet-ops-core --generate 50 --output documents.json --verbose
// ```

use clap::Parser;
use fleet_ops_core::analysis::AlertSummary;
use fleet_ops_core::documents::{compute_alerts, DocumentGenerator, DocumentRecord};
use fleet_ops_core::error::CoreError;
use fleet_ops_core::logging::LoggingConfig;
use fleet_ops_core::types::config::CliArgs;
use fleet_ops_core::types::{CoreConfig, OutputFormat};
use std::fs;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = CoreConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting fleet operations alert scanner");

    // Load configuration from CLI arguments and optional config file
    let config = match CoreConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no scan will be executed.");
        print_configuration_summary(&config);
        return;
    }

    let result = if args.generate.is_some() {
        generate_fixtures(&config, args.output.as_deref())
    } else if let Some(documents_path) = args.documents.as_deref() {
        run_scan(&config, documents_path, args.output.as_deref())
    } else {
        eprintln!("Nothing to do: pass --documents <file> to scan or --generate <n> for fixtures.");
        process::exit(2);
    };

    if let Err(e) = result {
        error!("Scan failed: {}", e);
        process::exit(1);
    }

    info!("Fleet operations alert scanner completed successfully");
}

/// Print a human-readable configuration summary
fn print_configuration_summary(config: &CoreConfig) {
    eprintln!("Configuration:");
    eprintln!("  Renewal window:       {} days", config.renewal_window_days);
    eprintln!("  Session timeout:      {} min", config.session_timeout_minutes);
    eprintln!("  Warning lead:         {} min", config.session_warning_lead_minutes);
    eprintln!("  Sync quiescence:      {} ms", config.sync_quiescence_ms);
    eprintln!("  Fixture vehicles:     {}", config.fixture_vehicle_count);
    eprintln!("  Output format:        {}", config.output_format);
}

/// Generate a fixture fleet and write the document records
fn generate_fixtures(config: &CoreConfig, output: Option<&str>) -> Result<(), CoreError> {
    eprintln!("Generating fixture fleet ({} vehicles)...", config.fixture_vehicle_count);

    let mut generator = DocumentGenerator::from_config(config);
    let documents = generator.generate_fleet(config, chrono::Utc::now());

    info!(documents = documents.len(), "fixture fleet generated");

    write_records(&documents, config.output_format, output)?;
    eprintln!("Wrote {} document records.", documents.len());
    Ok(())
}

/// Load documents, compute alerts, and report
fn run_scan(config: &CoreConfig, documents_path: &str, output: Option<&str>) -> Result<(), CoreError> {
    eprintln!("Scanning document records from {}...", documents_path);

    let documents = load_documents(documents_path)?;
    info!(documents = documents.len(), "document records loaded");

    let alerts = compute_alerts(&documents, chrono::Utc::now(), config.renewal_window_days);
    let summary = AlertSummary::from_scan(documents.len(), &alerts);

    eprintln!();
    eprint!("{}", summary.render_report());

    write_records(&alerts, config.output_format, output)?;
    Ok(())
}

/// Load document records from a JSON array file
fn load_documents(path: &str) -> Result<Vec<DocumentRecord>, CoreError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CoreError::document_load_error(format!("{}: {}", path, e)))?;
    let documents: Vec<DocumentRecord> = serde_json::from_str(&content)
        .map_err(|e| CoreError::document_load_error(format!("{}: {}", path, e)))?;
    Ok(documents)
}

/// Serialize records to the output path, or stdout when none is given
fn write_records<T: serde::Serialize>(
    records: &[T],
    format: OutputFormat,
    output: Option<&str>,
) -> Result<(), CoreError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(records)?,
        OutputFormat::JsonLines => {
            let mut lines = String::new();
            for record in records {
                lines.push_str(&serde_json::to_string(record)?);
                lines.push('\n');
            }
            lines
        }
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path, "output written");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

//! Config validation CLI tool
//!
//! Validates a pwexpiry configuration file and reports any errors.
//! Built with `--features cli`.

use pwexpiry_config::{ConfigError, ExpireAfter, CURRENT_CONFIG_VERSION};
use pwexpiry_util::format_duration;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config_path = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Usage: validate-config <config-file>");
            eprintln!();
            eprintln!("Validates a pwexpiry configuration file.");
            eprintln!();
            eprintln!("Example:");
            eprintln!("  validate-config pwexpiry.toml");
            return ExitCode::from(2);
        }
    };

    if !config_path.exists() {
        eprintln!("Error: Configuration file not found: {}", config_path.display());
        return ExitCode::from(1);
    }

    match pwexpiry_config::load_config(&config_path) {
        Ok(config) => {
            println!("✓ Configuration is valid");
            println!();
            println!("Summary:");
            println!("  Config version: {}", CURRENT_CONFIG_VERSION);
            let mode = match config.expire_after {
                ExpireAfter::Disabled => "disabled".to_string(),
                ExpireAfter::Default => format!(
                    "enabled (default max age {})",
                    format_duration(config.default_max_age)
                ),
                ExpireAfter::After(age) => format!("enabled (max age {})", format_duration(age)),
            };
            println!("  Password expiration: {}", mode);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed");
            eprintln!();
            match &e {
                ConfigError::ReadError(io_err) => {
                    eprintln!("Failed to read file: {}", io_err);
                }
                ConfigError::ParseError(parse_err) => {
                    eprintln!("TOML parse error:");
                    eprintln!("  {}", parse_err);
                }
                ConfigError::ValidationFailed { errors } => {
                    eprintln!("Validation errors ({}):", errors.len());
                    for err in errors {
                        eprintln!("  - {}", err);
                    }
                }
                ConfigError::UnsupportedVersion(ver) => {
                    eprintln!(
                        "Unsupported config version: {} (expected {})",
                        ver, CURRENT_CONFIG_VERSION
                    );
                }
            }
            ExitCode::from(1)
        }
    }
}

//! SEO Audit main entry point
//!
//! This is the command-line interface for the single-page SEO auditor.

use clap::Parser;
use seo_audit::config::{default_config, load_config_with_hash, Config};
use seo_audit::Auditor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// SEO Audit: single-page on-page SEO auditor
///
/// Serves `GET /audit?url=...` over HTTP, or audits one page from the
/// command line and prints the JSON report.
#[derive(Parser, Debug)]
#[command(name = "seo-audit")]
#[command(version = "1.0.0")]
#[command(about = "A single-page SEO auditor", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Audit a single URL, print the JSON report and exit
    #[arg(long, value_name = "URL", conflicts_with = "dry_run")]
    audit: Option<String>,

    /// Validate config and show the effective settings without serving
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else if let Some(url) = &cli.audit {
        handle_audit(&config, url).await?;
    } else {
        handle_serve(&config).await?;
    }

    Ok(())
}

/// Loads the configuration file if one was given, else the defaults
fn load(cli: &Cli) -> seo_audit::ConfigResult<Config> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            default_config()
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seo_audit=info,warn"),
            1 => EnvFilter::new("seo_audit=debug,info"),
            2 => EnvFilter::new("seo_audit=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== SEO Audit Dry Run ===\n");

    println!("Server:");
    println!(
        "  Listen: {}:{}",
        config.server.bind_address, config.server.port
    );

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nPage Fetch:");
    println!("  Timeout: {}s", config.fetcher.timeout_secs);
    println!("  Retries: {}", config.fetcher.max_retries);
    println!("  Retry delay: {}ms", config.fetcher.retry_delay_ms);

    println!("\nPerformance Insight:");
    println!("  Enabled: {}", config.insight.enabled);
    println!("  Endpoint: {}", config.insight.endpoint);
    println!(
        "  API key: {}",
        if config.insight.api_key.is_some() {
            "configured (hidden)"
        } else {
            "none"
        }
    );
    println!("  Timeout: {}s", config.insight.timeout_secs);
    let strategies: Vec<&str> = config.insight.strategies.iter().map(|s| s.as_str()).collect();
    println!("  Strategies: {}", strategies.join(" → "));

    println!("\nRate Limit:");
    println!(
        "  {} requests per {}s per caller",
        config.rate_limit.max_requests, config.rate_limit.window_secs
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the --audit mode: runs one audit and prints the report
async fn handle_audit(config: &Config, url: &str) -> seo_audit::Result<()> {
    let auditor = Auditor::new(config)?;

    let report = auditor.run_audit(url).await.inspect_err(|e| {
        tracing::error!("Audit failed: {}", e);
    })?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Handles the default mode: serves the audit API
async fn handle_serve(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Insight lookup {} ({} strategies)",
        if config.insight.enabled { "enabled" } else { "disabled" },
        config.insight.strategies.len()
    );

    if let Err(e) = seo_audit::server::start(config).await {
        tracing::error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

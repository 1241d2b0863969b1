//! Seedwalk main entry point
//!
//! This is the command-line interface for the Seedwalk seed sampler.

use anyhow::Context;
use clap::Parser;
use seedwalk::config::{load_config_with_hash, validate, Config};
use seedwalk::crawler::crawl;
use seedwalk::output::{print_statistics, write_seed_list};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Seedwalk: a randomized web seed sampler
///
/// Seedwalk wanders the web from a few seed sites, picking pages at random,
/// and writes every distinct URL it discovers (up to a limit) to a text file,
/// one per line.
#[derive(Parser, Debug)]
#[command(name = "seedwalk")]
#[command(version = "1.0.0")]
#[command(about = "A randomized web seed sampler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write the seed list here instead of the configured path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Override the crawl limit
    #[arg(long)]
    limit: Option<usize>,

    /// Seed the random source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seedwalk=info,warn"),
            1 => EnvFilter::new("seedwalk=debug,info"),
            2 => EnvFilter::new("seedwalk=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(output) = &cli.output {
        config.output.path = output.display().to_string();
    }
    if let Some(limit) = cli.limit {
        config.crawler.crawl_limit = limit;
    }
    if let Some(seed) = cli.seed {
        config.crawler.rng_seed = Some(seed);
    }

    validate(&config).context("invalid command-line override")?;

    Ok(config)
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Seedwalk Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Crawl limit: {}", config.crawler.crawl_limit);
    println!("  Fan-out cap: {}", config.crawler.fan_out_cap);
    println!("  Request timeout: {}ms", config.crawler.request_timeout_ms);
    println!(
        "  Politeness delay: {}-{}ms",
        config.crawler.politeness_min_ms, config.crawler.politeness_max_ms
    );
    match config.crawler.rng_seed {
        Some(seed) => println!("  RNG seed: {}", seed),
        None => println!("  RNG seed: (entropy)"),
    }

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header);

    println!("\nOutput:");
    println!("  Seed list: {}", config.output.path);

    println!("\nSeeds ({}):", config.crawler.seeds.len());
    for seed in &config.crawler.seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation and writes the seed list
async fn handle_crawl(config: &Config, quiet: bool) -> anyhow::Result<()> {
    let output_path = Path::new(&config.output.path);

    // Fail before crawling rather than losing a finished run
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            anyhow::bail!("output directory {} does not exist", parent.display());
        }
    }

    let report = crawl(config).await.context("failed to start crawl")?;

    write_seed_list(output_path, &report.seed_list)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    if !quiet {
        print_statistics(&report.stats);
        println!(
            "\nSaved {} links to {}",
            report.seed_list.len(),
            output_path.display()
        );
    }

    Ok(())
}

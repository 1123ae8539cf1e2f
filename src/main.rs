//! Ladle main entry point
//!
//! Command-line interface for the recipe crawler: load a TOML site list,
//! crawl until the recipe target is met or the sites run dry, then write
//! the JSON cookbook and the markdown license report.

use clap::Parser;
use ladle::config::load_config_with_hash;
use ladle::crawler::MultiCrawler;
use ladle::output::{
    generate_license_report, license_report_path, resolve_output_path, write_cookbook,
};
use ladle::LadleError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ladle: a focused recipe crawler
///
/// Ladle crawls a fixed set of recipe websites, respecting robots.txt,
/// collects schema.org/Recipe records, deduplicates them, and compiles
/// them into a JSON cookbook.
#[derive(Parser, Debug)]
#[command(name = "ladle")]
#[command(version = "0.3.0")]
#[command(about = "A focused recipe crawler", long_about = None)]
struct Cli {
    /// Path to TOML site-list configuration file
    #[arg(short, long, value_name = "CONFIG", default_value = "sites.toml")]
    config: PathBuf,

    /// Limit of number of recipes to collect (overrides the config)
    #[arg(long)]
    limit: Option<usize>,

    /// Only crawl sites whose URL contains this substring
    #[arg(short, long)]
    filter: Option<String>,

    /// Output the cookbook to this JSON file
    #[arg(short, long)]
    output: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading site list from: {}", cli.config.display());
    let mut config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Narrow the site list when a filter was given
    if let Some(filter) = &cli.filter {
        let needle = filter.to_lowercase();
        config.sites.retain(|s| s.url.to_lowercase().contains(&needle));
        tracing::info!(
            "Filtering source list based on '{}' to {} sites",
            filter,
            config.sites.len()
        );
        if config.sites.is_empty() {
            return Err(LadleError::NoSitesSelected.into());
        }
    }

    // Resolve the cookbook path up front so a duplicate filename fails
    // before any network traffic
    let requested = cli
        .output
        .as_deref()
        .or_else(|| (!config.output.cookbook_path.is_empty()).then_some(config.output.cookbook_path.as_str()));
    let cookbook_path = resolve_output_path(requested)?;
    let report_path = license_report_path(&cookbook_path);

    let started_at = chrono::Utc::now();
    let limit = cli.limit.unwrap_or(config.crawler.recipe_limit);
    tracing::info!("Crawling for {} recipes", limit);

    // Build the scheduler and register every site
    let mut multi = MultiCrawler::new(&config)?;
    multi.set_recipe_limit(limit);
    for site in config.sites.clone() {
        multi.register(site).await?;
    }

    // Run to completion
    multi.run().await?;

    // Write the artifacts
    let results = multi.results();
    write_cookbook(&results, &cookbook_path)?;
    generate_license_report(&multi.site_summaries(), &report_path)?;
    tracing::info!(
        "Wrote files '{}' and '{}'",
        cookbook_path.display(),
        report_path.display()
    );

    // Run statistics
    tracing::info!("Recipes collected: {}", results.len());
    tracing::info!("Number of web pages downloaded: {}", multi.fetch_count());
    tracing::info!(
        "Number of bytes downloaded: {:.3} MiB (metric is not accurate)",
        multi.bytes_downloaded() as f64 / (1 << 20) as f64
    );
    let runtime = chrono::Utc::now() - started_at;
    tracing::info!("Program's runtime: {}s", runtime.num_seconds());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ladle=info,warn"),
            1 => EnvFilter::new("ladle=debug,info"),
            2 => EnvFilter::new("ladle=trace,debug"),
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

//! Crawl-Gate main entry point
//!
//! Validates a crawl configuration and probes URLs through the decision engine
//! and content extractor.

use anyhow::Context;
use clap::Parser;
use crawl_gate::config::{load_config_with_hash, Config};
use crawl_gate::crawler::{build_http_client, probe, FrontierScheduler, ProbeReport};
use crawl_gate::{CrawlContext, CrawlDecisionMaker, PageToCrawl, WebContentExtractor};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Crawl-Gate: crawl policy and content decoding core
///
/// Loads a TOML crawl configuration, then runs each probe URL through the
/// crawl, download and link decisions, decoding any body it downloads.
#[derive(Parser, Debug)]
#[command(name = "crawl-gate")]
#[command(version)]
#[command(about = "Crawl policy and content decoding core", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and print the effective policy without probing
    #[arg(long, conflicts_with = "probe")]
    dry_run: bool,

    /// URL to run through the pipeline (repeatable)
    #[arg(long, value_name = "URL")]
    probe: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    if cli.dry_run || cli.probe.is_empty() {
        print_policy(&config);
        return Ok(());
    }

    handle_probe(config, &cli.probe).await?;
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("crawl_gate=info,warn"),
            1 => EnvFilter::new("crawl_gate=debug,info"),
            2 => EnvFilter::new("crawl_gate=trace,debug"),
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

fn print_policy(config: &Config) {
    let crawler = &config.crawler;
    println!("=== Crawl-Gate Policy ===\n");
    println!("  Max auto redirects: {}", crawler.max_auto_redirects);
    println!("  Max crawl depth: {}", crawler.max_crawl_depth);
    println!("  Max pages to crawl: {}", limit(crawler.max_pages_to_crawl));
    println!(
        "  Max pages per domain: {}",
        limit(crawler.max_pages_to_crawl_per_domain)
    );
    println!(
        "  External pages: {}",
        enabled(crawler.external_page_crawling_enabled)
    );
    println!(
        "  External page links: {}",
        enabled(crawler.external_page_links_crawling_enabled)
    );
    println!(
        "  Downloadable content types: {}",
        crawler.downloadable_content_types().join(", ")
    );
    println!("  Max page size: {}", limit(crawler.max_page_size_in_bytes));
    println!("  Max retry count: {}", crawler.max_retry_count);
    println!("  User agent: {}", config.user_agent.header_value());
    println!("\n✓ Configuration is valid");
}

fn limit(value: u64) -> String {
    if value == 0 {
        "unlimited".to_string()
    } else {
        value.to_string()
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}

/// Probes each URL in turn, counting fetched pages against the session budgets
async fn handle_probe(config: Config, urls: &[String]) -> crawl_gate::Result<()> {
    let client = build_http_client(&config)?;
    let seeds = urls
        .iter()
        .map(|url| Url::parse(url).map(PageToCrawl::seed))
        .collect::<Result<Vec<_>, _>>()?;
    let scheduler = Arc::new(FrontierScheduler::with_pages(seeds));
    let mut context = CrawlContext::new(Arc::new(config.crawler.clone()), scheduler.clone());
    let decisions = CrawlDecisionMaker::new();
    let extractor = WebContentExtractor::new();

    while let Some(candidate) = scheduler.next() {
        let report = probe(&client, &context, &decisions, &extractor, candidate, 0).await;
        if report.was_fetched() {
            context.record_crawled(&report.candidate.uri);
        }
        print_report(&report);
    }

    tracing::info!(
        "Probed {} page(s) across {} domain(s)",
        context.crawled_count,
        context.crawl_count_by_domain.len()
    );
    Ok(())
}

fn print_report(report: &ProbeReport) {
    println!("{}", report.candidate.uri);
    println!("  crawl:    {}", report.crawl);
    if let Some(download) = &report.download {
        println!("  download: {}", download);
    }
    if let Some(content) = report.page.as_ref().and_then(|page| page.content()) {
        println!(
            "  content:  {} bytes, charset {}, decoded as {}, {} chars",
            content.bytes.len(),
            content.charset.as_deref().unwrap_or("(none)"),
            content.encoding.name(),
            content.text.chars().count()
        );
    }
    if let Some(links) = &report.crawl_links {
        println!("  links:    {}", links);
    }
    if let Some(recrawl) = &report.recrawl {
        if let Some(failure) = report.page.as_ref().and_then(|p| p.transport_failure.as_ref()) {
            println!("  failure:  {}", failure);
        }
        println!("  retry:    {}", recrawl);
    }
}

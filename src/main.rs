//! gravmap CLI - gravity-index cartography for note vaults
//!
//! This is the command-line entry point. It orchestrates the full
//! pipeline:
//!
//! 1. Vault Discovery: find markdown documents, skipping vault plumbing
//! 2. Link Extraction: parse wiki links, collect per-document failures
//! 3. Graph Building: notes as nodes, deduplicated links as edges
//! 4. PageRank: authority scores via iterative power method
//! 5. Gravity Scoring: percentile-anchored, bonus-weighted components
//! 6. Rendering: markdown report plus colored terminal summary
//!
//! Design philosophy:
//! - Fail fast with clear error messages
//! - Never abort a whole run for one unreadable note
//! - Make defaults sane (report written next to the vault, top 50)

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use owo_colors::Style;

use gravmap::config::Config;
use gravmap::rendering::{colorize, score_style};
use gravmap::{GravityScorer, PageRanker, ReportRenderer, ScoringConfig, VaultScanner};

/// Gravity-index cartography for linked note vaults
///
/// gravmap scans a vault of markdown notes, builds the wiki-link graph,
/// and ranks every connected note by its gravity: a blend of authority,
/// curation, conversation, quality, network position, and integration.
///
/// Examples:
///   gravmap .                          # Analyze the current vault
///   gravmap ~/vault --top 25           # Shorter report
///   gravmap . --stdout --no-color      # Pipe the report elsewhere
#[derive(Parser, Debug)]
#[command(name = "gravmap")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Vault root directory
    #[arg(default_value = ".")]
    pub vault: PathBuf,

    /// Report output path, relative to the vault root
    #[arg(short, long, default_value = "Gravity Index Results.md")]
    pub output: PathBuf,

    /// How many notes the ranked list shows
    #[arg(short, long)]
    pub top: Option<usize>,

    /// PageRank iteration count
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Print the report to stdout instead of writing the file
    #[arg(long)]
    pub stdout: bool,

    /// Show run statistics (notes, links, dangling refs, rank mass, time)
    #[arg(long)]
    pub stats: bool,

    /// Verbose progress messages on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable colored terminal output
    #[arg(long, default_value = "true")]
    pub color: bool,

    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(&cli)
}

/// Execute the full gravmap pipeline.
fn run(cli: &Cli) -> Result<()> {
    let start = std::time::Instant::now();
    let use_color = cli.color && !cli.no_color;

    let vault = cli.vault.canonicalize().map_err(|e| {
        anyhow::anyhow!("Failed to resolve vault path '{}': {}", cli.vault.display(), e)
    })?;

    let mut config = Config::load(&vault);
    if let Some(iterations) = cli.iterations {
        config.iterations = Some(iterations);
    }
    let top_n = cli.top.or(config.top_n).unwrap_or(50);

    if cli.verbose {
        eprintln!("🔍 Scanning vault: {}", vault.display());
        if let Some(source) = &config.source {
            eprintln!("   Config: {}", source.display());
        }
    }

    // Stage 1+2+3: discovery, extraction, graph building
    let outcome = VaultScanner::new(config.clone()).scan(&vault)?;

    if cli.verbose {
        eprintln!("📄 Found {} markdown files", outcome.files_scanned);
        eprintln!("🔗 Found {} unique note references", outcome.graph.note_count());
    }
    for failure in &outcome.failures {
        eprintln!("⚠️  Error reading {}: {}", failure.path.display(), failure.reason);
    }

    // Stage 4: PageRank
    if cli.verbose {
        eprintln!("📊 Computing PageRank...");
    }
    let pagerank = PageRanker::new(config.pagerank_config()).compute(&outcome.graph);

    // Stage 5: gravity scoring
    if cli.verbose {
        eprintln!("📊 Calculating Integration at Scale scores...");
    }
    let scores = GravityScorer::new(ScoringConfig::default()).compute(&outcome.graph, &pagerank);

    // Stage 6: rendering
    let report = ReportRenderer::new(top_n).render(&scores);

    if cli.stdout {
        println!("{}", report);
    } else {
        let output_path = if cli.output.is_absolute() {
            cli.output.clone()
        } else {
            vault.join(&cli.output)
        };
        std::fs::write(&output_path, &report).map_err(|e| {
            anyhow::anyhow!("Failed to write report to {}: {}", output_path.display(), e)
        })?;
        eprintln!("✅ Analysis complete!");
        eprintln!("📄 Results saved to: {}", output_path.display());
    }

    if scores.is_empty() {
        eprintln!("❌ No notes with connections found in this vault");
    } else {
        print_summary(&scores, use_color);
    }

    if cli.stats {
        let rank_mass: f64 = pagerank.values().sum();
        eprintln!();
        eprintln!("📈 Run statistics:");
        eprintln!("   Files scanned:   {}", outcome.files_scanned);
        eprintln!("   Notes (total):   {}", outcome.graph.note_count());
        eprintln!("   Links:           {}", outcome.graph.link_count());
        eprintln!("   Dangling refs:   {}", outcome.graph.dangling_count());
        eprintln!("   Notes scored:    {}", scores.len());
        eprintln!("   Read failures:   {}", outcome.failures.len());
        eprintln!("   PageRank mass:   {:.4}", rank_mass);
        eprintln!("   Elapsed:         {:.1?}", start.elapsed());
    }

    Ok(())
}

/// Colored top-5 summary on stderr.
fn print_summary(scores: &[gravmap::GravityScore], use_color: bool) {
    let Some(top) = scores.first() else {
        return;
    };
    eprintln!(
        "🏆 Top note: {} (Score: {})",
        colorize(&top.note, Style::new().bold(), use_color),
        colorize(&format!("{:.1}", top.total), score_style(top.total), use_color),
    );

    eprintln!("\n🎯 Top 5 Notes:");
    for (i, score) in scores.iter().take(5).enumerate() {
        let rank = format!("{:.1}", score.total);
        eprintln!(
            "  {}. {} [{}]: {}",
            i + 1,
            score.note,
            colorize(score.category.label(), Style::new().dimmed(), use_color),
            colorize(&rank, score_style(score.total), use_color),
        );
    }
}

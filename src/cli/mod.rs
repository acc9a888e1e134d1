//! # CLI Module
//!
//! Command-line interface for the duplicate image scanner.
//!
//! ## Usage
//! ```bash
//! # Scan a directory for likely duplicates
//! dupe-scan scan ~/Photos
//!
//! # With custom threshold
//! dupe-scan scan ~/Photos --threshold 10
//!
//! # Verbose output
//! dupe-scan scan ~/Photos --verbose
//!
//! # JSON output
//! dupe-scan scan ~/Photos --output json
//! ```

use crate::core::matcher::DEFAULT_THRESHOLD;
use crate::core::pipeline::{Pipeline, PipelineResult};
use crate::error::Result;
use crate::events::{Event, EventChannel, FingerprintEvent, PipelineEvent, ScanEvent};
use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::thread;

/// Image Dupe Scan - Find likely duplicate images
#[derive(Parser, Debug)]
#[command(name = "dupe-scan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan directories for likely duplicate images
    Scan {
        /// Directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Maximum edit distance for a match (lower = stricter, 0-1024)
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Include hidden files
        #[arg(long)]
        include_hidden: bool,

        /// Maximum directory depth to descend
        #[arg(long)]
        max_depth: Option<usize>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (tab-separated match lines)
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            paths,
            threshold,
            output,
            include_hidden,
            max_depth,
            verbose,
        } => run_scan(paths, threshold, output, include_hidden, max_depth, verbose),
    }
}

fn run_scan(
    paths: Vec<PathBuf>,
    threshold: usize,
    output: OutputFormat,
    include_hidden: bool,
    max_depth: Option<usize>,
    verbose: bool,
) -> Result<()> {
    let term = Term::stderr();

    if matches!(output, OutputFormat::Pretty) {
        term.write_line(&format!(
            "{} {}",
            style("Image Dupe Scan").bold().cyan(),
            style(concat!("v", env!("CARGO_PKG_VERSION"))).dim()
        ))
        .ok();
        term.write_line("").ok();
    }

    let pipeline = Pipeline::builder()
        .paths(paths)
        .threshold(threshold)
        .include_hidden(include_hidden)
        .max_depth(max_depth)
        .build();

    // Set up event handling
    let (sender, receiver) = EventChannel::new();

    // Progress bar for pretty output
    let progress = if matches!(output, OutputFormat::Pretty) {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("█▓░"),
        );
        Some(pb)
    } else {
        None
    };

    let progress_clone = progress.clone();

    // Handle events in a separate thread
    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Pipeline(PipelineEvent::PhaseChanged { phase }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message(format!("{}", phase));
                    }
                }
                Event::Scan(ScanEvent::Completed { total_files }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_length(total_files as u64);
                    }
                }
                Event::Fingerprint(FingerprintEvent::Progress(p)) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_position(p.completed as u64);
                        if verbose {
                            pb.set_message(
                                p.current_path
                                    .file_name()
                                    .unwrap_or_default()
                                    .to_string_lossy()
                                    .to_string(),
                            );
                        }
                    }
                }
                Event::Pipeline(PipelineEvent::Completed { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.finish_and_clear();
                    }
                }
                _ => {}
            }
        }
    });

    // Run the pipeline
    let result = pipeline.run_with_events(&sender)?;

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();

    match output {
        OutputFormat::Pretty => print_pretty_results(&term, &result, verbose),
        OutputFormat::Json => print_json_results(&result),
        OutputFormat::Minimal => print_minimal_results(&result),
    }

    Ok(())
}

fn print_pretty_results(term: &Term, result: &PipelineResult, verbose: bool) {
    term.write_line("").ok();
    term.write_line(&format!("{} Scan Complete", style("✓").green().bold()))
        .ok();
    term.write_line("").ok();

    // Summary
    term.write_line(&format!(
        "  {} images scanned in {:.1}s",
        style(result.total_files).cyan(),
        result.duration_ms as f64 / 1000.0
    ))
    .ok();

    term.write_line(&format!(
        "  {} likely duplicates found",
        style(result.matches.len()).cyan()
    ))
    .ok();

    term.write_line(&format!(
        "  {} distinct fingerprints",
        style(result.distinct_fingerprints).cyan()
    ))
    .ok();

    if !result.skipped.is_empty() {
        term.write_line(&format!(
            "  {} files skipped",
            style(result.skipped.len()).yellow()
        ))
        .ok();
    }

    term.write_line("").ok();

    if result.matches.is_empty() {
        term.write_line(&format!("  {} No duplicates found!", style("🎉").green()))
            .ok();
    } else {
        term.write_line(&format!("{}", style("Likely Duplicates:").bold().underlined()))
            .ok();
        term.write_line("").ok();

        for m in &result.matches {
            term.write_line(&format!(
                "  {} matches {} {}",
                style(display_path(&m.path)).bold(),
                display_path(&m.original),
                style(format!("(distance {})", m.distance)).dim()
            ))
            .ok();
        }

        term.write_line("").ok();
    }

    if verbose && !result.skipped.is_empty() {
        term.write_line(&format!("{}", style("Skipped:").bold())).ok();
        for skip in &result.skipped {
            term.write_line(&format!(
                "  {} {}",
                style("!").yellow(),
                style(format!("{}: {}", skip.path.display(), skip.reason)).dim()
            ))
            .ok();
        }
        term.write_line("").ok();
    }

    if !result.errors.is_empty() {
        for error in &result.errors {
            term.write_line(&format!("  {} {}", style("!").red(), style(error).dim()))
                .ok();
        }
        term.write_line("").ok();
    }

    // Footer
    term.write_line(&format!(
        "{}",
        style("Remember: No files were deleted. Review carefully before taking action.").dim()
    ))
    .ok();
}

fn print_json_results(result: &PipelineResult) {
    let output = serde_json::json!({
        "total_files": result.total_files,
        "matches_found": result.matches.len(),
        "distinct_fingerprints": result.distinct_fingerprints,
        "files_skipped": result.skipped.len(),
        "duration_ms": result.duration_ms,
        "matches": result.matches,
        "skipped": result.skipped,
        "errors": result.errors,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn print_minimal_results(result: &PipelineResult) {
    for m in &result.matches {
        println!(
            "{}\t{}\t{}",
            m.path.display(),
            m.original.display(),
            m.distance
        );
    }
}

/// Shorten a path to ~/... when it lives under the home directory
fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}

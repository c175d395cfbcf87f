// File: crates/demo/src/main.rs
// Summary: Runs the fixed-path pipeline: trends CSV -> year-by-genre matrix -> line chart PNG.
//          Derives the trends CSV from the raw TMDB export first when needed.

use anyhow::{Context, Result};
use std::path::Path;
use trend_core::{extract, stats, PipelineConfig};

/// Raw TMDB export; only consulted when the trends CSV is absent.
const MOVIES_CSV: &str = "tmdb_5000_movies.csv";
/// Derived per-year genre counts.
const TRENDS_CSV: &str = "genre_popularity_over_time.csv";
/// Rendered chart artifact.
const TRENDS_PNG: &str = "genre_popularity_trends.png";

fn main() -> Result<()> {
    if !Path::new(TRENDS_CSV).exists() && Path::new(MOVIES_CSV).exists() {
        let rows = extract::compute_genre_trends(MOVIES_CSV)
            .with_context(|| format!("failed to extract genre trends from '{MOVIES_CSV}'"))?;

        println!("\nSummary Statistics:");
        print!("{}", stats::format_table(&stats::summarize(&rows)));

        extract::write_trends_csv(&rows, TRENDS_CSV)
            .with_context(|| format!("failed to write '{TRENDS_CSV}'"))?;
        println!("Genre popularity trends written to: {TRENDS_CSV}");
    }

    let config = PipelineConfig::new(TRENDS_CSV, TRENDS_PNG);
    let report = trend_core::run(&config)
        .with_context(|| format!("failed to render '{TRENDS_CSV}' to '{TRENDS_PNG}'"))?;

    println!(
        "Plot saved to {} ({} years, {} genres)",
        report.output_png.display(),
        report.years,
        report.genres
    );
    Ok(())
}

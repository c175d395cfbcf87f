// File: crates/trend-core/src/pipeline.rs
// Summary: The load -> reshape -> render pipeline run once per invocation.

use std::path::PathBuf;

use crate::chart::{Chart, RenderOptions};
use crate::error::TrendResult;
use crate::loader::load_trend_csv;
use crate::matrix::TrendMatrix;
use crate::theme;

/// The two fixed paths of a run, made explicit instead of process-global.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub input_csv: PathBuf,
    pub output_png: PathBuf,
    pub theme_name: String,
}

impl PipelineConfig {
    pub fn new(input_csv: impl Into<PathBuf>, output_png: impl Into<PathBuf>) -> Self {
        Self {
            input_csv: input_csv.into(),
            output_png: output_png.into(),
            theme_name: "light".to_string(),
        }
    }
}

/// What a successful run produced, for the caller's confirmation line.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    pub years: usize,
    pub genres: usize,
    pub output_png: PathBuf,
}

/// Execute the whole pipeline strictly sequentially: load the trends CSV,
/// reshape it into the year-by-genre matrix, render the line chart PNG.
/// Any error aborts immediately; a failed run leaves no output file behind.
pub fn run(config: &PipelineConfig) -> TrendResult<PipelineReport> {
    let rows = load_trend_csv(&config.input_csv)?;
    let matrix = TrendMatrix::from_rows(&rows);
    let chart = Chart::from_matrix(&matrix)?;

    let opts = RenderOptions {
        theme: theme::find(&config.theme_name),
        ..RenderOptions::default()
    };
    chart.render_to_png(&opts, &config.output_png)?;

    Ok(PipelineReport {
        years: matrix.years().len(),
        genres: matrix.genres().len(),
        output_png: config.output_png.clone(),
    })
}

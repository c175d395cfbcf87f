// File: crates/trend-core/src/lib.rs
// Summary: Core library entry point; exports public API for loading, reshaping, and rendering genre trends.

pub mod error;
pub mod loader;
pub mod extract;
pub mod matrix;
pub mod stats;
pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod theme;
pub mod text;
pub mod pipeline;

pub use error::{TrendError, TrendResult};
pub use loader::{load_trend_csv, TrendRow};
pub use matrix::TrendMatrix;
pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::Axis;
pub use theme::Theme;
pub use text::TextShaper;
pub use stats::{summarize, GenreSummary};
pub use pipeline::{run, PipelineConfig, PipelineReport};

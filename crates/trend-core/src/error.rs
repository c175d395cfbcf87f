// File: crates/trend-core/src/error.rs
// Summary: Error taxonomy for the load -> reshape -> render pipeline.

use std::path::PathBuf;

pub type TrendResult<T> = Result<T, TrendError>;

/// Failure classes of the pipeline. Nothing is retried; the first error
/// aborts the run and surfaces to the caller.
#[derive(thiserror::Error, Debug)]
pub enum TrendError {
    #[error("input not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("csv parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("missing required column: {0}")]
    Schema(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TrendError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn schema(column: impl Into<String>) -> Self {
        Self::Schema(column.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(TrendError::not_found("missing.csv")
            .to_string()
            .contains("input not found:"));
        assert!(TrendError::schema("Year")
            .to_string()
            .contains("missing required column: Year"));
        assert!(TrendError::render("x")
            .to_string()
            .contains("render error:"));
    }
}

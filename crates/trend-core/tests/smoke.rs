// File: crates/trend-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use trend_core::{Chart, RenderOptions, TrendMatrix, TrendRow};

fn rows() -> Vec<TrendRow> {
    vec![
        TrendRow { year: 2000, genre: "Drama".into(), count: 5 },
        TrendRow { year: 2000, genre: "Comedy".into(), count: 2 },
        TrendRow { year: 2001, genre: "Drama".into(), count: 3 },
        TrendRow { year: 2002, genre: "Comedy".into(), count: 4 },
    ]
}

#[test]
fn render_smoke_png() {
    let matrix = TrendMatrix::from_rows(&rows());
    let chart = Chart::from_matrix(&matrix).expect("chart from matrix");

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_matrix_is_a_render_error() {
    let matrix = TrendMatrix::from_rows(&[]);
    let err = Chart::from_matrix(&matrix).unwrap_err();
    assert!(matches!(err, trend_core::TrendError::Render(_)));
}

#[test]
fn overwrites_existing_output() {
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("overwrite.png");
    std::fs::write(&out, b"stale").unwrap();

    let matrix = TrendMatrix::from_rows(&rows());
    let chart = Chart::from_matrix(&matrix).unwrap();
    chart.render_to_png(&RenderOptions::default(), &out).unwrap();

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "stale file replaced by PNG");
}

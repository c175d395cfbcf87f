// File: crates/trend-core/src/series.rs
// Summary: Named line series model; one polyline per genre column.

/// One plotted line: a genre name and its (year, count) points in ascending
/// year order. Color is assigned from the theme palette by series position.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), points }
    }

    /// (min, max) over the y values, if the series has any points.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &(_, y) in &self.points {
            min = min.min(y);
            max = max.max(y);
        }
        if min.is_finite() { Some((min, max)) } else { None }
    }

    /// (min, max) over the x values, if the series has any points.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &(x, _) in &self.points {
            min = min.min(x);
            max = max.max(x);
        }
        if min.is_finite() { Some((min, max)) } else { None }
    }
}

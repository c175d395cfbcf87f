// File: crates/trend-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Tick positions for an integer-valued axis (years): at most `max_ticks`
/// evenly strided integers covering [min, max].
pub fn integer_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<i64> {
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    if hi < lo || max_ticks == 0 {
        return Vec::new();
    }
    let span = (hi - lo) as usize + 1;
    let stride = span.div_ceil(max_ticks).max(1) as i64;
    (lo..=hi).step_by(stride as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.0, 10.0, 6);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[5], 10.0);
    }

    #[test]
    fn integer_ticks_cover_range() {
        let t = integer_ticks(1990.0, 1994.0, 10);
        assert_eq!(t, vec![1990, 1991, 1992, 1993, 1994]);
    }

    #[test]
    fn integer_ticks_stride_down_to_budget() {
        let t = integer_ticks(1900.0, 2000.0, 10);
        assert!(t.len() <= 10);
        assert_eq!(t[0], 1900);
    }
}

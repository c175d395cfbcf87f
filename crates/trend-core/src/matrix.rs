// File: crates/trend-core/src/matrix.rs
// Summary: Dense year-by-genre trend matrix built from row observations.

use std::collections::{BTreeMap, BTreeSet};

use crate::loader::TrendRow;

/// Dense grid keyed by (year, genre) -> count.
///
/// Row axis is the distinct years in ascending order; column axis is the
/// distinct genres in alphabetical order, so two runs over the same input
/// always produce the same layout. Cells absent from the input are 0.
/// Duplicate (year, genre) rows are aggregated by sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendMatrix {
    years: Vec<i32>,
    genres: Vec<String>,
    counts: Vec<u64>, // row-major, years.len() * genres.len()
}

impl TrendMatrix {
    pub fn from_rows(rows: &[TrendRow]) -> Self {
        let years: Vec<i32> = rows.iter().map(|r| r.year).collect::<BTreeSet<_>>().into_iter().collect();
        let genres: Vec<String> = rows
            .iter()
            .map(|r| r.genre.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let year_index: BTreeMap<i32, usize> = years.iter().enumerate().map(|(i, &y)| (y, i)).collect();
        let genre_index: BTreeMap<&str, usize> =
            genres.iter().enumerate().map(|(i, g)| (g.as_str(), i)).collect();

        let mut counts = vec![0u64; years.len() * genres.len()];
        for row in rows {
            let yi = year_index[&row.year];
            let gi = genre_index[row.genre.as_str()];
            counts[yi * genres.len() + gi] += row.count;
        }

        Self { years, genres, counts }
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Count for a (year, genre) cell; 0 for combinations absent from the input.
    pub fn count(&self, year: i32, genre: &str) -> u64 {
        let yi = match self.years.binary_search(&year) {
            Ok(i) => i,
            Err(_) => return 0,
        };
        let gi = match self.genres.binary_search_by(|g| g.as_str().cmp(genre)) {
            Ok(i) => i,
            Err(_) => return 0,
        };
        self.counts[yi * self.genres.len() + gi]
    }

    /// (year, count) points for one genre column, in ascending year order.
    pub fn genre_points(&self, genre_idx: usize) -> Vec<(f64, f64)> {
        self.years
            .iter()
            .enumerate()
            .map(|(yi, &year)| (year as f64, self.counts[yi * self.genres.len() + genre_idx] as f64))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() || self.years.is_empty()
    }

    /// Largest cell value across the grid; 0 for an empty matrix.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// (first, last) year of the row axis, if any rows exist.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        match (self.years.first(), self.years.last()) {
            (Some(&a), Some(&b)) => Some((a, b)),
            _ => None,
        }
    }
}

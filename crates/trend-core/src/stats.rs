// File: crates/trend-core/src/stats.rs
// Summary: Per-genre summary statistics over the trend rows.

use std::collections::BTreeMap;

use crate::loader::TrendRow;

/// Aggregate view of one genre across all years.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenreSummary {
    pub genre: String,
    pub total: u64,
    pub first_year: i32,
    pub last_year: i32,
}

/// Totals and active year range per genre, sorted by genre name.
pub fn summarize(rows: &[TrendRow]) -> Vec<GenreSummary> {
    let mut acc: BTreeMap<&str, (u64, i32, i32)> = BTreeMap::new();
    for row in rows {
        let entry = acc.entry(row.genre.as_str()).or_insert((0, row.year, row.year));
        entry.0 += row.count;
        entry.1 = entry.1.min(row.year);
        entry.2 = entry.2.max(row.year);
    }
    acc.into_iter()
        .map(|(genre, (total, first_year, last_year))| GenreSummary {
            genre: genre.to_string(),
            total,
            first_year,
            last_year,
        })
        .collect()
}

/// Fixed-width console table of the summaries.
pub fn format_table(summaries: &[GenreSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:<10} {:<10} {:<10}\n",
        "Genre", "Count", "Start Year", "End Year"
    ));
    out.push_str(&format!("{:-<50}\n", ""));
    for s in summaries {
        out.push_str(&format!(
            "{:<20} {:<10} {:<10} {:<10}\n",
            s.genre, s.total, s.first_year, s.last_year
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, genre: &str, count: u64) -> TrendRow {
        TrendRow { year, genre: genre.to_string(), count }
    }

    #[test]
    fn summaries_aggregate_totals_and_year_range() {
        let rows = vec![
            row(2001, "Drama", 3),
            row(1998, "Drama", 5),
            row(2000, "Comedy", 2),
        ];
        let s = summarize(&rows);
        assert_eq!(
            s,
            vec![
                GenreSummary { genre: "Comedy".into(), total: 2, first_year: 2000, last_year: 2000 },
                GenreSummary { genre: "Drama".into(), total: 8, first_year: 1998, last_year: 2001 },
            ]
        );
    }

    #[test]
    fn table_lists_every_genre() {
        let rows = vec![row(2000, "Action", 1), row(2000, "Drama", 2)];
        let table = format_table(&summarize(&rows));
        assert!(table.contains("Action"));
        assert!(table.contains("Drama"));
        assert!(table.starts_with("Genre"));
    }
}

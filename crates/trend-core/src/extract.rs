// File: crates/trend-core/src/extract.rs
// Summary: Derives per-year genre counts from a raw TMDB movie-metadata CSV.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{TrendError, TrendResult};
use crate::loader::TrendRow;

/// Row of the raw TMDB export. Only the columns the extraction needs; the
/// file carries many more.
#[derive(Debug, Deserialize)]
struct MovieRecord {
    #[allow(dead_code)]
    id: String,
    #[allow(dead_code)]
    title: String,
    genres: String,
    release_date: String,
}

/// Count (year, genre) occurrences across the movie list. Malformed rows are
/// skipped with a warning rather than aborting: the raw export is known to
/// contain broken lines. Output is sorted by (year, genre).
pub fn compute_genre_trends(path: impl AsRef<Path>) -> TrendResult<Vec<TrendRow>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TrendError::not_found(path));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut counts: BTreeMap<(i32, String), u64> = BTreeMap::new();
    for result in reader.deserialize() {
        let movie: MovieRecord = match result {
            Ok(movie) => movie,
            Err(err) => {
                eprintln!("Skipping malformed row: {err}");
                continue;
            }
        };

        let Some(year) = parse_release_year(&movie.release_date) else {
            continue;
        };
        for genre in parse_genres(&movie.genres) {
            *counts.entry((year, genre)).or_insert(0) += 1;
        }
    }

    Ok(counts
        .into_iter()
        .map(|((year, genre), count)| TrendRow { year, genre, count })
        .collect())
}

/// Leading year of a `YYYY-MM-DD` release date; `None` for empty or
/// non-numeric values.
pub fn parse_release_year(release_date: &str) -> Option<i32> {
    if release_date.is_empty() {
        return None;
    }
    release_date.split('-').next()?.parse().ok()
}

/// Genre names out of the TMDB `genres` column, a JSON array of
/// `{"id": .., "name": ..}` objects. Invalid JSON yields an empty list with a
/// warning, matching the row-skipping policy above.
pub fn parse_genres(genres_json: &str) -> Vec<String> {
    let genres: Vec<Value> = match serde_json::from_str(genres_json) {
        Ok(genres) => genres,
        Err(err) => {
            eprintln!("Skipping invalid JSON in genres: {err}");
            return vec![];
        }
    };

    genres
        .iter()
        .filter_map(|entry| entry.get("name").and_then(|name| name.as_str()).map(String::from))
        .collect()
}

/// Write rows as a `Year,Genre,Count` CSV with a header line.
pub fn write_trends_csv(rows: &[TrendRow], path: impl AsRef<Path>) -> TrendResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(["Year", "Genre", "Count"])?;
    for row in rows {
        writer.write_record([row.year.to_string(), row.genre.clone(), row.count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_parsing() {
        assert_eq!(parse_release_year("1995-07-14"), Some(1995));
        assert_eq!(parse_release_year(""), None);
        assert_eq!(parse_release_year("invalid-date"), None);
    }

    #[test]
    fn genre_json_parsing() {
        let genres_json = r#"[{"id": 28, "name": "Action"}, {"id": 12, "name": "Adventure"}]"#;
        assert_eq!(parse_genres(genres_json), vec!["Action", "Adventure"]);
        assert!(parse_genres("invalid-json").is_empty());
    }

    #[test]
    fn trends_from_movie_csv() {
        let dir = std::env::temp_dir().join("trend_core_extract_tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("movies.csv");
        std::fs::write(
            &path,
            concat!(
                "id,title,genres,release_date\n",
                "1,A,\"[{\"\"id\"\": 18, \"\"name\"\": \"\"Drama\"\"}]\",1999-01-01\n",
                "2,B,\"[{\"\"id\"\": 18, \"\"name\"\": \"\"Drama\"\"}, {\"\"id\"\": 35, \"\"name\"\": \"\"Comedy\"\"}]\",1999-06-30\n",
                "3,C,\"[{\"\"id\"\": 35, \"\"name\"\": \"\"Comedy\"\"}]\",2000-12-12\n",
                "4,D,[],\n",
            ),
        )
        .unwrap();

        let rows = compute_genre_trends(&path).unwrap();
        assert_eq!(
            rows,
            vec![
                TrendRow { year: 1999, genre: "Comedy".into(), count: 1 },
                TrendRow { year: 1999, genre: "Drama".into(), count: 2 },
                TrendRow { year: 2000, genre: "Comedy".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn missing_movie_csv_is_not_found() {
        let err = compute_genre_trends("no_such_movies.csv").unwrap_err();
        assert!(matches!(err, TrendError::NotFound { .. }));
    }
}

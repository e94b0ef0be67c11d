//! Conversion from raw provider records to the canonical shape.
//!
//! `normalize` is total: any record, however incomplete, produces a
//! well-formed `CanonicalMovie`. It never performs I/O and never fails,
//! so the browsing layer can treat normalization as a plain map step.

use crate::genre::Genre;
use crate::types::{CanonicalMovie, Poster, RawMovieRecord};

/// Five-point rating assumed when the provider reports none.
const DEFAULT_RATING: f64 = 4.0;

/// The provider's placeholder string for values it does not know.
const NOT_AVAILABLE: &str = "N/A";

/// Convert a raw provider record into the canonical display shape.
///
/// ## Algorithm
/// 1. Bucket the first genre label (Drama when absent or unrecognized)
/// 2. Rescale the ten-point rating to five points, rounded to one
///    decimal; 4.0 when missing or unparseable
/// 3. Keep the poster only when it is a real http(s) URL, otherwise fall
///    back to the genre glyph
/// 4. Fill every remaining gap with its documented default
pub fn normalize(raw: &RawMovieRecord) -> CanonicalMovie {
    let genre = Genre::from_provider_label(raw.genre.as_deref().unwrap_or(""));
    let id = raw.imdb_id.clone().unwrap_or_default();

    CanonicalMovie {
        id: id.clone(),
        title: raw.title.clone().unwrap_or_default(),
        genre,
        rating: normalize_rating(raw.imdb_rating.as_deref()),
        year: raw.year.clone().unwrap_or_default(),
        description: present(raw.plot.as_deref())
            .unwrap_or("No description available.")
            .to_string(),
        poster: normalize_poster(raw.poster.as_deref(), genre),
        duration: present(raw.runtime.as_deref())
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        director: present(raw.director.as_deref())
            .unwrap_or("Unknown")
            .to_string(),
        cast: normalize_cast(raw.actors.as_deref()),
        imdb_id: id,
        imdb_rating: present(raw.imdb_rating.as_deref()).map(str::to_string),
    }
}

/// A provider value filtered down to actual content: `None` for missing,
/// blank, and "N/A" strings alike.
fn present(value: Option<&str>) -> Option<&str> {
    match value {
        Some(s) if !s.trim().is_empty() && s != NOT_AVAILABLE => Some(s),
        _ => None,
    }
}

/// Rescale the provider's ten-point rating string to a five-point value
/// rounded to one decimal. Missing, "N/A", and unparseable ratings all
/// fall back to the default; the result is clamped into [0.0, 5.0] so the
/// invariant holds no matter what the provider sends.
fn normalize_rating(raw: Option<&str>) -> f64 {
    let rating = present(raw)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|ten_point| ten_point / 2.0)
        .unwrap_or(DEFAULT_RATING);

    let rounded = (rating * 10.0).round() / 10.0;
    rounded.clamp(0.0, 5.0)
}

/// Posters are kept only when the provider hands back a real image URL.
/// Anything else falls back to the genre glyph so a card always has
/// artwork to show.
fn normalize_poster(raw: Option<&str>, genre: Genre) -> Poster {
    match present(raw) {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
            Poster::Url(url.to_string())
        }
        _ => Poster::Glyph(genre.glyph()),
    }
}

/// Split the comma-space-separated cast list. A missing or blank list
/// becomes `["Unknown"]`, never an empty vector.
fn normalize_cast(raw: Option<&str>) -> Vec<String> {
    match present(raw) {
        Some(actors) => actors.split(", ").map(str::to_string).collect(),
        None => vec!["Unknown".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> RawMovieRecord {
        RawMovieRecord {
            title: Some("Inception".to_string()),
            genre: Some("Action, Adventure, Sci-Fi".to_string()),
            imdb_rating: Some("8.8".to_string()),
            year: Some("2010".to_string()),
            plot: Some("A thief who steals corporate secrets.".to_string()),
            poster: Some("https://example.com/inception.jpg".to_string()),
            runtime: Some("148 min".to_string()),
            director: Some("Christopher Nolan".to_string()),
            actors: Some("Leonardo DiCaprio, Joseph Gordon-Levitt".to_string()),
            imdb_id: Some("tt1375666".to_string()),
        }
    }

    /// Rebuild a raw record from a canonical movie, the way a cache or a
    /// re-import would hand it back to us.
    fn as_raw(movie: &CanonicalMovie) -> RawMovieRecord {
        RawMovieRecord {
            title: Some(movie.title.clone()),
            genre: Some(movie.genre.to_string()),
            imdb_rating: movie.imdb_rating.clone(),
            year: Some(movie.year.clone()),
            plot: Some(movie.description.clone()),
            poster: match &movie.poster {
                Poster::Url(url) => Some(url.clone()),
                Poster::Glyph(_) => None,
            },
            runtime: Some(movie.duration.clone()),
            director: Some(movie.director.clone()),
            actors: Some(movie.cast.join(", ")),
            imdb_id: Some(movie.id.clone()),
        }
    }

    #[test]
    fn test_full_record_normalizes_every_field() {
        let movie = normalize(&full_record());

        assert_eq!(movie.id, "tt1375666");
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.genre, Genre::Action);
        assert_eq!(movie.rating, 4.4);
        assert_eq!(movie.year, "2010");
        assert_eq!(movie.description, "A thief who steals corporate secrets.");
        assert_eq!(
            movie.poster,
            Poster::Url("https://example.com/inception.jpg".to_string())
        );
        assert_eq!(movie.duration, "148 min");
        assert_eq!(movie.director, "Christopher Nolan");
        assert_eq!(
            movie.cast,
            vec!["Leonardo DiCaprio", "Joseph Gordon-Levitt"]
        );
        assert_eq!(movie.imdb_rating.as_deref(), Some("8.8"));
    }

    #[test]
    fn test_empty_record_gets_every_default() {
        let movie = normalize(&RawMovieRecord::default());

        assert_eq!(movie.genre, Genre::Drama);
        assert_eq!(movie.rating, 4.0);
        assert_eq!(movie.description, "No description available.");
        assert_eq!(movie.poster, Poster::Glyph(Genre::Drama.glyph()));
        assert_eq!(movie.duration, "N/A");
        assert_eq!(movie.director, "Unknown");
        assert_eq!(movie.cast, vec!["Unknown"]);
        assert!(movie.imdb_rating.is_none());
        assert!(movie.imdb_url().is_none());
    }

    #[test]
    fn test_rating_rescales_and_rounds_to_one_decimal() {
        let rate = |s: &str| {
            normalize(&RawMovieRecord {
                imdb_rating: Some(s.to_string()),
                ..RawMovieRecord::default()
            })
            .rating
        };

        assert_eq!(rate("8.8"), 4.4);
        assert_eq!(rate("8.75"), 4.4);
        assert_eq!(rate("10"), 5.0);
        assert_eq!(rate("0"), 0.0);
        assert_eq!(rate("7"), 3.5);
    }

    #[test]
    fn test_rating_sentinel_and_garbage_fall_back_to_default() {
        let rate = |raw: Option<&str>| {
            normalize(&RawMovieRecord {
                imdb_rating: raw.map(str::to_string),
                ..RawMovieRecord::default()
            })
            .rating
        };

        assert_eq!(rate(None), 4.0);
        assert_eq!(rate(Some("N/A")), 4.0);
        assert_eq!(rate(Some("eight")), 4.0);
        assert_eq!(rate(Some("")), 4.0);
        assert_eq!(rate(Some("NaN")), 4.0);
    }

    #[test]
    fn test_rating_out_of_range_values_are_clamped() {
        let rate = |s: &str| {
            normalize(&RawMovieRecord {
                imdb_rating: Some(s.to_string()),
                ..RawMovieRecord::default()
            })
            .rating
        };

        assert_eq!(rate("14.2"), 5.0);
        assert_eq!(rate("-3"), 0.0);
    }

    #[test]
    fn test_poster_sentinel_and_non_urls_become_genre_glyphs() {
        let poster = |raw: Option<&str>, genre: &str| {
            normalize(&RawMovieRecord {
                poster: raw.map(str::to_string),
                genre: Some(genre.to_string()),
                ..RawMovieRecord::default()
            })
            .poster
        };

        assert_eq!(poster(None, "Horror"), Poster::Glyph(Genre::Horror.glyph()));
        assert_eq!(
            poster(Some("N/A"), "Sci-Fi"),
            Poster::Glyph(Genre::SciFi.glyph())
        );
        assert_eq!(
            poster(Some("not a url"), "Comedy"),
            Poster::Glyph(Genre::Comedy.glyph())
        );
        assert_eq!(
            poster(Some("http://example.com/a.jpg"), "Action"),
            Poster::Url("http://example.com/a.jpg".to_string())
        );
    }

    #[test]
    fn test_cast_is_never_empty() {
        let cast = |raw: Option<&str>| {
            normalize(&RawMovieRecord {
                actors: raw.map(str::to_string),
                ..RawMovieRecord::default()
            })
            .cast
        };

        assert_eq!(cast(None), vec!["Unknown"]);
        assert_eq!(cast(Some("")), vec!["Unknown"]);
        assert_eq!(cast(Some("N/A")), vec!["Unknown"]);
        assert_eq!(cast(Some("Solo Lead")), vec!["Solo Lead"]);
        assert_eq!(cast(Some("A, B, C")), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_sentinel_plot_and_director_get_defaults() {
        let movie = normalize(&RawMovieRecord {
            plot: Some("N/A".to_string()),
            director: Some("N/A".to_string()),
            ..RawMovieRecord::default()
        });

        assert_eq!(movie.description, "No description available.");
        assert_eq!(movie.director, "Unknown");
    }

    #[test]
    fn test_normalize_is_a_fixed_point_on_canonical_records() {
        for record in [
            full_record(),
            RawMovieRecord::default(),
            RawMovieRecord {
                genre: Some("Romance".to_string()),
                imdb_rating: Some("N/A".to_string()),
                poster: Some("N/A".to_string()),
                ..full_record()
            },
        ] {
            let once = normalize(&record);
            let twice = normalize(&as_raw(&once));
            assert_eq!(once, twice);
        }
    }
}

//! Core domain types for the movie catalog.
//!
//! Two shapes live here: the raw record as the provider serves it, and the
//! canonical movie every other crate works with. Only `normalize` crosses
//! from one to the other.

use crate::genre::Genre;
use serde::Deserialize;

// =============================================================================
// Raw provider shape
// =============================================================================

/// A movie record exactly as the catalog provider reports it.
///
/// Every field is optional: keyword searches return skeletal summaries,
/// and failure envelopes carry no record at all. The provider also uses
/// the literal string "N/A" for values it does not know, so a present
/// field is not necessarily a useful one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawMovieRecord {
    pub title: Option<String>,
    /// Comma-separated genre labels, e.g. "Action, Adventure, Sci-Fi"
    pub genre: Option<String>,
    /// Ten-point rating as a decimal string, e.g. "8.8"
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    pub year: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    pub runtime: Option<String>,
    pub director: Option<String>,
    /// Comma-space-separated cast list, e.g. "Actor A, Actor B"
    pub actors: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
}

// =============================================================================
// Canonical shape
// =============================================================================

/// Poster artwork for a movie: a real image URL from the provider, or a
/// genre glyph standing in for one. There is no empty case.
#[derive(Debug, Clone, PartialEq)]
pub enum Poster {
    Url(String),
    Glyph(&'static str),
}

/// A movie in the canonical display shape.
///
/// Invariants held by construction (see `normalize`):
/// - `rating` is within [0.0, 5.0], rounded to one decimal
/// - `genre` is one of the five buckets
/// - `poster` always renders to something
/// - `cast` is never empty
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalMovie {
    pub id: String,
    pub title: String,
    pub genre: Genre,
    /// Five-point display rating.
    pub rating: f64,
    pub year: String,
    pub description: String,
    pub poster: Poster,
    pub duration: String,
    pub director: String,
    pub cast: Vec<String>,
    /// Same value as `id`; kept separately because it names an entity in
    /// an external system.
    pub imdb_id: String,
    /// The provider's ten-point rating, verbatim, for display alongside
    /// the rescaled one. `None` when the provider reported nothing.
    pub imdb_rating: Option<String>,
}

impl CanonicalMovie {
    /// Link to the movie's IMDb page, when an identifier is known.
    pub fn imdb_url(&self) -> Option<String> {
        if self.imdb_id.is_empty() {
            None
        } else {
            Some(format!("https://www.imdb.com/title/{}", self.imdb_id))
        }
    }
}

//! Genre buckets and the provider-label mapping.
//!
//! The catalog provider reports genres as free-form comma-separated labels
//! ("Action, Adventure, Sci-Fi"). Browsing works over a closed set of five
//! buckets, so every label has to land somewhere; Drama is the catch-all
//! for anything unrecognized.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph shown when a movie has no usable poster at all.
pub const FALLBACK_GLYPH: &str = "🎬";

/// The five genre buckets movies are browsed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    SciFi,
}

impl Genre {
    /// Every bucket, in display order.
    pub const ALL: [Genre; 5] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::SciFi,
    ];

    /// Map a provider genre label onto a bucket.
    ///
    /// Only the first comma-separated token counts, matched
    /// case-insensitively. Labels with no bucket of their own fold into a
    /// neighbor (Thriller, Adventure, and Crime read as Action; Romance
    /// reads as Drama), and anything unrecognized lands in Drama. The
    /// mapping is total: there is no label this function rejects.
    pub fn from_provider_label(label: &str) -> Genre {
        let primary = label.split(',').next().unwrap_or("").trim();
        match primary.to_lowercase().as_str() {
            "action" | "thriller" | "adventure" | "crime" => Genre::Action,
            "comedy" => Genre::Comedy,
            "horror" => Genre::Horror,
            "sci-fi" | "science fiction" => Genre::SciFi,
            _ => Genre::Drama,
        }
    }

    /// The glyph used as a stand-in poster for this bucket.
    pub fn glyph(&self) -> &'static str {
        match self {
            Genre::Action => "💥",
            Genre::Comedy => "😂",
            Genre::Drama => "🎭",
            Genre::Horror => "👻",
            Genre::SciFi => "🚀",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Genre::Action => "action",
            Genre::Comedy => "comedy",
            Genre::Drama => "drama",
            Genre::Horror => "horror",
            Genre::SciFi => "sci-fi",
        };
        write!(f, "{}", label)
    }
}

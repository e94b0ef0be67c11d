//! Pure genre filtering over the loaded collection.
//!
//! Filtering never touches the catalog: it re-derives the display set
//! from whatever the session has already loaded.

use movie_data::{CanonicalMovie, Genre};
use std::str::FromStr;

/// A genre selection: everything, or one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreFilter {
    All,
    Only(Genre),
}

impl GenreFilter {
    /// Whether a movie belongs in this selection.
    pub fn matches(&self, movie: &CanonicalMovie) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(genre) => movie.genre == *genre,
        }
    }
}

impl FromStr for GenreFilter {
    type Err = String;

    /// Parse the labels used on genre buttons ("all", "action", "sci-fi", ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(GenreFilter::All),
            "action" => Ok(GenreFilter::Only(Genre::Action)),
            "comedy" => Ok(GenreFilter::Only(Genre::Comedy)),
            "drama" => Ok(GenreFilter::Only(Genre::Drama)),
            "horror" => Ok(GenreFilter::Only(Genre::Horror)),
            "sci-fi" => Ok(GenreFilter::Only(Genre::SciFi)),
            other => Err(format!(
                "unknown genre {:?} (expected all, action, comedy, drama, horror, or sci-fi)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_data::{normalize, RawMovieRecord};

    fn movie_with_genre(label: &str) -> CanonicalMovie {
        normalize(&RawMovieRecord {
            title: Some("Test Movie".to_string()),
            genre: Some(label.to_string()),
            ..RawMovieRecord::default()
        })
    }

    #[test]
    fn test_all_matches_every_bucket() {
        for genre in Genre::ALL {
            assert!(GenreFilter::All.matches(&movie_with_genre(&genre.to_string())));
        }
    }

    #[test]
    fn test_only_matches_its_own_bucket() {
        let filter = GenreFilter::Only(Genre::Horror);

        assert!(filter.matches(&movie_with_genre("Horror")));
        assert!(!filter.matches(&movie_with_genre("Comedy")));
    }

    #[test]
    fn test_parses_button_labels() {
        assert_eq!("all".parse::<GenreFilter>(), Ok(GenreFilter::All));
        assert_eq!(
            "sci-fi".parse::<GenreFilter>(),
            Ok(GenreFilter::Only(Genre::SciFi))
        );
        assert_eq!(
            " Horror ".parse::<GenreFilter>(),
            Ok(GenreFilter::Only(Genre::Horror))
        );
        assert!("western".parse::<GenreFilter>().is_err());
    }
}

//! Browse session state and the flows that drive it.
//!
//! A session holds two lists: the full loaded collection and the subset
//! currently on display. Bulk loads rebuild both; searches rewrite only
//! the display set; genre filters re-derive it from the full collection.
//! Every catalog request is awaited before the next is issued, so results
//! always arrive in request order and a failed fetch just shortens the
//! list.

use crate::filter::GenreFilter;
use movie_data::{CanonicalMovie, CatalogSource};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Fixed candidate list for the opening "popular movies" shelf.
pub const POPULAR_TITLES: [&str; 16] = [
    "Inception",
    "The Dark Knight",
    "Interstellar",
    "Pulp Fiction",
    "The Shawshank Redemption",
    "Fight Club",
    "The Matrix",
    "Goodfellas",
    "The Godfather",
    "Forrest Gump",
    "The Avengers",
    "Spider-Man",
    "Iron Man",
    "Batman Begins",
    "Joker",
    "Parasite",
];

/// How many popular titles a bulk load fetches.
pub const BULK_LOAD_CAP: usize = 8;

/// How many keyword matches are re-fetched for full records.
pub const SEARCH_DETAIL_CAP: usize = 8;

/// The movie collection state for one browsing session.
///
/// Both mutating flows take `&mut self`, so a session can never have two
/// fetch sequences in flight; a stale result overwriting a newer one is
/// impossible by construction.
pub struct BrowseSession {
    catalog: Arc<dyn CatalogSource>,
    all_movies: Vec<CanonicalMovie>,
    current_movies: Vec<CanonicalMovie>,
}

impl BrowseSession {
    /// Create an empty session over the given catalog.
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            catalog,
            all_movies: Vec::new(),
            current_movies: Vec::new(),
        }
    }

    /// The full loaded collection.
    pub fn all_movies(&self) -> &[CanonicalMovie] {
        &self.all_movies
    }

    /// The movies currently on display.
    pub fn current_movies(&self) -> &[CanonicalMovie] {
        &self.current_movies
    }

    /// Load the popular shelf: the first `BULK_LOAD_CAP` titles, fetched
    /// one at a time. Titles the catalog cannot serve are skipped, so the
    /// result keeps request order but may come up short of the cap.
    #[instrument(skip(self))]
    pub async fn load_popular(&mut self) -> &[CanonicalMovie] {
        let mut movies = Vec::new();
        for title in POPULAR_TITLES.iter().take(BULK_LOAD_CAP) {
            match self.catalog.movie_by_title(title).await {
                Some(movie) => movies.push(movie),
                None => debug!("skipping {:?}: catalog had no record", title),
            }
        }
        info!("loaded {} of {} popular titles", movies.len(), BULK_LOAD_CAP);

        self.all_movies = movies.clone();
        self.current_movies = movies;
        &self.current_movies
    }

    /// Run the search flow and replace the display set with its outcome.
    ///
    /// ## Algorithm
    /// 1. Blank query: restore the display set from the full collection,
    ///    with no catalog traffic at all
    /// 2. Exact-title lookup first; a hit is the entire result and the
    ///    keyword search never runs
    /// 3. On a miss, one keyword search, then the first
    ///    `SEARCH_DETAIL_CAP` summaries are re-fetched by id in sequence,
    ///    because summaries lack the fields a card needs
    ///
    /// The full collection is never touched by a search.
    #[instrument(skip(self))]
    pub async fn search(&mut self, query: &str) -> &[CanonicalMovie] {
        let query = query.trim();
        if query.is_empty() {
            debug!("blank query, restoring the full collection");
            self.current_movies = self.all_movies.clone();
            return &self.current_movies;
        }

        if let Some(movie) = self.catalog.movie_by_title(query).await {
            info!("exact title hit for {:?}", query);
            self.current_movies = vec![movie];
            return &self.current_movies;
        }

        let summaries = self.catalog.search_by_keyword(query).await;
        info!(
            "keyword search for {:?} matched {} summaries",
            query,
            summaries.len()
        );

        let mut movies = Vec::new();
        for summary in summaries.iter().take(SEARCH_DETAIL_CAP) {
            match self.catalog.movie_by_id(&summary.id).await {
                Some(movie) => movies.push(movie),
                None => debug!("skipping {:?}: detail fetch failed", summary.title),
            }
        }

        self.current_movies = movies;
        &self.current_movies
    }

    /// Re-derive the display set from the full collection by genre.
    ///
    /// Always filters `all_movies`, never the current display set, so
    /// switching buckets never narrows the pool. Order is preserved and
    /// no catalog traffic happens.
    pub fn filter_by_genre(&mut self, filter: GenreFilter) -> &[CanonicalMovie] {
        self.current_movies = self
            .all_movies
            .iter()
            .filter(|movie| filter.matches(movie))
            .cloned()
            .collect();
        debug!(
            "genre filter {:?} kept {} of {} movies",
            filter,
            self.current_movies.len(),
            self.all_movies.len()
        );
        &self.current_movies
    }
}

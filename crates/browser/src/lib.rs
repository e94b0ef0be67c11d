//! # Browser Crate
//!
//! Session state and the fetch flows for browsing the movie catalog.
//!
//! ## Architecture
//! Every flow runs over a `BrowseSession`, which owns two lists:
//! 1. `all_movies` - the full loaded collection
//! 2. `current_movies` - the subset currently on display
//!
//! Bulk loads and searches issue their catalog requests strictly one at a
//! time, so results always land in request order and a single failed
//! lookup only shortens the list. Genre filtering is a pure derivation
//! over the loaded collection and never touches the catalog.
//!
//! ## Example Usage
//! ```ignore
//! use browser::{BrowseSession, GenreFilter};
//! use std::sync::Arc;
//!
//! let mut session = BrowseSession::new(Arc::new(catalog));
//!
//! // Load the popular shelf, then narrow it to one bucket
//! session.load_popular().await;
//! let horror = session.filter_by_genre("horror".parse::<GenreFilter>()?);
//! ```

pub mod filter;
pub mod session;

// Re-export main types
pub use filter::GenreFilter;
pub use session::{BrowseSession, BULK_LOAD_CAP, POPULAR_TITLES, SEARCH_DETAIL_CAP};

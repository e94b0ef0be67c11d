//! # Movie Data Crate
//!
//! Canonical movie model shared by every other crate in the workspace.
//!
//! ## Main Components
//!
//! - **types**: Raw provider records and the canonical movie shape
//! - **genre**: The closed genre bucket set and provider-label mapping
//! - **normalize**: Total conversion from raw records to canonical movies
//! - **catalog**: The `CatalogSource` trait that browsing logic consumes
//!
//! ## Example Usage
//!
//! ```ignore
//! use movie_data::{normalize, RawMovieRecord};
//!
//! let raw: RawMovieRecord = serde_json::from_str(payload)?;
//! let movie = normalize(&raw);
//!
//! println!("{} ({}) rated {:.1}/5", movie.title, movie.year, movie.rating);
//! ```

pub mod catalog;
pub mod genre;
pub mod normalize;
pub mod types;

// Re-export commonly used items for convenience
pub use catalog::CatalogSource;
pub use genre::{FALLBACK_GLYPH, Genre};
pub use normalize::normalize;
pub use types::{CanonicalMovie, Poster, RawMovieRecord};

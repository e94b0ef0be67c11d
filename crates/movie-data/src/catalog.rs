//! The seam between browsing logic and whichever catalog backend serves it.

use crate::types::CanonicalMovie;
use async_trait::async_trait;

/// A movie catalog addressable by exact title, keyword, or IMDb id.
///
/// Implementations own their transport and their failure handling: a
/// lookup that goes wrong for any reason (the catalog has no such movie,
/// the network is down, the payload is malformed) surfaces as the empty
/// outcome. Callers never see an error type and at worst render a
/// shorter list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full record for an exact title. `None` covers both "no
    /// such movie" and any lookup failure. A blank title short-circuits
    /// to `None` without touching the catalog.
    async fn movie_by_title(&self, title: &str) -> Option<CanonicalMovie>;

    /// Free-text keyword search. The returned movies are normalized from
    /// summary records, so their detail fields hold defaults; re-fetch by
    /// id when the full record is needed.
    async fn search_by_keyword(&self, keyword: &str) -> Vec<CanonicalMovie>;

    /// Fetch the full record for an IMDb identifier. Same contract as the
    /// title lookup.
    async fn movie_by_id(&self, id: &str) -> Option<CanonicalMovie>;
}

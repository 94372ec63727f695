//! Named references returned by list endpoints.

use serde::Deserialize;

/// A reference to a catalog resource.
///
/// List endpoints return only references; the full record must be fetched
/// from `url` with a secondary request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    /// Resource name (e.g., "pikachu").
    pub name: String,
    /// Absolute URL of the detail record.
    pub url: String,
}

/// A page of resource references from a list endpoint.
///
/// # Example
///
/// ```ignore
/// let page = client.list_pokemon(0, 5).await?;
///
/// for reference in &page.results {
///     let pokemon = client.pokemon_by_url(&reference.url).await?;
///     println!("{}", pokemon.name);
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePage {
    /// Total number of resources in the catalog.
    pub count: usize,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// The references in this page.
    pub results: Vec<NamedResource>,
}

impl ResourcePage {
    /// Returns `true` if this page has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the number of references in this page.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if there are more pages available.
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

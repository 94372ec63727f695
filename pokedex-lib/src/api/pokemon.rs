//! Pokémon list, exact-match, and detail operations.
//!
//! List endpoints return only references ([`NamedResource`]); turning a page
//! of references into display rows requires one detail fetch per reference.
//! [`PokedexClient::resolve_rows`] performs those fetches concurrently and
//! joins them all-or-nothing: a single failing detail fetch fails the whole
//! page load.

use futures::future::try_join_all;
use url::Url;

use crate::PokedexClient;
use crate::error::{ApiError, Error};
use crate::model::{NamedResource, Pokemon, ResourcePage, Row};

impl PokedexClient {
    /// Fetches a page of Pokémon references.
    ///
    /// Corresponds to `GET /pokemon?offset=&limit=`.
    pub async fn list_pokemon(&self, offset: usize, limit: usize) -> Result<ResourcePage, Error> {
        let url = self
            .inner()
            .endpoint(&format!("pokemon?offset={offset}&limit={limit}"));
        self.inner().get_json(&url).await
    }

    /// Fetches a single Pokémon by exact name.
    ///
    /// The name is trimmed and lowercased before the lookup, so searches are
    /// case-insensitive. A 404 from the catalog maps to [`Error::NotFound`].
    pub async fn pokemon_by_name(&self, name: &str) -> Result<Pokemon, Error> {
        let normalized = name.trim().to_lowercase();
        let url = self
            .inner()
            .endpoint(&format!("pokemon/{}", urlencoding::encode(&normalized)));

        match self.inner().get_json(&url).await {
            Err(Error::Api(ApiError::Http { status: 404, .. })) => Err(Error::not_found(normalized)),
            other => other,
        }
    }

    /// Fetches a full Pokémon record from a detail URL.
    ///
    /// The URL comes from a list response and is validated before the fetch.
    pub async fn pokemon_by_url(&self, url: &str) -> Result<Pokemon, Error> {
        Url::parse(url).map_err(|_| ApiError::InvalidUrl(url.to_string()))?;
        self.inner().get_json(url).await
    }

    /// Resolves a batch of references into display rows.
    ///
    /// All detail fetches run concurrently; the batch is complete only when
    /// every fetch has succeeded. The first failure fails the whole batch.
    pub async fn resolve_rows(&self, refs: &[NamedResource]) -> Result<Vec<Row>, Error> {
        let details = try_join_all(refs.iter().map(|r| self.pokemon_by_url(&r.url))).await?;
        Ok(details.into_iter().map(Row::from).collect())
    }
}

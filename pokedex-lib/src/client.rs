//! Catalog clients

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Error};

/// Default base URL of the creature catalog.
pub const POKEDEX_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default base URL of the character catalog.
pub const CHARACTER_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// The client for the creature catalog API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks safely.
///
/// # Example
///
/// ```ignore
/// use pokedex_lib::PokedexClient;
///
/// let client = PokedexClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build();
///
/// let page = client.list_pokemon(0, 5).await?;
/// ```
#[derive(Clone)]
pub struct PokedexClient {
    inner: Arc<ClientInner>,
}

/// The client for the character catalog API.
///
/// Used only to populate selection controls; exposes the character list
/// endpoint.
#[derive(Clone)]
pub struct CharacterClient {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl PokedexClient {
    /// Creates a client against the public creature catalog.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new builder for constructing a client.
    pub fn builder() -> ClientBuilder<PokedexClient> {
        ClientBuilder::new(POKEDEX_BASE_URL)
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }
}

impl Default for PokedexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterClient {
    /// Creates a client against the public character catalog.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new builder for constructing a client.
    pub fn builder() -> ClientBuilder<CharacterClient> {
        ClientBuilder::new(CHARACTER_BASE_URL)
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn inner(&self) -> &ClientInner {
        &self.inner
    }
}

impl Default for CharacterClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientInner {
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Makes a GET request and maps non-success statuses to [`ApiError`].
    ///
    /// This is the low-level request method used by all API operations.
    pub(crate) async fn get(&self, url: &str) -> Result<reqwest::Response, Error> {
        let mut request = self.http_client.get(url).headers(Self::default_headers());

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api(ApiError::http(status.as_u16(), body)))
        }
    }

    /// Makes a GET request and deserializes the JSON response body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let response = self.get(url).await?;
        let body = response.text().await.map_err(ApiError::from)?;

        serde_json::from_str(&body)
            .map_err(|e| Error::Api(ApiError::parse_with_body(e.to_string(), body)))
    }

    /// Joins a path onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing a catalog client.
///
/// All fields have defaults; overriding the base URL is primarily useful
/// for pointing the client at a test server.
///
/// # Example
///
/// ```ignore
/// let client = PokedexClient::builder()
///     .base_url(mock_server.uri())
///     .timeout(Duration::from_secs(5))
///     .build();
/// ```
pub struct ClientBuilder<C> {
    base_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
    _marker: std::marker::PhantomData<C>,
}

impl<C> ClientBuilder<C> {
    fn new(default_base_url: &str) -> Self {
        Self {
            base_url: default_base_url.to_string(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
            _marker: std::marker::PhantomData,
        }
    }

    /// Sets the base URL of the catalog.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    fn build_inner(self) -> Arc<ClientInner> {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        Arc::new(ClientInner {
            base_url: self.base_url,
            http_client,
            timeout: self.timeout,
        })
    }
}

impl ClientBuilder<PokedexClient> {
    /// Builds the [`PokedexClient`].
    pub fn build(self) -> PokedexClient {
        PokedexClient {
            inner: self.build_inner(),
        }
    }
}

impl ClientBuilder<CharacterClient> {
    /// Builds the [`CharacterClient`].
    pub fn build(self) -> CharacterClient {
        CharacterClient {
            inner: self.build_inner(),
        }
    }
}

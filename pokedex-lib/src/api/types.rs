//! Type catalog operations.

use crate::PokedexClient;
use crate::error::{ApiError, Error};
use crate::model::{ResourcePage, TypeDetail};

impl PokedexClient {
    /// Fetches the list of Pokémon types.
    ///
    /// Corresponds to `GET /type`. Used to populate type-filter controls.
    pub async fn list_types(&self) -> Result<ResourcePage, Error> {
        let url = self.inner().endpoint("type");
        self.inner().get_json(&url).await
    }

    /// Fetches a type record with its member Pokémon.
    ///
    /// Corresponds to `GET /type/<name>`. A 404 maps to [`Error::NotFound`].
    pub async fn type_detail(&self, name: &str) -> Result<TypeDetail, Error> {
        let normalized = name.trim().to_lowercase();
        let url = self
            .inner()
            .endpoint(&format!("type/{}", urlencoding::encode(&normalized)));

        match self.inner().get_json(&url).await {
            Err(Error::Api(ApiError::Http { status: 404, .. })) => Err(Error::not_found(normalized)),
            other => other,
        }
    }
}

//! Character catalog operations.

use crate::CharacterClient;
use crate::error::Error;
use crate::model::{Character, CharacterPage};

impl CharacterClient {
    /// Fetches the first page of characters.
    ///
    /// Corresponds to `GET /character`. The character catalog is paginated,
    /// but selection controls only need the first page of results.
    pub async fn list_characters(&self) -> Result<Vec<Character>, Error> {
        let url = self.inner().endpoint("character");
        let page: CharacterPage = self.inner().get_json(&url).await?;
        Ok(page.results)
    }
}

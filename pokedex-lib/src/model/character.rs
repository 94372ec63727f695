//! Character records from the character catalog.

use serde::Deserialize;

/// A character from the character catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    /// Numeric catalog id.
    pub id: u64,
    /// Character name.
    pub name: String,
}

/// A page of characters from the character list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPage {
    /// Pagination metadata.
    pub info: CharacterPageInfo,
    /// The characters in this page.
    pub results: Vec<Character>,
}

/// Pagination metadata of a [`CharacterPage`].
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPageInfo {
    /// Total number of characters.
    pub count: usize,
    /// Total number of pages.
    pub pages: usize,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub prev: Option<String>,
}

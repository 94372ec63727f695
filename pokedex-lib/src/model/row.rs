//! Flattened display rows.

use super::Pokemon;

/// A flat display record derived from one [`Pokemon`].
///
/// Rows are rebuilt on every fetch and never persisted. Multi-valued types
/// are joined into a single display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Pokémon name; identifies the row for selection purposes.
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Comma-joined type names (e.g., "grass, poison").
    pub types: String,
}

impl From<Pokemon> for Row {
    fn from(pokemon: Pokemon) -> Self {
        let types = pokemon
            .type_names()
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: pokemon.name,
            height: pokemon.height,
            weight: pokemon.weight,
            types,
        }
    }
}

//! Pokémon detail records.

use serde::Deserialize;

use super::NamedResource;

/// A full Pokémon record from the detail endpoint.
///
/// Only the attributes this library consumes are modelled; the API returns
/// many more fields, which serde ignores.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    /// Numeric catalog id.
    pub id: u32,
    /// Pokémon name.
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Type memberships, in slot order.
    pub types: Vec<TypeSlot>,
}

impl Pokemon {
    /// Returns the type names in slot order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.kind.name.as_str())
    }
}

/// A single type membership of a Pokémon.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    /// Slot number (primary type is slot 1).
    pub slot: u32,
    /// The type this slot refers to.
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A type record from the type endpoint, listing its member Pokémon.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDetail {
    /// Type name (e.g., "electric").
    pub name: String,
    /// Pokémon belonging to this type.
    pub pokemon: Vec<TypeMember>,
}

/// One member entry of a [`TypeDetail`].
#[derive(Debug, Clone, Deserialize)]
pub struct TypeMember {
    /// Reference to the member Pokémon.
    pub pokemon: NamedResource,
    /// The slot this type occupies on the member.
    pub slot: u32,
}

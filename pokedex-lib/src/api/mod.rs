//! Catalog API operations

mod character;
mod pokemon;
mod types;

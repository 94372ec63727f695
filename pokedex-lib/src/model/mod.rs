//! Typed models

mod character;
mod pokemon;
mod resource;
mod row;

pub use character::*;
pub use pokemon::*;
pub use resource::*;
pub use row::*;

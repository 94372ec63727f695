//! Form validation.
//!
//! A small accumulator API for validating form fields against a fixed rule
//! set.
//!
//! # Example
//!
//! ```ignore
//! use pokedex_widgets::validation::{Validator, rules};
//!
//! let result = Validator::new()
//!     .check("email", rules::required(&email, "Email is required"))
//!     .check("email", rules::email(&email, "Invalid email"))
//!     .check("password", rules::min_length(&password, 6, "Password too short"))
//!     .validate();
//!
//! if result.is_valid() {
//!     // Proceed with form submission
//! }
//! ```

pub mod rules;

mod result;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use validator::Validator;

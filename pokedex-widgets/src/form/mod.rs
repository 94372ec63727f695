//! Login form widget.
//!
//! [`LoginForm`] collects an email, a password, and one or more character
//! selections, and gates submission on a fixed rule set. Validation never
//! reaches the network: every rule is evaluated client-side on each submit
//! attempt, and a field's message is cleared as soon as the field validates
//! on a later attempt. A successful submit emits a [`LoginSubmission`]
//! mirroring the entered values, ready for an external submission
//! collaborator.
//!
//! The character dropdown is populated from the character catalog via
//! [`LoginForm::load_characters`].

use std::sync::{Arc, RwLock};

use log::warn;

use pokedex_lib::CharacterClient;
use pokedex_lib::model::Character;

use crate::selection::Selection;
use crate::validation::{FieldError, ValidationResult, Validator, rules};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// The values emitted by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSubmission {
    /// Entered email address.
    pub email: String,
    /// Entered password.
    pub password: String,
    /// Chosen character names, in selection order.
    pub characters: Vec<String>,
}

/// Internal state for the login form widget.
#[derive(Debug, Default)]
struct LoginFormInner {
    email: String,
    password: String,
    /// Chosen characters; a single-select control keeps at most one.
    characters: Selection<String>,
    /// Options for the character control.
    options: Vec<Character>,
    /// True while the character list is loading.
    loading: bool,
    /// Error string when the character list failed to load.
    load_error: Option<String>,
    /// Field messages from the last submit attempt.
    errors: Vec<FieldError>,
}

/// A login form with client-side validation.
///
/// Cheap to clone; a clone can be moved into the task loading the
/// character options while the original keeps serving input.
///
/// # Example
///
/// ```ignore
/// let form = LoginForm::new(CharacterClient::new());
/// form.load_characters().await;
///
/// form.set_email("rick@citadel.dev");
/// form.set_password("wubbalubba");
/// form.select_character("Rick Sanchez");
///
/// match form.submit() {
///     Ok(submission) => send_to_auth(submission),
///     Err(errors) => display(errors),
/// }
/// ```
#[derive(Clone)]
pub struct LoginForm {
    client: CharacterClient,
    inner: Arc<RwLock<LoginFormInner>>,
}

impl LoginForm {
    /// Creates a login form backed by the given character catalog client.
    pub fn new(client: CharacterClient) -> Self {
        Self {
            client,
            inner: Arc::new(RwLock::new(LoginFormInner::default())),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// The entered email.
    pub fn email(&self) -> String {
        self.inner
            .read()
            .map(|inner| inner.email.clone())
            .unwrap_or_default()
    }

    /// The entered password.
    pub fn password(&self) -> String {
        self.inner
            .read()
            .map(|inner| inner.password.clone())
            .unwrap_or_default()
    }

    /// The chosen character names, in selection order.
    pub fn characters(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.characters.as_slice().to_vec())
            .unwrap_or_default()
    }

    /// The options for the character control.
    pub fn options(&self) -> Vec<Character> {
        self.inner
            .read()
            .map(|inner| inner.options.clone())
            .unwrap_or_default()
    }

    /// True while the character list is loading.
    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|inner| inner.loading).unwrap_or(false)
    }

    /// Error string when the character list failed to load.
    pub fn load_error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|inner| inner.load_error.clone())
            .unwrap_or(None)
    }

    /// The validation message currently attached to a field, if any.
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| {
                inner
                    .errors
                    .iter()
                    .find(|e| e.field == field)
                    .map(|e| e.message.clone())
            })
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Sets the email field.
    pub fn set_email(&self, email: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.email = email.into();
        }
    }

    /// Sets the password field.
    pub fn set_password(&self, password: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.password = password.into();
        }
    }

    /// Chooses a single character, replacing any previous choice.
    pub fn select_character(&self, name: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.characters.select_exactly([name.into()]);
        }
    }

    /// Toggles one character in the multi-select variant.
    pub fn toggle_character(&self, name: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.characters.toggle(name.into());
        }
    }

    /// Clears all chosen characters.
    pub fn clear_characters(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.characters.clear();
        }
    }

    // -------------------------------------------------------------------------
    // Character options
    // -------------------------------------------------------------------------

    /// Populates the character control from the catalog.
    ///
    /// A load failure surfaces a generic error string in the form's error
    /// slot; the form itself keeps working.
    pub async fn load_characters(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.loading = true;
        }

        let outcome = self.client.list_characters().await;

        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        inner.loading = false;
        match outcome {
            Ok(characters) => {
                inner.options = characters;
                inner.load_error = None;
            }
            Err(err) => {
                warn!("character list fetch failed: {err}");
                inner.load_error = Some("Failed to load characters".to_string());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Evaluates every rule against the current field values.
    ///
    /// Gates submission: any violation blocks it and attaches a message to
    /// the offending field, replacing whatever the previous attempt left
    /// there. On success the assembled values are returned for an external
    /// submission collaborator.
    pub fn submit(&self) -> Result<LoginSubmission, Vec<FieldError>> {
        let (email, password, characters) = match self.inner.read() {
            Ok(inner) => (
                inner.email.clone(),
                inner.password.clone(),
                inner.characters.as_slice().to_vec(),
            ),
            Err(_) => return Err(Vec::new()),
        };

        let result = Validator::new()
            .check("email", rules::required(&email, "Email is required"))
            .check("email", rules::email(&email, "Invalid email"))
            .check("password", rules::required(&password, "Password is required"))
            .check(
                "password",
                rules::min_length(
                    &password,
                    MIN_PASSWORD_LENGTH,
                    "Password must be at least 6 characters",
                ),
            )
            .check("character", rules::non_empty(&characters, "Select a character"))
            .validate();

        match result {
            ValidationResult::Valid => {
                if let Ok(mut inner) = self.inner.write() {
                    inner.errors.clear();
                }
                Ok(LoginSubmission {
                    email,
                    password,
                    characters,
                })
            }
            ValidationResult::Invalid(errors) => {
                if let Ok(mut inner) = self.inner.write() {
                    inner.errors = errors.clone();
                }
                Err(errors)
            }
        }
    }
}

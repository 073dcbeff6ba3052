use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_.]*$").unwrap());

fn validate_username(username: &str) -> Result<(), ValidationError> {
    // Empty names are reported by the length check
    if username.is_empty() || USERNAME_RE.is_match(username) {
        return Ok(());
    }

    Err(ValidationError::new("username")
        .with_message("Usernames must have only letters, numbers, dots or underscores".into()))
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, Clone)]
#[serde(default)]
pub struct RegisterForm {
    #[validate(
        length(min = 1, max = 64, message = "Email must be between 1 and 64 characters."),
        email(message = "Invalid email address.")
    )]
    pub email: String,
    #[validate(
        length(min = 1, max = 64, message = "Username must be between 1 and 64 characters."),
        custom(function = "validate_username")
    )]
    pub username: String,
    #[validate(
        length(min = 1, message = "Password is required."),
        must_match(other = "password2", message = "Passwords must match")
    )]
    pub password: String,
    pub password2: String,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Default, Deserialize, Serialize, Validate, Clone)]
#[serde(default)]
pub struct LoginForm {
    #[validate(
        length(min = 1, max = 64, message = "Email must be between 1 and 64 characters."),
        email(message = "Invalid email address.")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
    pub remember_me: Option<String>,
    /// Page to return to after logging in.
    pub next: Option<String>,
}

impl LoginForm {
    /// Checkboxes are only submitted when ticked.
    pub fn remember(&self) -> bool {
        self.remember_me.is_some()
    }
}

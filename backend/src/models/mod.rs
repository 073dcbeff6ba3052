use validator::ValidationErrors;

pub mod context;
pub mod evaluation;
pub mod login;
pub mod recipe_book;
pub mod register;
pub mod search;
pub mod session_user;
pub mod token_claims;

/// Flatten validation errors into user facing messages, ordered by field name.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for {field}."),
            })
        })
        .collect()
}

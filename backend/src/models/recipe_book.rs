use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

#[derive(Debug, Default, Validate, Clone)]
pub struct CreateRecipeBookForm {
    #[validate(length(min = 1, message = "Please enter a name for the recipe book."))]
    pub name: String,
    pub recipe_picks: Vec<i32>,
}

impl CreateRecipeBookForm {
    /// Build the form from decoded body pairs, `recipe_picks` may repeat.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ValidationErrors> {
        let mut form = CreateRecipeBookForm::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value.trim().to_string(),
                "recipe_picks" => match value.parse::<i32>() {
                    Ok(id) if !form.recipe_picks.contains(&id) => form.recipe_picks.push(id),
                    Ok(_) => (),
                    Err(_err) => {
                        let mut errors = ValidationErrors::new();
                        errors.add(
                            "recipe_picks",
                            ValidationError::new("recipe_picks")
                                .with_message("Not a valid choice".into()),
                        );
                        return Err(errors);
                    }
                },
                _ => (),
            }
        }

        Ok(form)
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, Clone)]
#[serde(default)]
pub struct RenameRecipeBookForm {
    #[validate(length(min = 1, message = "Please enter a new name for the recipe book."))]
    pub new_book_name: String,
}

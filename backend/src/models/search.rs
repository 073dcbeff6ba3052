use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::recipe_api::SearchQuery;

pub const DIET_CHOICES: [&str; 4] = ["balanced", "high-protein", "low-fat", "low-carb"];
pub const HEALTH_CHOICES: [&str; 6] = [
    "vegan",
    "vegetarian",
    "sugar-conscious",
    "peanut-free",
    "tree-nut-free",
    "alcohol-free",
];

/// One radio button of a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub checked: bool,
}

pub fn choices(options: &[&'static str], selected: &str) -> Vec<Choice> {
    options
        .iter()
        .map(|&value| Choice {
            value,
            checked: value == selected,
        })
        .collect()
}

fn validate_search_term(search: &str) -> Result<(), ValidationError> {
    if !search.is_empty() && search.chars().all(char::is_alphabetic) {
        return Ok(());
    }

    Err(ValidationError::new("search")
        .with_message("Please enter a search term only containing letters.".into()))
}

fn validate_calories(calories: &str) -> Result<(), ValidationError> {
    if calories.contains('-') {
        return Ok(());
    }

    Err(ValidationError::new("calories")
        .with_message("Please enter a range for calories in the format of min-max.".into()))
}

fn validate_diet(diet: &str) -> Result<(), ValidationError> {
    if DIET_CHOICES.iter().any(|choice| *choice == diet) {
        return Ok(());
    }

    Err(ValidationError::new("diet").with_message("Please select one dietary restriction.".into()))
}

fn validate_health(health: &str) -> Result<(), ValidationError> {
    if HEALTH_CHOICES.iter().any(|choice| *choice == health) {
        return Ok(());
    }

    Err(ValidationError::new("health").with_message("Please select one health restriction.".into()))
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, Clone)]
#[serde(default)]
pub struct SearchForm {
    #[validate(custom(function = "validate_search_term"))]
    pub search: String,
    #[validate(custom(function = "validate_diet"))]
    pub diet: String,
    #[validate(custom(function = "validate_health"))]
    pub health: String,
    #[validate(custom(function = "validate_calories"))]
    pub calories: String,
}

impl SearchForm {
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            search: self.search.clone(),
            diet: self.diet.clone(),
            health: self.health.clone(),
            calories: self.calories.clone(),
        }
    }
}

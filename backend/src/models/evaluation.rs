use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const EVALUATION_CHOICES: [&str; 2] = ["Yes", "No"];

fn validate_evaluation(evaluation: &str) -> Result<(), ValidationError> {
    if EVALUATION_CHOICES.iter().any(|choice| *choice == evaluation) {
        return Ok(());
    }

    Err(ValidationError::new("evaluation").with_message("Please answer Yes or No.".into()))
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, Clone)]
#[serde(default)]
pub struct EvaluationForm {
    #[validate(custom(function = "validate_evaluation"))]
    pub evaluation: String,
    #[validate(length(min = 1, message = "Please briefly explain your answer."))]
    pub explaination: String,
    pub name: String,
    pub email: String,
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl EvaluationForm {
    pub fn positive_experience(&self) -> bool {
        self.evaluation == "Yes"
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    /// Nothing was submitted at all.
    pub fn is_blank(&self) -> bool {
        self.evaluation.is_empty()
            && self.explaination.is_empty()
            && self.name.is_empty()
            && self.email.is_empty()
    }
}

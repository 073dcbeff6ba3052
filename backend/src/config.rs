use anyhow::Context;

use crate::recipe_api::{RecipeApiConfig, DEFAULT_API_URL};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8081";

/// Everything the server needs from the environment. `DATABASE_URL` is read by
/// `db_connector` itself.
#[derive(Debug, Clone)]
pub struct Settings {
    pub jwt_secret: String,
    pub bind_address: String,
    pub log_file: Option<String>,
    pub static_files_dir: Option<String>,
    pub recipe_api: RecipeApiConfig,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| lookup(key).with_context(|| format!("{key} must be set"));

        Ok(Self {
            jwt_secret: required("JWT_SECRET")?,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            log_file: lookup("LOG_FILE"),
            static_files_dir: lookup("STATIC_FILES_DIR"),
            recipe_api: RecipeApiConfig {
                url: lookup("RECIPE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                app_id: required("RECIPE_APP_ID")?,
                app_key: required("RECIPE_APP_KEY")?,
            },
        })
    }
}

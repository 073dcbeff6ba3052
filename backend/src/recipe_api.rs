/* recipe-books
 * Copyright (C) 2025 Frederic Henrichs <frederic@tinkerforge.com>
 *
 * This library is free software; you can redistribute it and/or
 * modify it under the terms of the GNU Lesser General Public
 * License as published by the Free Software Foundation; either
 * version 2 of the License, or (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
 * Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public
 * License along with this library; if not, write to the
 * Free Software Foundation, Inc., 59 Temple Place - Suite 330,
 * Boston, MA 02111-1307, USA.
 */

use futures_util::future::BoxFuture;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://api.edamam.com/search";

/// The api is asked for this many hits and never more are kept.
pub const MAX_RESULTS: usize = 5;

#[derive(Debug, Clone)]
pub struct RecipeApiConfig {
    pub url: String,
    pub app_id: String,
    pub app_key: String,
}

/// A distinct recipe query as entered in the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: String,
    pub diet: String,
    pub health: String,
    pub calories: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeHit {
    pub name: String,
    pub health_labels: Vec<String>,
    pub ingredient_lines: Vec<String>,
    pub image: String,
    pub url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

#[derive(Deserialize)]
struct Hit {
    recipe: ApiRecipe,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiRecipe {
    label: String,
    health_labels: Vec<String>,
    ingredient_lines: Vec<String>,
    image: String,
    url: String,
}

impl From<ApiRecipe> for RecipeHit {
    fn from(value: ApiRecipe) -> Self {
        RecipeHit {
            name: value.label,
            health_labels: value.health_labels,
            ingredient_lines: value.ingredient_lines,
            image: value.image,
            url: value.url,
        }
    }
}

/// Results are keyed by recipe name: a later hit with a name that was already
/// seen replaces the earlier one but keeps its position.
fn normalize_hits(hits: Vec<Hit>) -> Vec<RecipeHit> {
    let mut result: Vec<RecipeHit> = Vec::with_capacity(MAX_RESULTS);
    for hit in hits {
        let hit = RecipeHit::from(hit.recipe);
        match result.iter_mut().find(|r| r.name == hit.name) {
            Some(existing) => *existing = hit,
            None => result.push(hit),
        }
    }
    result.truncate(MAX_RESULTS);

    result
}

pub trait RecipeLookup: Send + Sync {
    /// Query the catalog once. Failures are not retried.
    fn search<'a>(&'a self, query: &'a SearchQuery) -> BoxFuture<'a, anyhow::Result<Vec<RecipeHit>>>;
}

pub struct EdamamClient {
    client: reqwest::Client,
    config: RecipeApiConfig,
}

impl EdamamClient {
    pub fn new(config: RecipeApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn query_params<'a>(&'a self, query: &'a SearchQuery) -> [(&'static str, &'a str); 7] {
        [
            ("app_id", self.config.app_id.as_str()),
            ("app_key", self.config.app_key.as_str()),
            ("q", query.search.as_str()),
            ("diet", query.diet.as_str()),
            ("health", query.health.as_str()),
            ("calories", query.calories.as_str()),
            ("to", "5"),
        ]
    }
}

impl RecipeLookup for EdamamClient {
    fn search<'a>(&'a self, query: &'a SearchQuery) -> BoxFuture<'a, anyhow::Result<Vec<RecipeHit>>> {
        Box::pin(async move {
            let response = self
                .client
                .get(&self.config.url)
                .query(&self.query_params(query))
                .send()
                .await?
                .error_for_status()?;
            let body: SearchResponse = response.json().await?;
            let hits = normalize_hits(body.hits);
            log::debug!("Recipe api returned {} hits for '{}'", hits.len(), query.search);

            Ok(hits)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_hit(label: &str, url: &str) -> serde_json::Value {
        serde_json::json!({
            "recipe": {
                "label": label,
                "healthLabels": ["Vegan", "Peanut-Free"],
                "ingredientLines": ["1 cup rice", "2 cups water"],
                "image": format!("https://img.test/{label}.jpg"),
                "url": url,
                "calories": 412.5
            }
        })
    }

    fn parse(body: serde_json::Value) -> Vec<RecipeHit> {
        let response: SearchResponse = serde_json::from_value(body).unwrap();
        normalize_hits(response.hits)
    }

    fn query() -> SearchQuery {
        SearchQuery {
            search: "chicken".to_string(),
            diet: "balanced".to_string(),
            health: "vegan".to_string(),
            calories: "300-500".to_string(),
        }
    }

    #[test]
    fn test_parse_hits() {
        let hits = parse(serde_json::json!({
            "q": "rice",
            "count": 2,
            "hits": [api_hit("Rice", "https://r.test/1"), api_hit("Pilaf", "https://r.test/2")]
        }));

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Rice");
        assert_eq!(hits[0].health_labels, vec!["Vegan", "Peanut-Free"]);
        assert_eq!(hits[0].ingredient_lines, vec!["1 cup rice", "2 cups water"]);
        assert_eq!(hits[0].image, "https://img.test/Rice.jpg");
        assert_eq!(hits[1].url, "https://r.test/2");
    }

    #[test]
    fn test_duplicate_names_replace_in_place() {
        let hits = parse(serde_json::json!({
            "hits": [
                api_hit("Rice", "https://r.test/1"),
                api_hit("Pilaf", "https://r.test/2"),
                api_hit("Rice", "https://r.test/3"),
            ]
        }));

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Rice");
        assert_eq!(hits[0].url, "https://r.test/3");
        assert_eq!(hits[1].name, "Pilaf");
    }

    #[test]
    fn test_at_most_five_results() {
        let many: Vec<_> = (0..8)
            .map(|i| api_hit(&format!("Dish{i}"), &format!("https://r.test/{i}")))
            .collect();
        let hits = parse(serde_json::json!({ "hits": many }));

        assert_eq!(hits.len(), MAX_RESULTS);
        assert_eq!(hits[4].name, "Dish4");
    }

    #[test]
    fn test_malformed_response() {
        let response: Result<SearchResponse, _> =
            serde_json::from_value(serde_json::json!({ "hits": [{ "recipe": { "label": "Rice" } }] }));
        assert!(response.is_err());
    }

    #[test]
    fn test_query_params() {
        let client = EdamamClient::new(RecipeApiConfig {
            url: DEFAULT_API_URL.to_string(),
            app_id: "the-id".to_string(),
            app_key: "the-key".to_string(),
        });
        let query = query();
        let params = client.query_params(&query);

        assert_eq!(
            params,
            [
                ("app_id", "the-id"),
                ("app_key", "the-key"),
                ("q", "chicken"),
                ("diet", "balanced"),
                ("health", "vegan"),
                ("calories", "300-500"),
                ("to", "5"),
            ]
        );
    }

    #[actix_web::test]
    async fn test_unreachable_api_is_an_error() {
        let client = EdamamClient::new(RecipeApiConfig {
            url: "http://127.0.0.1:9/search".to_string(),
            app_id: "id".to_string(),
            app_key: "key".to_string(),
        });

        assert!(client.search(&query()).await.is_err());
    }
}

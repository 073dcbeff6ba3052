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


use actix_web::{get, post, web, HttpResponse};
use askama::Template;
use db_connector::models::recipes::Recipe;
use validator::Validate;

use crate::{
    error::Error,
    flash::Flash,
    models::{
        error_messages,
        search::{choices, Choice, SearchForm, DIET_CHOICES, HEALTH_CHOICES},
    },
    recipe_api::SearchQuery,
    store::recipes::record_search,
    utils::{get_connection, render, render_flashed, web_block_unpacked},
    AppState,
};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    flash: Option<String>,
    errors: Vec<String>,
    form: &'a SearchForm,
    diets: Vec<Choice>,
    healths: Vec<Choice>,
}

impl<'a> IndexPage<'a> {
    fn new(flash: Option<String>, errors: Vec<String>, form: &'a SearchForm) -> Self {
        Self {
            flash,
            errors,
            form,
            diets: choices(&DIET_CHOICES, &form.diet),
            healths: choices(&HEALTH_CHOICES, &form.health),
        }
    }
}

#[derive(Template)]
#[template(path = "search_results.html")]
struct SearchResultsPage<'a> {
    flash: Option<String>,
    query: &'a SearchQuery,
    recipes: &'a [Recipe],
}

#[get("/")]
pub async fn index(flash: Flash) -> actix_web::Result<HttpResponse> {
    let form = SearchForm::default();
    render_flashed(&IndexPage::new(flash.message(), Vec::new(), &form), &flash)
}

/// Query the recipe api and store the search with its results before showing them.
#[post("/")]
pub async fn search(
    state: web::Data<AppState>,
    form: web::Form<SearchForm>,
) -> actix_web::Result<HttpResponse> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return render(&IndexPage::new(None, error_messages(&errors), &form));
    }

    let query = form.query();
    let hits = match state.recipe_api.search(&query).await {
        Ok(hits) => hits,
        Err(err) => {
            log::error!("Recipe search for '{}' failed: {err:#}", query.search);
            return Err(Error::RecipeApi.into());
        }
    };

    // No pooled connection is held while the api is queried
    let mut conn = get_connection(&state)?;
    let outcome = {
        let query = query.clone();
        web_block_unpacked(move || record_search(&mut conn, &query, &hits)).await?
    };
    log::debug!(
        "Search {} returned {} recipes, {} new",
        outcome.search.id,
        outcome.recipes.len(),
        outcome.recipes_created
    );

    render(&SearchResultsPage {
        flash: None,
        query: &query,
        recipes: &outcome.recipes,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use db_connector::schema::{recipe_searches, recipes, search_recipes};
    use diesel::prelude::*;

    use super::*;
    use crate::{
        routes,
        tests::{call_service, configure as test_configure, create_test_state, test_hit, StaticLookup},
    };

    fn chicken_form() -> SearchForm {
        SearchForm {
            search: "chicken".to_string(),
            diet: "balanced".to_string(),
            health: "vegan".to_string(),
            calories: "300-500".to_string(),
        }
    }

    fn row_counts(state: &web::Data<AppState>) -> (i64, i64, i64) {
        let mut conn = state.pool.get().unwrap();
        (
            recipe_searches::table.count().get_result(&mut conn).unwrap(),
            recipes::table.count().get_result(&mut conn).unwrap(),
            search_recipes::table.count().get_result(&mut conn).unwrap(),
        )
    }

    #[actix_web::test]
    async fn test_index_page() {
        let state = create_test_state(None);
        let app = App::new()
            .configure(test_configure(state))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("high-protein"));
        assert!(body.contains("tree-nut-free"));
    }

    #[actix_web::test]
    async fn test_search_stores_results() {
        let lookup = Arc::new(StaticLookup::new(vec![
            test_hit("Curry"),
            test_hit("Soup"),
            test_hit("Stew"),
        ]));
        let state = create_test_state(Some(lookup.clone()));
        let app = App::new()
            .configure(test_configure(state.clone()))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_form(chicken_form())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Curry"));
        assert!(body.contains("Stew"));
        assert_eq!(row_counts(&state), (1, 3, 3));

        // The api is asked again, nothing new is stored
        let req = test::TestRequest::post()
            .uri("/")
            .set_form(chicken_form())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(row_counts(&state), (1, 3, 3));
        assert_eq!(lookup.calls(), 2);
    }

    #[actix_web::test]
    async fn test_invalid_search() {
        let lookup = Arc::new(StaticLookup::new(vec![test_hit("Curry")]));
        let state = create_test_state(Some(lookup.clone()));
        let app = App::new()
            .configure(test_configure(state.clone()))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let form = SearchForm {
            search: "chicken soup".to_string(),
            calories: "500".to_string(),
            ..chicken_form()
        };
        let req = test::TestRequest::post().uri("/").set_form(form).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Please enter a search term only containing letters."));
        assert!(body.contains("Please enter a range for calories in the format of min-max."));
        assert_eq!(lookup.calls(), 0);
        assert_eq!(row_counts(&state), (0, 0, 0));
    }

    #[actix_web::test]
    async fn test_failing_api() {
        let state = create_test_state(Some(Arc::new(StaticLookup::failing())));
        let app = App::new()
            .configure(test_configure(state.clone()))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/")
            .set_form(chicken_form())
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("Something went wrong"));
        assert_eq!(row_counts(&state), (0, 0, 0));
    }
}

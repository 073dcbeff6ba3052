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


use actix_web::{http::StatusCode, test, web, App};
use db_connector::{
    models::{recipe_books::RecipeBook, recipes::Recipe},
    schema::recipe_book_recipes,
};
use diesel::prelude::*;

use crate::{
    routes::{self, auth::tests::TestUser},
    store::{books::find_book, recipes::get_or_create_recipe},
    tests::{configure as test_configure, test_hit},
    AppState,
};

/// Helper function to put recipes into the database
pub fn seed_recipes(state: &web::Data<AppState>, names: &[&str]) -> Vec<Recipe> {
    let mut conn = state.pool.get().unwrap();
    names
        .iter()
        .map(|name| get_or_create_recipe(&mut conn, &test_hit(name)).unwrap())
        .collect()
}

/// Helper function to create a recipe book through the http interface
pub async fn create_test_book(
    state: &web::Data<AppState>,
    user: &mut TestUser,
    name: &str,
    recipes: &[Recipe],
) -> RecipeBook {
    let app = App::new()
        .configure(test_configure(state.clone()))
        .configure(routes::configure);
    let app = test::init_service(app).await;

    let mut pairs = vec![("name".to_string(), name.to_string())];
    pairs.extend(
        recipes
            .iter()
            .map(|recipe| ("recipe_picks".to_string(), recipe.id.to_string())),
    );
    let body = serde_urlencoded::to_string(&pairs).unwrap();

    let req = test::TestRequest::post()
        .uri("/create_recipe_book")
        .cookie(user.cookie().await)
        .insert_header(actix_web::http::header::ContentType::form_url_encoded())
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER, "Failed to create recipe book");

    get_book_from_db(state, user.get().id, name).unwrap()
}

/// Helper function to get a book from the database
pub fn get_book_from_db(state: &web::Data<AppState>, owner_id: i32, name: &str) -> Option<RecipeBook> {
    let mut conn = state.pool.get().unwrap();
    find_book(&mut conn, owner_id, name).unwrap()
}

/// Helper function to count the recipes of a book
pub fn count_book_members(state: &web::Data<AppState>, book_id: i32) -> i64 {
    let mut conn = state.pool.get().unwrap();

    recipe_book_recipes::table
        .filter(recipe_book_recipes::book_id.eq(book_id))
        .count()
        .get_result(&mut conn)
        .unwrap()
}

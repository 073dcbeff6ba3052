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


use actix_web::{web, HttpResponse};
use askama::Template;
use db_connector::models::recipes::Recipe;
use validator::Validate;

use crate::{
    flash::Flash,
    models::{context::RequestContext, error_messages, recipe_book::CreateRecipeBookForm},
    store::{
        books::get_or_create_recipe_book,
        recipes::{all_recipes, recipes_by_ids},
    },
    utils::{parse_form_pairs, redirect, render, render_flashed, web_block_unpacked},
};

/// A recipe offered in the pick list.
pub struct RecipeOption {
    pub id: i32,
    pub name: String,
    pub checked: bool,
}

fn options(recipes: Vec<Recipe>, picked: &[i32]) -> Vec<RecipeOption> {
    recipes
        .into_iter()
        .map(|recipe| RecipeOption {
            checked: picked.contains(&recipe.id),
            id: recipe.id,
            name: recipe.name,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "create_recipe_book.html")]
struct CreateRecipeBookPage<'a> {
    flash: Option<String>,
    errors: Vec<String>,
    name: &'a str,
    recipes: Vec<RecipeOption>,
}

pub async fn create_page(ctx: RequestContext, flash: Flash) -> actix_web::Result<HttpResponse> {
    ctx.require_user()?;
    let (mut conn, _) = ctx.into_parts();
    let recipes = web_block_unpacked(move || all_recipes(&mut conn)).await?;

    render_flashed(
        &CreateRecipeBookPage {
            flash: flash.message(),
            errors: Vec::new(),
            name: "",
            recipes: options(recipes, &[]),
        },
        &flash,
    )
}

/// Create a book of the logged in user from the picked recipes. A book that
/// already exists under this name is left untouched.
pub async fn create_recipe_book(ctx: RequestContext, body: web::Bytes) -> actix_web::Result<HttpResponse> {
    let user = ctx.require_user()?.clone();
    let (mut conn, _) = ctx.into_parts();

    let pairs = parse_form_pairs(&body)?;
    let submitted_name = pairs
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.clone())
        .unwrap_or_default();

    let form = CreateRecipeBookForm::from_pairs(pairs).and_then(|form| {
        form.validate()?;
        Ok(form)
    });
    let form = match form {
        Ok(form) => form,
        Err(errors) => {
            let recipes = web_block_unpacked(move || all_recipes(&mut conn)).await?;
            return render(&CreateRecipeBookPage {
                flash: None,
                errors: error_messages(&errors),
                name: &submitted_name,
                recipes: options(recipes, &[]),
            });
        }
    };

    web_block_unpacked(move || {
        let recipes = recipes_by_ids(&mut conn, &form.recipe_picks)?;
        get_or_create_recipe_book(&mut conn, &form.name, &user.username, &recipes)
    })
    .await?;

    Ok(redirect("/recipe_books"))
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::{header, StatusCode},
        test, App,
    };

    use crate::{
        routes::{self, auth::tests::TestUser, recipe_book::test_helpers::*},
        tests::{call_service, configure as test_configure, create_test_state},
    };

    #[actix_web::test]
    async fn test_create_recipe_book() {
        let state = create_test_state(None);
        let (mut user, _) = TestUser::random(&state).await;
        let recipes = seed_recipes(&state, &["Curry", "Soup", "Stew"]);

        let book = create_test_book(&state, &mut user, "Dinner", &recipes[..2]).await;

        assert_eq!(book.name, "Dinner");
        assert_eq!(book.user_id, user.get().id);
        assert_eq!(count_book_members(&state, book.id), 2);
    }

    #[actix_web::test]
    async fn test_existing_book_keeps_its_recipes() {
        let state = create_test_state(None);
        let (mut user, _) = TestUser::random(&state).await;
        let recipes = seed_recipes(&state, &["Curry", "Soup", "Stew"]);

        let first = create_test_book(&state, &mut user, "Dinner", &recipes[..1]).await;
        let second = create_test_book(&state, &mut user, "Dinner", &recipes).await;

        assert_eq!(first, second);
        assert_eq!(count_book_members(&state, first.id), 1);
    }

    #[actix_web::test]
    async fn test_create_page_lists_recipes() {
        let state = create_test_state(None);
        let (mut user, _) = TestUser::random(&state).await;
        seed_recipes(&state, &["Curry"]);
        let app = App::new()
            .configure(test_configure(state))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get()
            .uri("/create_recipe_book")
            .cookie(user.cookie().await)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("Curry"));
    }

    #[actix_web::test]
    async fn test_login_required() {
        let state = create_test_state(None);
        let app = App::new()
            .configure(test_configure(state))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get().uri("/create_recipe_book").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/login?next=%2Fcreate_recipe_book"
        );
    }

    #[actix_web::test]
    async fn test_name_required() {
        let state = create_test_state(None);
        let (mut user, _) = TestUser::random(&state).await;
        let recipes = seed_recipes(&state, &["Curry"]);
        let app = App::new()
            .configure(test_configure(state.clone()))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/create_recipe_book")
            .cookie(user.cookie().await)
            .insert_header(header::ContentType::form_url_encoded())
            .set_payload(format!("name=&recipe_picks={}", recipes[0].id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("Please enter a name for the recipe book."));
        assert!(get_book_from_db(&state, user.get().id, "").is_none());
    }
}

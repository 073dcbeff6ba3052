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

use crate::{
    error::Error,
    models::context::RequestContext,
    store::books::delete_book,
    utils::{redirect_with_flash, web_block_unpacked},
};

/// Delete one of the logged in user's books, the recipes in it are kept.
pub async fn delete(ctx: RequestContext, path: web::Path<String>) -> actix_web::Result<HttpResponse> {
    let owner_id = ctx.require_user()?.id;
    let book_name = path.into_inner();
    let (mut conn, _) = ctx.into_parts();

    let name = book_name.clone();
    let deleted = web_block_unpacked(move || delete_book(&mut conn, owner_id, &name)).await?;
    if !deleted {
        return Err(Error::NotFound.into());
    }

    Ok(redirect_with_flash(
        "/recipe_books",
        &format!("Deleted list {book_name}"),
    ))
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::{header, StatusCode},
        test, App,
    };

    use crate::{
        flash::read_flash,
        routes::{self, auth::tests::TestUser, recipe_book::test_helpers::*},
        tests::{call_service, configure as test_configure, create_test_state},
    };

    #[actix_web::test]
    async fn test_delete_book() {
        let state = create_test_state(None);
        let (mut user, _) = TestUser::random(&state).await;
        let recipes = seed_recipes(&state, &["Curry", "Soup"]);
        let book = create_test_book(&state, &mut user, "Dinner", &recipes).await;
        assert_eq!(count_book_members(&state, book.id), 2);

        let app = App::new()
            .configure(test_configure(state.clone()))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post()
            .uri("/delete/Dinner")
            .cookie(user.cookie().await)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/recipe_books");
        assert_eq!(read_flash(&resp).as_deref(), Some("Deleted list Dinner"));

        assert!(get_book_from_db(&state, user.get().id, "Dinner").is_none());
        assert_eq!(count_book_members(&state, book.id), 0);

        // The recipes are still listed
        let req = test::TestRequest::get().uri("/all_recipes").to_request();
        let resp = test::call_service(&app, req).await;
        let body = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Curry"));
        assert!(body.contains("Soup"));
    }

    #[actix_web::test]
    async fn test_foreign_book_cannot_be_deleted() {
        let state = create_test_state(None);
        let (mut alice, _) = TestUser::random(&state).await;
        let (mut bob, _) = TestUser::random(&state).await;
        create_test_book(&state, &mut alice, "Dinner", &[]).await;
        let app = App::new()
            .configure(test_configure(state.clone()))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get()
            .uri("/delete/Dinner")
            .cookie(bob.cookie().await)
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(get_book_from_db(&state, alice.get().id, "Dinner").is_some());
    }

    #[actix_web::test]
    async fn test_delete_requires_login() {
        let state = create_test_state(None);
        let app = App::new()
            .configure(test_configure(state))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::post().uri("/delete/Dinner").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/login?next=%2Fdelete%2FDinner"
        );
    }

    #[actix_web::test]
    async fn test_delete_book_with_slash_in_name() {
        let state = create_test_state(None);
        let (mut user, _) = TestUser::random(&state).await;
        create_test_book(&state, &mut user, "Lunch/Dinner", &[]).await;
        let app = App::new()
            .configure(test_configure(state.clone()))
            .configure(routes::configure);
        let app = test::init_service(app).await;

        let req = test::TestRequest::get()
            .uri("/recipe_books")
            .cookie(user.cookie().await)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("/delete/Lunch%2FDinner"));

        let req = test::TestRequest::post()
            .uri("/delete/Lunch%2FDinner")
            .cookie(user.cookie().await)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert!(get_book_from_db(&state, user.get().id, "Lunch/Dinner").is_none());
    }
}

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
use db_connector::models::{recipe_books::RecipeBook, recipes::Recipe};

use crate::{
    error::Error,
    flash::Flash,
    models::context::RequestContext,
    store::books::{book_with_recipes, books_for_user},
    utils::{render_flashed, web_block_unpacked},
};

#[derive(Template)]
#[template(path = "recipe_books.html")]
struct RecipeBooksPage {
    flash: Option<String>,
    books: Vec<RecipeBook>,
}

#[derive(Template)]
#[template(path = "recipe_book.html")]
struct RecipeBookPage {
    flash: Option<String>,
    book: RecipeBook,
    recipes: Vec<Recipe>,
}

pub async fn recipe_books(ctx: RequestContext, flash: Flash) -> actix_web::Result<HttpResponse> {
    let owner_id = ctx.require_user()?.id;
    let (mut conn, _) = ctx.into_parts();
    let books = web_block_unpacked(move || books_for_user(&mut conn, owner_id)).await?;

    render_flashed(
        &RecipeBooksPage {
            flash: flash.message(),
            books,
        },
        &flash,
    )
}

pub async fn recipe_book(
    ctx: RequestContext,
    flash: Flash,
    path: web::Path<i32>,
) -> actix_web::Result<HttpResponse> {
    let owner_id = ctx.require_user()?.id;
    let book_id = path.into_inner();
    let (mut conn, _) = ctx.into_parts();

    let Some((book, recipes)) =
        web_block_unpacked(move || book_with_recipes(&mut conn, book_id, owner_id)).await?
    else {
        return Err(Error::NotFound.into());
    };

    render_flashed(
        &RecipeBookPage {
            flash: flash.message(),
            book,
            recipes,
        },
        &flash,
    )
}

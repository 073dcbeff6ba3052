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
use validator::Validate;

use crate::{
    error::Error,
    flash::Flash,
    models::{context::RequestContext, error_messages, recipe_book::RenameRecipeBookForm},
    store::books::{find_book, rename_book, RenameOutcome},
    utils::{redirect_with_flash, render, render_flashed, web_block_unpacked},
};

#[derive(Template)]
#[template(path = "update_name.html")]
struct UpdateNamePage<'a> {
    flash: Option<String>,
    errors: Vec<String>,
    book_name: &'a str,
}

pub async fn update_page(
    ctx: RequestContext,
    flash: Flash,
    path: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let owner_id = ctx.require_user()?.id;
    let book_name = path.into_inner();
    let (mut conn, _) = ctx.into_parts();

    let name = book_name.clone();
    if web_block_unpacked(move || find_book(&mut conn, owner_id, &name))
        .await?
        .is_none()
    {
        return Err(Error::NotFound.into());
    }

    render_flashed(
        &UpdateNamePage {
            flash: flash.message(),
            errors: Vec::new(),
            book_name: &book_name,
        },
        &flash,
    )
}

/// Rename one of the logged in user's books.
pub async fn update(
    ctx: RequestContext,
    path: web::Path<String>,
    form: web::Form<RenameRecipeBookForm>,
) -> actix_web::Result<HttpResponse> {
    let owner_id = ctx.require_user()?.id;
    let book_name = path.into_inner();
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return render(&UpdateNamePage {
            flash: None,
            errors: error_messages(&errors),
            book_name: &book_name,
        });
    }

    let (mut conn, _) = ctx.into_parts();
    let old_name = book_name.clone();
    let new_name = form.new_book_name.clone();
    let outcome =
        web_block_unpacked(move || rename_book(&mut conn, owner_id, &old_name, &new_name)).await?;

    match outcome {
        RenameOutcome::Renamed(_) => Ok(redirect_with_flash(
            "/recipe_books",
            &format!("Updated name of {book_name}"),
        )),
        RenameOutcome::NameTaken => render(&UpdateNamePage {
            flash: Some(format!(
                "There already is a recipe book named {}.",
                form.new_book_name
            )),
            errors: Vec::new(),
            book_name: &book_name,
        }),
        RenameOutcome::NotFound => Err(Error::NotFound.into()),
    }
}

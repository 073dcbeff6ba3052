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
use validator::Validate;

use crate::{
    error::Error,
    flash::Flash,
    models::{context::RequestContext, error_messages, register::RegisterForm},
    store::users::create_user,
    utils::{redirect_with_flash, render, render_flashed},
    AppState,
};

const ALREADY_IN_USE: &str =
    "That email and/or username is already in use. Please use a different email and/or username.";

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterPage<'a> {
    flash: Option<String>,
    errors: Vec<String>,
    form: &'a RegisterForm,
}

#[get("/register")]
pub async fn register_page(flash: Flash) -> actix_web::Result<HttpResponse> {
    let form = RegisterForm::default();
    render_flashed(
        &RegisterPage {
            flash: flash.message(),
            errors: Vec::new(),
            form: &form,
        },
        &flash,
    )
}

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    ctx: RequestContext,
    form: web::Form<RegisterForm>,
) -> actix_web::Result<HttpResponse> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return render(&RegisterPage {
            flash: None,
            errors: error_messages(&errors),
            form: &form,
        });
    }

    let password_hash = state.hasher.hash_password(form.password.clone()).await?;

    let (mut conn, _) = ctx.into_parts();
    let username = form.username.clone();
    let email = form.email.clone();
    let result = web::block(move || create_user(&mut conn, &username, &email, &password_hash)).await;

    match result {
        Ok(Ok(_user)) => Ok(redirect_with_flash("/login", "You can now log in!")),
        Ok(Err(Error::UserAlreadyExists)) => render(&RegisterPage {
            flash: Some(ALREADY_IN_USE.to_string()),
            errors: Vec::new(),
            form: &form,
        }),
        Ok(Err(err)) => Err(err.into()),
        Err(_err) => Err(Error::InternalError.into()),
    }
}

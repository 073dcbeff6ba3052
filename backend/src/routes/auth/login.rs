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


use actix_web::{get, http::header, post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;
use validator::Validate;

use crate::{
    flash::Flash,
    middleware::jwt::{access_cookie, create_token},
    models::{context::RequestContext, error_messages, login::LoginForm},
    store::users::find_user_by_email,
    utils::{render, render_flashed, safe_next, web_block_unpacked},
    AppState,
};

const INVALID_LOGIN: &str = "Invalid username or password.";

#[derive(Template)]
#[template(path = "login.html")]
struct LoginPage<'a> {
    flash: Option<String>,
    errors: Vec<String>,
    email: &'a str,
    next: Option<&'a str>,
}

#[derive(Deserialize)]
pub struct NextQuery {
    next: Option<String>,
}

#[get("/login")]
pub async fn login_page(flash: Flash, query: web::Query<NextQuery>) -> actix_web::Result<HttpResponse> {
    render_flashed(
        &LoginPage {
            flash: flash.message(),
            errors: Vec::new(),
            email: "",
            next: query.next.as_deref(),
        },
        &flash,
    )
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    ctx: RequestContext,
    form: web::Form<LoginForm>,
) -> actix_web::Result<HttpResponse> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return render(&LoginPage {
            flash: None,
            errors: error_messages(&errors),
            email: &form.email,
            next: form.next.as_deref(),
        });
    }

    let (mut conn, _) = ctx.into_parts();
    let email = form.email.clone();
    let user = web_block_unpacked(move || find_user_by_email(&mut conn, &email)).await?;

    let verified = match &user {
        Some(user) => {
            state
                .hasher
                .verify_password(user.password_hash.clone(), form.password.clone())
                .await?
        }
        None => false,
    };
    let Some(user) = user.filter(|_| verified) else {
        log::warn!("Rejected login for '{}'", form.email);
        return render(&LoginPage {
            flash: Some(INVALID_LOGIN.to_string()),
            errors: Vec::new(),
            email: &form.email,
            next: form.next.as_deref(),
        });
    };

    let remember_me = form.remember();
    let token = create_token(&state.jwt_secret, &user, remember_me)?;
    log::debug!("User {} logged in", user.id);

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, safe_next(form.next.as_deref())))
        .cookie(access_cookie(token, remember_me))
        .finish())
}

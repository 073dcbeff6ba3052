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

use actix_web::{
    http::header::{self, ContentType},
    web, HttpResponse,
};
use askama::Template;
use db_connector::PooledConnection;

use crate::{
    error::Error,
    flash::{self, Flash},
    AppState,
};

pub fn get_connection(state: &web::Data<AppState>) -> actix_web::Result<PooledConnection> {
    match state.pool.get() {
        Ok(conn) => Ok(conn),
        Err(err) => {
            log::error!("Failed to get a database connection: {err}");
            Err(Error::InternalError.into())
        }
    }
}

pub async fn web_block_unpacked<F, R>(f: F) -> Result<R, actix_web::Error>
where
    F: FnOnce() -> Result<R, Error> + Send + 'static,
    R: Send + 'static,
{
    match web::block(f).await {
        Ok(res) => match res {
            Ok(v) => Ok(v),
            Err(err) => Err(err.into()),
        },
        Err(_err) => Err(Error::InternalError.into()),
    }
}

/// Render a page template into a `200 OK` html response.
pub fn render<T: Template>(template: &T) -> actix_web::Result<HttpResponse> {
    match template.render() {
        Ok(body) => Ok(HttpResponse::Ok()
            .insert_header(ContentType::html())
            .body(body)),
        Err(err) => {
            log::error!("Failed to render template: {err}");
            Err(Error::InternalError.into())
        }
    }
}

/// Render a page that shows the pending flash message, which is consumed by it.
pub fn render_flashed<T: Template>(template: &T, flash: &Flash) -> actix_web::Result<HttpResponse> {
    let mut resp = render(template)?;
    flash.clear(&mut resp);

    Ok(resp)
}

/// `303 See Other`, so a form POST is followed by a GET.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn redirect_with_flash(location: &str, message: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .cookie(flash::cookie(message))
        .finish()
}

/// Only local absolute paths are accepted as redirect targets after login.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(next) if next.starts_with('/') && !next.starts_with("//") => next,
        _ => "/",
    }
}

/// Decode an urlencoded body keeping repeated keys, e.g. multi selects.
pub fn parse_form_pairs(body: &[u8]) -> actix_web::Result<Vec<(String, String)>> {
    match serde_urlencoded::from_bytes(body) {
        Ok(pairs) => Ok(pairs),
        Err(err) => {
            log::warn!("Malformed form body: {err}");
            Err(Error::BadRequest.into())
        }
    }
}

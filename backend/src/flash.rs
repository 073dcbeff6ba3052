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

use std::future::{ready, Ready};

use actix_web::{cookie::Cookie, FromRequest, HttpResponse};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

const FLASH_COOKIE: &str = "flash";

/// One-shot message handed from one response to the next rendered page.
#[derive(Clone, Debug, Default)]
pub struct Flash(Option<String>);

impl Flash {
    pub fn message(&self) -> Option<String> {
        self.0.clone()
    }

    /// Expire the cookie once its message made it onto a page.
    pub fn clear(&self, resp: &mut HttpResponse) {
        if self.0.is_none() {
            return;
        }

        let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
        cookie.make_removal();
        if let Err(err) = resp.add_cookie(&cookie) {
            log::error!("Failed to clear flash cookie: {err}");
        }
    }
}

impl FromRequest for Flash {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let message = req
            .cookie(FLASH_COOKIE)
            .and_then(|c| URL_SAFE_NO_PAD.decode(c.value()).ok())
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .filter(|message| !message.is_empty());

        ready(Ok(Flash(message)))
    }
}

pub fn cookie(message: &str) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, URL_SAFE_NO_PAD.encode(message))
        .path("/")
        .http_only(true)
        .finish()
}

#[cfg(test)]
pub(crate) fn read_flash(resp: &actix_web::dev::ServiceResponse) -> Option<String> {
    resp.response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .and_then(|c| URL_SAFE_NO_PAD.decode(c.value()).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .filter(|message| !message.is_empty())
}

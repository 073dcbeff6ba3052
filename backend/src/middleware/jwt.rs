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
    cookie::{time, Cookie, SameSite},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, HttpMessage, HttpRequest,
};
use chrono::{Duration, Utc};
use db_connector::models::users::User;
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::future::{ready, Ready};

use crate::{
    error::Error,
    middleware::get_token,
    models::{session_user::SessionUser, token_claims::TokenClaims},
    AppState,
};

pub const ACCESS_TOKEN: &str = "access_token";
pub const SESSION_HOURS: i64 = 12;
pub const REMEMBER_ME_DAYS: i64 = 30;

pub struct JwtMiddleware;

impl<S, B> Transform<S, ServiceRequest> for JwtMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Error = actix_web::Error;
    type Response = ServiceResponse<B>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type Transform = JwtService<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtService { service }))
    }
}

pub struct JwtService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;
    type Response = ServiceResponse<B>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Err(err) = validate_token(req.request()) {
            return Box::pin(async move { Err(err) });
        }

        let fut = self.service.call(req);
        Box::pin(async move { fut.await })
    }
}

fn validate_token(req: &HttpRequest) -> Result<(), actix_web::Error> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        log::error!("AppState is not registered");
        return Err(Error::InternalError.into());
    };

    match session_from_request(req, &state.jwt_secret) {
        Some(user) => {
            req.extensions_mut().insert(user);
            Ok(())
        }
        None => Err(Error::Unauthorized {
            next: req.path().to_string(),
        }
        .into()),
    }
}

/// The logged in user, if the request carries a valid access token.
pub fn session_from_request(req: &HttpRequest, jwt_secret: &str) -> Option<SessionUser> {
    let token = get_token(req, ACCESS_TOKEN)?;
    decode_token(&token, jwt_secret)
}

fn decode_token(token: &str, jwt_secret: &str) -> Option<SessionUser> {
    let claims = match decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(data) => data.claims,
        Err(err) => {
            log::debug!("Rejected access token: {err}");
            return None;
        }
    };

    match claims.sub.parse::<i32>() {
        Ok(id) => Some(SessionUser {
            id,
            username: claims.username,
        }),
        Err(_err) => {
            log::warn!("Access token with invalid subject {}", claims.sub);
            None
        }
    }
}

pub fn create_token(jwt_secret: &str, user: &User, remember_me: bool) -> Result<String, Error> {
    let lifetime = if remember_me {
        Duration::days(REMEMBER_ME_DAYS)
    } else {
        Duration::hours(SESSION_HOURS)
    };

    let now = Utc::now();
    let claims = TokenClaims {
        iat: now.timestamp() as usize,
        exp: (now + lifetime).timestamp() as usize,
        sub: user.id.to_string(),
        username: user.username.clone(),
    };

    match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    ) {
        Ok(token) => Ok(token),
        Err(err) => {
            log::error!("Failed to encode access token: {err}");
            Err(Error::InternalError)
        }
    }
}

/// Without "remember me" the cookie ends with the browser session.
pub fn access_cookie(token: String, remember_me: bool) -> Cookie<'static> {
    let mut builder = Cookie::build(ACCESS_TOKEN, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    if remember_me {
        builder = builder.max_age(time::Duration::days(REMEMBER_ME_DAYS));
    }

    builder.finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(ACCESS_TOKEN, "").path("/").finish();
    cookie.make_removal();
    cookie
}

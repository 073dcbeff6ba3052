use std::future::{ready, Ready};

use actix_web::{web, FromRequest, HttpMessage};

use crate::{error::Error, middleware::jwt::session_from_request, AppState};

/// Identity of the logged in user, taken from the access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i32,
    pub username: String,
}

impl FromRequest for SessionUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let cached = req.extensions().get::<SessionUser>().cloned();
        let user = cached.or_else(|| {
            req.app_data::<web::Data<AppState>>()
                .and_then(|state| session_from_request(req, &state.jwt_secret))
        });
        match user {
            Some(user) => ready(Ok(user)),
            None => ready(Err(Error::Unauthorized {
                next: req.path().to_string(),
            }
            .into())),
        }
    }
}

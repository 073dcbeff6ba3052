use std::future::{ready, Ready};

use actix_web::{web, FromRequest, HttpMessage};
use db_connector::PooledConnection;

use crate::{
    error::Error, middleware::jwt::session_from_request, models::session_user::SessionUser,
    utils::get_connection, AppState,
};

/// Everything a handler needs for one request: the caller's identity, if any,
/// and the database connection all its work runs on.
pub struct RequestContext {
    pub conn: PooledConnection,
    pub user: Option<SessionUser>,
    path: String,
}

impl RequestContext {
    pub fn require_user(&self) -> Result<&SessionUser, Error> {
        self.user.as_ref().ok_or_else(|| Error::Unauthorized {
            next: self.path.clone(),
        })
    }

    pub fn into_parts(self) -> (PooledConnection, Option<SessionUser>) {
        (self.conn, self.user)
    }
}

impl FromRequest for RequestContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            log::error!("AppState is not registered");
            return ready(Err(Error::InternalError.into()));
        };

        // The extensions borrow must end before the cookie jar gets parsed
        let cached = req.extensions().get::<SessionUser>().cloned();
        let user = cached.or_else(|| session_from_request(req, &state.jwt_secret));

        let conn = match get_connection(state) {
            Ok(conn) => conn,
            Err(err) => return ready(Err(err)),
        };

        ready(Ok(RequestContext {
            conn,
            user,
            path: req.path().to_string(),
        }))
    }
}

pub(crate) mod auth;
mod evaluation;
pub(crate) mod recipe_book;
mod search;

use actix_web::web;

use crate::error::Error;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(auth::configure);
    cfg.configure(search::configure);
    cfg.configure(recipe_book::configure);
    cfg.configure(evaluation::configure);
}

/// Fallback for every unknown path.
pub async fn not_found() -> actix_web::Result<actix_web::HttpResponse> {
    Err(Error::NotFound.into())
}

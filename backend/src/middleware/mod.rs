use actix_web::{http, HttpRequest};

pub mod jwt;

/// Token from the named cookie, or from a `Bearer` authorization header.
pub fn get_token(req: &HttpRequest, name: &str) -> Option<String> {
    req.cookie(name).map(|c| c.value().to_string()).or_else(|| {
        req.headers()
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(|token| token.to_string())
    })
}

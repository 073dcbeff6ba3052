use actix_web::{
    error,
    http::{
        header::{self, ContentType},
        StatusCode,
    },
    HttpResponse,
};
use askama::Template;
use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("An internal error occured. Please try again later")]
    InternalError,
    #[display("The requested page does not exist")]
    NotFound,
    #[display("Please log in to access this page")]
    Unauthorized { next: String },
    #[display("An account with this email or username already exists")]
    UserAlreadyExists,
    #[display("User does not exist")]
    UserDoesNotExist,
    #[display("The recipe search is currently unavailable")]
    RecipeApi,
    #[display("Malformed request")]
    BadRequest,
}

#[derive(Template)]
#[template(path = "404.html")]
struct NotFoundPage {
    flash: Option<String>,
}

#[derive(Template)]
#[template(path = "500.html")]
struct ServerErrorPage<'a> {
    flash: Option<String>,
    message: &'a str,
}

fn html_page(status: StatusCode, body: askama::Result<String>, fallback: String) -> HttpResponse {
    let body = match body {
        Ok(body) => body,
        Err(err) => {
            log::error!("Failed to render error page: {err}");
            return HttpResponse::build(status)
                .insert_header(ContentType::plaintext())
                .body(fallback);
        }
    };

    HttpResponse::build(status)
        .insert_header(ContentType::html())
        .body(body)
}

/// Location of the login page that sends the user back to `next` afterwards.
pub fn login_location(next: &str) -> String {
    match serde_urlencoded::to_string([("next", next)]) {
        Ok(query) => format!("/login?{query}"),
        Err(_err) => "/login".to_string(),
    }
}

impl error::ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Unauthorized { next } => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, login_location(next)))
                .finish(),
            Self::NotFound => html_page(
                self.status_code(),
                NotFoundPage { flash: None }.render(),
                self.to_string(),
            ),
            _ => {
                let message = self.to_string();
                html_page(
                    self.status_code(),
                    ServerErrorPage {
                        flash: None,
                        message: &message,
                    }
                    .render(),
                    message.clone(),
                )
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::SEE_OTHER,
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::UserDoesNotExist => StatusCode::BAD_REQUEST,
            Self::RecipeApi => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        log::error!("Database error: {err}");
        Self::InternalError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};

    #[test]
    fn test_login_location_encodes_next() {
        assert_eq!(login_location("/recipe_books"), "/login?next=%2Frecipe_books");
    }

    #[actix_web::test]
    async fn test_unauthorized_redirects() {
        let resp = Error::Unauthorized {
            next: "/create_recipe_book".to_string(),
        }
        .error_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/login?next=%2Fcreate_recipe_book"
        );
    }

    #[actix_web::test]
    async fn test_custom_error_pages() {
        let resp = Error::NotFound.error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Page not found"));

        let resp = Error::RecipeApi.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("Something went wrong"));
    }
}

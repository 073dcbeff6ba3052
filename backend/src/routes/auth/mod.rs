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

pub mod login;
pub mod logout;
pub mod register;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register::register_page)
        .service(register::register)
        .service(login::login_page)
        .service(login::login)
        .service(logout::logout);
}

#[cfg(test)]
pub(crate) mod tests {
    use actix_web::{cookie::Cookie, http::StatusCode, test, web, App};
    use db_connector::models::users::User;
    use rand::{distributions::Alphanumeric, Rng};

    use crate::{
        middleware::jwt::ACCESS_TOKEN,
        models::{login::LoginForm, register::RegisterForm},
        routes,
        store::users::find_user_by_email,
        tests::configure as test_configure,
        AppState,
    };

    pub const TEST_PASSWORD: &str = "TestTestTest";

    /// A user registered through the http interface.
    pub struct TestUser {
        pub username: String,
        pub email: String,
        state: web::Data<AppState>,
        access_token: Option<String>,
    }

    impl TestUser {
        pub async fn random(state: &web::Data<AppState>) -> (Self, String) {
            let suffix: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .filter(|c| c.is_ascii_lowercase())
                .take(10)
                .map(char::from)
                .collect();
            let username = format!("cook{suffix}");
            let email = format!("{username}@test.invalid");

            let app = App::new()
                .configure(test_configure(state.clone()))
                .configure(routes::configure);
            let app = test::init_service(app).await;

            let form = RegisterForm {
                email: email.clone(),
                username: username.clone(),
                password: TEST_PASSWORD.to_string(),
                password2: TEST_PASSWORD.to_string(),
            };
            let req = test::TestRequest::post()
                .uri("/register")
                .set_form(&form)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER, "Failed to register test user");

            let user = TestUser {
                username,
                email: email.clone(),
                state: state.clone(),
                access_token: None,
            };
            (user, email)
        }

        pub async fn login(&mut self) -> &str {
            if self.access_token.is_none() {
                let app = App::new()
                    .configure(test_configure(self.state.clone()))
                    .configure(routes::configure);
                let app = test::init_service(app).await;

                let form = LoginForm {
                    email: self.email.clone(),
                    password: TEST_PASSWORD.to_string(),
                    remember_me: None,
                    next: None,
                };
                let req = test::TestRequest::post()
                    .uri("/login")
                    .set_form(&form)
                    .to_request();
                let resp = test::call_service(&app, req).await;
                assert_eq!(resp.status(), StatusCode::SEE_OTHER, "Failed to log in test user");

                let token = resp
                    .response()
                    .cookies()
                    .find(|c| c.name() == ACCESS_TOKEN)
                    .map(|c| c.value().to_string())
                    .unwrap();
                self.access_token = Some(token);
            }

            self.access_token.as_deref().unwrap()
        }

        pub async fn cookie(&mut self) -> Cookie<'static> {
            Cookie::new(ACCESS_TOKEN, self.login().await.to_string())
        }

        pub fn get(&self) -> User {
            let mut conn = self.state.pool.get().unwrap();
            find_user_by_email(&mut conn, &self.email).unwrap().unwrap()
        }
    }
}

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

use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use tokio::sync::{mpsc, oneshot};

use crate::error::Error;

enum Request {
    Hash {
        password: String,
        responder: oneshot::Sender<password_hash::Result<String>>,
    },
    Verify {
        hash: String,
        password: String,
        responder: oneshot::Sender<password_hash::Result<()>>,
    },
}

/// Runs argon2 on a dedicated thread so hashing never stalls the http workers.
pub struct HasherManager {
    tx: mpsc::Sender<Request>,
}

impl Default for HasherManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HasherManager {
    pub fn new() -> Self {
        let (tx, mut rx) = mpsc::channel::<Request>(10);

        std::thread::Builder::new()
            .name("password-hasher".to_string())
            .spawn(move || {
                let hasher = Argon2::default();
                while let Some(request) = rx.blocking_recv() {
                    match request {
                        Request::Hash {
                            password,
                            responder,
                        } => {
                            let salt = SaltString::generate(&mut OsRng);
                            let result = hasher
                                .hash_password(password.as_bytes(), &salt)
                                .map(|hash| hash.to_string());
                            let _ = responder.send(result);
                        }
                        Request::Verify {
                            hash,
                            password,
                            responder,
                        } => {
                            let result = PasswordHash::new(&hash).and_then(|parsed| {
                                hasher.verify_password(password.as_bytes(), &parsed)
                            });
                            let _ = responder.send(result);
                        }
                    }
                }
            })
            .expect("Failed to spawn password hasher thread");

        Self { tx }
    }

    /// Hash `password` with a fresh random salt and return the PHC string.
    pub async fn hash_password(&self, password: String) -> Result<String, Error> {
        let (responder, response) = oneshot::channel();
        self.tx
            .send(Request::Hash {
                password,
                responder,
            })
            .await
            .map_err(|_| Error::InternalError)?;

        match response.await {
            Ok(Ok(hash)) => Ok(hash),
            Ok(Err(err)) => {
                log::error!("Failed to hash password: {err}");
                Err(Error::InternalError)
            }
            Err(_err) => Err(Error::InternalError),
        }
    }

    /// Returns `Ok(false)` if the password does not match the stored hash.
    pub async fn verify_password(&self, hash: String, password: String) -> Result<bool, Error> {
        let (responder, response) = oneshot::channel();
        self.tx
            .send(Request::Verify {
                hash,
                password,
                responder,
            })
            .await
            .map_err(|_| Error::InternalError)?;

        match response.await {
            Ok(Ok(())) => Ok(true),
            Ok(Err(password_hash::Error::Password)) => Ok(false),
            Ok(Err(err)) => {
                log::error!("Failed to verify password: {err}");
                Err(Error::InternalError)
            }
            Err(_err) => Err(Error::InternalError),
        }
    }
}

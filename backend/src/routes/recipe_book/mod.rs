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


pub mod create;
pub mod delete;
pub mod list;
pub mod update;

#[cfg(test)]
pub(crate) mod test_helpers;

use crate::middleware::jwt::JwtMiddleware;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/create_recipe_book")
            .wrap(JwtMiddleware)
            .route(web::get().to(create::create_page))
            .route(web::post().to(create::create_recipe_book)),
    )
    .service(
        web::resource("/recipe_books")
            .wrap(JwtMiddleware)
            .route(web::get().to(list::recipe_books))
            .route(web::post().to(list::recipe_books)),
    )
    .service(
        web::resource("/recipe_book/{id}")
            .wrap(JwtMiddleware)
            .route(web::get().to(list::recipe_book)),
    )
    .service(
        web::resource("/update/{book}")
            .wrap(JwtMiddleware)
            .route(web::get().to(update::update_page))
            .route(web::post().to(update::update)),
    )
    .service(
        web::resource("/delete/{book}")
            .wrap(JwtMiddleware)
            .route(web::get().to(delete::delete))
            .route(web::post().to(delete::delete)),
    );
}

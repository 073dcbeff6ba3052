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


use std::sync::Arc;

use db_connector::Pool;
use hasher::HasherManager;
use recipe_api::RecipeLookup;

pub mod config;
pub mod error;
pub mod flash;
pub mod hasher;
pub mod middleware;
pub mod models;
pub mod recipe_api;
pub mod routes;
pub mod store;
pub mod utils;

pub struct AppState {
    pub pool: Pool,
    pub jwt_secret: String,
    pub hasher: HasherManager,
    pub recipe_api: Arc<dyn RecipeLookup>,
}

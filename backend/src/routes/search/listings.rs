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


use actix_web::{get, HttpResponse};
use askama::Template;
use db_connector::models::recipes::Recipe;

use crate::{
    flash::Flash,
    models::context::RequestContext,
    store::recipes::{all_recipes as load_all_recipes, all_searches_with_recipes, SearchListing},
    utils::{render_flashed, web_block_unpacked},
};

#[derive(Template)]
#[template(path = "search_terms.html")]
struct SearchTermsPage {
    flash: Option<String>,
    listings: Vec<SearchListing>,
}

#[derive(Template)]
#[template(path = "all_recipes.html")]
struct AllRecipesPage {
    flash: Option<String>,
    recipes: Vec<Recipe>,
}

#[get("/search_terms")]
pub async fn search_terms(ctx: RequestContext, flash: Flash) -> actix_web::Result<HttpResponse> {
    let (mut conn, _) = ctx.into_parts();
    let listings = web_block_unpacked(move || all_searches_with_recipes(&mut conn)).await?;

    render_flashed(
        &SearchTermsPage {
            flash: flash.message(),
            listings,
        },
        &flash,
    )
}

#[get("/all_recipes")]
pub async fn all_recipes(ctx: RequestContext, flash: Flash) -> actix_web::Result<HttpResponse> {
    let (mut conn, _) = ctx.into_parts();
    let recipes = web_block_unpacked(move || load_all_recipes(&mut conn)).await?;

    render_flashed(
        &AllRecipesPage {
            flash: flash.message(),
            recipes,
        },
        &flash,
    )
}

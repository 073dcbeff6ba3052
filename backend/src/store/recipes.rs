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


use db_connector::{
    models::{
        recipe_searches::{NewRecipeSearch, RecipeSearch},
        recipes::{NewRecipe, Recipe},
        search_recipes::SearchRecipe,
    },
    schema::{recipe_searches, recipes, search_recipes},
};
use diesel::{prelude::*, SqliteConnection};

use crate::{
    error::Error,
    recipe_api::{RecipeHit, SearchQuery},
};

/// Result of storing one search together with the hits the api returned for it.
#[derive(Debug)]
pub struct SearchOutcome {
    pub search: RecipeSearch,
    pub search_created: bool,
    pub recipes: Vec<Recipe>,
    pub recipes_created: usize,
    pub linked: usize,
}

/// A stored search with the recipes linked to it.
#[derive(Debug)]
pub struct SearchListing {
    pub search: RecipeSearch,
    pub recipes: Vec<Recipe>,
}

fn find_or_insert_recipe(conn: &mut SqliteConnection, hit: &RecipeHit) -> Result<(Recipe, bool), Error> {
    let labels = hit.health_labels.join(",");
    let ingredients = hit.ingredient_lines.join(",");

    let existing = recipes::table
        .filter(recipes::name.eq(&hit.name))
        .filter(recipes::labels.eq(&labels))
        .filter(recipes::ingredients.eq(&ingredients))
        .filter(recipes::image.eq(&hit.image))
        .filter(recipes::url.eq(&hit.url))
        .select(Recipe::as_select())
        .first(conn)
        .optional()?;
    if let Some(recipe) = existing {
        return Ok((recipe, false));
    }

    let recipe = diesel::insert_into(recipes::table)
        .values(&NewRecipe {
            name: &hit.name,
            labels: &labels,
            ingredients: &ingredients,
            image: &hit.image,
            url: &hit.url,
        })
        .returning(Recipe::as_returning())
        .get_result(conn)?;
    log::info!("Created recipe {} '{}'", recipe.id, recipe.name);

    Ok((recipe, true))
}

/// Return the recipe matching all five fields of `hit`, inserting it if there is none.
pub fn get_or_create_recipe(conn: &mut SqliteConnection, hit: &RecipeHit) -> Result<Recipe, Error> {
    find_or_insert_recipe(conn, hit).map(|(recipe, _)| recipe)
}

pub fn get_or_create_search(
    conn: &mut SqliteConnection,
    query: &SearchQuery,
) -> Result<(RecipeSearch, bool), Error> {
    let existing = recipe_searches::table
        .filter(recipe_searches::search.eq(&query.search))
        .filter(recipe_searches::diet.eq(&query.diet))
        .filter(recipe_searches::health.eq(&query.health))
        .filter(recipe_searches::calories.eq(&query.calories))
        .select(RecipeSearch::as_select())
        .first(conn)
        .optional()?;
    if let Some(search) = existing {
        return Ok((search, false));
    }

    let search = diesel::insert_into(recipe_searches::table)
        .values(&NewRecipeSearch {
            search: &query.search,
            diet: &query.diet,
            health: &query.health,
            calories: &query.calories,
        })
        .returning(RecipeSearch::as_returning())
        .get_result(conn)?;
    log::info!("Created search {} '{}'", search.id, search.search);

    Ok((search, true))
}

/// Store a search and its hits in a single transaction.
///
/// Hits are only linked to the search when the search itself is new. Repeating a
/// known search still stores unseen recipes but leaves the links as they are.
pub fn record_search(
    conn: &mut SqliteConnection,
    query: &SearchQuery,
    hits: &[RecipeHit],
) -> Result<SearchOutcome, Error> {
    conn.immediate_transaction::<_, Error, _>(|conn| {
        let (search, search_created) = get_or_create_search(conn, query)?;

        let mut recipes = Vec::with_capacity(hits.len());
        let mut recipes_created = 0;
        for hit in hits {
            let (recipe, created) = find_or_insert_recipe(conn, hit)?;
            if created {
                recipes_created += 1;
            }
            recipes.push(recipe);
        }

        let mut linked = 0;
        if search_created && !recipes.is_empty() {
            let links: Vec<SearchRecipe> = recipes
                .iter()
                .map(|recipe| SearchRecipe {
                    search_id: search.id,
                    recipe_id: recipe.id,
                })
                .collect();
            linked = diesel::insert_or_ignore_into(search_recipes::table)
                .values(&links)
                .execute(conn)?;
        }

        Ok(SearchOutcome {
            search,
            search_created,
            recipes,
            recipes_created,
            linked,
        })
    })
}

pub fn all_recipes(conn: &mut SqliteConnection) -> Result<Vec<Recipe>, Error> {
    let recipes = recipes::table
        .order(recipes::id)
        .select(Recipe::as_select())
        .load(conn)?;

    Ok(recipes)
}

pub fn all_searches_with_recipes(conn: &mut SqliteConnection) -> Result<Vec<SearchListing>, Error> {
    let searches = recipe_searches::table
        .order(recipe_searches::id)
        .select(RecipeSearch::as_select())
        .load(conn)?;

    let links: Vec<(SearchRecipe, Recipe)> = SearchRecipe::belonging_to(&searches)
        .inner_join(recipes::table)
        .order(recipes::id)
        .select((SearchRecipe::as_select(), Recipe::as_select()))
        .load(conn)?;

    let listings = links
        .grouped_by(&searches)
        .into_iter()
        .zip(searches)
        .map(|(links, search)| SearchListing {
            search,
            recipes: links.into_iter().map(|(_, recipe)| recipe).collect(),
        })
        .collect();

    Ok(listings)
}

/// Recipes with the given ids, unknown ids are skipped.
pub fn recipes_by_ids(conn: &mut SqliteConnection, ids: &[i32]) -> Result<Vec<Recipe>, Error> {
    let recipes = recipes::table
        .filter(recipes::id.eq_any(ids))
        .order(recipes::id)
        .select(Recipe::as_select())
        .load(conn)?;

    Ok(recipes)
}

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
        recipe_book_recipes::RecipeBookRecipe,
        recipe_books::{NewRecipeBook, RecipeBook},
        recipes::Recipe,
    },
    schema::{recipe_book_recipes, recipe_books, recipes},
};
use diesel::{prelude::*, SqliteConnection};

use crate::{error::Error, store::users::find_user_by_username};

#[derive(Debug, PartialEq)]
pub enum RenameOutcome {
    Renamed(RecipeBook),
    NotFound,
    NameTaken,
}

/// The book `name` owned by `owner_id`.
pub fn find_book(
    conn: &mut SqliteConnection,
    owner_id: i32,
    name: &str,
) -> Result<Option<RecipeBook>, Error> {
    let book = recipe_books::table
        .filter(recipe_books::user_id.eq(owner_id))
        .filter(recipe_books::name.eq(name))
        .select(RecipeBook::as_select())
        .first(conn)
        .optional()?;

    Ok(book)
}

/// Return the book `name` of `username`, creating it with `recipes` if it does not
/// exist yet. An existing book is returned as is, `recipes` are ignored then.
pub fn get_or_create_recipe_book(
    conn: &mut SqliteConnection,
    name: &str,
    username: &str,
    recipes: &[Recipe],
) -> Result<RecipeBook, Error> {
    conn.immediate_transaction::<_, Error, _>(|conn| {
        let Some(user) = find_user_by_username(conn, username)? else {
            return Err(Error::UserDoesNotExist);
        };

        if let Some(book) = find_book(conn, user.id, name)? {
            return Ok(book);
        }

        let book = diesel::insert_into(recipe_books::table)
            .values(&NewRecipeBook {
                name,
                user_id: user.id,
            })
            .returning(RecipeBook::as_returning())
            .get_result(conn)?;

        if !recipes.is_empty() {
            let members: Vec<RecipeBookRecipe> = recipes
                .iter()
                .map(|recipe| RecipeBookRecipe {
                    book_id: book.id,
                    recipe_id: recipe.id,
                })
                .collect();
            diesel::insert_or_ignore_into(recipe_book_recipes::table)
                .values(&members)
                .execute(conn)?;
        }
        log::info!("Created recipe book {} '{}' for {}", book.id, book.name, username);

        Ok(book)
    })
}

pub fn books_for_user(conn: &mut SqliteConnection, owner_id: i32) -> Result<Vec<RecipeBook>, Error> {
    let books = recipe_books::table
        .filter(recipe_books::user_id.eq(owner_id))
        .order(recipe_books::id)
        .select(RecipeBook::as_select())
        .load(conn)?;

    Ok(books)
}

/// The book with its recipes, or `None` if it does not exist or belongs to someone else.
pub fn book_with_recipes(
    conn: &mut SqliteConnection,
    book_id: i32,
    owner_id: i32,
) -> Result<Option<(RecipeBook, Vec<Recipe>)>, Error> {
    let book = recipe_books::table
        .find(book_id)
        .filter(recipe_books::user_id.eq(owner_id))
        .select(RecipeBook::as_select())
        .first(conn)
        .optional()?;
    let Some(book) = book else {
        return Ok(None);
    };

    let recipes = RecipeBookRecipe::belonging_to(&book)
        .inner_join(recipes::table)
        .order(recipes::id)
        .select(Recipe::as_select())
        .load(conn)?;

    Ok(Some((book, recipes)))
}

pub fn rename_book(
    conn: &mut SqliteConnection,
    owner_id: i32,
    old_name: &str,
    new_name: &str,
) -> Result<RenameOutcome, Error> {
    conn.immediate_transaction::<_, Error, _>(|conn| {
        let Some(book) = find_book(conn, owner_id, old_name)? else {
            return Ok(RenameOutcome::NotFound);
        };
        if old_name == new_name {
            return Ok(RenameOutcome::Renamed(book));
        }
        if find_book(conn, owner_id, new_name)?.is_some() {
            return Ok(RenameOutcome::NameTaken);
        }

        let book = diesel::update(recipe_books::table.find(book.id))
            .set(recipe_books::name.eq(new_name))
            .returning(RecipeBook::as_returning())
            .get_result(conn)?;
        log::info!("Renamed recipe book {} from '{}' to '{}'", book.id, old_name, new_name);

        Ok(RenameOutcome::Renamed(book))
    })
}

/// Delete the book and its membership links. The recipes themselves stay.
/// Returns whether a book was deleted.
pub fn delete_book(conn: &mut SqliteConnection, owner_id: i32, name: &str) -> Result<bool, Error> {
    conn.immediate_transaction::<_, Error, _>(|conn| {
        let Some(book) = find_book(conn, owner_id, name)? else {
            return Ok(false);
        };

        diesel::delete(recipe_book_recipes::table.filter(recipe_book_recipes::book_id.eq(book.id)))
            .execute(conn)?;
        diesel::delete(recipe_books::table.find(book.id)).execute(conn)?;
        log::info!("Deleted recipe book {} '{}'", book.id, book.name);

        Ok(true)
    })
}

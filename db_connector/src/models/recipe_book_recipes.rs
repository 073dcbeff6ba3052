use super::recipe_books::RecipeBook;
use super::recipes::Recipe;
use diesel::prelude::*;

#[derive(
    Debug, Clone, Queryable, Selectable, Insertable, Identifiable, Associations, PartialEq,
)]
#[diesel(belongs_to(RecipeBook, foreign_key = book_id))]
#[diesel(belongs_to(Recipe, foreign_key = recipe_id))]
#[diesel(primary_key(book_id, recipe_id))]
#[diesel(table_name = crate::schema::recipe_book_recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RecipeBookRecipe {
    pub book_id: i32,
    pub recipe_id: i32,
}

use super::recipe_searches::RecipeSearch;
use super::recipes::Recipe;
use diesel::prelude::*;

#[derive(
    Debug, Clone, Queryable, Selectable, Insertable, Identifiable, Associations, PartialEq,
)]
#[diesel(belongs_to(RecipeSearch, foreign_key = search_id))]
#[diesel(belongs_to(Recipe, foreign_key = recipe_id))]
#[diesel(primary_key(search_id, recipe_id))]
#[diesel(table_name = crate::schema::search_recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SearchRecipe {
    pub search_id: i32,
    pub recipe_id: i32,
}

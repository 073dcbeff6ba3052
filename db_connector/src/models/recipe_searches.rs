use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq)]
#[diesel(table_name = crate::schema::recipe_searches)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RecipeSearch {
    pub id: i32,
    pub search: String,
    pub diet: String,
    pub health: String,
    pub calories: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::recipe_searches)]
pub struct NewRecipeSearch<'a> {
    pub search: &'a str,
    pub diet: &'a str,
    pub health: &'a str,
    pub calories: &'a str,
}

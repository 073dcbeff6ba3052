use super::users::User;
use diesel::prelude::*;

#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Associations, PartialEq,
)]
#[diesel(belongs_to(User))]
#[diesel(table_name = crate::schema::recipe_books)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RecipeBook {
    pub id: i32,
    pub name: String,
    pub user_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::recipe_books)]
pub struct NewRecipeBook<'a> {
    pub name: &'a str,
    pub user_id: i32,
}

use diesel::prelude::*;

/// A recipe as returned by the search API. `labels` and `ingredients` hold the
/// comma joined lists.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub labels: String,
    pub ingredients: String,
    pub image: String,
    pub url: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub name: &'a str,
    pub labels: &'a str,
    pub ingredients: &'a str,
    pub image: &'a str,
    pub url: &'a str,
}

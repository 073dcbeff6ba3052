use diesel::{deserialize::Queryable, prelude::Insertable, Selectable};

#[derive(Debug, Clone, Queryable, Selectable, PartialEq)]
#[diesel(table_name = crate::schema::site_evaluations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SiteEvaluation {
    pub id: i32,
    pub positive_experience: bool,
    pub explanation: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::site_evaluations)]
pub struct NewSiteEvaluation<'a> {
    pub positive_experience: bool,
    pub explanation: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
}

pub mod recipe_book_recipes;
pub mod recipe_books;
pub mod recipe_searches;
pub mod recipes;
pub mod search_recipes;
pub mod site_evaluations;
pub mod users;

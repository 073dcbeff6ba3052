//! Database operations behind the request handlers. Every function takes the
//! connection of the request it runs for.

pub mod books;
pub mod evaluations;
pub mod recipes;
pub mod users;

use db_connector::{
    models::users::{NewUser, User},
    schema::users,
};
use diesel::{
    dsl::exists,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
    SqliteConnection,
};

use crate::error::Error;

pub fn email_taken(conn: &mut SqliteConnection, email: &str) -> Result<bool, Error> {
    let taken = diesel::select(exists(
        users::table.filter(users::email.eq(email.to_lowercase())),
    ))
    .get_result(conn)?;

    Ok(taken)
}

pub fn username_taken(conn: &mut SqliteConnection, username: &str) -> Result<bool, Error> {
    let taken = diesel::select(exists(users::table.filter(users::username.eq(username))))
        .get_result(conn)?;

    Ok(taken)
}

/// Insert a new user. Emails are stored lowercase.
pub fn create_user(
    conn: &mut SqliteConnection,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, Error> {
    let email = email.to_lowercase();
    if email_taken(conn, &email)? || username_taken(conn, username)? {
        return Err(Error::UserAlreadyExists);
    }

    let result = diesel::insert_into(users::table)
        .values(&NewUser {
            username,
            email: &email,
            password_hash,
        })
        .returning(User::as_returning())
        .get_result(conn);

    match result {
        Ok(user) => {
            log::info!("Created user {} '{}'", user.id, user.username);
            Ok(user)
        }
        // Lost a race against a concurrent registration
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(Error::UserAlreadyExists)
        }
        Err(err) => Err(err.into()),
    }
}

pub fn find_user_by_email(conn: &mut SqliteConnection, email: &str) -> Result<Option<User>, Error> {
    let user = users::table
        .filter(users::email.eq(email.to_lowercase()))
        .select(User::as_select())
        .first(conn)
        .optional()?;

    Ok(user)
}

pub fn find_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<User>, Error> {
    let user = users::table
        .filter(users::username.eq(username))
        .select(User::as_select())
        .first(conn)
        .optional()?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use db_connector::test_connection_pool;

    #[test]
    fn test_create_and_find_user() {
        let pool = test_connection_pool();
        let mut conn = pool.get().unwrap();

        let user = create_user(&mut conn, "cook", "Cook@Test.invalid", "hash").unwrap();
        assert_eq!(user.email, "cook@test.invalid");

        let found = find_user_by_email(&mut conn, "COOK@test.invalid").unwrap();
        assert_eq!(found, Some(user.clone()));
        assert_eq!(find_user_by_username(&mut conn, "cook").unwrap(), Some(user));
        assert!(find_user_by_username(&mut conn, "nobody").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_email_or_username() {
        let pool = test_connection_pool();
        let mut conn = pool.get().unwrap();
        create_user(&mut conn, "cook", "cook@test.invalid", "hash").unwrap();

        assert!(email_taken(&mut conn, "COOK@test.invalid").unwrap());
        assert!(username_taken(&mut conn, "cook").unwrap());
        assert!(!username_taken(&mut conn, "baker").unwrap());

        let same_email = create_user(&mut conn, "baker", "cook@test.invalid", "hash");
        assert!(matches!(same_email, Err(Error::UserAlreadyExists)));
        let same_name = create_user(&mut conn, "cook", "baker@test.invalid", "hash");
        assert!(matches!(same_name, Err(Error::UserAlreadyExists)));
        assert_eq!(users::table.count().get_result::<i64>(&mut conn).unwrap(), 1);
    }
}

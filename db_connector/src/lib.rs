use diesel::{
    r2d2::{ConnectionManager, CustomizeConnection},
    sqlite::Sqlite,
    RunQueryDsl, SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub mod models;
pub mod schema;

pub type Pool = diesel::r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type PooledConnection = diesel::r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub fn run_migrations(
    connection: &mut impl MigrationHarness<Sqlite>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    connection.run_pending_migrations(MIGRATIONS)?;

    Ok(())
}

/// Applied to every connection handed out by the pool.
#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        diesel::sql_query("PRAGMA foreign_keys = ON")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        diesel::sql_query("PRAGMA busy_timeout = 5000")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        Ok(())
    }
}

/**
 * Create db connection pool
 */
pub fn get_connection_pool() -> Pool {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    connection_pool(&url)
}

/**
 * Create a pool for the database file at `url`
 */
pub fn connection_pool(url: &str) -> Pool {
    let manager = ConnectionManager::<SqliteConnection>::new(url);
    Pool::builder()
        .test_on_check_out(true)
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
        .expect("Could not build connection pool")
}

/**
 * Create a pool backed by a private in-memory database with all migrations applied.
 *
 * The pool holds exactly one connection that is never recycled, since the
 * database only lives as long as that connection.
 */
pub fn test_connection_pool() -> Pool {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = Pool::builder()
        .test_on_check_out(true)
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
        .expect("Could not build connection pool");

    {
        let mut conn = pool.get().expect("Could not get test connection");
        run_migrations(&mut conn).expect("Failed to run migrations");
    }
    log::debug!("Created in-memory test database");

    pool
}

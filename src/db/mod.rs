// Database module - provides the connection pool and data access layer

mod models;
mod trivia_repository;

use crate::errors::Error;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

pub use models::*;
pub use trivia_repository::*;

/// Tables are created on first open; existing databases are left untouched.
/// Category references are intentionally not constrained: the API never
/// verifies that a question's category exists.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    category INTEGER NOT NULL,
    difficulty INTEGER NOT NULL
);
";

#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    /// Opens (or creates) the SQLite database at `db_path` and builds the
    /// connection pool, bootstrapping the schema if needed.
    ///
    /// # Errors
    ///
    /// Returns an Error if the pool cannot be built or schema creation fails
    pub fn new(db_path: &str) -> Result<Self, Error> {
        let manager = ConnectionManager::<SqliteConnection>::new(db_path);
        let pool = Pool::builder().build(manager)?;

        let mut conn = pool.get()?;
        conn.batch_execute(SCHEMA_SQL)?;

        Ok(Database {
            pool: Arc::new(pool),
        })
    }

    /// Checks out a connection from the pool
    ///
    /// # Errors
    ///
    /// Returns an Error if the pool is exhausted or the connection is broken
    pub fn get_conn(
        &self,
    ) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, Error> {
        Ok(self.pool.get()?)
    }
}

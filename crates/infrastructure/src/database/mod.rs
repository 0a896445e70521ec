use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, PoolError};
use domain::DomainError;
use thiserror::Error;
use tracing::info;

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::RepositoryError(err.to_string())
    }
}

/// Applied to every pooled connection. Writers wait on a locked database
/// instead of failing, and WAL lets readers run alongside a writer.
const CONNECTION_PRAGMAS: &str = "PRAGMA busy_timeout = 5000; PRAGMA journal_mode = WAL;";

#[derive(Debug)]
struct SqlitePragmas;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(r2d2::Error::QueryError)
    }
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the SQLite database at `database_url` and make sure
    /// the tables exist.
    pub fn new(database_url: &str) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = r2d2::Pool::builder()
            .connection_customizer(Box::new(SqlitePragmas))
            .build(manager)?;
        let database = Database { pool };
        database.create_tables()?;
        info!("SQLite database ready at {}", database_url);
        Ok(database)
    }

    /// Private in-memory database. A single connection is kept alive for
    /// the lifetime of the pool since every SQLite connection to
    /// `:memory:` sees its own empty database.
    pub fn in_memory() -> Result<Self, StoreError> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .build(manager)?;
        let database = Database { pool };
        database.create_tables()?;
        Ok(database)
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn create_tables(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.get()?;
        conn.batch_execute(CREATE_TABLES)?;
        Ok(())
    }
}

/// Run a Diesel operation on a pooled connection without blocking the
/// async runtime.
pub(crate) async fn with_connection<T, F>(pool: &SqlitePool, operation: F) -> Result<T, StoreError>
where
    T: Send + 'static,
    F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
{
    let mut conn = pool.get()?;
    let result = tokio::task::spawn_blocking(move || operation(&mut conn)).await??;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{SqliteExerciseRepository, SqliteUserRepository};
    use chrono::NaiveDate;
    use domain::{Exercise, ExerciseRepository, LogQuery, User, UserRepository};
    use std::sync::Arc;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writes_to_a_file_database_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.db");
        let database = Database::new(path.to_str().unwrap()).unwrap();

        let users = Arc::new(SqliteUserRepository::new(database.get_pool().clone()));
        let exercises = Arc::new(SqliteExerciseRepository::new(database.get_pool().clone()));
        let owner = users.save(&User::new("owner".to_string())).await.unwrap();
        let owner_id = owner.id.unwrap();
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();

        let mut tasks = Vec::new();
        for i in 0..64 {
            let users = users.clone();
            let exercises = exercises.clone();
            tasks.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    users
                        .save(&User::new(format!("user-{i}")))
                        .await
                        .map(|_| ())
                } else {
                    let exercise = Exercise::new(owner_id, format!("set-{i}"), 10, date);
                    exercises.save(&exercise).await.map(|_| ())
                }
            }));
        }

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(users.find_all().await.unwrap().len(), 33);
        let log = exercises
            .find_by_user(owner_id, &LogQuery::default())
            .await
            .unwrap();
        assert_eq!(log.len(), 32);
    }
}

use domain::*;
use infrastructure::*;
use std::sync::Arc;

/// Exercise Tracker Application - wires the store into the domain services
pub struct ExerciseTrackerApp {
    pub user_service: UserService,
    pub exercise_service: ExerciseService,
}

impl ExerciseTrackerApp {
    pub fn new(database_url: &str) -> Result<Self, StoreError> {
        // Infrastructure layer - database setup
        let database = Database::new(database_url)?;
        Ok(Self::from_database(&database))
    }

    /// Application backed by a throwaway in-memory database.
    pub fn in_memory() -> Result<Self, StoreError> {
        let database = Database::in_memory()?;
        Ok(Self::from_database(&database))
    }

    pub fn from_database(database: &Database) -> Self {
        let pool = database.get_pool().clone();

        // Create repository implementations
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(pool.clone()));
        let exercise_repository: Arc<dyn ExerciseRepository> =
            Arc::new(SqliteExerciseRepository::new(pool));

        // Domain services
        let user_service = UserService::new(user_repository.clone());
        let exercise_service = ExerciseService::new(user_repository, exercise_repository);

        Self {
            user_service,
            exercise_service,
        }
    }
}

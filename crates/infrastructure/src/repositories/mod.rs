pub mod sqlite_exercise_repository;
pub mod sqlite_user_repository;

pub use sqlite_exercise_repository::SqliteExerciseRepository;
pub use sqlite_user_repository::SqliteUserRepository;

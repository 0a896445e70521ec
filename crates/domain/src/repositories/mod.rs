pub mod exercise_repository;
pub mod user_repository;

pub use exercise_repository::ExerciseRepository;
pub use user_repository::UserRepository;

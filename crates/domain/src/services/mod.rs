pub mod exercise_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod testing;

pub use exercise_service::ExerciseService;
pub use user_service::UserService;

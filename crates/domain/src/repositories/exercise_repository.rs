use crate::entities::{Exercise, LogQuery};
use crate::errors::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    async fn save(&self, exercise: &Exercise) -> Result<Exercise, DomainError>;
    /// Exercises of one user matching `query`, sorted by date ascending
    /// (ties in insertion order) and capped by `query.limit`.
    async fn find_by_user(
        &self,
        user_id: i32,
        query: &LogQuery,
    ) -> Result<Vec<Exercise>, DomainError>;
}

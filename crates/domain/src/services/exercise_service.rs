use crate::dates::{parse_date, today};
use crate::entities::exercise::present;
use crate::entities::{parse_duration, Exercise, ExerciseLog, LogQuery, NewExercise, User};
use crate::errors::DomainError;
use crate::repositories::{ExerciseRepository, UserRepository};
use std::sync::Arc;
use tracing::debug;

/// Records exercises against existing users and reads their logs back.
pub struct ExerciseService {
    user_repository: Arc<dyn UserRepository>,
    exercise_repository: Arc<dyn ExerciseRepository>,
}

impl ExerciseService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        exercise_repository: Arc<dyn ExerciseRepository>,
    ) -> Self {
        Self {
            user_repository,
            exercise_repository,
        }
    }

    /// Add an exercise for `user_id`.
    ///
    /// Checks run in order: required fields, user existence, date, duration.
    /// Nothing is written unless all of them pass. A missing date defaults
    /// to today's date at the moment of the call.
    pub async fn add_exercise(
        &self,
        user_id: &str,
        input: NewExercise,
    ) -> Result<(User, Exercise), DomainError> {
        let (description, duration) = match (present(&input.description), present(&input.duration)) {
            (Some(description), Some(duration)) => (description.to_string(), duration.to_string()),
            _ => {
                return Err(DomainError::MissingRequiredFields(
                    "description and duration are required".to_string(),
                ))
            }
        };

        let user = self.resolve_user(user_id).await?;
        let owner_id = user
            .id
            .ok_or_else(|| DomainError::RepositoryError("stored user has no id".to_string()))?;

        let date = match present(&input.date) {
            Some(raw) => parse_date(raw)?,
            None => today(),
        };
        let duration = parse_duration(&duration)?;

        let exercise = Exercise::new(owner_id, description, duration, date);
        exercise.validate()?;

        let saved = self.exercise_repository.save(&exercise).await?;
        debug!(
            "Saved exercise {:?} for user {} on {}",
            saved.id, owner_id, saved.date
        );

        Ok((user, saved))
    }

    /// Read the exercise log of `user_id`, filtered by `query`.
    pub async fn get_log(&self, user_id: &str, query: &LogQuery) -> Result<ExerciseLog, DomainError> {
        let user = self.resolve_user(user_id).await?;
        let owner_id = user
            .id
            .ok_or_else(|| DomainError::RepositoryError("stored user has no id".to_string()))?;

        let exercises = self.exercise_repository.find_by_user(owner_id, query).await?;
        Ok(ExerciseLog { user, exercises })
    }

    async fn resolve_user(&self, raw_id: &str) -> Result<User, DomainError> {
        let not_found = || DomainError::UserNotFound(raw_id.to_string());
        let id = raw_id.trim().parse::<i32>().map_err(|_| not_found())?;
        self.user_repository.find_by_id(id).await?.ok_or_else(not_found)
    }
}

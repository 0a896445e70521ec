use crate::entities::{Exercise, LogQuery, User};
use crate::errors::DomainError;
use crate::repositories::{ExerciseRepository, UserRepository};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory store behaving like the SQLite adapters: generated ids,
/// unique usernames, date-sorted logs.
#[derive(Default)]
pub(crate) struct InMemoryStore {
    users: Mutex<Vec<User>>,
    exercises: Mutex<Vec<Exercise>>,
}

impl InMemoryStore {
    pub(crate) fn exercise_count(&self) -> usize {
        self.exercises.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.id == Some(id)).cloned())
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|existing| existing.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists(user.username.clone()));
        }

        let saved = User::with_id(users.len() as i32 + 1, user.username.clone());
        users.push(saved.clone());
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryStore {
    async fn save(&self, exercise: &Exercise) -> Result<Exercise, DomainError> {
        let mut exercises = self.exercises.lock().unwrap();
        let mut saved = exercise.clone();
        saved.id = Some(exercises.len() as i32 + 1);
        exercises.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_user(
        &self,
        user_id: i32,
        query: &LogQuery,
    ) -> Result<Vec<Exercise>, DomainError> {
        let exercises = self.exercises.lock().unwrap();
        let mut selected: Vec<Exercise> = exercises
            .iter()
            .filter(|exercise| exercise.user_id == user_id && query.matches(exercise.date))
            .cloned()
            .collect();

        selected.sort_by_key(|exercise| (exercise.date, exercise.id));
        if let Some(limit) = query.limit {
            selected.truncate(limit);
        }
        Ok(selected)
    }
}

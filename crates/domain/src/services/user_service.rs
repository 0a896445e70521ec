use crate::entities::User;
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use std::sync::Arc;
use tracing::debug;

/// User Service - Contains business logic
/// This is the APPLICATION LAYER in clean architecture
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Create a new user. Username uniqueness is left to the store.
    pub async fn create_user(&self, username: String) -> Result<User, DomainError> {
        let user = User::new(username);
        user.validate()?;

        let saved = self.user_repository.save(&user).await?;
        debug!("Created user {:?} ({})", saved.id, saved.username);
        Ok(saved)
    }

    /// Get all users
    pub async fn get_all_users(&self) -> Result<Vec<User>, DomainError> {
        self.user_repository.find_all().await
    }
}

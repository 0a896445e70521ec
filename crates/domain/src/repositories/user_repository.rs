use crate::entities::User;
use crate::errors::DomainError;
use async_trait::async_trait;

/// Repository trait - defines what we need from persistence layer
/// This is a PORT in hexagonal architecture
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;
    /// Persists a new user. Fails with `UsernameAlreadyExists` when the
    /// store rejects a duplicate username.
    async fn save(&self, user: &User) -> Result<User, DomainError>;
    /// All users in insertion order.
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;
}

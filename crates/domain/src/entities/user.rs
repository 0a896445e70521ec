use serde::{Deserialize, Serialize};

/// Core User entity - represents the business domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i32>, // None for new users before persistence
    pub username: String,
}

impl User {
    pub fn new(username: String) -> Self {
        Self {
            id: None,
            username,
        }
    }

    pub fn with_id(id: i32, username: String) -> Self {
        Self {
            id: Some(id),
            username,
        }
    }

    pub fn validate(&self) -> Result<(), crate::DomainError> {
        if self.username.trim().is_empty() {
            return Err(crate::DomainError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

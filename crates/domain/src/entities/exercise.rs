use crate::errors::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged exercise. `user_id` is a plain reference to a `User`;
/// the relation is checked by lookup, never cascaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Option<i32>,
    pub user_id: i32,
    pub description: String,
    pub duration: i32, // minutes
    pub date: NaiveDate,
}

impl Exercise {
    pub fn new(user_id: i32, description: String, duration: i32, date: NaiveDate) -> Self {
        Self {
            id: None,
            user_id,
            description,
            duration,
            date,
        }
    }

    pub fn with_id(
        id: i32,
        user_id: i32,
        description: String,
        duration: i32,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Some(id),
            user_id,
            description,
            duration,
            date,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.description.trim().is_empty() {
            return Err(DomainError::MissingRequiredFields(
                "description is required".to_string(),
            ));
        }

        if self.duration <= 0 {
            return Err(DomainError::InvalidDuration(self.duration.to_string()));
        }

        Ok(())
    }
}

/// Raw exercise fields as submitted by a client, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewExercise {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// Parse a duration in whole minutes. Only positive integers are accepted.
pub fn parse_duration(raw: &str) -> Result<i32, DomainError> {
    let value = raw.trim();
    match value.parse::<i32>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(DomainError::InvalidDuration(value.to_string())),
    }
}

/// Treats empty and whitespace-only optional fields as absent.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

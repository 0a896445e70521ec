use domain::dates::format_date;
use domain::{Exercise, ExerciseLog, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub id: Option<i32>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

/// Response to a new exercise: the owning user's id and name alongside the
/// stored exercise.
#[derive(Debug, Serialize)]
pub struct ExerciseInfo {
    pub id: Option<i32>,
    pub username: String,
    pub date: String,
    pub duration: i32,
    pub description: String,
}

impl From<(User, Exercise)> for ExerciseInfo {
    fn from((user, exercise): (User, Exercise)) -> Self {
        Self {
            id: user.id,
            username: user.username,
            date: format_date(exercise.date),
            duration: exercise.duration,
            description: exercise.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct LogInfo {
    pub id: Option<i32>,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl From<ExerciseLog> for LogInfo {
    fn from(log: ExerciseLog) -> Self {
        let count = log.count();
        let entries = log
            .exercises
            .into_iter()
            .map(|exercise| LogEntry {
                description: exercise.description,
                duration: exercise.duration,
                date: format_date(exercise.date),
            })
            .collect();

        Self {
            id: log.user.id,
            username: log.user.username,
            count,
            log: entries,
        }
    }
}

// Database schema for the exercise tracker
diesel::table! {
    users (id) {
        id -> Integer,
        username -> Text,          // Unique across all users
    }
}

diesel::table! {
    exercises (id) {
        id -> Integer,
        user_id -> Integer,        // Weak reference to users.id, checked by lookup
        description -> Text,
        duration -> Integer,       // Minutes
        date -> Date,              // Calendar date, no time component
    }
}

diesel::joinable!(exercises -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, exercises,);

/// Tables are created on start-up when missing. There is no migration
/// history; the layout above is the only one.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    username TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    user_id INTEGER NOT NULL REFERENCES users(id),
    description TEXT NOT NULL,
    duration INTEGER NOT NULL,
    date DATE NOT NULL
);

CREATE INDEX IF NOT EXISTS exercises_user_date ON exercises (user_id, date);
"#;

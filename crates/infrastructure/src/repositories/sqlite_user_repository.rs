use crate::database::{users, with_connection, SqlitePool, StoreError};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use domain::{DomainError, User, UserRepository};

// Database model - separate from domain entity
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct UserModel {
    id: i32,
    username: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
struct NewUserModel {
    username: String,
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::with_id(model.id, model.username)
    }
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let result = with_connection(&self.pool, move |conn| {
            users::table
                .filter(users::id.eq(id))
                .select(UserModel::as_select())
                .first::<UserModel>(conn)
                .optional()
        })
        .await?;

        Ok(result.map(Into::into))
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let username = user.username.clone();
        let new_user = NewUserModel {
            username: username.clone(),
        };

        let result = with_connection(&self.pool, move |conn| {
            conn.immediate_transaction::<_, DieselError, _>(|conn| {
                diesel::insert_into(users::table)
                    .values(&new_user)
                    .execute(conn)?;

                // Read the row back through the unique username
                users::table
                    .filter(users::username.eq(&new_user.username))
                    .select(UserModel::as_select())
                    .first::<UserModel>(conn)
            })
        })
        .await;

        match result {
            Ok(model) => Ok(model.into()),
            Err(StoreError::Query(DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            ))) => Err(DomainError::UsernameAlreadyExists(username)),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let result = with_connection(&self.pool, |conn| {
            users::table
                .order(users::id.asc())
                .select(UserModel::as_select())
                .load::<UserModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

use crate::database::{exercises, with_connection, SqlitePool};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use domain::{DomainError, Exercise, ExerciseRepository, LogQuery};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = exercises)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct ExerciseModel {
    id: i32,
    user_id: i32,
    description: String,
    duration: i32,
    date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = exercises)]
struct NewExerciseModel {
    user_id: i32,
    description: String,
    duration: i32,
    date: NaiveDate,
}

impl From<ExerciseModel> for Exercise {
    fn from(model: ExerciseModel) -> Self {
        Exercise::with_id(
            model.id,
            model.user_id,
            model.description,
            model.duration,
            model.date,
        )
    }
}

impl From<&Exercise> for NewExerciseModel {
    fn from(exercise: &Exercise) -> Self {
        NewExerciseModel {
            user_id: exercise.user_id,
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

pub struct SqliteExerciseRepository {
    pool: SqlitePool,
}

impl SqliteExerciseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseRepository for SqliteExerciseRepository {
    async fn save(&self, exercise: &Exercise) -> Result<Exercise, DomainError> {
        let new_exercise = NewExerciseModel::from(exercise);

        let result = with_connection(&self.pool, move |conn| {
            conn.immediate_transaction::<_, diesel::result::Error, _>(|conn| {
                diesel::insert_into(exercises::table)
                    .values(&new_exercise)
                    .execute(conn)?;

                // Get the last inserted row
                exercises::table
                    .order(exercises::id.desc())
                    .select(ExerciseModel::as_select())
                    .first::<ExerciseModel>(conn)
            })
        })
        .await?;

        Ok(result.into())
    }

    async fn find_by_user(
        &self,
        user_id: i32,
        query: &LogQuery,
    ) -> Result<Vec<Exercise>, DomainError> {
        let query = *query;

        let result = with_connection(&self.pool, move |conn| {
            let mut statement = exercises::table
                .filter(exercises::user_id.eq(user_id))
                .select(ExerciseModel::as_select())
                .into_boxed::<Sqlite>();

            if let Some(from) = query.from {
                statement = statement.filter(exercises::date.ge(from));
            }
            if let Some(to) = query.to {
                statement = statement.filter(exercises::date.le(to));
            }
            if let Some(limit) = query.limit {
                statement = statement.limit(i64::try_from(limit).unwrap_or(i64::MAX));
            }

            statement
                .order((exercises::date.asc(), exercises::id.asc()))
                .load::<ExerciseModel>(conn)
        })
        .await?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

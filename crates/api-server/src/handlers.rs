use crate::dto::{CreateUserForm, ExerciseInfo, LogInfo, LogParams, UserInfo};
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Form, Json,
};
use domain::{LogQuery, NewExercise};
use tracing::info;

const LANDING_PAGE: &str = include_str!("../views/index.html");

pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> Result<Json<UserInfo>, ApiError> {
    let username = form.username.unwrap_or_default();
    let user = state.app.user_service.create_user(username).await?;
    info!("👤 Created user {} ({:?})", user.username, user.id);
    Ok(Json(user.into()))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserInfo>>, ApiError> {
    let users = state.app.user_service.get_all_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub async fn add_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Form(form): Form<NewExercise>,
) -> Result<Json<ExerciseInfo>, ApiError> {
    let (user, exercise) = state
        .app
        .exercise_service
        .add_exercise(&user_id, form)
        .await?;
    info!(
        "🏃 Logged {} min of '{}' for {}",
        exercise.duration, exercise.description, user.username
    );
    Ok(Json((user, exercise).into()))
}

pub async fn get_logs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<LogParams>,
) -> Result<Json<LogInfo>, ApiError> {
    let query = LogQuery::parse(
        params.from.as_deref(),
        params.to.as_deref(),
        params.limit.as_deref(),
    )?;
    let log = state.app.exercise_service.get_log(&user_id, &query).await?;
    Ok(Json(log.into()))
}

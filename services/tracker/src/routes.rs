//! Tracker service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use uuid::Uuid;

use crate::{
    dates::{format_date, parse_date, today},
    error::{ApiError, ApiResult},
    extract::JsonOrForm,
    models::{
        CreateUserRequest, User, UserResponse,
        exercise::{
            ExerciseResponse, LogEntry, LogExerciseRequest, LogFilter, LogQuery, LogResponse,
            NewExercise,
        },
    },
    state::AppState,
    validation::{resolve_limit, validate_description, validate_duration, validate_username},
};

const LANDING_PAGE: &str = include_str!("../views/index.html");

/// Create the router for the tracker service
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/users", post(create_user).get(get_users))
        .route("/users/:id/exercises", post(log_exercise))
        .route("/users/:id/logs", get(get_logs));

    Router::new()
        .route("/", get(landing_page))
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Landing page
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.is_healthy().await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "exercise-tracker",
                "store": state.backend.as_str(),
            })),
        ),
        _ => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unavailable",
                "service": "exercise-tracker",
                "store": state.backend.as_str(),
            })),
        ),
    }
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let username = validate_username(payload.username.as_deref()).map_err(ApiError::Validation)?;

    let user = state
        .user_repository
        .create(&username)
        .await
        .map_err(|e| {
            if e.is_conflict() {
                ApiError::Validation("Username already taken".to_string())
            } else {
                tracing::error!("Failed to create user: {}", e);
                ApiError::Database(e)
            }
        })?;

    info!("Created user {} ({})", user.username, user.id);
    Ok(Json(user.into()))
}

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.user_repository.get_all().await.map_err(|e| {
        tracing::error!("Failed to get users: {}", e);
        ApiError::Database(e)
    })?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Resolve a path id to an existing user
async fn find_user(state: &AppState, id: &str) -> ApiResult<User> {
    let not_found = || ApiError::NotFound("User not found".to_string());
    let id = Uuid::parse_str(id.trim()).map_err(|_| not_found())?;

    state
        .user_repository
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user: {}", e);
            ApiError::Database(e)
        })?
        .ok_or_else(not_found)
}

/// Log an exercise for a user
pub async fn log_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(payload): JsonOrForm<LogExerciseRequest>,
) -> ApiResult<Json<ExerciseResponse>> {
    let user = find_user(&state, &id).await?;

    let description =
        validate_description(payload.description.as_deref()).map_err(ApiError::Validation)?;
    let duration = validate_duration(payload.duration.as_ref()).map_err(ApiError::Validation)?;
    let date = payload
        .date
        .as_deref()
        .and_then(parse_date)
        .unwrap_or_else(today);

    let exercise = state
        .exercise_repository
        .create(&NewExercise {
            user_id: user.id,
            description,
            duration,
            date,
        })
        .await
        .map_err(|e| {
            tracing::error!("Failed to log exercise: {}", e);
            ApiError::Database(e)
        })?;

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: format_date(exercise.date),
    }))
}

/// Parse an optional `from`/`to` bound; empty values count as absent
fn parse_bound(name: &str, value: Option<&str>) -> ApiResult<Option<chrono::NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| ApiError::Validation(format!("Invalid '{}' date: {}", name, raw))),
    }
}

/// Get the exercise log of a user
pub async fn get_logs(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LogQuery>,
) -> ApiResult<Json<LogResponse>> {
    let user = find_user(&state, &id).await?;

    let filter = LogFilter {
        user_id: user.id,
        from: parse_bound("from", query.from.as_deref())?,
        to: parse_bound("to", query.to.as_deref())?,
        limit: resolve_limit(query.limit.as_deref()),
    };

    let exercises = state
        .exercise_repository
        .find_by_user(&filter)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get exercise log: {}", e);
            ApiError::Database(e)
        })?;

    let log: Vec<LogEntry> = exercises
        .into_iter()
        .map(|e| LogEntry {
            description: e.description,
            duration: e.duration,
            date: format_date(e.date),
        })
        .collect();

    Ok(Json(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}

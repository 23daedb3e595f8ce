//! Song HTTP Routes
//!
//! CRUD endpoints over the song store, mounted under `/api`.
//!
//! | Method | Path          | Success                        |
//! |--------|---------------|--------------------------------|
//! | GET    | `/songs`      | 200, array of songs            |
//! | POST   | `/songs`      | 201, `{"status":"success"}`    |
//! | GET    | `/songs/:id`  | 200, song                      |
//! | PUT    | `/songs/:id`  | 200, `{"status":"updated"}`    |
//! | DELETE | `/songs/:id`  | 200, `{"status":"deleted"}`    |

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::store::Song;

use super::errors::{ApiError, ApiResult};
use super::state::{AppState, SharedState};

// ==================
// Request/Response Types
// ==================

/// Body of create and update requests
#[derive(Debug, Default, Deserialize)]
pub struct SongRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub chords: Option<String>,
}

/// A request body that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongInput {
    pub title: String,
    pub chords: String,
}

impl SongRequest {
    /// Decode a JSON body. Only objects are accepted; serde would otherwise
    /// map a two-element array onto the fields positionally.
    pub fn from_json(value: Value) -> ApiResult<Self> {
        if !value.is_object() {
            return Err(ApiError::InvalidBody("body must be a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    /// Both fields must be present; the title must not be blank.
    pub fn validate(self) -> ApiResult<SongInput> {
        let title = self.title.ok_or(ApiError::MissingField("title"))?;
        let chords = self.chords.ok_or(ApiError::MissingField("chords"))?;

        if title.trim().is_empty() {
            return Err(ApiError::InvalidField {
                field: "title",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(SongInput { title, chords })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    fn new(status: &'static str) -> Json<Self> {
        Json(Self { status })
    }
}

// ==================
// Song Routes
// ==================

/// Create song routes
pub fn song_routes(state: SharedState) -> Router {
    Router::new()
        .route("/songs", get(list_songs_handler).post(create_song_handler))
        .route(
            "/songs/:id",
            get(get_song_handler)
                .put(update_song_handler)
                .delete(delete_song_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn parse_body(body: Result<Json<Value>, JsonRejection>) -> ApiResult<SongInput> {
    let Json(value) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    SongRequest::from_json(value)?.validate()
}

fn parse_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::InvalidPath(rejection.body_text()))
}

// ==================
// Operations
// ==================

async fn get_song(state: &AppState, id: Result<Path<i64>, PathRejection>) -> ApiResult<Song> {
    let id = parse_id(id)?;
    state.store.get(id).await?.ok_or(ApiError::NotFound(id))
}

async fn create_song(
    state: &AppState,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<i64> {
    let input = parse_body(body)?;
    let id = state.store.insert(&input.title, &input.chords).await?;
    Ok(id)
}

async fn update_song(
    state: &AppState,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<i64> {
    let id = parse_id(id)?;
    let input = parse_body(body)?;
    if state.store.update(id, &input.title, &input.chords).await? {
        Ok(id)
    } else {
        Err(ApiError::NotFound(id))
    }
}

async fn delete_song(
    state: &AppState,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<(i64, bool)> {
    let id = parse_id(id)?;
    let removed = state.store.delete_by_id(id).await?;
    Ok((id, removed))
}

// ==================
// Handlers
// ==================

async fn list_songs_handler(State(state): State<SharedState>) -> ApiResult<Json<Vec<Song>>> {
    let result = state.store.list_all().await.map_err(ApiError::from);
    let songs = state.record(result)?;

    state.metrics.increment_songs_listed();
    Ok(Json(songs))
}

async fn get_song_handler(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Song>> {
    let result = get_song(&state, id).await;
    state.record(result).map(Json)
}

async fn create_song_handler(
    State(state): State<SharedState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    let result = create_song(&state, body).await;
    let id = state.record(result)?;

    state.metrics.increment_songs_created();
    info!(id, "song created");
    Ok((StatusCode::CREATED, StatusResponse::new("success")))
}

async fn update_song_handler(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<StatusResponse>> {
    let result = update_song(&state, id, body).await;
    let id = state.record(result)?;

    state.metrics.increment_songs_updated();
    info!(id, "song updated");
    Ok(StatusResponse::new("updated"))
}

async fn delete_song_handler(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<StatusResponse>> {
    let result = delete_song(&state, id).await;
    let (id, removed) = state.record(result)?;

    state.metrics.increment_songs_deleted();
    info!(id, removed, "song deleted");
    Ok(StatusResponse::new("deleted"))
}

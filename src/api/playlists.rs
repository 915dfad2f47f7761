use super::extract::{JsonBody, PathParams, QueryParams};
use super::AppState;
use crate::error::{AppError, Result};
use crate::models::{
    AddPlaylistSongRequest, AppendOutcome, CreatePlaylistRequest, Playlist, PlaylistOwnerQuery,
    PlaylistSong, UpdatePlaylistRequest,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn playlist_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/playlists", get(list_playlists).post(create_playlist))
        .route("/playlists/:id", put(update_playlist).delete(delete_playlist))
        .route("/playlists/:id/songs", get(list_playlist_songs).post(add_playlist_song))
        .route("/playlists/:id/songs/:song_id", delete(remove_playlist_song))
}

fn success() -> Json<Value> {
    Json(json!({ "success": true }))
}

async fn list_playlists(
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<PlaylistOwnerQuery>,
) -> Result<Json<Vec<Playlist>>> {
    let owner_id = query
        .user_id
        .ok_or_else(|| AppError::Validation("user_id required".to_string()))?;

    let playlists = state.playlists.list_for_owner(owner_id).await?;
    Ok(Json(playlists))
}

async fn create_playlist(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<Playlist>)> {
    let new = req.into_new_playlist()?;
    let playlist = state.playlists.create(&new).await?;

    Ok((StatusCode::CREATED, Json(playlist)))
}

async fn update_playlist(
    State(state): State<Arc<AppState>>,
    PathParams(id): PathParams<i32>,
    JsonBody(req): JsonBody<UpdatePlaylistRequest>,
) -> Result<Json<Value>> {
    let name = req.into_name()?;
    state.playlists.rename(id, &name).await?;

    Ok(success())
}

async fn delete_playlist(
    State(state): State<Arc<AppState>>,
    PathParams(id): PathParams<i32>,
) -> Result<Json<Value>> {
    state.playlists.delete(id).await?;
    Ok(success())
}

async fn list_playlist_songs(
    State(state): State<Arc<AppState>>,
    PathParams(id): PathParams<i32>,
) -> Result<Json<Vec<PlaylistSong>>> {
    let songs = state.playlists.songs(id).await?;
    Ok(Json(songs))
}

async fn add_playlist_song(
    State(state): State<Arc<AppState>>,
    PathParams(id): PathParams<i32>,
    JsonBody(req): JsonBody<AddPlaylistSongRequest>,
) -> Result<(StatusCode, Json<Value>)> {
    let song_id = req
        .song_id
        .ok_or_else(|| AppError::Validation("song_id required".to_string()))?;

    match state.playlists.append_song(id, song_id).await? {
        AppendOutcome::Added { position } => Ok((
            StatusCode::CREATED,
            Json(json!({ "success": true, "position": position })),
        )),
        AppendOutcome::AlreadyPresent => Err(AppError::Conflict(
            "Song already in playlist".to_string(),
        )),
    }
}

async fn remove_playlist_song(
    State(state): State<Arc<AppState>>,
    PathParams((id, song_id)): PathParams<(i32, i32)>,
) -> Result<Json<Value>> {
    state.playlists.remove_song(id, song_id).await?;
    Ok(success())
}
